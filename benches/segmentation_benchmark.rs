use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mmnames_rs::dictionary::MemorySource;
use mmnames_rs::segmenter::segment;
use mmnames_rs::Converter;

fn benchmark_segmentation(c: &mut Criterion) {
    let text = "ခင်မောင်သိန်းထွန်းဝင်းသင်္ဘော";

    c.bench_function("segment_long_name", |b| {
        b.iter(|| {
            segment(black_box(text));
        })
    });
}

fn benchmark_conversion(c: &mut Criterion) {
    let source = MemorySource::new()
        .with_group('ခ', "ခင်\tKhin\n")
        .with_group('မ', "မောင်\tMaung\n")
        .with_group('သ', "သိန်း\tThein\nသင်\tThin\n")
        .with_group('ထ', "ထွန်း\tHtwon\n")
        .with_group('ဝ', "ဝင်း\tWin\n")
        .with_group('ဘ', "ဘော\tBaw\n");
    let mut converter = Converter::with_source(source);
    let text = "ခင်မောင်သိန်းထွန်းဝင်းသင်္ဘော";

    c.bench_function("convert_warm_dictionary", |b| {
        b.iter(|| {
            converter.convert(black_box(text));
        })
    });
}

criterion_group!(benches, benchmark_segmentation, benchmark_conversion);
criterion_main!(benches);
