use std::path::Path;

use serde::Serialize;
use tracing::debug_span;

use crate::config::{resolve_data_dir, validate_data_dir};
use crate::dictionary::{group_key, DirectorySource, Dictionary, GroupSource};
use crate::error::ConfigError;
use crate::segmenter;
use crate::stacking::decompose;

/// Burmese name to Latin spelling converter.
///
/// Holds the lazily loaded dictionary, so conversion takes `&mut self`.
/// Parallel callers use one instance per worker (see `Clone`).
#[derive(Debug, Clone)]
pub struct Converter<S = DirectorySource> {
    dictionary: Dictionary<S>,
}

/// Per-name breakdown produced by [`Converter::explain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub syllables: Vec<SyllableRendering>,
    pub latin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableRendering {
    pub syllable: String,
    pub units: Vec<UnitRendering>,
    pub latin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitRendering {
    pub unit: String,
    pub group: Option<char>,
    pub latin: String,
    pub matched: bool,
}

impl Converter<DirectorySource> {
    /// Uses `data_dir`, else `MMNAMES_DATA_DIR`, else the bundled `data/`.
    pub fn new(data_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let root = validate_data_dir(resolve_data_dir(data_dir))?;
        Ok(Converter::with_source(DirectorySource::new(root)))
    }
}

impl<S: GroupSource> Converter<S> {
    pub fn with_source(source: S) -> Self {
        Converter {
            dictionary: Dictionary::new(source),
        }
    }

    pub fn dictionary(&self) -> &Dictionary<S> {
        &self.dictionary
    }

    pub fn segment(&self, name: &str) -> Vec<String> {
        segmenter::segment(name)
    }

    /// Latin spelling of `name`, syllables joined by single spaces.
    pub fn convert(&mut self, name: &str) -> String {
        self.explain(name).latin
    }

    pub fn explain(&mut self, name: &str) -> Conversion {
        let _span = debug_span!("convert", name).entered();

        let syllables: Vec<SyllableRendering> = segmenter::segment(name)
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| self.render_syllable(s))
            .collect();

        let latin = syllables
            .iter()
            .map(|s| s.latin.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Conversion {
            input: name.to_string(),
            syllables,
            latin,
        }
    }

    fn render_syllable(&mut self, syllable: &str) -> SyllableRendering {
        let units: Vec<UnitRendering> = decompose(syllable)
            .into_units()
            .into_iter()
            .enumerate()
            .map(|(i, unit)| {
                let mut rendering = self.resolve_unit(unit);
                // second half of a stacked pair reads as part of the same word
                if i > 0 {
                    rendering.latin = rendering.latin.to_lowercase();
                }
                rendering
            })
            .collect();

        let latin = units.iter().map(|u| u.latin.as_str()).collect();
        SyllableRendering {
            syllable: syllable.to_string(),
            units,
            latin,
        }
    }

    fn resolve_unit(&mut self, unit: String) -> UnitRendering {
        let unit = unit.trim().to_string();
        let group = group_key(&unit);
        if let Some(key) = group {
            self.dictionary.ensure_loaded(key);
        }

        // unknown units pass through untouched
        let (latin, matched) = match self.dictionary.lookup(&unit) {
            Some(latin) => (latin.to_string(), true),
            None => (unit.clone(), false),
        };

        UnitRendering {
            unit,
            group,
            latin,
            matched,
        }
    }
}
