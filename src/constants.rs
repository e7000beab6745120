
// Myanmar Unicode Ranges
pub const MYANMAR_START: char = '\u{1000}';
pub const MYANMAR_END: char = '\u{109F}';

pub const CONSONANT_START: char = '\u{1000}'; // KA
pub const CONSONANT_END: char = '\u{1021}'; // A

/// Vowel-killing mark (Asat).
pub const ASAT: char = '\u{103A}';
/// Stacking mark (Patsint / virama).
pub const PATSINT: char = '\u{1039}';

pub const NGA: char = '\u{1004}';
/// Base consonant that independent vowels are filed under.
pub const LETTER_A: char = '\u{1021}';

/// Killed NGA, appended to a stacked prefix that carries no Asat of its own.
pub const KILLED_NGA: &str = "\u{1004}\u{103A}";

pub fn is_myanmar_char(c: char) -> bool {
    (MYANMAR_START..=MYANMAR_END).contains(&c)
}

pub fn is_consonant(c: char) -> bool {
    (CONSONANT_START..=CONSONANT_END).contains(&c)
}

pub fn is_asat(c: char) -> bool {
    c == ASAT
}

pub fn is_patsint(c: char) -> bool {
    c == PATSINT
}

/// Marks that make a consonant part of the following cluster rather than a
/// syllable start.
pub fn is_killer_or_stacker(c: char) -> bool {
    is_asat(c) || is_patsint(c)
}

// Independent vowels: ဣ ဤ ဥ ဦ ဧ ဨ ဩ ဪ
pub fn is_independent_vowel(c: char) -> bool {
    matches!(
        c,
        '\u{1023}' | '\u{1024}' | '\u{1025}' | '\u{1026}' | '\u{1027}' | '\u{1028}' | '\u{1029}' | '\u{102A}'
    )
}

/// Leading character used to pick a dictionary group, with independent vowels
/// folded onto `အ`.
pub fn normalize_leading(c: char) -> char {
    if is_independent_vowel(c) {
        LETTER_A
    } else {
        c
    }
}
