use crate::constants::{is_asat, KILLED_NGA, PATSINT};

/// How the part before a Patsint becomes a lookup unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    /// Prefix already ends with Asat and is a closed syllable on its own.
    AlreadyClosed,
    /// Prefix carries no Asat; it is closed with a killed NGA.
    ImplicitNasal,
}

/// Lookup units derived from one syllable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition {
    Simple(String),
    Stacked {
        prefix: String,
        suffix: String,
        rule: PrefixRule,
    },
}

impl Decomposition {
    /// Units in lookup order. Only the first keeps dictionary casing.
    pub fn units(&self) -> Vec<&str> {
        match self {
            Decomposition::Simple(unit) => vec![unit.as_str()],
            Decomposition::Stacked { prefix, suffix, .. } => vec![prefix.as_str(), suffix.as_str()],
        }
    }

    pub fn into_units(self) -> Vec<String> {
        match self {
            Decomposition::Simple(unit) => vec![unit],
            Decomposition::Stacked { prefix, suffix, .. } => vec![prefix, suffix],
        }
    }

    pub fn is_stacked(&self) -> bool {
        matches!(self, Decomposition::Stacked { .. })
    }
}

/// Splits a syllable at its first Patsint.
///
/// `သင်္ဘော` becomes `သင်` + `ဘော`; `သတ္တိ` becomes `သတင်` + `တိ`. A Patsint
/// with nothing on one side leaves the syllable whole.
pub fn decompose(syllable: &str) -> Decomposition {
    let Some(pos) = syllable.find(PATSINT) else {
        return Decomposition::Simple(syllable.to_string());
    };

    let prefix = &syllable[..pos];
    let suffix = &syllable[pos + PATSINT.len_utf8()..];
    if prefix.is_empty() || suffix.is_empty() {
        return Decomposition::Simple(syllable.to_string());
    }

    let (prefix, rule) = close_prefix(prefix);
    Decomposition::Stacked {
        prefix,
        suffix: suffix.to_string(),
        rule,
    }
}

fn close_prefix(prefix: &str) -> (String, PrefixRule) {
    if prefix.chars().next_back().is_some_and(is_asat) {
        (prefix.to_string(), PrefixRule::AlreadyClosed)
    } else {
        (format!("{prefix}{KILLED_NGA}"), PrefixRule::ImplicitNasal)
    }
}
