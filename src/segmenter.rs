use crate::constants::*;

/// Splits a Burmese name into syllables.
///
/// Whitespace is removed first. A new syllable starts before every consonant
/// that is neither stacked under the previous character (Patsint) nor itself
/// closed or stacked by the next character (Asat / Patsint). Fragments are
/// never empty.
pub fn segment(text: &str) -> Vec<String> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut syllables = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = cleaned.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);

        if idx > start && is_syllable_start(prev, c, next) {
            syllables.push(cleaned[start..idx].to_string());
            start = idx;
        }
        prev = Some(c);
    }

    if start < cleaned.len() {
        syllables.push(cleaned[start..].to_string());
    }

    syllables
}

/// Zero-width boundary test evaluated before `c`.
#[inline]
pub fn is_syllable_start(prev: Option<char>, c: char, next: Option<char>) -> bool {
    !follows_patsint(prev) && is_consonant(c) && !precedes_killer_or_stacker(next)
}

#[inline]
fn follows_patsint(prev: Option<char>) -> bool {
    prev.is_some_and(is_patsint)
}

#[inline]
fn precedes_killer_or_stacker(next: Option<char>) -> bool {
    next.is_some_and(is_killer_or_stacker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_clauses() {
        // consonant at the very start
        assert!(is_syllable_start(None, 'က', Some('ျ')));
        // stacked consonant continues the cluster
        assert!(!is_syllable_start(Some('္'), 'ဘ', Some('ေ')));
        // consonant closed by Asat belongs to the running syllable
        assert!(!is_syllable_start(Some('ု'), 'င', Some('်')));
        // consonant about to be stacked
        assert!(!is_syllable_start(Some('တ'), 'တ', Some('္')));
        // non-consonants never start a syllable
        assert!(!is_syllable_start(Some('က'), 'ာ', None));
        assert!(!is_syllable_start(None, 'b', None));
        assert!(is_syllable_start(Some('း'), 'ထ', None));
    }

    #[test]
    fn test_simple_names() {
        assert_eq!(segment("နိုင်ဝင်းထွန်း"), vec!["နိုင်", "ဝင်း", "ထွန်း"]);
        assert_eq!(segment("ကျော်စွာ"), vec!["ကျော်", "စွာ"]);
    }

    #[test]
    fn test_stacked_clusters_stay_whole() {
        assert_eq!(segment("သင်္ဘော"), vec!["သင်္ဘော"]);
        assert_eq!(segment("သတ္တိ"), vec!["သတ္တိ"]);
    }

    #[test]
    fn test_degenerate_input() {
        assert!(segment("").is_empty());
        assert!(segment(" \t\n").is_empty());
        assert_eq!(segment("hello"), vec!["hello"]);
        assert_eq!(segment("ိုး"), vec!["ိုး"]);
        assert_eq!(segment("ာမ"), vec!["ာ", "မ"]);
        assert_eq!(segment("မblah"), vec!["မblah"]);
    }
}
