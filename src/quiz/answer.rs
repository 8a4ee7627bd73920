//! Answer normalization and comparison.
//!
//! Comparison is exact after normalization: no partial credit, no fuzzy
//! matching. Normalization makes the check insensitive to case, accents,
//! whitespace, hyphens, and punctuation such as apostrophes.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::types::PlayedRegion;

/// Maps a string to its canonical comparable form.
///
/// NFD-decomposes accented characters, strips the combining marks along
/// with whitespace and hyphens, lowercases, and finally drops anything
/// outside `[a-z0-9]`. Idempotent.
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c) && !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// True iff the answer matches the target's name after normalization.
pub fn check_answer(answer: &str, target: &PlayedRegion) -> bool {
    normalize(answer) == normalize(&target.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Region;

    fn region(name: &'static str) -> PlayedRegion {
        PlayedRegion::from_region(&Region { code: "00", name })
    }

    #[test]
    fn test_normalize_strips_accents() {
        assert_eq!(normalize("Ardèche"), "ardeche");
        assert_eq!(normalize("Pyrénées-Atlantiques"), "pyreneesatlantiques");
        assert_eq!(normalize("La Réunion"), "lareunion");
    }

    #[test]
    fn test_normalize_strips_whitespace_and_hyphens() {
        assert_eq!(normalize("  Val-de-Marne  "), "valdemarne");
        assert_eq!(normalize("Territoire de Belfort"), "territoiredebelfort");
    }

    #[test]
    fn test_normalize_strips_apostrophes() {
        assert_eq!(normalize("Côte-d'Or"), "cotedor");
        assert_eq!(normalize("Val-d'Oise"), "valdoise");
    }

    #[test]
    fn test_normalize_keeps_digits() {
        assert_eq!(normalize("zone 51"), "zone51");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  -- '' !!"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in ["Côte-d'Or", "  Paris  ", "Deux-Sèvres", "ÎLE", "", "abc123"] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn test_check_answer_accent_and_hyphen_insensitive() {
        assert!(check_answer("cote-dor", &region("Côte-d'Or")));
        assert!(check_answer("COTE D OR", &region("Côte-d'Or")));
        assert!(check_answer("ardeche", &region("Ardèche")));
    }

    #[test]
    fn test_check_answer_whitespace_insensitive() {
        assert!(check_answer("  Paris  ", &region("Paris")));
    }

    #[test]
    fn test_check_answer_rejects_near_misses() {
        assert!(!check_answer("Pariss", &region("Paris")));
        assert!(!check_answer("Pari", &region("Paris")));
        assert!(!check_answer("", &region("Paris")));
    }
}
