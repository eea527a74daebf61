use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case- and diacritic-insensitive form used for every cross-dataset name
/// comparison, so encoding variants like "Bié" and "Bie" compare equal:
/// Unicode NFD decomposition, combining marks stripped, lower-cased.
/// Idempotent; empty input normalizes to the empty string.
pub fn normalize(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Whether two names are the same under [`normalize`].
pub fn matches(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics_and_case() {
        assert_eq!(normalize("Bié"), "bie");
        assert_eq!(normalize("Bie"), "bie");
        assert_eq!(normalize("BIÉ"), "bie");
        assert_eq!(normalize("Uíge"), "uige");
        assert_eq!(normalize("Quiçama"), "quicama");
        assert_eq!(normalize("Caála"), "caala");
    }

    #[test]
    fn idempotent() {
        for name in ["Bié", "Icolo e Bengo", "Compão", "Ilha de Luanda", ""] {
            let once = normalize(name);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn matches_across_variants() {
        assert!(matches("Bié", "bie"));
        assert!(matches("CACUACO", "Cacuaco"));
        assert!(!matches("Luanda", "Lobito"));
    }
}
