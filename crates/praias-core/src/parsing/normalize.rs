use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase and strip diacritics, keeping every other character in place.
///
/// "Barra do Ceará" -> "barra do ceara". Whitespace is left untouched so
/// callers can still split or search on it.
pub fn normalize_text(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Collapse every run of whitespace (including newlines) into one space and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents() {
        assert_eq!(normalize_text("Barra do Ceará"), "barra do ceara");
        assert_eq!(normalize_text("Colônia"), "colonia");
        assert_eq!(normalize_text("Caça e Pesca"), "caca e pesca");
    }

    #[test]
    fn test_preserves_whitespace_layout() {
        assert_eq!(normalize_text("  Praia\tdo  Futuro "), "  praia\tdo  futuro ");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Praia   X \n"), "Praia X");
        assert_eq!(collapse_whitespace("Nº 42\n\nPeríodo:"), "Nº 42 Período:");
        assert_eq!(collapse_whitespace(""), "");
    }
}
