use crate::model::Zone;
use crate::parsing::normalize::normalize_text;

/// Keywords per zone, in priority order. Matched as substrings of the
/// lowercased, accent-stripped beach name.
const ZONE_KEYWORDS: &[(Zone, &[&str])] = &[
    (
        Zone::East,
        &["futuro", "caca e pesca", "abreulandia", "sabiaguaba", "titanzinho"],
    ),
    (
        Zone::Center,
        &[
            "iracema",
            "meireles",
            "mucuripe",
            "volta da jurema",
            "beira mar",
            "estressados",
        ],
    ),
    (
        Zone::West,
        &[
            "barra do ceara",
            "pirambu",
            "cristo redentor",
            "leste oeste",
            "formosa",
            "colonia",
        ],
    ),
];

/// Classify a beach name into a zone. The first zone with a matching keyword
/// wins; names matching nothing are `Zone::Unknown`.
pub fn classify_zone(name: &str) -> Zone {
    let normalized = normalize_text(name);

    ZONE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|(zone, _)| *zone)
        .unwrap_or(Zone::Unknown)
}
