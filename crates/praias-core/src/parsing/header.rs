use crate::model::BulletinMetadata;
use crate::parsing::normalize::collapse_whitespace;

const NUMBER_MARKERS: &[&str] = &["Nº", "N°"];
const PERIOD_MARKER: &str = "Período:";
const SAMPLING_MARKER: &str = "Tipos de amostras:";

/// Extract bulletin number, period and sampling types from the first page.
///
/// The page text is whitespace-collapsed, then the three markers are
/// located in order. Each field is the text between its marker and the
/// next one; the sampling types run to the first '.'. A missing marker
/// leaves only the fields it bounds empty.
pub fn parse_metadata(first_page_lines: &[&str]) -> BulletinMetadata {
    let text = collapse_whitespace(&first_page_lines.join(" "));
    let mut metadata = BulletinMetadata::default();

    let number = NUMBER_MARKERS
        .iter()
        .find_map(|marker| text.find(marker).map(|idx| (idx, idx + marker.len())));
    let search_from = number.map(|(_, end)| end).unwrap_or(0);

    let period = find_from(&text, PERIOD_MARKER, search_from);
    let sampling = find_from(
        &text,
        SAMPLING_MARKER,
        period.map(|(_, end)| end).unwrap_or(search_from),
    );

    if let (Some((_, number_end)), Some((period_start, _))) = (number, period) {
        metadata.bulletin_number = text[number_end..period_start].trim().to_string();
    }

    if let (Some((_, period_end)), Some((sampling_start, _))) = (period, sampling) {
        metadata.period = text[period_end..sampling_start].trim().to_string();
    }

    if let Some((_, sampling_end)) = sampling {
        let rest = text[sampling_end..].trim();
        let first_sentence = rest.split('.').next().unwrap_or_default();
        metadata.sampling_types = first_sentence.trim().to_string();
    }

    metadata
}

/// Locate `marker` at or after byte offset `from`, returning its (start, end).
fn find_from(text: &str, marker: &str, from: usize) -> Option<(usize, usize)> {
    let start = from + text.get(from..)?.find(marker)?;
    Some((start, start + marker.len()))
}
