use praias_core::dataset::DatasetRow;
use praias_core::model::BulletinRecord;
use praias_core::store::BeachSummary;

/// Format freshly built records, with the shared bulletin fields on top.
pub fn format_records(records: &[BulletinRecord]) -> String {
    let mut out = String::new();

    if let Some(first) = records.first() {
        out.push_str(&format!(
            "Boletim Nº {}  |  Período: {} ({} dia(s))\n",
            or_dash(&first.bulletin_number),
            or_dash(&first.period),
            first.period_days.len()
        ));
        if !first.sampling_types.is_empty() {
            out.push_str(&format!("Tipos de amostras: {}\n", first.sampling_types));
        }
        out.push('\n');
    }

    let lines: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.name.clone(),
                r.status.to_string(),
                r.zone.to_string(),
                r.coordinates.clone().unwrap_or_else(|| "-".into()),
            ]
        })
        .collect();
    out.push_str(&columns(
        ["id", "Nome", "Status", "Zona", "Coordenadas"],
        &lines,
    ));
    out.push_str(&format!("\n{} praia(s)", records.len()));
    out
}

pub fn format_summaries(summaries: &[BeachSummary]) -> String {
    let lines: Vec<[String; 3]> = summaries
        .iter()
        .map(|s| [id_or_dash(s.id), s.name.clone(), or_dash(&s.zone).to_string()])
        .collect();
    columns(["id", "Nome", "Zona"], &lines)
}

pub fn format_rows(rows: &[&DatasetRow]) -> String {
    let lines: Vec<[String; 4]> = rows
        .iter()
        .map(|r| {
            [
                id_or_dash(r.id),
                r.name.clone(),
                or_dash(&r.status).to_string(),
                or_dash(&r.zone).to_string(),
            ]
        })
        .collect();
    columns(["id", "Nome", "Status", "Zona"], &lines)
}

pub fn format_detail(row: &DatasetRow) -> String {
    let fields = [
        ("id", id_or_dash(row.id)),
        ("Nome", row.name.clone()),
        ("Status", row.status.clone()),
        ("Zona", row.zone.clone()),
        ("Período", row.period.clone()),
        ("Dias", row.period_days().join(", ")),
        ("Boletim", row.bulletin_number.clone()),
        ("Amostras", row.sampling_types.clone()),
        ("Extraído em", row.extraction_date.clone()),
        ("Coordenadas", row.coordinates.clone()),
    ];

    fields
        .iter()
        .map(|(label, value)| format!("  {:<12} {}", label, or_dash(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Left-aligned columns sized to the widest cell (counted in chars).
fn columns<const N: usize>(headers: [&str; N], lines: &[[String; N]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for line in lines {
        for (w, cell) in widths.iter_mut().zip(line.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!("{}{}", cell, " ".repeat(w - cell.chars().count())))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![render(headers.to_vec())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for line in lines {
        out.push(render(line.iter().map(|c| c.as_str()).collect()));
    }
    out.join("\n")
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() {
        "-"
    } else {
        s
    }
}

fn id_or_dash(id: Option<u32>) -> String {
    id.map(|i| i.to_string()).unwrap_or_else(|| "-".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_align_on_chars() {
        let lines = vec![
            ["1".to_string(), "Barra do Ceará".to_string()],
            ["2".to_string(), "Pirambu".to_string()],
        ];
        let out = columns(["id", "Nome"], &lines);
        let rendered: Vec<&str> = out.lines().collect();
        assert_eq!(rendered[0], "id  Nome");
        assert_eq!(rendered[1], "--  --------------");
        assert_eq!(rendered[2], "1   Barra do Ceará");
        assert_eq!(rendered[3], "2   Pirambu");
    }

    #[test]
    fn test_detail_marks_missing_fields() {
        let row = DatasetRow {
            id: Some(3),
            name: "Pirambu".into(),
            ..DatasetRow::default()
        };
        let out = format_detail(&row);
        assert!(out.contains("  Nome         Pirambu"));
        assert!(out.contains("  Coordenadas  -"));
    }
}
