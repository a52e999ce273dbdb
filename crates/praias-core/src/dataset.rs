//! Assembling beach rows into the published dataset and persisting it as CSV.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::atomic::write_atomically;
use crate::classify::classify_zone;
use crate::coordinates::{point_code, CoordinateTable};
use crate::error::PraiasError;
use crate::model::{BulletinRecord, Status, Zone};
use crate::parsing::period::expand_period;
use crate::parsing::ParsedBulletin;

/// Enrich parsed rows into final records: zone, shared bulletin fields,
/// sequential ids from 1 and coordinates where the point code is known.
pub fn build_records(
    parsed: &ParsedBulletin,
    coordinates: &CoordinateTable,
    extraction_date: NaiveDate,
) -> Vec<BulletinRecord> {
    let period_days = expand_period(&parsed.metadata.period);

    parsed
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let code = point_code(&row.name);
            let coords = coordinates.get(&code).map(|c| c.to_string());
            BulletinRecord {
                id: i as u32 + 1,
                zone: classify_zone(&row.name),
                name: row.name.clone(),
                code,
                status: row.status,
                period: parsed.metadata.period.clone(),
                period_days: period_days.clone(),
                bulletin_number: parsed.metadata.bulletin_number.clone(),
                sampling_types: parsed.metadata.sampling_types.clone(),
                extraction_date,
                coordinates: coords,
            }
        })
        .collect()
}

/// One line of the dataset file, as the serving layer sees it.
///
/// Every field is optional on read so a file written by an older or
/// hand-edited pipeline still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetRow {
    pub id: Option<u32>,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Zona")]
    pub zone: String,
    #[serde(rename = "Periodo")]
    pub period: String,
    /// Comma-joined ISO dates.
    #[serde(rename = "Dias_Periodo")]
    pub period_days: String,
    #[serde(rename = "Numero_Boletim")]
    pub bulletin_number: String,
    #[serde(rename = "Tipos_Amostragem")]
    pub sampling_types: String,
    #[serde(rename = "Data_Extracao")]
    pub extraction_date: String,
    /// "lat, lon", or empty when the point code is not in the coordinate table.
    #[serde(rename = "Coordenadas")]
    pub coordinates: String,
}

impl From<&BulletinRecord> for DatasetRow {
    fn from(record: &BulletinRecord) -> Self {
        DatasetRow {
            id: Some(record.id),
            name: record.name.clone(),
            status: record.status.label().to_string(),
            zone: record.zone.label().to_string(),
            period: record.period.clone(),
            period_days: record
                .period_days
                .iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect::<Vec<_>>()
                .join(", "),
            bulletin_number: record.bulletin_number.clone(),
            sampling_types: record.sampling_types.clone(),
            extraction_date: record.extraction_date.format("%Y-%m-%d").to_string(),
            coordinates: record.coordinates.clone().unwrap_or_default(),
        }
    }
}

impl DatasetRow {
    pub fn status(&self) -> Option<Status> {
        match self.status.as_str() {
            s if s == Status::ProperForBathing.label() => Some(Status::ProperForBathing),
            s if s == Status::ImproperForBathing.label() => Some(Status::ImproperForBathing),
            _ => None,
        }
    }

    pub fn zone(&self) -> Option<Zone> {
        Zone::from_slug(&self.zone)
    }

    pub fn period_days(&self) -> Vec<&str> {
        self.period_days
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect()
    }
}

/// Serialize records as CSV (UTF-8, header row first).
pub fn write_csv<W: std::io::Write>(records: &[BulletinRecord], out: W) -> Result<(), PraiasError> {
    let mut writer = csv::Writer::from_writer(out);
    if records.is_empty() {
        // serde only emits headers alongside the first record
        writer.write_record(DATASET_COLUMNS)?;
    }
    for record in records {
        writer.serialize(DatasetRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Replace the dataset file with `records`.
pub fn write_dataset(records: &[BulletinRecord], path: &Path) -> Result<(), PraiasError> {
    write_atomically(path, |file| write_csv(records, file))?;
    info!(path = %path.display(), records = records.len(), "dataset written");
    Ok(())
}

/// Read a dataset file. Rows that fail to deserialize are skipped.
pub fn read_dataset(path: &Path) -> Result<Vec<DatasetRow>, PraiasError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut rows = Vec::new();

    for (i, result) in reader.deserialize::<DatasetRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => warn!(line = i + 2, error = %e, "skipping malformed dataset row"),
        }
    }

    Ok(rows)
}

/// Column order of the dataset file.
pub const DATASET_COLUMNS: &[&str] = &[
    "id",
    "Nome",
    "Status",
    "Zona",
    "Periodo",
    "Dias_Periodo",
    "Numero_Boletim",
    "Tipos_Amostragem",
    "Data_Extracao",
    "Coordenadas",
];
