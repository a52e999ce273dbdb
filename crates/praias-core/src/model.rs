use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parsing::normalize::normalize_text;

/// Bathing status printed next to each monitoring point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Própria para banho")]
    ProperForBathing,
    #[serde(rename = "Imprópria para banho")]
    ImproperForBathing,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Status {
    /// Parse the single-letter marker used in the bulletin table ("P" / "I").
    pub fn from_token(token: &str) -> Option<Status> {
        match token.trim().to_uppercase().as_str() {
            "P" => Some(Status::ProperForBathing),
            "I" => Some(Status::ImproperForBathing),
            _ => None,
        }
    }

    /// Parse a URL-style slug: "propria" or "impropria", accents optional.
    pub fn from_slug(slug: &str) -> Option<Status> {
        match normalize_text(slug.trim()).as_str() {
            "propria" => Some(Status::ProperForBathing),
            "impropria" => Some(Status::ImproperForBathing),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Status::ProperForBathing => "P",
            Status::ImproperForBathing => "I",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::ProperForBathing => "Própria para banho",
            Status::ImproperForBathing => "Imprópria para banho",
        }
    }
}

/// Geographic grouping of the Fortaleza shoreline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "Leste")]
    East,
    #[serde(rename = "Centro")]
    Center,
    #[serde(rename = "Oeste")]
    West,
    #[serde(rename = "Desconhecida")]
    Unknown,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Zone {
    pub fn label(&self) -> &'static str {
        match self {
            Zone::East => "Leste",
            Zone::Center => "Centro",
            Zone::West => "Oeste",
            Zone::Unknown => "Desconhecida",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Zone> {
        match normalize_text(slug.trim()).as_str() {
            "leste" => Some(Zone::East),
            "centro" => Some(Zone::Center),
            "oeste" => Some(Zone::West),
            "desconhecida" => Some(Zone::Unknown),
            _ => None,
        }
    }
}

/// Free-text fields printed once per bulletin and shared by every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletinMetadata {
    pub bulletin_number: String,
    pub period: String,
    pub sampling_types: String,
}

/// A beach row as recovered from the document tables, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeachRow {
    pub name: String,
    pub status: Status,
}

/// One monitoring point in the final dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletinRecord {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub status: Status,
    pub zone: Zone,
    pub period: String,
    pub period_days: Vec<NaiveDate>,
    pub bulletin_number: String,
    pub sampling_types: String,
    pub extraction_date: NaiveDate,
    /// Raw "lat, lon" string from the coordinate table, if the code is known.
    pub coordinates: Option<String>,
}
