//! Read-side state for whatever serves the dataset.
//!
//! The pipeline replaces the dataset file wholesale; a `DatasetStore` holds
//! the last snapshot it read and swaps to the new file on `reload()`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::dataset::{read_dataset, DatasetRow};
use crate::model::{Status, Zone};

/// Short listing entry: id, name and zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeachSummary {
    pub id: Option<u32>,
    pub name: String,
    pub zone: String,
}

#[derive(Debug, Clone)]
pub struct DatasetStore {
    path: PathBuf,
    rows: Vec<DatasetRow>,
}

impl DatasetStore {
    /// Load the dataset at `path`. A missing or unreadable file gives an
    /// empty store; the next `reload()` picks the file up once it exists.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let rows = read_or_empty(&path);
        DatasetStore { path, rows }
    }

    /// Re-read the dataset file, replacing the current snapshot.
    /// Returns the number of rows now loaded.
    pub fn reload(&mut self) -> usize {
        self.rows = read_or_empty(&self.path);
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summaries(&self) -> Vec<BeachSummary> {
        self.rows
            .iter()
            .map(|r| BeachSummary {
                id: r.id,
                name: r.name.clone(),
                zone: r.zone.clone(),
            })
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<&DatasetRow> {
        self.rows.iter().find(|r| r.id == Some(id))
    }

    /// Rows matching every filter given; `None` leaves that field unfiltered.
    pub fn filter(&self, status: Option<Status>, zone: Option<Zone>) -> Vec<&DatasetRow> {
        self.rows
            .iter()
            .filter(|r| status.map_or(true, |s| r.status() == Some(s)))
            .filter(|r| zone.map_or(true, |z| r.zone() == Some(z)))
            .collect()
    }
}

fn read_or_empty(path: &Path) -> Vec<DatasetRow> {
    if !path.exists() {
        warn!(path = %path.display(), "dataset file not found, starting empty");
        return Vec::new();
    }

    match read_dataset(path) {
        Ok(rows) => {
            info!(path = %path.display(), rows = rows.len(), "dataset loaded");
            rows
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "dataset unreadable, starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
id,Nome,Status,Zona,Periodo,Dias_Periodo,Numero_Boletim,Tipos_Amostragem,Data_Extracao,Coordenadas
1,Praia do Futuro,Própria para banho,Leste,01/03/2024 a 02/03/2024,\"2024-03-01, 2024-03-02\",42,Água do mar,2024-03-03,
2,Praia de Iracema,Imprópria para banho,Centro,01/03/2024 a 02/03/2024,\"2024-03-01, 2024-03-02\",42,Água do mar,2024-03-03,\"-3.72, -38.51\"
3,Pirambu,Imprópria para banho,Oeste,01/03/2024 a 02/03/2024,\"2024-03-01, 2024-03-02\",42,Água do mar,2024-03-03,
";

    fn store_with(csv: &str) -> (tempfile::TempDir, DatasetStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boletim.csv");
        std::fs::write(&path, csv).unwrap();
        let store = DatasetStore::load(&path);
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::load(dir.path().join("nao-existe.csv"));
        assert!(store.is_empty());
        assert!(store.summaries().is_empty());
    }

    #[test]
    fn test_queries() {
        let (_dir, store) = store_with(CSV);

        let summaries = store.summaries();
        assert_eq!(summaries[0].name, "Praia do Futuro");
        assert_eq!(summaries[0].zone, "Leste");

        assert_eq!(store.get(2).unwrap().coordinates, "-3.72, -38.51");
        assert!(store.get(9).is_none());

        assert_eq!(store.filter(Some(Status::ImproperForBathing), None).len(), 2);
        assert_eq!(store.filter(Some(Status::ProperForBathing), None).len(), 1);
        assert_eq!(store.filter(None, Some(Zone::West))[0].name, "Pirambu");
        assert!(store.filter(None, Some(Zone::Unknown)).is_empty());
        assert_eq!(store.filter(None, None).len(), 3);

        let improper_center = store.filter(Some(Status::ImproperForBathing), Some(Zone::Center));
        assert_eq!(improper_center.len(), 1);
        assert_eq!(improper_center[0].name, "Praia de Iracema");
        assert!(store
            .filter(Some(Status::ProperForBathing), Some(Zone::West))
            .is_empty());
    }

    #[test]
    fn test_reload_picks_up_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boletim.csv");
        let mut store = DatasetStore::load(&path);
        assert!(store.is_empty());

        std::fs::write(&path, CSV).unwrap();
        assert_eq!(store.reload(), 3);
        assert_eq!(store.get(1).unwrap().name, "Praia do Futuro");
    }
}
