// seating-chart: sparse occupancy map

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::layout::Identifier;

/// Occupant names keyed by table or seat.
///
/// Only assigned identifiers are present. Setting a blank name removes
/// the entry, so a cleared seat is indistinguishable from one that was
/// never assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyStore {
    occupants: BTreeMap<Identifier, String>,
}

impl OccupancyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &Identifier) -> Option<&str> {
        self.occupants.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.occupants.contains_key(id)
    }

    /// Assign the trimmed `name`, or free the identifier if it is blank.
    ///
    /// Identifiers are not checked against the venue layout.
    pub fn set(&mut self, id: Identifier, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            if self.occupants.remove(&id).is_some() {
                debug!(%id, "cleared");
            }
        } else {
            debug!(%id, name, "assigned");
            self.occupants.insert(id, name.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Entries in identifier order: tables, then seats by row and seat
    pub fn iter(&self) -> impl Iterator<Item = (&Identifier, &str)> {
        self.occupants.iter().map(|(id, name)| (id, name.as_str()))
    }

    /// Apply every entry of a JSON seed file through [`set`](Self::set).
    ///
    /// The whole file is validated first; on error the store is unchanged.
    pub fn load_seed(&mut self, path: &Path) -> Result<usize, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::SeedError(format!("{}: {}", path.display(), e)))?;
        let entries: Vec<SeedEntry> = serde_json::from_str(&content)
            .map_err(|e| AppError::SeedError(format!("Invalid JSON: {}", e)))?;

        let assignments = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .identifier()
                    .map(|id| (id, entry.name.as_str()))
                    .ok_or_else(|| AppError::SeedError(format!("entry {} has no table or row/seat", index)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (id, name) in assignments {
            self.set(id, name);
        }

        debug!(path = %path.display(), entries = entries.len(), "seed loaded");
        Ok(entries.len())
    }
}

/// Seed file entry: `{"table": 3, "name": ...}` or `{"row": 1, "seat": 1, "name": ...}`
#[derive(Debug, Deserialize)]
struct SeedEntry {
    table: Option<u32>,
    row: Option<u32>,
    seat: Option<u32>,
    name: String,
}

impl SeedEntry {
    fn identifier(&self) -> Option<Identifier> {
        match (self.table, self.row, self.seat) {
            (Some(n), None, None) => Some(Identifier::Table(n)),
            (None, Some(row), Some(seat)) => Some(Identifier::seat(row, seat)),
            _ => None,
        }
    }
}
