//! Identifier to thermocouple lookup, assembled from the bundled tables.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{ThermocoupleError, ThermocoupleResult};
use crate::tables::{self, TableDef};
use crate::thermocouple::Thermocouple;

/// Read-only map from type id ("K", "AuFe 0.07", ...) to thermocouple.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    entries: BTreeMap<String, Thermocouple>,
}

impl Registry {
    /// Merge sources in order; a later source replaces an earlier entry with
    /// the same id.
    pub fn from_sources(sources: &[(&str, &[TableDef])]) -> ThermocoupleResult<Self> {
        let mut entries = BTreeMap::new();
        let mut overrides = 0usize;

        for (source, tables) in sources {
            for table in tables.iter() {
                let thermocouple = Thermocouple::from_table(table)?;
                if let Some(previous) = entries.insert(table.id.to_string(), thermocouple) {
                    overrides += 1;
                    debug!(
                        id = table.id,
                        source = *source,
                        replaced = previous.function().source(),
                        "table superseded"
                    );
                }
            }
        }

        debug!(entries = entries.len(), overrides, "thermocouple registry assembled");
        Ok(Self { entries })
    }

    /// Every bundled table: OMEGA, then NIST, then ASTM.
    pub fn standard() -> ThermocoupleResult<Self> {
        Self::from_sources(&tables::SOURCES)
    }

    pub fn get(&self, id: &str) -> ThermocoupleResult<&Thermocouple> {
        self.entries
            .get(id)
            .ok_or_else(|| ThermocoupleError::UnknownType { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Thermocouple)> {
        self.entries.iter().map(|(id, tc)| (id.as_str(), tc))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose id, display type or composition contains `query`,
    /// ignoring case. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<(&str, &Thermocouple)> {
        let query = query.trim().to_ascii_lowercase();
        self.iter()
            .filter(|(id, tc)| {
                query.is_empty()
                    || id.to_ascii_lowercase().contains(&query)
                    || tc.matches_query(&query)
            })
            .collect()
    }
}

static REGISTRY: OnceLock<ThermocoupleResult<Registry>> = OnceLock::new();

/// Process-wide registry of the bundled tables, built on first use.
pub fn thermocouples() -> ThermocoupleResult<&'static Registry> {
    REGISTRY
        .get_or_init(Registry::standard)
        .as_ref()
        .map_err(Clone::clone)
}

/// Look up a bundled thermocouple by id.
pub fn get_thermocouple(id: &str) -> ThermocoupleResult<&'static Thermocouple> {
    thermocouples()?.get(id)
}
