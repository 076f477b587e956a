//! Commodity catalog model.
//!
//! A commodity describes the physical case that rides the cell conveyor:
//! its box length and the belt speed the cell runs at for that product.
//! The catalog is reference data supplied by the data-entry layer and is
//! looked up by name during order evaluation.
//!
//! # Lookup contract
//!
//! - Rows are kept in insertion order.
//! - Duplicate names: the last row wins.
//! - Unknown names resolve to the fallback geometry
//!   (`22.5` in, `13.0` ft/min) without error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Box length (in) used when a commodity is missing from the catalog.
pub const FALLBACK_LENGTH_IN: f64 = 22.5;

/// Cell belt speed (ft/min) used when a commodity is missing from the catalog.
pub const FALLBACK_CELL_SPEED_FPM: f64 = 13.0;

/// A commodity row: name → box length and cell belt speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commodity {
    /// Unique commodity name (lookup key).
    #[serde(rename = "Commodity")]
    pub name: String,
    /// Box length along the direction of travel (inches).
    #[serde(rename = "Length_in")]
    pub box_length_in: f64,
    /// Cell belt speed (feet per minute).
    #[serde(rename = "CellSpeed_fpm")]
    pub cell_speed_fpm: f64,
}

impl Commodity {
    /// Creates a new commodity row.
    pub fn new(name: impl Into<String>, box_length_in: f64, cell_speed_fpm: f64) -> Self {
        Self {
            name: name.into(),
            box_length_in,
            cell_speed_fpm,
        }
    }
}

/// Ordered commodity table with name lookup.
///
/// # Example
///
/// ```
/// use mhs_calc::models::{Commodity, CommodityCatalog};
///
/// let catalog = CommodityCatalog::from_rows(vec![Commodity::new("Crab", 18.0, 15.0)]);
/// assert_eq!(catalog.dimensions("Crab"), (18.0, 15.0));
/// assert_eq!(catalog.dimensions("Unknown"), (22.5, 13.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommodityCatalog {
    rows: Vec<Commodity>,
    by_name: HashMap<String, usize>,
}

impl CommodityCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from ordered rows.
    pub fn from_rows(rows: Vec<Commodity>) -> Self {
        let mut catalog = Self::new();
        for row in rows {
            catalog.insert(row);
        }
        catalog
    }

    /// Appends a row. A later row with the same name shadows earlier ones.
    pub fn insert(&mut self, commodity: Commodity) {
        self.by_name
            .insert(commodity.name.clone(), self.rows.len());
        self.rows.push(commodity);
    }

    /// Builder: adds a row and returns self.
    pub fn with_commodity(mut self, commodity: Commodity) -> Self {
        self.insert(commodity);
        self
    }

    /// Finds the effective row for a name.
    pub fn get(&self, name: &str) -> Option<&Commodity> {
        self.by_name.get(name).map(|&idx| &self.rows[idx])
    }

    /// Whether a name resolves to an explicit row.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Resolves `(box_length_in, cell_speed_fpm)` for a commodity name.
    ///
    /// Falls back to ([`FALLBACK_LENGTH_IN`], [`FALLBACK_CELL_SPEED_FPM`])
    /// for names that are not in the catalog.
    pub fn dimensions(&self, name: &str) -> (f64, f64) {
        self.get(name)
            .map(|c| (c.box_length_in, c.cell_speed_fpm))
            .unwrap_or((FALLBACK_LENGTH_IN, FALLBACK_CELL_SPEED_FPM))
    }

    /// All rows in insertion order, shadowed duplicates included.
    pub fn rows(&self) -> &[Commodity] {
        &self.rows
    }

    /// Distinct names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of rows (including shadowed duplicates).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the catalog has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for Commodity {
    fn default() -> Self {
        Self::new("Oysters", FALLBACK_LENGTH_IN, FALLBACK_CELL_SPEED_FPM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        let catalog = CommodityCatalog::new().with_commodity(Commodity::new("Crab", 18.0, 15.0));
        assert_eq!(catalog.dimensions("Crab"), (18.0, 15.0));
        assert!(catalog.contains("Crab"));
    }

    #[test]
    fn test_lookup_fallback() {
        let catalog = CommodityCatalog::new();
        assert_eq!(catalog.dimensions("Mystery"), (22.5, 13.0));
        assert!(catalog.get("Mystery").is_none());
    }

    #[test]
    fn test_duplicate_last_wins() {
        let catalog = CommodityCatalog::from_rows(vec![
            Commodity::new("Crab", 18.0, 15.0),
            Commodity::new("Lobster", 24.0, 12.0),
            Commodity::new("Crab", 20.0, 11.0),
        ]);
        assert_eq!(catalog.dimensions("Crab"), (20.0, 11.0));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.names(), vec!["Crab", "Lobster"]);
    }

    #[test]
    fn test_default_commodity_matches_fallback() {
        let c = Commodity::default();
        assert_eq!(c.name, "Oysters");
        assert_eq!((c.box_length_in, c.cell_speed_fpm), (22.5, 13.0));
    }
}
