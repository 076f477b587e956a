//! Advisory input checks and editor-range clamping.
//!
//! The calculation core accepts any numbers. This module sits at the
//! data-entry boundary instead: it reports rows that the order editor
//! would not have allowed, and can clamp rows into the editor ranges the
//! same way the editor controls do. Detects:
//! - Unknown commodity names (they evaluate with fallback geometry)
//! - Duplicate catalog names (the last row wins)
//! - Non-positive commodity length or speed
//! - Lanes, workers per lane, or cell gap outside the editor ranges

use crate::config::LineConstraints;
use crate::models::{CommodityCatalog, OrderInput};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two catalog rows share a name.
    DuplicateCommodity,
    /// Commodity length or speed is not positive.
    InvalidCommodity,
    /// An order names a commodity missing from the catalog.
    UnknownCommodity,
    /// Lanes used outside 1..=inbound doors.
    LanesOutOfRange,
    /// Workers per lane outside 1..=max workers.
    WorkersOutOfRange,
    /// Cell gap below the hard minimum.
    GapBelowMinimum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Checks catalog and orders against the editor rules.
///
/// # Returns
/// `Ok(())` if nothing was found, `Err(findings)` with every finding.
pub fn validate_input(
    orders: &[OrderInput],
    catalog: &CommodityCatalog,
    constraints: &LineConstraints,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for c in catalog.rows() {
        if !names.insert(c.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCommodity,
                format!("Duplicate commodity '{}', last row wins", c.name),
            ));
        }
        if c.box_length_in <= 0.0 || c.cell_speed_fpm <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCommodity,
                format!(
                    "Commodity '{}' has length {} in and speed {} ft/min",
                    c.name, c.box_length_in, c.cell_speed_fpm
                ),
            ));
        }
    }

    for (idx, order) in orders.iter().enumerate() {
        let row = idx + 1;
        if !catalog.contains(&order.commodity) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCommodity,
                format!(
                    "Order {} ({}) uses unknown commodity '{}' (known: {})",
                    row,
                    order.customer,
                    order.commodity,
                    catalog.names().join(", ")
                ),
            ));
        }
        if !(1..=constraints.max_inbound_doors).contains(&order.inbound_lanes_used) {
            errors.push(ValidationError::new(
                ValidationErrorKind::LanesOutOfRange,
                format!(
                    "Order {} ({}) uses {} lanes, expected 1..={}",
                    row, order.customer, order.inbound_lanes_used, constraints.max_inbound_doors
                ),
            ));
        }
        if !(1..=constraints.max_workers_per_lane).contains(&order.workers_per_lane) {
            errors.push(ValidationError::new(
                ValidationErrorKind::WorkersOutOfRange,
                format!(
                    "Order {} ({}) has {} workers per lane, expected 1..={}",
                    row, order.customer, order.workers_per_lane, constraints.max_workers_per_lane
                ),
            ));
        }
        if order.cell_gap_in < constraints.min_cell_gap_in {
            errors.push(ValidationError::new(
                ValidationErrorKind::GapBelowMinimum,
                format!(
                    "Order {} ({}) has cell gap {} in, minimum is {}",
                    row, order.customer, order.cell_gap_in, constraints.min_cell_gap_in
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Clamps an order into the editor control ranges.
///
/// Lanes go to 1..=inbound doors, workers to 1..=max workers per lane,
/// and the gap up to the minimum. Names and counts are untouched.
pub fn clamp_to_controls(order: &OrderInput, constraints: &LineConstraints) -> OrderInput {
    let max_lanes = constraints.max_inbound_doors.max(1);
    let max_workers = constraints.max_workers_per_lane.max(1);
    let mut clamped = order.clone();
    clamped.inbound_lanes_used = order.inbound_lanes_used.clamp(1, max_lanes);
    clamped.workers_per_lane = order.workers_per_lane.clamp(1, max_workers);
    clamped.cell_gap_in = order.cell_gap_in.max(constraints.min_cell_gap_in);
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Commodity;

    fn catalog() -> CommodityCatalog {
        CommodityCatalog::new().with_commodity(Commodity::new("Oysters", 22.5, 13.0))
    }

    #[test]
    fn test_valid_input() {
        let orders = vec![OrderInput::new("A", "Oysters").with_pallets(10, 50).with_lanes(3)];
        assert!(validate_input(&orders, &catalog(), &LineConstraints::default()).is_ok());
    }

    #[test]
    fn test_unknown_commodity() {
        let orders = vec![OrderInput::new("A", "Clams")];
        let errs = validate_input(&orders, &catalog(), &LineConstraints::default()).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, ValidationErrorKind::UnknownCommodity);
        assert!(errs[0].message.ends_with("(known: Oysters)"));
    }

    #[test]
    fn test_duplicate_and_invalid_commodity() {
        let catalog = catalog()
            .with_commodity(Commodity::new("Oysters", 20.0, 12.0))
            .with_commodity(Commodity::new("Broken", 0.0, 12.0));
        let errs = validate_input(&[], &catalog, &LineConstraints::default()).unwrap_err();
        assert!(errs
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCommodity));
        assert!(errs
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCommodity));
    }

    #[test]
    fn test_out_of_range_order() {
        let orders = vec![OrderInput::new("A", "Oysters")
            .with_lanes(7)
            .with_workers_per_lane(0)
            .with_cell_gap(1.0)];
        let errs = validate_input(&orders, &catalog(), &LineConstraints::default()).unwrap_err();
        let kinds: Vec<_> = errs.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::LanesOutOfRange,
                ValidationErrorKind::WorkersOutOfRange,
                ValidationErrorKind::GapBelowMinimum,
            ]
        );
    }

    #[test]
    fn test_clamp_to_controls() {
        let c = LineConstraints::default();
        let order = OrderInput::new("A", "Oysters")
            .with_pallets(3, 4)
            .with_lanes(9)
            .with_workers_per_lane(0)
            .with_cell_gap(2.0);
        let clamped = clamp_to_controls(&order, &c);

        assert_eq!(clamped.inbound_lanes_used, 6);
        assert_eq!(clamped.workers_per_lane, 1);
        assert!((clamped.cell_gap_in - 3.0).abs() < 1e-10);
        assert_eq!(clamped.total_cases(), 12);
        assert!(validate_input(&[clamped], &catalog(), &c).is_ok());
    }

    #[test]
    fn test_clamp_leaves_valid_rows() {
        let c = LineConstraints::default();
        let order = OrderInput::new("A", "Oysters").with_lanes(4).with_workers_per_lane(3).with_cell_gap(4.5);
        assert_eq!(clamp_to_controls(&order, &c), order);
    }
}
