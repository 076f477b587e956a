//! CSV and JSON input/output for the command-line shell.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{Commodity, CommodityCatalog, OrderInput};
use crate::report::DisplayReport;

/// Reads catalog rows (`Commodity,Length_in,CellSpeed_fpm`).
pub fn read_catalog<R: Read>(reader: R) -> Result<CommodityCatalog> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.deserialize::<Commodity>() {
        rows.push(row?);
    }
    Ok(CommodityCatalog::from_rows(rows))
}

/// Reads order rows (`Customer,Commodity,Pallets,CasesPerPallet,InboundLanesUsed,WorkersPerLane,CellGap_in`).
pub fn read_orders<R: Read>(reader: R) -> Result<Vec<OrderInput>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut orders = Vec::new();
    for row in rdr.deserialize::<OrderInput>() {
        orders.push(row?);
    }
    Ok(orders)
}

/// Loads a catalog CSV file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<CommodityCatalog> {
    let catalog = read_catalog(fs::File::open(path.as_ref())?)?;
    tracing::debug!(
        "Loaded {} commodities from {}",
        catalog.len(),
        path.as_ref().display()
    );
    Ok(catalog)
}

/// Loads an orders CSV file.
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<OrderInput>> {
    let orders = read_orders(fs::File::open(path.as_ref())?)?;
    tracing::debug!("Loaded {} orders from {}", orders.len(), path.as_ref().display());
    Ok(orders)
}

/// Writes serializable rows as CSV with a header line.
pub fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `orders.csv` and `timeline.csv` under `dir`, returning the paths.
pub fn write_report_csv(dir: impl AsRef<Path>, report: &DisplayReport) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let orders_path = dir.join("orders.csv");
    write_csv(fs::File::create(&orders_path)?, &report.orders)?;

    let timeline_path = dir.join("timeline.csv");
    write_csv(fs::File::create(&timeline_path)?, &report.timeline)?;

    Ok(vec![
        orders_path.display().to_string(),
        timeline_path.display().to_string(),
    ])
}

/// Serializes the display report as pretty JSON.
pub fn to_json(report: &DisplayReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_catalog() {
        let data = "Commodity,Length_in,CellSpeed_fpm\nOysters,22.5,13.0\nCrab, 18.0 ,15\nOysters,20,12\n";
        let catalog = read_catalog(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.dimensions("Crab"), (18.0, 15.0));
        assert_eq!(catalog.dimensions("Oysters"), (20.0, 12.0));
    }

    #[test]
    fn test_read_orders() {
        let data = "Customer,Commodity,Pallets,CasesPerPallet,InboundLanesUsed,WorkersPerLane,CellGap_in\n\
                    La imperial,Oysters,10,50,3,1,3.0\n\
                    Youngstown,Oysters,20,220,5,1,3\n";
        let orders = read_orders(data.as_bytes()).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].customer, "La imperial");
        assert_eq!(orders[0].total_cases(), 500);
        assert_eq!(orders[1].inbound_lanes_used, 5);
        assert!((orders[1].cell_gap_in - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_read_orders_bad_number() {
        let data = "Customer,Commodity,Pallets,CasesPerPallet,InboundLanesUsed,WorkersPerLane,CellGap_in\n\
                    A,Oysters,ten,50,3,1,3.0\n";
        assert!(read_orders(data.as_bytes()).is_err());
    }

    #[test]
    fn test_write_csv_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[Commodity::new("Oysters", 22.5, 13.0)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Commodity,Length_in,CellSpeed_fpm\nOysters,22.5,13.0\n");
    }
}
