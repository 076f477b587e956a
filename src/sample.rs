//! Built-in starter data: the reference site's catalog and order book.

use crate::models::{Commodity, CommodityCatalog, OrderInput};

/// Catalog with the single reference commodity.
pub fn sample_catalog() -> CommodityCatalog {
    CommodityCatalog::new().with_commodity(Commodity::new("Oysters", 22.5, 13.0))
}

/// Three-order reference book.
pub fn sample_orders() -> Vec<OrderInput> {
    vec![
        OrderInput::new("La imperial", "Oysters")
            .with_pallets(10, 50)
            .with_lanes(3),
        OrderInput::new("Youngstown", "Oysters")
            .with_pallets(20, 220)
            .with_lanes(5),
        OrderInput::new("Sweet Seasons", "Oysters")
            .with_pallets(15, 120)
            .with_lanes(2),
    ]
}
