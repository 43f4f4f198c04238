//! Static targeting reference data — countries, regions, cities, interest
//! taxonomy, and placement preset resolution. Read-only; consulted by
//! validation and the matrix builder UI.

pub mod geo;
pub mod interests;
pub mod placements;

pub use geo::{CatalogEntry, CatalogEntryKind, GeoCatalog};
pub use placements::resolve_placements;
