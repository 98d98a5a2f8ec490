//! Persistence of glider records and audited fleet edits.
//!
//! Records are kept as a JSON snapshot with one list per table: gliders, weighings,
//! envelope vertices (`wb_limits`) and instrument inventory.

mod error;
mod fleet;
mod snapshot;
#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use fleet::{Fleet, GliderStore};
pub use snapshot::{GliderRow, InventoryRow, Snapshot, WbLimitRow, WeighingRow};
