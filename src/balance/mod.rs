//! Weight-and-balance calculation core.
//!
//! Every calculation reads an immutable [`Glider`](crate::model::Glider) snapshot and either
//! returns a value or a [`BalanceError`]; nothing here performs I/O or keeps state between calls.

mod boundaries;
mod calculator;
mod envelope;
mod error;
mod reference_arm;

pub use calculator::{BalancePoint, LoadConfiguration};
pub use envelope::polygon_contains;
pub use error::BalanceError;
pub use reference_arm::resolve_reference_arm;
