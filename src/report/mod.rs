//! Operator-facing summaries built on top of the calculation core.

mod labels;
mod load_report;
mod sheet;

pub use labels::datum_label;
pub use load_report::{CheckedPoint, LoadReport};
pub use sheet::{MaxPilotSource, MinPilotSource, Retained, WeighingSheet};
