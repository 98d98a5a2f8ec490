use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inventory entry of an instrument fitted to the glider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Whether the instrument was on board during the weighing.
    pub on_board: bool,
    pub instrument: String,
    pub brand: String,
    pub kind: String,
    pub number: String,
    pub date: Option<NaiveDate>,
    /// Where the instrument is fitted, e.g. front or rear panel.
    pub seat: String,
}
