use crate::model::{DatumConvention, PilotPosition};
use strum_macros::Display;

/// Hard stops of the weight-and-balance calculations.
///
/// None of these is ever replaced by a default value: a caller receiving one must not
/// present a mass/CG result.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum BalanceError {
    /// The glider has no weighing history.
    #[strum(to_string = "no weighing available for glider {registration}")]
    NoWeighingAvailable { registration: String },
    /// No formula exists for this datum convention.
    #[strum(to_string = "no {quantity} formula for datum {datum}")]
    UnsupportedDatumConvention { datum: DatumConvention, quantity: &'static str },
    /// The datum has formulas, but not for the front pilot on this side of it.
    #[strum(to_string = "no {quantity} formula for datum {datum} with pilot {pilot_position}")]
    UnsupportedPilotPosition { datum: DatumConvention, pilot_position: PilotPosition, quantity: &'static str },
    /// The two scale readings sum to zero, or the loaded glider has no mass at all.
    #[strum(to_string = "degenerate weighing, {quantity} divides by a zero mass")]
    DegenerateWeighing { quantity: &'static str },
    /// Limits or arms are not set on the glider.
    #[strum(to_string = "glider {registration} has no {missing} configured")]
    MissingConfiguration { registration: String, missing: &'static str },
    /// A boundary formula has a zero denominator: the pilot arm coincides with the CG limit.
    #[strum(to_string = "degenerate geometry, {quantity} has a zero lever arm difference")]
    DegenerateGeometry { quantity: &'static str },
    /// A load component is negative or not a finite number.
    #[strum(to_string = "invalid {component} load of {value} kg")]
    InvalidLoad { component: &'static str, value: f64 },
}

impl std::error::Error for BalanceError {}
