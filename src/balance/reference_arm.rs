use super::error::BalanceError;
use crate::event;
use crate::model::{DatumConvention, Weighing};

/// Resolves X0, the distance in mm from the datum to the empty glider's center of gravity.
///
/// The zero-mass check runs before the datum dispatch, a weighing whose readings sum to
/// zero is rejected whatever the convention.
///
/// # Arguments
/// - `weighing`: The weighing the arm is derived from, normally the latest one.
/// - `datum`: The datum convention the weighing was carried out with.
///
/// # Returns
/// - `X0` rounded to the nearest millimetre.
///
/// # Errors
/// - [`BalanceError::DegenerateWeighing`] if `p1 + p2` is zero or not finite.
/// - [`BalanceError::UnsupportedDatumConvention`] for the conventions without a formula.
pub fn resolve_reference_arm(weighing: &Weighing, datum: DatumConvention) -> Result<f64, BalanceError> {
    let r = weighing.readings();
    let total = r.total();
    if total == 0.0 || !total.is_finite() {
        return Err(BalanceError::DegenerateWeighing { quantity: "reference arm" });
    }
    let x0 = match datum {
        DatumConvention::Wing2PointsAft => {
            // D1: arm of the rear support from the forward one
            let d1 = r.d * r.p2 / total;
            (d1 + r.a).round()
        }
        DatumConvention::ForwardGlider => (r.d - (r.p1 * (r.d - r.a)) / total).round(),
        DatumConvention::Wing1PointFwd | DatumConvention::WingWheelFwd => {
            return Err(BalanceError::UnsupportedDatumConvention { datum, quantity: "reference arm" });
        }
    };
    event!("Weighing #{} under {datum}: X0 = {x0} mm", weighing.id());
    Ok(x0)
}
