use super::calculator::moment_signs;
use super::error::BalanceError;
use super::reference_arm::resolve_reference_arm;
use crate::common::math::{round_mass, round_pilot_mass};
use crate::model::{DatumConvention, Glider, Limits, PilotPosition};

/// Everything the pilot mass boundaries are solved from.
struct BoundaryInputs<'a> {
    empty_mass: f64,
    x0: f64,
    front_pilot_arm: f64,
    rear_pilot_arm: f64,
    limits: &'a Limits,
}

/// Divides a moment balance by its lever arm difference.
fn solve(moment: f64, arm_difference: f64, quantity: &'static str) -> Result<f64, BalanceError> {
    if arm_difference == 0.0 || !arm_difference.is_finite() {
        return Err(BalanceError::DegenerateGeometry { quantity });
    }
    Ok(moment / arm_difference)
}

impl Glider {
    /// Variable load ceiling: maximum mass with empty water-ballast minus the empty mass.
    pub fn cv_max(&self) -> Result<f64, BalanceError> {
        let (limits, _) = self.configuration()?;
        Ok(round_mass(limits.max_mass_wb_empty - self.current_weighing()?.mve()))
    }

    /// Payload ceiling from the non-lifting elements limit.
    pub fn cu_max(&self) -> Result<f64, BalanceError> {
        let (limits, _) = self.configuration()?;
        Ok(round_mass(limits.max_mass_non_lifting - self.current_weighing()?.mvenp()))
    }

    /// Usable payload, the lower of both ceilings.
    pub fn cu(&self) -> Result<f64, BalanceError> { Ok(self.cv_max()?.min(self.cu_max()?)) }

    /// Minimum front pilot mass keeping the CG at or ahead of the rear limit.
    ///
    /// # Returns
    /// - The mass rounded to one decimal. It is negative when the empty glider is already
    ///   ahead of the rear limit.
    pub fn pilot_forward_min(&self) -> Result<f64, BalanceError> {
        const QUANTITY: &str = "pilot forward min";
        let b = self.boundary_inputs()?;
        let rear = b.limits.rear_cg_limit;
        let mass = match (self.datum(), self.pilot_position()) {
            // pilot moment counted negative, the arm adds to the limit
            (DatumConvention::Wing2PointsAft, _) => {
                solve(b.empty_mass * (b.x0 - rear), rear + b.front_pilot_arm, QUANTITY)?
            }
            (DatumConvention::ForwardGlider, _) => {
                solve(b.empty_mass * (b.x0 - rear), rear - b.front_pilot_arm, QUANTITY)?
            }
            (datum, position) => return Err(Self::unsupported(datum, position, QUANTITY)),
        };
        Ok(round_pilot_mass(mass))
    }

    /// Maximum front pilot mass keeping the CG at or aft of the forward limit.
    pub fn pilot_forward_max(&self) -> Result<f64, BalanceError> {
        const QUANTITY: &str = "pilot forward max";
        let b = self.boundary_inputs()?;
        let front = b.limits.front_cg_limit;
        let mass = match (self.datum(), self.pilot_position()) {
            (DatumConvention::Wing2PointsAft, PilotPosition::ForwardOfDatum) => {
                solve(b.empty_mass * (b.x0 - front), front + b.front_pilot_arm, QUANTITY)?
            }
            (DatumConvention::ForwardGlider, _) => {
                solve(b.empty_mass * (b.x0 - front), front - b.front_pilot_arm, QUANTITY)?
            }
            (datum, position) => return Err(Self::unsupported(datum, position, QUANTITY)),
        };
        Ok(round_pilot_mass(mass))
    }

    /// Minimum front pilot mass of a dual-seat flight, the rear seat holding the lightest
    /// admissible occupant.
    pub fn pilot_forward_min_duo(&self) -> Result<f64, BalanceError> {
        const QUANTITY: &str = "pilot forward min duo";
        let b = self.boundary_inputs()?;
        let rear = b.limits.rear_cg_limit;
        let occupant = b.limits.min_pilot_mass;
        let mass = match (self.datum(), self.pilot_position()) {
            (DatumConvention::Wing2PointsAft, PilotPosition::ForwardOfDatum) => solve(
                b.empty_mass * (b.x0 - rear) + occupant * (-b.rear_pilot_arm - rear),
                rear + b.front_pilot_arm,
                QUANTITY,
            )?,
            // TODO: have the aft-of-datum variant checked against a type certificate data sheet
            (DatumConvention::ForwardGlider, _) => solve(
                b.empty_mass * (b.x0 - rear) + occupant * (b.rear_pilot_arm - rear),
                rear - b.front_pilot_arm,
                QUANTITY,
            )?,
            (datum, position) => return Err(Self::unsupported(datum, position, QUANTITY)),
        };
        Ok(round_pilot_mass(mass))
    }

    fn boundary_inputs(&self) -> Result<BoundaryInputs<'_>, BalanceError> {
        let (limits, arms) = self.configuration()?;
        let weighing = self.current_weighing()?;
        let x0 = resolve_reference_arm(weighing, self.datum())?;
        moment_signs(self.datum())?;
        Ok(BoundaryInputs {
            empty_mass: weighing.mve(),
            x0,
            front_pilot_arm: arms.front_pilot,
            rear_pilot_arm: arms.rear_pilot,
            limits,
        })
    }

    fn unsupported(datum: DatumConvention, position: PilotPosition, quantity: &'static str) -> BalanceError {
        BalanceError::UnsupportedPilotPosition { datum, pilot_position: position, quantity }
    }
}
