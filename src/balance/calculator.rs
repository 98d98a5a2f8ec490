use super::error::BalanceError;
use super::reference_arm::resolve_reference_arm;
use crate::event;
use crate::model::{Arms, DatumConvention, Glider, Limits, Weighing};
use serde::{Deserialize, Serialize};

/// Removable masses of one loading, all in kg and never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadConfiguration {
    pub front_pilot: f64,
    pub rear_pilot: f64,
    pub front_ballast: f64,
    /// Rear removable ballast or tail water-ballast.
    pub rear_ballast: f64,
    pub wing_water_ballast: f64,
}

impl LoadConfiguration {
    pub fn total(&self) -> f64 {
        self.front_pilot + self.rear_pilot + self.front_ballast + self.rear_ballast + self.wing_water_ballast
    }

    /// The same loading after the wing water-ballast has been jettisoned.
    #[must_use]
    pub fn without_water_ballast(&self) -> Self { Self { wing_water_ballast: 0.0, ..*self } }

    pub fn has_water_ballast(&self) -> bool { self.wing_water_ballast > 0.0 }

    fn components(&self) -> [(&'static str, f64); 5] {
        [
            ("front pilot", self.front_pilot),
            ("rear pilot", self.rear_pilot),
            ("front ballast", self.front_ballast),
            ("rear ballast", self.rear_ballast),
            ("wing water-ballast", self.wing_water_ballast),
        ]
    }

    fn validate(&self) -> Result<(), BalanceError> {
        match self.components().into_iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            Some((component, value)) => Err(BalanceError::InvalidLoad { component, value }),
            None => Ok(()),
        }
    }
}

/// Total mass and CG of a loaded glider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalancePoint {
    total_mass: f64,
    cg: f64,
    moment: f64,
}

impl BalancePoint {
    /// Total mass in kg.
    pub fn total_mass(&self) -> f64 { self.total_mass }
    /// CG position in mm from the datum.
    pub fn cg(&self) -> f64 { self.cg }
    /// Sum of the moments about the datum in kg·mm.
    pub fn moment(&self) -> f64 { self.moment }
}

/// Signs applied to each station arm when summing moments about the datum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MomentSigns {
    pub front_pilot: f64,
    pub rear_pilot: f64,
    pub front_ballast: f64,
    pub rear_ballast: f64,
    pub wing_water_ballast: f64,
}

/// Per-datum moment sign convention.
///
/// With the wing leading edge datum the pilot and front ballast arms are measured forward
/// of the datum, opposite to X0, while the rear ballast and wing tanks sit aft of it.
/// With the datum ahead of the glider every arm points aft.
pub(crate) fn moment_signs(datum: DatumConvention) -> Result<MomentSigns, BalanceError> {
    match datum {
        DatumConvention::Wing2PointsAft => Ok(MomentSigns {
            front_pilot: -1.0,
            rear_pilot: -1.0,
            front_ballast: -1.0,
            rear_ballast: 1.0,
            wing_water_ballast: 1.0,
        }),
        DatumConvention::ForwardGlider => Ok(MomentSigns {
            front_pilot: 1.0,
            rear_pilot: 1.0,
            front_ballast: 1.0,
            rear_ballast: 1.0,
            wing_water_ballast: 1.0,
        }),
        DatumConvention::Wing1PointFwd | DatumConvention::WingWheelFwd => {
            Err(BalanceError::UnsupportedDatumConvention { datum, quantity: "moment" })
        }
    }
}

impl Glider {
    /// Limits and arms, both required before any calculation.
    pub(crate) fn configuration(&self) -> Result<(&Limits, &Arms), BalanceError> {
        let missing = |what: &'static str| BalanceError::MissingConfiguration {
            registration: String::from(self.registration()),
            missing: what,
        };
        let limits = self.limits().ok_or_else(|| missing("limits"))?;
        let arms = self.arms().ok_or_else(|| missing("arms"))?;
        Ok((limits, arms))
    }

    pub(crate) fn current_weighing(&self) -> Result<&Weighing, BalanceError> {
        self.latest_weighing().ok_or_else(|| BalanceError::NoWeighingAvailable {
            registration: String::from(self.registration()),
        })
    }

    /// X0 of the latest weighing, in mm from the datum.
    pub fn resolve_reference_arm(&self) -> Result<f64, BalanceError> {
        self.configuration()?;
        resolve_reference_arm(self.current_weighing()?, self.datum())
    }

    /// Empty equipped mass (MVE) of the latest weighing.
    pub fn empty_mass(&self) -> Result<f64, BalanceError> {
        self.configuration()?;
        Ok(self.current_weighing()?.mve())
    }

    /// Mass of the non-lifting elements (MVENP) of the latest weighing.
    pub fn mvenp(&self) -> Result<f64, BalanceError> {
        self.configuration()?;
        Ok(self.current_weighing()?.mvenp())
    }

    /// Computes total mass and CG of the glider under `load`.
    ///
    /// The CG is taken as X0 shifted by the load moments about X0, which is the datum moment
    /// sum divided by the total mass rearranged so that an empty load returns X0 bit for bit.
    ///
    /// # Errors
    /// Every [`BalanceError`] except [`BalanceError::DegenerateGeometry`].
    pub fn compute(&self, load: &LoadConfiguration) -> Result<BalancePoint, BalanceError> {
        load.validate()?;
        let (_, arms) = self.configuration()?;
        let weighing = self.current_weighing()?;
        let x0 = resolve_reference_arm(weighing, self.datum())?;
        let signs = moment_signs(self.datum())?;

        let empty_mass = weighing.mve();
        let total_mass = empty_mass + load.total();
        if total_mass == 0.0 || !total_mass.is_finite() {
            return Err(BalanceError::DegenerateWeighing { quantity: "center of gravity" });
        }

        let stations = [
            (load.front_pilot, signs.front_pilot * arms.front_pilot),
            (load.rear_pilot, signs.rear_pilot * arms.rear_pilot),
            (load.front_ballast, signs.front_ballast * arms.front_ballast),
            (load.rear_ballast, signs.rear_ballast * arms.rear_ballast),
            (load.wing_water_ballast, signs.wing_water_ballast * arms.wing_water_ballast),
        ];
        let load_moment: f64 = stations.iter().map(|(mass, arm)| mass * arm).sum();
        let moment = empty_mass * x0 + load_moment;
        let shift: f64 = stations.iter().map(|(mass, arm)| mass * (arm - x0)).sum();
        let cg = x0 + shift / total_mass;
        event!(
            "{}: load {:?} gives {total_mass} kg at {cg} mm (moment {moment} kg.mm)",
            self.registration(),
            load
        );
        Ok(BalancePoint { total_mass, cg, moment })
    }
}
