use serde::{Deserialize, Serialize};

/// Certified mass and centering limits of a glider.
///
/// Masses in kg, centering limits in mm from the datum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum gross mass with full water-ballast (MMWP).
    pub max_mass_full_wb: f64,
    /// Maximum mass with empty water-ballast (MMWV).
    pub max_mass_wb_empty: f64,
    /// Maximum mass of the non-lifting elements (MMENP).
    pub max_mass_non_lifting: f64,
    /// Maximum seat/harness mass.
    pub max_seat_mass: f64,
    /// Minimum pilot mass from the flight manual.
    pub min_pilot_mass: f64,
    pub front_cg_limit: f64,
    pub rear_cg_limit: f64,
}

impl Limits {
    /// Checks a CG position against the forward and aft centering limits, both inclusive.
    pub fn cg_within(&self, cg: f64) -> bool { cg >= self.front_cg_limit && cg <= self.rear_cg_limit }
}

/// Lever arms of the loadable stations, in mm from the datum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Arms {
    pub front_pilot: f64,
    pub rear_pilot: f64,
    pub wing_water_ballast: f64,
    pub front_ballast: f64,
    /// Rear removable ballast or tail water-ballast.
    pub rear_ballast: f64,
    /// Legacy station, unused by the calculations.
    pub fuel_tank: f64,
    pub instrument_panel: f64,
}
