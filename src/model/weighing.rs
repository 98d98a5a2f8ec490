use crate::common::math::round_mass;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scale readings and support geometry recorded during a weighing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleReadings {
    /// Reading on the forward support (kg).
    pub p1: f64,
    /// Reading on the rear support (kg).
    pub p2: f64,
    /// Distance A (mm) between datum and the first support, as defined by the datum convention.
    pub a: f64,
    /// Distance D (mm) between the supports, as defined by the datum convention.
    pub d: f64,
}

impl ScaleReadings {
    pub fn total(&self) -> f64 { self.p1 + self.p2 }
}

/// Masses of the structural components of the glider (kg).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentMasses {
    pub right_wing: f64,
    pub left_wing: f64,
    pub tail: f64,
    pub fuselage: f64,
    pub fixed_ballast: f64,
}

/// One structural weighing of a glider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weighing {
    id: u32,
    date: NaiveDate,
    readings: ScaleReadings,
    masses: ComponentMasses,
}

impl Weighing {
    pub fn new(id: u32, date: NaiveDate, readings: ScaleReadings, masses: ComponentMasses) -> Self {
        Self { id, date, readings, masses }
    }

    pub fn id(&self) -> u32 { self.id }
    pub fn date(&self) -> NaiveDate { self.date }
    pub fn readings(&self) -> &ScaleReadings { &self.readings }
    pub fn masses(&self) -> &ComponentMasses { &self.masses }

    /// Empty equipped mass: both wings, tail, fuselage and fixed ballast.
    pub fn mve(&self) -> f64 {
        let m = &self.masses;
        round_mass(m.right_wing + m.left_wing + m.tail + m.fuselage + m.fixed_ballast)
    }

    /// Mass of the non-lifting elements: tail, fuselage and fixed ballast.
    pub fn mvenp(&self) -> f64 {
        let m = &self.masses;
        round_mass(m.tail + m.fuselage + m.fixed_ballast)
    }

    pub(crate) fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}
