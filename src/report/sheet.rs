use super::labels::datum_label;
use crate::balance::BalanceError;
use crate::common::math::{max_with_index, min_with_index};
use crate::model::{DatumConvention, Glider, Instrument, PilotPosition, Weighing};
use crate::warn;
use std::fmt;
use strum_macros::Display;

/// Bound that decided the retained minimum front pilot mass.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
pub enum MinPilotSource {
    #[strum(to_string = "flight manual")]
    FlightManual,
    #[strum(to_string = "computed")]
    Computed,
}

/// Bound that decided the retained maximum front pilot mass.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
pub enum MaxPilotSource {
    #[strum(to_string = "centering")]
    Centering,
    #[strum(to_string = "non-lifting elements")]
    NonLiftingElements,
    #[strum(to_string = "max mass")]
    MaxMass,
    #[strum(to_string = "harness")]
    Harness,
}

/// A pilot mass together with the bound it came from.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Retained<S> {
    mass: f64,
    source: S,
}

impl<S: Copy> Retained<S> {
    pub fn mass(&self) -> f64 { self.mass }
    pub fn source(&self) -> S { self.source }
}

/// Summary of the latest weighing of a glider.
///
/// Pilot boundaries whose formula does not exist for the glider's datum convention are left
/// out; the retained values are then decided by the remaining bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct WeighingSheet {
    registration: String,
    model: String,
    serial_number: String,
    datum: DatumConvention,
    pilot_position: PilotPosition,
    weighing: Weighing,
    x0: f64,
    mve: f64,
    mvenp: f64,
    cv_max: f64,
    cu_max: f64,
    cu: f64,
    max_seat_mass: f64,
    pilot_min: Option<f64>,
    pilot_max: Option<f64>,
    retained_min: Retained<MinPilotSource>,
    retained_max: Retained<MaxPilotSource>,
    retained_min_duo: Option<Retained<MinPilotSource>>,
    instruments: Vec<Instrument>,
}

/// Drops a boundary that has no formula for this glider, every other failure is kept.
fn supported_only(glider: &Glider, value: Result<f64, BalanceError>) -> Result<Option<f64>, BalanceError> {
    match value {
        Ok(mass) => Ok(Some(mass)),
        Err(e @ BalanceError::UnsupportedPilotPosition { .. }) => {
            warn!("{}: {e}", glider.registration());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn retained_min(manual: f64, computed: Option<f64>) -> Retained<MinPilotSource> {
    let Some(computed) = computed else {
        return Retained { mass: manual, source: MinPilotSource::FlightManual };
    };
    let sources = [MinPilotSource::FlightManual, MinPilotSource::Computed];
    match max_with_index(&[manual, computed]) {
        Some((mass, i)) => Retained { mass, source: sources[i] },
        None => Retained { mass: manual, source: MinPilotSource::FlightManual },
    }
}

impl WeighingSheet {
    /// Builds the sheet from the glider's latest weighing.
    ///
    /// # Errors
    /// Any [`BalanceError`] of the underlying calculations, except the absence of a pilot
    /// boundary formula for the datum convention.
    pub fn new(glider: &Glider) -> Result<Self, BalanceError> {
        let (limits, _) = glider.configuration()?;
        let weighing = glider.current_weighing()?.clone();
        let x0 = glider.resolve_reference_arm()?;
        let (cv_max, cu_max, cu) = (glider.cv_max()?, glider.cu_max()?, glider.cu()?);

        let pilot_min = supported_only(glider, glider.pilot_forward_min())?;
        let pilot_max = supported_only(glider, glider.pilot_forward_max())?;

        let mut bounds = Vec::with_capacity(4);
        if let Some(max) = pilot_max {
            bounds.push((MaxPilotSource::Centering, max));
        }
        bounds.extend([
            (MaxPilotSource::NonLiftingElements, cu_max),
            (MaxPilotSource::MaxMass, cv_max),
            (MaxPilotSource::Harness, limits.max_seat_mass),
        ]);
        let values: Vec<f64> = bounds.iter().map(|(_, v)| *v).collect();
        let retained_max = match min_with_index(&values) {
            Some((mass, i)) => Retained { mass, source: bounds[i].0 },
            None => Retained { mass: limits.max_seat_mass, source: MaxPilotSource::Harness },
        };

        let retained_min_duo = if glider.is_single_seat() {
            None
        } else {
            supported_only(glider, glider.pilot_forward_min_duo())?
                .map(|duo| retained_min(limits.min_pilot_mass, Some(duo)))
        };

        Ok(Self {
            registration: String::from(glider.registration()),
            model: String::from(glider.model()),
            serial_number: String::from(glider.serial_number()),
            datum: glider.datum(),
            pilot_position: glider.pilot_position(),
            mve: weighing.mve(),
            mvenp: weighing.mvenp(),
            weighing,
            x0,
            cv_max,
            cu_max,
            cu,
            max_seat_mass: limits.max_seat_mass,
            pilot_min,
            pilot_max,
            retained_min: retained_min(limits.min_pilot_mass, pilot_min),
            retained_max,
            retained_min_duo,
            instruments: glider.on_board_instruments().cloned().collect(),
        })
    }

    pub fn registration(&self) -> &str { &self.registration }
    pub fn weighing(&self) -> &Weighing { &self.weighing }
    pub fn x0(&self) -> f64 { self.x0 }
    pub fn mve(&self) -> f64 { self.mve }
    pub fn mvenp(&self) -> f64 { self.mvenp }
    pub fn cv_max(&self) -> f64 { self.cv_max }
    pub fn cu_max(&self) -> f64 { self.cu_max }
    pub fn cu(&self) -> f64 { self.cu }
    pub fn pilot_min(&self) -> Option<f64> { self.pilot_min }
    pub fn pilot_max(&self) -> Option<f64> { self.pilot_max }
    pub fn retained_min(&self) -> Retained<MinPilotSource> { self.retained_min }
    pub fn retained_max(&self) -> Retained<MaxPilotSource> { self.retained_max }
    pub fn retained_min_duo(&self) -> Option<Retained<MinPilotSource>> { self.retained_min_duo }
    pub fn instruments(&self) -> &[Instrument] { &self.instruments }

    pub fn payload_notice(&self) -> String {
        format!(
            "useful load {} kg within centering and seat limits of {} kg",
            self.cu, self.max_seat_mass
        )
    }
}

fn optional_mass(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("n/a"), |v| format!("{v} kg"))
}

impl fmt::Display for WeighingSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.weighing.readings();
        let m = self.weighing.masses();
        writeln!(f, "Weighing sheet {} ({}, s/n {})", self.registration, self.model, self.serial_number)?;
        writeln!(f, "  weighed on       {} (#{})", self.weighing.date(), self.weighing.id())?;
        writeln!(f, "  datum            {} ({})", datum_label(self.datum), self.datum)?;
        writeln!(f, "  pilot            {}", self.pilot_position)?;
        writeln!(f, "  readings         P1 {} kg, P2 {} kg, A {} mm, D {} mm", r.p1, r.p2, r.a, r.d)?;
        writeln!(
            f,
            "  components       wings {} / {} kg, tail {} kg, fuselage {} kg, fixed ballast {} kg",
            m.right_wing, m.left_wing, m.tail, m.fuselage, m.fixed_ballast
        )?;
        writeln!(f, "  MVE              {} kg", self.mve)?;
        writeln!(f, "  MVENP            {} kg", self.mvenp)?;
        writeln!(f, "  X0               {} mm", self.x0)?;
        writeln!(f, "  CV max           {} kg", self.cv_max)?;
        writeln!(f, "  CU max           {} kg", self.cu_max)?;
        writeln!(f, "  CU               {} kg", self.cu)?;
        writeln!(f, "  pilot min        {}", optional_mass(self.pilot_min))?;
        writeln!(f, "  pilot max        {}", optional_mass(self.pilot_max))?;
        writeln!(
            f,
            "  retained min     {} kg ({})",
            self.retained_min.mass, self.retained_min.source
        )?;
        writeln!(
            f,
            "  retained max     {} kg ({})",
            self.retained_max.mass, self.retained_max.source
        )?;
        if let Some(duo) = self.retained_min_duo {
            writeln!(f, "  retained min duo {} kg ({})", duo.mass, duo.source)?;
        }
        if !self.instruments.is_empty() {
            writeln!(f, "  on board:")?;
            for i in &self.instruments {
                let date = i.date.map_or_else(String::new, |d| format!(", {d}"));
                writeln!(f, "    [{}] {} {} {} #{}{date}", i.seat, i.instrument, i.brand, i.kind, i.number)?;
            }
        }
        write!(f, "{}", self.payload_notice())
    }
}
