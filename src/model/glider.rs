use super::{
    datum::{DatumConvention, PilotPosition},
    envelope::EnvelopePoint,
    instrument::Instrument,
    limits::{Arms, Limits},
    weighing::Weighing,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static REGISTRATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]-[A-Z0-9]{4}$").expect("registration pattern is valid"));

/// Checks a registration against the `X-XXXX` form: one alphanumeric character, a dash,
/// then four alphanumeric characters, upper case only.
pub fn is_valid_registration(registration: &str) -> bool { REGISTRATION_PATTERN.is_match(registration) }

/// Free-text description of how the datum is materialised on the airframe.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatumDescription {
    /// Reference plane, e.g. "wing root leading edge".
    pub label: String,
    /// Levelling wedge, e.g. "45/1000".
    pub wedge: String,
    /// Where the levelling wedge is placed.
    pub wedge_position: String,
}

/// A glider and everything the weight-and-balance calculations read from it.
///
/// Weighings are kept in insertion order; the current configuration is always
/// the chronologically latest one, see [`Glider::latest_weighing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glider {
    registration: String,
    model: String,
    brand: String,
    serial_number: String,
    single_seat: bool,
    datum: DatumConvention,
    pilot_position: PilotPosition,
    datum_description: DatumDescription,
    limits: Option<Limits>,
    arms: Option<Arms>,
    weighings: Vec<Weighing>,
    envelope: Vec<EnvelopePoint>,
    instruments: Vec<Instrument>,
}

impl Glider {
    /// Creates a glider with the wing leading edge two-point datum, pilot forward of the datum,
    /// no limits, no arms and no history.
    pub fn new(registration: &str, model: &str, brand: &str, serial_number: &str, single_seat: bool) -> Self {
        Self {
            registration: String::from(registration),
            model: String::from(model),
            brand: String::from(brand),
            serial_number: String::from(serial_number),
            single_seat,
            datum: DatumConvention::Wing2PointsAft,
            pilot_position: PilotPosition::ForwardOfDatum,
            datum_description: DatumDescription::default(),
            limits: None,
            arms: None,
            weighings: Vec::new(),
            envelope: Vec::new(),
            instruments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_convention(mut self, datum: DatumConvention, pilot_position: PilotPosition) -> Self {
        self.datum = datum;
        self.pilot_position = pilot_position;
        self
    }

    #[must_use]
    pub fn with_datum_description(mut self, description: DatumDescription) -> Self {
        self.datum_description = description;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    #[must_use]
    pub fn with_arms(mut self, arms: Arms) -> Self {
        self.arms = Some(arms);
        self
    }

    #[must_use]
    pub fn with_weighing(mut self, weighing: Weighing) -> Self {
        self.weighings.push(weighing);
        self
    }

    #[must_use]
    pub fn with_envelope<P: Into<EnvelopePoint>>(mut self, points: impl IntoIterator<Item = P>) -> Self {
        self.envelope = points.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_instruments(mut self, instruments: Vec<Instrument>) -> Self {
        self.instruments = instruments;
        self
    }

    pub fn registration(&self) -> &str { &self.registration }
    pub fn model(&self) -> &str { &self.model }
    pub fn brand(&self) -> &str { &self.brand }
    pub fn serial_number(&self) -> &str { &self.serial_number }
    pub fn is_single_seat(&self) -> bool { self.single_seat }
    pub fn datum(&self) -> DatumConvention { self.datum }
    pub fn pilot_position(&self) -> PilotPosition { self.pilot_position }
    pub fn datum_description(&self) -> &DatumDescription { &self.datum_description }
    pub fn limits(&self) -> Option<&Limits> { self.limits.as_ref() }
    pub fn arms(&self) -> Option<&Arms> { self.arms.as_ref() }
    pub fn weighings(&self) -> &[Weighing] { &self.weighings }
    pub fn envelope(&self) -> &[EnvelopePoint] { &self.envelope }
    pub fn instruments(&self) -> &[Instrument] { &self.instruments }

    /// Instruments that were on board during the weighing.
    pub fn on_board_instruments(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter().filter(|i| i.on_board)
    }

    /// Returns the chronologically latest weighing.
    ///
    /// Weighings sharing the latest date are ordered by id, the highest id wins.
    pub fn latest_weighing(&self) -> Option<&Weighing> {
        self.weighings.iter().max_by_key(|w| (w.date(), w.id()))
    }

    pub(crate) fn weighings_mut(&mut self) -> &mut Vec<Weighing> { &mut self.weighings }

    pub(crate) fn set_envelope(&mut self, points: Vec<EnvelopePoint>) { self.envelope = points; }

    pub(crate) fn set_instruments(&mut self, instruments: Vec<Instrument>) { self.instruments = instruments; }

    /// Carries the weighing history, envelope and inventory of `previous` over to this glider.
    pub(crate) fn adopt_records(&mut self, previous: Glider) {
        self.weighings = previous.weighings;
        self.envelope = previous.envelope;
        self.instruments = previous.instruments;
    }
}
