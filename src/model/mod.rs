mod datum;
mod envelope;
mod glider;
mod instrument;
mod limits;
mod weighing;

pub use datum::{DatumConvention, PilotPosition};
pub use envelope::EnvelopePoint;
pub use glider::{DatumDescription, Glider, is_valid_registration};
pub use instrument::Instrument;
pub use limits::{Arms, Limits};
pub use weighing::{ComponentMasses, ScaleReadings, Weighing};
