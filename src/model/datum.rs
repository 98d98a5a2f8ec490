use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Reference plane convention used when the glider was weighed.
///
/// Each variant implies its own reference-arm formula and moment sign convention.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum DatumConvention {
    /// Wing leading edge datum, two weighing points aft of the datum.
    #[strum(to_string = "WING_2POINTS_AFT")]
    Wing2PointsAft,
    /// Wing leading edge datum, one weighing point forward of the datum.
    #[strum(to_string = "WING_1POINT_FWD")]
    Wing1PointFwd,
    /// Wing leading edge datum, main wheel forward of the datum.
    #[strum(to_string = "WING_WHEEL_FWD")]
    WingWheelFwd,
    /// Datum ahead of the whole glider.
    #[strum(to_string = "FORWARD_GLIDER")]
    ForwardGlider,
}

impl DatumConvention {
    /// Integer code under which the convention is persisted.
    pub fn code(self) -> i64 {
        match self {
            DatumConvention::Wing2PointsAft => 1,
            DatumConvention::Wing1PointFwd => 2,
            DatumConvention::WingWheelFwd => 3,
            DatumConvention::ForwardGlider => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(DatumConvention::Wing2PointsAft),
            2 => Some(DatumConvention::Wing1PointFwd),
            3 => Some(DatumConvention::WingWheelFwd),
            4 => Some(DatumConvention::ForwardGlider),
            _ => None,
        }
    }
}

/// Position of the front pilot relative to the datum.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum PilotPosition {
    #[strum(to_string = "forward of datum")]
    ForwardOfDatum,
    #[strum(to_string = "aft of datum")]
    AftOfDatum,
}

impl PilotPosition {
    pub fn code(self) -> i64 {
        match self {
            PilotPosition::ForwardOfDatum => 1,
            PilotPosition::AftOfDatum => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(PilotPosition::ForwardOfDatum),
            2 => Some(PilotPosition::AftOfDatum),
            _ => None,
        }
    }
}
