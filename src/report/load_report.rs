use crate::balance::{BalanceError, BalancePoint, LoadConfiguration};
use crate::model::Glider;
use std::fmt;

/// A balance point and whether it is acceptable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckedPoint {
    point: BalancePoint,
    in_envelope: bool,
    in_cg_limits: bool,
}

impl CheckedPoint {
    fn check(glider: &Glider, load: &LoadConfiguration) -> Result<Self, BalanceError> {
        let (limits, _) = glider.configuration()?;
        let point = glider.compute(load)?;
        Ok(Self {
            point,
            in_envelope: glider.is_within_envelope(point.cg(), point.total_mass()),
            in_cg_limits: limits.cg_within(point.cg()),
        })
    }

    pub fn point(&self) -> BalancePoint { self.point }
    /// Whether the point lies inside the certified mass/CG polygon.
    pub fn in_envelope(&self) -> bool { self.in_envelope }
    /// Whether the CG lies between the front and rear centering limits.
    pub fn in_cg_limits(&self) -> bool { self.in_cg_limits }
    pub fn is_acceptable(&self) -> bool { self.in_envelope && self.in_cg_limits }
}

/// Mass and CG of one loading, before and, with wing water-ballast, after dumping it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    registration: String,
    load: LoadConfiguration,
    primary: CheckedPoint,
    dumped: Option<CheckedPoint>,
}

impl LoadReport {
    /// # Errors
    /// Any [`BalanceError`] raised by [`Glider::compute`].
    pub fn new(glider: &Glider, load: LoadConfiguration) -> Result<Self, BalanceError> {
        let primary = CheckedPoint::check(glider, &load)?;
        let dumped = if load.has_water_ballast() {
            Some(CheckedPoint::check(glider, &load.without_water_ballast())?)
        } else {
            None
        };
        Ok(Self { registration: String::from(glider.registration()), load, primary, dumped })
    }

    pub fn load(&self) -> &LoadConfiguration { &self.load }
    pub fn primary(&self) -> CheckedPoint { self.primary }
    pub fn dumped(&self) -> Option<CheckedPoint> { self.dumped }

    pub fn is_acceptable(&self) -> bool {
        self.primary.is_acceptable() && self.dumped.is_none_or(|d| d.is_acceptable())
    }
}

fn verdict(ok: bool) -> &'static str { if ok { "ok" } else { "OUT" } }

fn write_point(f: &mut fmt::Formatter<'_>, title: &str, checked: &CheckedPoint) -> fmt::Result {
    writeln!(
        f,
        "  {title:<18} {:.2} kg at {:.1} mm  envelope {}  cg limits {}",
        checked.point.total_mass(),
        checked.point.cg(),
        verdict(checked.in_envelope),
        verdict(checked.in_cg_limits)
    )
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = &self.load;
        writeln!(f, "Loading {}", self.registration)?;
        writeln!(
            f,
            "  pilots {} / {} kg, ballast {} / {} kg, wing water-ballast {} kg",
            l.front_pilot, l.rear_pilot, l.front_ballast, l.rear_ballast, l.wing_water_ballast
        )?;
        write_point(f, "take-off", &self.primary)?;
        if let Some(dumped) = &self.dumped {
            write_point(f, "water-ballast out", dumped)?;
        }
        write!(f, "  verdict {}", verdict(self.is_acceptable()))
    }
}
