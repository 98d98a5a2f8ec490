use super::error::StoreError;
use crate::model::{
    Arms, ComponentMasses, DatumConvention, DatumDescription, EnvelopePoint, Glider, Instrument, Limits,
    PilotPosition, ScaleReadings, Weighing, is_valid_registration,
};
use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

/// One row of the glider table.
///
/// Limits and arms are either fully set or fully absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GliderRow {
    pub registration: String,
    pub model: String,
    pub brand: String,
    pub serial_number: String,
    pub single_seat: bool,
    pub datum: i64,
    pub pilot_position: i64,
    #[serde(default)]
    pub datum_label: String,
    #[serde(default)]
    pub wedge: String,
    #[serde(default)]
    pub wedge_position: String,
    pub mmwp: Option<f64>,
    pub mmwv: Option<f64>,
    pub mmenp: Option<f64>,
    pub mm_harnais: Option<f64>,
    pub weight_min_pilot: Option<f64>,
    pub front_centering: Option<f64>,
    pub rear_centering: Option<f64>,
    pub arm_front_pilot: Option<f64>,
    pub arm_rear_pilot: Option<f64>,
    pub arm_waterballast: Option<f64>,
    pub arm_front_ballast: Option<f64>,
    #[serde(alias = "arm_rear_watterballast_or_ballast")]
    pub arm_rear_ballast: Option<f64>,
    pub arm_gas_tank: Option<f64>,
    pub arm_instruments_panel: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeighingRow {
    pub id: u32,
    pub date: NaiveDate,
    pub registration: String,
    pub p1: f64,
    pub p2: f64,
    pub right_wing_weight: f64,
    pub left_wing_weight: f64,
    pub tail_weight: f64,
    pub fuselage_weight: f64,
    #[serde(default)]
    pub fix_ballast_weight: f64,
    #[serde(rename = "A", default)]
    pub a: f64,
    #[serde(rename = "D", default)]
    pub d: f64,
}

/// One vertex of a glider's mass/CG envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WbLimitRow {
    pub registration: String,
    pub point_index: u32,
    pub center_of_gravity: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub id: u32,
    pub registration: String,
    pub on_board: bool,
    pub instrument: String,
    pub brand: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub number: String,
    pub date: Option<NaiveDate>,
    pub seat: String,
}

/// The whole record set as persisted, one list per table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub gliders: Vec<GliderRow>,
    #[serde(default)]
    pub weighings: Vec<WeighingRow>,
    #[serde(default)]
    pub wb_limits: Vec<WbLimitRow>,
    #[serde(default)]
    pub inventory: Vec<InventoryRow>,
}

fn invalid(table: &'static str, key: impl ToString, reason: impl ToString) -> StoreError {
    StoreError::InvalidRecord { table, key: key.to_string(), reason: reason.to_string() }
}

/// Collects a group of optional columns: all set, all empty, or an error naming the first gap.
fn all_or_none<const N: usize>(columns: [(&'static str, Option<f64>); N]) -> Result<Option<[f64; N]>, &'static str> {
    if columns.iter().all(|(_, v)| v.is_none()) {
        return Ok(None);
    }
    let mut values = [0.0; N];
    for (slot, (name, value)) in values.iter_mut().zip(columns) {
        *slot = value.ok_or(name)?;
    }
    Ok(Some(values))
}

impl GliderRow {
    fn into_glider(self) -> Result<Glider, StoreError> {
        const TABLE: &str = "GLIDER";
        let key = self.registration.clone();
        if !is_valid_registration(&key) {
            return Err(invalid(TABLE, &key, "registration does not match X-XXXX"));
        }
        let datum = DatumConvention::from_code(self.datum)
            .ok_or_else(|| invalid(TABLE, &key, format!("unknown datum code {}", self.datum)))?;
        let position = PilotPosition::from_code(self.pilot_position)
            .ok_or_else(|| invalid(TABLE, &key, format!("unknown pilot position code {}", self.pilot_position)))?;
        let limits = all_or_none([
            ("mmwp", self.mmwp),
            ("mmwv", self.mmwv),
            ("mmenp", self.mmenp),
            ("mm_harnais", self.mm_harnais),
            ("weight_min_pilot", self.weight_min_pilot),
            ("front_centering", self.front_centering),
            ("rear_centering", self.rear_centering),
        ])
        .map_err(|column| invalid(TABLE, &key, format!("limits incomplete, {column} missing")))?;
        let arms = all_or_none([
            ("arm_front_pilot", self.arm_front_pilot),
            ("arm_rear_pilot", self.arm_rear_pilot),
            ("arm_waterballast", self.arm_waterballast),
            ("arm_front_ballast", self.arm_front_ballast),
            ("arm_rear_ballast", self.arm_rear_ballast),
            ("arm_gas_tank", self.arm_gas_tank),
            ("arm_instruments_panel", self.arm_instruments_panel),
        ])
        .map_err(|column| invalid(TABLE, &key, format!("arms incomplete, {column} missing")))?;

        let mut glider = Glider::new(&self.registration, &self.model, &self.brand, &self.serial_number, self.single_seat)
            .with_convention(datum, position)
            .with_datum_description(DatumDescription {
                label: self.datum_label,
                wedge: self.wedge,
                wedge_position: self.wedge_position,
            });
        if let Some([max_mass_full_wb, max_mass_wb_empty, max_mass_non_lifting, max_seat_mass, min_pilot_mass, front, rear]) =
            limits
        {
            if front > rear {
                return Err(invalid(TABLE, &key, "front centering limit is aft of the rear one"));
            }
            glider = glider.with_limits(Limits {
                max_mass_full_wb,
                max_mass_wb_empty,
                max_mass_non_lifting,
                max_seat_mass,
                min_pilot_mass,
                front_cg_limit: front,
                rear_cg_limit: rear,
            });
        }
        if let Some([front_pilot, rear_pilot, wing_water_ballast, front_ballast, rear_ballast, fuel_tank, instrument_panel]) =
            arms
        {
            glider = glider.with_arms(Arms {
                front_pilot,
                rear_pilot,
                wing_water_ballast,
                front_ballast,
                rear_ballast,
                fuel_tank,
                instrument_panel,
            });
        }
        Ok(glider)
    }

    fn from_glider(glider: &Glider) -> Self {
        let limits = glider.limits();
        let arms = glider.arms();
        let description = glider.datum_description();
        Self {
            registration: String::from(glider.registration()),
            model: String::from(glider.model()),
            brand: String::from(glider.brand()),
            serial_number: String::from(glider.serial_number()),
            single_seat: glider.is_single_seat(),
            datum: glider.datum().code(),
            pilot_position: glider.pilot_position().code(),
            datum_label: description.label.clone(),
            wedge: description.wedge.clone(),
            wedge_position: description.wedge_position.clone(),
            mmwp: limits.map(|l| l.max_mass_full_wb),
            mmwv: limits.map(|l| l.max_mass_wb_empty),
            mmenp: limits.map(|l| l.max_mass_non_lifting),
            mm_harnais: limits.map(|l| l.max_seat_mass),
            weight_min_pilot: limits.map(|l| l.min_pilot_mass),
            front_centering: limits.map(|l| l.front_cg_limit),
            rear_centering: limits.map(|l| l.rear_cg_limit),
            arm_front_pilot: arms.map(|a| a.front_pilot),
            arm_rear_pilot: arms.map(|a| a.rear_pilot),
            arm_waterballast: arms.map(|a| a.wing_water_ballast),
            arm_front_ballast: arms.map(|a| a.front_ballast),
            arm_rear_ballast: arms.map(|a| a.rear_ballast),
            arm_gas_tank: arms.map(|a| a.fuel_tank),
            arm_instruments_panel: arms.map(|a| a.instrument_panel),
        }
    }
}

impl WeighingRow {
    fn into_weighing(self) -> Result<Weighing, StoreError> {
        let values = [
            self.p1,
            self.p2,
            self.right_wing_weight,
            self.left_wing_weight,
            self.tail_weight,
            self.fuselage_weight,
            self.fix_ballast_weight,
            self.a,
            self.d,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("WEIGHING", self.id, "non-finite value"));
        }
        Ok(Weighing::new(
            self.id,
            self.date,
            ScaleReadings { p1: self.p1, p2: self.p2, a: self.a, d: self.d },
            ComponentMasses {
                right_wing: self.right_wing_weight,
                left_wing: self.left_wing_weight,
                tail: self.tail_weight,
                fuselage: self.fuselage_weight,
                fixed_ballast: self.fix_ballast_weight,
            },
        ))
    }

    fn from_weighing(registration: &str, weighing: &Weighing) -> Self {
        let r = weighing.readings();
        let m = weighing.masses();
        Self {
            id: weighing.id(),
            date: weighing.date(),
            registration: String::from(registration),
            p1: r.p1,
            p2: r.p2,
            right_wing_weight: m.right_wing,
            left_wing_weight: m.left_wing,
            tail_weight: m.tail,
            fuselage_weight: m.fuselage,
            fix_ballast_weight: m.fixed_ballast,
            a: r.a,
            d: r.d,
        }
    }
}

fn owner<'a>(gliders: &'a mut HashMap<String, Glider>, registration: &str) -> Result<&'a mut Glider, StoreError> {
    gliders
        .get_mut(registration)
        .ok_or_else(|| StoreError::UnknownRegistration { registration: String::from(registration) })
}

impl From<InventoryRow> for Instrument {
    fn from(row: InventoryRow) -> Self {
        Instrument {
            on_board: row.on_board,
            instrument: row.instrument,
            brand: row.brand,
            kind: row.kind,
            number: row.number,
            date: row.date,
            seat: row.seat,
        }
    }
}

impl Snapshot {
    /// Reads a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Assembles the gliders with their weighings, envelope and inventory.
    ///
    /// Envelope vertices are ordered by `point_index`, instruments by id. Rows referring to
    /// a registration absent from the glider table are rejected, so are weighing ids that
    /// appear twice in the table.
    ///
    /// # Errors
    /// [`StoreError::InvalidRecord`], [`StoreError::DuplicateRegistration`] or
    /// [`StoreError::UnknownRegistration`].
    pub fn into_gliders(self) -> Result<Vec<Glider>, StoreError> {
        let mut gliders: HashMap<String, Glider> = HashMap::with_capacity(self.gliders.len());
        let mut order = Vec::with_capacity(self.gliders.len());
        for row in self.gliders {
            let glider = row.into_glider()?;
            let registration = String::from(glider.registration());
            if gliders.contains_key(&registration) {
                return Err(StoreError::DuplicateRegistration { registration });
            }
            order.push(registration.clone());
            gliders.insert(registration, glider);
        }

        if let Some(dup) = self.weighings.iter().map(|row| row.id).duplicates().next() {
            return Err(invalid("WEIGHING", dup, "id used by more than one weighing"));
        }
        for row in self.weighings {
            let registration = row.registration.clone();
            let weighing = row.into_weighing()?;
            owner(&mut gliders, &registration)?.weighings_mut().push(weighing);
        }

        let envelopes = self.wb_limits.into_iter().into_group_map_by(|row| row.registration.clone());
        for (registration, rows) in envelopes {
            if let Some(dup) = rows.iter().map(|r| r.point_index).duplicates().next() {
                return Err(invalid("WB_LIMIT", &registration, format!("point_index {dup} repeated")));
            }
            let points = rows
                .into_iter()
                .sorted_by_key(|r| r.point_index)
                .map(|r| EnvelopePoint::new(r.center_of_gravity, r.weight))
                .collect();
            owner(&mut gliders, &registration)?.set_envelope(points);
        }

        let inventories = self.inventory.into_iter().into_group_map_by(|row| row.registration.clone());
        for (registration, rows) in inventories {
            let instruments = rows.into_iter().sorted_by_key(|r| r.id).map(Instrument::from).collect();
            owner(&mut gliders, &registration)?.set_instruments(instruments);
        }

        Ok(order.into_iter().filter_map(|r| gliders.remove(&r)).collect())
    }

    /// Flattens gliders back into table rows.
    pub fn from_gliders<'a>(gliders: impl IntoIterator<Item = &'a Glider>) -> Self {
        let mut snapshot = Snapshot::default();
        let mut inventory_id = 0;
        for glider in gliders {
            let registration = glider.registration();
            snapshot.gliders.push(GliderRow::from_glider(glider));
            snapshot.weighings.extend(glider.weighings().iter().map(|w| WeighingRow::from_weighing(registration, w)));
            snapshot.wb_limits.extend(glider.envelope().iter().zip(0..).map(|(p, point_index)| WbLimitRow {
                registration: String::from(registration),
                point_index,
                center_of_gravity: p.centering,
                weight: p.mass,
            }));
            for i in glider.instruments() {
                inventory_id += 1;
                snapshot.inventory.push(InventoryRow {
                    id: inventory_id,
                    registration: String::from(registration),
                    on_board: i.on_board,
                    instrument: i.instrument.clone(),
                    brand: i.brand.clone(),
                    kind: i.kind.clone(),
                    number: i.number.clone(),
                    date: i.date,
                    seat: i.seat.clone(),
                });
            }
        }
        snapshot
    }
}
