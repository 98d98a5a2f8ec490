use super::error::StoreError;
use super::snapshot::Snapshot;
use crate::audit::AuditLog;
use crate::log;
use crate::model::{EnvelopePoint, Glider, Instrument, Weighing, is_valid_registration};
use itertools::Itertools;
use std::{collections::BTreeMap, path::Path};

/// Read access to glider records.
pub trait GliderStore {
    /// Returns an owned snapshot of the glider, later edits do not affect it.
    fn glider(&self, registration: &str) -> Result<Glider, StoreError>;
    /// All known registrations, sorted.
    fn registrations(&self) -> Vec<String>;
}

/// In-memory set of gliders, keyed by registration.
///
/// Every edit records exactly one audit event once it has succeeded. Weighing ids are
/// unique across the fleet and only ever increase.
#[derive(Debug, Clone)]
pub struct Fleet {
    gliders: BTreeMap<String, Glider>,
    next_weighing_id: u32,
}

impl Fleet {
    pub fn new() -> Self { Self { gliders: BTreeMap::new(), next_weighing_id: 1 } }

    /// Builds a fleet from already assembled gliders, keeping their weighing ids.
    ///
    /// # Errors
    /// [`StoreError::InvalidRecord`] on table `WEIGHING` if an id is used twice anywhere in
    /// the fleet or if the largest id leaves no room for a next one.
    pub fn from_gliders(gliders: Vec<Glider>) -> Result<Self, StoreError> {
        let ids = || gliders.iter().flat_map(Glider::weighings).map(Weighing::id);
        if let Some(id) = ids().duplicates().next() {
            return Err(StoreError::InvalidRecord {
                table: "WEIGHING",
                key: id.to_string(),
                reason: String::from("weighing id used more than once"),
            });
        }
        let next_weighing_id = match ids().max() {
            Some(max_id) => max_id.checked_add(1).ok_or_else(|| id_space_exhausted(max_id))?,
            None => 1,
        };
        let mut fleet = Self { gliders: BTreeMap::new(), next_weighing_id };
        for glider in gliders {
            let registration = String::from(glider.registration());
            if fleet.gliders.contains_key(&registration) {
                return Err(StoreError::DuplicateRegistration { registration });
            }
            fleet.gliders.insert(registration, glider);
        }
        Ok(fleet)
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let gliders = Snapshot::load(path)?.into_gliders()?;
        log!("Loaded {} glider(s) from {}", gliders.len(), path.display());
        Self::from_gliders(gliders)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> { self.snapshot().save(path) }

    pub fn snapshot(&self) -> Snapshot { Snapshot::from_gliders(self.gliders.values()) }

    pub fn len(&self) -> usize { self.gliders.len() }

    pub fn is_empty(&self) -> bool { self.gliders.is_empty() }

    fn get_mut(&mut self, registration: &str) -> Result<&mut Glider, StoreError> {
        self.gliders
            .get_mut(registration)
            .ok_or_else(|| StoreError::UnknownRegistration { registration: String::from(registration) })
    }

    fn take_weighing_id(&mut self) -> Result<u32, StoreError> {
        let id = self.next_weighing_id;
        self.next_weighing_id = id.checked_add(1).ok_or_else(|| id_space_exhausted(id))?;
        Ok(id)
    }

    fn record(audit: &dyn AuditLog, username: &str, event: String) {
        log!("{username}: {event}");
        audit.log(username, &event);
    }

    /// Adds a new glider. Weighings it already carries get fresh fleet ids.
    ///
    /// # Errors
    /// [`StoreError::InvalidRecord`] for a malformed registration,
    /// [`StoreError::DuplicateRegistration`] if the registration is taken.
    pub fn add_glider(&mut self, mut glider: Glider, username: &str, audit: &dyn AuditLog) -> Result<(), StoreError> {
        let registration = String::from(glider.registration());
        if !is_valid_registration(&registration) {
            return Err(StoreError::InvalidRecord {
                table: "GLIDER",
                key: registration,
                reason: String::from("registration does not match X-XXXX"),
            });
        }
        if self.gliders.contains_key(&registration) {
            return Err(StoreError::DuplicateRegistration { registration });
        }
        let weighings = std::mem::take(glider.weighings_mut());
        for weighing in weighings {
            let id = self.take_weighing_id()?;
            glider.weighings_mut().push(weighing.with_id(id));
        }
        Self::record(audit, username, format!("added glider {registration}"));
        self.gliders.insert(registration, glider);
        Ok(())
    }

    /// Replaces the description, limits and arms of a glider. Weighings, envelope and
    /// inventory are kept.
    pub fn update_glider(&mut self, mut glider: Glider, username: &str, audit: &dyn AuditLog) -> Result<(), StoreError> {
        let registration = String::from(glider.registration());
        let previous = self
            .gliders
            .remove(&registration)
            .ok_or_else(|| StoreError::UnknownRegistration { registration: registration.clone() })?;
        glider.adopt_records(previous);
        Self::record(audit, username, format!("updated glider {registration}"));
        self.gliders.insert(registration, glider);
        Ok(())
    }

    /// Removes a glider together with all its records.
    pub fn delete_glider(&mut self, registration: &str, username: &str, audit: &dyn AuditLog) -> Result<Glider, StoreError> {
        let glider = self
            .gliders
            .remove(registration)
            .ok_or_else(|| StoreError::UnknownRegistration { registration: String::from(registration) })?;
        Self::record(audit, username, format!("deleted glider {registration}"));
        Ok(glider)
    }

    /// Appends a weighing, ignoring its id in favour of the next fleet id.
    ///
    /// # Returns
    /// - The id assigned to the weighing.
    pub fn add_weighing(
        &mut self,
        registration: &str,
        weighing: Weighing,
        username: &str,
        audit: &dyn AuditLog,
    ) -> Result<u32, StoreError> {
        self.get_mut(registration)?;
        let id = self.take_weighing_id()?;
        let date = weighing.date();
        self.get_mut(registration)?.weighings_mut().push(weighing.with_id(id));
        Self::record(audit, username, format!("added weighing #{id} of {date} to {registration}"));
        Ok(id)
    }

    /// Replaces the weighing with the same id.
    pub fn update_weighing(
        &mut self,
        registration: &str,
        weighing: Weighing,
        username: &str,
        audit: &dyn AuditLog,
    ) -> Result<(), StoreError> {
        let id = weighing.id();
        let slot = self
            .get_mut(registration)?
            .weighings_mut()
            .iter_mut()
            .find(|w| w.id() == id)
            .ok_or_else(|| StoreError::UnknownWeighing { registration: String::from(registration), id })?;
        *slot = weighing;
        Self::record(audit, username, format!("updated weighing #{id} of {registration}"));
        Ok(())
    }

    pub fn delete_weighing(
        &mut self,
        registration: &str,
        id: u32,
        username: &str,
        audit: &dyn AuditLog,
    ) -> Result<Weighing, StoreError> {
        let weighings = self.get_mut(registration)?.weighings_mut();
        let index = weighings
            .iter()
            .position(|w| w.id() == id)
            .ok_or_else(|| StoreError::UnknownWeighing { registration: String::from(registration), id })?;
        let removed = weighings.remove(index);
        Self::record(audit, username, format!("deleted weighing #{id} of {registration}"));
        Ok(removed)
    }

    /// Replaces the envelope vertices, given in polygon order.
    pub fn replace_envelope(
        &mut self,
        registration: &str,
        points: Vec<EnvelopePoint>,
        username: &str,
        audit: &dyn AuditLog,
    ) -> Result<(), StoreError> {
        if let Some(index) = points.iter().position(|p| !p.centering.is_finite() || !p.mass.is_finite()) {
            return Err(StoreError::InvalidRecord {
                table: "WB_LIMIT",
                key: String::from(registration),
                reason: format!("point {index} is not finite"),
            });
        }
        let count = points.len();
        self.get_mut(registration)?.set_envelope(points);
        Self::record(audit, username, format!("replaced envelope of {registration} ({count} points)"));
        Ok(())
    }

    pub fn replace_inventory(
        &mut self,
        registration: &str,
        instruments: Vec<Instrument>,
        username: &str,
        audit: &dyn AuditLog,
    ) -> Result<(), StoreError> {
        let count = instruments.len();
        self.get_mut(registration)?.set_instruments(instruments);
        Self::record(audit, username, format!("replaced inventory of {registration} ({count} instruments)"));
        Ok(())
    }
}

fn id_space_exhausted(id: u32) -> StoreError {
    StoreError::InvalidRecord {
        table: "WEIGHING",
        key: id.to_string(),
        reason: String::from("no weighing id left after this one"),
    }
}

impl Default for Fleet {
    fn default() -> Self { Self::new() }
}

impl GliderStore for Fleet {
    fn glider(&self, registration: &str) -> Result<Glider, StoreError> {
        self.gliders
            .get(registration)
            .cloned()
            .ok_or_else(|| StoreError::UnknownRegistration { registration: String::from(registration) })
    }

    fn registrations(&self) -> Vec<String> { self.gliders.keys().cloned().collect() }
}
