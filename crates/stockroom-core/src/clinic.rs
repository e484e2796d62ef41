//! # Clinic Registry
//!
//! Patients and the prescriptions issued to them, each in its own
//! [`KeyedRepository`].
//!
//! ## Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ClinicRegistry                                   │
//! │                                                                         │
//! │   patients: KeyedRepository<Patient>                                   │
//! │        ▲                                                                │
//! │        │ patient_id (must exist at prescribe time)                     │
//! │        │                                                                │
//! │   prescriptions: KeyedRepository<Prescription>                         │
//! │                                                                         │
//! │   prescriptions_for(p) = prescriptions filtered by patient_id == p,    │
//! │                          computed on every call                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are allocated by the registry as `max(id) + 1`, starting at 1.

use chrono::{Days, NaiveDate};
use tracing::{debug, info};

use crate::error::{RepoError, RepoResult};
use crate::repository::KeyedRepository;
use crate::types::{Entity, EntityId, Patient, Prescription};

#[derive(Debug, Clone, Default)]
pub struct ClinicRegistry {
    patients: KeyedRepository<Patient>,
    prescriptions: KeyedRepository<Prescription>,
}

impl ClinicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the sample patients and prescriptions.
    ///
    /// Issue dates are relative to `today`.
    pub fn seeded(today: NaiveDate) -> RepoResult<Self> {
        let mut registry = Self::new();

        registry.patients.add(Patient::new(1, "John Doe", 35, "Male"))?;
        registry.patients.add(Patient::new(2, "Jane Smith", 28, "Female"))?;
        registry
            .patients
            .add(Patient::new(3, "Michael Johnson", 45, "Male"))?;

        let issued = |days: u64| today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        registry
            .prescriptions
            .add(Prescription::new(1, 1, "Ibuprofen", issued(7)))?;
        registry
            .prescriptions
            .add(Prescription::new(2, 1, "Amoxicillin", issued(3)))?;
        registry
            .prescriptions
            .add(Prescription::new(3, 2, "Paracetamol", issued(5)))?;
        registry
            .prescriptions
            .add(Prescription::new(4, 3, "Lisinopril", issued(1)))?;

        info!(
            patients = registry.patients.len(),
            prescriptions = registry.prescriptions.len(),
            "Clinic seeded"
        );
        Ok(registry)
    }

    /// Registers a new patient under the next free id.
    pub fn admit(
        &mut self,
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> RepoResult<Patient> {
        let patient = Patient::new(next_id(&self.patients), name, age, gender);
        self.patients.add(patient.clone())?;
        debug!(id = patient.id(), "Patient admitted");
        Ok(patient)
    }

    /// Issues a prescription to an existing patient.
    ///
    /// ## Errors
    /// - `NotFound(patient_id)` if no such patient was admitted
    pub fn prescribe(
        &mut self,
        patient_id: EntityId,
        medication_name: impl Into<String>,
        issued: NaiveDate,
    ) -> RepoResult<Prescription> {
        if !self.patients.contains(patient_id) {
            return Err(RepoError::NotFound(patient_id));
        }

        let prescription = Prescription::new(
            next_id(&self.prescriptions),
            patient_id,
            medication_name,
            issued,
        );
        self.prescriptions.add(prescription.clone())?;
        debug!(id = prescription.id(), patient_id, "Prescription issued");
        Ok(prescription)
    }

    pub fn patient(&self, id: EntityId) -> RepoResult<Patient> {
        self.patients.get(id)
    }

    /// Snapshot of all patients in admission order.
    pub fn patients(&self) -> Vec<Patient> {
        self.patients.list_all()
    }

    /// One patient's prescriptions in issue order; empty when there are none.
    pub fn prescriptions_for(&self, patient_id: EntityId) -> Vec<Prescription> {
        self.prescriptions
            .iter()
            .filter(|rx| rx.patient_id == patient_id)
            .cloned()
            .collect()
    }

    /// Snapshot of every prescription in issue order.
    pub fn prescriptions(&self) -> Vec<Prescription> {
        self.prescriptions.list_all()
    }
}

fn next_id<T: Entity>(repo: &KeyedRepository<T>) -> EntityId {
    repo.iter().map(|entry| entry.id()).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_seeded_registry() {
        let clinic = ClinicRegistry::seeded(today()).unwrap();
        assert_eq!(clinic.patients().len(), 3);

        let meds: Vec<_> = clinic
            .prescriptions_for(1)
            .into_iter()
            .map(|rx| rx.medication_name)
            .collect();
        assert_eq!(meds, vec!["Ibuprofen", "Amoxicillin"]);
        assert_eq!(
            clinic.prescriptions_for(3)[0].date_issued,
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        );
    }

    #[test]
    fn test_admit_allocates_next_id() {
        let mut clinic = ClinicRegistry::seeded(today()).unwrap();
        let patient = clinic.admit("Ada Obi", 52, "Female").unwrap();

        assert_eq!(patient.id(), 4);
        assert_eq!(clinic.patient(4).unwrap().name, "Ada Obi");
    }

    #[test]
    fn test_empty_registry_starts_at_one() {
        let mut clinic = ClinicRegistry::new();
        assert_eq!(clinic.admit("First", 20, "Male").unwrap().id(), 1);
    }

    #[test]
    fn test_prescribe_requires_patient() {
        let mut clinic = ClinicRegistry::seeded(today()).unwrap();

        assert_eq!(
            clinic.prescribe(42, "Aspirin", today()),
            Err(RepoError::NotFound(42))
        );
        assert_eq!(clinic.prescriptions().len(), 4);
    }

    #[test]
    fn test_prescriptions_visible_immediately() {
        let mut clinic = ClinicRegistry::seeded(today()).unwrap();
        let rx = clinic.prescribe(2, "Cetirizine", today()).unwrap();

        assert_eq!(rx.id(), 5);
        let for_jane = clinic.prescriptions_for(2);
        assert_eq!(for_jane.len(), 2);
        assert_eq!(for_jane[1].medication_name, "Cetirizine");
        assert!(clinic.prescriptions_for(99).is_empty());
    }
}
