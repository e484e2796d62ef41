//! # Clinic Menu
//!
//! Patients and their prescriptions, seeded with sample records.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use stockroom_core::{ClinicRegistry, Entity, EntityId};

use super::{invalid_option, run_loop, Flow};
use crate::console::Console;
use crate::error::{AppError, AppResult};

const OPTIONS: &[&str] = &[
    "View All Patients",
    "View Patient Prescriptions",
    "Add New Patient",
    "Add New Prescription",
    "Exit",
];

pub struct ClinicMenu {
    registry: ClinicRegistry,
    today: NaiveDate,
}

impl ClinicMenu {
    /// Seeds the registry; new prescriptions are issued on `today`.
    pub fn new(today: NaiveDate) -> AppResult<Self> {
        Ok(ClinicMenu {
            registry: ClinicRegistry::seeded(today)?,
            today,
        })
    }

    pub fn registry(&self) -> &ClinicRegistry {
        &self.registry
    }

    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> AppResult<()> {
        console.say("=== Healthcare Management System ===")?;
        run_loop(console, OPTIONS, |console, choice| match choice {
            "1" => self.view_patients(console),
            "2" => self.view_prescriptions(console),
            "3" => self.add_patient(console),
            "4" => self.add_prescription(console),
            "5" => Ok(Flow::Exit),
            _ => invalid_option(console),
        })
    }

    fn view_patients<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> AppResult<Flow> {
        console.say("\n=== Patient List ===")?;
        for patient in self.registry.patients() {
            console.say(patient)?;
        }
        Ok(Flow::Continue)
    }

    fn view_prescriptions<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> AppResult<Flow> {
        let patient_id: EntityId = match console.ask_parsed("\nEnter Patient ID: ", "patient id") {
            Ok(id) => id,
            Err(AppError::InvalidInput(_)) => {
                console.say("Invalid Patient ID!")?;
                return Ok(Flow::Continue);
            }
            Err(err) => return Err(err),
        };

        let prescriptions = self.registry.prescriptions_for(patient_id);
        if prescriptions.is_empty() {
            console.say("No prescriptions found for this patient.")?;
            return Ok(Flow::Continue);
        }

        console.say(format_args!("\nPrescriptions for Patient ID {patient_id}:"))?;
        for prescription in prescriptions {
            console.say(prescription)?;
        }
        Ok(Flow::Continue)
    }

    fn add_patient<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> AppResult<Flow> {
        let name = console.ask("\nEnter Patient Name: ")?;
        let age: u32 = console.ask_parsed("Enter Age: ", "age")?;
        let gender = console.ask("Enter Gender: ")?;

        let patient = self.registry.admit(name, age, gender)?;
        console.say(format_args!("Patient added successfully with ID: {}", patient.id()))?;
        Ok(Flow::Continue)
    }

    fn add_prescription<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> AppResult<Flow> {
        let patient_id: EntityId = console.ask_parsed("\nEnter Patient ID: ", "patient id")?;
        let medication = console.ask("Enter Medication Name: ")?;

        self.registry.prescribe(patient_id, medication, self.today)?;
        console.say("Prescription added successfully!")?;
        Ok(Flow::Continue)
    }
}
