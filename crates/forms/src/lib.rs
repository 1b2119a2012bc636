//! `ecoobra-forms`: the multi-step inspection form.
//!
//! An ordered sequence of pages each edits one slice of a shared store; a
//! wizard drives the cursor and, on the last page, flattens all slices into
//! the single submission payload the backend expects.

pub mod payload;
pub mod store;
pub mod transform;
pub mod wizard;

pub use payload::{InspectionForm, SubmitBlocked};
pub use store::{FormStore, PageValues};
pub use transform::flatten;
pub use wizard::{NextOutcome, PrevOutcome, Wizard, WizardPhase, EXIT_PATH, PAGE_COUNT};
