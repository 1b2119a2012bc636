//! Wizard driver: cursor over the page sequence plus the submission gate.

use crate::payload::{InspectionForm, SubmitBlocked};
use crate::store::{FormStore, PageValues};
use crate::transform::flatten;

/// Number of inspection form pages.
pub const PAGE_COUNT: usize = 13;

/// Where backing out of the first page leads (the obra-selection view).
pub const EXIT_PATH: &str = "/obraslist";

/// Wizard lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// A page is being edited.
    Editing,
    /// The flattened payload passed its preconditions and is in flight.
    Submitting,
    /// Submission succeeded; accumulated state has been discarded.
    Done,
}

/// Result of a forward step.
#[derive(Debug, Clone, PartialEq)]
pub enum NextOutcome {
    /// Moved to the page at this index.
    Advanced(usize),
    /// Last page completed: here is the validated payload to post.
    Submit(InspectionForm),
}

/// Result of a backward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrevOutcome {
    /// Moved to the page at this index.
    MovedTo(usize),
    /// Backed out of the first page; leave the wizard via [`EXIT_PATH`].
    Exit,
}

/// Steps through the page sequence, merging each page's values into the
/// shared store, and flattens everything on the final step.
///
/// State is cleared only by [`Wizard::complete`]; a failed submission keeps
/// every slice so the user can retry without re-entering prior pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    store: FormStore,
    page_index: usize,
    page_count: usize,
    phase: WizardPhase,
}

impl Wizard {
    pub fn new() -> Self {
        Self::with_page_count(PAGE_COUNT)
    }

    /// Wizard over a shorter sequence (tests, previews).
    pub fn with_page_count(page_count: usize) -> Self {
        debug_assert!(page_count > 0);
        Self {
            store: FormStore::new(),
            page_index: 0,
            page_count,
            phase: WizardPhase::Editing,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn is_last_page(&self) -> bool {
        self.page_index + 1 == self.page_count
    }

    fn current_page_key(&self) -> String {
        FormStore::page_key(self.page_index)
    }

    /// Default values handed to the current page when it renders.
    pub fn current_defaults(&self) -> PageValues {
        self.store.slice_or_empty(&self.current_page_key())
    }

    /// Merge values into the current page's slice without moving the cursor
    /// (field-by-field edits).
    pub fn update_current(&mut self, values: PageValues) {
        self.store.update(&self.current_page_key(), values);
    }

    /// Merge the page's values, then advance. On the last page this instead
    /// flattens the store and gates on the preconditions.
    ///
    /// On `Err` the wizard stays on the current page with all state intact;
    /// the caller shows the message and must not post anything.
    pub fn next(&mut self, values: PageValues) -> Result<NextOutcome, SubmitBlocked> {
        self.update_current(values);

        if self.page_index + 1 < self.page_count {
            self.page_index += 1;
            return Ok(NextOutcome::Advanced(self.page_index));
        }

        let form = flatten(&self.store);
        form.validate()?;
        self.phase = WizardPhase::Submitting;
        tracing::debug!(pages = self.page_count, "inspection form ready to submit");
        Ok(NextOutcome::Submit(form))
    }

    /// Move back one page, or leave the wizard from the first page.
    pub fn prev(&mut self) -> PrevOutcome {
        if self.page_index == 0 {
            return PrevOutcome::Exit;
        }
        self.page_index -= 1;
        PrevOutcome::MovedTo(self.page_index)
    }

    /// Submission succeeded: discard accumulated state. The only point where
    /// data is intentionally dropped.
    pub fn complete(&mut self) {
        self.store.reset();
        self.phase = WizardPhase::Done;
    }

    /// Submission failed: return to editing the last page, state intact.
    pub fn submission_failed(&mut self) {
        self.phase = WizardPhase::Editing;
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(v: serde_json::Value) -> PageValues {
        v.as_object().cloned().expect("object literal")
    }

    fn page1_values() -> PageValues {
        values(json!({
            "tecnico": "5",
            "obra": "9",
            "fecha": "2024-01-01",
            "motivos": ["Reunión"]
        }))
    }

    #[test]
    fn next_advances_until_the_last_page() {
        let mut wizard = Wizard::with_page_count(3);
        assert_eq!(wizard.next(PageValues::new()), Ok(NextOutcome::Advanced(1)));
        assert_eq!(wizard.next(PageValues::new()), Ok(NextOutcome::Advanced(2)));
        assert!(wizard.is_last_page());
    }

    #[test]
    fn prev_from_first_page_exits() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.prev(), PrevOutcome::Exit);
        assert_eq!(wizard.page_index(), 0);

        wizard.next(PageValues::new()).unwrap();
        assert_eq!(wizard.prev(), PrevOutcome::MovedTo(0));
    }

    #[test]
    fn four_page_run_produces_the_expected_payload() {
        let mut wizard = Wizard::with_page_count(4);
        wizard.next(page1_values()).unwrap();
        wizard.next(PageValues::new()).unwrap();
        wizard.next(PageValues::new()).unwrap();

        let form = match wizard.next(PageValues::new()) {
            Ok(NextOutcome::Submit(form)) => form,
            other => panic!("expected Submit, got {other:?}"),
        };

        assert_eq!(form.tecnico, Some(5));
        assert_eq!(form.obra, "9");
        assert_eq!(form.fecha, "2024-01-01");
        assert_eq!(form.motivo_de_visita, "Reunión");
        // Untouched sections fall back to their placeholders.
        assert_eq!(form.escombro_limpio, "No Aplica");
        assert_eq!(form.plastico, "No Aplica");
        assert_eq!(form.punto_limpio, "No Hay");
        assert_eq!(wizard.phase(), WizardPhase::Submitting);
    }

    #[test]
    fn missing_technician_blocks_submission_and_keeps_state() {
        let mut wizard = Wizard::with_page_count(2);
        wizard
            .next(values(json!({"obra": "9", "fecha": "2024-01-01", "motivos": ["Reunión"]})))
            .unwrap();

        let err = wizard.next(PageValues::new()).unwrap_err();
        assert_eq!(err, SubmitBlocked::MissingTecnico);
        assert_eq!(wizard.phase(), WizardPhase::Editing);
        assert!(wizard.is_last_page());
        assert!(!wizard.store().is_empty());
    }

    #[test]
    fn complete_resets_the_store() {
        let mut wizard = Wizard::with_page_count(1);
        let outcome = wizard.next(page1_values()).unwrap();
        assert!(matches!(outcome, NextOutcome::Submit(_)));

        wizard.complete();
        assert_eq!(wizard.phase(), WizardPhase::Done);
        assert!(wizard.store().is_empty());
    }

    #[test]
    fn failed_submission_keeps_slices_for_retry() {
        let mut wizard = Wizard::with_page_count(1);
        wizard.next(page1_values()).unwrap();

        wizard.submission_failed();
        assert_eq!(wizard.phase(), WizardPhase::Editing);
        assert_eq!(
            wizard.current_defaults().get("tecnico"),
            Some(&json!("5"))
        );

        // Retry succeeds with the retained state.
        let outcome = wizard.next(PageValues::new()).unwrap();
        assert!(matches!(outcome, NextOutcome::Submit(_)));
    }

    #[test]
    fn revisiting_a_page_offers_its_previous_values() {
        let mut wizard = Wizard::with_page_count(3);
        wizard.next(values(json!({"tecnico": "5"}))).unwrap();
        wizard.next(values(json!({"logistica": "Buena"}))).unwrap();

        wizard.prev();
        assert_eq!(
            wizard.current_defaults().get("logistica"),
            Some(&json!("Buena"))
        );
        wizard.prev();
        assert_eq!(wizard.current_defaults().get("tecnico"), Some(&json!("5")));
    }

    #[test]
    fn update_current_merges_without_moving() {
        let mut wizard = Wizard::new();
        wizard.update_current(values(json!({"a": 1})));
        wizard.update_current(values(json!({"b": 2})));
        assert_eq!(wizard.page_index(), 0);

        let defaults = wizard.current_defaults();
        assert_eq!(defaults.get("a"), Some(&json!(1)));
        assert_eq!(defaults.get("b"), Some(&json!(2)));
    }
}
