// ============================================================================
// FORM STATE - invoice draft, validation state and submit status
// ============================================================================
// Expense lines are addressed by `LineId`. Positions only exist at the
// rendering boundary (`line_id_at`, `remove_line_at`).
// ============================================================================

use std::collections::BTreeSet;
use std::rc::Rc;
use thiserror::Error;

use crate::models::{
    merge_saved, sample_draft, DraftField, ExpenseLine, InvoiceDraft, LineField, LineId,
};
use crate::services::{DraftStore, StorageError};
use crate::validation::{validate_draft, validate_draft_field, FieldErrors, REQUIRED_FIELDS};

pub const SAVED_MESSAGE: &str = "Invoice saved successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Saved,
    Invalid,
    Failed(String),
}

impl SubmitStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Saved => Some(SAVED_MESSAGE.to_string()),
            SubmitStatus::Invalid => Some("Please fill in the required fields.".to_string()),
            SubmitStatus::Failed(reason) => Some(format!("Invoice could not be saved: {}", reason)),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0} required field(s) missing")]
    Invalid(usize),
    #[error("could not save invoice: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Clone)]
pub struct FormState {
    draft: InvoiceDraft,
    touched: BTreeSet<DraftField>,
    errors: FieldErrors<DraftField>,
    status: SubmitStatus,
    store: Rc<dyn DraftStore>,
}

impl FormState {
    /// Default draft overlaid with whatever `store` has saved.
    pub fn load(store: Rc<dyn DraftStore>) -> Self {
        let draft = merge_saved(InvoiceDraft::default(), store.load());
        Self {
            draft,
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
            store,
        }
    }

    pub fn draft(&self) -> &InvoiceDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors<DraftField> {
        &self.errors
    }

    pub fn error_for(&self, field: DraftField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn line_id_at(&self, position: usize) -> Option<LineId> {
        self.draft.expense_details.get(position).map(|line| line.id.clone())
    }

    pub fn can_remove_lines(&self) -> bool {
        self.draft.expense_details.len() > 1
    }

    /// Returns `false` when the value is refused (outside a select's options).
    pub fn set_field(&mut self, field: DraftField, value: String) -> bool {
        if let Some(options) = field.options() {
            if !options.accepts(&value) {
                log::warn!("⚠️ Rejected {:?} value '{}': not an option", field, value);
                return false;
            }
        }

        self.draft.set(field, value);
        if self.touched.contains(&field) {
            self.revalidate(field);
        }
        self.status = SubmitStatus::Idle;
        true
    }

    /// Marks a field as interacted with; from now on it validates on every edit.
    pub fn touch(&mut self, field: DraftField) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: DraftField) {
        match validate_draft_field(&self.draft, field) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn set_line_field(&mut self, id: &LineId, field: LineField, value: String) -> bool {
        if let Some(options) = field.options() {
            if !options.accepts(&value) {
                log::warn!("⚠️ Rejected line {:?} value '{}': not an option", field, value);
                return false;
            }
        }

        match self.draft.line_mut(id) {
            Some(line) => {
                line.set(field, value);
                self.status = SubmitStatus::Idle;
                true
            }
            None => {
                log::warn!("⚠️ Expense line {} not found", id);
                false
            }
        }
    }

    pub fn add_line(&mut self) -> LineId {
        let line = ExpenseLine::blank();
        let id = line.id.clone();
        self.draft.expense_details.push(line);
        self.status = SubmitStatus::Idle;
        log::info!(
            "➕ Expense line added ({} total)",
            self.draft.expense_details.len()
        );
        id
    }

    /// No-op when `id` is the last remaining line or unknown.
    pub fn remove_line(&mut self, id: &LineId) -> bool {
        if !self.can_remove_lines() {
            return false;
        }
        let Some(position) = self.draft.position_of(id) else {
            return false;
        };

        self.draft.expense_details.remove(position);
        self.status = SubmitStatus::Idle;
        log::info!(
            "➖ Expense line removed ({} left)",
            self.draft.expense_details.len()
        );
        true
    }

    pub fn remove_line_at(&mut self, position: usize) -> bool {
        match self.line_id_at(position) {
            Some(id) => self.remove_line(&id),
            None => false,
        }
    }

    /// Replaces the whole draft with the built-in sample invoice.
    pub fn populate_sample(&mut self) {
        self.draft = sample_draft();
        self.touched.clear();
        self.errors.clear();
        self.status = SubmitStatus::Idle;
        log::info!("📋 Draft populated with sample data");
    }

    /// Validates everything and, when valid, overwrites the saved draft.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        self.touched.extend(REQUIRED_FIELDS.iter().map(|(field, _)| *field));
        self.errors = validate_draft(&self.draft);

        if !self.errors.is_empty() {
            log::info!("❌ Submit blocked: {} field(s) invalid", self.errors.len());
            self.status = SubmitStatus::Invalid;
            return Err(SubmitError::Invalid(self.errors.len()));
        }

        match self.store.save(&self.draft) {
            Ok(()) => {
                self.status = SubmitStatus::Saved;
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Saving invoice failed: {}", e);
                self.status = SubmitStatus::Failed(e.to_string());
                Err(e.into())
            }
        }
    }
}
