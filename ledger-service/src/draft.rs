//! Draft transaction editing.

use crate::models::{DraftField, ParticipantId};
use crate::state::LedgerState;
use tracing::debug;

impl LedgerState {
    /// Set a scalar draft field. A new amount re-splits an active equal split.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.draft.title = value,
            DraftField::Amount => {
                self.draft.amount = value;
                if self.draft.is_split_bill {
                    self.recalculate_draft_split();
                }
            }
            DraftField::Payer => {
                self.draft.payer = if value.trim().is_empty() {
                    None
                } else {
                    Some(ParticipantId::new(value))
                };
            }
        }
    }

    /// Set one participant's contribution directly.
    ///
    /// Accepted even while an equal split is active; the next recalculation
    /// overwrites it.
    pub fn update_contribution(&mut self, participant_id: &ParticipantId, value: impl Into<String>) {
        self.draft
            .contributions
            .insert(participant_id.clone(), value.into());
    }

    /// Flip equal-split mode and return the new setting.
    ///
    /// Turning it on recalculates immediately; turning it off keeps the last
    /// computed shares as editable values.
    pub fn toggle_split_bill(&mut self) -> bool {
        self.draft.is_split_bill = !self.draft.is_split_bill;
        if self.draft.is_split_bill {
            self.recalculate_draft_split();
        }

        debug!(split = self.draft.is_split_bill, "equal split toggled");
        self.draft.is_split_bill
    }

    /// Leave edit mode and start over with an empty draft
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing.take() {
            debug!(transaction_id = %id, "edit cancelled");
        }
        self.reset_draft();
    }
}
