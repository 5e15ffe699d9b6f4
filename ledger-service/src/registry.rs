//! Participant registry: add and remove, with draft cascades.

use crate::models::{Participant, ParticipantId};
use crate::state::LedgerState;
use tracing::debug;

impl LedgerState {
    /// Register a participant under a fresh id.
    ///
    /// Blank names are ignored. The new participant joins an active equal
    /// split immediately; otherwise they get a blank share in the draft.
    pub fn add_participant(&mut self, name: &str) -> Option<Participant> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let participant = Participant {
            id: ParticipantId::new(self.ids.next_id()),
            name: name.to_string(),
        };
        self.participants.push(participant.clone());

        if self.draft.is_split_bill {
            self.recalculate_draft_split();
        } else {
            self.draft
                .contributions
                .entry(participant.id.clone())
                .or_default();
        }

        debug!(participant_id = %participant.id, split = self.draft.is_split_bill, "participant registered");
        Some(participant)
    }

    /// Remove a participant and detach them from the draft.
    ///
    /// Their entries in already-submitted transactions are kept as history.
    /// If they were the draft's payer the payer is cleared.
    pub fn remove_participant(&mut self, id: &ParticipantId) -> Option<Participant> {
        let position = self.participants.iter().position(|p| &p.id == id)?;
        let removed = self.participants.remove(position);

        self.draft.contributions.remove(id);
        if self.draft.payer.as_ref() == Some(id) {
            self.draft.payer = None;
        }
        if self.draft.is_split_bill {
            self.recalculate_draft_split();
        }

        debug!(participant_id = %id, remaining = self.participants.len(), "participant removed");
        Some(removed)
    }
}
