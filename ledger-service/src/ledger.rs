//! Transaction ledger: submit, edit, delete.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{DraftTransaction, Transaction, TransactionId};
use crate::state::LedgerState;
use tracing::{debug, warn};

impl LedgerState {
    /// Commit the draft.
    ///
    /// In edit mode the targeted transaction is overwritten in place (same id,
    /// same position); otherwise the draft is appended under a new id. The
    /// draft is reset to an empty template afterwards either way.
    pub fn submit(&mut self) -> TransactionId {
        let draft = std::mem::take(&mut self.draft);

        let id = match self.editing.take() {
            Some(id) => match self.transactions.iter_mut().find(|tx| tx.id == id) {
                Some(slot) => {
                    *slot = draft.into_transaction(id.clone());
                    debug!(transaction_id = %id, "transaction updated");
                    id
                }
                None => {
                    warn!(transaction_id = %id, "edit target vanished, recording as new transaction");
                    self.append(draft)
                }
            },
            None => self.append(draft),
        };

        self.reset_draft();
        id
    }

    /// Load a transaction into the draft and make it the edit target
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::TransactionNotFound`] when no transaction has `id`.
    pub fn edit(&mut self, id: &TransactionId) -> LedgerResult<()> {
        let tx = self
            .transaction(id)
            .ok_or_else(|| LedgerError::TransactionNotFound(id.clone()))?;

        self.draft = DraftTransaction::from(tx);
        self.editing = Some(id.clone());
        debug!(transaction_id = %id, "editing transaction");
        Ok(())
    }

    /// Remove a transaction.
    ///
    /// Deleting the current edit target also leaves edit mode; the draft keeps
    /// its contents, so a later submit records them as a new transaction.
    pub fn delete(&mut self, id: &TransactionId) -> Option<Transaction> {
        if self.editing.as_ref() == Some(id) {
            self.editing = None;
        }

        let position = self.transactions.iter().position(|tx| &tx.id == id)?;
        let removed = self.transactions.remove(position);
        debug!(transaction_id = %id, "transaction deleted");
        Some(removed)
    }

    fn append(&mut self, draft: DraftTransaction) -> TransactionId {
        let id = TransactionId::new(self.ids.next_id());
        self.transactions.push(draft.into_transaction(id.clone()));
        debug!(transaction_id = %id, "transaction recorded");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DraftField, ParticipantId};

    fn state_with(names: &[&str]) -> (LedgerState, Vec<ParticipantId>) {
        let mut state = LedgerState::new();
        let ids = names
            .iter()
            .map(|name| state.add_participant(name).unwrap().id)
            .collect();
        (state, ids)
    }

    fn record(state: &mut LedgerState, title: &str, amount: &str) -> TransactionId {
        state.update_field(DraftField::Title, title);
        state.update_field(DraftField::Amount, amount);
        state.submit()
    }

    #[test]
    fn submit_appends_and_resets_draft() {
        let (mut state, ids) = state_with(&["Ana", "Budi"]);
        state.update_field(DraftField::Title, "Groceries");
        state.update_field(DraftField::Amount, "120");
        state.update_field(DraftField::Payer, ids[0].as_str());
        state.toggle_split_bill();

        let id = state.submit();

        let tx = state.transaction(&id).unwrap();
        assert_eq!(tx.title, "Groceries");
        assert_eq!(tx.payer.as_ref(), Some(&ids[0]));
        assert!(tx.is_split_bill);
        assert_eq!(tx.contributions[&ids[1]], "60.00");

        let draft = state.draft();
        assert_eq!(draft.title, "");
        assert_eq!(draft.amount, "");
        assert_eq!(draft.payer, None);
        assert!(!draft.is_split_bill);
        assert_eq!(draft.contributions.len(), 2);
        assert!(draft.contributions.values().all(String::is_empty));
    }

    #[test]
    fn submit_without_payer_is_accepted() {
        let (mut state, _) = state_with(&["Ana"]);
        let id = record(&mut state, "Snacks", "15");
        assert_eq!(state.transaction(&id).unwrap().payer, None);
    }

    #[test]
    fn created_ids_are_distinct() {
        let (mut state, _) = state_with(&["Ana"]);
        let first = record(&mut state, "a", "1");
        let second = record(&mut state, "b", "2");
        let third = record(&mut state, "c", "3");

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
        assert_eq!(state.transactions().len(), 3);
    }

    #[test]
    fn edit_then_submit_updates_in_place() {
        let (mut state, _) = state_with(&["Ana"]);
        let first = record(&mut state, "Taxi", "30");
        let second = record(&mut state, "Lunch", "45");
        let third = record(&mut state, "Coffee", "12");

        state.edit(&second).unwrap();
        assert!(state.is_editing());
        assert_eq!(state.draft().title, "Lunch");
        state.update_field(DraftField::Amount, "50");

        assert_eq!(state.submit(), second);
        assert!(!state.is_editing());

        let ids: Vec<&TransactionId> = state.transactions().iter().map(|tx| &tx.id).collect();
        assert_eq!(ids, [&first, &second, &third]);
        assert_eq!(state.transaction(&second).unwrap().amount, "50");
        assert_eq!(state.transaction(&second).unwrap().title, "Lunch");
    }

    #[test]
    fn edit_unknown_transaction_fails_without_changes() {
        let (mut state, _) = state_with(&["Ana"]);
        state.update_field(DraftField::Title, "half typed");

        let err = state.edit(&TransactionId::new("missing")).unwrap_err();

        assert!(matches!(err, LedgerError::TransactionNotFound(_)));
        assert!(!state.is_editing());
        assert_eq!(state.draft().title, "half typed");
    }

    #[test]
    fn delete_removes_transaction() {
        let (mut state, _) = state_with(&["Ana"]);
        let keep = record(&mut state, "keep", "1");
        let discard = record(&mut state, "discard", "2");

        assert!(state.delete(&discard).is_some());
        assert!(state.delete(&discard).is_none());
        assert_eq!(state.transactions().len(), 1);
        assert!(state.transaction(&keep).is_some());
    }

    #[test]
    fn deleting_edit_target_clears_edit_mode() {
        let (mut state, _) = state_with(&["Ana"]);
        let original = record(&mut state, "Hotel", "300");

        state.edit(&original).unwrap();
        state.delete(&original);

        assert!(!state.is_editing());
        assert_eq!(state.draft().title, "Hotel");

        let recreated = state.submit();
        assert_ne!(recreated, original);
        assert_eq!(state.transactions().len(), 1);
        assert_eq!(state.transaction(&recreated).unwrap().title, "Hotel");
    }

    #[test]
    fn deleting_another_transaction_keeps_edit_mode() {
        let (mut state, _) = state_with(&["Ana"]);
        let editing = record(&mut state, "a", "1");
        let other = record(&mut state, "b", "2");

        state.edit(&editing).unwrap();
        state.delete(&other);

        assert_eq!(state.editing_id(), Some(&editing));
    }
}
