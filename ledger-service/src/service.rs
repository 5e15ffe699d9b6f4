use crate::error::LedgerResult;
use crate::models::{DraftField, Participant, ParticipantId, TransactionId};
use crate::state::LedgerState;
use crate::store::{KeyValueStore, ParticipantStore};
use logger_redacted::NameRedactor;
use tracing::{debug, info, warn};

/// Ledger service
///
/// Owns the [`LedgerState`] and keeps the cached participant list in sync
/// with local storage. Reads go through [`LedgerService::state`].
pub struct LedgerService<S> {
    state: LedgerState,
    store: ParticipantStore<S>,
    redactor: NameRedactor,
}

impl<S: KeyValueStore> LedgerService<S> {
    /// Open a session, restoring participants from `store`
    pub fn open(store: S) -> Self {
        let store = ParticipantStore::new(store);
        let participants = store.load();
        info!(participants = participants.len(), "ledger opened");

        Self {
            state: LedgerState::with_participants(participants),
            store,
            redactor: NameRedactor::default(),
        }
    }

    pub fn with_redactor(mut self, redactor: NameRedactor) -> Self {
        debug!(enabled = redactor.is_enabled(), "name redaction configured");
        self.redactor = redactor;
        self
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn store(&self) -> &S {
        self.store.inner()
    }

    pub fn add_participant(&mut self, name: &str) -> Option<Participant> {
        let participant = self.state.add_participant(name)?;
        info!(
            participant_id = %participant.id,
            name = %self.redactor.redact(&participant.name),
            "participant added"
        );
        self.persist_participants();
        Some(participant)
    }

    pub fn remove_participant(&mut self, id: &ParticipantId) -> Option<Participant> {
        let removed = self.state.remove_participant(id)?;
        info!(
            participant_id = %removed.id,
            name = %self.redactor.redact(&removed.name),
            "participant removed"
        );
        self.persist_participants();
        Some(removed)
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.state.update_field(field, value);
    }

    pub fn update_contribution(&mut self, participant_id: &ParticipantId, value: impl Into<String>) {
        self.state.update_contribution(participant_id, value);
    }

    pub fn toggle_split_bill(&mut self) -> bool {
        self.state.toggle_split_bill()
    }

    pub fn submit(&mut self) -> TransactionId {
        self.state.submit()
    }

    /// # Errors
    ///
    /// Returns [`crate::LedgerError::TransactionNotFound`] for an unknown id.
    pub fn edit(&mut self, id: &TransactionId) -> LedgerResult<()> {
        self.state.edit(id)
    }

    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    pub fn delete(&mut self, id: &TransactionId) -> bool {
        self.state.delete(id).is_some()
    }

    // Writes are fire-and-forget: a failed save never interrupts the session.
    fn persist_participants(&mut self) {
        if let Err(error) = self.store.save(self.state.participants()) {
            warn!(%error, "failed to persist participant list");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::store::{MemoryStore, PARTICIPANTS_KEY};

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> LedgerResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> LedgerResult<()> {
            Err(LedgerError::Storage(format!("{key} is read-only")))
        }
    }

    #[test]
    fn participant_changes_are_saved() {
        let mut service = LedgerService::open(MemoryStore::new());
        let ana = service.add_participant("Ana").unwrap();
        service.add_participant("Budi");

        let saved = service.store().get(PARTICIPANTS_KEY).unwrap().unwrap();
        assert!(saved.contains("Ana") && saved.contains("Budi"));

        service.remove_participant(&ana.id);
        let saved = service.store().get(PARTICIPANTS_KEY).unwrap().unwrap();
        assert!(!saved.contains("Ana"));
    }

    #[test]
    fn ignored_names_do_not_touch_storage() {
        let mut service = LedgerService::open(MemoryStore::new());
        assert!(service.add_participant("  ").is_none());
        assert_eq!(service.store().get(PARTICIPANTS_KEY).unwrap(), None);
    }

    #[test]
    fn save_failures_are_swallowed() {
        let mut service = LedgerService::open(ReadOnlyStore);
        assert!(service.add_participant("Ana").is_some());
        assert_eq!(service.state().participants().len(), 1);
    }

    #[test]
    fn restored_participants_seed_the_draft() {
        let raw = r#"[{"id":"1","name":"Ana"},{"id":"2","name":"Budi"}]"#;
        let service = LedgerService::open(MemoryStore::new().with_entry(PARTICIPANTS_KEY, raw));

        assert_eq!(service.state().participants().len(), 2);
        assert_eq!(service.state().draft().contributions.len(), 2);
    }
}
