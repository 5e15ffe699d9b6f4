use crate::balance::{summarize, BalanceSummary};
use crate::ids::IdGenerator;
use crate::models::{DraftTransaction, Participant, ParticipantId, Transaction, TransactionId};
use crate::settlement::{settle, Transfer};
use crate::split::recalculate_split_bill;
use crate::validation::ContributionCheck;

/// Sole owner of participants, transactions and the draft.
///
/// Mutations live next to the concern they belong to (`registry`, `draft`,
/// `ledger`); reads and derivations are here.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    pub(crate) participants: Vec<Participant>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) draft: DraftTransaction,
    pub(crate) editing: Option<TransactionId>,
    pub(crate) ids: IdGenerator,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously saved participant list
    pub fn with_participants(participants: Vec<Participant>) -> Self {
        let ids = IdGenerator::seeded_past(participants.iter().map(|p| p.id.as_str()));
        let draft = DraftTransaction::empty(&participants);
        Self {
            participants,
            transactions: Vec::new(),
            draft,
            editing: None,
            ids,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| &tx.id == id)
    }

    pub fn draft(&self) -> &DraftTransaction {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<&TransactionId> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Label for the draft's submit action
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Submit"
        }
    }

    pub fn draft_check(&self) -> ContributionCheck {
        self.draft.check_contributions()
    }

    pub fn summary(&self) -> BalanceSummary {
        summarize(&self.participants, &self.transactions)
    }

    pub fn settlement(&self) -> Vec<Transfer> {
        settle(&self.summary(), &self.participants)
    }

    pub(crate) fn recalculate_draft_split(&mut self) {
        self.draft.contributions = recalculate_split_bill(&self.draft.amount, &self.participants);
    }

    pub(crate) fn reset_draft(&mut self) {
        self.draft = DraftTransaction::empty(&self.participants);
    }
}
