use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Stable participant identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Transaction identifier, assigned when a draft is first submitted
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Participant id -> decimal literal as entered (or computed by an equal split)
pub type Contributions = HashMap<ParticipantId, String>;

/// A person taking part in the shared bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

/// A committed transaction in the ledger
///
/// `amount` and the contribution values keep the literal text that was
/// entered; they are parsed on every read through [`crate::parse_amount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub title: String,
    pub amount: String,
    pub payer: Option<ParticipantId>,
    pub contributions: Contributions,
    pub is_split_bill: bool,
}

/// The single in-progress transaction being composed or edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftTransaction {
    pub title: String,
    pub amount: String,
    pub payer: Option<ParticipantId>,
    pub contributions: Contributions,
    pub is_split_bill: bool,
}

impl DraftTransaction {
    /// Empty template with one blank contribution per participant
    pub fn empty(participants: &[Participant]) -> Self {
        Self {
            contributions: participants
                .iter()
                .map(|p| (p.id.clone(), String::new()))
                .collect(),
            ..Self::default()
        }
    }

    pub(crate) fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            title: self.title,
            amount: self.amount,
            payer: self.payer,
            contributions: self.contributions,
            is_split_bill: self.is_split_bill,
        }
    }
}

impl From<&Transaction> for DraftTransaction {
    fn from(tx: &Transaction) -> Self {
        Self {
            title: tx.title.clone(),
            amount: tx.amount.clone(),
            payer: tx.payer.clone(),
            contributions: tx.contributions.clone(),
            is_split_bill: tx.is_split_bill,
        }
    }
}

/// Scalar draft fields editable through `update_field`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Amount,
    /// An empty value clears the payer
    Payer,
}
