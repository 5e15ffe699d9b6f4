use crate::amount::parse_amount;
use crate::models::{Participant, ParticipantId, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Net position per participant: paid minus owed.
///
/// Derived on demand and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BalanceSummary {
    balances: HashMap<ParticipantId, Decimal>,
}

impl BalanceSummary {
    pub fn get(&self, id: &ParticipantId) -> Option<Decimal> {
        self.balances.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Balances in display order, skipping ids that no longer name a participant
    pub fn rows<'a>(
        &'a self,
        participants: &'a [Participant],
    ) -> impl Iterator<Item = (&'a Participant, Decimal)> + 'a {
        participants
            .iter()
            .filter_map(|p| self.get(&p.id).map(|balance| (p, balance)))
    }

    pub fn total(&self) -> Decimal {
        self.balances
            .values()
            .copied()
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

/// Aggregate every transaction into per-participant balances.
///
/// Each current participant starts at zero. Payers are credited the full
/// amount; each contribution is debited from its participant. Contributions
/// from participants that are no longer registered are dropped, and a
/// transaction without a payer credits nobody.
pub fn summarize(participants: &[Participant], transactions: &[Transaction]) -> BalanceSummary {
    let mut balances: HashMap<ParticipantId, Decimal> = participants
        .iter()
        .map(|p| (p.id.clone(), Decimal::ZERO))
        .collect();

    for tx in transactions {
        if let Some(balance) = tx.payer.as_ref().and_then(|payer| balances.get_mut(payer)) {
            *balance = balance.saturating_add(parse_amount(&tx.amount));
        }

        for (participant_id, value) in &tx.contributions {
            if let Some(balance) = balances.get_mut(participant_id) {
                *balance = balance.saturating_sub(parse_amount(value));
            }
        }
    }

    BalanceSummary { balances }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contributions, TransactionId};

    fn participant(id: &str, name: &str) -> Participant {
        Participant {
            id: ParticipantId::new(id),
            name: name.to_string(),
        }
    }

    fn transaction(id: &str, amount: &str, payer: Option<&str>, shares: &[(&str, &str)]) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            title: format!("tx {id}"),
            amount: amount.to_string(),
            payer: payer.map(ParticipantId::new),
            contributions: shares
                .iter()
                .map(|(p, v)| (ParticipantId::new(*p), (*v).to_string()))
                .collect::<Contributions>(),
            is_split_bill: false,
        }
    }

    #[test]
    fn payer_credited_and_contributors_debited() {
        let participants = vec![participant("a", "Ana"), participant("b", "Budi")];
        let txs = vec![transaction("t1", "100", Some("a"), &[("a", "50"), ("b", "50")])];

        let summary = summarize(&participants, &txs);

        assert_eq!(summary.get(&ParticipantId::new("a")), Some(Decimal::new(50, 0)));
        assert_eq!(summary.get(&ParticipantId::new("b")), Some(Decimal::new(-50, 0)));
        assert_eq!(summary.total(), Decimal::ZERO);
    }

    #[test]
    fn no_participants_no_balances() {
        let txs = vec![transaction("t1", "100", Some("a"), &[("a", "100")])];
        assert!(summarize(&[], &txs).is_empty());
    }

    #[test]
    fn missing_payer_credits_nobody() {
        let participants = vec![participant("a", "Ana")];
        let txs = vec![transaction("t1", "80", None, &[("a", "80")])];

        let summary = summarize(&participants, &txs);
        assert_eq!(summary.get(&ParticipantId::new("a")), Some(Decimal::new(-80, 0)));
    }

    #[test]
    fn removed_participants_are_dropped() {
        let participants = vec![participant("a", "Ana")];
        let txs = vec![transaction("t1", "90", Some("gone"), &[("a", "45"), ("gone", "45")])];

        let summary = summarize(&participants, &txs);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary.get(&ParticipantId::new("gone")), None);
        assert_eq!(summary.get(&ParticipantId::new("a")), Some(Decimal::new(-45, 0)));
    }

    #[test]
    fn rows_follow_display_order() {
        let participants = vec![
            participant("c", "Citra"),
            participant("a", "Ana"),
            participant("b", "Budi"),
        ];
        let txs = vec![transaction("t1", "30", Some("b"), &[("a", "10"), ("b", "10"), ("c", "10")])];

        let summary = summarize(&participants, &txs);
        let names: Vec<&str> = summary.rows(&participants).map(|(p, _)| p.name.as_str()).collect();

        assert_eq!(names, ["Citra", "Ana", "Budi"]);
    }
}
