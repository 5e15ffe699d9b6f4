use crate::balance::BalanceSummary;
use crate::models::{Participant, ParticipantId};
use rust_decimal::Decimal;
use serde::Serialize;

/// One suggested payment from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Decimal,
}

/// Suggest transfers that bring every balance back to zero.
///
/// Creditors are settled in display order. Each one is paid by the debtors
/// owing the most first, moving to the next debtor once one is exhausted.
/// If the ledger is unbalanced, settling stops when either side runs out.
pub fn settle(summary: &BalanceSummary, participants: &[Participant]) -> Vec<Transfer> {
    let mut debtors: Vec<(ParticipantId, Decimal)> = summary
        .rows(participants)
        .filter(|(_, balance)| *balance < Decimal::ZERO)
        .map(|(p, balance)| (p.id.clone(), -balance))
        .collect();
    debtors.sort_by(|a, b| b.1.cmp(&a.1));

    let creditors = summary
        .rows(participants)
        .filter(|(_, balance)| *balance > Decimal::ZERO);

    let mut transfers = Vec::new();
    let mut debtors = debtors.iter_mut().peekable();

    for (creditor, balance) in creditors {
        let mut pending = balance;

        while pending > Decimal::ZERO {
            let Some((debtor, owed)) = debtors.peek_mut() else {
                break;
            };

            let paid = pending.min(*owed);
            transfers.push(Transfer {
                from: debtor.clone(),
                to: creditor.id.clone(),
                amount: paid,
            });

            pending = pending.saturating_sub(paid);
            *owed = owed.saturating_sub(paid);
            if owed.is_zero() {
                debtors.next();
            }
        }
    }

    transfers
}
