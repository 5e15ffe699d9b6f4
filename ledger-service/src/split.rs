use crate::amount::{cents_literal, parse_amount};
use crate::models::{Contributions, Participant};
use rust_decimal::Decimal;

/// Divide `amount` evenly across `participants`.
///
/// Every participant gets the same share, rounded half-up to cents.
/// Rounding remainders are not redistributed, so the shares may drift
/// from the amount by up to one cent per participant. No participants
/// yields an empty mapping.
pub fn recalculate_split_bill(amount: &str, participants: &[Participant]) -> Contributions {
    if participants.is_empty() {
        return Contributions::new();
    }

    let count = Decimal::from(participants.len());
    let share = parse_amount(amount)
        .checked_div(count)
        .map(cents_literal)
        .unwrap_or_else(|| cents_literal(Decimal::ZERO));

    participants
        .iter()
        .map(|p| (p.id.clone(), share.clone()))
        .collect()
}
