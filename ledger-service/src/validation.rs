use crate::amount::{parse_amount, sum_amounts};
use crate::models::{Contributions, DraftTransaction, Transaction};
use rust_decimal::Decimal;
use std::cmp::Ordering;

pub const EXCEEDS_AMOUNT_MESSAGE: &str = "Total contributions exceed the transaction amount.";
pub const LESS_THAN_AMOUNT_MESSAGE: &str = "Total contributions are less than the transaction amount.";

/// Outcome of comparing contributions against the transaction amount.
///
/// Advisory only: an unbalanced transaction can still be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionCheck {
    Balanced,
    ExceedsAmount { total: Decimal, amount: Decimal },
    LessThanAmount { total: Decimal, amount: Decimal },
}

impl ContributionCheck {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }

    /// User-facing warning; empty when balanced
    pub fn message(&self) -> &'static str {
        match self {
            Self::Balanced => "",
            Self::ExceedsAmount { .. } => EXCEEDS_AMOUNT_MESSAGE,
            Self::LessThanAmount { .. } => LESS_THAN_AMOUNT_MESSAGE,
        }
    }
}

/// Compare the parsed contribution total with the parsed amount.
///
/// Equality is exact: a split whose cents do not add back up is reported.
pub fn validate_contributions(amount: &str, contributions: &Contributions) -> ContributionCheck {
    let amount = parse_amount(amount);
    let total = sum_amounts(contributions.values());

    match total.cmp(&amount) {
        Ordering::Greater => ContributionCheck::ExceedsAmount { total, amount },
        Ordering::Less => ContributionCheck::LessThanAmount { total, amount },
        Ordering::Equal => ContributionCheck::Balanced,
    }
}

impl Transaction {
    pub fn check_contributions(&self) -> ContributionCheck {
        validate_contributions(&self.amount, &self.contributions)
    }
}

impl DraftTransaction {
    pub fn check_contributions(&self) -> ContributionCheck {
        validate_contributions(&self.amount, &self.contributions)
    }
}
