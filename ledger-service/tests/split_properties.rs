//! Property tests for equal splits and contribution validation.

use ledger_service::{
    cents_literal, recalculate_split_bill, validate_contributions, Contributions, Participant,
    ParticipantId,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn participants(count: usize) -> Vec<Participant> {
    (0..count)
        .map(|i| Participant {
            id: ParticipantId::new(format!("p{i}")),
            name: format!("Person {i}"),
        })
        .collect()
}

proptest! {
    #[test]
    fn split_assigns_the_rounded_share_to_everyone(cents in 0i64..1_000_000_000, count in 1usize..20) {
        let amount = Decimal::new(cents, 2);
        let people = participants(count);

        let split = recalculate_split_bill(&amount.to_string(), &people);

        let expected = cents_literal(amount / Decimal::from(count));
        prop_assert_eq!(split.len(), count);
        for person in &people {
            prop_assert_eq!(&split[&person.id], &expected);
        }
    }

    #[test]
    fn split_drift_stays_within_half_a_cent_each(cents in 0i64..1_000_000_000, count in 1usize..20) {
        let amount = Decimal::new(cents, 2);
        let split = recalculate_split_bill(&amount.to_string(), &participants(count));

        let total: Decimal = split.values().map(|v| v.parse::<Decimal>().unwrap()).sum();
        let tolerance = Decimal::new(5, 3) * Decimal::from(count);
        prop_assert!((total - amount).abs() <= tolerance);
    }

    #[test]
    fn split_over_nobody_is_empty(amount in ".*") {
        prop_assert!(recalculate_split_bill(&amount, &[]).is_empty());
    }

    #[test]
    fn balanced_iff_totals_match(
        amount in 0i64..100_000,
        shares in proptest::collection::vec(0i64..50_000, 0..6),
    ) {
        let contributions: Contributions = shares
            .iter()
            .enumerate()
            .map(|(i, cents)| (ParticipantId::new(format!("p{i}")), Decimal::new(*cents, 2).to_string()))
            .collect();
        let amount = Decimal::new(amount, 2);
        let total: Decimal = shares.iter().map(|c| Decimal::new(*c, 2)).sum();

        let check = validate_contributions(&amount.to_string(), &contributions);

        prop_assert_eq!(check.is_balanced(), total == amount);
        prop_assert_eq!(check.message().is_empty(), total == amount);
    }
}
