//! Delivery status transition table.

use coffee_supply_client::workflow::{can_transition, can_transition_str, DeliveryStatus};
use proptest::prelude::*;
use rstest::rstest;

fn any_status() -> impl Strategy<Value = DeliveryStatus> {
    prop_oneof![
        Just(DeliveryStatus::Pending),
        Just(DeliveryStatus::InTransit),
        Just(DeliveryStatus::Delivered),
        Just(DeliveryStatus::Failed),
        Just(DeliveryStatus::Returned),
        Just(DeliveryStatus::Canceled),
        Just(DeliveryStatus::Unknown),
    ]
}

#[rstest]
#[case(DeliveryStatus::Pending, DeliveryStatus::InTransit, true)]
#[case(DeliveryStatus::Pending, DeliveryStatus::Delivered, false)]
#[case(DeliveryStatus::Pending, DeliveryStatus::Canceled, true)]
#[case(DeliveryStatus::InTransit, DeliveryStatus::Pending, false)]
#[case(DeliveryStatus::Failed, DeliveryStatus::InTransit, true)]
#[case(DeliveryStatus::Returned, DeliveryStatus::Delivered, false)]
#[case(DeliveryStatus::Canceled, DeliveryStatus::Pending, false)]
fn transition_table(
    #[case] from: DeliveryStatus,
    #[case] to: DeliveryStatus,
    #[case] expected: bool,
) {
    assert_eq!(can_transition(from, to), expected);
}

#[test]
fn raw_strings_fail_closed() {
    assert!(can_transition_str(" pending ", "INTRANSIT"));
    assert!(!can_transition_str("", "InTransit"));
    assert!(!can_transition_str("Pending", "Unknown"));
}

proptest! {
    #[test]
    fn delivered_is_final(next in any_status()) {
        prop_assert!(!can_transition(DeliveryStatus::Delivered, next));
    }

    #[test]
    fn canceled_is_final(next in any_status()) {
        prop_assert!(!can_transition(DeliveryStatus::Canceled, next));
    }

    #[test]
    fn no_status_moves_to_itself(status in any_status()) {
        prop_assert!(!can_transition(status, status));
    }

    #[test]
    fn allowed_next_agrees_with_check(from in any_status(), to in any_status()) {
        prop_assert_eq!(from.allowed_next().contains(&to), can_transition(from, to));
    }

    #[test]
    fn garbage_strings_never_transition(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let known = |s: &str| DeliveryStatus::parse_known(s).is_some();
        if !known(&a) || !known(&b) {
            prop_assert!(!can_transition_str(&a, &b));
        }
    }
}
