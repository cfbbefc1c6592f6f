use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Delivery status of a shipment as reported by the backend.
///
/// Any value outside the six known states decodes to [`DeliveryStatus::Unknown`],
/// which is never a valid source or target of a transition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
    Failed,
    Returned,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl DeliveryStatus {
    /// Every status the transition table knows about.
    pub const KNOWN: [DeliveryStatus; 6] = [
        DeliveryStatus::Pending,
        DeliveryStatus::InTransit,
        DeliveryStatus::Delivered,
        DeliveryStatus::Failed,
        DeliveryStatus::Returned,
        DeliveryStatus::Canceled,
    ];

    /// States reachable from `self` in one step.
    pub fn allowed_next(self) -> &'static [DeliveryStatus] {
        use DeliveryStatus::*;
        match self {
            Pending => &[InTransit, Canceled],
            InTransit => &[Delivered, Failed],
            Failed => &[Returned, InTransit],
            Returned => &[InTransit],
            Delivered | Canceled | Unknown => &[],
        }
    }

    pub fn can_transition_to(self, next: DeliveryStatus) -> bool {
        self.allowed_next().contains(&next)
    }

    /// Delivered and Canceled end the lifecycle.
    pub fn is_terminal(self) -> bool {
        matches!(self, DeliveryStatus::Delivered | DeliveryStatus::Canceled)
    }

    pub fn is_known(self) -> bool {
        self != DeliveryStatus::Unknown
    }

    /// Parses one of the six known names, ignoring case.
    pub fn parse_known(raw: &str) -> Option<DeliveryStatus> {
        DeliveryStatus::from_str(raw.trim())
            .ok()
            .filter(|status| status.is_known())
    }
}

/// Advisory check run before asking the backend to move a shipment.
pub fn can_transition(current: DeliveryStatus, next: DeliveryStatus) -> bool {
    current.can_transition_to(next)
}

/// String form of [`can_transition`]; unparseable input is treated as not allowed.
pub fn can_transition_str(current: &str, next: &str) -> bool {
    match (
        DeliveryStatus::parse_known(current),
        DeliveryStatus::parse_known(next),
    ) {
        (Some(current), Some(next)) => can_transition(current, next),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DeliveryStatus::Pending, DeliveryStatus::InTransit)]
    #[case(DeliveryStatus::Pending, DeliveryStatus::Canceled)]
    #[case(DeliveryStatus::InTransit, DeliveryStatus::Delivered)]
    #[case(DeliveryStatus::InTransit, DeliveryStatus::Failed)]
    #[case(DeliveryStatus::Failed, DeliveryStatus::Returned)]
    #[case(DeliveryStatus::Failed, DeliveryStatus::InTransit)]
    #[case(DeliveryStatus::Returned, DeliveryStatus::InTransit)]
    fn table_edges_are_allowed(#[case] from: DeliveryStatus, #[case] to: DeliveryStatus) {
        assert!(can_transition(from, to));
    }

    #[test]
    fn table_has_exactly_seven_edges() {
        let edges: usize = DeliveryStatus::KNOWN
            .iter()
            .map(|s| s.allowed_next().len())
            .sum();
        assert_eq!(edges, 7);
    }

    #[test]
    fn terminal_states_have_no_successors() {
        for status in DeliveryStatus::KNOWN {
            assert_eq!(status.is_terminal(), status.allowed_next().is_empty());
        }
    }

    #[test]
    fn unknown_status_fails_closed() {
        for status in DeliveryStatus::KNOWN {
            assert!(!can_transition(DeliveryStatus::Unknown, status));
            assert!(!can_transition(status, DeliveryStatus::Unknown));
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            DeliveryStatus::from_str("intransit").unwrap(),
            DeliveryStatus::InTransit
        );
        assert_eq!(DeliveryStatus::parse_known("Unknown"), None);
    }

    #[test]
    fn string_check_rejects_garbage() {
        assert!(can_transition_str("Pending", "InTransit"));
        assert!(!can_transition_str("Pending", "Shipped"));
        assert!(!can_transition_str("", "InTransit"));
    }

    #[test]
    fn unrecognized_wire_value_decodes_to_unknown() {
        let status: DeliveryStatus = serde_json::from_str("\"OutForDelivery\"").unwrap();
        assert_eq!(status, DeliveryStatus::Unknown);
        let status: DeliveryStatus = serde_json::from_str("\"Returned\"").unwrap();
        assert_eq!(status, DeliveryStatus::Returned);
    }
}
