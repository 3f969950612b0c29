// ABOUTME: SMPP message_state values as they appear in delivery receipts
// ABOUTME: Maps between numeric wire values, 7-character receipt codes and display names

use num_enum::TryFromPrimitive;
use std::fmt;

/// Final state of a previously submitted message.
///
/// The numeric values are the SMPP v3.4 `message_state` values (section 5.2.28).
/// The absence of a state on a receipt is modelled as `Option::None` rather
/// than as an extra variant.
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FinalState {
    /// The message is in enroute state
    Enroute = 0x01,
    /// Message is delivered to destination
    Delivered = 0x02,
    /// Message validity period has expired
    Expired = 0x03,
    /// Message has been deleted
    Deleted = 0x04,
    /// Message is undeliverable
    Undeliverable = 0x05,
    /// Message is in accepted state
    Accepted = 0x06,
    /// Message is in unknown state
    Unknown = 0x07,
    /// Message is in a rejected state
    Rejected = 0x08,
}

impl FinalState {
    pub const ALL: [FinalState; 8] = [
        FinalState::Enroute,
        FinalState::Delivered,
        FinalState::Expired,
        FinalState::Deleted,
        FinalState::Undeliverable,
        FinalState::Accepted,
        FinalState::Unknown,
        FinalState::Rejected,
    ];

    /// Short code rendered when no valid state is set.
    pub const BAD_STATE_CODE: &'static str = "BADSTAT";

    /// The 7-character code used in the `stat:` field of a receipt.
    pub fn short_code(self) -> &'static str {
        match self {
            FinalState::Enroute => "ENROUTE",
            FinalState::Delivered => "DELIVRD",
            FinalState::Expired => "EXPIRED",
            FinalState::Deleted => "DELETED",
            FinalState::Undeliverable => "UNDELIV",
            FinalState::Accepted => "ACCEPTD",
            FinalState::Unknown => "UNKNOWN",
            FinalState::Rejected => "REJECTD",
        }
    }

    /// Human readable name, e.g. `UNDELIVERABLE` for `UNDELIV`.
    pub fn name(self) -> &'static str {
        match self {
            FinalState::Enroute => "ENROUTE",
            FinalState::Delivered => "DELIVERED",
            FinalState::Expired => "EXPIRED",
            FinalState::Deleted => "DELETED",
            FinalState::Undeliverable => "UNDELIVERABLE",
            FinalState::Accepted => "ACCEPTED",
            FinalState::Unknown => "UNKNOWN",
            FinalState::Rejected => "REJECTED",
        }
    }

    /// Looks up a state by its receipt short code, ignoring ASCII case.
    pub fn from_short_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.short_code().eq_ignore_ascii_case(code))
    }

    /// Short code for an optional state, falling back to `BADSTAT`.
    pub fn code_or_bad(state: Option<Self>) -> &'static str {
        state.map_or(Self::BAD_STATE_CODE, Self::short_code)
    }
}

impl fmt::Display for FinalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_codes_are_seven_characters() {
        for state in FinalState::ALL {
            assert_eq!(state.short_code().len(), 7, "{state:?}");
        }
        assert_eq!(FinalState::BAD_STATE_CODE.len(), 7);
    }

    #[test]
    fn test_from_short_code_ignores_case() {
        assert_eq!(FinalState::from_short_code("DELIVRD"), Some(FinalState::Delivered));
        assert_eq!(FinalState::from_short_code("delivrd"), Some(FinalState::Delivered));
        assert_eq!(FinalState::from_short_code("UnDeLiV"), Some(FinalState::Undeliverable));
        assert_eq!(FinalState::from_short_code("DELIVERED"), None);
        assert_eq!(FinalState::from_short_code("BADSTAT"), None);
        assert_eq!(FinalState::from_short_code(""), None);
    }

    #[test]
    fn test_numeric_wire_values() {
        assert_eq!(FinalState::try_from(0x01u8).unwrap(), FinalState::Enroute);
        assert_eq!(FinalState::try_from(0x08u8).unwrap(), FinalState::Rejected);
        assert!(FinalState::try_from(0x00u8).is_err());
        assert!(FinalState::try_from(0x09u8).is_err());
        assert_eq!(FinalState::Accepted as u8, 0x06);
    }

    #[test]
    fn test_display_uses_long_name() {
        assert_eq!(FinalState::Undeliverable.to_string(), "UNDELIVERABLE");
        assert_eq!(FinalState::Delivered.to_string(), "DELIVERED");
        assert_eq!(FinalState::code_or_bad(None), "BADSTAT");
        assert_eq!(FinalState::code_or_bad(Some(FinalState::Rejected)), "REJECTD");
    }
}
