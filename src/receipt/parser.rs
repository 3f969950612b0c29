// ABOUTME: Assembles a DeliveryReceipt from receipt text: locate, slice, convert, validate
// ABOUTME: Field order in the text does not matter; malformed present fields always fail

use crate::receipt::convert;
use crate::receipt::error::{ReceiptError, ReceiptResult};
use crate::receipt::field::Field;
use crate::receipt::scan;
use crate::receipt::types::DeliveryReceipt;
use chrono::TimeZone;
use tracing::{debug, trace};

/// How missing fields are treated when parsing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Every field except `text` must be present and non-empty
    #[default]
    Strict,
    /// Missing fields are left unset; malformed fields still fail
    Lenient,
}

/// Parses receipt text such as
/// `id:1234567890 sub:001 dlvrd:001 submit date:2101011200 done date:2101011205 stat:DELIVRD err:000 text:Hello`.
///
/// Labels are matched case-insensitively and may appear in any order. The
/// timestamps in the text carry no zone, `zone` supplies it.
pub fn parse<Tz: TimeZone>(
    text: &str,
    zone: &Tz,
    mode: ParseMode,
) -> ReceiptResult<DeliveryReceipt> {
    let mut receipt = DeliveryReceipt::new();

    for (field, value) in scan::scan(text) {
        trace!(%field, value, "Receipt field located");
        apply_field(&mut receipt, field, value, zone)?;
    }

    if mode == ParseMode::Strict {
        if let Err(e) = receipt.check_complete() {
            debug!("Rejecting incomplete delivery receipt: {}", e);
            return Err(e);
        }
    }

    Ok(receipt)
}

fn apply_field<Tz: TimeZone>(
    receipt: &mut DeliveryReceipt,
    field: Field,
    value: &str,
    zone: &Tz,
) -> ReceiptResult<()> {
    match field {
        Field::Id => receipt.set_message_id(value),
        Field::Sub => receipt.set_submit_count(convert::parse_count(field, value)?),
        Field::Dlvrd => receipt.set_delivered_count(convert::parse_count(field, value)?),
        Field::SubmitDate => receipt.set_submit_date(convert::parse_date(field, value, zone)?),
        Field::DoneDate => receipt.set_done_date(convert::parse_date(field, value, zone)?),
        Field::Stat => receipt.set_state(convert::parse_state(value)?),
        Field::Err => receipt.set_raw_error_code(convert::check_error_code(value)?)?,
        Field::Text => receipt.set_text(value),
    }
    Ok(())
}

/// Applies a value to the field named by `label`.
///
/// Used when fields arrive already split, e.g. from a vendor-specific TLV
/// layout. Unknown labels fail with [`ReceiptError::UnsupportedField`].
pub fn apply_labelled<Tz: TimeZone>(
    receipt: &mut DeliveryReceipt,
    label: &str,
    value: &str,
    zone: &Tz,
) -> ReceiptResult<()> {
    let field = Field::from_label(label).ok_or_else(|| ReceiptError::UnsupportedField {
        label: label.to_string(),
    })?;
    let value = value.trim();
    if value.is_empty() {
        return Ok(());
    }
    apply_field(receipt, field, value, zone)
}

impl DeliveryReceipt {
    /// Parses receipt text, requiring every field except `text`.
    pub fn parse<Tz: TimeZone>(text: &str, zone: &Tz) -> ReceiptResult<Self> {
        parse(text, zone, ParseMode::Strict)
    }

    /// Parses receipt text, leaving missing fields unset.
    pub fn parse_lenient<Tz: TimeZone>(text: &str, zone: &Tz) -> ReceiptResult<Self> {
        parse(text, zone, ParseMode::Lenient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::FinalState;
    use chrono::Utc;

    const CANONICAL: &str = "id:1234567890 sub:001 dlvrd:001 submit date:2101011200 done date:2101011205 stat:DELIVRD err:000 text:Hello World";

    #[test]
    fn test_parse_canonical() {
        let receipt = DeliveryReceipt::parse(CANONICAL, &Utc).unwrap();
        assert_eq!(receipt.message_id(), Some("1234567890"));
        assert_eq!(receipt.submit_count(), Some(1));
        assert_eq!(receipt.delivered_count(), Some(1));
        assert_eq!(receipt.state(), Some(FinalState::Delivered));
        assert_eq!(receipt.raw_error_code(), Some("000"));
        assert_eq!(receipt.error_code(), Some(0));
        assert_eq!(receipt.text(), Some("Hello World"));
    }

    #[test]
    fn test_malformed_field_fails_even_when_lenient() {
        let err = DeliveryReceipt::parse_lenient("id:1 sub:abc", &Utc).unwrap_err();
        assert_eq!(
            err,
            ReceiptError::FieldConversion {
                field: Field::Sub,
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_err_too_long() {
        let text = CANONICAL.replace("err:000", "err:ABCD");
        let err = DeliveryReceipt::parse(&text, &Utc).unwrap_err();
        assert_eq!(
            err,
            ReceiptError::InvalidErrorCodeLength {
                value: "ABCD".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_err_is_kept_raw() {
        let text = CANONICAL.replace("err:000", "err:X9");
        let receipt = DeliveryReceipt::parse(&text, &Utc).unwrap();
        assert_eq!(receipt.raw_error_code(), Some("X9"));
        assert_eq!(receipt.error_code(), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            DeliveryReceipt::parse("", &Utc),
            Err(ReceiptError::MissingField { field: Field::Id })
        );
        assert_eq!(DeliveryReceipt::parse_lenient("", &Utc), Ok(DeliveryReceipt::new()));
    }

    #[test]
    fn test_apply_labelled() {
        let mut receipt = DeliveryReceipt::new();
        apply_labelled(&mut receipt, "STAT:", "undeliv", &Utc).unwrap();
        apply_labelled(&mut receipt, "id:", "  ", &Utc).unwrap();
        assert_eq!(receipt.state(), Some(FinalState::Undeliverable));
        assert_eq!(receipt.message_id(), None);

        let err = apply_labelled(&mut receipt, "foo:", "bar", &Utc).unwrap_err();
        assert_eq!(
            err,
            ReceiptError::UnsupportedField {
                label: "foo:".to_string()
            }
        );
    }
}
