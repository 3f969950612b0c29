pub mod datatypes;
pub mod handler;
pub mod receipt;


// Re-export the receipt codec for easy access
pub use datatypes::FinalState;
pub use handler::{HandlerConfig, InboundMessage, ReceiptDetection, ReceiptHandler};
pub use receipt::{DeliveryReceipt, Field, ParseMode, ReceiptError, ReceiptResult};

/// Parses delivery receipt text in the given time zone.
///
/// This is defined as a convenience over [`receipt::parse`].
///
/// # Examples
///
/// ## Parsing a receipt
///
/// ```rust
/// use chrono::Utc;
/// use smpp_dlr::{DeliveryReceipt, FinalState};
///
/// let text = "id:1234567890 sub:001 dlvrd:001 submit date:2101011200 \
///             done date:2101011205 stat:DELIVRD err:000 text:Hello World";
/// let receipt = DeliveryReceipt::parse(text, &Utc)?;
///
/// assert_eq!(receipt.message_id(), Some("1234567890"));
/// assert_eq!(receipt.state(), Some(FinalState::Delivered));
/// assert_eq!(receipt.to_short_message(), text);
/// # Ok::<(), smpp_dlr::ReceiptError>(())
/// ```
///
/// ## Lenient parsing
///
/// Missing fields are tolerated, malformed ones are not:
///
/// ```rust
/// use chrono::Utc;
/// use smpp_dlr::{ParseMode, ReceiptError, parse};
///
/// let receipt = parse("stat:expired id:42", &Utc, ParseMode::Lenient)?;
/// assert_eq!(receipt.delivered_count(), None);
///
/// let err = parse("id:42 err:ABCD", &Utc, ParseMode::Lenient).unwrap_err();
/// assert!(matches!(err, ReceiptError::InvalidErrorCodeLength { .. }));
/// # Ok::<(), ReceiptError>(())
/// ```
pub fn parse<Tz: chrono::TimeZone>(
    text: &str,
    zone: &Tz,
    mode: ParseMode,
) -> ReceiptResult<DeliveryReceipt> {
    receipt::parse(text, zone, mode)
}
