// ABOUTME: The structured delivery receipt record and its builder
// ABOUTME: Absent fields are real absence (Option), the error code pair is kept in sync by its setters

use crate::datatypes::FinalState;
use crate::receipt::error::{ReceiptError, ReceiptResult};
use crate::receipt::field::Field;
use chrono::{DateTime, FixedOffset};
use std::num::ParseIntError;

/// A delivery receipt as carried in the short message of a deliver_sm or data_sm.
///
/// A receipt returned by a strict parse, or by [`DeliveryReceiptBuilder::build`],
/// has every field except `text` present. Lenient parses may leave any field unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    message_id: Option<String>,
    submit_count: Option<u32>,
    delivered_count: Option<u32>,
    submit_date: Option<DateTime<FixedOffset>>,
    done_date: Option<DateTime<FixedOffset>>,
    state: Option<FinalState>,
    error_code: Option<i32>,
    raw_error_code: Option<String>,
    text: Option<String>,
}

impl DeliveryReceipt {
    /// Creates an empty receipt with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing receipts in code.
    pub fn builder() -> DeliveryReceiptBuilder {
        DeliveryReceiptBuilder::new()
    }

    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    pub fn set_message_id(&mut self, message_id: impl Into<String>) {
        self.message_id = Some(message_id.into());
    }

    /// Sets the message id from a number, zero-padded to 10 digits.
    pub fn set_message_id_u64(&mut self, message_id: u64) {
        self.message_id = Some(format!("{message_id:010}"));
    }

    /// Interprets the message id as a decimal number.
    pub fn message_id_as_u64(&self) -> Option<Result<u64, ParseIntError>> {
        self.message_id.as_deref().map(str::parse)
    }

    pub fn submit_count(&self) -> Option<u32> {
        self.submit_count
    }

    pub fn set_submit_count(&mut self, count: u32) {
        self.submit_count = Some(count);
    }

    pub fn delivered_count(&self) -> Option<u32> {
        self.delivered_count
    }

    pub fn set_delivered_count(&mut self, count: u32) {
        self.delivered_count = Some(count);
    }

    pub fn submit_date(&self) -> Option<&DateTime<FixedOffset>> {
        self.submit_date.as_ref()
    }

    pub fn set_submit_date(&mut self, date: DateTime<FixedOffset>) {
        self.submit_date = Some(date);
    }

    pub fn done_date(&self) -> Option<&DateTime<FixedOffset>> {
        self.done_date.as_ref()
    }

    pub fn set_done_date(&mut self, date: DateTime<FixedOffset>) {
        self.done_date = Some(date);
    }

    pub fn state(&self) -> Option<FinalState> {
        self.state
    }

    pub fn set_state(&mut self, state: FinalState) {
        self.state = Some(state);
    }

    pub fn error_code(&self) -> Option<i32> {
        self.error_code
    }

    /// Sets the numeric error code and regenerates the raw code, zero-padded
    /// to three digits.
    ///
    /// Fails if the padded rendering would not fit in three characters.
    pub fn set_error_code(&mut self, code: i32) -> ReceiptResult<()> {
        let raw = format!("{code:03}");
        if raw.len() > Field::ERR_MAX_LEN {
            return Err(ReceiptError::InvalidErrorCodeLength { value: raw });
        }
        self.error_code = Some(code);
        self.raw_error_code = Some(raw);
        Ok(())
    }

    pub fn raw_error_code(&self) -> Option<&str> {
        self.raw_error_code.as_deref()
    }

    /// Sets the raw error code as it appears on the wire.
    ///
    /// The numeric error code is updated when `raw` parses as an integer and
    /// keeps its previous value otherwise. Surrounding whitespace is dropped;
    /// a blank `raw` falls back to the padded numeric code, or unsets the raw
    /// code when there is none.
    pub fn set_raw_error_code(&mut self, raw: impl Into<String>) -> ReceiptResult<()> {
        let raw = raw.into();
        let raw = raw.trim();
        if raw.chars().count() > Field::ERR_MAX_LEN {
            return Err(ReceiptError::InvalidErrorCodeLength {
                value: raw.to_string(),
            });
        }
        if raw.is_empty() {
            self.raw_error_code = self.error_code.map(|code| format!("{code:03}"));
            return Ok(());
        }
        if let Ok(code) = raw.parse::<i32>() {
            self.error_code = Some(code);
        }
        self.raw_error_code = Some(raw.to_string());
        Ok(())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sets the message excerpt, without surrounding whitespace.
    ///
    /// Blank text unsets the field, as it would read back from receipt text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        let trimmed = text.trim();
        self.text = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    /// Checks that every required field is present.
    ///
    /// Fields are checked in the order id, sub, dlvrd, submit date, done date,
    /// stat, err and the first missing one is reported. The error code counts
    /// as present only through its raw form, the one that gets serialized.
    pub fn check_complete(&self) -> ReceiptResult<()> {
        let missing = if self.message_id.as_deref().is_none_or(str::is_empty) {
            Some(Field::Id)
        } else if self.submit_count.is_none() {
            Some(Field::Sub)
        } else if self.delivered_count.is_none() {
            Some(Field::Dlvrd)
        } else if self.submit_date.is_none() {
            Some(Field::SubmitDate)
        } else if self.done_date.is_none() {
            Some(Field::DoneDate)
        } else if self.state.is_none() {
            Some(Field::Stat)
        } else if self.raw_error_code.as_deref().is_none_or(str::is_empty) {
            Some(Field::Err)
        } else {
            None
        };

        match missing {
            Some(field) => Err(ReceiptError::MissingField { field }),
            None => Ok(()),
        }
    }
}

/// Formats a message id number as lower-case hexadecimal.
pub fn message_id_to_hex(value: u64) -> String {
    format!("{value:x}")
}

/// Parses a hexadecimal message id, as used by SMSCs that report ids in hex.
pub fn message_id_from_hex(value: &str) -> Result<u64, ParseIntError> {
    u64::from_str_radix(value, 16)
}

/// Builder for [`DeliveryReceipt`]
#[derive(Debug, Default)]
pub struct DeliveryReceiptBuilder {
    receipt: DeliveryReceipt,
    error: Option<ReceiptError>,
}

impl DeliveryReceiptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.receipt.set_message_id(message_id);
        self
    }

    pub fn submit_count(mut self, count: u32) -> Self {
        self.receipt.set_submit_count(count);
        self
    }

    pub fn delivered_count(mut self, count: u32) -> Self {
        self.receipt.set_delivered_count(count);
        self
    }

    pub fn submit_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.receipt.set_submit_date(date);
        self
    }

    pub fn done_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.receipt.set_done_date(date);
        self
    }

    pub fn state(mut self, state: FinalState) -> Self {
        self.receipt.set_state(state);
        self
    }

    pub fn error_code(mut self, code: i32) -> Self {
        if let Err(e) = self.receipt.set_error_code(code) {
            self.error.get_or_insert(e);
        }
        self
    }

    pub fn raw_error_code(mut self, raw: impl Into<String>) -> Self {
        if let Err(e) = self.receipt.set_raw_error_code(raw) {
            self.error.get_or_insert(e);
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.receipt.set_text(text);
        self
    }

    /// Builds the receipt, requiring every field except `text`.
    pub fn build(self) -> ReceiptResult<DeliveryReceipt> {
        let receipt = self.build_partial()?;
        receipt.check_complete()?;
        Ok(receipt)
    }

    /// Builds the receipt without checking for missing fields.
    pub fn build_partial(self) -> ReceiptResult<DeliveryReceipt> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.receipt),
        }
    }
}
