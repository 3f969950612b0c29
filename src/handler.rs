// ABOUTME: Inbound delivery hook that picks delivery receipts out of received messages
// ABOUTME: Parses and logs receipts on a best-effort basis; a bad receipt never fails the caller

use crate::datatypes::esm_class;
use crate::receipt::{DeliveryReceipt, ParseMode};
use chrono::{TimeZone, Utc};
use tracing::{info, warn};

/// How a received message is recognised as a delivery receipt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReceiptDetection {
    /// The esm_class message-type bits mark a delivery receipt
    #[default]
    EsmClass,
    /// The PDU carried optional parameters (for SMSCs that do not set esm_class)
    OptionalParameters,
}

/// Settings for [`ReceiptHandler`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandlerConfig {
    pub detection: ReceiptDetection,
    pub mode: ParseMode,
}

impl HandlerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detection(mut self, detection: ReceiptDetection) -> Self {
        self.detection = detection;
        self
    }

    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }
}

/// The parts of a received deliver_sm or data_sm the handler looks at.
///
/// `text` is the short message already decoded according to its data_coding.
#[derive(Clone, Copy, Debug)]
pub struct InboundMessage<'a> {
    pub source_addr: &'a str,
    pub esm_class: u8,
    pub has_optional_parameters: bool,
    pub text: &'a str,
}

/// Turns received messages into delivery receipts.
#[derive(Clone, Debug)]
pub struct ReceiptHandler<Tz: TimeZone = Utc> {
    config: HandlerConfig,
    zone: Tz,
}

impl ReceiptHandler<Utc> {
    /// Handler with default settings reading receipt timestamps as UTC.
    pub fn utc() -> Self {
        Self::new(Utc)
    }
}

impl<Tz: TimeZone> ReceiptHandler<Tz> {
    pub fn new(zone: Tz) -> Self {
        Self::with_config(zone, HandlerConfig::default())
    }

    pub fn with_config(zone: Tz, config: HandlerConfig) -> Self {
        Self { config, zone }
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Whether `message` should be treated as a delivery receipt.
    pub fn is_delivery_receipt(&self, message: &InboundMessage<'_>) -> bool {
        match self.config.detection {
            ReceiptDetection::EsmClass => esm_class::is_any_delivery_receipt(message.esm_class),
            ReceiptDetection::OptionalParameters => message.has_optional_parameters,
        }
    }

    /// Logs a received message and parses it if it is a delivery receipt.
    ///
    /// Returns `None` for ordinary messages and for receipts that fail to
    /// parse. The message should be acknowledged either way.
    pub fn handle(&self, message: &InboundMessage<'_>) -> Option<DeliveryReceipt> {
        info!(
            "SMS message received: {}, source address: {}",
            message.text.trim(),
            message.source_addr
        );

        if !self.is_delivery_receipt(message) {
            return None;
        }

        match crate::receipt::parse(message.text, &self.zone, self.config.mode) {
            Ok(receipt) => {
                info!(
                    "Received delivery from {} at {} with message-id {} and status {}",
                    message.source_addr,
                    receipt
                        .done_date()
                        .map_or_else(|| "-".to_string(), |d| d.to_rfc3339()),
                    receipt.message_id().unwrap_or("-"),
                    receipt.state().map_or("BADSTAT", |s| s.name()),
                );
                Some(receipt)
            }
            Err(e) => {
                warn!(
                    "Error while handling delivery from {}: {}",
                    message.source_addr, e
                );
                None
            }
        }
    }
}
