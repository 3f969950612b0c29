// ABOUTME: Message-type classification of the esm_class octet on deliver_sm and data_sm
// ABOUTME: Tells delivery receipts apart from ordinary mobile-originated messages

use std::fmt;

/// Bits 5-2 of esm_class carry the message type on SMSC -> ESME messages.
const MESSAGE_TYPE_MASK: u8 = 0x3C;
/// Bits 4-2, the part of the message type that is mutually exclusive.
const EXCLUSIVE_TYPE_MASK: u8 = 0x1C;
/// Bit 5 flags an intermediate delivery notification and may combine with the others.
const INTERMEDIATE_NOTIFICATION_FLAG: u8 = 0x20;

/// Message type of an inbound deliver_sm (SMPP v3.4 section 5.2.12).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum DeliverMessageType {
    /// Ordinary short message
    Default = 0b0000_0000,
    /// SMSC delivery receipt
    SmscDeliveryReceipt = 0b0000_0100,
    /// SME delivery acknowledgement
    SmeDeliveryAck = 0b0000_1000,
    /// SME manual/user acknowledgement
    SmeManualAck = 0b0001_0000,
    /// Conversation abort (Korean CDMA)
    ConversationAbort = 0b0001_1000,
    /// Intermediate delivery notification
    IntermediateDeliveryNotification = 0b0010_0000,
}

impl DeliverMessageType {
    /// Classifies the message-type bits of a raw esm_class octet.
    pub fn from_esm_class(esm_class: u8) -> Result<Self, EsmClassError> {
        if esm_class & INTERMEDIATE_NOTIFICATION_FLAG != 0 {
            return Ok(DeliverMessageType::IntermediateDeliveryNotification);
        }
        match esm_class & EXCLUSIVE_TYPE_MASK {
            0x00 => Ok(DeliverMessageType::Default),
            0x04 => Ok(DeliverMessageType::SmscDeliveryReceipt),
            0x08 => Ok(DeliverMessageType::SmeDeliveryAck),
            0x10 => Ok(DeliverMessageType::SmeManualAck),
            0x18 => Ok(DeliverMessageType::ConversationAbort),
            bits => Err(EsmClassError::InvalidMessageType(bits)),
        }
    }

    /// Returns true for either kind of delivery receipt.
    pub fn is_delivery_receipt(self) -> bool {
        matches!(
            self,
            DeliverMessageType::SmscDeliveryReceipt
                | DeliverMessageType::IntermediateDeliveryNotification
        )
    }
}

/// True when esm_class marks an SMSC delivery receipt.
pub fn is_smsc_delivery_receipt(esm_class: u8) -> bool {
    esm_class & EXCLUSIVE_TYPE_MASK == DeliverMessageType::SmscDeliveryReceipt as u8
}

/// True when esm_class carries the intermediate delivery notification flag.
pub fn is_intermediate_delivery_notification(esm_class: u8) -> bool {
    esm_class & INTERMEDIATE_NOTIFICATION_FLAG != 0
}

/// True when esm_class marks any kind of delivery receipt.
pub fn is_any_delivery_receipt(esm_class: u8) -> bool {
    is_smsc_delivery_receipt(esm_class) || is_intermediate_delivery_notification(esm_class)
}

/// Message-type bits of a raw esm_class octet.
pub fn message_type_bits(esm_class: u8) -> u8 {
    esm_class & MESSAGE_TYPE_MASK
}

/// Errors that can occur when classifying an esm_class octet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EsmClassError {
    /// Reserved message-type bit pattern
    InvalidMessageType(u8),
}

impl fmt::Display for EsmClassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EsmClassError::InvalidMessageType(bits) => {
                write!(f, "Invalid message type bits: 0x{bits:02X}")
            }
        }
    }
}

impl std::error::Error for EsmClassError {}
