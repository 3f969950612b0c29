// ABOUTME: Delivery receipt text codec module organization and public exports
// ABOUTME: Parses the free-form `id:... stat:... err:...` text of SMSC receipts and renders it back

pub mod convert;
pub mod error;
pub mod field;
pub mod parser;
pub mod scan;
pub mod serializer;
pub mod types;

pub use error::{ReceiptError, ReceiptResult};
pub use field::Field;
pub use parser::{ParseMode, parse};
pub use types::{DeliveryReceipt, DeliveryReceiptBuilder, message_id_from_hex, message_id_to_hex};
