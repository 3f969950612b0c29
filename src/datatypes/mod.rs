pub mod esm_class;
mod message_state;

pub use esm_class::{DeliverMessageType, EsmClassError};
pub use message_state::FinalState;
