// ABOUTME: Renders a DeliveryReceipt as canonical receipt text
// ABOUTME: Fixed field order and widths; unset fields degrade to placeholder text instead of failing

use crate::datatypes::FinalState;
use crate::receipt::convert;
use crate::receipt::field::Field;
use crate::receipt::types::DeliveryReceipt;
use std::fmt::{self, Write};

impl DeliveryReceipt {
    /// Renders the receipt as the text carried in a short message.
    ///
    /// Counts are zero-padded to three digits, dates use `yyMMddHHmm` and
    /// `text` is cut to its first 20 characters.
    pub fn to_short_message(&self) -> String {
        let mut buf = String::with_capacity(160);
        // Writing into a String cannot fail.
        let _ = self.write_short_message(&mut buf);
        buf
    }

    fn write_short_message<W: Write>(&self, out: &mut W) -> fmt::Result {
        for (i, field) in Field::ALL.into_iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            out.write_str(field.label())?;
            match field {
                Field::Id => out.write_str(self.message_id().unwrap_or_default())?,
                Field::Sub => write!(out, "{:03}", self.submit_count().unwrap_or(0))?,
                Field::Dlvrd => write!(out, "{:03}", self.delivered_count().unwrap_or(0))?,
                Field::SubmitDate => out.write_str(&convert::format_date(self.submit_date()))?,
                Field::DoneDate => out.write_str(&convert::format_date(self.done_date()))?,
                Field::Stat => out.write_str(FinalState::code_or_bad(self.state()))?,
                Field::Err => out.write_str(self.raw_error_code().unwrap_or_default())?,
                Field::Text => {
                    let text = self.text().unwrap_or_default();
                    match text.char_indices().nth(Field::TEXT_MAX_LEN) {
                        Some((cut, _)) => out.write_str(&text[..cut])?,
                        None => out.write_str(text)?,
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for DeliveryReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_short_message(f)
    }
}
