// ABOUTME: Error types for delivery receipt parsing and field validation
// ABOUTME: A closed set of variants so callers can branch on the failure kind

use crate::receipt::field::Field;
use thiserror::Error;

/// Reasons a delivery receipt could not be parsed or a field could not be set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    /// A located field's value could not be converted to its target type
    #[error("Unable to convert [{}] field with value [{value}] into {}", .field.name(), .field.target())]
    FieldConversion { field: Field, value: String },

    /// The `err` field is longer than three characters
    #[error("The [err] field value [{value}] is longer than {max} characters", max = Field::ERR_MAX_LEN)]
    InvalidErrorCodeLength { value: String },

    /// A label outside the field catalog was encountered
    #[error("Unsupported field [{label}] found")]
    UnsupportedField { label: String },

    /// A required field was absent or empty in strict mode
    #[error("Unable to find [{}] field or empty value in delivery receipt message", .field.name())]
    MissingField { field: Field },
}

impl ReceiptError {
    pub(crate) fn conversion(field: Field, value: &str) -> Self {
        ReceiptError::FieldConversion {
            field,
            value: value.to_string(),
        }
    }
}

/// Result type alias for receipt operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ReceiptError::conversion(Field::Sub, "abc");
        assert_eq!(
            err.to_string(),
            "Unable to convert [sub] field with value [abc] into an integer"
        );

        let err = ReceiptError::MissingField {
            field: Field::SubmitDate,
        };
        assert_eq!(
            err.to_string(),
            "Unable to find [submit date] field or empty value in delivery receipt message"
        );

        let err = ReceiptError::InvalidErrorCodeLength {
            value: "ABCD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The [err] field value [ABCD] is longer than 3 characters"
        );
    }
}
