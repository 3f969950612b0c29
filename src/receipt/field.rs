// ABOUTME: Catalog of the labelled fields recognised in delivery receipt text
// ABOUTME: Every other receipt component takes its labels and canonical order from here

use std::fmt;

/// A labelled field of the `id:... sub:... dlvrd:...` receipt text.
///
/// Variants are declared in canonical serialization order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Sub,
    Dlvrd,
    SubmitDate,
    DoneDate,
    Stat,
    Err,
    Text,
}

impl Field {
    /// All fields, in canonical order.
    pub const ALL: [Field; 8] = [
        Field::Id,
        Field::Sub,
        Field::Dlvrd,
        Field::SubmitDate,
        Field::DoneDate,
        Field::Stat,
        Field::Err,
        Field::Text,
    ];

    /// Maximum length of the `err` value.
    pub const ERR_MAX_LEN: usize = 3;

    /// Maximum length of the `text` value when serialized.
    pub const TEXT_MAX_LEN: usize = 20;

    /// The literal label, lower case and including the trailing colon.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Id => "id:",
            Field::Sub => "sub:",
            Field::Dlvrd => "dlvrd:",
            Field::SubmitDate => "submit date:",
            Field::DoneDate => "done date:",
            Field::Stat => "stat:",
            Field::Err => "err:",
            Field::Text => "text:",
        }
    }

    /// The label without its colon, as used in diagnostics.
    pub fn name(self) -> &'static str {
        let label = self.label();
        &label[..label.len() - 1]
    }

    /// Looks up a field by its label, ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(label))
    }

    /// What a value of this field converts into.
    pub(crate) fn target(self) -> &'static str {
        match self {
            Field::Sub | Field::Dlvrd | Field::Err => "an integer",
            Field::SubmitDate | Field::DoneDate => "a datetime object",
            Field::Stat => "a valid state",
            Field::Id | Field::Text => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_end_with_colon_and_are_lowercase() {
        for field in Field::ALL {
            let label = field.label();
            assert!(label.ends_with(':'));
            assert_eq!(label, label.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_no_label_contains_another() {
        for a in Field::ALL {
            for b in Field::ALL {
                if a != b {
                    assert!(!a.label().contains(b.label()), "{a} contains {b}");
                }
            }
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Field::from_label("ID:"), Some(Field::Id));
        assert_eq!(Field::from_label("Submit Date:"), Some(Field::SubmitDate));
        assert_eq!(Field::from_label("id"), None);
        assert_eq!(Field::DoneDate.name(), "done date");
    }
}
