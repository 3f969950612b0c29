// ABOUTME: Locates catalog labels in receipt text and slices out the value each one owns
// ABOUTME: Values may contain spaces and colons, so a value runs up to the next located label

use crate::receipt::field::Field;

/// A catalog label found in the receipt text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocatedField {
    /// Byte offset of the first character of the label
    pub position: usize,
    pub field: Field,
}

impl LocatedField {
    /// Byte offset just past the label's colon.
    pub fn value_start(&self) -> usize {
        self.position + self.field.label().len()
    }
}

/// Finds the first occurrence of every catalog label, ordered by position.
///
/// `folded` must be the receipt text with ASCII letters lower-cased, so that
/// offsets are valid in the original text too. Labels that do not occur are
/// simply absent from the result.
pub fn locate_fields(folded: &str) -> Vec<LocatedField> {
    let mut located: Vec<LocatedField> = Field::ALL
        .into_iter()
        .filter_map(|field| {
            folded
                .find(field.label())
                .map(|position| LocatedField { position, field })
        })
        .collect();
    located.sort_by_key(|located| located.position);
    located
}

/// Cuts the value owned by each located field out of the original text.
///
/// A value spans from the end of its label to the start of the next located
/// label, or to the end of the text. Values are trimmed; fields whose trimmed
/// value is empty are left out, as though the label had not been found.
pub fn slice_fields<'a>(text: &'a str, located: &[LocatedField]) -> Vec<(Field, &'a str)> {
    located
        .iter()
        .enumerate()
        .filter_map(|(i, current)| {
            let end = located.get(i + 1).map_or(text.len(), |next| next.position);
            let value = text.get(current.value_start()..end)?.trim();
            (!value.is_empty()).then_some((current.field, value))
        })
        .collect()
}

/// Locates and slices in one pass over `text`, matching labels case-insensitively.
pub fn scan(text: &str) -> Vec<(Field, &str)> {
    let folded = text.to_ascii_lowercase();
    let located = locate_fields(&folded);
    slice_fields(text, &located)
}
