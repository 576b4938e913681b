use crate::FieldId;

/// Error type for form builder operations.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// No block with the given id exists (never created, or removed).
    #[error("No field with id: {0}")]
    UnknownField(FieldId),

    /// Kind changes and name edits target questions; info blocks have no
    /// kind selector.
    #[error("Field {0} is an info block and has no kind selector")]
    NotAQuestion(FieldId),

    /// Text edits target info blocks only.
    #[error("Field {0} is not an info block")]
    NotAnInfo(FieldId),

    /// Choice operations target blocks whose options region is a choice set.
    #[error("Field {0} is not a choice field")]
    NotAChoiceField(FieldId),

    /// Default-value edits target text fields only.
    #[error("Field {0} is not a text field")]
    NotATextField(FieldId),

    /// Bound edits target range fields only.
    #[error("Field {0} is not a range field")]
    NotARangeField(FieldId),

    /// The choice index is past the end of the block's choice list.
    #[error("Field {id} has no choice at index {index}")]
    NoSuchChoice {
        /// The targeted block.
        id: FieldId,
        /// The out-of-bounds choice index.
        index: usize,
    },

    /// Info fields are only available in the variant that enables them.
    #[error("Info fields are disabled for this form")]
    InfoFieldsDisabled,
}
