use crate::{FieldId, FieldKind, SelectorKind};

/// One editable unit in the form builder: a question or an informational note.
///
/// Blocks hold explicit structured state. Serialization reads this state
/// directly rather than re-deriving it from rendered widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBlock {
    /// The unique identifier assigned at creation.
    id: FieldId,

    /// The tagged body state.
    body: FieldBody,
}

impl FieldBlock {
    /// Create a question block defaulted to kind Text with empty values.
    pub fn question(id: FieldId) -> Self {
        Self {
            id,
            body: FieldBody::Question(QuestionField::new()),
        }
    }

    /// Create an informational note block with empty text.
    pub fn info(id: FieldId) -> Self {
        Self {
            id,
            body: FieldBody::Info(String::new()),
        }
    }

    /// Get the block's identifier.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Get the body state.
    pub fn body(&self) -> &FieldBody {
        &self.body
    }

    /// Get a mutable reference to the body state.
    pub fn body_mut(&mut self) -> &mut FieldBody {
        &mut self.body
    }

    /// Get the kind-selector tag, or `None` for info blocks (which have no
    /// kind selector).
    pub fn kind(&self) -> Option<FieldKind> {
        match &self.body {
            FieldBody::Question(question) => Some(question.options.kind()),
            FieldBody::Info(_) => None,
        }
    }

    /// Check if this is an informational note.
    pub fn is_info(&self) -> bool {
        matches!(self.body, FieldBody::Info(_))
    }
}

/// The tagged body of a field block.
///
/// Info is only reachable at creation time and has no outgoing transitions;
/// the four question kinds form a flat set reachable from one another via
/// the kind selector.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldBody {
    /// A question with a name and kind-specific options.
    Question(QuestionField),

    /// Free informational text shown between questions.
    Info(String),
}

/// The editable state of a question block.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionField {
    /// The question name/label.
    pub name: String,

    /// Kind-specific option state.
    pub options: FieldOptions,
}

impl QuestionField {
    /// Create a question defaulted to kind Text.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            options: FieldOptions::for_kind(FieldKind::Text),
        }
    }
}

impl Default for QuestionField {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind-specific option state of a question.
///
/// Changing the kind replaces this wholesale with the fresh region for the
/// new kind; prior state is discarded, never migrated.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOptions {
    /// A single default-value input.
    Text {
        /// Default answer text, may be empty.
        default: String,
    },

    /// An add-choice control plus the appended choices.
    Choice {
        /// Radio semantics when true, checkbox semantics otherwise.
        exclusive: bool,
        /// Appended choices in insertion order. No removal, no dedup.
        choices: Vec<Choice>,
    },

    /// Min, max and default inputs, kept as raw text until serialization.
    Range {
        /// Raw minimum input.
        min: String,
        /// Raw maximum input.
        max: String,
        /// Raw default input.
        default: String,
    },
}

impl FieldOptions {
    /// The fresh (empty) options region for a kind.
    pub fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text {
                default: String::new(),
            },
            FieldKind::SingleChoice => Self::Choice {
                exclusive: true,
                choices: Vec::new(),
            },
            FieldKind::MultiChoice => Self::Choice {
                exclusive: false,
                choices: Vec::new(),
            },
            FieldKind::Range => Self::Range {
                min: String::new(),
                max: String::new(),
                default: String::new(),
            },
        }
    }

    /// The kind-selector tag this region belongs to.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text { .. } => FieldKind::Text,
            Self::Choice {
                exclusive: true, ..
            } => FieldKind::SingleChoice,
            Self::Choice {
                exclusive: false, ..
            } => FieldKind::MultiChoice,
            Self::Range { .. } => FieldKind::Range,
        }
    }
}

/// One (selector, label) pair in a choice set.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// The selector widget kind, fixed when the choice was appended.
    pub selector: SelectorKind,

    /// The choice label text.
    pub label: String,
}

impl Choice {
    /// Create a choice with an empty label for a choice set with the given
    /// exclusivity.
    pub fn new(exclusive: bool) -> Self {
        Self {
            selector: SelectorKind::for_exclusive(exclusive),
            label: String::new(),
        }
    }
}
