/// The kind of a question field, as offered by the kind selector.
///
/// The selector index mapping is part of the wire contract and must not
/// change: 0 = Text, 1 = SingleChoice, 2 = MultiChoice, 3 = Range. The
/// serialized `type` tag depends on it indirectly (both choice kinds share
/// the `choice` tag, distinguished by the `single` flag).
///
/// Info blocks have no kind selector and are not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text answer with an optional default value.
    Text,

    /// Pick exactly one choice (radio semantics).
    SingleChoice,

    /// Pick any number of choices (checkbox semantics).
    MultiChoice,

    /// Integer answer between min and max.
    Range,
}

impl FieldKind {
    /// Map a selector index to a kind. Returns `None` for indices past the
    /// last selector entry.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Text),
            1 => Some(Self::SingleChoice),
            2 => Some(Self::MultiChoice),
            3 => Some(Self::Range),
            _ => None,
        }
    }

    /// The selector index for this kind.
    pub fn index(&self) -> usize {
        match self {
            Self::Text => 0,
            Self::SingleChoice => 1,
            Self::MultiChoice => 2,
            Self::Range => 3,
        }
    }

    /// Check if this is one of the two choice kinds.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice)
    }

    /// Check if this kind has exclusive (radio) choice semantics.
    pub fn is_exclusive(&self) -> bool {
        matches!(self, Self::SingleChoice)
    }
}

/// The widget kind of a choice's selector input.
///
/// Fixed when the choice is appended: radio inside an exclusive choice set,
/// checkbox otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// Only one option may be selected.
    Radio,

    /// Any number of options may be selected.
    Checkbox,
}

impl SelectorKind {
    /// The selector kind appended for a choice set with the given exclusivity.
    pub fn for_exclusive(exclusive: bool) -> Self {
        if exclusive { Self::Radio } else { Self::Checkbox }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_mapping_is_stable() {
        for (index, kind) in [
            (0, FieldKind::Text),
            (1, FieldKind::SingleChoice),
            (2, FieldKind::MultiChoice),
            (3, FieldKind::Range),
        ] {
            assert_eq!(FieldKind::from_index(index), Some(kind));
            assert_eq!(kind.index(), index);
        }
        assert_eq!(FieldKind::from_index(4), None);
    }

    #[test]
    fn exclusivity() {
        assert!(FieldKind::SingleChoice.is_exclusive());
        assert!(!FieldKind::MultiChoice.is_exclusive());
        assert_eq!(SelectorKind::for_exclusive(true), SelectorKind::Radio);
        assert_eq!(SelectorKind::for_exclusive(false), SelectorKind::Checkbox);
    }
}
