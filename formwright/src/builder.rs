use formwright_types::{
    Choice, FieldBlock, FieldBody, FieldId, FieldKind, FieldOptions, FormError, QuestionField,
    SchemaField, SelectorKind,
};

/// Wording of the label on the third range input.
///
/// The two form variants disagree on it; frontends read this from the
/// builder configuration instead of hardcoding one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeLabel {
    /// Label the third input "default".
    #[default]
    Default,

    /// Label the third input "value".
    Value,
}

impl RangeLabel {
    /// The label text for this wording.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Value => "value",
        }
    }
}

/// Configuration for the two form-builder variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Whether informational note blocks can be added.
    info_fields: bool,

    /// Wording of the third range input's label.
    range_label: RangeLabel,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderConfig {
    /// Create the default configuration: info fields enabled, "default"
    /// wording.
    pub fn new() -> Self {
        Self {
            info_fields: true,
            range_label: RangeLabel::Default,
        }
    }

    /// Enable or disable info fields.
    pub fn with_info_fields(mut self, enabled: bool) -> Self {
        self.info_fields = enabled;
        self
    }

    /// Set the range label wording.
    pub fn with_range_label(mut self, label: RangeLabel) -> Self {
        self.range_label = label;
        self
    }

    /// Whether info fields can be added.
    pub fn info_fields(&self) -> bool {
        self.info_fields
    }

    /// The range label wording.
    pub fn range_label(&self) -> RangeLabel {
        self.range_label
    }
}

/// Maintains an ordered list of field blocks and converts it to a
/// transmittable schema on demand.
///
/// All state lives here: the block list, the monotonic id counter, and the
/// variant configuration. One builder is constructed per form being edited;
/// its lifetime equals the editing session's, so there is no teardown.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    /// Blocks in display order. Schema order is exactly this order.
    blocks: Vec<FieldBlock>,

    /// Next raw id. Incremented on every add, never decremented on remove.
    next_id: u64,

    /// Variant configuration.
    config: BuilderConfig,
}

impl FormBuilder {
    /// Create an empty form builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty form builder with the given configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            blocks: Vec::new(),
            next_id: 0,
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Append a question block defaulted to kind Text. Returns the new
    /// block's id.
    pub fn add_question_field(&mut self) -> FieldId {
        let id = self.bump_id();
        self.blocks.push(FieldBlock::question(id));
        id
    }

    /// Append an informational note block. Errors when the variant
    /// configuration disables info fields.
    pub fn add_info_field(&mut self) -> Result<FieldId, FormError> {
        if !self.config.info_fields {
            return Err(FormError::InfoFieldsDisabled);
        }
        let id = self.bump_id();
        self.blocks.push(FieldBlock::info(id));
        Ok(id)
    }

    /// Replace the block's options region with the fresh region for `kind`.
    ///
    /// Prior option state (entered choices, range bounds, the text default)
    /// is discarded, not migrated. Any kind is reachable from any other.
    pub fn set_field_kind(&mut self, id: FieldId, kind: FieldKind) -> Result<(), FormError> {
        let question = self.question_mut(id)?;
        question.options = FieldOptions::for_kind(kind);
        Ok(())
    }

    /// Append one (selector, empty label) choice to the block's choice set.
    ///
    /// Returns the selector kind of the appended widget: radio inside an
    /// exclusive set, checkbox otherwise. There is no upper bound on the
    /// choice count and no dedup.
    pub fn add_choice(&mut self, id: FieldId) -> Result<SelectorKind, FormError> {
        let question = self.question_mut(id)?;
        let FieldOptions::Choice { exclusive, choices } = &mut question.options else {
            return Err(FormError::NotAChoiceField(id));
        };
        let choice = Choice::new(*exclusive);
        let selector = choice.selector;
        choices.push(choice);
        Ok(selector)
    }

    /// Delete the block. The id counter is not renumbered; the removed id
    /// is never reused.
    pub fn remove_field(&mut self, id: FieldId) -> Result<(), FormError> {
        let index = self
            .blocks
            .iter()
            .position(|block| block.id() == id)
            .ok_or(FormError::UnknownField(id))?;
        self.blocks.remove(index);
        Ok(())
    }

    /// Set a question's name/label.
    pub fn set_name(&mut self, id: FieldId, name: impl Into<String>) -> Result<(), FormError> {
        self.question_mut(id)?.name = name.into();
        Ok(())
    }

    /// Set an info block's text.
    pub fn set_info_text(&mut self, id: FieldId, text: impl Into<String>) -> Result<(), FormError> {
        let block = self.block_mut(id)?;
        let FieldBody::Info(body) = block.body_mut() else {
            return Err(FormError::NotAnInfo(id));
        };
        *body = text.into();
        Ok(())
    }

    /// Set a text question's default value.
    pub fn set_text_default(
        &mut self,
        id: FieldId,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let question = self.question_mut(id)?;
        let FieldOptions::Text { default } = &mut question.options else {
            return Err(FormError::NotATextField(id));
        };
        *default = value.into();
        Ok(())
    }

    /// Set the label of the choice at `index`.
    pub fn set_choice_label(
        &mut self,
        id: FieldId,
        index: usize,
        label: impl Into<String>,
    ) -> Result<(), FormError> {
        let question = self.question_mut(id)?;
        let FieldOptions::Choice { choices, .. } = &mut question.options else {
            return Err(FormError::NotAChoiceField(id));
        };
        let choice = choices
            .get_mut(index)
            .ok_or(FormError::NoSuchChoice { id, index })?;
        choice.label = label.into();
        Ok(())
    }

    /// Set a range question's raw minimum input.
    pub fn set_range_min(&mut self, id: FieldId, value: impl Into<String>) -> Result<(), FormError> {
        let (min, _, _) = self.range_mut(id)?;
        *min = value.into();
        Ok(())
    }

    /// Set a range question's raw maximum input.
    pub fn set_range_max(&mut self, id: FieldId, value: impl Into<String>) -> Result<(), FormError> {
        let (_, max, _) = self.range_mut(id)?;
        *max = value.into();
        Ok(())
    }

    /// Set a range question's raw default input.
    pub fn set_range_default(
        &mut self,
        id: FieldId,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let (_, _, default) = self.range_mut(id)?;
        *default = value.into();
        Ok(())
    }

    /// Snapshot the block sequence into schema records, index for index.
    ///
    /// A fresh list is produced on every call; nothing is cached.
    pub fn build_schema(&self) -> Vec<SchemaField> {
        self.blocks.iter().map(SchemaField::from).collect()
    }

    /// Get the blocks in display order.
    pub fn blocks(&self) -> &[FieldBlock] {
        &self.blocks
    }

    /// Get the block with the given id, if it exists.
    pub fn block(&self, id: FieldId) -> Option<&FieldBlock> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    /// Get the kind-selector tag of a block, or `None` for info blocks.
    pub fn kind_of(&self, id: FieldId) -> Result<Option<FieldKind>, FormError> {
        self.block(id)
            .map(FieldBlock::kind)
            .ok_or(FormError::UnknownField(id))
    }

    /// The number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the form has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn bump_id(&mut self) -> FieldId {
        let id = FieldId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn block_mut(&mut self, id: FieldId) -> Result<&mut FieldBlock, FormError> {
        self.blocks
            .iter_mut()
            .find(|block| block.id() == id)
            .ok_or(FormError::UnknownField(id))
    }

    fn question_mut(&mut self, id: FieldId) -> Result<&mut QuestionField, FormError> {
        match self.block_mut(id)?.body_mut() {
            FieldBody::Question(question) => Ok(question),
            FieldBody::Info(_) => Err(FormError::NotAQuestion(id)),
        }
    }

    fn range_mut(
        &mut self,
        id: FieldId,
    ) -> Result<(&mut String, &mut String, &mut String), FormError> {
        let question = self.question_mut(id)?;
        let FieldOptions::Range { min, max, default } = &mut question.options else {
            return Err(FormError::NotARangeField(id));
        };
        Ok((min, max, default))
    }
}
