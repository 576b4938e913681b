//! Core types for the formwright crate.
//!
//! This crate provides the foundational types for building forms:
//! - `FieldBlock` and `FieldBody` - One editable question/info unit and its tagged state
//! - `FieldOptions` and `Choice` - Kind-specific option state
//! - `FieldKind` - The kind-selector tag and its fixed index mapping
//! - `SchemaField` - The serialized JSON record sent to the server
//! - `FormError` - Errors for controller misuse

mod field_id;
pub use field_id::FieldId;

mod field_kind;
pub use field_kind::{FieldKind, SelectorKind};

mod block;
pub use block::{Choice, FieldBlock, FieldBody, FieldOptions, QuestionField};

mod schema;
pub use schema::SchemaField;

mod error;
pub use error::FormError;
