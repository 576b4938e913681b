//! # formwright
//!
//! Build form schemas from an ordered sequence of question fields.
//!
//! A `FormBuilder` maintains an ordered list of field blocks - questions of
//! kind text, single choice, multi choice, or range, plus optional
//! informational notes - and snapshots them into a JSON-serializable schema
//! on demand. Submission of the schema over HTTP lives in the
//! `formwright-submit` crate.
//!
//! ## Usage
//!
//! ```rust
//! use formwright::{FieldKind, FormBuilder};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut builder = FormBuilder::new();
//!
//! let name = builder.add_question_field();
//! builder.set_name(name, "What is your name?")?;
//!
//! let color = builder.add_question_field();
//! builder.set_name(color, "Favorite color?")?;
//! builder.set_field_kind(color, FieldKind::SingleChoice)?;
//! builder.add_choice(color)?;
//! builder.set_choice_label(color, 0, "Red")?;
//! builder.add_choice(color)?;
//! builder.set_choice_label(color, 1, "Blue")?;
//!
//! let schema = builder.build_schema();
//! assert_eq!(schema.len(), 2);
//! # Ok(())
//! # }
//! ```

// Re-export all types from formwright-types
pub use formwright_types::*;

mod builder;
pub use builder::{BuilderConfig, FormBuilder, RangeLabel};
