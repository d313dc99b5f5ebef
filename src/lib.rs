//! HideField Directive Compiler
//!
//! Compiles declarative per-field visibility annotations (`show` / `hide`
//! over the contexts query, read, create, update) into the minimal
//! `@HideField` exclusion directive understood by the downstream
//! field-hiding mechanism.
//!
//! # Example
//!
//! ```
//! use hidefield::{annotate, Datamodel};
//! use serde_json::json;
//!
//! let mut datamodel: Datamodel = serde_json::from_value(json!({
//!     "models": [
//!         { "name": "Post", "fields": [] },
//!         {
//!             "name": "User",
//!             "fields": [
//!                 { "name": "posts", "type": "Post" },
//!                 {
//!                     "name": "password",
//!                     "type": "String",
//!                     "attributes": [{ "name": "hide" }]
//!                 },
//!                 { "name": "email", "type": "String" }
//!             ]
//!         }
//!     ]
//! })).unwrap();
//!
//! let report = annotate(&mut datamodel);
//!
//! // Relations are hidden everywhere by default; hide() is the shortcut
//! // for the same directive; plain scalars stay untouched.
//! let fields = &datamodel.models[1].fields;
//! assert_eq!(fields[0].comments, ["/// @HideField({ input: true, output: true })"]);
//! assert_eq!(fields[1].comments, ["/// @HideField({ input: true, output: true })"]);
//! assert!(fields[2].comments.is_empty());
//! assert_eq!(report.relations_hidden, 1);
//! ```
//!
//! # Directive Shapes
//!
//! | Directive | Rendered as |
//! |-----------|-------------|
//! | `None` | no comment emitted |
//! | `Simple { input, output }` | `/// @HideField({ input: <b>, output: <b> })` |
//! | `Pattern` (one fragment) | `/// @HideField({ match: '*(*Create*Input)' })` |
//! | `Pattern` (alternation) | `/// @HideField({ match: '@(a\|b\|...)' })` |
//!
//! # Annotation Forms
//!
//! Inclusive, naming the contexts where the field stays visible:
//! `show(read: true)` hides the field from filters and both input forms.
//!
//! Exclusive, naming the contexts where the field is hidden:
//! `hide(query: true, create: true)` — and `hide()` with no arguments is
//! the "hidden everywhere" shortcut.
//!
//! When both `query` and `read` are named, query subsumes read.

mod compile;
mod error;
mod format;
mod generate;
mod schema;
mod types;

pub use compile::{compile_hide, compile_show, parse_contexts, ParsedContexts};
pub use error::SchemaError;
pub use format::{render, HIDE_FIELD_MARKER};
pub use generate::{annotate, Report, Warning, W_UNKNOWN_CONTEXT, W_VACUOUS_HIDE};
pub use schema::{
    load_datamodel, load_datamodel_str, Arg, Attribute, Datamodel, EnumDecl, Field, Literal, Model,
};
pub use types::{AttributeKind, Context, ContextSet, Exclusion, VALID_CONTEXTS};
