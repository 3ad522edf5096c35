#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared across the qualis workspace.
//!
//! Today this is a single attribute, [`macro@qualis_error`], which turns a plain enum into
//! a `thiserror` error with context support. Every crate in the workspace declares its
//! error type through it so that errors read the same everywhere.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! qualis-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error_enum;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for domain error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and to
///   `Result<T, SourceError>` for every variant that wraps a source.
/// * `From<SourceError>` for variants with a `source` field (or a field marked
///   `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Variants use named fields; tuple and unit variants are rejected.
/// 3. A variant with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use qualis_derive::qualis_error;
/// use std::borrow::Cow;
///
/// #[qualis_error]
/// pub enum RecordError {
///     #[error("Malformed record{}: {source}", format_context(.context))]
///     Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, RecordError> {
///     serde_json::from_str(raw).context("Parsing qualifier record")
/// }
/// ```
#[proc_macro_attribute]
pub fn qualis_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error_enum::expand(input).into()
}
