//! Toolfmt Core - Structured-value text formatting for language models.
//!
//! This crate renders arbitrary nested data (the result of an e-commerce
//! tool call) into a compact, indentation-based text block a language model
//! can read cheaply, or into plain JSON when the caller asks for it. Field
//! names are humanized along the way: `totalPriceUSD` becomes
//! `Total Price USD`.
//!
//! # Architecture
//!
//! The crate is pure - no I/O, no async, no shared state. Callers hand it a
//! [`Value`] tree (usually bridged from a `serde_json::Value` tool result)
//! and get a `String` back. Formatting is safe to run from any thread.
//!
//! # Modules
//!
//! - [`value`] - The `Scalar | Sequence | Mapping` union the formatter accepts
//! - [`humanize`] - Identifier-to-phrase conversion with acronym preservation
//! - [`format`] - The tabular/JSON renderer itself
//! - [`error`] - Formatting errors (depth guard)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod format;
pub mod humanize;
pub mod value;

pub use error::FormatError;
pub use format::{OutputMode, TextFormatter};
pub use humanize::{humanize, humanize_title};
pub use value::Value;
