//! Core domain model for atelier.
//!
//! This crate defines the [`Artist`](model::Artist) record, the dataset
//! loader that turns a comma-delimited artist file into an in-memory
//! [`Catalog`](catalog::Catalog), and the pure query evaluator that answers
//! lookups over an already-loaded slice of artists.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod query;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{ActiveYears, Artist};
pub use query::{evaluate, evaluate_raw, CaseRules, Query, QueryKind, QueryOutcome};
