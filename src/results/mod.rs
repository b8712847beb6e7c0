//! Result record types for extracted SERP listings

mod types;

pub use types::*;
