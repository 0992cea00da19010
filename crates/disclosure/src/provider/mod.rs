//! Disclosure provider abstractions and the DART implementation.
//!
//! This module contains:
//! - The `DisclosureProvider` trait the analysis pipeline fetches raw records through
//! - The `CorpCodeSource` trait the cached company-code resolver loads its index from
//! - `DartProvider`, the Open DART implementation of both

mod traits;

pub mod dart;

pub use dart::{DartConfig, DartProvider};
pub use traits::{CorpCodeSource, DisclosureProvider};
