//! Empirical Shannon entropy of text.
//!
//! This crate estimates the entropy of a character stream using 1-gram and
//! 2-gram frequency models, including:
//! - Text-mode character normalization (case folding, Cyrillic variants, punctuation)
//! - N-gram frequency tables and the entropy formula
//! - Synthetic uniform and skewed character stream generation
//! - File analysis and console reporting
//!
//! Low-level file helpers are kept internal; everything needed to run an
//! analysis is reachable from `model`, `report` and `config`.

/// Normalization, n-gram counting, entropy estimation and synthetic generation.
pub mod model;

/// File analysis and the printed report.
pub mod report;

/// Run description (which artifacts to generate and analyze).
pub mod config;

/// Library error type.
pub mod error;

/// I/O utilities (file loading, atomic writes).
///
/// Not exposed
pub(crate) mod io;

pub use error::ShannonError;
