//! Shared plumbing for the dental chart inspection tools: errors and options.

pub mod error;
pub mod options;
