//! CLI functionality for the coltype tool
//!
//! This module contains all CLI-related functionality including:
//! - Declaration description
//! - Literal parsing
//! - Type listing
//! - Output formatting

pub mod describe;
pub mod output;
pub mod parse;
pub mod types;
