//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Shared data model (line ranges, tree rows, validation issues)
//! - Path normalization utilities
//! - Text reading with an encoding cascade

pub mod model;
pub mod paths;
pub mod reader;
