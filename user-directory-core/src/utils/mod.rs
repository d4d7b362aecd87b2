//! Utility modules

pub mod body_preview;
