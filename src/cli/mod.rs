//! Terminal interface

pub mod analyze;
pub mod output;
pub mod play;
