//! Domain models for bulk channel renames.
//!
//! Serenity's channel structs are converted into `ChannelTarget`s at the command boundary,
//! so the batch logic only ever sees plain data.

pub mod batch;
pub mod channel;
