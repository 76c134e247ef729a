//! Business logic for bulk channel renames.
//!
//! The service layer knows nothing about gateway events or interactions. Discord access
//! comes in through the `ChannelRenamer` and `BatchReporter` traits so the batch logic can
//! be exercised with in-memory fakes.

pub mod channel;
