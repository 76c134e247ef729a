//! Chanpaint Test Utils
//!
//! Shared helpers for unit tests. The `serenity` module builds valid Serenity structs by
//! deserializing JSON shaped like Discord's API responses, so conversion code can be
//! tested without a live connection.
//!
//! ```rust,ignore
//! use serenity::all::ChannelType;
//! use test_utils::serenity::create_test_channel;
//!
//! let category = create_test_channel(1, "🎨 Art", ChannelType::Category, None, 0);
//! let channel = create_test_channel(2, "general", ChannelType::Text, Some(1), 1);
//! ```

pub mod serenity;
