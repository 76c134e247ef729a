//! Per-channel rename failures.
//!
//! A `RenameError` never escapes the batch run. The batch processor turns each one into a
//! `ChannelFailure` that is reported back to the invoking user and then moves on.

use serenity::all::ModelError;
use thiserror::Error;

/// HTTP status Discord returns when the bot lacks rights on a channel.
const FORBIDDEN: u16 = 403;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// The bot's credentials don't allow modifying this channel.
    #[error("Missing permissions")]
    PermissionDenied,

    /// Any other failure returned by Discord, message kept verbatim.
    #[error("{0}")]
    RequestFailed(String),
}

/// Classifies a serenity error from a channel edit.
///
/// 403 responses and serenity's own client-side permission check map to
/// `PermissionDenied`. Everything else is a `RequestFailed` carrying the error text.
impl From<serenity::Error> for RenameError {
    fn from(err: serenity::Error) -> Self {
        match &err {
            serenity::Error::Http(http_err)
                if http_err.status_code().map(|status| status.as_u16()) == Some(FORBIDDEN) =>
            {
                RenameError::PermissionDenied
            }
            serenity::Error::Model(ModelError::InvalidPermissions { .. }) => {
                RenameError::PermissionDenied
            }
            _ => RenameError::RequestFailed(err.to_string()),
        }
    }
}
