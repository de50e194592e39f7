//! # Build-Status Client
//!
//! Network access to the remote build-status service.
//!
//! - [`Authenticator`] adds credentials to each request ([`BasicAuth`] or
//!   [`TokenAuth`])
//! - [`StatusClient`] performs the batch and single-commit lookups
//! - [`ClientError`] separates transport, decode and service errors

mod auth;
mod error;
mod stash;

pub use auth::{encode_credentials, Authenticator, BasicAuth, TokenAuth, AUTH_TOKEN_HEADER, AUTH_USER_HEADER};
pub use error::ClientError;
pub use stash::{decode, Decoded, StatusClient, CSRF_HEADER, CSRF_VALUE};
