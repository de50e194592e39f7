//! Request authentication schemes
//!
//! Authenticators only add headers. Bad or empty credentials are rejected
//! by the server, and that failure comes back through the client.

use std::fmt;

use base64::{engine::general_purpose, Engine};
use reqwest::blocking::RequestBuilder;
use reqwest::header::AUTHORIZATION;

/// Header carrying the user name for [`TokenAuth`]
pub const AUTH_USER_HEADER: &str = "X-Auth-User";

/// Header carrying the token for [`TokenAuth`]
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Adds credentials to an outgoing request
pub trait Authenticator: fmt::Debug + Send + Sync {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder;
}

/// HTTP basic authentication with a pre-encoded `user:password` token
#[derive(Clone)]
pub struct BasicAuth {
    user: String,
    credentials: String,
}

impl BasicAuth {
    /// Encodes `user:password` once. The raw password is not kept.
    pub fn new(user: &str, password: &str) -> Self {
        let credentials = encode_credentials(user, password);
        Self::from_credentials(user, credentials)
    }

    /// Uses an already encoded token, as stored in git config
    pub fn from_credentials(user: impl Into<String>, credentials: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            credentials: credentials.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// The base64 `user:password` token
    pub fn credentials(&self) -> &str {
        &self.credentials
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("user", &self.user)
            .field("credentials", &"********")
            .finish()
    }
}

impl Authenticator for BasicAuth {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Basic {}", self.credentials))
    }
}

/// User and token sent as two separate headers
#[derive(Clone)]
pub struct TokenAuth {
    user: String,
    token: String,
}

impl TokenAuth {
    pub fn new(user: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            token: token.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}

impl fmt::Debug for TokenAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenAuth")
            .field("user", &self.user)
            .field("token", &"********")
            .finish()
    }
}

impl Authenticator for TokenAuth {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTH_USER_HEADER, &self.user)
            .header(AUTH_TOKEN_HEADER, &self.token)
    }
}

/// Base64 of `user:password`, the form persisted in configuration
pub fn encode_credentials(user: &str, password: &str) -> String {
    general_purpose::STANDARD.encode(format!("{}:{}", user, password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::blocking::Client;

    fn built_headers(auth: &dyn Authenticator) -> reqwest::header::HeaderMap {
        let request = Client::new().get("http://localhost/");
        auth.authenticate(request).build().unwrap().headers().clone()
    }

    #[test]
    fn encode_user_and_password() {
        assert_eq!(encode_credentials("alice", "secret"), "YWxpY2U6c2VjcmV0");
    }

    #[test]
    fn basic_auth_from_password_encodes_once() {
        let auth = BasicAuth::new("alice", "secret");
        assert_eq!(auth.user(), "alice");
        assert_eq!(auth.credentials(), "YWxpY2U6c2VjcmV0");
    }

    #[test]
    fn basic_auth_from_credentials_is_not_reencoded() {
        let auth = BasicAuth::from_credentials("alice", "YWxpY2U6c2VjcmV0");
        assert_eq!(auth.credentials(), "YWxpY2U6c2VjcmV0");
    }

    #[test]
    fn basic_auth_sets_authorization_header() {
        let headers = built_headers(&BasicAuth::new("alice", "secret"));
        assert_eq!(headers[AUTHORIZATION], "Basic YWxpY2U6c2VjcmV0");
    }

    #[test]
    fn empty_basic_auth_still_sets_header() {
        let headers = built_headers(&BasicAuth::from_credentials("", ""));
        assert_eq!(headers[AUTHORIZATION], "Basic ");
    }

    #[test]
    fn token_auth_sets_both_headers() {
        let headers = built_headers(&TokenAuth::new("bob", "t0k3n"));
        assert_eq!(headers[AUTH_USER_HEADER], "bob");
        assert_eq!(headers[AUTH_TOKEN_HEADER], "t0k3n");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn debug_hides_secrets() {
        let basic = format!("{:?}", BasicAuth::new("alice", "secret"));
        let token = format!("{:?}", TokenAuth::new("bob", "t0k3n"));
        assert!(!basic.contains("YWxpY2U6c2VjcmV0"));
        assert!(!token.contains("t0k3n"));
    }
}
