use std::fmt;

use crate::error::Error;

/// The authorization scheme prefix expected on the `Authorization` header.
pub const BEARER_PREFIX: &str = "Bearer ";

/// A bearer token read from the `Authorization` header.
///
/// The token is redacted in `Debug` and `Display` output so it cannot end up
/// in logs by accident. Use [`expose`](Self::expose) to get the raw value.
///
/// # Examples
///
/// ```
/// use http_helper::read_auth_token;
///
/// let token = read_auth_token(Some("Bearer abc.def")).expect("well-formed header");
/// assert_eq!(token.expose(), "abc.def");
/// assert_eq!(format!("{token:?}"), "BearerToken([REDACTED])");
/// ```
// Do not derive Debug: the derived impl would print the token.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken {
    inner: String,
}

impl BearerToken {
    /// Returns the raw token.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Consumes the wrapper and returns the raw token.
    pub fn into_inner(self) -> String {
        self.inner
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken([REDACTED])")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// Reads a bearer token from an `Authorization` header value.
///
/// # Errors
///
/// - [`Error::AuthFailed`] if the header is absent or empty.
/// - [`Error::InvalidArgument`] if the header does not start with
///   `"Bearer "`.
///
/// Everything after the prefix is returned as-is, without trimming.
pub fn read_auth_token(header: Option<&str>) -> Result<BearerToken, Error> {
    let header = header.unwrap_or_default();
    if header.is_empty() {
        tracing::debug!("authorization header missing");
        return Err(Error::AuthFailed);
    }

    let Some(token) = header.strip_prefix(BEARER_PREFIX) else {
        tracing::debug!("authorization header is not a bearer token");
        return Err(Error::InvalidArgument);
    };

    Ok(BearerToken {
        inner: token.to_string(),
    })
}
