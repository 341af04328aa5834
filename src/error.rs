use std::io;

use thiserror::Error;

use crate::vars::VarKind;

/// Errors returned by the request/response helpers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller passed something the helper cannot work with, or a
    /// header was present but malformed.
    #[error("invalid argument")]
    InvalidArgument,

    /// The session backing a token is no longer valid.
    #[error("session expired, please refresh it")]
    SessionExpired,

    /// No credentials were supplied.
    #[error("authentication failed")]
    AuthFailed,

    /// The request carries no body at all.
    #[error("unexpected EOF: request has no body")]
    MissingBody,

    /// Binding route or query variables failed.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// The body could not be decoded, or a response could not be encoded.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the body failed.
    #[error("reading body: {0}")]
    Io(#[from] io::Error),
}

/// Error returned by [`bind`](crate::bind) and [`bind_dyn`](crate::bind_dyn).
///
/// Binding stops at the first failure. Fields bound before the failing one
/// keep their new values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// The destination is missing or is not record-shaped.
    #[error("invalid argument: destination must be a mutable record")]
    InvalidArgument,

    /// A supplied value does not parse as the field's declared kind.
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

impl BindError {
    /// Returns the coercion details, if this is a coercion failure.
    pub fn coercion(&self) -> Option<&CoercionError> {
        match self {
            Self::Coercion(err) => Some(err),
            Self::InvalidArgument => None,
        }
    }
}

/// A raw variable that could not be converted to its field's kind.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use http_helper::{BindError, VarKind, bind, impl_bind_vars};
///
/// #[derive(Default)]
/// struct Page {
///     number: i32,
/// }
/// impl_bind_vars!(Page { number: "page" });
///
/// let vars = HashMap::from([("page".to_string(), "12x".to_string())]);
/// let err = bind(&vars, &mut Page::default()).unwrap_err();
///
/// let BindError::Coercion(coercion) = err else { panic!("expected coercion error") };
/// assert_eq!(coercion.value, "12x");
/// assert_eq!(coercion.kind, VarKind::Int);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot bind {key:?} to field `{field}`: {value:?} is not a valid {kind}: {reason}")]
pub struct CoercionError {
    /// The destination field identifier.
    pub field: &'static str,
    /// The variable key the field is tagged with.
    pub key: &'static str,
    /// The raw string that failed to parse. For sequences this is the
    /// offending element after trimming.
    pub value: String,
    /// The kind the value was being converted to.
    pub kind: VarKind,
    /// The parser's own message.
    pub reason: String,
}
