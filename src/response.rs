//! JSON response envelope.
//!
//! Every response has the same shape:
//!
//! ```text
//! {"success": true,  "result": ...}
//! {"success": false, "error": {"code": 1, "message": "..."}}
//! ```
//!
//! `result` and `error` are omitted when absent and `code` is omitted when
//! zero. Successful responses are written with status 200. Error responses
//! carry their own status, or 500 when none was set.

use serde::Serialize;

use crate::error::{BindError, Error};
use crate::writer::ResponseWriter;

/// Error code written when the envelope itself cannot be serialized.
pub const FALLBACK_ERROR_CODE: i64 = -255;

/// Body written when the envelope itself cannot be serialized.
pub const FALLBACK_BODY: &str = r#"{"error":{"code":-255, "message": "cannot marshal response"}}"#;

const CONTENT_TYPE: &str = "application/json";
const STATUS_OK: u16 = 200;
const STATUS_BAD_REQUEST: u16 = 400;
const STATUS_FORBIDDEN: u16 = 403;
const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// The error part of an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Application error code. Omitted from the JSON when zero.
    #[serde(skip_serializing_if = "is_zero")]
    pub code: i64,
    /// Human-readable message.
    pub message: String,
    // HTTP status paired with this error, 0 for "not set".
    #[serde(skip)]
    status: u16,
}

impl ErrorBody {
    /// Returns the HTTP status the error is written with.
    pub fn status(&self) -> u16 {
        if self.status == 0 {
            STATUS_INTERNAL_SERVER_ERROR
        } else {
            self.status
        }
    }
}

fn is_zero(code: &i64) -> bool {
    *code == 0
}

/// A response envelope.
///
/// # Examples
///
/// ```
/// use http_helper::{RecordedResponse, Response};
///
/// let mut rec = RecordedResponse::new();
/// Response::error(7, 404, "no such user")
///     .write_to(&mut rec)
///     .expect("serializable");
///
/// assert_eq!(rec.status(), Some(404));
/// assert_eq!(
///     rec.body(),
///     br#"{"success":false,"error":{"code":7,"message":"no such user"}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response<T = ()> {
    /// Whether the request succeeded.
    pub success: bool,
    /// The result payload of a successful request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// The error of a failed request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl Response<()> {
    /// Creates an error envelope.
    ///
    /// A `status` of 0 means "not set"; the response is then written as 500.
    pub fn error(code: i64, status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(ErrorBody {
                code,
                message: message.into(),
                status,
            }),
        }
    }

    /// Creates a success envelope without a result.
    pub fn success() -> Self {
        Self {
            success: true,
            result: None,
            error: None,
        }
    }
}

impl<T: Serialize> Response<T> {
    /// Creates a success envelope carrying `result`.
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    /// Returns the HTTP status this envelope is written with.
    pub fn status(&self) -> u16 {
        self.error.as_ref().map_or(STATUS_OK, ErrorBody::status)
    }

    /// Serializes the envelope and writes it to `w`.
    ///
    /// Sets `Content-Type: application/json`, then the status, then the
    /// body.
    ///
    /// # Errors
    ///
    /// If serialization fails, writes status 500 with [`FALLBACK_BODY`] and
    /// returns the serialization error.
    pub fn write_to<W>(&self, w: &mut W) -> Result<(), Error>
    where
        W: ResponseWriter + ?Sized,
    {
        w.set_header("Content-Type", CONTENT_TYPE);

        let data = match serde_json::to_vec(self) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(error = %err, "cannot marshal response");
                w.write_status(STATUS_INTERNAL_SERVER_ERROR);
                w.write_body(FALLBACK_BODY.as_bytes());
                return Err(err.into());
            }
        };

        w.write_status(self.status());
        w.write_body(&data);
        Ok(())
    }
}

/// Writes a success envelope carrying `result`.
///
/// `result` is always present in the output; `write_ok(w, ())` writes
/// `"result":null`. Use `Response::success().write_to(w)` to omit it.
pub fn write_ok<W, T>(w: &mut W, result: T) -> Result<(), Error>
where
    W: ResponseWriter + ?Sized,
    T: Serialize,
{
    Response::ok(result).write_to(w)
}

/// Writes an error envelope.
pub fn write_error<W>(w: &mut W, code: i64, status: u16, message: &str) -> Result<(), Error>
where
    W: ResponseWriter + ?Sized,
{
    Response::error(code, status, message).write_to(w)
}

/// Writes the response for a failed [`read_auth_token`](crate::read_auth_token).
///
/// | error | code | status |
/// |-------|------|--------|
/// | [`Error::InvalidArgument`] | 0 | 400 |
/// | [`Error::AuthFailed`] | 1 | 403 |
/// | anything else | -1 | 500 |
pub fn write_token_error<W>(w: &mut W, err: &Error) -> Result<(), Error>
where
    W: ResponseWriter + ?Sized,
{
    let (code, status) = match err {
        Error::InvalidArgument => (0, STATUS_BAD_REQUEST),
        Error::AuthFailed => (1, STATUS_FORBIDDEN),
        _ => (-1, 0),
    };
    write_error(w, code, status, "invalid token")
}

/// Writes the response for a failed [`bind`](crate::bind).
///
/// Coercion failures are the client's fault and are written as 400 with
/// code 2 and the error text. An invalid destination is a server bug and is
/// written as 500 with code -1.
pub fn write_bind_error<W>(w: &mut W, err: &BindError) -> Result<(), Error>
where
    W: ResponseWriter + ?Sized,
{
    match err {
        BindError::Coercion(_) => write_error(w, 2, STATUS_BAD_REQUEST, &err.to_string()),
        BindError::InvalidArgument => write_error(w, -1, 0, "invalid argument"),
    }
}
