//! Helpers for HTTP request and response handling.
//!
//! This crate sits between a web framework and handler code. It provides:
//! - **Variable binding**: populate typed records from route/query variables
//! - **JSON bodies**: decode a request body into one or several targets
//! - **Bearer tokens**: read and redact the `Authorization` token
//! - **Response envelopes**: write `{success, result, error}` JSON with a
//!   matching HTTP status
//!
//! # Core Types
//!
//! - [`BindVars`]: A record whose fields can be bound from a variable map
//! - [`bind`]: Coerces raw strings into the record's typed fields
//! - [`Request`]: Framework-agnostic view of an incoming request
//! - [`Response`]: The JSON envelope written back
//! - [`ResponseWriter`]: The response half of the exchange
//!
//! # Examples
//!
//! ```
//! use http_helper::{RecordedResponse, Request, impl_bind_vars, write_bind_error, write_ok};
//!
//! #[derive(Debug, Default)]
//! struct OrderPath {
//!     order_id: i64,
//!     lines: Vec<i32>,
//! }
//!
//! impl_bind_vars!(OrderPath {
//!     order_id: "order_id",
//!     lines: "lines",
//! });
//!
//! let mut req = Request::new();
//! req.add_path_var("order_id", "1001");
//! req.add_query_var("lines", "1, 2, 3");
//!
//! let mut path = OrderPath::default();
//! let mut rec = RecordedResponse::new();
//!
//! match req.bind_path(&mut path).and_then(|()| req.bind_query(&mut path)) {
//!     Ok(()) => write_ok(&mut rec, path.lines.len()).expect("serializable"),
//!     Err(err) => write_bind_error(&mut rec, &err).expect("serializable"),
//! }
//!
//! assert_eq!(rec.status(), Some(200));
//! assert_eq!(rec.body(), br#"{"success":true,"result":3}"#);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod body;
mod error;
mod request;
pub mod response;
mod token;
mod vars;
mod writer;

pub use body::{JsonTarget, decode_json, decode_json_into, decode_json_multi};
pub use error::{BindError, CoercionError, Error};
pub use request::Request;
pub use response::{
    ErrorBody, FALLBACK_BODY, FALLBACK_ERROR_CODE, Response, write_bind_error, write_error,
    write_ok, write_token_error,
};
pub use token::{BEARER_PREFIX, BearerToken, read_auth_token};
pub use vars::{AsSlot, BindVars, Slot, VAR_TAG, VarField, VarKind, bind, bind_dyn};
pub use writer::{RecordedResponse, ResponseWriter};
