//! Framework-agnostic request boundary.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::body::{self, JsonTarget};
use crate::error::{BindError, Error};
use crate::token::{self, BearerToken};
use crate::vars::{self, BindVars};

/// The parts of an HTTP request the helpers work with.
///
/// `Request` holds plain owned data so it does not depend on any web
/// framework. Integrations build one from their native request type (path
/// variables from the router, query variables from the URL, headers and
/// the body) and hand it to the handler.
///
/// # Examples
///
/// ```
/// use http_helper::{Request, impl_bind_vars};
///
/// #[derive(Default)]
/// struct UserPath {
///     id: i64,
/// }
/// impl_bind_vars!(UserPath { id: "id" });
///
/// let mut req = Request::new();
/// req.add_path_var("id", "42");
/// req.add_header("Authorization", "Bearer t0k3n");
///
/// let mut path = UserPath::default();
/// req.bind_path(&mut path).expect("id is an integer");
/// assert_eq!(path.id, 42);
///
/// let token = req.auth_token().expect("bearer header present");
/// assert_eq!(token.expose(), "t0k3n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Request {
    // Lowercased names.
    headers: HashMap<String, String>,
    path_vars: HashMap<String, String>,
    query_vars: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Creates an empty request with no body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing any previous value for the same name.
    ///
    /// Names are case-insensitive.
    pub fn add_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Adds a path variable extracted by the router.
    pub fn add_path_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.path_vars.insert(key.into(), value.into());
    }

    /// Adds a query string variable.
    pub fn add_query_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query_vars.insert(key.into(), value.into());
    }

    /// Sets the request body.
    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = Some(body.into());
    }

    /// Returns a header value, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns the path variables.
    pub fn path_vars(&self) -> &HashMap<String, String> {
        &self.path_vars
    }

    /// Returns the query variables.
    pub fn query_vars(&self) -> &HashMap<String, String> {
        &self.query_vars
    }

    /// Returns the body, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Binds the path variables into `dst`. See [`bind`](crate::bind).
    pub fn bind_path<T: BindVars + ?Sized>(&self, dst: &mut T) -> Result<(), BindError> {
        vars::bind(&self.path_vars, dst)
    }

    /// Binds the query variables into `dst`. See [`bind`](crate::bind).
    pub fn bind_query<T: BindVars + ?Sized>(&self, dst: &mut T) -> Result<(), BindError> {
        vars::bind(&self.query_vars, dst)
    }

    /// Reads the bearer token from the `Authorization` header.
    /// See [`read_auth_token`](crate::read_auth_token).
    pub fn auth_token(&self) -> Result<BearerToken, Error> {
        token::read_auth_token(self.header("authorization"))
    }

    /// Decodes the body as JSON. See [`decode_json`](crate::decode_json).
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        body::decode_json(self.body())
    }

    /// Decodes the body into several targets.
    /// See [`decode_json_multi`](crate::decode_json_multi).
    pub fn json_multi(&self, dsts: &mut [&mut dyn JsonTarget]) -> Result<(), Error> {
        body::decode_json_multi(self.body(), dsts)
    }
}
