use std::collections::BTreeMap;

/// The response half of an HTTP exchange.
///
/// Framework integrations implement this for their response type. The
/// envelope writers in [`response`](crate::response) call `set_header`
/// first, then `write_status` once, then `write_body`.
pub trait ResponseWriter {
    /// Sets a response header, replacing any previous value.
    fn set_header(&mut self, name: &str, value: &str);

    /// Sets the HTTP status code.
    fn write_status(&mut self, status: u16);

    /// Appends bytes to the response body.
    fn write_body(&mut self, body: &[u8]);
}

/// An in-memory response recorder.
///
/// Useful in tests, and for frameworks that assemble their native response
/// after the handler has returned.
///
/// # Examples
///
/// ```
/// use http_helper::{RecordedResponse, write_ok};
///
/// let mut rec = RecordedResponse::new();
/// write_ok(&mut rec, "pong").expect("serializable");
///
/// assert_eq!(rec.status(), Some(200));
/// assert_eq!(rec.header("content-type"), Some("application/json"));
/// assert_eq!(rec.body(), br#"{"success":true,"result":"pong"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedResponse {
    status: Option<u16>,
    // Lowercased names.
    headers: BTreeMap<String, String>,
    body: Vec<u8>,
}

impl RecordedResponse {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded status, if one was written.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns a header value, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns the recorded body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Parses the recorded body as JSON.
    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

impl ResponseWriter for RecordedResponse {
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    fn write_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn write_body(&mut self, body: &[u8]) {
        self.body.extend_from_slice(body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_recorder_is_empty() {
        let rec = RecordedResponse::new();
        assert_eq!(rec.status(), None);
        assert!(rec.body().is_empty());
        assert_eq!(rec.header("content-type"), None);
    }

    #[test]
    fn headers_are_case_insensitive_and_replaced() {
        let mut rec = RecordedResponse::new();
        rec.set_header("Content-Type", "text/plain");
        rec.set_header("content-type", "application/json");
        assert_eq!(rec.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn body_writes_append() {
        let mut rec = RecordedResponse::new();
        rec.write_body(b"{\"a\":");
        rec.write_body(b"1}");
        assert_eq!(rec.body_json().unwrap()["a"], 1);
    }
}
