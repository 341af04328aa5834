//! Integration tests for the request to response flow.
//!
//! These tests drive a small handler the way a framework integration would:
//! build a `Request`, bind variables, read the token, decode the body and
//! write an envelope.

use http_helper::{
    Error, RecordedResponse, Request, impl_bind_vars, write_bind_error, write_error, write_ok,
    write_token_error,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default)]
struct ProjectPath {
    project_id: i64,
}

impl_bind_vars!(ProjectPath {
    project_id: "project_id",
});

#[derive(Debug, Default)]
struct ProjectQuery {
    labels: Vec<String>,
    dry_run: bool,
}

impl_bind_vars!(ProjectQuery {
    labels: "labels",
    dry_run: "dry_run",
});

#[derive(Debug, Deserialize)]
struct RenameBody {
    name: String,
}

#[derive(Debug, Serialize)]
struct Renamed {
    id: i64,
    name: String,
    labels: Vec<String>,
    dry_run: bool,
}

/// Simulates a `PUT /projects/{project_id}?labels=..&dry_run=..` handler.
fn rename_project(req: &Request, rec: &mut RecordedResponse) -> Result<(), Error> {
    let token = match req.auth_token() {
        Ok(token) => token,
        Err(err) => return write_token_error(rec, &err),
    };
    if token.expose() != "secret" {
        return write_error(rec, 1, 403, "invalid token");
    }

    let mut path = ProjectPath::default();
    let mut query = ProjectQuery::default();
    if let Err(err) = req
        .bind_path(&mut path)
        .and_then(|()| req.bind_query(&mut query))
    {
        return write_bind_error(rec, &err);
    }

    let body: RenameBody = match req.json() {
        Ok(body) => body,
        Err(_) => return write_error(rec, 3, 400, "invalid body"),
    };

    write_ok(
        rec,
        Renamed {
            id: path.project_id,
            name: body.name,
            labels: query.labels,
            dry_run: query.dry_run,
        },
    )
}

fn authed_request() -> Request {
    let mut req = Request::new();
    req.add_header("Authorization", "Bearer secret");
    req.add_path_var("project_id", "77");
    req.add_query_var("labels", "infra, urgent");
    req.add_query_var("dry_run", "1");
    req.set_body(r#"{"name":"apollo"}"#);
    req
}

#[test]
fn successful_flow() {
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .finish(),
    );

    let mut rec = RecordedResponse::new();
    rename_project(&authed_request(), &mut rec).unwrap();

    assert_eq!(rec.status(), Some(200));
    assert_eq!(rec.header("content-type"), Some("application/json"));
    assert_eq!(
        rec.body_json().unwrap(),
        json!({
            "success": true,
            "result": {
                "id": 77,
                "name": "apollo",
                "labels": ["infra", "urgent"],
                "dry_run": true,
            },
        })
    );
}

#[test]
fn missing_token_is_forbidden() {
    let mut req = authed_request();
    req.add_header("authorization", "");

    let mut rec = RecordedResponse::new();
    rename_project(&req, &mut rec).unwrap();

    assert_eq!(rec.status(), Some(403));
    assert_eq!(
        rec.body_json().unwrap(),
        json!({"success": false, "error": {"code": 1, "message": "invalid token"}})
    );
}

#[test]
fn malformed_token_is_bad_request() {
    let mut req = authed_request();
    req.add_header("Authorization", "Basic c2VjcmV0");

    let mut rec = RecordedResponse::new();
    rename_project(&req, &mut rec).unwrap();

    assert_eq!(rec.status(), Some(400));
    assert_eq!(
        rec.body_json().unwrap(),
        json!({"success": false, "error": {"message": "invalid token"}})
    );
}

#[test]
fn bad_path_variable_is_bad_request() {
    let mut req = authed_request();
    req.add_path_var("project_id", "seventy-seven");

    let mut rec = RecordedResponse::new();
    rename_project(&req, &mut rec).unwrap();

    assert_eq!(rec.status(), Some(400));
    let body = rec.body_json().unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], 2);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("seventy-seven"));
}

#[test]
fn bad_query_variable_is_bad_request() {
    let mut req = authed_request();
    req.add_query_var("dry_run", "maybe");

    let mut rec = RecordedResponse::new();
    rename_project(&req, &mut rec).unwrap();

    assert_eq!(rec.status(), Some(400));
    assert_eq!(rec.body_json().unwrap()["error"]["code"], 2);
}

#[test]
fn malformed_body_is_bad_request() {
    let mut req = authed_request();
    req.set_body("{not json");

    let mut rec = RecordedResponse::new();
    rename_project(&req, &mut rec).unwrap();

    assert_eq!(rec.status(), Some(400));
    assert_eq!(rec.body_json().unwrap()["error"]["code"], 3);
}

#[test]
fn token_is_never_logged_in_debug_output() {
    let req = authed_request();
    let token = req.auth_token().unwrap();
    assert!(!format!("{token:?}").contains("secret"));
}
