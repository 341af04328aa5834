//! Route variable binding demonstration.
//!
//! This example walks through a typical handler:
//! 1. Read the bearer token
//! 2. Bind path and query variables into a typed record
//! 3. Write a JSON envelope
//!
//! Run with: `cargo run --example route_vars`

use http_helper::{
    Error, RecordedResponse, Request, impl_bind_vars, write_bind_error, write_ok,
    write_token_error,
};

#[derive(Debug, Default)]
struct InvoicePath {
    customer: String,
    invoice_id: i64,
    amounts: Vec<f64>,
    paid: bool,
}

impl_bind_vars!(InvoicePath {
    customer: "customer",
    invoice_id: "invoice_id",
    amounts: "amounts",
    paid: "paid",
});

fn handle(req: &Request) -> Result<RecordedResponse, Error> {
    let mut rec = RecordedResponse::new();

    if let Err(err) = req.auth_token() {
        write_token_error(&mut rec, &err)?;
        return Ok(rec);
    }

    let mut path = InvoicePath::default();
    if let Err(err) = req
        .bind_path(&mut path)
        .and_then(|()| req.bind_query(&mut path))
    {
        write_bind_error(&mut rec, &err)?;
        return Ok(rec);
    }

    let total: f64 = path.amounts.iter().sum();
    write_ok(
        &mut rec,
        serde_json::json!({
            "customer": path.customer,
            "invoice": path.invoice_id,
            "total": total,
            "paid": path.paid,
        }),
    )?;
    Ok(rec)
}

fn print(label: &str, rec: &RecordedResponse) {
    println!(
        "{label}: {} {}",
        rec.status().unwrap_or_default(),
        String::from_utf8_lossy(rec.body())
    );
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut req = Request::new();
    req.add_header("Authorization", "Bearer demo-token");
    req.add_path_var("customer", "acme");
    req.add_path_var("invoice_id", "1042");
    req.add_query_var("amounts", "19.99, 5.01, 75");
    req.add_query_var("paid", "true");
    print("valid", &handle(&req)?);

    req.add_path_var("invoice_id", "10x42");
    print("bad invoice id", &handle(&req)?);

    let mut anonymous = Request::new();
    anonymous.add_path_var("invoice_id", "1");
    print("no token", &handle(&anonymous)?);

    Ok(())
}
