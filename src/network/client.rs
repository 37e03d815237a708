//! HTTP client wrapper - executes one validated request and captures the
//! exchange record

use std::collections::BTreeMap;
use std::time::Instant;

use crate::messages::NetworkResponse;
use crate::models::{Exchange, HttpMethod, RequestPlan};

/// Build a reqwest request from a validated plan
fn build_request(client: &reqwest::Client, plan: &RequestPlan) -> reqwest::RequestBuilder {
    let mut req_builder = match plan.method {
        HttpMethod::GET => client.get(&plan.url),
        HttpMethod::POST => client.post(&plan.url),
        HttpMethod::PUT => client.put(&plan.url),
        HttpMethod::PATCH => client.patch(&plan.url),
        HttpMethod::DELETE => client.delete(&plan.url),
    };

    for (name, value) in &plan.headers {
        req_builder = req_builder.header(name, value);
    }

    if let Some(body) = &plan.body {
        req_builder = req_builder.body(body.clone());
    }

    req_builder
}

/// Execute a request and return the full exchange.
///
/// Elapsed time runs from just before dispatch to just after the body is
/// fully read, so it covers the complete transfer.
pub async fn execute_plan(
    client: &reqwest::Client,
    plan: RequestPlan,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let req_builder = build_request(client, &plan);

    match req_builder.send().await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            let headers = collect_headers(resp.headers());
            match resp.text().await {
                Ok(body) => NetworkResponse::Completed {
                    id: request_id,
                    exchange: Exchange {
                        status,
                        headers,
                        body,
                        elapsed_ms: start.elapsed().as_millis() as u64,
                    },
                },
                Err(e) => NetworkResponse::Failed {
                    id: request_id,
                    message: format!("Error reading body: {}", e),
                    elapsed_ms: start.elapsed().as_millis() as u64,
                },
            }
        }
        Err(e) => {
            let msg = if e.is_timeout() {
                "Request timed out (30s)".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            NetworkResponse::Failed {
                id: request_id,
                message: msg,
                elapsed_ms: start.elapsed().as_millis() as u64,
            }
        }
    }
}

/// Response headers as a sorted name/value map; non-UTF-8 values are
/// replaced lossily rather than dropped
fn collect_headers(headers: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
