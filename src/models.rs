use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn next(&self) -> HttpMethod {
        match self {
            HttpMethod::GET => HttpMethod::POST,
            HttpMethod::POST => HttpMethod::PUT,
            HttpMethod::PUT => HttpMethod::PATCH,
            HttpMethod::PATCH => HttpMethod::DELETE,
            HttpMethod::DELETE => HttpMethod::GET,
        }
    }

    /// Only POST/PUT/PATCH carry a request body
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT | HttpMethod::PATCH)
    }
}

/// The HTTP request form as the user edits it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestForm {
    pub method: HttpMethod,
    pub url: String,
    /// Request headers, edited as a JSON object of string values
    pub headers_text: String,
    pub body: String,
}

impl Default for RequestForm {
    fn default() -> Self {
        use crate::constants::{DEFAULT_HEADERS_TEXT, DEFAULT_HTTP_URL};
        RequestForm {
            method: HttpMethod::GET,
            url: String::from(DEFAULT_HTTP_URL),
            headers_text: String::from(DEFAULT_HEADERS_TEXT),
            body: String::new(),
        }
    }
}

impl RequestForm {
    /// Validate the form into a dispatchable plan.
    ///
    /// Runs before any network traffic: a blank URL or malformed headers
    /// JSON fails here and nothing is dispatched.
    pub fn validate(&self) -> Result<RequestPlan, String> {
        if self.url.trim().is_empty() {
            return Err(String::from("Please enter a URL"));
        }

        let headers = parse_header_map(&self.headers_text)?;

        let body = if self.method.has_body() && !self.body.trim().is_empty() {
            Some(self.body.clone())
        } else {
            None
        };

        Ok(RequestPlan {
            method: self.method.clone(),
            url: self.url.clone(),
            headers,
            body,
        })
    }
}

/// Parse the headers text into a name/value map.
///
/// The text must be a JSON object whose values are all strings; anything
/// else collapses to one fixed message so the screen shows a single,
/// predictable error for this path.
pub fn parse_header_map(text: &str) -> Result<BTreeMap<String, String>, String> {
    const INVALID: &str = "Invalid headers JSON";

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|_| String::from(INVALID))?;
    let object = value.as_object().ok_or_else(|| String::from(INVALID))?;

    let mut headers = BTreeMap::new();
    for (name, value) in object {
        let value = value.as_str().ok_or_else(|| String::from(INVALID))?;
        headers.insert(name.clone(), value.to_owned());
    }
    Ok(headers)
}

/// A validated request, ready for the network layer
#[derive(Clone, Debug, PartialEq)]
pub struct RequestPlan {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

/// The captured outcome of one HTTP request.
///
/// Produced once per request and replaced wholesale by the next one;
/// elapsed time covers dispatch through the last body byte.
#[derive(Clone, Debug, PartialEq)]
pub struct Exchange {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub elapsed_ms: u64,
}

/// History entry
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub form: RequestForm,
    pub status: Option<u16>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// A static, read-only example used to pre-fill an input
#[derive(Clone, Copy, Debug)]
pub struct NamedExample {
    pub name: &'static str,
    pub value: &'static str,
}

/// A static, read-only request preset for the HTTP client
#[derive(Clone, Debug)]
pub struct QuickRequest {
    pub name: &'static str,
    pub method: HttpMethod,
    pub url: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_map_valid_object() {
        let headers = parse_header_map(r#"{"Content-Type": "application/json"}"#).unwrap();
        assert_eq!(
            headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_parse_header_map_rejects_bad_json() {
        let err = parse_header_map("{bad json").unwrap_err();
        assert_eq!(err, "Invalid headers JSON");
    }

    #[test]
    fn test_parse_header_map_rejects_blank_text() {
        assert_eq!(parse_header_map("").unwrap_err(), "Invalid headers JSON");
        assert_eq!(parse_header_map("   ").unwrap_err(), "Invalid headers JSON");
    }

    #[test]
    fn test_parse_header_map_rejects_non_object() {
        assert_eq!(parse_header_map("[1, 2]").unwrap_err(), "Invalid headers JSON");
    }

    #[test]
    fn test_parse_header_map_rejects_non_string_values() {
        let err = parse_header_map(r#"{"X-Count": 3}"#).unwrap_err();
        assert_eq!(err, "Invalid headers JSON");
    }

    #[test]
    fn test_validate_rejects_blank_url() {
        let form = RequestForm {
            url: String::from("   "),
            ..RequestForm::default()
        };
        assert_eq!(form.validate().unwrap_err(), "Please enter a URL");
    }

    #[test]
    fn test_validate_default_form() {
        let plan = RequestForm::default().validate().unwrap();
        assert_eq!(plan.method, HttpMethod::GET);
        assert_eq!(plan.url, crate::constants::DEFAULT_HTTP_URL);
        assert!(plan.body.is_none());
    }

    #[test]
    fn test_validate_gates_body_on_method() {
        let mut form = RequestForm {
            body: String::from(r#"{"name":"test"}"#),
            ..RequestForm::default()
        };
        assert!(form.validate().unwrap().body.is_none());

        form.method = HttpMethod::POST;
        assert_eq!(form.validate().unwrap().body.as_deref(), Some(r#"{"name":"test"}"#));
    }

    #[test]
    fn test_method_cycle_wraps() {
        let mut method = HttpMethod::GET;
        for _ in 0..5 {
            method = method.next();
        }
        assert_eq!(method, HttpMethod::GET);
    }
}
