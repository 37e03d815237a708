//! Application constants
//!
//! Centralized location for magic strings and the static catalogs that
//! pre-fill the tool screens.

use crate::models::{HttpMethod, NamedExample, QuickRequest};

/// Default URL for new HTTP requests
pub const DEFAULT_HTTP_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Default request headers, edited as a JSON object
pub const DEFAULT_HEADERS_TEXT: &str = "{\n  \"Content-Type\": \"application/json\"\n}";

/// Log file written next to the binary
pub const LOG_FILE: &str = "toolbelt.log";

/// Upper bound on the in-memory request history
pub const MAX_HISTORY: usize = 50;

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Toolbelt TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ready-made patterns for the regex tester
pub const REGEX_EXAMPLES: &[NamedExample] = &[
    NamedExample {
        name: "Email",
        value: "[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\\.[a-zA-Z]{2,}",
    },
    NamedExample {
        name: "Phone",
        value: "\\+?[1-9]\\d{1,14}",
    },
    NamedExample {
        name: "URL",
        value: "https?://[^\\s]+",
    },
    NamedExample {
        name: "Date",
        value: "\\d{4}-\\d{2}-\\d{2}",
    },
];

/// Sample documents for the JSON formatter
pub const JSON_SAMPLES: &[NamedExample] = &[
    NamedExample {
        name: "User Object",
        value: r#"{"name":"John Doe","email":"john@example.com","age":30}"#,
    },
    NamedExample {
        name: "Array",
        value: r#"[{"id":1,"name":"Item 1"},{"id":2,"name":"Item 2"}]"#,
    },
    NamedExample {
        name: "Nested",
        value: r#"{"user":{"profile":{"name":"Alice","settings":{"theme":"dark"}}}}"#,
    },
];

/// Ready-made requests for the HTTP client
pub const QUICK_REQUESTS: &[QuickRequest] = &[
    QuickRequest {
        name: "GET Posts",
        method: HttpMethod::GET,
        url: "https://jsonplaceholder.typicode.com/posts/1",
    },
    QuickRequest {
        name: "POST User",
        method: HttpMethod::POST,
        url: "https://jsonplaceholder.typicode.com/users",
    },
    QuickRequest {
        name: "PUT Post",
        method: HttpMethod::PUT,
        url: "https://jsonplaceholder.typicode.com/posts/1",
    },
];
