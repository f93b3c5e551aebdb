//! The field/operator catalog and the defaults substituted for missing data.
//!
//! Everything here is advisory: the conversion core only reads the defaults,
//! and value validation is offered to the editing surface without ever being
//! enforced during graph traversal.

/// Centralized default values and display constants.
pub mod defaults {
    pub const FIELD: &str = "req.uri.path";
    pub const OPERATOR: &str = "==";
    pub const VALUE: &str = "";
    /// Rendered in place of a missing or empty condition value.
    pub const EMPTY_VALUE_DISPLAY: &str = "\"\"";
}

/// Display metadata for a matchable request/response field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub examples: &'static [&'static str],
}

/// Display metadata for a comparison or join operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        value: "req.uri.path",
        label: "URI Path",
        description: "The request URI path",
        placeholder: "/api/users",
        examples: &["/api/v1/users", "/blog/posts", "/admin/dashboard"],
    },
    FieldSpec {
        value: "req.method",
        label: "Method",
        description: "HTTP method",
        placeholder: "GET",
        examples: &["GET", "POST", "PUT"],
    },
    FieldSpec {
        value: "req.headers.host",
        label: "Host",
        description: "The host header",
        placeholder: "api.example.com",
        examples: &["api.example.com", "www.mysite.org", "localhost:3000"],
    },
    FieldSpec {
        value: "req.headers.UserAgent",
        label: "User Agent",
        description: "User agent header",
        placeholder: "Chrome",
        examples: &["Chrome", "Firefox", "mobile", "bot"],
    },
    FieldSpec {
        value: "req.geo.country",
        label: "Country",
        description: "Geo location country",
        placeholder: "US",
        examples: &["US", "GB", "CA"],
    },
    FieldSpec {
        value: "res.status",
        label: "Status Code",
        description: "Response status code",
        placeholder: "200",
        examples: &["200", "404", "500", "301"],
    },
];

pub const OPERATORS: &[OperatorSpec] = &[
    OperatorSpec {
        value: "==",
        label: "Equals",
        description: "Exact match - value must be identical",
    },
    OperatorSpec {
        value: "!=",
        label: "Not Equals",
        description: "Must not match - value must be different",
    },
    OperatorSpec {
        value: "~~",
        label: "Contains",
        description: "Partial match - value contains the text",
    },
    OperatorSpec {
        value: "starts_with",
        label: "Starts With",
        description: "Begins with - value starts with the text",
    },
    OperatorSpec {
        value: "ends_with",
        label: "Ends With",
        description: "Ends with - value ends with the text",
    },
];

pub const JOIN_OPERATORS: &[OperatorSpec] = &[
    OperatorSpec {
        value: "&&",
        label: "AND",
        description: "Both conditions must be true",
    },
    OperatorSpec {
        value: "||",
        label: "OR",
        description: "Either condition can be true",
    },
];

/// Looks up the metadata for a field identifier.
pub fn field_spec(value: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.value == value)
}

/// Example values for a field, for UI hints.
pub fn field_examples(value: &str) -> &'static [&'static str] {
    field_spec(value).map(|f| f.examples).unwrap_or(&[])
}

const VALID_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS", "HEAD"];

/// Checks a condition value against its field's expected shape.
///
/// Returns `Some(message)` describing the first problem found, or `None` when
/// the value is acceptable. Unknown fields accept anything non-empty.
pub fn validate_value(field: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("This field is required".to_string());
    }

    match field {
        "req.uri.path" => {
            if !value.starts_with('/') {
                return Some("Path must start with / (e.g., /api/users)".to_string());
            }
            let allowed =
                |c: char| c.is_ascii_alphanumeric() || "/.-_~%:;?&=#@".contains(c);
            if !value.chars().all(allowed) {
                return Some(
                    "Path contains invalid characters. Use letters, numbers, /, -, _, and %"
                        .to_string(),
                );
            }
            if value.contains("//") {
                return Some("Path should not contain double slashes (//)".to_string());
            }
        }
        "res.status" => match value.parse::<u32>() {
            Ok(code) if (100..=599).contains(&code) => {}
            Ok(_) => return Some("Status code must be between 100 and 599".to_string()),
            Err(_) => return Some("Status code must be a number (e.g., 200, 404)".to_string()),
        },
        "req.headers.host" => {
            if value.starts_with("http://") || value.starts_with("https://") {
                return Some("Host should not include protocol (http/https)".to_string());
            }
            let (host, port) = match value.split_once(':') {
                Some((host, port)) => (host, Some(port)),
                None => (value, None),
            };
            let host_ok = !host.is_empty()
                && host
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
            let port_ok = port.is_none_or(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
            if !host_ok || !port_ok {
                return Some("Invalid hostname format. Use domain.com or domain.com:port".to_string());
            }
        }
        "req.geo.country" => {
            if value.len() != 2 || !value.chars().all(|c| c.is_ascii_uppercase()) {
                return Some("Country code must be 2 uppercase letters (e.g., US, GB)".to_string());
            }
        }
        "req.method" => {
            if !VALID_METHODS.contains(&value.to_ascii_uppercase().as_str()) {
                return Some(format!("Invalid HTTP method. Use: {}", VALID_METHODS.join(", ")));
            }
        }
        _ => {}
    }

    None
}
