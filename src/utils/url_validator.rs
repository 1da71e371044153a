//! Syntactic validation of submitted URLs.
//!
//! A URL is accepted when it is an absolute `http`/`https` URL with an
//! authority and a non-empty host. The submitted string itself is what gets
//! stored; parsing only decides whether it is acceptable and which host needs
//! a DNS check.

use percent_encoding::{CONTROLS, utf8_percent_encode};
use url::{Host, Url};

/// Maximum accepted URL length in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a submitted string is not a web URL.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("URL contains whitespace or control characters")]
    IllegalCharacters,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no authority component")]
    MissingAuthority,

    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` as an absolute web URL.
///
/// # Rules
///
/// 1. Non-empty, at most [`MAX_URL_LENGTH`] bytes
/// 2. No whitespace or control characters anywhere
/// 3. Scheme is `http` or `https`, followed by `//`
/// 4. Host is present and non-empty
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] rule that fails.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_validator::parse_web_url;
///
/// assert!(parse_web_url("https://example.com/a?b=c").is_ok());
/// assert!(parse_web_url("not a url").is_err());
/// assert!(parse_web_url("ftp://example.com").is_err());
/// ```
pub fn parse_web_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::IllegalCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    // The parser repairs `http:/host` and `http:host`; the raw input must not need it.
    let after_scheme = &input[url.scheme().len()..];
    if !after_scheme.starts_with("://") {
        return Err(UrlValidationError::MissingAuthority);
    }

    match url.host() {
        None => Err(UrlValidationError::MissingHost),
        Some(Host::Domain(domain)) if domain.is_empty() => Err(UrlValidationError::MissingHost),
        Some(_) => Ok(url),
    }
}

/// Returns the domain name that must resolve for `url` to be accepted.
///
/// IP-literal hosts need no lookup and yield `None`.
pub fn host_to_resolve(url: &Url) -> Option<&str> {
    match url.host() {
        Some(Host::Domain(domain)) => Some(domain),
        _ => None,
    }
}

/// Renders a stored URL for the `Location` header.
///
/// Non-ASCII characters are percent-encoded as UTF-8; everything else,
/// including existing `%XX` escapes, is kept byte for byte.
///
/// ```
/// use shorturl::utils::url_validator::location_for;
///
/// assert_eq!(location_for("https://example.com/café"), "https://example.com/caf%C3%A9");
/// assert_eq!(location_for("https://example.com/a%20b?q=1"), "https://example.com/a%20b?q=1");
/// ```
pub fn location_for(original_url: &str) -> String {
    utf8_percent_encode(original_url, CONTROLS).to_string()
}
