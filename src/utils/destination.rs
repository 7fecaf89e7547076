//! Destination URL validation.
//!
//! Destinations are checked, never rewritten: the stored value is exactly
//! what the client sent, minus surrounding whitespace.

use url::Url;

/// Reasons a destination is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DestinationError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedScheme,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacters,
}

/// Validates that `input` is an absolute `http`/`https` URL with a host.
///
/// Control characters are rejected before parsing: `Url::parse` strips tabs
/// and newlines and tolerates the rest, and none of them fit in a `Location`
/// header.
///
/// Returns the trimmed input on success.
///
/// # Errors
///
/// See [`DestinationError`].
pub fn validate_destination(input: &str) -> Result<&str, DestinationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DestinationError::Missing);
    }

    if trimmed.chars().any(char::is_control) {
        return Err(DestinationError::ControlCharacters);
    }

    let url = Url::parse(trimmed).map_err(|e| DestinationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(DestinationError::UnsupportedScheme),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(DestinationError::MissingHost);
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert_eq!(
            validate_destination("https://example.com/a"),
            Ok("https://example.com/a")
        );
    }

    #[test]
    fn test_accepts_http_with_port_and_query() {
        assert_eq!(
            validate_destination("http://localhost:3000/test?q=1#frag"),
            Ok("http://localhost:3000/test?q=1#frag")
        );
    }

    #[test]
    fn test_keeps_input_verbatim() {
        assert_eq!(
            validate_destination("  https://EXAMPLE.com:443/Path  "),
            Ok("https://EXAMPLE.com:443/Path")
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_destination("   "), Err(DestinationError::Missing));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_destination("not-a-url"),
            Err(DestinationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_destination("example.com"),
            Err(DestinationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in [
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "ftp://example.com/file.txt",
            "mailto:test@example.com",
        ] {
            assert_eq!(
                validate_destination(input),
                Err(DestinationError::UnsupportedScheme),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_control_characters() {
        for input in [
            "https://example.com/a\u{1}b",
            "https://example.com/a\tb",
            "https://example.com/a\nb",
            "https://exa\rmple.com/",
            "https://example.com/\u{7f}",
        ] {
            assert_eq!(
                validate_destination(input),
                Err(DestinationError::ControlCharacters),
                "{input:?} should be rejected"
            );
        }
    }
}
