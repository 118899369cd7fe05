use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

pub const BOOK_NOT_FOUND: &str = "Book not found";

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    AccessDenied {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn access_denied(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::AccessDenied { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    // the only failure the catalog operations surface
    pub fn book_not_found() -> LibraryError {
        LibraryError::not_found(BOOK_NOT_FOUND)
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::AccessDenied { message, .. } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::Validation { message, .. } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(format!("serde validation {:?}", err).as_str())
    }
}

impl From<quick_xml::Error> for LibraryError {
    fn from(err: quick_xml::Error) -> Self {
        LibraryError::serialization(format!("malformed xml {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::AccessDenied { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl Error for LibraryError {}

/// A specialized Result type for the catalog and book repositories.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Coerces loosely typed numeric text into an integer. Blank text counts as zero and
// unsigned 0x/0o/0b literals are read in their radix. Anything non-numeric, fractional
// or out of range yields None, which never matches a stored id.
pub fn coerce_number(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if let Some(value) = coerce_radix_literal(trimmed) {
        return value;
    }
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

// Some(..) when the text carries a radix prefix, whether or not its digits are valid
fn coerce_radix_literal(text: &str) -> Option<Option<i64>> {
    let radix = match text.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    Some(i64::from_str_radix(digits, radix).ok())
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BOOK_NOT_FOUND, coerce_number, LibraryError};

    #[tokio::test]
    async fn test_should_create_access_error() {
        assert!(matches!(LibraryError::access_denied("test", None), LibraryError::AccessDenied{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
        assert_eq!(BOOK_NOT_FOUND, LibraryError::book_not_found().message());
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
        let err = serde_json::from_str::<i64>("x").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_coerce_numbers() {
        assert_eq!(Some(2024), coerce_number("2024"));
        assert_eq!(Some(7), coerce_number(" 7 "));
        assert_eq!(Some(3), coerce_number("3.0"));
        assert_eq!(Some(-4), coerce_number("-4"));
        assert_eq!(Some(0), coerce_number(""));
        assert_eq!(Some(0), coerce_number("   "));
        assert_eq!(None, coerce_number("abc"));
        assert_eq!(None, coerce_number("1.5"));
        assert_eq!(None, coerce_number("inf"));
        assert_eq!(None, coerce_number("NaN"));
        assert_eq!(None, coerce_number("1e300"));
    }

    #[tokio::test]
    async fn test_should_coerce_radix_literals() {
        assert_eq!(Some(1), coerce_number("0x1"));
        assert_eq!(Some(31), coerce_number(" 0X1f "));
        assert_eq!(Some(15), coerce_number("0o17"));
        assert_eq!(Some(5), coerce_number("0b101"));
        assert_eq!(None, coerce_number("0x"));
        assert_eq!(None, coerce_number("0b102"));
        assert_eq!(None, coerce_number("0x-1"));
        assert_eq!(None, coerce_number("-0x1"));
        assert_eq!(None, coerce_number("0xffffffffffffffffff"));
    }
}
