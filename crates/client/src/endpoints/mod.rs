// API endpoints, one module per resource family

pub mod categories;
pub mod identifiers;
pub mod index;
pub mod products;
pub mod tags;

use endoflife_core::{ErrorBuilder, Result};
use std::borrow::Cow;

/// Percent-encode a required path argument, rejecting blank values
pub(crate) fn required_segment<'a>(value: &'a str, argument: &'static str) -> Result<Cow<'a, str>> {
    if value.trim().is_empty() {
        return Err(ErrorBuilder::validation().argument_required(argument));
    }
    Ok(urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_segment_passes_plain_names() {
        assert_eq!(required_segment("python", "product name").unwrap(), "python");
        assert_eq!(required_segment("3.12", "release name").unwrap(), "3.12");
    }

    #[test]
    fn test_required_segment_encodes_reserved_characters() {
        assert_eq!(
            required_segment("a/b c", "product name").unwrap(),
            "a%2Fb%20c"
        );
    }

    #[test]
    fn test_required_segment_rejects_blank() {
        let err = required_segment("", "tag name").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "tag name is required");

        assert!(required_segment("   ", "tag name").is_err());
    }
}
