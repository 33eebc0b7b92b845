//! # Product Links
//!
//! Builds the shop URL for a product from the configured base URL and the
//! product's link suffix. Each `/`-separated part of the suffix is pushed
//! as its own path segment, so spaces and non-ASCII letters come out
//! percent-encoded (`a b` → `a%20b`) while the separators survive.

use std::fmt;

use url::Url;

use crate::core::product::normalize_link_suffix;

#[derive(Debug, PartialEq)]
pub enum LinkError {
    /// The product has no link suffix.
    MissingSuffix,
    /// The base URL does not parse, or cannot take path segments.
    InvalidBase(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::MissingSuffix => write!(f, "this product has no link"),
            LinkError::InvalidBase(base) => write!(f, "invalid link base URL '{base}'"),
        }
    }
}

impl std::error::Error for LinkError {}

/// Join `suffix` onto `base`, percent-encoding the suffix.
pub fn product_url(base: &str, suffix: &str) -> Result<Url, LinkError> {
    let suffix = normalize_link_suffix(suffix);
    if suffix.is_empty() {
        return Err(LinkError::MissingSuffix);
    }

    let mut url = Url::parse(base).map_err(|_| LinkError::InvalidBase(base.to_string()))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| LinkError::InvalidBase(base.to_string()))?;
        segments.pop_if_empty();
        for part in suffix.split('/') {
            segments.push(part);
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://shop.example.com/products/";

    #[test]
    fn test_space_is_percent_encoded() {
        let url = product_url(BASE, "a b").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/products/a%20b");
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let url = product_url("https://shop.example.com/products", "sunset").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/products/sunset");
    }

    #[test]
    fn test_leading_slash_and_nested_suffix() {
        let url = product_url(BASE, "/oil/skärgård").unwrap();
        assert_eq!(
            url.as_str(),
            "https://shop.example.com/products/oil/sk%C3%A4rg%C3%A5rd"
        );
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let url = product_url(BASE, "what?#now").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/products/what%3F%23now");
    }

    #[test]
    fn test_empty_suffix_is_error() {
        assert_eq!(product_url(BASE, ""), Err(LinkError::MissingSuffix));
        assert_eq!(product_url(BASE, "///"), Err(LinkError::MissingSuffix));
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            product_url("not a url", "x"),
            Err(LinkError::InvalidBase(_))
        ));
        assert!(matches!(
            product_url("mailto:someone@example.com", "x"),
            Err(LinkError::InvalidBase(_))
        ));
    }
}
