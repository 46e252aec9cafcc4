//! # sfv_codec
//!
//! A parser and canonical serializer for HTTP Structured Field Values
//! (RFC 8941, extended by RFC 9651).
//!
//! ## What are Structured Fields?
//!
//! Structured Fields give HTTP header and trailer values a shared, strict
//! grammar. A field value is one of three top-level types:
//!
//! - **List**: `1, 2.5, (3 4);x`
//! - **Dictionary**: `u=1, i`
//! - **Item**: `"abc";q=0.5`
//!
//! Members are Items or Inner Lists, and every Item and Inner List may carry
//! ordered Parameters.
//!
//! ## Key Features
//!
//! - **Strict**: Any grammar violation rejects the whole field value
//! - **Canonical**: Serialization output does not depend on the input's whitespace
//!   or number formatting, so parse then serialize is idempotent
//! - **Exact Decimals**: Decimals are stored as thousandths, never as floats
//! - **Serde Compatible**: Field values embed in serde structs as their string form
//! - **Versioned**: RFC 9651 Dates and Display Strings can be switched off
//!
//! ## Quick Start
//!
//! ```rust
//! use sfv_codec::{parse_dictionary, serialize_dictionary, BareItem};
//!
//! let dict = parse_dictionary("u=2,   i").unwrap();
//! let urgency = dict.get("u").and_then(|m| m.as_item()).map(|i| &i.bare_item);
//! assert_eq!(urgency, Some(&BareItem::from(2)));
//!
//! assert_eq!(serialize_dictionary(&dict).unwrap(), "u=2, i");
//! ```
//!
//! ### Building Values
//!
//! ```rust
//! use sfv_codec::{serialize_list, BareItem, Decimal, InnerList, Item, List, ListEntry, Parameters};
//!
//! let mut params = Parameters::new();
//! params.insert("q".to_string(), BareItem::from(Decimal::try_from(0.5).unwrap()));
//!
//! let list: List = vec![
//!     ListEntry::from(Item::new(BareItem::token("gzip"))),
//!     ListEntry::from(Item::with_params(BareItem::token("br"), params)),
//!     ListEntry::from(InnerList::new(vec![Item::new("a"), Item::new("b")])),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(serialize_list(&list).unwrap(), r#"gzip, br;q=0.5, ("a" "b")"#);
//! ```
//!
//! ## Error Reporting
//!
//! The `parse_*` functions return `None` for any invalid input. Use
//! [`Parser`] directly to learn where parsing failed, and the `serialize_*`
//! functions to learn why a value cannot be represented.
//!
//! ## Logging
//!
//! Rejections are reported through [`tracing`] at `debug` level. Nothing is
//! logged on success.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Inputs are scanned as bytes with bounds-checked lookahead
//! - No panics in the public API

pub mod de;
pub mod error;
pub mod grammar;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Parser;
pub use error::{Error, Result};
pub use map::{Dictionary, Parameters, SfvMap};
pub use options::{Base64Padding, SfvOptions, Version};
pub use ser::Serializer;
pub use value::{BareItem, Decimal, InnerList, Item, List, ListEntry};

use tracing::debug;

/// Parses a List field value.
///
/// Returns `None` if `input` does not match the List grammar. Empty input
/// is an empty List.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::parse_list;
///
/// let list = parse_list("sugar, tea, rum").unwrap();
/// assert_eq!(list.len(), 3);
///
/// assert!(parse_list("").unwrap().is_empty());
/// assert!(parse_list("a,,b").is_none());
/// ```
#[must_use]
pub fn parse_list(input: &str) -> Option<List> {
    parse_list_with_options(input, &SfvOptions::default())
}

/// Parses a Dictionary field value.
///
/// Returns `None` if `input` does not match the Dictionary grammar.
/// Duplicate keys keep the last value, at the position of the last
/// occurrence.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{parse_dictionary, BareItem};
///
/// let dict = parse_dictionary("a=1, b=2, a=3").unwrap();
/// let keys: Vec<_> = dict.keys().map(String::as_str).collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(
///     dict.get("a").and_then(|m| m.as_item()).map(|i| &i.bare_item),
///     Some(&BareItem::from(3))
/// );
/// ```
#[must_use]
pub fn parse_dictionary(input: &str) -> Option<Dictionary> {
    parse_dictionary_with_options(input, &SfvOptions::default())
}

/// Parses an Item field value.
///
/// Returns `None` if `input` does not match the Item grammar. Unlike Lists
/// and Dictionaries, empty input is not an Item.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{parse_item, BareItem};
///
/// let item = parse_item("  42  ").unwrap();
/// assert_eq!(item.bare_item, BareItem::Integer(42));
///
/// assert!(parse_item("").is_none());
/// assert!(parse_item("1000000000000000").is_none());
/// ```
#[must_use]
pub fn parse_item(input: &str) -> Option<Item> {
    parse_item_with_options(input, &SfvOptions::default())
}

/// Parses a List field value under `options`.
#[must_use]
pub fn parse_list_with_options(input: &str, options: &SfvOptions) -> Option<List> {
    Parser::new(input)
        .with_options(options.clone())
        .parse_list()
        .map_err(|e| debug!(field_type = "list", error = %e, "rejected field value"))
        .ok()
}

/// Parses a Dictionary field value under `options`.
#[must_use]
pub fn parse_dictionary_with_options(input: &str, options: &SfvOptions) -> Option<Dictionary> {
    Parser::new(input)
        .with_options(options.clone())
        .parse_dictionary()
        .map_err(|e| debug!(field_type = "dictionary", error = %e, "rejected field value"))
        .ok()
}

/// Parses an Item field value under `options`.
#[must_use]
pub fn parse_item_with_options(input: &str, options: &SfvOptions) -> Option<Item> {
    Parser::new(input)
        .with_options(options.clone())
        .parse_item()
        .map_err(|e| debug!(field_type = "item", error = %e, "rejected field value"))
        .ok()
}

/// Serializes a List to its canonical form.
///
/// An empty List serializes to the empty string, which callers should treat
/// as "omit the field".
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{parse_list, serialize_list};
///
/// let list = parse_list("1,2.50,   (3  4);x").unwrap();
/// assert_eq!(serialize_list(&list).unwrap(), "1, 2.5, (3 4);x");
/// ```
///
/// # Errors
///
/// Returns an error if any value in the List cannot be represented: an
/// Integer or Date out of range, an invalid key, Token or String, or a
/// bare item the configured version does not support.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_list(list: &List) -> Result<String> {
    serialize_list_with_options(list, &SfvOptions::default())
}

/// Serializes a Dictionary to its canonical form.
///
/// Members whose value is Boolean `true` are written as the key alone,
/// followed by their parameters.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{parse_dictionary, serialize_dictionary};
///
/// let dict = parse_dictionary("a=?1, b=?0;x=1").unwrap();
/// assert_eq!(serialize_dictionary(&dict).unwrap(), "a, b=?0;x=1");
/// ```
///
/// # Errors
///
/// Returns an error if any key or value cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_dictionary(dict: &Dictionary) -> Result<String> {
    serialize_dictionary_with_options(dict, &SfvOptions::default())
}

/// Serializes an Item to its canonical form.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{serialize_item, BareItem, Item};
///
/// let item = Item::new(BareItem::from(b"hello".to_vec()));
/// assert_eq!(serialize_item(&item).unwrap(), ":aGVsbG8=:");
/// ```
///
/// # Errors
///
/// Returns an error if the bare item or a parameter cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_item(item: &Item) -> Result<String> {
    serialize_item_with_options(item, &SfvOptions::default())
}

/// Serializes a List under `options`.
///
/// # Errors
///
/// See [`serialize_list`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_list_with_options(list: &List, options: &SfvOptions) -> Result<String> {
    let mut serializer = Serializer::new(options.clone());
    serializer
        .write_list(list)
        .map_err(|e| refused("list", e))?;
    Ok(serializer.into_inner())
}

/// Serializes a Dictionary under `options`.
///
/// # Errors
///
/// See [`serialize_dictionary`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_dictionary_with_options(dict: &Dictionary, options: &SfvOptions) -> Result<String> {
    let mut serializer = Serializer::new(options.clone());
    serializer
        .write_dictionary(dict)
        .map_err(|e| refused("dictionary", e))?;
    Ok(serializer.into_inner())
}

/// Serializes an Item under `options`.
///
/// # Errors
///
/// See [`serialize_item`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_item_with_options(item: &Item, options: &SfvOptions) -> Result<String> {
    let mut serializer = Serializer::new(options.clone());
    serializer
        .write_item(item)
        .map_err(|e| refused("item", e))?;
    Ok(serializer.into_inner())
}

fn refused(field_type: &'static str, error: Error) -> Error {
    debug!(field_type, error = %error, "refused to serialize field value");
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_canonicalization() {
        let list = parse_list("1,2.50,   (3  4);x").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(
            list[1].as_item().map(|i| &i.bare_item),
            Some(&BareItem::Decimal(Decimal::from_thousandths(2500).unwrap()))
        );
        assert_eq!(serialize_list(&list).unwrap(), "1, 2.5, (3 4);x");
    }

    #[test]
    fn test_dictionary_boolean_members() {
        let dict = parse_dictionary("a=?1, b=?0;x=1").unwrap();
        assert_eq!(
            dict.get("a").and_then(ListEntry::as_item),
            Some(&Item::new(true))
        );
        assert_eq!(serialize_dictionary(&dict).unwrap(), "a, b=?0;x=1");
    }

    #[test]
    fn test_item_with_decimal_parameter() {
        let item = parse_item("\"abc\";q=0.5").unwrap();
        assert_eq!(item.bare_item, BareItem::from("abc"));
        assert_eq!(
            item.params.get("q"),
            Some(&BareItem::Decimal(Decimal::from_thousandths(500).unwrap()))
        );
        assert_eq!(serialize_item(&item).unwrap(), "\"abc\";q=0.5");
    }

    #[test]
    fn test_integer_bounds() {
        let max = parse_item("999999999999999").unwrap();
        assert_eq!(max.bare_item, BareItem::Integer(999_999_999_999_999));
        assert!(parse_item("1000000000000000").is_none());
        assert!(parse_item("-999999999999999").is_some());
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(parse_list("a,").is_none());
        assert!(parse_list("a,,b").is_none());
        assert!(parse_dictionary("A=1").is_none());
        assert!(parse_item("\"f\u{fc}\"").is_none());
        assert!(parse_item("(1 2)").is_none());
        assert!(parse_item("?2").is_none());
    }

    #[test]
    fn test_byte_sequence_and_date() {
        let item = parse_item(":aGVsbG8=:").unwrap();
        assert_eq!(item.bare_item.as_byte_sequence(), Some(&b"hello"[..]));

        let date = parse_item("@1659578233").unwrap();
        assert_eq!(date.bare_item, BareItem::Date(1_659_578_233));
        assert_eq!(serialize_item(&date).unwrap(), "@1659578233");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(serialize_list(&List::new()).unwrap(), "");
        assert_eq!(serialize_dictionary(&Dictionary::new()).unwrap(), "");
        assert!(parse_dictionary("   ").unwrap().is_empty());
        assert!(parse_item("   ").is_none());
    }

    #[test]
    fn test_rfc8941_options() {
        let options = SfvOptions::rfc8941();
        assert!(parse_item_with_options("@1", &options).is_none());
        assert!(parse_item_with_options("%\"a\"", &options).is_none());
        assert!(parse_item_with_options("1", &options).is_some());

        let date = Item::new(BareItem::date(1));
        assert!(matches!(
            serialize_item_with_options(&date, &options),
            Err(Error::UnsupportedBareItem { .. })
        ));
    }

    #[test]
    fn test_serialize_refuses_invalid_values() {
        let list: List = vec![ListEntry::from(Item::new(BareItem::token("1x")))]
            .into_iter()
            .collect();
        assert_eq!(serialize_list(&list), Err(Error::invalid_token("1x")));

        let dict: Dictionary = vec![("Key", ListEntry::from(Item::new(1)))]
            .into_iter()
            .collect();
        assert_eq!(serialize_dictionary(&dict), Err(Error::invalid_key("Key")));
    }
}
