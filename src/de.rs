//! Structured Field parsing.
//!
//! This module provides the [`Parser`], a recursive-descent parser over a
//! byte cursor that turns a field value into a [`List`], [`Dictionary`] or
//! [`Item`].
//!
//! ## Overview
//!
//! - **Single pass**: Every sub-parser advances the same cursor and never
//!   backtracks
//! - **All or nothing**: The first grammar violation aborts the whole parse
//! - **Whole input**: Trailing characters after the top-level value are an error
//! - **Positioned errors**: [`Error::Parse`] carries the byte offset of the violation
//!
//! ## Usage
//!
//! Most users should use the `parse_*` functions in the crate root, which
//! return `None` for invalid input. The parser reports why input was rejected:
//!
//! ```rust
//! use sfv_codec::{Error, Parser};
//!
//! let list = Parser::new("1, 2.5, (3 4);x").parse_list().unwrap();
//! assert_eq!(list.len(), 3);
//!
//! let err = Parser::new("\"abc").parse_item().unwrap_err();
//! assert_eq!(err.index(), Some(4));
//! ```

use crate::grammar::{
    is_base64_char, is_key_char, is_key_start, is_ows, is_string_char, is_token_char,
    is_token_start, MAX_DECIMAL_FRACTION_DIGITS, MAX_DECIMAL_INTEGER_DIGITS, MAX_INTEGER_DIGITS,
};
use crate::options::{Base64Padding, SfvOptions};
use crate::value::{BareItem, Decimal, InnerList, Item, List, ListEntry};
use crate::{Dictionary, Error, Parameters, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

/// Accepts missing `=` padding and non-zero pad bits.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// The Structured Field parser.
///
/// A parser is consumed by one of [`Parser::parse_list`],
/// [`Parser::parse_dictionary`] or [`Parser::parse_item`], so every parse
/// starts from a fresh cursor.
pub struct Parser<'a> {
    input: &'a [u8],
    position: usize,
    options: SfvOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a combined field value with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Parser {
            input: input.as_bytes(),
            position: 0,
            options: SfvOptions::default(),
        }
    }

    /// Replaces the parser options.
    #[must_use]
    pub fn with_options(mut self, options: SfvOptions) -> Self {
        self.options = options;
        self
    }

    /// Parses the input as a List.
    ///
    /// Empty input is an empty List.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the input is not a valid List.
    pub fn parse_list(mut self) -> Result<List> {
        self.discard_sp();
        let mut list = List::new();

        while !self.at_end() {
            list.push(self.parse_item_or_inner_list()?);
            if !self.next_member()? {
                break;
            }
        }

        self.finish()?;
        Ok(list)
    }

    /// Parses the input as a Dictionary.
    ///
    /// A repeated key replaces the earlier member and moves to the position
    /// of its last occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the input is not a valid Dictionary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::{BareItem, Parser};
    ///
    /// let dict = Parser::new("a=1, b=2, a=3").parse_dictionary().unwrap();
    /// let keys: Vec<_> = dict.keys().map(String::as_str).collect();
    /// assert_eq!(keys, vec!["b", "a"]);
    /// assert_eq!(dict.get("a").and_then(|m| m.as_item()).map(|i| &i.bare_item), Some(&BareItem::from(3)));
    /// ```
    pub fn parse_dictionary(mut self) -> Result<Dictionary> {
        self.discard_sp();
        let mut dict = Dictionary::new();

        while !self.at_end() {
            let key = self.parse_key()?;
            let member = if self.eat(b'=') {
                self.parse_item_or_inner_list()?
            } else {
                let params = self.parse_parameters()?;
                ListEntry::Item(Item::with_params(BareItem::Boolean(true), params))
            };
            dict.append(key, member);

            if !self.next_member()? {
                break;
            }
        }

        self.finish()?;
        Ok(dict)
    }

    /// Parses the input as a single Item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the input is not a valid Item, including
    /// empty input.
    pub fn parse_item(mut self) -> Result<Item> {
        self.discard_sp();
        let item = self.parse_item_inner()?;
        self.finish()?;
        Ok(item)
    }
}

impl Parser<'_> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Consumes `expected` if it is the next byte.
    #[inline]
    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn error(&self, msg: &str) -> Error {
        Error::parse(self.position, msg)
    }

    fn discard_sp(&mut self) {
        while self.peek() == Some(b' ') {
            self.position += 1;
        }
    }

    fn discard_ows(&mut self) {
        while self.peek().is_some_and(is_ows) {
            self.position += 1;
        }
    }

    /// Checks that only trailing spaces remain.
    fn finish(&mut self) -> Result<()> {
        self.discard_sp();
        if self.at_end() {
            Ok(())
        } else {
            Err(self.error("unexpected trailing characters"))
        }
    }

    /// Moves past the separator after a List or Dictionary member.
    ///
    /// Returns `false` at the end of input.
    fn next_member(&mut self) -> Result<bool> {
        self.discard_ows();
        if self.at_end() {
            return Ok(false);
        }
        if !self.eat(b',') {
            return Err(self.error("expected ','"));
        }
        self.discard_ows();
        if self.at_end() {
            return Err(self.error("trailing ','"));
        }
        Ok(true)
    }

    fn parse_item_or_inner_list(&mut self) -> Result<ListEntry> {
        if self.peek() == Some(b'(') {
            self.parse_inner_list().map(ListEntry::InnerList)
        } else {
            self.parse_item_inner().map(ListEntry::Item)
        }
    }

    fn parse_item_inner(&mut self) -> Result<Item> {
        let bare_item = self.parse_bare_item()?;
        let params = self.parse_parameters()?;
        Ok(Item { bare_item, params })
    }

    fn parse_inner_list(&mut self) -> Result<InnerList> {
        if !self.eat(b'(') {
            return Err(self.error("expected '('"));
        }

        let mut items = Vec::new();
        loop {
            self.discard_sp();
            match self.peek() {
                Some(b')') => {
                    self.position += 1;
                    let params = self.parse_parameters()?;
                    return Ok(InnerList { items, params });
                }
                Some(_) => {
                    items.push(self.parse_item_inner()?);
                    match self.peek() {
                        Some(b' ') | Some(b')') => {}
                        Some(_) => return Err(self.error("expected ' ' or ')' in inner list")),
                        None => break,
                    }
                }
                None => break,
            }
        }

        Err(self.error("unterminated inner list"))
    }

    fn parse_parameters(&mut self) -> Result<Parameters> {
        let mut params = Parameters::new();

        while self.eat(b';') {
            self.discard_sp();
            let key = self.parse_key()?;
            let value = if self.eat(b'=') {
                self.parse_bare_item()?
            } else {
                BareItem::Boolean(true)
            };
            params.insert(key, value);
        }

        Ok(params)
    }

    fn parse_key(&mut self) -> Result<String> {
        match self.peek() {
            Some(b) if is_key_start(b) => {}
            _ => return Err(self.error("expected key")),
        }

        let start = self.position;
        self.position += 1;
        while self.peek().is_some_and(is_key_char) {
            self.position += 1;
        }

        Ok(self.slice_to_string(start))
    }

    fn parse_bare_item(&mut self) -> Result<BareItem> {
        match self.peek() {
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b'"') => self.parse_string(),
            Some(b) if is_token_start(b) => Ok(self.parse_token()),
            Some(b':') => self.parse_byte_sequence(),
            Some(b'?') => self.parse_boolean(),
            Some(b'@') if self.options.version.supports_dates() => self.parse_date(),
            Some(b'%') if self.options.version.supports_display_strings() => {
                self.parse_display_string()
            }
            Some(_) => Err(self.error("unexpected character for bare item")),
            None => Err(self.error("expected bare item")),
        }
    }

    fn parse_number(&mut self) -> Result<BareItem> {
        let negative = self.eat(b'-');
        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(self.error("expected digit"));
        }

        let mut integer: i64 = 0;
        let mut integer_digits = 0;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            integer_digits += 1;
            if integer_digits > MAX_INTEGER_DIGITS {
                return Err(self.error("integer has more than 15 digits"));
            }
            integer = integer * 10 + i64::from(b - b'0');
            self.position += 1;
        }

        if self.peek() != Some(b'.') {
            return Ok(BareItem::Integer(if negative { -integer } else { integer }));
        }
        if integer_digits > MAX_DECIMAL_INTEGER_DIGITS {
            return Err(self.error("decimal has more than 12 integer digits"));
        }
        self.position += 1;

        let mut fraction: i64 = 0;
        let mut fraction_digits = 0;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            fraction_digits += 1;
            if fraction_digits > MAX_DECIMAL_FRACTION_DIGITS {
                return Err(self.error("decimal has more than 3 fractional digits"));
            }
            fraction = fraction * 10 + i64::from(b - b'0');
            self.position += 1;
        }
        if fraction_digits == 0 {
            return Err(self.error("decimal must end with a digit"));
        }

        for _ in fraction_digits..MAX_DECIMAL_FRACTION_DIGITS {
            fraction *= 10;
        }
        let thousandths = integer * 1000 + fraction;
        Ok(BareItem::Decimal(Decimal::from_thousandths_unchecked(
            if negative { -thousandths } else { thousandths },
        )))
    }

    fn parse_string(&mut self) -> Result<BareItem> {
        self.position += 1;
        let mut result = String::new();

        loop {
            let Some(b) = self.peek() else {
                return Err(self.error("unterminated string"));
            };
            match b {
                b'"' => {
                    self.position += 1;
                    return Ok(BareItem::String(result));
                }
                b'\\' => {
                    self.position += 1;
                    match self.peek() {
                        Some(escaped @ (b'"' | b'\\')) => result.push(char::from(escaped)),
                        Some(_) => return Err(self.error("invalid escape in string")),
                        None => return Err(self.error("unterminated string")),
                    }
                }
                b if is_string_char(b) => result.push(char::from(b)),
                _ => return Err(self.error("invalid character in string")),
            }
            self.position += 1;
        }
    }

    fn parse_token(&mut self) -> BareItem {
        let start = self.position;
        self.position += 1;
        while self.peek().is_some_and(is_token_char) {
            self.position += 1;
        }
        BareItem::Token(self.slice_to_string(start))
    }

    fn parse_byte_sequence(&mut self) -> Result<BareItem> {
        self.position += 1;
        let start = self.position;

        while self.peek().is_some_and(|b| is_base64_char(b) || b == b'=') {
            self.position += 1;
        }
        match self.peek() {
            Some(b':') => {}
            Some(_) => return Err(self.error("invalid character in byte sequence")),
            None => return Err(self.error("unterminated byte sequence")),
        }

        let encoded = &self.input[start..self.position];
        let decoded = match self.options.base64_padding {
            Base64Padding::Lenient => LENIENT_BASE64.decode(encoded),
            Base64Padding::Strict => STANDARD.decode(encoded),
        };
        let bytes = decoded.map_err(|_| Error::parse(start, "invalid base64 in byte sequence"))?;

        self.position += 1;
        Ok(BareItem::ByteSequence(bytes))
    }

    fn parse_boolean(&mut self) -> Result<BareItem> {
        self.position += 1;
        let value = match self.peek() {
            Some(b'1') => true,
            Some(b'0') => false,
            _ => return Err(self.error("expected '0' or '1' after '?'")),
        };
        self.position += 1;
        Ok(BareItem::Boolean(value))
    }

    fn parse_date(&mut self) -> Result<BareItem> {
        self.position += 1;
        let start = self.position;
        match self.parse_number()? {
            BareItem::Integer(seconds) => Ok(BareItem::Date(seconds)),
            _ => Err(Error::parse(start, "date must be an integer")),
        }
    }

    fn parse_display_string(&mut self) -> Result<BareItem> {
        self.position += 1;
        if !self.eat(b'"') {
            return Err(self.error("expected '\"' after '%'"));
        }

        let mut bytes = Vec::new();
        loop {
            let Some(b) = self.peek() else {
                return Err(self.error("unterminated display string"));
            };
            match b {
                b'"' => {
                    let text = String::from_utf8(bytes)
                        .map_err(|_| self.error("display string is not valid UTF-8"))?;
                    self.position += 1;
                    return Ok(BareItem::DisplayString(text));
                }
                b'%' => {
                    self.position += 1;
                    let high = self.lowercase_hex_digit()?;
                    let low = self.lowercase_hex_digit()?;
                    bytes.push(high << 4 | low);
                }
                b if is_string_char(b) => {
                    bytes.push(b);
                    self.position += 1;
                }
                _ => return Err(self.error("invalid character in display string")),
            }
        }
    }

    fn lowercase_hex_digit(&mut self) -> Result<u8> {
        let digit = match self.peek() {
            Some(b @ b'0'..=b'9') => b - b'0',
            Some(b @ b'a'..=b'f') => b - b'a' + 10,
            _ => return Err(self.error("expected lowercase hex digit")),
        };
        self.position += 1;
        Ok(digit)
    }

    /// Copies `input[start..position]`, which holds only ASCII checked by the caller.
    fn slice_to_string(&self, start: usize) -> String {
        self.input[start..self.position]
            .iter()
            .map(|&b| char::from(b))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Version;

    fn item(input: &str) -> Result<BareItem> {
        Parser::new(input).parse_item().map(|item| item.bare_item)
    }

    fn error_index(result: Result<impl std::fmt::Debug>) -> usize {
        match result {
            Err(Error::Parse { index, .. }) => index,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(item("42").unwrap(), BareItem::Integer(42));
        assert_eq!(item("0").unwrap(), BareItem::Integer(0));
        assert_eq!(item("-0").unwrap(), BareItem::Integer(0));
        assert_eq!(item("-42").unwrap(), BareItem::Integer(-42));
        assert_eq!(item("042").unwrap(), BareItem::Integer(42));
        assert_eq!(
            item("999999999999999").unwrap(),
            BareItem::Integer(999_999_999_999_999)
        );
        assert_eq!(
            item("-999999999999999").unwrap(),
            BareItem::Integer(-999_999_999_999_999)
        );

        assert_eq!(error_index(item("1000000000000000")), 15);
        assert_eq!(error_index(item("--0")), 1);
        assert_eq!(error_index(item("- 42")), 1);
        assert_eq!(error_index(item("-")), 1);
        assert_eq!(error_index(item("4 2")), 2);
    }

    #[test]
    fn test_parse_decimals() {
        let dec = |t| BareItem::Decimal(Decimal::from_thousandths(t).unwrap());

        assert_eq!(item("1.5").unwrap(), dec(1500));
        assert_eq!(item("-1.5").unwrap(), dec(-1500));
        assert_eq!(item("1.50").unwrap(), dec(1500));
        assert_eq!(item("0.001").unwrap(), dec(1));
        assert_eq!(item("-0.0").unwrap(), dec(0));
        assert_eq!(
            item("123456789012.123").unwrap(),
            dec(123_456_789_012_123)
        );

        assert_eq!(error_index(item("1234567890123.0")), 13);
        assert_eq!(error_index(item("1.1234")), 5);
        assert_eq!(error_index(item("1.")), 2);
        assert!(item("1.5.4").is_err());
        assert!(item(".5").is_err());
    }

    #[test]
    fn test_parse_strings() {
        assert_eq!(item(r#""foo bar""#).unwrap(), BareItem::from("foo bar"));
        assert_eq!(item(r#""""#).unwrap(), BareItem::from(""));
        assert_eq!(
            item(r#""foo \"bar\" \\ baz""#).unwrap(),
            BareItem::from(r#"foo "bar" \ baz"#)
        );

        assert_eq!(error_index(item(r#""foo"#)), 4);
        assert_eq!(error_index(item(r#""foo \,""#)), 6);
        assert_eq!(error_index(item("\"f\u{fc}\u{fc}\"")), 2);
        assert_eq!(error_index(item("\"\t\"")), 1);
        assert_eq!(error_index(item(r#""foo \"#)), 6);
        assert!(item("'foo'").is_err());
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(
            item("a_b-c.d3:f%00/*").unwrap(),
            BareItem::token("a_b-c.d3:f%00/*")
        );
        assert_eq!(item("FooBar").unwrap(), BareItem::token("FooBar"));
        assert_eq!(item("*foo").unwrap(), BareItem::token("*foo"));
        assert!(item("foo\"bar").is_err());
    }

    #[test]
    fn test_parse_byte_sequences() {
        assert_eq!(
            item(":aGVsbG8=:").unwrap(),
            BareItem::ByteSequence(b"hello".to_vec())
        );
        assert_eq!(item("::").unwrap(), BareItem::ByteSequence(Vec::new()));
        assert_eq!(
            item(":aGVsbG8:").unwrap(),
            BareItem::ByteSequence(b"hello".to_vec())
        );

        assert_eq!(error_index(item(":aGVsbG8=")), 9);
        assert_eq!(error_index(item(":aGVsb G8=:")), 6);
        assert_eq!(error_index(item(":aGVsbG!8=:")), 7);
        assert_eq!(error_index(item(":_-Ah:")), 1);
        assert!(item(":K:").is_err());
        assert!(item(":ab=a:").is_err());
        assert!(item(":=:").is_err());
    }

    #[test]
    fn test_strict_padding() {
        let strict = SfvOptions::new().with_base64_padding(Base64Padding::Strict);
        let parse = |s: &str| Parser::new(s).with_options(strict.clone()).parse_item();

        assert!(parse(":aGVsbG8=:").is_ok());
        assert!(parse(":aGVsbG8:").is_err());
        assert!(parse(":iZ==:").is_err());
    }

    #[test]
    fn test_parse_booleans() {
        assert_eq!(item("?1").unwrap(), BareItem::Boolean(true));
        assert_eq!(item("?0").unwrap(), BareItem::Boolean(false));
        for bad in ["?Q", "? 1", "?-0", "?T", "?True", "?"] {
            assert_eq!(error_index(item(bad)), 1, "{bad}");
        }
    }

    #[test]
    fn test_parse_dates() {
        assert_eq!(item("@1659578233").unwrap(), BareItem::Date(1_659_578_233));
        assert_eq!(item("@-1659578233").unwrap(), BareItem::Date(-1_659_578_233));
        assert_eq!(item("@0").unwrap(), BareItem::Date(0));
        assert_eq!(error_index(item("@1659578233.12")), 1);
        assert!(item("@").is_err());
        assert!(item("@abc").is_err());
    }

    #[test]
    fn test_parse_display_strings() {
        assert_eq!(
            item(r#"%"foo bar""#).unwrap(),
            BareItem::display_string("foo bar")
        );
        assert_eq!(
            item(r#"%"f%c3%bc%c3%bc""#).unwrap(),
            BareItem::display_string("f\u{fc}\u{fc}")
        );
        assert_eq!(
            item(r#"%"foo %22bar%22 \ baz""#).unwrap(),
            BareItem::display_string(r#"foo "bar" \ baz"#)
        );

        assert_eq!(error_index(item(r#"%"f%C3%BC""#)), 4);
        assert_eq!(error_index(item("%'foo'")), 1);
        assert_eq!(error_index(item(r#"%"foo"#)), 5);
        assert_eq!(error_index(item("%\"\t\"")), 2);
        assert!(item(r#"%"%c3%28""#).is_err());
        assert!(item(r#"%"%a0%a1""#).is_err());
    }

    #[test]
    fn test_rfc8941_rejects_extensions() {
        let options = SfvOptions::new().with_version(Version::Rfc8941);
        let parse = |s: &str| Parser::new(s).with_options(options.clone()).parse_item();

        assert_eq!(error_index(parse("@1659578233")), 0);
        assert_eq!(error_index(parse(r#"%"foo""#)), 0);
        assert!(parse("1").is_ok());
    }

    #[test]
    fn test_parse_parameters() {
        let item = Parser::new("abc;a=1;b=2; cde_456").parse_item().unwrap();
        assert_eq!(item.bare_item, BareItem::token("abc"));

        let keys: Vec<_> = item.params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "cde_456"]);
        assert_eq!(item.params.get("cde_456"), Some(&BareItem::Boolean(true)));

        // A repeated parameter keeps its first position
        let dup = Parser::new("text/html;a=1;b=2;a=3.0").parse_item().unwrap();
        let keys: Vec<_> = dup.params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(
            dup.params.get("a"),
            Some(&BareItem::Decimal(Decimal::from_thousandths(3000).unwrap()))
        );

        assert!(Parser::new("1;A=1").parse_item().is_err());
        assert!(Parser::new("1 ;a=1").parse_item().is_err());
        assert!(Parser::new("1;a=(1 2)").parse_item().is_err());
        assert!(Parser::new("1;").parse_item().is_err());
    }

    #[test]
    fn test_parse_list() {
        let list = Parser::new("1, 2.5, (3 4);x").parse_list().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].as_item().unwrap().bare_item, BareItem::from(1));

        let inner = list[2].as_inner_list().unwrap();
        assert_eq!(inner.items.len(), 2);
        assert_eq!(inner.params.get("x"), Some(&BareItem::Boolean(true)));

        assert!(Parser::new("").parse_list().unwrap().is_empty());
        assert!(Parser::new("   ").parse_list().unwrap().is_empty());
        assert_eq!(Parser::new("a,\tb ,  c").parse_list().unwrap().len(), 3);

        assert!(Parser::new("a,").parse_list().is_err());
        assert!(Parser::new("a b").parse_list().is_err());
        assert!(Parser::new(",a").parse_list().is_err());
        assert!(Parser::new("a,,b").parse_list().is_err());
    }

    #[test]
    fn test_parse_inner_lists() {
        let list = Parser::new("( 1  2 ), ()").parse_list().unwrap();
        assert_eq!(list[0].as_inner_list().unwrap().items.len(), 2);
        assert!(list[1].as_inner_list().unwrap().items.is_empty());

        let list = Parser::new("(1;a 2);b=?0").parse_list().unwrap();
        let inner = list[0].as_inner_list().unwrap();
        assert!(inner.items[0].params.contains_key("a"));
        assert_eq!(inner.params.get("b"), Some(&BareItem::Boolean(false)));

        assert!(Parser::new("(1 2").parse_list().is_err());
        assert!(Parser::new("(1,2)").parse_list().is_err());
        assert!(Parser::new("((1))").parse_list().is_err());
        assert!(Parser::new("(1)x").parse_list().is_err());
    }

    #[test]
    fn test_parse_dictionary() {
        let dict = Parser::new(r#"a, b=?0, c=("x" "y")"#)
            .parse_dictionary()
            .unwrap();
        let a = dict.get("a").and_then(ListEntry::as_item).unwrap();
        assert_eq!(a.bare_item, BareItem::Boolean(true));
        let b = dict.get("b").and_then(ListEntry::as_item).unwrap();
        assert_eq!(b.bare_item, BareItem::Boolean(false));
        let c = dict.get("c").and_then(ListEntry::as_inner_list).unwrap();
        assert_eq!(c.items[1].bare_item, BareItem::from("y"));

        let dict = Parser::new("a;x=1").parse_dictionary().unwrap();
        let a = dict.get("a").and_then(ListEntry::as_item).unwrap();
        assert_eq!(a.bare_item, BareItem::Boolean(true));
        assert_eq!(a.params.get("x"), Some(&BareItem::from(1)));

        assert!(Parser::new("").parse_dictionary().unwrap().is_empty());
        assert_eq!(error_index(Parser::new("a=1, B=2").parse_dictionary()), 5);
        assert!(Parser::new("a=").parse_dictionary().is_err());
        assert!(Parser::new("a=1,").parse_dictionary().is_err());
        assert!(Parser::new("a = 1").parse_dictionary().is_err());
    }

    #[test]
    fn test_parse_item_whitespace_and_trailing() {
        assert_eq!(item("  42  ").unwrap(), BareItem::Integer(42));
        assert!(item("").is_err());
        assert!(item("\t42").is_err());
        assert_eq!(error_index(item("42 x")), 3);
        assert!(Parser::new("1, 2").parse_item().is_err());
    }
}
