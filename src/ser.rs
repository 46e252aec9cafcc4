//! Structured Field serialization.
//!
//! This module provides the [`Serializer`] that renders Lists, Dictionaries
//! and Items in their canonical form.
//!
//! ## Overview
//!
//! The output does not depend on how a value was produced:
//!
//! - **Members** are joined with `", "`, Inner List items with a single space
//! - **Parameters** follow their value as `;key` or `;key=value`, in map order
//! - **Decimals** keep one to three fractional digits, with trailing zeros dropped
//! - **Bare `true`** dictionary members and parameters are written as the key alone
//!
//! Values are validated as they are written. An out-of-range Integer, a key
//! or Token outside its grammar, or a String with non-printable characters
//! fails the whole serialization.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use sfv_codec::{BareItem, Item, Serializer, SfvOptions};
//!
//! let mut serializer = Serializer::new(SfvOptions::new());
//! serializer.write_item(&Item::new(BareItem::token("gzip"))).unwrap();
//! assert_eq!(serializer.into_inner(), "gzip");
//! ```

use crate::grammar::{
    is_integer_in_range, is_string_char, is_valid_key, is_valid_string, is_valid_token,
};
use crate::options::SfvOptions;
use crate::value::{BareItem, InnerList, Item, List, ListEntry};
use crate::{Dictionary, Error, Parameters, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The Structured Field serializer.
///
/// Writes into an internal buffer. On error the buffer holds a partial
/// value and should be discarded.
pub struct Serializer {
    output: String,
    options: SfvOptions,
}

impl Serializer {
    /// Creates a serializer with an empty buffer.
    pub fn new(options: SfvOptions) -> Self {
        Serializer {
            output: String::with_capacity(64),
            options,
        }
    }

    /// Consumes the serializer and returns the written field value.
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes a List. An empty List writes nothing.
    pub fn write_list(&mut self, list: &List) -> Result<()> {
        for (i, entry) in list.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.write_list_entry(entry)?;
        }
        Ok(())
    }

    /// Writes a Dictionary. An empty Dictionary writes nothing.
    pub fn write_dictionary(&mut self, dict: &Dictionary) -> Result<()> {
        for (i, (key, entry)) in dict.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.write_key(key)?;

            match entry {
                ListEntry::Item(item) if item.bare_item.is_true() => {
                    self.write_parameters(&item.params)?;
                }
                _ => {
                    self.output.push('=');
                    self.write_list_entry(entry)?;
                }
            }
        }
        Ok(())
    }

    /// Writes an Item and its parameters.
    pub fn write_item(&mut self, item: &Item) -> Result<()> {
        self.write_bare_item(&item.bare_item)?;
        self.write_parameters(&item.params)
    }

    /// Writes an Inner List and its parameters.
    pub fn write_inner_list(&mut self, inner: &InnerList) -> Result<()> {
        self.output.push('(');
        for (i, item) in inner.items.iter().enumerate() {
            if i > 0 {
                self.output.push(' ');
            }
            self.write_item(item)?;
        }
        self.output.push(')');
        self.write_parameters(&inner.params)
    }

    /// Writes parameters in map order, `;key` for `true` and `;key=value` otherwise.
    pub fn write_parameters(&mut self, params: &Parameters) -> Result<()> {
        for (key, value) in params.iter() {
            self.output.push(';');
            self.write_key(key)?;
            if !value.is_true() {
                self.output.push('=');
                self.write_bare_item(value)?;
            }
        }
        Ok(())
    }

    /// Writes a single bare item, validating it first.
    pub fn write_bare_item(&mut self, value: &BareItem) -> Result<()> {
        match value {
            BareItem::Boolean(b) => self.output.push_str(if *b { "?1" } else { "?0" }),
            BareItem::Integer(i) => self.write_integer(*i)?,
            BareItem::Decimal(d) => self.output.push_str(&d.to_string()),
            BareItem::String(s) => self.write_string(s)?,
            BareItem::Token(t) => {
                if !is_valid_token(t) {
                    return Err(Error::invalid_token(t));
                }
                self.output.push_str(t);
            }
            BareItem::ByteSequence(bytes) => {
                self.output.push(':');
                STANDARD.encode_string(bytes, &mut self.output);
                self.output.push(':');
            }
            BareItem::Date(seconds) => {
                if !self.options.version.supports_dates() {
                    return Err(self.unsupported(value));
                }
                self.output.push('@');
                self.write_integer(*seconds)?;
            }
            BareItem::DisplayString(text) => {
                if !self.options.version.supports_display_strings() {
                    return Err(self.unsupported(value));
                }
                self.write_display_string(text);
            }
        }
        Ok(())
    }

    fn write_list_entry(&mut self, entry: &ListEntry) -> Result<()> {
        match entry {
            ListEntry::Item(item) => self.write_item(item),
            ListEntry::InnerList(inner) => self.write_inner_list(inner),
        }
    }

    fn write_key(&mut self, key: &str) -> Result<()> {
        if !is_valid_key(key) {
            return Err(Error::invalid_key(key));
        }
        self.output.push_str(key);
        Ok(())
    }

    fn write_integer(&mut self, value: i64) -> Result<()> {
        if !is_integer_in_range(value) {
            return Err(Error::IntegerOutOfRange(value));
        }
        self.output.push_str(&value.to_string());
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<()> {
        if !is_valid_string(s) {
            return Err(Error::invalid_string(s));
        }

        self.output.push('"');
        for ch in s.chars() {
            if ch == '"' || ch == '\\' {
                self.output.push('\\');
            }
            self.output.push(ch);
        }
        self.output.push('"');
        Ok(())
    }

    /// Percent-encodes `%`, `"` and every byte outside printable ASCII.
    fn write_display_string(&mut self, text: &str) {
        self.output.push_str("%\"");
        for b in text.bytes() {
            if b == b'%' || b == b'"' || !is_string_char(b) {
                self.output.push('%');
                self.output.push(char::from(HEX_DIGITS[usize::from(b >> 4)]));
                self.output.push(char::from(HEX_DIGITS[usize::from(b & 0x0f)]));
            } else {
                self.output.push(char::from(b));
            }
        }
        self.output.push('"');
    }

    fn unsupported(&self, value: &BareItem) -> Error {
        Error::unsupported_bare_item(value.kind(), self.options.version.as_str())
    }
}
