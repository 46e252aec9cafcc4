//! The Structured Field data model.
//!
//! This module provides the types a parsed field is made of, and the types
//! callers build before serializing one.
//!
//! ## Core Types
//!
//! - [`BareItem`]: One typed value (Boolean, Integer, Decimal, String, Token,
//!   Byte Sequence, Date, Display String)
//! - [`Decimal`]: Exact fixed-point number with three fractional digits
//! - [`Item`]: A bare item plus [`Parameters`]
//! - [`InnerList`]: A parameterized sequence of Items
//! - [`ListEntry`]: A List or Dictionary member (Item or Inner List)
//! - [`List`]: A top-level List field
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use sfv_codec::{BareItem, Decimal, InnerList, Item, List, ListEntry};
//!
//! let list: List = vec![
//!     ListEntry::from(Item::new(1)),
//!     ListEntry::from(Item::new(Decimal::try_from(2.5).unwrap())),
//!     ListEntry::from(InnerList::new(vec![Item::new(3), Item::new(4)])),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(list.len(), 3);
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use sfv_codec::{parse_item, BareItem};
//!
//! let item = parse_item("text/html;q=0.9").unwrap();
//! assert_eq!(item.bare_item.as_token(), Some("text/html"));
//! assert_eq!(item.params.get("q").and_then(BareItem::as_decimal).map(|d| d.as_f64()), Some(0.9));
//! ```

use crate::grammar::MAX_DECIMAL_INTEGER_PART;
use crate::{Error, Parameters, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Largest magnitude of a Decimal, counted in thousandths.
const MAX_THOUSANDTHS: i64 = MAX_DECIMAL_INTEGER_PART * 1000 + 999;

/// A single typed Structured Field value, without parameters.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::BareItem;
///
/// let token = BareItem::token("gzip");
/// let int = BareItem::from(42);
///
/// assert!(token.is_token());
/// assert_eq!(int.as_integer(), Some(42));
/// assert_eq!(int.as_token(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BareItem {
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    String(String),
    Token(String),
    ByteSequence(Vec<u8>),
    /// Seconds since the Unix epoch (RFC 9651).
    Date(i64),
    /// Unicode text (RFC 9651).
    DisplayString(String),
}

/// An exact decimal number with at most three fractional digits.
///
/// The value is stored as a count of thousandths, so parsing and
/// serializing never go through binary floating point.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::Decimal;
///
/// let d = Decimal::try_from(0.1).unwrap();
/// assert_eq!(d.thousandths(), 100);
/// assert_eq!(d.to_string(), "0.1");
///
/// // Rounds to three digits, ties to even
/// assert_eq!(Decimal::try_from(0.0125).unwrap().to_string(), "0.012");
/// assert!(Decimal::try_from(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal(i64);

impl Decimal {
    /// Zero.
    pub const ZERO: Decimal = Decimal(0);

    /// Creates a Decimal from a count of thousandths (`1500` is `1.5`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DecimalOutOfRange`] if the integer part has more than
    /// twelve digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::Decimal;
    ///
    /// assert_eq!(Decimal::from_thousandths(-1500).unwrap().to_string(), "-1.5");
    /// assert!(Decimal::from_thousandths(999_999_999_999_999).is_ok());
    /// assert!(Decimal::from_thousandths(1_000_000_000_000_000).is_err());
    /// ```
    pub fn from_thousandths(thousandths: i64) -> Result<Self> {
        match thousandths.checked_abs() {
            Some(abs) if abs <= MAX_THOUSANDTHS => Ok(Decimal(thousandths)),
            _ => Err(Error::DecimalOutOfRange(format!(
                "{} thousandths",
                thousandths
            ))),
        }
    }

    /// Builds a Decimal from input the parser has already range-checked.
    pub(crate) const fn from_thousandths_unchecked(thousandths: i64) -> Self {
        Decimal(thousandths)
    }

    /// Returns the value as a count of thousandths.
    #[inline]
    #[must_use]
    pub const fn thousandths(&self) -> i64 {
        self.0
    }

    /// Returns the integer part, truncated toward zero.
    #[inline]
    #[must_use]
    pub const fn integer_part(&self) -> i64 {
        self.0 / 1000
    }

    /// Returns the fractional digits as an unsigned count of thousandths.
    #[inline]
    #[must_use]
    pub const fn fraction_thousandths(&self) -> u64 {
        self.0.unsigned_abs() % 1000
    }

    /// Returns `true` if the value is below zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Converts to the nearest `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

/// Renders the canonical form: trailing zeros dropped, at least one
/// fractional digit kept.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{}.", abs / 1000)?;

        let frac = abs % 1000;
        if frac == 0 {
            f.write_str("0")
        } else {
            let digits = format!("{:03}", frac);
            f.write_str(digits.trim_end_matches('0'))
        }
    }
}

impl TryFrom<f64> for Decimal {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NonFiniteDecimal);
        }

        let rounded = round_half_even(value * 1000.0);
        if rounded.abs() > MAX_THOUSANDTHS as f64 {
            return Err(Error::DecimalOutOfRange(value.to_string()));
        }

        Decimal::from_thousandths(rounded as i64)
    }
}

impl TryFrom<i64> for Decimal {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value.checked_mul(1000) {
            Some(thousandths) => Decimal::from_thousandths(thousandths),
            None => Err(Error::DecimalOutOfRange(value.to_string())),
        }
    }
}

impl From<Decimal> for f64 {
    fn from(value: Decimal) -> Self {
        value.as_f64()
    }
}

fn round_half_even(v: f64) -> f64 {
    let trunc = v.trunc();
    if (v - trunc).abs() == 0.5 {
        if trunc % 2.0 == 0.0 {
            trunc
        } else {
            trunc + v.signum()
        }
    } else {
        v.round()
    }
}

impl BareItem {
    /// Creates a Token bare item. The token is validated when serialized.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        BareItem::Token(token.into())
    }

    /// Creates a Display String bare item.
    #[must_use]
    pub fn display_string(text: impl Into<String>) -> Self {
        BareItem::DisplayString(text.into())
    }

    /// Creates a Date bare item from seconds since the Unix epoch.
    #[must_use]
    pub const fn date(seconds: i64) -> Self {
        BareItem::Date(seconds)
    }

    /// Returns the kind name used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            BareItem::Boolean(_) => "Boolean",
            BareItem::Integer(_) => "Integer",
            BareItem::Decimal(_) => "Decimal",
            BareItem::String(_) => "String",
            BareItem::Token(_) => "Token",
            BareItem::ByteSequence(_) => "Byte Sequence",
            BareItem::Date(_) => "Date",
            BareItem::DisplayString(_) => "Display String",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, BareItem::Boolean(_))
    }

    /// Returns `true` for Boolean `true`, the value a bare key stands for in
    /// Dictionaries and Parameters.
    #[inline]
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, BareItem::Boolean(true))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, BareItem::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, BareItem::Decimal(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, BareItem::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, BareItem::Token(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_byte_sequence(&self) -> bool {
        matches!(self, BareItem::ByteSequence(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, BareItem::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_display_string(&self) -> bool {
        matches!(self, BareItem::DisplayString(_))
    }

    /// If the value is a Boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            BareItem::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an Integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            BareItem::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a Decimal, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            BareItem::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// If the value is a String, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::BareItem;
    ///
    /// assert_eq!(BareItem::from("hello").as_str(), Some("hello"));
    /// assert_eq!(BareItem::token("hello").as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BareItem::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a Token, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_token(&self) -> Option<&str> {
        match self {
            BareItem::Token(t) => Some(t),
            _ => None,
        }
    }

    /// If the value is a Byte Sequence, returns its bytes. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_byte_sequence(&self) -> Option<&[u8]> {
        match self {
            BareItem::ByteSequence(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// If the value is a Date, returns its seconds. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<i64> {
        match self {
            BareItem::Date(seconds) => Some(*seconds),
            _ => None,
        }
    }

    /// If the value is a Date representable as a UTC timestamp, returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::BareItem;
    ///
    /// let date = BareItem::date(1659578233);
    /// let dt = date.as_datetime().unwrap();
    /// assert_eq!(dt.to_rfc3339(), "2022-08-04T01:57:13+00:00");
    /// ```
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            BareItem::Date(seconds) => DateTime::from_timestamp(*seconds, 0),
            _ => None,
        }
    }

    /// If the value is a Display String, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_display_string(&self) -> Option<&str> {
        match self {
            BareItem::DisplayString(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for BareItem {
    fn from(value: bool) -> Self {
        BareItem::Boolean(value)
    }
}

impl From<i32> for BareItem {
    fn from(value: i32) -> Self {
        BareItem::Integer(value as i64)
    }
}

impl From<u32> for BareItem {
    fn from(value: u32) -> Self {
        BareItem::Integer(value as i64)
    }
}

impl From<i64> for BareItem {
    fn from(value: i64) -> Self {
        BareItem::Integer(value)
    }
}

impl From<Decimal> for BareItem {
    fn from(value: Decimal) -> Self {
        BareItem::Decimal(value)
    }
}

impl From<String> for BareItem {
    fn from(value: String) -> Self {
        BareItem::String(value)
    }
}

impl From<&str> for BareItem {
    fn from(value: &str) -> Self {
        BareItem::String(value.to_string())
    }
}

impl From<Vec<u8>> for BareItem {
    fn from(value: Vec<u8>) -> Self {
        BareItem::ByteSequence(value)
    }
}

impl From<&[u8]> for BareItem {
    fn from(value: &[u8]) -> Self {
        BareItem::ByteSequence(value.to_vec())
    }
}

/// Truncates to whole seconds.
impl From<DateTime<Utc>> for BareItem {
    fn from(value: DateTime<Utc>) -> Self {
        BareItem::Date(value.timestamp())
    }
}

impl TryFrom<BareItem> for i64 {
    type Error = Error;

    fn try_from(value: BareItem) -> Result<Self> {
        match value {
            BareItem::Integer(i) => Ok(i),
            other => Err(Error::custom(format!(
                "expected Integer, found {}",
                other.kind()
            ))),
        }
    }
}

impl TryFrom<BareItem> for bool {
    type Error = Error;

    fn try_from(value: BareItem) -> Result<Self> {
        match value {
            BareItem::Boolean(b) => Ok(b),
            other => Err(Error::custom(format!(
                "expected Boolean, found {}",
                other.kind()
            ))),
        }
    }
}

/// Accepts Strings, Tokens and Display Strings.
impl TryFrom<BareItem> for String {
    type Error = Error;

    fn try_from(value: BareItem) -> Result<Self> {
        match value {
            BareItem::String(s) | BareItem::Token(s) | BareItem::DisplayString(s) => Ok(s),
            other => Err(Error::custom(format!(
                "expected String, found {}",
                other.kind()
            ))),
        }
    }
}

/// A bare item with its parameters.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{BareItem, Item, Parameters};
///
/// let mut params = Parameters::new();
/// params.insert("q".to_string(), BareItem::from(1));
///
/// let item = Item::with_params(BareItem::token("gzip"), params);
/// assert_eq!(item.params.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Item {
    pub bare_item: BareItem,
    pub params: Parameters,
}

impl Default for BareItem {
    fn default() -> Self {
        BareItem::Boolean(true)
    }
}

impl Item {
    /// Creates an Item without parameters.
    #[must_use]
    pub fn new(bare_item: impl Into<BareItem>) -> Self {
        Item {
            bare_item: bare_item.into(),
            params: Parameters::new(),
        }
    }

    /// Creates an Item with parameters.
    #[must_use]
    pub fn with_params(bare_item: impl Into<BareItem>, params: Parameters) -> Self {
        Item {
            bare_item: bare_item.into(),
            params,
        }
    }
}

impl From<BareItem> for Item {
    fn from(bare_item: BareItem) -> Self {
        Item::new(bare_item)
    }
}

/// A parenthesized sequence of Items with its own parameters.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InnerList {
    pub items: Vec<Item>,
    pub params: Parameters,
}

impl InnerList {
    /// Creates an Inner List without parameters.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        InnerList {
            items,
            params: Parameters::new(),
        }
    }

    /// Creates an Inner List with parameters.
    #[must_use]
    pub fn with_params(items: Vec<Item>, params: Parameters) -> Self {
        InnerList { items, params }
    }
}

/// A member of a List or value of a Dictionary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListEntry {
    Item(Item),
    InnerList(InnerList),
}

impl ListEntry {
    /// If the entry is an Item, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            ListEntry::Item(item) => Some(item),
            ListEntry::InnerList(_) => None,
        }
    }

    /// If the entry is an Inner List, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_inner_list(&self) -> Option<&InnerList> {
        match self {
            ListEntry::InnerList(inner) => Some(inner),
            ListEntry::Item(_) => None,
        }
    }

    /// Returns the parameters of the Item or Inner List.
    #[must_use]
    pub fn params(&self) -> &Parameters {
        match self {
            ListEntry::Item(item) => &item.params,
            ListEntry::InnerList(inner) => &inner.params,
        }
    }
}

impl From<Item> for ListEntry {
    fn from(item: Item) -> Self {
        ListEntry::Item(item)
    }
}

impl From<InnerList> for ListEntry {
    fn from(inner: InnerList) -> Self {
        ListEntry::InnerList(inner)
    }
}

impl From<BareItem> for ListEntry {
    fn from(bare_item: BareItem) -> Self {
        ListEntry::Item(Item::new(bare_item))
    }
}

/// A List field value.
///
/// Dereferences to a slice of [`ListEntry`].
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{BareItem, List};
///
/// let mut list = List::new();
/// list.push(BareItem::token("a").into());
/// list.push(BareItem::from(2).into());
///
/// assert_eq!(list.len(), 2);
/// assert!(list[0].as_item().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct List(Vec<ListEntry>);

impl List {
    /// Creates an empty List.
    #[must_use]
    pub fn new() -> Self {
        List(Vec::new())
    }

    /// Appends a member.
    pub fn push(&mut self, entry: ListEntry) {
        self.0.push(entry);
    }

    /// Returns the members as a vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<ListEntry> {
        self.0
    }
}

impl Deref for List {
    type Target = [ListEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ListEntry>> for List {
    fn from(entries: Vec<ListEntry>) -> Self {
        List(entries)
    }
}

impl FromIterator<ListEntry> for List {
    fn from_iter<T: IntoIterator<Item = ListEntry>>(iter: T) -> Self {
        List(iter.into_iter().collect())
    }
}

impl IntoIterator for List {
    type Item = ListEntry;
    type IntoIter = std::vec::IntoIter<ListEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a ListEntry;
    type IntoIter = std::slice::Iter<'a, ListEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for List {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::Parser::new(s).parse_list()
    }
}

impl FromStr for crate::Dictionary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::Parser::new(s).parse_dictionary()
    }
}

impl FromStr for Item {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::Parser::new(s).parse_item()
    }
}

// Field values travel through serde as their canonical string, so a typed
// header can sit inside any serde-derived struct.

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = crate::serialize_list(self).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl Serialize for crate::Dictionary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = crate::serialize_dictionary(self).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = crate::serialize_item(self).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&s)
    }
}

struct FieldValueVisitor<T>(&'static str, std::marker::PhantomData<T>);

impl<'de, T> serde::de::Visitor<'de> for FieldValueVisitor<T>
where
    T: FromStr<Err = Error>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a structured field {} string", self.0)
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<T, E>
    where
        E: serde::de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(FieldValueVisitor("list", std::marker::PhantomData))
    }
}

impl<'de> Deserialize<'de> for crate::Dictionary {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(FieldValueVisitor(
            "dictionary",
            std::marker::PhantomData,
        ))
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(FieldValueVisitor("item", std::marker::PhantomData))
    }
}
