//! Structured Field grammar reference and character classifiers.
//!
//! This module documents the grammar implemented by this library and holds
//! the classification helpers shared by the parser ([`crate::de`]) and the
//! serializer ([`crate::ser`]).
//!
//! # Top-level types
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | List | members separated by `,` and optional whitespace | `1, 2.5, (3 4);x` |
//! | Dictionary | `key[=member]` separated by `,` | `a, b=?0, c=("x" "y")` |
//! | Item | a bare item followed by parameters | `"abc";q=0.5` |
//!
//! A member is either an Item or an Inner List: `(` items separated by spaces
//! `)` followed by parameters. Inner Lists do not nest.
//!
//! # Bare items
//!
//! ```text
//! sf-boolean = "?" ( "0" / "1" )
//! sf-integer = [ "-" ] 1*15DIGIT
//! sf-decimal = [ "-" ] 1*12DIGIT "." 1*3DIGIT
//! sf-string  = DQUOTE *( unescaped / "\" DQUOTE / "\" "\" ) DQUOTE
//! sf-token   = ( ALPHA / "*" ) *( tchar / ":" / "/" )
//! sf-binary  = ":" *base64-char ":"
//! sf-date    = "@" sf-integer                      ; RFC 9651
//! sf-displaystring = "%" DQUOTE *( unescaped / "%" 2lc-hexdig ) DQUOTE
//! ```
//!
//! # Parameters and keys
//!
//! ```text
//! parameters = *( ";" *SP key [ "=" bare-item ] )
//! key        = ( lcalpha / "*" ) *( lcalpha / DIGIT / "_" / "-" / "." / "*" )
//! ```
//!
//! A parameter or dictionary member without `=` has the value Boolean `true`.
//! When a parameter key repeats, the last value replaces the earlier one in
//! place. A repeated dictionary key moves to the position of its last
//! occurrence.

/// Largest magnitude of an Integer or Date.
pub const MAX_INTEGER: i64 = 999_999_999_999_999;

/// Smallest Integer or Date.
pub const MIN_INTEGER: i64 = -MAX_INTEGER;

/// Largest magnitude of the integer part of a Decimal.
pub const MAX_DECIMAL_INTEGER_PART: i64 = 999_999_999_999;

pub const MAX_INTEGER_DIGITS: usize = 15;
pub const MAX_DECIMAL_INTEGER_DIGITS: usize = 12;
pub const MAX_DECIMAL_FRACTION_DIGITS: usize = 3;

/// Returns `true` if `b` may start a key (`lcalpha / "*"`).
#[inline]
pub const fn is_key_start(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'*')
}

/// Returns `true` if `b` may appear after the first character of a key.
#[inline]
pub const fn is_key_char(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b'*')
}

/// Returns `true` if `key` matches `[a-z*][a-z0-9_\-.*]*`.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::grammar::is_valid_key;
///
/// assert!(is_valid_key("max-age"));
/// assert!(is_valid_key("*"));
/// assert!(!is_valid_key("Max-Age"));
/// assert!(!is_valid_key(""));
/// ```
pub fn is_valid_key(key: &str) -> bool {
    match key.as_bytes().split_first() {
        Some((&first, rest)) => is_key_start(first) && rest.iter().all(|&b| is_key_char(b)),
        None => false,
    }
}

/// Returns `true` if `b` may start a token (`ALPHA / "*"`).
#[inline]
pub const fn is_token_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'*')
}

/// Returns `true` if `b` is a `tchar`, `:` or `/`.
#[inline]
pub const fn is_token_char(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'#'
            | b'$'
            | b'%'
            | b'&'
            | b'\''
            | b'*'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~'
            | b':'
            | b'/'
            | b'0'..=b'9'
            | b'A'..=b'Z'
            | b'a'..=b'z'
    )
}

/// Returns `true` if `token` matches the sf-token grammar.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::grammar::is_valid_token;
///
/// assert!(is_valid_token("text/html"));
/// assert!(is_valid_token("*foo"));
/// assert!(!is_valid_token("1abc"));
/// assert!(!is_valid_token("a b"));
/// ```
pub fn is_valid_token(token: &str) -> bool {
    match token.as_bytes().split_first() {
        Some((&first, rest)) => is_token_start(first) && rest.iter().all(|&b| is_token_char(b)),
        None => false,
    }
}

/// Returns `true` if `b` may appear in a String, escaped or not.
#[inline]
pub const fn is_string_char(b: u8) -> bool {
    matches!(b, 0x20..=0x7e)
}

/// Returns `true` if every character of `s` is printable ASCII.
pub fn is_valid_string(s: &str) -> bool {
    s.bytes().all(is_string_char)
}

/// Returns `true` if `b` belongs to the standard base64 alphabet (padding excluded).
#[inline]
pub const fn is_base64_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/')
}

/// Returns `true` if `v` fits the Integer range.
#[inline]
pub const fn is_integer_in_range(v: i64) -> bool {
    v >= MIN_INTEGER && v <= MAX_INTEGER
}

/// Optional whitespace between list and dictionary members.
#[inline]
pub const fn is_ows(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}
