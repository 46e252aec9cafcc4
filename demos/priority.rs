//! Reading and rewriting an HTTP Priority header (RFC 9218).
//!
//! Run with: cargo run --example priority

use sfv_codec::{parse_dictionary, serialize_dictionary, BareItem, Item, ListEntry};
use std::error::Error;

const DEFAULT_URGENCY: i64 = 3;

fn main() -> Result<(), Box<dyn Error>> {
    let header = "u=5,   i, x-vendor=\"kept\"";
    let mut priority = parse_dictionary(header).ok_or("malformed Priority header")?;

    let urgency = priority
        .get("u")
        .and_then(ListEntry::as_item)
        .and_then(|item| item.bare_item.as_integer())
        .unwrap_or(DEFAULT_URGENCY);
    let incremental = priority
        .get("i")
        .and_then(ListEntry::as_item)
        .and_then(|item| item.bare_item.as_boolean())
        .unwrap_or(false);

    println!("Received:    {}", header);
    println!("urgency={} incremental={}", urgency, incremental);

    // Raise the urgency; unknown members are carried through untouched
    priority.insert("u".to_string(), Item::new(BareItem::from(urgency - 2)).into());
    println!("Rewritten:   {}", serialize_dictionary(&priority)?);

    // A malformed field is treated as absent
    for bad in ["u=1, U=2", "u=8.0.1", "u=1,"] {
        println!("{:<12} -> {:?}", bad, parse_dictionary(bad).map(|d| d.len()));
    }

    Ok(())
}
