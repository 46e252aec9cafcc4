//! Building field values in code and serializing them canonically.
//!
//! Run with: cargo run --example build_values

use chrono::{TimeZone, Utc};
use sfv_codec::{
    serialize_dictionary, serialize_item, serialize_list, BareItem, Decimal, Dictionary,
    InnerList, Item, List, ListEntry, Parameters,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Accept-style list with quality parameters
    let mut q = Parameters::new();
    q.insert("q".to_string(), Decimal::try_from(0.8)?.into());

    let accept: List = vec![
        ListEntry::from(Item::new(BareItem::token("text/html"))),
        ListEntry::from(Item::with_params(BareItem::token("*/*"), q)),
    ]
    .into_iter()
    .collect();
    println!("Accept:          {}", serialize_list(&accept)?);

    // Signature-Input style dictionary holding an inner list
    let mut sig_params = Parameters::new();
    sig_params.insert("created".to_string(), BareItem::from(1_618_884_473i64));
    sig_params.insert("keyid".to_string(), BareItem::from("test-key"));

    let covered = InnerList::with_params(
        vec![Item::new("@method"), Item::new("@path"), Item::new("content-type")],
        sig_params,
    );
    let signature_input: Dictionary = vec![("sig1", ListEntry::from(covered))]
        .into_iter()
        .collect();
    println!("Signature-Input: {}", serialize_dictionary(&signature_input)?);

    // Byte sequences, dates and display strings
    let digest = Item::new(BareItem::from(b"not a real digest".to_vec()));
    println!("Digest:          {}", serialize_item(&digest)?);

    let expires = Utc.with_ymd_and_hms(2022, 8, 4, 1, 57, 13).unwrap();
    println!("Date:            {}", serialize_item(&Item::new(expires))?);

    let title = Item::new(BareItem::display_string("Gr\u{fc}\u{df}e, 100%"));
    println!("Display String:  {}", serialize_item(&title)?);

    // Invalid values are refused rather than coerced
    let bad = Item::new(BareItem::token("not a token"));
    match serialize_item(&bad) {
        Ok(s) => println!("unexpected: {}", s),
        Err(e) => println!("Refused:         {}", e),
    }

    Ok(())
}
