//! Restricting the grammar to RFC 8941 for peers that predate RFC 9651.
//!
//! Run with: cargo run --example rfc8941_mode

use sfv_codec::{
    parse_item_with_options, serialize_item_with_options, Base64Padding, BareItem, Item, Parser,
    SfvOptions,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let modern = SfvOptions::new();
    let legacy = SfvOptions::rfc8941();

    for input in ["@1659578233", "%\"caf%c3%a9\"", "42"] {
        println!(
            "{:<16} RFC 9651: {:<5} RFC 8941: {}",
            input,
            parse_item_with_options(input, &modern).is_some(),
            parse_item_with_options(input, &legacy).is_some(),
        );
    }

    let date = Item::new(BareItem::date(1_659_578_233));
    println!("\nSerialize Date, RFC 9651: {}", serialize_item_with_options(&date, &modern)?);
    if let Err(e) = serialize_item_with_options(&date, &legacy) {
        println!("Serialize Date, RFC 8941: {}", e);
    }

    // Strict padding surfaces the exact failure position
    let strict = SfvOptions::new().with_base64_padding(Base64Padding::Strict);
    match Parser::new(":aGVsbG8:").with_options(strict).parse_item() {
        Ok(item) => println!("\nparsed {:?}", item.bare_item),
        Err(e) => println!("\nStrict padding: {}", e),
    }

    Ok(())
}
