//! Fuzz target for tagged line decoding
//!
//! Feeds arbitrary UTF-8 to the tag parser and both decoder conventions
//! and checks that none of them panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;
use twitch_tags::{decode, parse_tags, Decoder, DecoderConfig, EventKind};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        // TMI lines are capped well below this
        if input.is_empty() || input.len() > 8192 {
            return;
        }

        let _ = parse_tags(input);
        let _ = decode(input, EventKind::ChatMessage);
        let _ = decode(input, EventKind::Resub);

        let tmi = Decoder::new(DecoderConfig::tmi());
        let _ = tmi.decode(input, EventKind::ChatMessage);
        let _ = tmi.decode(input, EventKind::Resub);
    }
});
