//! Fuzz target for CSS length parsing.
//!
//! Any accepted length must print back to a string that parses to the same value.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slideout_core::Length;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    if let Ok(length) = input.parse::<Length>() {
        let printed = length.to_string();
        let reparsed: Length = printed
            .parse()
            .expect("printed length must parse");
        assert_eq!(reparsed.unit, length.unit);
        assert_eq!(reparsed.value, length.value);
    }
});
