#![no_main]

use codepoint_core::boundary::{utf16, utf8};
use codepoint_core::BoundaryError;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    let rest = utf16::remove_last_scalar_value(&units);
    assert!(units.starts_with(rest));
    let rest = utf16::remove_first_scalar_value(&units);
    assert!(units.ends_with(rest));

    match utf16::last_scalar_value(&units) {
        Ok(c) => {
            let mut buf = [0u16; 2];
            assert!(units.ends_with(c.encode_utf16(&mut buf)));
        }
        Err(BoundaryError::UnpairedSurrogate { index, unit }) => assert_eq!(units[index], unit),
        Err(BoundaryError::InvalidArgument { .. }) => assert!(units.is_empty()),
    }

    let text = String::from_utf8_lossy(data);
    if let Ok(last) = utf8::last_scalar_value(&text) {
        let mut rebuilt = utf8::remove_last_scalar_value(&text).to_string();
        rebuilt.push(last);
        assert_eq!(rebuilt, text);
    }
    if let Ok(first) = utf8::first_scalar_value(&text) {
        assert_eq!(format!("{first}{}", utf8::remove_first_scalar_value(&text)), text);
    }
});
