#![no_main]
use libfuzzer_sys::fuzz_target;
use shangmi::padding::{pad_block, pad_to_block, strip_block_padding, unpad_block};

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must be rejected cleanly, never panic.
    if let Ok(unpadded) = unpad_block(data) {
        assert_eq!(pad_block(unpadded), data);
    }
    if let Ok(hex) = core::str::from_utf8(data) {
        let _ = strip_block_padding(hex);
    }

    let text = String::from_utf8_lossy(data);
    let padded = pad_to_block(&text);
    assert_eq!(padded.len() % 32, 0);
    assert_eq!(strip_block_padding(&padded).unwrap(), text);
});
