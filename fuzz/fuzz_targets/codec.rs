#![no_main]
use libfuzzer_sys::fuzz_target;
use shangmi::codec;

fuzz_target!(|data: &[u8]| {
    let hex = codec::bytes_to_hex(data);
    assert_eq!(codec::hex_to_bytes(&hex).unwrap(), data);

    let signed = codec::to_signed(data);
    assert_eq!(codec::to_unsigned(&signed), data);

    if let Ok(text) = core::str::from_utf8(data) {
        let _ = codec::hex_to_bytes(text);
        assert_eq!(codec::utf8_text_to_signed_bytes(text), signed);
        assert_eq!(codec::signed_bytes_to_utf8_text(&signed).unwrap(), text);
    }
});
