#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok((country, number)) = regon_lookup::vat::resolve_vat_id(s, "PL") {
            assert_eq!(country, "PL");
            assert_eq!(number.len(), 10);
            assert!(number.bytes().all(|b| b.is_ascii_digit()));
        }
    }
});
