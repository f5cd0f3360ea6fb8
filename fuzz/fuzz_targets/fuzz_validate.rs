#![no_main]

use libfuzzer_sys::fuzz_target;
use mg_core::Dialect;

// Validators must be total and deterministic over arbitrary UTF-8.
fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for dialect in Dialect::ALL {
            let first = mg_validate::validate(dialect, input);
            let second = mg_validate::validate(dialect, input);
            assert_eq!(first, second);
        }
    }
});
