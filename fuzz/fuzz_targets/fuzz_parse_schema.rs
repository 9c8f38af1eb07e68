#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(schema) = action_validator::parse_schema(&s) {
        let _ = action_validator::validate_schema(&schema, &Default::default());
    }
});
