#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let result = action_validator::image::validate_image_name(&s, "image-name");
    if result.is_valid() {
        assert!(!s.chars().any(|c| c.is_uppercase() || c.is_whitespace()));
    }
});
