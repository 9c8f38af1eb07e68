#![no_main]

use action_validator::ValidatorConfig;
use action_validator::enums::Ecosystem;
use action_validator::version::validate_version;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let config = ValidatorConfig::default();
    for ecosystem in Ecosystem::ALL {
        let result = validate_version(ecosystem, &s, "version", &config);
        assert_eq!(result.is_valid(), result.diagnostics().is_empty());
    }
});
