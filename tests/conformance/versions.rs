use super::common::{kind_name, read_suite};
use action_validator::ValidatorConfig;
use action_validator::enums::{Ecosystem, VersionShape};
use action_validator::version::{parse_version_specifier, validate_version};

#[derive(Debug, serde::Deserialize)]
struct TestCase {
    name: String,
    id: String,
    input: Input,
    expected: Expected,
}

#[derive(Debug, serde::Deserialize)]
struct Input {
    ecosystem: Ecosystem,
    value: String,
}

#[derive(Debug, serde::Deserialize)]
struct Expected {
    valid: bool,
    #[serde(default)]
    shape: Option<VersionShape>,
    #[serde(default)]
    kind: Option<String>,
}

#[test]
fn version_conformance_suite() {
    let cases: Vec<TestCase> = serde_saphyr::from_str(&read_suite("versions.yaml")).unwrap();
    let config = ValidatorConfig::default();

    let mut passed = 0;
    let mut failed = 0;

    for case in &cases {
        let result = validate_version(case.input.ecosystem, &case.input.value, "version", &config);

        let mut ok = result.is_valid() == case.expected.valid;
        if ok && let Some(shape) = case.expected.shape {
            let spec = parse_version_specifier(case.input.ecosystem, &case.input.value, "version", &config);
            ok = spec.as_ref().map(|s| s.shape == shape).unwrap_or(false);
        }
        if ok && let Some(kind) = &case.expected.kind {
            ok = result.diagnostics().len() == 1 && kind_name(&result.diagnostics()[0].kind) == kind;
        }

        if ok {
            passed += 1;
        } else {
            eprintln!(
                "  FAIL [{}] {}: {:?} → {:?}",
                case.id,
                case.name,
                case.input.value,
                result.messages()
            );
            failed += 1;
        }
    }

    eprintln!(
        "\nversions: {} passed, {} failed out of {} total",
        passed,
        failed,
        cases.len()
    );
    assert_eq!(failed, 0, "{} version conformance tests failed", failed);
}
