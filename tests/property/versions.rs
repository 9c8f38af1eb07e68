use action_validator::enums::{Ecosystem, GrammarKind, VersionShape};
use action_validator::{DiagnosticKind, ValidatorConfig};
use action_validator::version::{parse_version_specifier, validate_version};
use proptest::prelude::*;

const NUMERIC_ECOSYSTEMS: [Ecosystem; 5] = Ecosystem::ALL;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn dotted_numeric_versions_are_exact_everywhere(
        major in 1u32..=999,
        minor in 0u32..=999,
        patch in 0u32..=999,
    ) {
        let config = ValidatorConfig::default();
        let value = format!("{}.{}.{}", major, minor, patch);
        for ecosystem in NUMERIC_ECOSYSTEMS {
            let spec = parse_version_specifier(ecosystem, &value, "version", &config);
            prop_assert!(spec.is_ok(), "{:?} rejected {}: {:?}", ecosystem, value, spec);
            prop_assert_eq!(spec.unwrap().shape, VersionShape::Exact);
        }
    }

    #[test]
    fn terraform_pessimistic_constraints_accepted(major in 0u32..=99, minor in 0u32..=99) {
        let value = format!("~> {}.{}", major, minor);
        let result = validate_version(Ecosystem::Terraform, &value, "terraform-version", &ValidatorConfig::default());
        prop_assert!(result.is_valid(), "{}: {:?}", value, result.messages());
    }

    #[test]
    fn python_bounded_ranges_accepted(low in 0u32..=20, high in 0u32..=20) {
        let value = format!(">=3.{},<3.{}", low, high);
        let result = validate_version(Ecosystem::Python, &value, "python-version", &ValidatorConfig::default());
        prop_assert!(result.is_valid(), "{}: {:?}", value, result.messages());
    }

    #[test]
    fn rejections_name_value_input_and_ecosystem(value in "\\PC{0,24}") {
        let config = ValidatorConfig::default();
        for ecosystem in Ecosystem::ALL {
            let result = validate_version(ecosystem, &value, "tool-version", &config);
            if result.is_valid() {
                continue;
            }
            prop_assert_eq!(result.diagnostics().len(), 1);
            let diagnostic = &result.diagnostics()[0];
            prop_assert_eq!(diagnostic.field.as_str(), "tool-version");
            prop_assert!(diagnostic.message.contains("'tool-version'"), "{}", diagnostic.message);
            prop_assert!(diagnostic.message.contains(value.as_str()), "{}", diagnostic.message);
            let own_kind = match &diagnostic.kind {
                DiagnosticKind::EmptyValueRejected => value.is_empty(),
                DiagnosticKind::GrammarMismatch(GrammarKind::Version(e))
                | DiagnosticKind::UnsupportedOperator(e) => *e == ecosystem && !value.is_empty(),
                _ => false,
            };
            prop_assert!(own_kind, "{:?} for {:?} {:?}", diagnostic.kind, ecosystem, value);
        }
    }

    #[test]
    fn classifier_and_validator_agree(value in "[0-9a-z.<>=!~^*, |-]{1,16}") {
        let config = ValidatorConfig::default();
        for ecosystem in Ecosystem::ALL {
            let classified = parse_version_specifier(ecosystem, &value, "version", &config);
            let validated = validate_version(ecosystem, &value, "version", &config);
            prop_assert_eq!(classified.is_ok(), validated.is_valid(), "{:?} {:?}", ecosystem, value);
        }
    }
}
