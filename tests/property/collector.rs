use action_validator::{Diagnostic, DiagnosticKind, ErrorCollector};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn collector_keeps_first_occurrence_of_each_text(
        messages in prop::collection::vec("[a-c]{1,2}", 0..32),
    ) {
        let mut errors = ErrorCollector::new();
        for message in &messages {
            errors.add(Diagnostic::new(DiagnosticKind::PathViolation, "field", message.as_str()));
        }

        let mut expected: Vec<&str> = Vec::new();
        for message in &messages {
            if !expected.contains(&message.as_str()) {
                expected.push(message.as_str());
            }
        }
        let actual: Vec<&str> = errors.all().iter().map(|d| d.message.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }
}
