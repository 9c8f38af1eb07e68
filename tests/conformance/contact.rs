use super::common::read_suite;
use action_validator::ValidatorConfig;
use action_validator::contact::{validate_email, validate_token};

#[derive(Debug, serde::Deserialize)]
struct Suite {
    email: Cases,
    token: Cases,
}

#[derive(Debug, serde::Deserialize)]
struct Cases {
    accept: Vec<String>,
    reject: Vec<String>,
}

fn suite() -> Suite {
    serde_saphyr::from_str(&read_suite("contact.yaml")).unwrap()
}

#[test]
fn email_conformance_suite() {
    let cases = suite().email;
    for value in &cases.accept {
        let result = validate_email(value, "email");
        assert!(result.is_valid(), "{:?} rejected: {:?}", value, result.messages());
    }
    for value in &cases.reject {
        assert!(
            !validate_email(value, "email").is_valid(),
            "{:?} should be rejected",
            value
        );
    }
}

#[test]
fn token_conformance_suite() {
    let cases = suite().token;
    let config = ValidatorConfig::default();
    for value in &cases.accept {
        let result = validate_token(value, "token", true, &config);
        assert!(result.is_valid(), "{:?} rejected: {:?}", value, result.messages());
    }
    for value in &cases.reject {
        assert!(
            !validate_token(value, "token", true, &config).is_valid(),
            "{:?} should be rejected",
            value
        );
    }
}
