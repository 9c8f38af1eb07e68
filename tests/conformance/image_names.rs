use super::common::read_suite;
use action_validator::image::validate_image_name;

#[derive(Debug, serde::Deserialize)]
struct Suite {
    accept: Vec<String>,
    reject: Vec<String>,
}

#[test]
fn image_name_conformance_suite() {
    let suite: Suite = serde_saphyr::from_str(&read_suite("image-names.yaml")).unwrap();

    let wrongly_rejected: Vec<_> = suite
        .accept
        .iter()
        .filter(|name| !validate_image_name(name, "image-name").is_valid())
        .collect();
    let wrongly_accepted: Vec<_> = suite
        .reject
        .iter()
        .filter(|name| validate_image_name(name, "image-name").is_valid())
        .collect();

    assert!(
        wrongly_rejected.is_empty(),
        "valid names rejected: {:?}",
        wrongly_rejected
    );
    assert!(
        wrongly_accepted.is_empty(),
        "invalid names accepted: {:?}",
        wrongly_accepted
    );
}
