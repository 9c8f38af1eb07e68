use action_validator::image::validate_image_name;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn well_formed_paths_accepted(
        host in prop::sample::select(vec!["", "ghcr.io/", "localhost:5000/", "registry.example.com/"]),
        components in prop::collection::vec("[a-z0-9]{1,8}([_-][a-z0-9]{1,8}){0,2}", 1..4),
    ) {
        let name = format!("{}{}", host, components.join("/"));
        let result = validate_image_name(&name, "image-name");
        prop_assert!(result.is_valid(), "{}: {:?}", name, result.messages());
    }

    #[test]
    fn any_uppercase_letter_rejects(
        prefix in "[a-z0-9]{0,8}",
        upper in "[A-Z]",
        suffix in "[a-z0-9]{0,8}",
    ) {
        let name = format!("{}{}{}", prefix, upper, suffix);
        prop_assert!(!validate_image_name(&name, "image-name").is_valid());
    }

    #[test]
    fn leading_or_trailing_separator_rejects(
        body in "[a-z0-9]{1,12}",
        sep in "[._-]",
        leading in any::<bool>(),
    ) {
        let name = if leading { format!("{}{}", sep, body) } else { format!("{}{}", body, sep) };
        prop_assert!(!validate_image_name(&name, "image-name").is_valid());
    }
}
