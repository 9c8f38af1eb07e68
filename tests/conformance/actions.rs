use action_validator::registry::{ACTION_REGISTRY, load_action};

#[test]
fn every_builtin_schema_parses() {
    assert_eq!(ACTION_REGISTRY.len(), 10);
    for entry in ACTION_REGISTRY {
        let schema = load_action(entry.id)
            .unwrap_or_else(|e| panic!("{} failed to load: {}", entry.id, e));
        assert_eq!(schema.action, entry.id, "schema id mismatch in {}", entry.id);
        assert!(!schema.inputs.is_empty(), "{} declares no inputs", entry.id);
        for (name, rule) in schema.inputs.iter() {
            assert!(
                !rule.description.is_empty(),
                "{}.{} has no description",
                entry.id,
                name
            );
        }
    }
}
