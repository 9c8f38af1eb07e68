#![no_main]

use action_validator::registry::action_ids;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

#[derive(Arbitrary, Debug)]
struct Input {
    action: u8,
    inputs: HashMap<String, String>,
}

fuzz_target!(|input: Input| {
    let ids: Vec<&str> = action_ids().collect();
    let id = ids[input.action as usize % ids.len()];
    let first = action_validator::validate_action(id, &input.inputs).unwrap();
    let second = action_validator::validate_action(id, &input.inputs).unwrap();
    assert_eq!(first, second);
});
