use std::cell::RefCell;

use binder_core::{ByRef, Caller, ParameterInfo, SlotKind};
use integration_tests::{AvatarMirror, camera_stream};
use serde_json::json;

fn label(prefix: &str, value: f64, digits: usize) -> String {
    format!("{prefix}{value:.digits$}")
}

fn describe<R>(caller: &Caller<'_, R>) -> Vec<ParameterInfo> {
    (0..caller.parameters())
        .filter_map(|index| caller.parameter_info(index).ok())
        .collect()
}

#[test]
fn reports_arity_and_slot_types() {
    let prefix = String::from("x=");
    let caller = Caller::create_static((ByRef(prefix.as_str()), 2.5_f64, 3_usize), label);

    assert_eq!(caller.parameters(), 3);
    assert_eq!(
        describe(&caller),
        [
            ParameterInfo::new(SlotKind::Reference, "&str"),
            ParameterInfo::new(SlotKind::Value, "f64"),
            ParameterInfo::new(SlotKind::Value, "usize"),
        ],
    );
    assert_eq!(caller.call(), "x=2.500");
}

#[test]
fn serializes_slot_descriptions() {
    let mirror = RefCell::new(AvatarMirror::new(0.25));
    let caller = Caller::create(&mirror, (1.0_f64,), AvatarMirror::track);

    let value = serde_json::to_value(describe(&caller)).unwrap();

    assert_eq!(value, json!([{ "kind": "Value", "type_name": "f64" }]));
}

#[test]
fn factories_describe_their_bound_arguments() {
    let factory = Caller::create_static((640_u32, 480_u32), camera_stream);

    let names: Vec<&str> = describe(&factory)
        .iter()
        .map(|info| info.type_name)
        .collect();

    assert_eq!(names, ["u32", "u32"]);
    assert!(describe(&Caller::<()>::null()).is_empty());
}
