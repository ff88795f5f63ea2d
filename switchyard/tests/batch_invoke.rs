//! Batch invocation under both partial-failure policies, including the
//! device activation scenario.

use switchyard::testing::{FlakyHandler, RecordingHandler};
use switchyard::{BatchPolicy, DispatchRegistry, SwitchOp, Switchable};

mod common;
use common::{DeviceSlot, Heating, Light, Power, slot};

fn device_registry(light: &Light, heating: &Heating) -> DispatchRegistry<String, DeviceSlot> {
    let mut registry = DispatchRegistry::new();
    registry
        .register("light".to_string(), slot(light.clone()))
        .unwrap();
    registry
        .register("heating".to_string(), slot(heating.clone()))
        .unwrap();
    registry
}

#[test]
fn test_activate_all_devices_fail_fast() {
    let light = Light::new("bedroom");
    let heating = Heating::new();
    let registry = device_registry(&light, &heating);

    let report = registry
        .invoker()
        .invoke_all(
            ["heating".to_string(), "light".to_string()],
            SwitchOp::Activate,
            &(),
        )
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.len(), 2);
    assert_eq!(light.power(), Power::On);
    assert!(heating.is_active());
}

#[test]
fn test_unregistered_device_fails_after_earlier_effects() {
    // Same batch, but "light" never registered: heating is activated
    // before the batch aborts, and stays activated.
    let heating = Heating::new();
    let mut registry: DispatchRegistry<String, DeviceSlot> = DispatchRegistry::new();
    registry
        .register("heating".to_string(), slot(heating.clone()))
        .unwrap();

    let err = registry
        .invoker()
        .invoke_all(
            ["heating".to_string(), "light".to_string()],
            SwitchOp::Activate,
            &(),
        )
        .unwrap_err();

    assert!(err.is_key_not_found());
    assert!(heating.is_active());
}

#[test]
fn test_fail_fast_does_not_attempt_subsequent_keys() {
    let flaky = FlakyHandler::<Switchable>::failing();
    let tail = RecordingHandler::<Switchable>::new();

    let mut registry: DispatchRegistry<String, DeviceSlot> = DispatchRegistry::new();
    registry.register("broken".to_string(), flaky.erased()).unwrap();
    registry.register("tail".to_string(), tail.erased()).unwrap();

    let err = registry
        .invoker()
        .invoke_all(
            ["broken".to_string(), "tail".to_string()],
            SwitchOp::Activate,
            &(),
        )
        .unwrap_err();

    assert!(!err.is_key_not_found());
    assert_eq!(flaky.calls(), 1);
    assert_eq!(tail.count(), 0, "keys after the failure must not run");
}

#[test]
fn test_collect_errors_yields_one_outcome_per_key_in_order() {
    let flaky = FlakyHandler::<Switchable>::failing();
    let recorder = RecordingHandler::<Switchable>::new();

    let mut registry: DispatchRegistry<String, DeviceSlot> = DispatchRegistry::new();
    registry.register("broken".to_string(), flaky.erased()).unwrap();
    registry
        .register("working".to_string(), recorder.erased())
        .unwrap();

    let keys = [
        "working".to_string(),
        "missing".to_string(),
        "broken".to_string(),
        "working".to_string(),
    ];
    let report = registry
        .invoker_with(BatchPolicy::CollectErrors)
        .invoke_all(keys.clone(), SwitchOp::Activate, &())
        .unwrap();

    assert_eq!(report.len(), keys.len());
    let reported: Vec<_> = report
        .outcomes()
        .iter()
        .map(|(key, _)| key.clone())
        .collect();
    assert_eq!(reported, keys);

    assert_eq!(report.successes().count(), 2);
    let failed: Vec<_> = report.failures().map(|(key, _)| key.as_str()).collect();
    assert_eq!(failed, vec!["missing", "broken"]);

    // Every resolvable key was attempted despite the failures.
    assert_eq!(recorder.count(), 2);
    assert_eq!(flaky.calls(), 1);
}

#[test]
fn test_deactivate_round_trip() {
    let light = Light::new("hall");
    let heating = Heating::new();
    let registry = device_registry(&light, &heating);
    let keys = || ["light".to_string(), "heating".to_string()];

    registry
        .invoker()
        .invoke_all(keys(), SwitchOp::Activate, &())
        .unwrap();
    registry
        .invoker()
        .invoke_all(keys(), SwitchOp::Deactivate, &())
        .unwrap();

    assert_eq!(light.power(), Power::Off);
    assert!(!heating.is_active());
}

#[test]
fn test_override_with_test_double_takes_effect() {
    let light = Light::new("bedroom");
    let heating = Heating::new();
    let mut registry = device_registry(&light, &heating);

    // Shadow the light with a recorder, as a configuration overlay would.
    let recorder = RecordingHandler::<Switchable>::new();
    registry
        .register("light".to_string(), recorder.erased())
        .unwrap();

    registry
        .invoker()
        .invoke_all(["light".to_string()], SwitchOp::Activate, &())
        .unwrap();

    assert_eq!(recorder.ops(), vec![SwitchOp::Activate]);
    assert_eq!(light.power(), Power::Off, "the overridden handler must not run");
}
