//! All-or-nothing capability conformance, enforced at registration.

use switchyard::testing::{PartialHandler, RecordingHandler};
use switchyard::{DispatchRegistry, RegistryBuilder, RegistryError, SwitchOp, Switchable};

mod common;
use common::DeviceSlot;

#[test]
fn test_partial_handler_rejected_before_any_invocation() {
    let probe = RecordingHandler::<Switchable>::new();

    let mut registry: DispatchRegistry<String, DeviceSlot> = DispatchRegistry::new();
    registry.register("probe".to_string(), probe.erased()).unwrap();

    let err = registry
        .register(
            "light".to_string(),
            PartialHandler::<Switchable>::new(&[SwitchOp::Activate]).erased(),
        )
        .unwrap_err();

    match err {
        RegistryError::Mismatch(mismatch) => {
            assert_eq!(mismatch.capability, "switchable");
            assert_eq!(mismatch.missing, vec!["Deactivate".to_string()]);
        }
        other => panic!("expected a capability mismatch, got: {other}"),
    }

    // The rejected handler never entered the registry and nothing ran.
    assert!(!registry.contains(&"light".to_string()));
    assert_eq!(probe.count(), 0);
}

#[test]
fn test_full_handler_accepted() {
    let recorder = RecordingHandler::<Switchable>::new();
    let mut registry: DispatchRegistry<String, DeviceSlot> = DispatchRegistry::new();
    assert!(registry
        .register("light".to_string(), recorder.erased())
        .is_ok());
}

#[test]
fn test_builder_applies_the_same_check() {
    let mut builder = RegistryBuilder::<String, DeviceSlot>::new();
    let err = builder
        .register(
            "light".to_string(),
            PartialHandler::<Switchable>::new(&[SwitchOp::Deactivate]).erased(),
        )
        .unwrap_err();
    assert!(matches!(err, RegistryError::Mismatch(_)));
}

#[test]
fn test_empty_provided_set_reports_every_operation() {
    let mut builder = RegistryBuilder::<String, DeviceSlot>::new();
    let err = builder
        .register(
            "light".to_string(),
            PartialHandler::<Switchable>::new(&[]).erased(),
        )
        .unwrap_err();

    match err {
        RegistryError::Mismatch(mismatch) => {
            assert_eq!(
                mismatch.missing,
                vec!["Activate".to_string(), "Deactivate".to_string()]
            );
        }
        other => panic!("expected a capability mismatch, got: {other}"),
    }
}
