//! Stock capability contracts.
//!
//! Concrete handler implementations (lighting, heating, anything with an
//! on/off surface) belong to the embedding application; this module only
//! ships the contracts they conform to.

use switchyard_core::Capability;

/// The stock on/off capability.
///
/// Heterogeneous devices claim this contract by implementing both
/// operations; the registry and invoker never see past it.
pub struct Switchable;

/// Operation selector for [`Switchable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwitchOp {
    /// Turn the device on.
    Activate,
    /// Turn the device off.
    Deactivate,
}

impl Capability for Switchable {
    const NAME: &'static str = "switchable";
    type Op = SwitchOp;
    type Input = ();
    type Output = ();

    fn operations() -> &'static [SwitchOp] {
        &[SwitchOp::Activate, SwitchOp::Deactivate]
    }
}
