//! # switchyard - Capability Dispatch Registry
//!
//! `switchyard` coordinates heterogeneous handlers behind one uniform
//! invocation surface: a **capability** names a fixed operation set, a
//! **registry** maps discrete keys to handlers satisfying it (or to bound
//! transformation functions), and a **batch invoker** walks an ordered key
//! sequence under a caller-selected partial-failure policy.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use switchyard::prelude::*;
//! use switchyard::{SwitchOp, Switchable};
//! use std::sync::Arc;
//!
//! let mut registry: DispatchRegistry<String, Arc<dyn CapabilityHandler<Switchable>>> =
//!     DispatchRegistry::new();
//! registry.register("light".to_string(), Arc::new(BedroomLight::default()))?;
//! registry.register("heating".to_string(), Arc::new(Heating::default()))?;
//!
//! // Activate every device, aborting on the first failure.
//! registry
//!     .invoker()
//!     .invoke_all(["heating".to_string(), "light".to_string()], SwitchOp::Activate, &())?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use switchyard_core::{
    // Policy
    BatchPolicy,
    BatchReport,
    // Error types
    BoxError,
    // Transform
    BoxTransform,
    // Capability contract
    Capability,
    CapabilityHandler,
    CapabilityMismatch,
    DispatchError,
    // Key
    Key,
    Registered,
    RegistryError,
    SwitchyardError,
    Transform,
};

pub use switchyard_std::{
    capabilities::{SwitchOp, Switchable},
    invoker::BatchInvoker,
    observe::Observed,
    registry::{DispatchRegistry, RegistryBuilder},
    shared::SharedRegistry,
    transforms::{RateTable, RateTransform},
};

/// Registry and batch coordination module.
pub mod registry {
    pub use switchyard_std::invoker::BatchInvoker;
    pub use switchyard_std::registry::{DispatchRegistry, RegistryBuilder};
    pub use switchyard_std::shared::SharedRegistry;
}

/// Testing utilities.
pub mod testing {
    pub use switchyard_std::testing::{
        FlakyHandler, PartialHandler, RecordingHandler, SpyTransform,
    };
}

/// Prelude module - common imports for Switchyard.
///
/// # Usage
///
/// ```rust,ignore
/// use switchyard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Policy
        BatchInvoker,
        BatchPolicy,
        BatchReport,
        // Errors
        BoxError,
        BoxTransform,
        // Core traits
        Capability,
        CapabilityHandler,
        CapabilityMismatch,
        DispatchError,
        // Registry
        DispatchRegistry,
        Key,
        Registered,
        RegistryBuilder,
        RegistryError,
        SharedRegistry,
        Transform,
    };
}
