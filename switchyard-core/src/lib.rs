//! # switchyard-core
//!
//! Core traits for the Switchyard capability dispatch framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugins and embedding applications that provide handlers without needing
//! the full `switchyard-std` implementation.
//!
//! # Three-Part Architecture
//!
//! Switchyard is built on three cooperating parts:
//!
//! ## Part 1: Capability Contract ([`Capability`] / [`CapabilityHandler`])
//!
//! A capability names a fixed set of operations. Handlers claim a capability
//! by implementing every operation it declares; conformance is all-or-nothing
//! and is verified when the handler enters a registry, never by probing at
//! invocation time.
//!
//! - **Closed surface**: The operation set is declared once, by the capability
//! - **Opaque implementations**: Registries never inspect the concrete type,
//!   only the contract
//! - **Uniform invocation**: Heterogeneous implementations are driven through
//!   a single `perform(op, input)` entry point
//!
//! ## Part 2: Bound Transformations ([`Transform`])
//!
//! The second handler kind: a unary function closed over fixed auxiliary
//! configuration (a rate, a lookup table). Closures implement the trait
//! directly, so partial application is expressed as capture.
//!
//! ## Part 3: Batch Coordination ([`BatchPolicy`] / [`BatchReport`])
//!
//! Batch invocation walks an ordered key sequence and applies a
//! caller-selected partial-failure policy: abort on the first error, or
//! attempt every key and report all outcomes at once.
//!
//! # Error Types
//!
//! - [`SwitchyardError`] - Top-level error type
//! - [`RegistryError`] - Registration-time errors (always raised immediately)
//! - [`DispatchError`] - Invocation-time errors (follow the batch policy)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod capability;
mod error;
mod key;
mod policy;
mod transform;

// Re-exports
pub use capability::{Capability, CapabilityHandler, Registered};
pub use error::{BoxError, CapabilityMismatch, DispatchError, RegistryError, SwitchyardError};
pub use key::Key;
pub use policy::{BatchPolicy, BatchReport};
pub use transform::{BoxTransform, Transform};
