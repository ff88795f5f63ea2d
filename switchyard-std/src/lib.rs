//! # switchyard-std
//!
//! Standard implementations for the Switchyard capability dispatch framework.
//!
//! This crate provides:
//! - **Registry**: [`DispatchRegistry`], [`RegistryBuilder`]
//! - **Serialized access**: [`SharedRegistry`]
//! - **Batch coordination**: [`BatchInvoker`]
//! - **Stock contracts**: [`Switchable`], [`RateTransform`], [`RateTable`]
//! - **Observation**: [`Observed`]
//! - **Testing utilities**: recording and programmable handler doubles
//!
//! [`DispatchRegistry`]: registry::DispatchRegistry
//! [`RegistryBuilder`]: registry::RegistryBuilder
//! [`SharedRegistry`]: shared::SharedRegistry
//! [`BatchInvoker`]: invoker::BatchInvoker
//! [`Switchable`]: capabilities::Switchable
//! [`RateTransform`]: transforms::RateTransform
//! [`RateTable`]: transforms::RateTable
//! [`Observed`]: observe::Observed

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use switchyard_core;

// Modules
pub mod capabilities;
pub mod invoker;
pub mod observe;
pub mod registry;
pub mod shared;
pub mod testing;
pub mod transforms;
