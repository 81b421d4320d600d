//! Collections of [`Caller`](binder_core::Caller)s.
//!
//! - [`FactoryRegistry`] maps names to zero-argument factories and produces
//!   a fresh instance per lookup.
//! - [`Subscribers`] keeps an ordered list of bound callbacks and notifies
//!   them together, optionally writing a per-event value into each first.
//!
//! Registrations, removals and rejected requests are reported through
//! `tracing`.

mod config;
mod error;
mod factory;
mod subscribers;

pub use config::{Config, ConfigError, DuplicatePolicy};
pub use error::RegistryError;
pub use factory::FactoryRegistry;
pub use subscribers::Subscribers;
