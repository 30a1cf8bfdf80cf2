//! Built-in identity-provider connectors.
//!
//! Each provider lives in its own submodule and exposes a `describe()`
//! factory returning a [`ConnectorDescriptor`](crate::ConnectorDescriptor)
//! with zero-valued config instances for the host's flag/config loader.

pub mod github;
