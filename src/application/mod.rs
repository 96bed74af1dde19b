// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the UI talks to.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer holds ports behind [`port::Services`] and never
//!   names a concrete adapter

pub mod port;
