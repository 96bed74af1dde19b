// SPDX-License-Identifier: MPL-2.0
//! `iced_catalog` is the "My Data" explorer of a geospatial data catalog,
//! built with the Iced GUI framework.
//!
//! Its Add Data panel lets users upload local data files or register hosted
//! files and web map services (WMS, WMTS, WFS, ArcGIS, ...) as catalog items.
//!
//! # Layers
//!
//! - [`domain`]: catalog items, the data type registry and the shared view state
//! - [`application`]: port traits the UI calls (upload, catalog members, analytics)
//! - [`infrastructure`]: in-process adapters implementing the ports
//! - [`ui`]: Iced panels, toasts and theming
//! - [`app`]: the Iced application shell

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
