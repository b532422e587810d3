//! # User Interface Module
//!
//! Dear ImGui overlay drawn on top of the scene.
//!
//! ## Key Components
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu
//! - [`parameter_panel`] - Window editing the live [`PanelParams`]
//!
//! ## Input Handling
//!
//! Events are offered to the UI first. While ImGui wants the pointer, drags
//! do not reach the orbit controls.

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::{parameter_panel, PanelParams, VERTICAL_OFFSET_RANGE};
