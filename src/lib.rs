// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Camera transformation pipeline for a four-panel teaching visualizer.
//!
//! A test model is viewed from a camera orbiting it at constant
//! elevation. Each frame the crate builds the look-at view matrix and an
//! orthographic or perspective projection, then produces what every panel
//! draws: the world scene with a camera gizmo, the scene in view space,
//! the projected scene inside the NDC cube, and the raw homogeneous clip
//! coordinates.
//!
//! # Key entry points
//!
//! - [`camera::build_view`] / [`camera::build_projection`] - the transform
//!   builder
//! - [`gizmo::camera_axes`] / [`gizmo::view_frustum`] - debug line geometry
//! - [`pipeline::FrameBuilder`] - all four panels for one [`FrameState`]
//! - [`options::Options`] - startup configuration with TOML presets
//!
//! Window creation, GUI widgets and rasterization belong to the host; it
//! plugs in through [`controls::ControlPanel`] and the renderer traits in
//! [`pipeline::panel`].

pub mod camera;
pub mod controls;
pub mod error;
pub mod gizmo;
pub mod mesh;
pub mod options;
pub mod pipeline;

pub use controls::FrameState;
pub use error::CamviewError;
