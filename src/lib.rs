//! # Twine Tube Bank
//!
//! Shell-side heat transfer and pressure drop correlations for tube banks in
//! crossflow, as [`twine_core::Model`]s for
//! [Twine](https://github.com/isentropic-dev/twine) and as plain functions.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: The correlations, the smoothing splines behind their
//!   digitized charts, and numeric constraints.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! The smoothing splines in [`support::spline`] are general purpose. If they
//! prove broadly useful and stable, they may become their own crate (and be
//! removed from here in a future release).

pub mod models;
pub mod support;
