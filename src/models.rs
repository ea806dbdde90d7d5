//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently `thermal`)
//! based on an opinionated taxonomy. This organization may evolve as more
//! models are added.
//!
//! # Model structure
//!
//! Each [`twine_core::Model`] implementation is a thin adapter that validates
//! its input and delegates to the computational toolkit in [`crate::support`].
//! A single toolkit function may be exposed through several adapters, and one
//! adapter may be generic over interchangeable correlations.

pub mod thermal;
