//! Thermal systems models.
//!
//! This module contains models for shell-side heat transfer and pressure drop
//! in tube banks and shell-and-tube heat exchangers.

pub mod tube_bank;
