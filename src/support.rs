//! Supporting utilities used by models.

pub mod constraint;
pub mod spline;
pub mod tube_bank;
