//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints.
//! - [`quadrature`]: Adaptive Gauss–Kronrod integration.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod quadrature;
pub mod units;
