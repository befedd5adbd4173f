//! # Coil Models
//!
//! Solenoid coil models built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! The central calculation is the length of wire wound into a helical coil,
//! found by integrating the helix arc-length element along the coil axis.
//! Around it sit the usual solenoid relations: wire resistance, the effective
//! permeability of a cylindrical core, and the on-axis magnetic field.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models (numeric constraints,
//!   unit extensions, and adaptive quadrature).
//!
//! ## Example
//!
//! ```
//! use coil_models::models::electromagnetic::solenoid::{CoilGeometry, CoilWireLength};
//! use twine_core::Model;
//! use uom::si::{f64::Length, length::meter};
//!
//! let geometry = CoilGeometry::try_new(
//!     Length::new::<meter>(0.0762),
//!     Length::new::<meter>(0.1),
//!     30.0,
//! )
//! .unwrap();
//!
//! let result = CoilWireLength::default().call(&geometry).unwrap();
//! assert!((result.value.get::<meter>() - 18.8497).abs() < 1e-3);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
