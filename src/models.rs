//! Public coil models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation lives. The [`twine_core::Model`] implementations
//! are thin adapters that delegate to the core functions, which are re-exported
//! so they can also be called directly.

pub mod electromagnetic;
