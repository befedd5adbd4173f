//! Electromagnetic component models.
//!
//! This module contains models for wound components such as solenoids.

pub mod solenoid;
