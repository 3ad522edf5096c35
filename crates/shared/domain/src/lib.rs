//! # Domain Models
//!
//! Pure data types shared by the qualis crates: the package inventory model consumed by
//! qualifiers and the configuration shapes loaded by the kernel.
//! Keep it lean: no I/O, no evaluation logic, just data and simple helpers.

pub mod config;
pub mod pkg;
