//! Kernel utilities shared across qualis applications.
//! Keep this crate lightweight: it owns the I/O-facing helpers the pure domain crate must not.
//!
//! ## Config loading
//! ```rust,no_run
//! use qualis_kernel::config::load_config;
//! use qualis_kernel::domain::config::QualisConfig;
//!
//! let cfg: QualisConfig = load_config(Some("qualis.toml")).unwrap_or_default();
//! ```

pub mod config;

pub use qualis_domain as domain;
