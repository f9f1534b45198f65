//! Domain primitives shared by the storefront crates.
//!
//! Holds no database or HTTP dependencies so both the repository layer and
//! the API layer can depend on it.

pub mod error;
pub mod types;
