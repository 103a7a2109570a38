//! Public models.
//!
//! Each model lives in its own module with an internal `core` submodule holding
//! the computation. The [`twine_core::Model`] implementation is a thin adapter
//! over that core, and the core's value types are re-exported for direct use.

pub mod environment;
