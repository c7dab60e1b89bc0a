//! Core components of the `stock-news-alert` crate.
//!
//! This module contains the foundational building blocks shared by every step of a run:
//! - The [`AlertClient`] and its builder.
//! - The primary [`AlertError`] type.
//! - Internal networking helpers.

/// The shared client (`AlertClient`), builder, and default endpoints.
pub mod client;
/// The primary error type (`AlertError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::AlertClient`
pub use client::{AlertClient, AlertClientBuilder};
pub use error::AlertError;
