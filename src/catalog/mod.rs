//! # Catalog Module
//!
//! This module owns the bakery's product data and the search filter that
//! runs over it.
//!
//! | Piece | What it holds |
//! |-------|---------------|
//! | [`store::Store`] | ordered products and testimonials, read-only after load |
//! | [`filter`] | pure query normalization and record matching |

pub mod filter;
pub mod store;

pub use filter::{normalize_query, record_matches};
pub use store::{ProductRecord, Store, TestimonialRecord};
