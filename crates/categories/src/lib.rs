//! Categories domain module (catalog groupings).
//!
//! This crate contains business rules for catalog categories, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;

pub use category::{
    Category, CategoryId, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};
