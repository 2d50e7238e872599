//! Domain types shared across all Elimu services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `infra/` converts to and from
//! the schema models at its boundary.

pub mod employee;
pub mod id;
