//! Validator modules for each conformance category.

pub mod plane;
