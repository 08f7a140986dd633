//! AG(2, q) validators: modulus acceptance, field inverses, line counts and
//! normalization, parallel classes.

pub mod classes;
pub mod field;
pub mod lines;
pub mod modulus;
