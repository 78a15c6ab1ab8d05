//! Strategy implementations.

pub mod iterative;
pub mod random;
pub mod recursive;
pub mod rough;
