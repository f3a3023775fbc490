//! Domain entities.

mod department;

pub use department::*;
