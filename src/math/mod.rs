//! Mathematical utilities: domain mapping and the Legendre basis.

pub mod legendre;
pub mod mapping;

pub use legendre::*;
pub use mapping::*;
