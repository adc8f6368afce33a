//! Prelude module: `linmath::prelude` re-exports all `linmath` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use linmath::prelude::*;
//!
//! let matrix: Matrix2<f64> = Matrix2::new(4.0, 7.0, 2.0, 6.0);
//! assert_eq!(matrix.determinant(), 10.0);
//! assert_eq!(matrix.inverse()? * matrix, Matrix2::identity());
//! # Ok::<(), MatrixError>(())
//! ```
//!

// re-exports
pub use crate::angles::*;
pub use crate::matrices::transforms::*;
pub use crate::matrices::*;
pub use crate::scalars::*;
pub use crate::vectors::*;
