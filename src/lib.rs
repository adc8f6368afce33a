//! # Linmath
//!
//! **Linmath** - generic fixed-size vectors, square matrices, and angles written in pure Rust.
//!
//! # Prelude
//! `linmath` prelude can be imported with `use linmath::prelude::*`.
//!
//! # Model
//! Every type is a plain `Copy` value that is generic over its element type (see [`scalars::Scalar`]).
//! Algorithmic operations never mutate their receiver - they derive a new value instead,
//! so they can be chained freely.
//!
//! Matrices are the centerpiece: [`matrices::Matrix2`], [`matrices::Matrix3`] and
//! [`matrices::Matrix4`] implement determinants by cofactor expansion, matrices of minors,
//! cofactors, adjugates and inverses. Vectors and angles are the collaborators that
//! matrix transforms consume.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate num_traits;
extern crate thiserror;
extern crate tracing;

// submodules
pub mod angles;
pub mod matrices;
pub mod scalars;
pub mod vectors;

// prelude
pub mod prelude;
