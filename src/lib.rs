//! # eccalc - Elliptic Curve Task Calculator
//!
//! Point addition and scalar multiplication on elliptic curves over two
//! finite field families, driven by line-oriented task files.
//!
//! ## Features
//!
//! - **Prime fields (Z_p)**: modular arithmetic with extended-Euclid inversion
//! - **Binary fields (GF(2^n))**: polynomials over GF(2) reduced against a
//!   built-in table of irreducible polynomials
//! - **Three curve families**: Weierstrass over Z_p, non-supersingular and
//!   supersingular over GF(2^n), sharing one chord-tangent group law
//! - **Task files**: a small line grammar for add/multiply requests,
//!   processed per directory with one parallel worker per file
//!
//! ## Quick Start
//!
//! ```rust
//! use eccalc::{CurveGroup, Point, PrimeField, WeierstrassCurve};
//! use num_bigint::{BigInt, BigUint};
//!
//! // y^2 = x^3 + x + 1 over Z_23
//! let field = PrimeField::new(BigInt::from(23));
//! let curve = WeierstrassCurve::new(field, BigInt::from(1), BigInt::from(1));
//!
//! let p = Point::affine(BigInt::from(3), BigInt::from(10));
//! let doubled = curve.add(&p, &p).unwrap();
//! assert_eq!(doubled, Point::affine(BigInt::from(7), BigInt::from(12)));
//!
//! let multiplied = curve.mul(&p, &BigUint::from(2u32)).unwrap();
//! assert_eq!(multiplied, doubled);
//! ```
//!
//! ## Module Overview
//!
//! - [`polynomial`] - the GF(2)[x] ring element
//! - [`field`] - prime and binary field implementations
//! - [`elliptic_curve`] - points, the shared group law, the Z_p curve
//! - [`binary_elliptic_curve`] - the two GF(2^n) curve families
//! - [`task`] - task descriptions and the per-file runner
//! - [`parser`] - the task file grammar
//! - [`output`] - result rendering
//! - [`batch`] - the parallel directory driver

pub mod batch;
pub mod binary_elliptic_curve;
pub mod elliptic_curve;
pub mod error;
pub mod field;
pub mod output;
pub mod parser;
pub mod polynomial;
pub mod task;

// Re-export commonly used types for convenience
pub use binary_elliptic_curve::{NonSupersingularCurve, SupersingularCurve};
pub use elliptic_curve::{CurveGroup, Point, WeierstrassCurve};
pub use error::{Error, Result};
pub use field::{BinaryField, Field, PrimeField};
pub use polynomial::Polynomial;
pub use task::{RunnerConfig, Task, TaskResult, TaskResults};
