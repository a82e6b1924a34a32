//! # kmap-rs: Boolean expression simplification in Rust
//!
//! **`kmap-rs`** turns a Boolean expression, or the cells of a Karnaugh map,
//! into minimal **Sum-of-Products** (SOP) and **Product-of-Sums** (POS) forms,
//! together with the canonical minterm/maxterm listings and a step-by-step trace.
//!
//! ## Pipeline
//!
//! **parse → truth table → prime implicants (Quine–McCluskey) → essential implicants → Petrick's method → formatting**
//!
//! The minimizer is shared by the expression [`engine`] and the K-map solver in [`groups`].
//! A POS is obtained by minimizing the zero rows and printing each implicant as a sum clause with inverted polarity.
//!
//! ## Notation
//!
//! - Variables are single letters; their order is lexicographic and the first one is the most significant bit of a minterm index.
//! - `+` is OR. AND is `.`, `·`, or simply adjacency: `AB`, `A(B+C)`, `(A+B)(A+C)`.
//! - Negation is a prefix `~` or a postfix `'` (which may be repeated: `A''` is `A`).
//!
//! ## Basic Usage
//!
//! ```rust
//! use kmap_rs::engine::solve_expression;
//!
//! let res = solve_expression("(X+Y)(X+Z)").unwrap();
//! assert_eq!(res.vars, vec!['X', 'Y', 'Z']);
//! assert_eq!(res.canonical.sum_of_minterms, "Σm(3,4,5,6,7)");
//! assert_eq!(res.sop, "YZ + X");
//! assert_eq!(res.minimal, res.sop);
//! ```
//!
//! Solving a K-map directly:
//!
//! ```rust
//! use kmap_rs::groups::solve_kmap;
//! use kmap_rs::types::CellValue::{DontCare, One};
//!
//! let res = solve_kmap(&[DontCare, One, DontCare, One], 2, None).unwrap();
//! assert_eq!(res.expression, "B");
//! assert_eq!(res.groups[0].cells.len(), 2);
//! ```
//!
//! ## Core Components
//!
//! - **[`parser`]**: tokenizer-backed recursive-descent parser producing an [`ast::Node`].
//! - **[`qmc`]**: the minimizer, with [`petrick`] for the cyclic part of the cover.
//! - **[`kmap`]**: Gray-code geometry for 2 to 6 variables.
//! - **[`format`]**: SOP, POS and canonical rendering.
//!
//! The library does not install a logger; it reports through the [`log`] facade.

pub mod ast;
pub mod bitset;
pub mod debug;
pub mod engine;
pub mod error;
pub mod format;
pub mod groups;
pub mod kmap;
pub mod parser;
pub mod petrick;
pub mod qmc;
pub mod token;
pub mod types;

pub use engine::{solve_expression, SolveResult};
pub use error::{Error, ParseError, Result, ShapeError};
pub use groups::{solve_kmap, solve_kmap_pos};
pub use qmc::{minimize_sop, MinimizeResult};
