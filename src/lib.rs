//! # AstraPrep
//!
//! Compiles a set of selected basis states into an ordered sequence of
//! multi-controlled single-qubit gates.
//!
//! ## Quick Start
//!
//! ```rust
//! use astraprep::compiler::{compile, GateKind};
//!
//! // Select |000⟩ and |001⟩ on a 3-qubit register
//! let seq = compile(&[0, 1], 3).unwrap();
//!
//! // I(q0), I(q1), then H on q2 controlled by q0=0, q1=0
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.instructions[2].kind(), GateKind::ControlledSuperpose);
//! for instr in &seq {
//!     println!("{instr}");
//! }
//! ```

pub mod compiler;
pub mod config;
pub mod core;
pub mod error;
pub mod optimizer;

pub use compiler::{compile, compile_with_config, compile_with_stats, CompileError, GateSequence};
pub use config::{CompilerConfig, DuplicatePolicy};
