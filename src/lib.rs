//! rcft – turns RCFT incidence tables into boolean contexts for formal concept analysis.
//!
//! An RCFT file is a small pipe-delimited table of *objects* (rows) by
//! *properties* (columns), where an `x` in a cell says the object has the
//! property:
//! ```text
//! FormalContext Transport
//! | | wheels | rails |
//! | bus   | x |   |
//! | tram  | x | x |
//! ```
//! Reading such a table yields a [`context::BooleanContext`]: the object
//! names, the property names and the incidence matrix. That is the standard
//! input of a concept lattice engine.
//!
//! ## Modules
//! * [`reader`] – loads a table file and drops blank lines.
//! * [`parser`] – header detection, row parsing and context assembly
//!   (cells are split by the grammar in `rcft.pest`).
//! * [`context`] – the immutable [`context::BooleanContext`] and its Galois
//!   derivation operators.
//! * [`engine`] – the [`engine::LatticeEngine`] seam, [`engine::Concept`] and
//!   [`engine::Lattice`]. No engine is bundled; bring your own.
//! * [`report`] – resolves concepts to names and flags abstraction candidates.
//! * [`writer`] – writes a context back out as RCFT.
//! * [`settings`] – layered configuration for the `rcft` binary.
//!
//! ## Quick Start
//! ```
//! use rcft::{parser::parse_table, reader::RawTable};
//! let table = RawTable::from_text("| | A | B |\n| o1 | x | |\n| o2 | | x |");
//! let context = parse_table(&table).unwrap();
//! assert_eq!(context.properties(), ["A", "B"]);
//! assert_eq!(context.matrix(), [vec![true, false], vec![false, true]]);
//! ```
//!
//! ## Known limitations
//! The first delimiter-led line naming a property is taken as the header,
//! without any check that it is not an object row. Markdown separator rows
//! such as `|---|---|` have a non-empty name cell and are kept as objects
//! (a warning is logged). Duplicate names are allowed unless
//! [`parser::ParseOptions::reject_duplicates`] is set.

pub mod context;
pub mod engine;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod settings;
pub mod writer;

pub use context::BooleanContext;
pub use engine::{Concept, EngineError, Lattice, LatticeEngine};
pub use error::{RcftError, Result};
pub use parser::ParseOptions;
pub use pipeline::{compute_lattice, generate_lattice, generate_lattice_with, load_context, load_context_with};
pub use writer::write_rcft;
