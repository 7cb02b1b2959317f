//! Reader → parser → engine, with every failure returned as an [`RcftError`].

use std::path::Path;

use tracing::{info, warn};

use crate::context::BooleanContext;
use crate::engine::{EngineError, Lattice, LatticeEngine};
use crate::error::{RcftError, Result};
use crate::parser::{ParseOptions, parse_table_with};
use crate::reader::read_table;

/// Reads and parses the table at `path` with default options.
pub fn load_context(path: impl AsRef<Path>) -> Result<BooleanContext> {
    load_context_with(path, &ParseOptions::default())
}

pub fn load_context_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<BooleanContext> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading table");
    let table = read_table(path)?;
    parse_table_with(&table, options)
}

/// Runs the whole pipeline: the table at `path` is parsed and its context
/// handed to `engine`.
pub fn generate_lattice<E>(path: impl AsRef<Path>, engine: &E) -> Result<Lattice>
where
    E: LatticeEngine + ?Sized,
{
    generate_lattice_with(path, engine, &ParseOptions::default())
}

pub fn generate_lattice_with<E>(path: impl AsRef<Path>, engine: &E, options: &ParseOptions) -> Result<Lattice>
where
    E: LatticeEngine + ?Sized,
{
    let context = load_context_with(path, options)?;
    compute_lattice(context, engine)
}

/// Hands an already built context to `engine`.
///
/// Whatever the engine reports is folded into [`RcftError`]: a rejected
/// context becomes [`RcftError::Coherence`] carrying the engine's message,
/// any other failure becomes [`RcftError::Engine`].
pub fn compute_lattice<E>(context: BooleanContext, engine: &E) -> Result<Lattice>
where
    E: LatticeEngine + ?Sized,
{
    info!("generating lattice");
    let concepts = engine
        .compute_lattice(&context)
        .map_err(|e| engine_failure(&context, e))?;
    info!(concepts = concepts.len(), "lattice generated");
    Ok(Lattice::new(context, concepts))
}

fn engine_failure(context: &BooleanContext, error: EngineError) -> RcftError {
    warn!(error = %error, "lattice engine failed");
    match error {
        EngineError::Rejected(detail) => RcftError::Coherence {
            objects: context.objects().len(),
            rows: context.matrix().len(),
            properties: context.properties().len(),
            width: context.matrix().first().map_or(0, Vec::len),
            detail: Some(detail),
        },
        EngineError::Failed(message) => RcftError::Engine(message),
    }
}
