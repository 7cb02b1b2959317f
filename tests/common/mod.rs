#![allow(dead_code)]

use std::path::PathBuf;

use rcft::{BooleanContext, Concept, EngineError, LatticeEngine};
use roaring::RoaringBitmap;

pub fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

/// Writes `body` to a fresh file under the temp dir and returns its path.
pub fn scratch(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rcft-test-{}-{name}", std::process::id()));
    std::fs::write(&path, body).expect("write scratch table");
    path
}

/// Closes every subset of properties. Only usable on tiny contexts.
pub struct BruteForceEngine;

impl LatticeEngine for BruteForceEngine {
    fn compute_lattice(&self, context: &BooleanContext) -> Result<Vec<Concept>, EngineError> {
        let width = context.properties().len();
        if width > 16 {
            return Err(EngineError::Failed(format!("{width} properties is too many")));
        }
        let mut concepts: Vec<Concept> = Vec::new();
        for mask in 0u32..(1 << width) {
            let subset: RoaringBitmap = (0..width as u32).filter(|j| mask & (1 << j) != 0).collect();
            let concept = Concept::from_intent(context, &subset);
            if !concepts.contains(&concept) {
                concepts.push(concept);
            }
        }
        concepts.sort_by_key(|c| std::cmp::Reverse(c.extent.len()));
        Ok(concepts)
    }
}

/// Refuses every context, like an engine whose own shape check fails.
pub struct RejectingEngine;

impl LatticeEngine for RejectingEngine {
    fn compute_lattice(&self, _context: &BooleanContext) -> Result<Vec<Concept>, EngineError> {
        Err(EngineError::Rejected("matrix shape does not match".into()))
    }
}

pub struct FailingEngine;

impl LatticeEngine for FailingEngine {
    fn compute_lattice(&self, _context: &BooleanContext) -> Result<Vec<Concept>, EngineError> {
        Err(EngineError::Failed("out of memory".into()))
    }
}
