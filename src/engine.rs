//! The seam to a concept lattice engine.
//!
//! This crate does not compute lattices. It hands a [`BooleanContext`] to
//! whatever implements [`LatticeEngine`] and reads back the concepts. Any
//! formal concept analysis implementation can be plugged in, as long as the
//! concepts it returns are closed under the Galois connection of the context.

use std::fmt;

use roaring::RoaringBitmap;
use thiserror::Error;

use crate::context::BooleanContext;

// ------------- Concept -------------
/// A formal concept, as object and property indices into its context.
#[derive(Debug, Clone, PartialEq)]
pub struct Concept {
    pub extent: RoaringBitmap,
    pub intent: RoaringBitmap,
}

impl Concept {
    pub fn new(extent: RoaringBitmap, intent: RoaringBitmap) -> Self {
        Self { extent, intent }
    }
    /// The concept generated by an object set, `(A'', A')`.
    pub fn from_extent(context: &BooleanContext, objects: &RoaringBitmap) -> Self {
        let intent = context.common_properties(objects);
        let extent = context.common_objects(&intent);
        Self { extent, intent }
    }
    /// The concept generated by a property set, `(B', B'')`.
    pub fn from_intent(context: &BooleanContext, properties: &RoaringBitmap) -> Self {
        let extent = context.common_objects(properties);
        let intent = context.common_properties(&extent);
        Self { extent, intent }
    }
    /// Whether extent and intent derive to each other in `context`.
    pub fn is_closed(&self, context: &BooleanContext) -> bool {
        context.common_properties(&self.extent) == self.intent
            && context.common_objects(&self.intent) == self.extent
    }
    /// Shared by several objects and saying something about them.
    pub fn is_abstraction_candidate(&self) -> bool {
        self.extent.len() > 1 && !self.intent.is_empty()
    }
    pub fn extent_names<'c>(&self, context: &'c BooleanContext) -> Vec<&'c str> {
        context.object_names(&self.extent)
    }
    pub fn intent_names<'c>(&self, context: &'c BooleanContext) -> Vec<&'c str> {
        context.property_names(&self.intent)
    }
}

// ------------- Engine -------------
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine's own checks found the context unusable.
    #[error("context rejected: {0}")]
    Rejected(String),
    #[error("{0}")]
    Failed(String),
}

pub trait LatticeEngine {
    /// Computes every concept of `context`.
    fn compute_lattice(&self, context: &BooleanContext) -> Result<Vec<Concept>, EngineError>;
}

impl<E: LatticeEngine + ?Sized> LatticeEngine for &E {
    fn compute_lattice(&self, context: &BooleanContext) -> Result<Vec<Concept>, EngineError> {
        (**self).compute_lattice(context)
    }
}

impl<E: LatticeEngine + ?Sized> LatticeEngine for Box<E> {
    fn compute_lattice(&self, context: &BooleanContext) -> Result<Vec<Concept>, EngineError> {
        (**self).compute_lattice(context)
    }
}

// ------------- Lattice -------------
/// The context together with the concepts an engine found in it.
#[derive(Debug, Clone)]
pub struct Lattice {
    context: BooleanContext,
    concepts: Vec<Concept>,
}

impl Lattice {
    pub fn new(context: BooleanContext, concepts: Vec<Concept>) -> Self {
        Self { context, concepts }
    }
    pub fn context(&self) -> &BooleanContext {
        &self.context
    }
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }
    pub fn len(&self) -> usize {
        self.concepts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Concept> {
        self.concepts.iter()
    }
    pub fn into_parts(self) -> (BooleanContext, Vec<Concept>) {
        (self.context, self.concepts)
    }
}

impl<'a> IntoIterator for &'a Lattice {
    type Item = &'a Concept;
    type IntoIter = std::slice::Iter<'a, Concept>;
    fn into_iter(self) -> Self::IntoIter {
        self.concepts.iter()
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} concepts over {} objects x {} properties",
            self.concepts.len(),
            self.context.objects().len(),
            self.context.properties().len()
        )
    }
}
