// used to build the report text
use std::fmt::Write;

use crate::engine::{Concept, Lattice};

const RULE: &str = "------------------------------";

/// A concept with its names resolved against the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptReport<'a> {
    pub extent: Vec<&'a str>,
    pub intent: Vec<&'a str>,
    pub abstraction_candidate: bool,
}

/// Resolves every concept of the lattice, in engine order.
pub fn describe(lattice: &Lattice) -> Vec<ConceptReport<'_>> {
    lattice.iter().map(|concept| resolve(lattice, concept)).collect()
}

/// Only the concepts worth proposing as an abstraction: shared by more than
/// one object and with a non-empty intent.
pub fn abstraction_candidates(lattice: &Lattice) -> impl Iterator<Item = ConceptReport<'_>> {
    lattice
        .iter()
        .filter(|concept| concept.is_abstraction_candidate())
        .map(move |concept| resolve(lattice, concept))
}

fn resolve<'a>(lattice: &'a Lattice, concept: &Concept) -> ConceptReport<'a> {
    ConceptReport {
        extent: concept.extent_names(lattice.context()),
        intent: concept.intent_names(lattice.context()),
        abstraction_candidate: concept.is_abstraction_candidate(),
    }
}

/// Renders the lattice the way it is shown on the console.
pub fn render(lattice: &Lattice) -> String {
    let mut out = String::new();
    for report in describe(lattice) {
        // writing into a String cannot fail
        let _ = writeln!(out, "Concept : {:?}", report.extent);
        let _ = writeln!(out, "   └── Properties : {:?}", report.intent);
        if report.abstraction_candidate {
            let _ = writeln!(out, "   [!] ABSTRACTION CANDIDATE");
        }
        let _ = writeln!(out, "{RULE}");
    }
    out
}
