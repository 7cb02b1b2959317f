//! The boolean (formal) context handed to a lattice engine.
//!
//! A [`BooleanContext`] is the triple *(objects, properties, incidence)*.
//! It can only be obtained through [`BooleanContext::new`], which checks the
//! shape invariant, and it exposes no way to mutate it afterwards, so every
//! context a caller holds is coherent:
//! * `matrix().len() == objects().len()`
//! * `matrix()[i].len() == properties().len()` for every row `i`
//!
//! Besides plain accessors the context offers the two derivation operators
//! of the Galois connection ([`BooleanContext::common_properties`] and
//! [`BooleanContext::common_objects`]) which engines and reporters use to
//! check that a concept is closed.

use roaring::RoaringBitmap;
use serde::Serialize;

use crate::error::{RcftError, Result};

// ------------- ObjectRow -------------
/// One parsed data line: an object name and its incidence vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRow {
    pub name: String,
    pub incidence: Vec<bool>,
}

// ------------- BooleanContext -------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanContext {
    objects: Vec<String>,
    properties: Vec<String>,
    matrix: Vec<Vec<bool>>,
}

impl BooleanContext {
    /// Assembles a context, rejecting anything whose matrix does not line up
    /// with the object and property sequences.
    pub fn new(objects: Vec<String>, properties: Vec<String>, matrix: Vec<Vec<bool>>) -> Result<Self> {
        let width = matrix.first().map_or(0, Vec::len);
        let ragged = matrix.iter().any(|row| row.len() != properties.len());
        if objects.len() != matrix.len() || ragged {
            return Err(RcftError::Coherence {
                objects: objects.len(),
                rows: matrix.len(),
                properties: properties.len(),
                width,
                detail: ragged.then(|| "row width differs from the property count".to_string()),
            });
        }
        Ok(Self { objects, properties, matrix })
    }
    pub fn from_rows(properties: Vec<String>, rows: Vec<ObjectRow>) -> Result<Self> {
        let (objects, matrix): (Vec<String>, Vec<Vec<bool>>) = rows
            .into_iter()
            .map(|row| (row.name, row.incidence))
            .unzip();
        Self::new(objects, properties, matrix)
    }
    pub fn objects(&self) -> &[String] {
        &self.objects
    }
    pub fn properties(&self) -> &[String] {
        &self.properties
    }
    pub fn matrix(&self) -> &[Vec<bool>] {
        &self.matrix
    }
    /// `(rows, columns)` of the incidence matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.objects.len(), self.properties.len())
    }
    pub fn incidence(&self, object: usize, property: usize) -> bool {
        self.matrix
            .get(object)
            .and_then(|row| row.get(property))
            .copied()
            .unwrap_or(false)
    }
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[bool])> {
        self.objects
            .iter()
            .map(String::as_str)
            .zip(self.matrix.iter().map(Vec::as_slice))
    }
    pub fn object_index(&self, name: &str) -> Option<usize> {
        self.objects.iter().position(|o| o == name)
    }
    pub fn property_index(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p == name)
    }

    /// Every object index.
    pub fn all_objects(&self) -> RoaringBitmap {
        (0..self.objects.len() as u32).collect()
    }
    pub fn all_properties(&self) -> RoaringBitmap {
        (0..self.properties.len() as u32).collect()
    }

    /// The properties of a single object.
    pub fn object_intent(&self, object: usize) -> RoaringBitmap {
        self.matrix
            .get(object)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, present)| **present)
                    .map(|(j, _)| j as u32)
                    .collect()
            })
            .unwrap_or_default()
    }
    /// The objects having a single property.
    pub fn property_extent(&self, property: usize) -> RoaringBitmap {
        self.matrix
            .iter()
            .enumerate()
            .filter(|(_, row)| row.get(property).copied().unwrap_or(false))
            .map(|(i, _)| i as u32)
            .collect()
    }

    /// Derivation `A -> A'`: properties shared by every object in `objects`.
    /// The empty object set derives to every property.
    pub fn common_properties(&self, objects: &RoaringBitmap) -> RoaringBitmap {
        let mut shared = self.all_properties();
        for object in objects {
            shared &= self.object_intent(object as usize);
            if shared.is_empty() {
                break;
            }
        }
        shared
    }
    /// Derivation `B -> B'`: objects having every property in `properties`.
    /// The empty property set derives to every object.
    pub fn common_objects(&self, properties: &RoaringBitmap) -> RoaringBitmap {
        let mut shared = self.all_objects();
        for property in properties {
            shared &= self.property_extent(property as usize);
            if shared.is_empty() {
                break;
            }
        }
        shared
    }

    pub fn object_names(&self, set: &RoaringBitmap) -> Vec<&str> {
        set.iter()
            .filter_map(|i| self.objects.get(i as usize))
            .map(String::as_str)
            .collect()
    }
    pub fn property_names(&self, set: &RoaringBitmap) -> Vec<&str> {
        set.iter()
            .filter_map(|j| self.properties.get(j as usize))
            .map(String::as_str)
            .collect()
    }
}
