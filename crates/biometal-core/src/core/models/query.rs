//! Capability interface between structural models and the descriptor code.
//!
//! The hydrophobicity descriptors only ever need two things from a model: the
//! set of atoms inside a sphere, and a handful of read-only attributes of each
//! of those atoms. [`SphereQuery`] and [`AtomRecord`] capture exactly that, so
//! any structure representation (the in-crate [`MolecularSystem`], the
//! k-d-tree backed [`IndexedSystem`], or a lightweight stand-in in a test) can
//! be analysed.
//!
//! [`MolecularSystem`]: super::system::MolecularSystem
//! [`IndexedSystem`]: crate::core::spatial::IndexedSystem

use super::atom::Atom;
use super::element::Element;
use super::ids::AtomId;
use super::residue::Residue;
use nalgebra::Point3;

/// Categorical filters applied by a sphere query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomFilter {
    /// Include heteroatoms (atoms with no owning residue).
    pub het: bool,
    /// Include metal atoms.
    pub metal: bool,
}

impl Default for AtomFilter {
    fn default() -> Self {
        Self {
            het: true,
            metal: true,
        }
    }
}

impl AtomFilter {
    pub fn new(het: bool, metal: bool) -> Self {
        Self { het, metal }
    }

    /// Whether an atom with the given membership and element passes the filter.
    pub fn admits(&self, is_heteroatom: bool, element: Element) -> bool {
        (self.het || !is_heteroatom) && (self.metal || !element.is_metal())
    }
}

/// Read-only view of the atom attributes the classifiers depend on.
pub trait AtomRecord {
    fn element(&self) -> Element;

    /// Explicit charge, `0.0` when neutral.
    fn charge(&self) -> f64;

    /// Atom name, `None` when the atom is unnamed.
    fn name(&self) -> Option<&str>;

    /// Name of the owning residue, `None` for heteroatoms.
    fn residue_name(&self) -> Option<&str>;

    fn position(&self) -> Point3<f64>;

    fn distance_to(&self, point: &Point3<f64>) -> f64 {
        nalgebra::distance(&self.position(), point)
    }
}

impl<T: AtomRecord + ?Sized> AtomRecord for &T {
    fn element(&self) -> Element {
        (**self).element()
    }

    fn charge(&self) -> f64 {
        (**self).charge()
    }

    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn residue_name(&self) -> Option<&str> {
        (**self).residue_name()
    }

    fn position(&self) -> Point3<f64> {
        (**self).position()
    }

    fn distance_to(&self, point: &Point3<f64>) -> f64 {
        (**self).distance_to(point)
    }
}

/// A model that can enumerate the atoms within a sphere.
///
/// Implementations must return each matching atom once, include atoms lying
/// exactly on the boundary (`distance <= radius`), and apply `filter`.
pub trait SphereQuery {
    type Atom<'a>: AtomRecord
    where
        Self: 'a;

    fn atoms_in_sphere(
        &self,
        center: &Point3<f64>,
        radius: f64,
        filter: AtomFilter,
    ) -> Vec<Self::Atom<'_>>;
}

/// An atom of a [`MolecularSystem`](super::system::MolecularSystem) together
/// with its resolved residue.
#[derive(Debug, Clone, Copy)]
pub struct AtomView<'a> {
    pub id: AtomId,
    pub atom: &'a Atom,
    pub residue: Option<&'a Residue>,
}

impl AtomRecord for AtomView<'_> {
    fn element(&self) -> Element {
        self.atom.element
    }

    fn charge(&self) -> f64 {
        self.atom.charge
    }

    fn name(&self) -> Option<&str> {
        Some(self.atom.name.as_str()).filter(|name| !name.is_empty())
    }

    fn residue_name(&self) -> Option<&str> {
        self.residue.map(|residue| residue.name.as_str())
    }

    fn position(&self) -> Point3<f64> {
        self.atom.position
    }

    fn distance_to(&self, point: &Point3<f64>) -> f64 {
        self.atom.distance_to(point)
    }
}
