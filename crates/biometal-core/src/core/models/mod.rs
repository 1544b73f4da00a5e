//! # Core Models Module
//!
//! Data structures representing a molecular structure: atoms, residues,
//! chains, and the [`system::MolecularSystem`] that owns them.
//!
//! ## Key Components
//!
//! - [`element`] - Chemical elements and the metal predicate used by sphere filters
//! - [`atom`] - Individual atom with element, explicit charge, and position
//! - [`residue`] - Named polymer residue and its atoms
//! - [`chain`] - Ordered residues of one chain
//! - [`system`] - Complete molecular system, including heteroatoms
//! - [`query`] - The sphere-query capability interface consumed by descriptors
//! - [`ids`] - Stable identifiers for atoms, residues, and chains
//!
//! ## Usage
//!
//! ```ignore
//! use biometal::core::models::{atom::Atom, element::Element, system::MolecularSystem};
//! use nalgebra::Point3;
//!
//! let mut system = MolecularSystem::new();
//! let chain_id = system.add_chain('A');
//! let residue_id = system.add_residue(chain_id, 1, "GLU").unwrap();
//! system.add_atom_to_residue(residue_id, Atom::new("OE1", Element::O, Point3::origin()));
//! system.add_heteroatom(Atom::new("ZN", Element::Zn, Point3::new(2.0, 0.0, 0.0)).with_charge(2.0));
//! ```

pub mod atom;
pub mod chain;
pub mod element;
pub mod ids;
pub mod query;
pub mod residue;
pub mod system;
