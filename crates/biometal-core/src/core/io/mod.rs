//! Readers for molecular structure files.
//!
//! Each format implements [`traits::MolecularFile`] and produces a
//! [`MolecularSystem`](crate::core::models::system::MolecularSystem) in which
//! polymer atoms belong to residues and everything else is a heteroatom.

pub mod bgf;
mod element;
pub mod pdb;
pub mod traits;
