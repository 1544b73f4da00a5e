//! # Core Module
//!
//! Structural building blocks shared by the descriptor code and the workflows.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, residues, chains and the
//!   [`MolecularSystem`](models::system::MolecularSystem) that owns them, plus
//!   the sphere-query capability traits.
//! - **File I/O** ([`io`]) - BGF and PDB readers.
//! - **Spatial Indexing** ([`spatial`]) - A k-d tree over atom positions for
//!   repeated sphere queries against one structure.

pub mod io;
pub mod models;
pub mod spatial;
