//! # biometal
//!
//! Hydrophobicity descriptors for metal binding sites and other regions of
//! macromolecular structures.
//!
//! The library is organised in three layers:
//!
//! - **[`core`]: The Foundation.** Atoms, residues, chains and the
//!   `MolecularSystem` that owns them; the `SphereQuery` capability trait with
//!   an exact linear implementation and a k-d-tree backed `IndexedSystem`; BGF
//!   and PDB readers.
//!
//! - **[`hydrophobicity`]: The Descriptors.** Per-atom classifiers (atomic
//!   solvation parameters, partial charges) and their aggregation over a
//!   sphere into mean solvation and hydrophobic contrast. Works with any
//!   `SphereQuery` model.
//!
//! - **[`workflows`]: The Public API.** Profiles many sites of one structure
//!   in a single pass, for example every metal ion it contains.

pub mod core;
pub mod hydrophobicity;
pub mod workflows;
