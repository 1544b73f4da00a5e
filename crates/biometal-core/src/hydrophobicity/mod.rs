//! # Hydrophobicity Descriptors
//!
//! Per-atom classifiers and their aggregation over spheres.
//!
//! Every atom is mapped to a scalar, either its atomic solvation parameter
//! (Yamashita et al., 1990) or its squared partial charge, and the values of
//! the atoms inside a sphere are summarised two ways:
//!
//! - **Solvation**: the mean value.
//! - **Hydrophobic contrast**: `Σ v·r² − n · v̄ · (Σ r² / n)`, which is zero for
//!   a homogeneous sphere, positive for a hydrophilic core inside a hydrophobic
//!   shell, and negative for the converse.
//!
//! Descriptors work against any model implementing
//! [`SphereQuery`](crate::core::models::query::SphereQuery).

pub mod charges;
pub mod classify;
pub mod error;
pub mod sphere;

pub use charges::{ChargeTableError, PartialChargeTable};
pub use classify::{Classifier, atom_partial_charge, atom_partial_charge_from, atom_solvation};
pub use error::{DescriptorError, ErrorKind};
pub use sphere::{
    DescriptorOptions, Sphere, SphereDescriptors, SphereSummary, check_radius, hydrophobic_contrast,
    solvation,
};
