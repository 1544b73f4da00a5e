//! # Workflows Module
//!
//! High-level entry points that combine the structural core with the
//! hydrophobicity descriptors.
//!
//! - **Site Profiling** ([`profile`]) - Evaluates solvation and hydrophobic
//!   contrast around every metal, every residue, or a list of points, sharing
//!   one spatial index across all spheres.
//! - **Configuration** ([`config`]) - [`ProfileConfig`](config::ProfileConfig)
//!   and its builder.

pub mod config;
pub mod profile;
