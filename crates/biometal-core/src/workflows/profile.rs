use super::config::{ProfileConfig, ProfileTarget};
use crate::core::models::system::MolecularSystem;
use crate::core::spatial::IndexedSystem;
use crate::hydrophobicity::error::DescriptorError;
use crate::hydrophobicity::sphere::{Sphere, SphereDescriptors, check_radius};
use nalgebra::{Point3, Vector3};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Invalid sphere: {source}")]
    Descriptor {
        #[from]
        source: DescriptorError,
    },
}

/// Descriptors evaluated at one labelled site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteProfile {
    pub label: String,
    pub center: Point3<f64>,
    pub atom_count: usize,
    pub solvation: f64,
    pub hydrophobic_contrast: f64,
}

struct Site {
    label: String,
    center: Point3<f64>,
}

fn metal_sites(system: &MolecularSystem) -> Vec<Site> {
    system
        .metal_atoms()
        .map(|(_, atom)| Site {
            label: format!("{}{}", atom.element, atom.serial),
            center: atom.position,
        })
        .collect()
}

fn residue_sites(system: &MolecularSystem) -> Vec<Site> {
    let mut sites = Vec::new();
    for (_, chain) in system.chains_iter() {
        for &residue_id in chain.residues() {
            let Some(residue) = system.residue(residue_id) else {
                continue;
            };
            let positions: Vec<Point3<f64>> = residue
                .atoms()
                .iter()
                .filter_map(|&atom_id| system.atom(atom_id))
                .map(|atom| atom.position)
                .collect();
            if positions.is_empty() {
                continue;
            }
            let sum: Vector3<f64> = positions.iter().map(|p| p.coords).sum();
            sites.push(Site {
                label: format!("{}:{}{}", chain.id, residue.name, residue.residue_number),
                center: Point3::from(sum / positions.len() as f64),
            });
        }
    }
    sites
}

fn point_sites(points: &[Point3<f64>]) -> Vec<Site> {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| Site {
            label: format!("P{}", i + 1),
            center: *point,
        })
        .collect()
}

/// Evaluates solvation and hydrophobic contrast at every site selected by
/// `config.target`, in a deterministic order: metals and residues follow
/// the structure's own ordering, points follow their input order.
#[instrument(skip_all, name = "profile_workflow")]
pub fn run(system: &MolecularSystem, config: &ProfileConfig) -> Result<Vec<SiteProfile>, ProfileError> {
    check_radius(config.radius)?;

    let sites = match &config.target {
        ProfileTarget::Metals => metal_sites(system),
        ProfileTarget::Residues => residue_sites(system),
        ProfileTarget::Points(points) => point_sites(points),
    };
    if sites.is_empty() {
        warn!(selection = ?config.target, "No sites to profile.");
        return Ok(Vec::new());
    }
    info!(
        sites = sites.len(),
        radius = config.radius,
        "Profiling hydrophobicity."
    );

    let index = IndexedSystem::new(system);
    let descriptors = SphereDescriptors::with_charge_table(config.charge_table.clone());

    let mut profiles = Vec::with_capacity(sites.len());
    for site in sites {
        let sphere = Sphere::at(site.center, config.radius)?;
        let summary = descriptors.evaluate(&index, &sphere, config.options);
        debug!(label = %site.label, atoms = summary.atom_count, "Profiled site.");
        profiles.push(SiteProfile {
            label: site.label,
            center: site.center,
            atom_count: summary.atom_count,
            solvation: summary.solvation,
            hydrophobic_contrast: summary.hydrophobic_contrast,
        });
    }

    info!(sites = profiles.len(), "Profiling complete.");
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::element::Element;
    use crate::hydrophobicity::error::ErrorKind;
    use crate::hydrophobicity::sphere::DescriptorOptions;
    use crate::workflows::config::ProfileConfigBuilder;

    fn zinc_site() -> MolecularSystem {
        let mut system = MolecularSystem::new();
        let chain_a = system.add_chain('A');
        let his = system.add_residue(chain_a, 57, "HIS").unwrap();
        system
            .add_atom_to_residue(his, Atom::new("NE2", Element::N, Point3::new(2.0, 0.0, 0.0)))
            .unwrap();
        system
            .add_atom_to_residue(his, Atom::new("CE1", Element::C, Point3::new(4.0, 0.0, 0.0)))
            .unwrap();
        let asp = system.add_residue(chain_a, 102, "ASP").unwrap();
        system
            .add_atom_to_residue(asp, Atom::new("OD1", Element::O, Point3::new(0.0, 2.0, 0.0)))
            .unwrap();
        system.add_heteroatom(
            Atom::new("ZN", Element::Zn, Point3::origin())
                .with_serial(301)
                .with_charge(2.0),
        );
        system.add_heteroatom(
            Atom::new("O", Element::O, Point3::new(20.0, 0.0, 0.0)).with_serial(401),
        );
        system
    }

    #[test]
    fn metal_target_profiles_each_metal() {
        let system = zinc_site();
        let config = ProfileConfigBuilder::new().radius(2.5).build().unwrap();
        let profiles = run(&system, &config).unwrap();

        assert_eq!(profiles.len(), 1);
        let zn = &profiles[0];
        assert_eq!(zn.label, "Zn301");
        assert_eq!(zn.center, Point3::origin());
        // Zn, HIS NE2, ASP OD1.
        assert_eq!(zn.atom_count, 3);
        assert!((zn.solvation - (0.0 - 23.5 - 23.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn metal_filter_drops_the_centre_atom() {
        let system = zinc_site();
        let config = ProfileConfigBuilder::new()
            .radius(2.5)
            .options(DescriptorOptions::new().metal(false))
            .build()
            .unwrap();
        let profiles = run(&system, &config).unwrap();
        assert_eq!(profiles[0].atom_count, 2);
        assert!((profiles[0].solvation - (-23.5 - 23.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn residue_target_uses_centroids_and_chain_labels() {
        let system = zinc_site();
        let config = ProfileConfigBuilder::new()
            .radius(0.0)
            .target(ProfileTarget::Residues)
            .build()
            .unwrap();
        let profiles = run(&system, &config).unwrap();

        let labels: Vec<&str> = profiles.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["A:HIS57", "A:ASP102"]);
        assert_eq!(profiles[0].center, Point3::new(3.0, 0.0, 0.0));
        assert_eq!(profiles[1].center, Point3::new(0.0, 2.0, 0.0));
        assert_eq!(profiles[1].atom_count, 1);
    }

    #[test]
    fn point_target_labels_points_in_order() {
        let system = zinc_site();
        let config = ProfileConfigBuilder::new()
            .radius(1.0)
            .target(ProfileTarget::Points(vec![
                Point3::new(20.0, 0.0, 0.0),
                Point3::new(50.0, 50.0, 50.0),
            ]))
            .build()
            .unwrap();
        let profiles = run(&system, &config).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].label, "P1");
        assert_eq!(profiles[0].atom_count, 1);
        assert_eq!(profiles[0].solvation, -9.0);
        assert_eq!(profiles[1].label, "P2");
        assert_eq!(profiles[1].atom_count, 0);
        assert_eq!(profiles[1].solvation, 0.0);
        assert_eq!(profiles[1].hydrophobic_contrast, 0.0);
    }

    #[test]
    fn empty_target_set_yields_no_profiles() {
        let mut system = MolecularSystem::new();
        system.add_heteroatom(Atom::new("O", Element::O, Point3::origin()));
        let config = ProfileConfigBuilder::new().radius(5.0).build().unwrap();
        assert!(run(&system, &config).unwrap().is_empty());
    }

    #[test]
    fn invalid_radius_is_reported_even_without_sites() {
        let system = MolecularSystem::new();
        let config = ProfileConfigBuilder::new().radius(-1.0).build().unwrap();
        match run(&system, &config).unwrap_err() {
            ProfileError::Descriptor { source } => {
                assert_eq!(source.kind(), ErrorKind::InvalidValue)
            }
        }
    }

    #[test]
    fn non_finite_point_is_a_type_error() {
        let system = zinc_site();
        let config = ProfileConfigBuilder::new()
            .radius(1.0)
            .target(ProfileTarget::Points(vec![Point3::new(f64::NAN, 0.0, 0.0)]))
            .build()
            .unwrap();
        let ProfileError::Descriptor { source } = run(&system, &config).unwrap_err();
        assert_eq!(source.kind(), ErrorKind::InvalidType);
    }
}
