use crate::core::models::ids::AtomId;
use crate::core::models::query::{AtomFilter, AtomView, SphereQuery};
use crate::core::models::system::MolecularSystem;
use kiddo::{KdTree, SquaredEuclidean};
use nalgebra::Point3;
use std::collections::HashMap;
use tracing::debug;

// Widens the k-d tree search so boundary atoms survive rounding; the exact
// `distance <= radius` test is applied afterwards.
const SEARCH_PADDING: f64 = 1e-9;

// Leaf capacity of `kiddo::KdTree<f64, 3>`. A leaf whose items all share the
// split-axis value cannot be split.
const BUCKET_SIZE: usize = 32;

/// A [`MolecularSystem`] paired with a k-d tree over its atom positions.
///
/// Answers the same sphere queries as the system itself, in the same order,
/// without scanning every atom. Worth building when many spheres are queried
/// against one unchanging structure.
///
/// When 32 or more atoms share a coordinate on any axis (stacked ions, planar
/// models) no tree is built and queries fall back to the linear scan of the
/// underlying system.
pub struct IndexedSystem<'s> {
    system: &'s MolecularSystem,
    atom_ids: Vec<AtomId>,
    tree: Option<KdTree<f64, 3>>,
}

impl<'s> IndexedSystem<'s> {
    pub fn new(system: &'s MolecularSystem) -> Self {
        let (atom_ids, positions): (Vec<AtomId>, Vec<[f64; 3]>) = system
            .atoms_iter()
            .map(|(id, atom)| (id, [atom.position.x, atom.position.y, atom.position.z]))
            .unzip();

        let tree = if positions.is_empty() {
            None
        } else if !splittable(&positions) {
            debug!(
                atoms = atom_ids.len(),
                "Too many atoms share a coordinate for a k-d tree; using linear scans."
            );
            None
        } else {
            Some((&positions).into())
        };
        debug!(atoms = atom_ids.len(), indexed = tree.is_some(), "Built spatial index.");

        Self {
            system,
            atom_ids,
            tree,
        }
    }

    pub fn system(&self) -> &'s MolecularSystem {
        self.system
    }
}

fn splittable(positions: &[[f64; 3]]) -> bool {
    (0..3).all(|axis| {
        let mut counts: HashMap<u64, usize> = HashMap::new();
        positions.iter().all(|position| {
            // `+ 0.0` folds -0.0 into 0.0.
            let count = counts.entry((position[axis] + 0.0).to_bits()).or_insert(0);
            *count += 1;
            *count < BUCKET_SIZE
        })
    })
}

impl SphereQuery for IndexedSystem<'_> {
    type Atom<'a>
        = AtomView<'a>
    where
        Self: 'a;

    fn atoms_in_sphere(
        &self,
        center: &Point3<f64>,
        radius: f64,
        filter: AtomFilter,
    ) -> Vec<AtomView<'_>> {
        let Some(tree) = &self.tree else {
            return self.system.atoms_in_sphere(center, radius, filter);
        };

        let search_radius = radius + SEARCH_PADDING;
        let mut hits: Vec<usize> = tree
            .within_unsorted::<SquaredEuclidean>(
                &[center.x, center.y, center.z],
                search_radius * search_radius,
            )
            .into_iter()
            .map(|neighbour| neighbour.item as usize)
            .collect();
        hits.sort_unstable();

        hits.into_iter()
            .filter_map(|index| self.system.view(self.atom_ids[index]))
            .filter(|view| filter.admits(view.atom.is_heteroatom(), view.atom.element))
            .filter(|view| view.atom.distance_to(center) <= radius)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::element::Element;

    fn grid_system() -> MolecularSystem {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A');
        let mut residue_number = 0;
        for i in 0..5 {
            for j in 0..5 {
                residue_number += 1;
                let residue_id = system.add_residue(chain_id, residue_number, "ALA").unwrap();
                for k in 0..4 {
                    let position = Point3::new(i as f64 * 1.5, j as f64 * 1.5, k as f64 * 1.5);
                    system
                        .add_atom_to_residue(residue_id, Atom::new("CA", Element::C, position))
                        .unwrap();
                }
            }
        }
        system.add_heteroatom(Atom::new("ZN", Element::Zn, Point3::new(3.0, 3.0, 2.25)));
        system.add_heteroatom(Atom::new("O", Element::O, Point3::new(4.5, 3.0, 2.25)));
        system
    }

    fn ids(views: &[AtomView<'_>]) -> Vec<AtomId> {
        views.iter().map(|view| view.id).collect()
    }

    #[test]
    fn matches_linear_scan_for_many_spheres() {
        let system = grid_system();
        let index = IndexedSystem::new(&system);

        let centers = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 3.0, 2.25),
            Point3::new(6.0, 1.5, 4.5),
            Point3::new(-10.0, 0.0, 0.0),
        ];
        for center in centers {
            for radius in [0.0, 1.5, 2.2, 4.0, 50.0] {
                for filter in [
                    AtomFilter::default(),
                    AtomFilter::new(false, true),
                    AtomFilter::new(true, false),
                    AtomFilter::new(false, false),
                ] {
                    let linear = system.atoms_in_sphere(&center, radius, filter);
                    let indexed = index.atoms_in_sphere(&center, radius, filter);
                    assert_eq!(ids(&linear), ids(&indexed), "center {center:?} radius {radius}");
                }
            }
        }
    }

    #[test]
    fn boundary_atoms_are_included() {
        let system = grid_system();
        let index = IndexedSystem::new(&system);
        let hits = index.atoms_in_sphere(&Point3::origin(), 1.5, AtomFilter::default());
        // Origin plus its three axis neighbours at exactly 1.5 Å.
        assert_eq!(hits.len(), 4);
    }

    fn assert_matches_linear_scan(system: &MolecularSystem, index: &IndexedSystem<'_>) {
        for center in [
            Point3::origin(),
            Point3::new(1.0, 0.5, 0.0),
            Point3::new(5.0, 5.0, 2.0),
        ] {
            for radius in [0.0, 0.5, 3.0, 100.0] {
                for filter in [AtomFilter::default(), AtomFilter::new(false, true)] {
                    let linear = system.atoms_in_sphere(&center, radius, filter);
                    let indexed = index.atoms_in_sphere(&center, radius, filter);
                    assert_eq!(ids(&linear), ids(&indexed), "center {center:?} radius {radius}");
                }
            }
        }
    }

    #[test]
    fn coincident_atoms_fall_back_to_linear_scan() {
        let mut system = MolecularSystem::new();
        for _ in 0..40 {
            system.add_heteroatom(Atom::new("ZN", Element::Zn, Point3::origin()));
        }
        system.add_heteroatom(Atom::new("O", Element::O, Point3::new(2.0, 0.0, 0.0)));

        let index = IndexedSystem::new(&system);
        assert!(index.tree.is_none());
        assert_eq!(
            index
                .atoms_in_sphere(&Point3::origin(), 1.0, AtomFilter::default())
                .len(),
            40
        );
        assert_matches_linear_scan(&system, &index);
    }

    #[test]
    fn flat_structure_falls_back_to_linear_scan() {
        let mut system = MolecularSystem::new();
        for i in 0..20 {
            for j in 0..10 {
                let position = Point3::new(i as f64 * 0.5, j as f64 * 0.5, 0.0);
                system.add_heteroatom(Atom::new("C", Element::C, position));
            }
        }
        assert_eq!(system.atom_count(), 200);

        let index = IndexedSystem::new(&system);
        assert!(index.tree.is_none());
        assert_matches_linear_scan(&system, &index);
    }

    #[test]
    fn grid_structure_builds_a_tree() {
        let system = grid_system();
        assert!(IndexedSystem::new(&system).tree.is_some());
    }

    #[test]
    fn empty_system_yields_empty_spheres() {
        let system = MolecularSystem::new();
        let index = IndexedSystem::new(&system);
        assert!(
            index
                .atoms_in_sphere(&Point3::origin(), 100.0, AtomFilter::default())
                .is_empty()
        );
    }
}
