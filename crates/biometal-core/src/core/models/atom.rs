use super::element::Element;
use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom in a molecular structure.
///
/// An atom either belongs to a polymer residue or, when `residue_id` is
/// `None`, is a heteroatom: a bound ion, a water oxygen, a ligand atom.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The serial number from the source file, `0` when built in memory.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "OE1"). Empty when unnamed.
    pub name: String,
    /// The chemical element.
    pub element: Element,
    /// The explicit (formal) charge in elementary charge units, `0.0` if neutral.
    pub charge: f64,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The residue this atom belongs to, if any.
    pub residue_id: Option<ResidueId>,
}

impl Atom {
    /// Creates a neutral, residue-less atom.
    ///
    /// The residue link is filled in by
    /// [`MolecularSystem::add_atom_to_residue`](super::system::MolecularSystem::add_atom_to_residue).
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `element` - The chemical element.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, element: Element, position: Point3<f64>) -> Self {
        Self {
            serial: 0,
            name: name.to_string(),
            element,
            charge: 0.0,
            position,
            residue_id: None,
        }
    }

    /// Sets the explicit charge.
    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = charge;
        self
    }

    /// Sets the source-file serial number.
    pub fn with_serial(mut self, serial: usize) -> Self {
        self.serial = serial;
        self
    }

    /// Whether this atom sits outside any polymer residue.
    pub fn is_heteroatom(&self) -> bool {
        self.residue_id.is_none()
    }

    /// Euclidean distance to `point` in Angstroms.
    pub fn distance_to(&self, point: &Point3<f64>) -> f64 {
        nalgebra::distance(&self.position, point)
    }
}
