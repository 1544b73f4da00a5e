use super::atom::Atom;
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId};
use super::query::{AtomFilter, AtomView, SphereQuery};
use super::residue::Residue;
use nalgebra::Point3;
use slotmap::SlotMap;
use std::collections::HashMap;

/// Represents a complete molecular system with atoms, residues and chains.
///
/// Polymer atoms are owned by residues, which are owned by chains. Atoms
/// added through [`MolecularSystem::add_heteroatom`] have no residue and are
/// treated as heteroatoms by sphere queries.
#[derive(Debug, Clone, Default)]
pub struct MolecularSystem {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for efficient ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains using a slot map for efficient ID management.
    chains: SlotMap<ChainId, Chain>,
    /// Lookup map for finding residues by chain ID and residue number.
    residue_id_map: HashMap<(ChainId, isize), ResidueId>,
    /// Lookup map for finding chains by their single-character identifier.
    chain_id_map: HashMap<char, ChainId>,
}

impl MolecularSystem {
    /// Creates a new, empty molecular system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves a mutable reference to an atom by its ID.
    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Returns an iterator over all atoms in the system.
    ///
    /// # Return
    ///
    /// An iterator yielding `(AtomId, &Atom)` pairs.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Number of atoms in the system, heteroatoms included.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Retrieves an immutable reference to a residue by its ID.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Returns an iterator over all residues in the system.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Retrieves an immutable reference to a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all chains in the system.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chains.iter()
    }

    /// Finds a chain ID by its single-character identifier.
    pub fn find_chain_by_id(&self, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&id).copied()
    }

    /// Finds a residue ID by its chain ID and residue number.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The ID of the chain containing the residue.
    /// * `residue_number` - The sequence number of the residue.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if the residue exists, otherwise `None`.
    pub fn find_residue_by_id(
        &self,
        chain_id: ChainId,
        residue_number: isize,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number))
            .copied()
    }

    /// Resolves an atom together with its residue.
    pub fn view(&self, id: AtomId) -> Option<AtomView<'_>> {
        let atom = self.atoms.get(id)?;
        Some(AtomView {
            id,
            atom,
            residue: atom.residue_id.and_then(|rid| self.residues.get(rid)),
        })
    }

    /// Returns an iterator over every atom, resolved with its residue.
    pub fn views(&self) -> impl Iterator<Item = AtomView<'_>> {
        self.atoms.iter().map(|(id, atom)| AtomView {
            id,
            atom,
            residue: atom.residue_id.and_then(|rid| self.residues.get(rid)),
        })
    }

    /// Returns an iterator over atoms that belong to no residue.
    pub fn heteroatoms(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter().filter(|(_, atom)| atom.is_heteroatom())
    }

    /// Returns an iterator over metal atoms, polymer-bound or not.
    pub fn metal_atoms(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter().filter(|(_, atom)| atom.element.is_metal())
    }

    /// Adds a new chain to the system or returns the existing one.
    ///
    /// This method is idempotent; if a chain with the given ID already exists,
    /// it returns the existing chain ID without creating a duplicate.
    pub fn add_chain(&mut self, id: char) -> ChainId {
        *self
            .chain_id_map
            .entry(id)
            .or_insert_with(|| self.chains.insert(Chain::new(id)))
    }

    /// Adds a new residue to the system or returns the existing one.
    ///
    /// This method is idempotent; if a residue with the given chain ID and
    /// residue number already exists, it returns the existing residue ID.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The ID of the chain to add the residue to.
    /// * `residue_number` - The sequence number of the residue.
    /// * `name` - The name of the residue.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` if the chain doesn't exist.
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, residue_number);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(residue_number, name, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a specific residue, linking the atom back to it.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if successful, otherwise `None` if the residue doesn't exist.
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, mut atom: Atom) -> Option<AtomId> {
        let residue = self.residues.get_mut(residue_id)?;
        atom.residue_id = Some(residue_id);
        let name = atom.name.clone();
        let atom_id = self.atoms.insert(atom);
        residue.add_atom(&name, atom_id);
        Some(atom_id)
    }

    /// Adds an atom that belongs to no residue (an ion, a water, a ligand atom).
    ///
    /// Any residue link already present on `atom` is cleared.
    pub fn add_heteroatom(&mut self, mut atom: Atom) -> AtomId {
        atom.residue_id = None;
        self.atoms.insert(atom)
    }

    /// Removes an atom from the system and from its parent residue.
    ///
    /// # Return
    ///
    /// Returns `Some(Atom)` if the atom existed and was removed, otherwise `None`.
    pub fn remove_atom(&mut self, atom_id: AtomId) -> Option<Atom> {
        let atom = self.atoms.remove(atom_id)?;
        if let Some(residue) = atom.residue_id.and_then(|rid| self.residues.get_mut(rid)) {
            residue.remove_atom(&atom.name, atom_id);
        }
        Some(atom)
    }

    /// Removes a residue and all of its atoms.
    ///
    /// # Return
    ///
    /// Returns `Some(Residue)` if the residue existed and was removed, otherwise `None`.
    pub fn remove_residue(&mut self, residue_id: ResidueId) -> Option<Residue> {
        let residue = self.residues.remove(residue_id)?;

        for &atom_id in residue.atoms() {
            self.atoms.remove(atom_id);
        }

        if let Some(chain) = self.chains.get_mut(residue.chain_id) {
            chain.residues.retain(|&id| id != residue_id);
        }
        self.residue_id_map
            .remove(&(residue.chain_id, residue.residue_number));

        Some(residue)
    }
}

impl SphereQuery for MolecularSystem {
    type Atom<'a> = AtomView<'a>;

    /// Exact linear scan over every atom.
    fn atoms_in_sphere(
        &self,
        center: &Point3<f64>,
        radius: f64,
        filter: AtomFilter,
    ) -> Vec<AtomView<'_>> {
        self.views()
            .filter(|view| filter.admits(view.atom.is_heteroatom(), view.atom.element))
            .filter(|view| view.atom.distance_to(center) <= radius)
            .collect()
    }
}
