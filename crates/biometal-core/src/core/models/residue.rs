use super::ids::{AtomId, ChainId};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub residue_number: isize,              // Residue sequence number from source file
    pub name: String,                       // Name of the residue (e.g., "GLU", "HIS")
    pub chain_id: ChainId,                  // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,          // Atoms belonging to this residue, in insertion order
    atom_name_map: HashMap<String, AtomId>, // Map from atom name to its first stable ID
}

impl Residue {
    pub(crate) fn new(residue_number: isize, name: &str, chain_id: ChainId) -> Self {
        Self {
            residue_number,
            name: name.to_string(),
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map
            .entry(atom_name.to_string())
            .or_insert(atom_id);
    }

    pub(crate) fn remove_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.retain(|&id| id != atom_id);
        if self.atom_name_map.get(atom_name) == Some(&atom_id) {
            self.atom_name_map.remove(atom_name);
        }
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;
    use std::collections::HashSet;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    fn dummy_chain_id(n: u64) -> ChainId {
        ChainId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn new_residue_initializes_fields_correctly() {
        let chain_id = dummy_chain_id(1);
        let residue = Residue::new(10, "GLU", chain_id);
        assert_eq!(residue.residue_number, 10);
        assert_eq!(residue.name, "GLU");
        assert_eq!(residue.chain_id, chain_id);
        assert!(residue.atoms().is_empty());
        assert!(residue.get_atom_id_by_name("OE1").is_none());
    }

    #[test]
    fn add_atom_adds_atom_and_maps_name() {
        let mut residue = Residue::new(5, "ASP", dummy_chain_id(2));
        let atom_id = dummy_atom_id(42);
        residue.add_atom("OD1", atom_id);
        assert_eq!(residue.atoms(), &[atom_id]);
        assert_eq!(residue.get_atom_id_by_name("OD1"), Some(atom_id));
    }

    #[test]
    fn add_atom_allows_multiple_atoms_with_different_names() {
        let mut residue = Residue::new(7, "HIS", dummy_chain_id(3));
        let atom_id1 = dummy_atom_id(1);
        let atom_id2 = dummy_atom_id(2);
        residue.add_atom("ND1", atom_id1);
        residue.add_atom("NE2", atom_id2);
        let atom_set: HashSet<_> = residue.atoms().iter().copied().collect();
        assert!(atom_set.contains(&atom_id1));
        assert!(atom_set.contains(&atom_id2));
        assert_eq!(residue.get_atom_id_by_name("ND1"), Some(atom_id1));
        assert_eq!(residue.get_atom_id_by_name("NE2"), Some(atom_id2));
    }

    #[test]
    fn duplicate_names_keep_first_mapping() {
        let mut residue = Residue::new(1, "GLY", dummy_chain_id(4));
        residue.add_atom("HA", dummy_atom_id(1));
        residue.add_atom("HA", dummy_atom_id(2));
        assert_eq!(residue.atoms().len(), 2);
        assert_eq!(residue.get_atom_id_by_name("HA"), Some(dummy_atom_id(1)));
    }

    #[test]
    fn remove_atom_removes_atom_and_name_mapping() {
        let mut residue = Residue::new(8, "ARG", dummy_chain_id(5));
        let atom_id = dummy_atom_id(100);
        residue.add_atom("NH1", atom_id);
        residue.remove_atom("NH1", atom_id);
        assert!(residue.atoms().is_empty());
        assert!(residue.get_atom_id_by_name("NH1").is_none());
    }

    #[test]
    fn remove_atom_does_nothing_if_atom_not_present() {
        let mut residue = Residue::new(9, "VAL", dummy_chain_id(6));
        let atom_id = dummy_atom_id(200);
        residue.add_atom("CG1", atom_id);
        residue.remove_atom("CG2", dummy_atom_id(201));
        assert_eq!(residue.atoms(), &[atom_id]);
        assert_eq!(residue.get_atom_id_by_name("CG1"), Some(atom_id));
    }
}
