use super::charges::PartialChargeTable;
use crate::core::models::element::Element;
use crate::core::models::query::AtomRecord;

const CARBON: f64 = 18.0;
const SULFUR: f64 = -5.0;
const CHARGED_OXYGEN: f64 = -37.0;
const CHARGED_NITROGEN: f64 = -38.0;
const CARBOXYLATE_OXYGEN: f64 = -23.0;
const CATIONIC_NITROGEN: f64 = -23.5;
const POLAR_DEFAULT: f64 = -9.0;

fn is_carboxylate_oxygen(residue: &str, atom: &str) -> bool {
    matches!(
        (residue, atom),
        ("GLU", "OE1" | "OE2") | ("ASP", "OD1" | "OD2")
    )
}

fn is_cationic_nitrogen(residue: &str, atom: &str) -> bool {
    matches!(
        (residue, atom),
        ("HIS", "ND1" | "NE2") | ("ARG", "NH1" | "NH2")
    )
}

/// Atomic solvation parameter of an atom (Yamashita et al., 1990).
///
/// Carbon is hydrophobic (18) and sulfur mildly hydrophilic (-5). Oxygen and
/// nitrogen depend on context: an explicit charge gives -37 / -38; the
/// side-chain oxygens of Glu/Asp give -23 and the side-chain nitrogens of
/// His/Arg give -23.5; any other O or N gives -9. Every other element is 0.
pub fn atom_solvation(atom: &impl AtomRecord) -> f64 {
    let element = atom.element();
    match element {
        Element::C => CARBON,
        Element::S => SULFUR,
        Element::O | Element::N => {
            if atom.charge() != 0.0 {
                return if element == Element::O {
                    CHARGED_OXYGEN
                } else {
                    CHARGED_NITROGEN
                };
            }
            let site = atom.residue_name().zip(atom.name());
            match (element, site) {
                (Element::O, Some((res, name))) if is_carboxylate_oxygen(res, name) => {
                    CARBOXYLATE_OXYGEN
                }
                (Element::N, Some((res, name))) if is_cationic_nitrogen(res, name) => {
                    CATIONIC_NITROGEN
                }
                _ => POLAR_DEFAULT,
            }
        }
        _ => 0.0,
    }
}

/// Partial charge of an atom against the built-in charge table.
pub fn atom_partial_charge(atom: &impl AtomRecord) -> f64 {
    atom_partial_charge_from(atom, &PartialChargeTable::builtin())
}

/// Partial charge of an atom: its explicit charge when non-zero, else the
/// table entry for its residue and name, else 0.
pub fn atom_partial_charge_from(atom: &impl AtomRecord, table: &PartialChargeTable) -> f64 {
    let charge = atom.charge();
    if charge != 0.0 {
        return charge;
    }
    atom.residue_name()
        .zip(atom.name())
        .and_then(|(residue, name)| table.get(residue, name))
        .unwrap_or(0.0)
}

/// Per-atom value aggregated over a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classifier {
    #[default]
    SolvationParameter,
    SquaredPartialCharge,
}

impl Classifier {
    pub fn from_partial_charges(partial_charges: bool) -> Self {
        if partial_charges {
            Self::SquaredPartialCharge
        } else {
            Self::SolvationParameter
        }
    }

    pub fn value(self, atom: &impl AtomRecord, table: &PartialChargeTable) -> f64 {
        match self {
            Self::SolvationParameter => atom_solvation(atom),
            Self::SquaredPartialCharge => atom_partial_charge_from(atom, table).powi(2),
        }
    }
}
