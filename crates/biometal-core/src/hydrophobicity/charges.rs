use phf::{Map, phf_map};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

// AMBER ff14SB partial charges. Backbone atoms share one set of values across
// the amino acids; side-chain entries take precedence where both exist
// (glycine's HA2/HA3).

static BACKBONE: Map<&'static str, f64> = phf_map! {
    "N" => -0.4157, "H" => 0.2719, "HN" => 0.2719,
    "CA" => 0.0337, "HA" => 0.0823, "HA2" => 0.0823, "HA3" => 0.0823,
    "C" => 0.5973, "O" => -0.5679, "OXT" => -0.8055,
};

static ALA: Map<&'static str, f64> = phf_map! {
    "CB" => -0.1825, "HB1" => 0.0603, "HB2" => 0.0603, "HB3" => 0.0603,
};

static ARG: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0007, "HB2" => 0.0327, "HB3" => 0.0327,
    "CG" => 0.0390, "HG2" => 0.0285, "HG3" => 0.0285,
    "CD" => 0.0486, "HD2" => 0.0687, "HD3" => 0.0687,
    "NE" => -0.5295, "HE" => 0.3456, "CZ" => 0.8076,
    "NH1" => -0.8627, "NH2" => -0.8627,
    "HH11" => 0.4478, "HH12" => 0.4478, "HH21" => 0.4478, "HH22" => 0.4478,
};

static ASN: Map<&'static str, f64> = phf_map! {
    "CB" => -0.2041, "HB2" => 0.0797, "HB3" => 0.0797,
    "CG" => 0.7130, "OD1" => -0.5931, "ND2" => -0.9191,
    "HD21" => 0.4196, "HD22" => 0.4196,
};

static ASP: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0303, "HB2" => -0.0122, "HB3" => -0.0122,
    "CG" => 0.7994, "OD1" => -0.8014, "OD2" => -0.8014,
};

static CYS: Map<&'static str, f64> = phf_map! {
    "CB" => -0.1231, "HB2" => 0.1112, "HB3" => 0.1112,
    "SG" => -0.3119, "HG" => 0.1933,
};

static GLN: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0036, "HB2" => 0.0171, "HB3" => 0.0171,
    "CG" => -0.0645, "HG2" => 0.0352, "HG3" => 0.0352,
    "CD" => 0.6951, "OE1" => -0.6086, "NE2" => -0.9407,
    "HE21" => 0.4251, "HE22" => 0.4251,
};

static GLU: Map<&'static str, f64> = phf_map! {
    "CB" => 0.0560, "HB2" => -0.0173, "HB3" => -0.0173,
    "CG" => 0.0136, "HG2" => -0.0425, "HG3" => -0.0425,
    "CD" => 0.8054, "OE1" => -0.8188, "OE2" => -0.8188,
};

static GLY: Map<&'static str, f64> = phf_map! {
    "HA2" => 0.0698, "HA3" => 0.0698,
};

// Neutral, proton on ND1. Also used for plain HIS.
static HID: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0414, "HB2" => 0.0367, "HB3" => 0.0367,
    "CG" => -0.0012, "ND1" => -0.3811, "HD1" => 0.3649,
    "CE1" => 0.2057, "HE1" => 0.1392, "NE2" => -0.5727,
    "CD2" => 0.1292, "HD2" => 0.1147,
};

static HIE: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0581, "HB2" => 0.0367, "HB3" => 0.0367,
    "CG" => 0.1868, "ND1" => -0.5432, "CE1" => 0.1635,
    "HE1" => 0.1435, "NE2" => -0.2795, "HE2" => 0.3339,
    "CD2" => -0.2207, "HD2" => 0.1862,
};

static HIP: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0236, "HB2" => 0.0519, "HB3" => 0.0519,
    "CG" => -0.0017, "ND1" => -0.1513, "HD1" => 0.3866,
    "CE1" => -0.0170, "HE1" => 0.2681, "NE2" => -0.1718,
    "HE2" => 0.3911, "CD2" => -0.1141, "HD2" => 0.2317,
};

static ILE: Map<&'static str, f64> = phf_map! {
    "CB" => 0.1303, "HB" => 0.0187,
    "CG1" => -0.0430, "HG12" => 0.0236, "HG13" => 0.0236,
    "CG2" => -0.3204, "HG21" => 0.0882, "HG22" => 0.0882, "HG23" => 0.0882,
    "CD1" => -0.0660, "HD11" => 0.0186, "HD12" => 0.0186, "HD13" => 0.0186,
};

static LEU: Map<&'static str, f64> = phf_map! {
    "CB" => -0.2106, "HB2" => 0.0457, "HB3" => 0.0457,
    "CG" => 0.3531, "HG" => -0.0361,
    "CD1" => -0.4121, "CD2" => -0.4121,
    "HD11" => 0.1000, "HD12" => 0.1000, "HD13" => 0.1000,
    "HD21" => 0.1000, "HD22" => 0.1000, "HD23" => 0.1000,
};

static LYS: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0094, "HB2" => 0.0362, "HB3" => 0.0362,
    "CG" => 0.0187, "HG2" => 0.0103, "HG3" => 0.0103,
    "CD" => -0.0479, "HD2" => 0.0621, "HD3" => 0.0621,
    "CE" => -0.0143, "HE2" => 0.1135, "HE3" => 0.1135,
    "NZ" => -0.3854, "HZ1" => 0.3400, "HZ2" => 0.3400, "HZ3" => 0.3400,
};

static MET: Map<&'static str, f64> = phf_map! {
    "CB" => 0.0342, "HB2" => 0.0241, "HB3" => 0.0241,
    "CG" => 0.0018, "HG2" => 0.0440, "HG3" => 0.0440,
    "SD" => -0.2737, "CE" => -0.0536,
    "HE1" => 0.0684, "HE2" => 0.0684, "HE3" => 0.0684,
};

static PHE: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0343, "HB2" => 0.0295, "HB3" => 0.0295,
    "CG" => 0.0118, "CD1" => -0.1256, "CD2" => -0.1256,
    "HD1" => 0.1330, "HD2" => 0.1330,
    "CE1" => -0.1704, "CE2" => -0.1704, "HE1" => 0.1430, "HE2" => 0.1430,
    "CZ" => -0.1072, "HZ" => 0.1297,
};

static PRO: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0070, "HB2" => 0.0253, "HB3" => 0.0253,
    "CG" => 0.0189, "HG2" => 0.0213, "HG3" => 0.0213,
    "CD" => 0.0192, "HD2" => 0.0391, "HD3" => 0.0391,
};

static SER: Map<&'static str, f64> = phf_map! {
    "CB" => 0.2117, "HB2" => 0.0352, "HB3" => 0.0352,
    "OG" => -0.6546, "HG" => 0.4275,
};

static THR: Map<&'static str, f64> = phf_map! {
    "CB" => 0.3654, "HB" => 0.0043, "OG1" => -0.6761, "HG1" => 0.4102,
    "CG2" => -0.2438, "HG21" => 0.0642, "HG22" => 0.0642, "HG23" => 0.0642,
};

static TRP: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0050, "HB2" => 0.0339, "HB3" => 0.0339,
    "CG" => -0.1415, "CD1" => -0.1638, "HD1" => 0.2062,
    "NE1" => -0.3418, "HE1" => 0.3412, "CE2" => 0.1380,
    "CZ2" => -0.2601, "HZ2" => 0.1572, "CH2" => -0.1134, "HH2" => 0.1417,
    "CZ3" => -0.1972, "HZ3" => 0.1447, "CE3" => -0.2387, "HE3" => 0.1700,
    "CD2" => 0.1243,
};

static TYR: Map<&'static str, f64> = phf_map! {
    "CB" => -0.0152, "HB2" => 0.0295, "HB3" => 0.0295,
    "CG" => -0.0011, "CD1" => -0.1906, "CD2" => -0.1906,
    "HD1" => 0.1699, "HD2" => 0.1699,
    "CE1" => -0.2341, "CE2" => -0.2341, "HE1" => 0.1656, "HE2" => 0.1656,
    "CZ" => 0.3226, "OH" => -0.5579, "HH" => 0.3992,
};

static VAL: Map<&'static str, f64> = phf_map! {
    "CB" => 0.2985, "HB" => -0.0297, "CG1" => -0.3192, "CG2" => -0.3192,
    "HG11" => 0.0791, "HG12" => 0.0791, "HG13" => 0.0791,
    "HG21" => 0.0791, "HG22" => 0.0791, "HG23" => 0.0791,
};

// TIP3P.
static WATER: Map<&'static str, f64> = phf_map! {
    "O" => -0.834, "OW" => -0.834, "OH2" => -0.834,
    "H1" => 0.417, "H2" => 0.417, "HW1" => 0.417, "HW2" => 0.417,
};

static AMINO_ACIDS: Map<&'static str, &'static Map<&'static str, f64>> = phf_map! {
    "ALA" => &ALA, "ARG" => &ARG, "ASN" => &ASN, "ASP" => &ASP, "CYS" => &CYS,
    "GLN" => &GLN, "GLU" => &GLU, "GLY" => &GLY, "HIS" => &HID, "HID" => &HID,
    "HIE" => &HIE, "HIP" => &HIP, "ILE" => &ILE, "LEU" => &LEU, "LYS" => &LYS,
    "MET" => &MET, "PHE" => &PHE, "PRO" => &PRO, "SER" => &SER, "THR" => &THR,
    "TRP" => &TRP, "TYR" => &TYR, "VAL" => &VAL,
};

static SOLVENT: Map<&'static str, &'static Map<&'static str, f64>> = phf_map! {
    "HOH" => &WATER, "WAT" => &WATER, "SOL" => &WATER, "TIP3" => &WATER, "TIP3P" => &WATER,
};

fn builtin_charge(residue: &str, atom: &str) -> Option<f64> {
    if let Some(side_chain) = AMINO_ACIDS.get(residue) {
        return side_chain.get(atom).or_else(|| BACKBONE.get(atom)).copied();
    }
    SOLVENT.get(residue).and_then(|map| map.get(atom)).copied()
}

#[derive(Debug, Error)]
pub enum ChargeTableError {
    #[error("Failed to read charge table '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse charge table: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Residue-name → atom-name → partial charge lookup.
///
/// The built-in AMBER ff14SB values always answer; custom entries loaded from
/// TOML shadow them. A custom table file looks like:
///
/// ```toml
/// [HEM]
/// FE = 0.4
/// NA = -0.1
///
/// [GLU]
/// OE1 = -0.9
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialChargeTable {
    custom: HashMap<String, HashMap<String, f64>>,
}

impl PartialChargeTable {
    /// The built-in table with no custom entries.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ChargeTableError> {
        let custom: HashMap<String, HashMap<String, f64>> = toml::from_str(content)?;
        Ok(Self { custom })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChargeTableError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ChargeTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            residues = table.custom.len(),
            "Loaded custom partial charges."
        );
        Ok(table)
    }

    pub fn with_entry(mut self, residue: &str, atom: &str, charge: f64) -> Self {
        self.custom
            .entry(residue.to_string())
            .or_default()
            .insert(atom.to_string(), charge);
        self
    }

    /// Charge for `atom` in `residue`, or `None` when neither the custom
    /// entries nor the built-in table know the pair.
    pub fn get(&self, residue: &str, atom: &str) -> Option<f64> {
        let (residue, atom) = (residue.trim(), atom.trim());
        self.custom
            .get(residue)
            .and_then(|atoms| atoms.get(atom))
            .copied()
            .or_else(|| builtin_charge(residue, atom))
    }
}
