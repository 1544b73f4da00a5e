pub mod point;
pub mod profile;

use crate::error::{CliError, Result};
use biometal::core::io::{bgf::BgfFile, pdb::PdbFile, traits::MolecularFile};
use biometal::core::models::system::MolecularSystem;
use std::path::Path;
use tracing::info;

/// Loads a structure, choosing the reader from the file extension.
pub fn read_structure(path: &Path) -> Result<MolecularSystem> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    info!("Loading input structure from {:?}", path);
    let system = match extension.as_deref() {
        Some("bgf") => BgfFile::read_from_path(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?,
        Some("pdb") | Some("ent") => {
            PdbFile::read_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?
        }
        _ => {
            return Err(CliError::Argument(format!(
                "Unsupported structure format for '{}'. Expected a .bgf, .pdb or .ent file.",
                path.display()
            )));
        }
    };
    info!(
        atoms = system.atom_count(),
        "Structure loaded."
    );
    Ok(system)
}

#[cfg(test)]
pub(crate) mod test_support {
    pub const SITE_PDB: &str = "\
ATOM      1  NE2 HIS A  57       2.000   0.000   0.000  1.00  0.00           N
ATOM      2  CE1 HIS A  57       4.000   0.000   0.000  1.00  0.00           C
ATOM      3  OD1 ASP A 102       0.000   2.000   0.000  1.00  0.00           O
HETATM    4 ZN    ZN A 301       0.000   0.000   0.000  1.00  0.00          ZN2+
HETATM    5  O   HOH A 401      20.000   0.000   0.000  1.00  0.00           O
END
";
}

#[cfg(test)]
mod tests {
    use super::test_support::SITE_PDB;
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_pdb_files_by_extension() {
        let dir = tempdir().unwrap();
        for name in ["site.pdb", "site.ENT"] {
            let path = dir.path().join(name);
            fs::write(&path, SITE_PDB).unwrap();
            let system = read_structure(&path).unwrap();
            assert_eq!(system.atom_count(), 5);
            assert_eq!(system.metal_atoms().count(), 1);
        }
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.cif");
        fs::write(&path, SITE_PDB).unwrap();
        assert!(matches!(read_structure(&path), Err(CliError::Argument(_))));
    }

    #[test]
    fn parse_failures_name_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.bgf");
        fs::write(&path, "ATOM      1 N\n").unwrap();
        match read_structure(&path) {
            Err(CliError::FileParsing { path: p, .. }) => assert_eq!(p, path),
            _ => panic!("expected FileParsing error"),
        }
    }
}
