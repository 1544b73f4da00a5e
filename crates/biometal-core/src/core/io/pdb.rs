use super::element::element_from_name;
use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::element::Element;
use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, warn};

// Coordinates end at column 54; element and charge columns are optional.
const MIN_ATOM_RECORD_LEN: usize = 54;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Invalid formal charge in columns 79-80 (value: '{0}')")]
    InvalidCharge(String),
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

fn parse_float(line_num: usize, value: &str, columns: &str) -> Result<f64, PdbError> {
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: columns.into(),
            value: value.into(),
        },
    })
}

fn parse_int<T: std::str::FromStr>(line_num: usize, value: &str, columns: &str) -> Result<T, PdbError> {
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: columns.into(),
            value: value.into(),
        },
    })
}

/// Parses a PDB formal charge such as `2+`, `1-` or `+1`. Blank is neutral.
fn parse_formal_charge(line_num: usize, value: &str) -> Result<f64, PdbError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    let invalid = || PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidCharge(value.into()),
    };

    let (digits, sign) = match (value.strip_suffix('+'), value.strip_suffix('-')) {
        (Some(d), _) => (d, 1.0),
        (_, Some(d)) => (d, -1.0),
        _ => match (value.strip_prefix('+'), value.strip_prefix('-')) {
            (Some(d), _) => (d, 1.0),
            (_, Some(d)) => (d, -1.0),
            _ => return Err(invalid()),
        },
    };
    let magnitude: u8 = if digits.is_empty() {
        1
    } else {
        digits.parse().map_err(|_| invalid())?
    };
    Ok(sign * f64::from(magnitude))
}

fn is_primary_location(alt_loc: &str) -> bool {
    matches!(alt_loc, "" | "A" | "1")
}

/// Reader for Protein Data Bank (PDB) coordinate files.
///
/// Only the first `MODEL` is read, and only the primary alternate location
/// (blank, `A` or `1`) of each atom is kept. Residues are keyed by chain and
/// sequence number, so insertion codes share their parent residue.
pub struct PdbFile;

impl MolecularFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<MolecularSystem, Self::Error> {
        let mut system = MolecularSystem::new();
        let mut atom_records = 0usize;
        let mut skipped_alt_locs = 0usize;
        let mut current_residue: Option<(char, isize, ResidueId)> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "ATOM" | "HETATM" => {
                    if line.len() < MIN_ATOM_RECORD_LEN {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::LineTooShort,
                        });
                    }
                    if !is_primary_location(slice_and_trim(&line, 16, 17)) {
                        skipped_alt_locs += 1;
                        continue;
                    }

                    let serial: usize = parse_int(line_num, slice_and_trim(&line, 6, 11), "7-11")?;
                    let name_str = slice_and_trim(&line, 12, 16);
                    let res_name_str = slice_and_trim(&line, 17, 20);
                    let chain_id_str = slice_and_trim(&line, 21, 22);
                    let x = parse_float(line_num, slice_and_trim(&line, 30, 38), "31-38")?;
                    let y = parse_float(line_num, slice_and_trim(&line, 38, 46), "39-46")?;
                    let z = parse_float(line_num, slice_and_trim(&line, 46, 54), "47-54")?;
                    let element_str = slice_and_trim(&line, 76, 78);
                    let charge = parse_formal_charge(line_num, slice_and_trim(&line, 78, 80))?;

                    let is_heteroatom = record_type == "HETATM";
                    let element = match Element::from_symbol(element_str) {
                        Element::Unknown => {
                            element_from_name(name_str, is_heteroatom, res_name_str)
                        }
                        element => element,
                    };
                    let atom = Atom::new(name_str, element, Point3::new(x, y, z))
                        .with_serial(serial)
                        .with_charge(charge);
                    atom_records += 1;

                    if is_heteroatom {
                        system.add_heteroatom(atom);
                        continue;
                    }

                    let chain_id: char = chain_id_str.chars().next().unwrap_or('A');
                    let res_id: isize = parse_int(line_num, slice_and_trim(&line, 22, 26), "23-26")?;
                    let residue_id = match current_residue {
                        Some((chain, number, id)) if chain == chain_id && number == res_id => id,
                        _ => {
                            let chain = system.add_chain(chain_id);
                            let id = system.add_residue(chain, res_id, res_name_str).ok_or_else(
                                || PdbError::Inconsistency(format!("Chain '{}' vanished", chain_id)),
                            )?;
                            current_residue = Some((chain_id, res_id, id));
                            id
                        }
                    };
                    system.add_atom_to_residue(residue_id, atom).ok_or_else(|| {
                        PdbError::Inconsistency(format!(
                            "Residue {} of chain '{}' vanished",
                            res_id, chain_id
                        ))
                    })?;
                }
                "ENDMDL" | "END" => break,
                _ => {}
            }
        }

        if atom_records == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        if skipped_alt_locs > 0 {
            warn!(skipped = skipped_alt_locs, "Ignored alternate atom locations.");
        }
        debug!(atoms = system.atom_count(), "Parsed PDB structure.");
        Ok(system)
    }
}
