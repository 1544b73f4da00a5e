use super::element::{element_from_force_field_type, element_from_name};
use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;
use nalgebra::Point3;
use std::collections::HashSet;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

// BGF charges are force-field partial charges; only whole-number values are
// taken as the explicit (formal) charge of the atom.
const INTEGRAL_CHARGE_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error)]
pub enum BgfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: BgfParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum BgfParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 80 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_float(line_num: usize, value: &str, columns: &str) -> Result<f64, BgfError> {
    value.parse().map_err(|_| BgfError::Parse {
        line: line_num,
        kind: BgfParseErrorKind::InvalidFloat {
            columns: columns.into(),
            value: value.into(),
        },
    })
}

fn parse_int<T: std::str::FromStr>(line_num: usize, value: &str, columns: &str) -> Result<T, BgfError> {
    value.parse().map_err(|_| BgfError::Parse {
        line: line_num,
        kind: BgfParseErrorKind::InvalidInt {
            columns: columns.into(),
            value: value.into(),
        },
    })
}

fn formal_charge(partial: f64) -> f64 {
    let rounded = partial.round();
    if (partial - rounded).abs() < INTEGRAL_CHARGE_TOLERANCE {
        rounded
    } else {
        0.0
    }
}

/// Reader for the Biograph (BGF) fixed-column format.
///
/// `ATOM` records join their residue; `HETATM` records become heteroatoms.
pub struct BgfFile;

impl MolecularFile for BgfFile {
    type Error = BgfError;

    fn read_from(reader: &mut impl BufRead) -> Result<MolecularSystem, Self::Error> {
        let mut system = MolecularSystem::new();
        let mut seen_serials = HashSet::new();
        let mut current_residue: Option<(char, isize, ResidueId)> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "ATOM" | "HETATM" => {
                    if line.len() < 80 {
                        return Err(BgfError::Parse {
                            line: line_num,
                            kind: BgfParseErrorKind::LineTooShort,
                        });
                    }

                    let serial_str = slice_and_trim(&line, 7, 12);
                    let name_str = slice_and_trim(&line, 13, 18);
                    let res_name_str = slice_and_trim(&line, 19, 22);
                    let chain_id_str = slice_and_trim(&line, 23, 24);
                    let res_id_str = slice_and_trim(&line, 25, 30);
                    let ff_type_str = slice_and_trim(&line, 61, 66);
                    let charge_str = slice_and_trim(&line, 72, 80);

                    if name_str.is_empty() {
                        return Err(BgfError::Parse {
                            line: line_num,
                            kind: BgfParseErrorKind::MissingRequiredField {
                                columns: "14-18".into(),
                            },
                        });
                    }
                    let serial: usize = parse_int(line_num, serial_str, "8-12")?;
                    if !seen_serials.insert(serial) {
                        return Err(BgfError::Inconsistency(format!(
                            "Duplicate atom serial: {}",
                            serial
                        )));
                    }
                    let x = parse_float(line_num, slice_and_trim(&line, 30, 40), "31-40")?;
                    let y = parse_float(line_num, slice_and_trim(&line, 40, 50), "41-50")?;
                    let z = parse_float(line_num, slice_and_trim(&line, 50, 60), "51-60")?;
                    let charge = if charge_str.is_empty() {
                        0.0
                    } else {
                        parse_float(line_num, charge_str, "73-80")?
                    };

                    let is_heteroatom = record_type == "HETATM";
                    let element = element_from_force_field_type(ff_type_str).unwrap_or_else(|| {
                        element_from_name(name_str, is_heteroatom, res_name_str)
                    });
                    let atom = Atom::new(name_str, element, Point3::new(x, y, z))
                        .with_serial(serial)
                        .with_charge(formal_charge(charge));

                    if is_heteroatom {
                        system.add_heteroatom(atom);
                        continue;
                    }

                    let chain_id: char = chain_id_str.chars().next().unwrap_or('A');
                    let res_id: isize = parse_int(line_num, res_id_str, "26-30")?;
                    let residue_id = match current_residue {
                        Some((chain, number, id)) if chain == chain_id && number == res_id => id,
                        _ => {
                            let chain = system.add_chain(chain_id);
                            let id = system.add_residue(chain, res_id, res_name_str).ok_or_else(
                                || BgfError::Inconsistency(format!("Chain '{}' vanished", chain_id)),
                            )?;
                            current_residue = Some((chain_id, res_id, id));
                            id
                        }
                    };
                    system.add_atom_to_residue(residue_id, atom).ok_or_else(|| {
                        BgfError::Inconsistency(format!(
                            "Residue {} of chain '{}' vanished",
                            res_id, chain_id
                        ))
                    })?;
                }
                "END" => break,
                _ => {}
            }
        }

        if seen_serials.is_empty() {
            return Err(BgfError::MissingRecord("ATOM/HETATM records".into()));
        }
        debug!(atoms = system.atom_count(), "Parsed BGF structure.");
        Ok(system)
    }
}
