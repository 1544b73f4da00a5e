use nalgebra::Point3;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid point '{0}'. Expected three comma-separated numbers 'X,Y,Z' (e.g., '1.5,-2.0,3').")]
    InvalidPointFormat(String),

    #[error("Invalid number '{value}' in point '{point}'.")]
    InvalidCoordinate { point: String, value: String },

    #[error("Line {line}: {reason}")]
    PointsFile { line: usize, reason: String },
}

/// Parses `"X,Y,Z"` into a point. Surrounding whitespace around each
/// component is ignored.
pub fn parse_point(s: &str) -> Result<Point3<f64>, ParseError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(ParseError::InvalidPointFormat(s.to_string()));
    }

    let mut coords = [0.0; 3];
    for (coord, part) in coords.iter_mut().zip(&parts) {
        *coord = part.parse().map_err(|_| ParseError::InvalidCoordinate {
            point: s.to_string(),
            value: part.to_string(),
        })?;
    }
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

/// Parses a points file: one `X,Y,Z` per line, blank lines and lines starting
/// with `#` skipped.
pub fn parse_points(content: &str) -> Result<Vec<Point3<f64>>, ParseError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_num, line)| {
            parse_point(line).map_err(|e| ParseError::PointsFile {
                line: line_num,
                reason: e.to_string(),
            })
        })
        .collect()
}

pub fn read_points_file(path: &Path) -> anyhow::Result<Vec<Point3<f64>>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_points(&content)?)
}
