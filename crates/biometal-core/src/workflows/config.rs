use crate::hydrophobicity::charges::PartialChargeTable;
use crate::hydrophobicity::sphere::DescriptorOptions;
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Where the descriptor spheres of a profile are centred.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileTarget {
    /// Every metal atom.
    #[default]
    Metals,
    /// The centroid of every residue.
    Residues,
    /// Explicit points.
    Points(Vec<Point3<f64>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    pub radius: f64,
    pub options: DescriptorOptions,
    pub target: ProfileTarget,
    pub charge_table: PartialChargeTable,
}

#[derive(Default)]
pub struct ProfileConfigBuilder {
    radius: Option<f64>,
    options: Option<DescriptorOptions>,
    target: Option<ProfileTarget>,
    charge_table: Option<PartialChargeTable>,
}

impl ProfileConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn options(mut self, options: DescriptorOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn target(mut self, target: ProfileTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn charge_table(mut self, table: PartialChargeTable) -> Self {
        self.charge_table = Some(table);
        self
    }

    pub fn build(self) -> Result<ProfileConfig, ConfigError> {
        Ok(ProfileConfig {
            radius: self
                .radius
                .ok_or(ConfigError::MissingParameter("radius"))?,
            options: self.options.unwrap_or_default(),
            target: self.target.unwrap_or_default(),
            charge_table: self.charge_table.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_required() {
        let result = ProfileConfigBuilder::new().build();
        assert_eq!(result.unwrap_err(), ConfigError::MissingParameter("radius"));
    }

    #[test]
    fn unspecified_fields_take_defaults() {
        let config = ProfileConfigBuilder::new().radius(8.0).build().unwrap();
        assert_eq!(config.radius, 8.0);
        assert_eq!(config.options, DescriptorOptions::default());
        assert_eq!(config.target, ProfileTarget::Metals);
        assert_eq!(config.charge_table, PartialChargeTable::builtin());
    }
}
