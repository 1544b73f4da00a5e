use biometal::hydrophobicity::{DescriptorOptions, PartialChargeTable};
use biometal::workflows::config::ProfileConfig;
use nalgebra::Point3;
use std::path::PathBuf;

/// Fully resolved settings for a single sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereSettings {
    pub radius: f64,
    pub options: DescriptorOptions,
    pub charge_table: PartialChargeTable,
}

pub struct PointAppConfig {
    pub input_path: PathBuf,
    pub center: Point3<f64>,
    pub sphere: SphereSettings,
}

pub struct ProfileAppConfig {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub core_config: ProfileConfig,
}
