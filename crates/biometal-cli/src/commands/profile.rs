use crate::cli::ProfileArgs;
use crate::config::builder::build_profile_config;
use crate::error::Result;
use biometal::workflows::{self, profile::SiteProfile};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct ProfileRow<'a> {
    label: &'a str,
    x: f64,
    y: f64,
    z: f64,
    atoms: usize,
    solvation: f64,
    hydrophobic_contrast: f64,
}

impl<'a> From<&'a SiteProfile> for ProfileRow<'a> {
    fn from(p: &'a SiteProfile) -> Self {
        Self {
            label: &p.label,
            x: p.center.x,
            y: p.center.y,
            z: p.center.z,
            atoms: p.atom_count,
            solvation: p.solvation,
            hydrophobic_contrast: p.hydrophobic_contrast,
        }
    }
}

pub fn run(args: ProfileArgs) -> Result<()> {
    let config = build_profile_config(&args)?;
    let system = super::read_structure(&config.input_path)?;

    info!("Invoking the profile workflow...");
    let profiles = workflows::profile::run(&system, &config.core_config)?;
    if profiles.is_empty() {
        warn!("No sites matched the requested target.");
    }

    match &config.output_path {
        Some(path) => {
            write_profiles(File::create(path)?, &profiles)?;
            info!("Wrote {} site(s) to {:?}", profiles.len(), path);
        }
        None => write_profiles(std::io::stdout().lock(), &profiles)?,
    }
    Ok(())
}

fn write_profiles(out: impl Write, profiles: &[SiteProfile]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record([
        "label",
        "x",
        "y",
        "z",
        "atoms",
        "solvation",
        "hydrophobic_contrast",
    ])?;
    for profile in profiles {
        writer.serialize(ProfileRow::from(profile))?;
    }
    writer.flush()?;
    Ok(())
}
