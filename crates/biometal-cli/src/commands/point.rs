use crate::cli::PointArgs;
use crate::config::builder::build_point_config;
use crate::config::models::PointAppConfig;
use crate::error::Result;
use biometal::core::models::system::MolecularSystem;
use biometal::hydrophobicity::{Sphere, SphereDescriptors, SphereSummary};
use std::io::Write;
use tracing::info;

pub fn run(args: PointArgs) -> Result<()> {
    let config = build_point_config(&args)?;
    let system = super::read_structure(&config.input_path)?;

    let summary = evaluate(&system, &config)?;
    info!(
        atoms = summary.atom_count,
        solvation = summary.solvation,
        hydrophobic_contrast = summary.hydrophobic_contrast,
        "Sphere evaluated."
    );

    let stdout = std::io::stdout();
    write_summary(&mut stdout.lock(), &config, &summary)?;
    Ok(())
}

fn evaluate(system: &MolecularSystem, config: &PointAppConfig) -> Result<SphereSummary> {
    let sphere = Sphere::at(config.center, config.sphere.radius)?;
    let descriptors = SphereDescriptors::with_charge_table(config.sphere.charge_table.clone());
    Ok(descriptors.evaluate(system, &sphere, config.sphere.options))
}

fn write_summary(
    out: &mut impl Write,
    config: &PointAppConfig,
    summary: &SphereSummary,
) -> std::io::Result<()> {
    let c = &config.center;
    writeln!(
        out,
        "Sphere at ({:.3}, {:.3}, {:.3}), radius {:.2} A",
        c.x, c.y, c.z, config.sphere.radius
    )?;
    writeln!(out, "  atoms:                {}", summary.atom_count)?;
    writeln!(out, "  solvation:            {:.4}", summary.solvation)?;
    writeln!(
        out,
        "  hydrophobic contrast: {:.4}",
        summary.hydrophobic_contrast
    )
}
