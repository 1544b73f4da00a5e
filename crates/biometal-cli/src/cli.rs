use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "biometal CLI - hydrophobicity descriptors (solvation and hydrophobic contrast) for metal binding sites and other regions of macromolecular structures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate solvation and hydrophobic contrast in one sphere.
    Point(PointArgs),
    /// Evaluate both descriptors at many sites and write one CSV row per site.
    Profile(ProfileArgs),
}

/// Sphere and classifier options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SphereArgs {
    /// Sphere radius in Angstroms, overriding the config file.
    #[arg(short, long, value_name = "FLOAT")]
    pub radius: Option<f64>,

    /// Use squared partial charges instead of atomic solvation parameters.
    #[arg(long)]
    pub partial_charges: bool,

    /// Exclude heteroatoms (atoms outside any residue).
    #[arg(long)]
    pub no_het: bool,

    /// Exclude metal atoms.
    #[arg(long)]
    pub no_metals: bool,

    /// TOML file of custom partial charges ([RESIDUE] ATOM = charge).
    #[arg(long, value_name = "PATH")]
    pub charge_table: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S sphere.radius=8.0
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `point` subcommand.
#[derive(Args, Debug)]
pub struct PointArgs {
    /// Path to the input structure file (.bgf, .pdb or .ent).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Sphere centre as X,Y,Z.
    #[arg(long, required = true, value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub center: String,

    #[command(flatten)]
    pub sphere: SphereArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    /// Centre a sphere on every metal atom.
    Metals,
    /// Centre a sphere on the centroid of every residue.
    Residues,
}

/// Arguments for the `profile` subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Path to the input structure file (.bgf, .pdb or .ent).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Which sites to profile, overriding the config file.
    #[arg(short, long, value_enum, conflicts_with = "points")]
    pub target: Option<TargetArg>,

    /// File of sphere centres, one X,Y,Z per line.
    #[arg(long, value_name = "PATH")]
    pub points: Option<PathBuf>,

    /// Output CSV path. Writes to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub sphere: SphereArgs,
}
