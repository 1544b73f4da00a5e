use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileSphereConfig, FileTarget};
use super::models::{PointAppConfig, ProfileAppConfig, SphereSettings};
use crate::cli::{PointArgs, ProfileArgs, SphereArgs, TargetArg};
use crate::error::{CliError, Result};
use crate::utils::parser;
use biometal::hydrophobicity::{DescriptorOptions, PartialChargeTable};
use biometal::workflows::config::{ProfileConfigBuilder, ProfileTarget};
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn build_point_config(args: &PointArgs) -> Result<PointAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.sphere)?;

    let center =
        parser::parse_point(&args.center).map_err(|e| CliError::Argument(e.to_string()))?;
    let sphere = merge_sphere(&args.sphere, file_config.sphere.take(), &defaults)?;

    Ok(PointAppConfig {
        input_path: args.input.clone(),
        center,
        sphere,
    })
}

pub fn build_profile_config(args: &ProfileArgs) -> Result<ProfileAppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_file_config(&args.sphere)?;

    let sphere = merge_sphere(&args.sphere, file_config.sphere.take(), &defaults)?;

    let target = if let Some(points_path) = &args.points {
        let points =
            parser::read_points_file(points_path).map_err(|e| CliError::FileParsing {
                path: points_path.clone(),
                source: e,
            })?;
        ProfileTarget::Points(points)
    } else {
        let file_target = file_config.profile.take().unwrap_or_default().target;
        args.target
            .map(|t| match t {
                TargetArg::Metals => FileTarget::Metals,
                TargetArg::Residues => FileTarget::Residues,
            })
            .or(file_target)
            .unwrap_or(defaults.target)
            .into()
    };

    let core_config = ProfileConfigBuilder::new()
        .radius(sphere.radius)
        .options(sphere.options)
        .target(target)
        .charge_table(sphere.charge_table)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(ProfileAppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

fn load_file_config(args: &SphereArgs) -> Result<FileConfig> {
    let file_config = if let Some(config_path) = &args.config {
        let mut file_config = FileConfig::from_file(config_path)?;
        if let Some(sphere) = file_config.sphere.as_mut() {
            sphere.charge_table = sphere
                .charge_table
                .take()
                .map(|path| resolve_config_relative(config_path, path));
        }
        file_config
    } else {
        FileConfig::default()
    };
    apply_set_values(file_config, &args.set_values)
}

fn merge_sphere(
    args: &SphereArgs,
    file_val: Option<FileSphereConfig>,
    defaults: &DefaultsConfig,
) -> Result<SphereSettings> {
    let file_val = file_val.unwrap_or_default();

    let radius = args.radius.or(file_val.radius).unwrap_or(defaults.radius);
    if !radius.is_finite() || radius < 0.0 {
        return Err(CliError::Config(format!(
            "Sphere radius must be a non-negative number, got {}",
            radius
        )));
    }

    let partial_charges = args.partial_charges
        || file_val
            .partial_charges
            .unwrap_or(defaults.partial_charges);
    let include_het = !args.no_het && file_val.include_het.unwrap_or(defaults.include_het);
    let include_metals =
        !args.no_metals && file_val.include_metals.unwrap_or(defaults.include_metals);

    let charge_table = match args.charge_table.as_ref().or(file_val.charge_table.as_ref()) {
        Some(path) => {
            debug!("Using custom partial charges from {:?}", path);
            PartialChargeTable::load(path)?
        }
        None => PartialChargeTable::builtin(),
    };

    Ok(SphereSettings {
        radius,
        options: DescriptorOptions::new()
            .partial_charges(partial_charges)
            .het(include_het)
            .metal(include_metals),
        charge_table,
    })
}

/// Relative paths from a config file are taken relative to that file's directory.
fn resolve_config_relative(config_path: &Path, path: PathBuf) -> PathBuf {
    match config_path.parent() {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}

fn parse_bool(key: &str, value_str: &str) -> Result<bool> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        }
        let key = parts[0];
        let value_str = parts[1];

        match key {
            "sphere.radius" => {
                config.sphere.get_or_insert_with(Default::default).radius =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
            }
            "sphere.partial-charges" => {
                config
                    .sphere
                    .get_or_insert_with(Default::default)
                    .partial_charges = Some(parse_bool(key, value_str)?);
            }
            "sphere.include-het" => {
                config.sphere.get_or_insert_with(Default::default).include_het =
                    Some(parse_bool(key, value_str)?);
            }
            "sphere.include-metals" => {
                config
                    .sphere
                    .get_or_insert_with(Default::default)
                    .include_metals = Some(parse_bool(key, value_str)?);
            }
            "sphere.charge-table" => {
                config.sphere.get_or_insert_with(Default::default).charge_table =
                    Some(value_str.into());
            }
            "profile.target" => {
                let target = match value_str {
                    "metals" => FileTarget::Metals,
                    "residues" => FileTarget::Residues,
                    _ => {
                        return Err(CliError::Config(format!(
                            "Invalid target for {}: {}. Expected 'metals' or 'residues'.",
                            key, value_str
                        )));
                    }
                };
                config.profile.get_or_insert_with(Default::default).target = Some(target);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::fs;
    use tempfile::tempdir;

    fn base_point_args() -> PointArgs {
        PointArgs {
            input: PathBuf::from("in.pdb"),
            center: "1,2,3".to_string(),
            sphere: SphereArgs::default(),
        }
    }

    fn base_profile_args() -> ProfileArgs {
        ProfileArgs {
            input: PathBuf::from("in.bgf"),
            target: None,
            points: None,
            output: None,
            sphere: SphereArgs::default(),
        }
    }

    #[test]
    fn point_config_uses_defaults_when_nothing_is_given() {
        let app = build_point_config(&base_point_args()).unwrap();
        let defaults = DefaultsConfig::default();

        assert_eq!(app.input_path, PathBuf::from("in.pdb"));
        assert_eq!(app.center, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(app.sphere.radius, defaults.radius);
        assert_eq!(app.sphere.options, DescriptorOptions::default());
        assert_eq!(app.sphere.charge_table, PartialChargeTable::builtin());
    }

    #[test]
    fn malformed_center_is_an_argument_error() {
        let mut args = base_point_args();
        args.center = "1,2".to_string();
        assert!(matches!(
            build_point_config(&args),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn cli_overrides_file_which_overrides_defaults() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(
            &cfg_path,
            r#"
            [sphere]
            radius = 6.0
            partial-charges = true
            include-metals = false

            [profile]
            target = "residues"
            "#,
        )
        .unwrap();

        let mut args = base_profile_args();
        args.sphere.config = Some(cfg_path.clone());
        let app = build_profile_config(&args).unwrap();
        let cfg = app.core_config;
        assert_eq!(cfg.radius, 6.0);
        assert_eq!(
            cfg.options,
            DescriptorOptions::new().partial_charges(true).metal(false)
        );
        assert_eq!(cfg.target, ProfileTarget::Residues);

        let mut args = base_profile_args();
        args.sphere.config = Some(cfg_path);
        args.sphere.radius = Some(4.0);
        args.sphere.no_het = true;
        args.target = Some(TargetArg::Metals);
        let cfg = build_profile_config(&args).unwrap().core_config;
        assert_eq!(cfg.radius, 4.0);
        assert_eq!(
            cfg.options,
            DescriptorOptions::new()
                .partial_charges(true)
                .het(false)
                .metal(false)
        );
        assert_eq!(cfg.target, ProfileTarget::Metals);
    }

    #[test]
    fn set_values_override_the_file() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(&cfg_path, "[sphere]\nradius = 6.0\n").unwrap();

        let mut args = base_profile_args();
        args.sphere.config = Some(cfg_path);
        args.sphere.set_values = vec![
            "sphere.radius=3.5".to_string(),
            "sphere.include-het=false".to_string(),
            "profile.target=residues".to_string(),
        ];
        let cfg = build_profile_config(&args).unwrap().core_config;
        assert_eq!(cfg.radius, 3.5);
        assert!(!cfg.options.het);
        assert_eq!(cfg.target, ProfileTarget::Residues);
    }

    #[test]
    fn set_values_reject_bad_input() {
        for bad in [
            "sphere.radius",
            "sphere.radius=wide",
            "sphere.partial-charges=maybe",
            "profile.target=everything",
            "optimization.max-iterations=3",
        ] {
            let result = apply_set_values(FileConfig::default(), &[bad.to_string()]);
            assert!(
                matches!(result, Err(CliError::Config(_))),
                "expected a config error for '{}'",
                bad
            );
        }
    }

    #[test]
    fn negative_radius_is_rejected_while_building() {
        let mut args = base_point_args();
        args.sphere.radius = Some(-2.0);
        assert!(matches!(
            build_point_config(&args),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn points_file_becomes_the_target() {
        let dir = tempdir().unwrap();
        let points_path = dir.path().join("centres.txt");
        fs::write(&points_path, "# sites\n0,0,0\n1,1,1\n").unwrap();

        let mut args = base_profile_args();
        args.points = Some(points_path);
        args.output = Some(PathBuf::from("out.csv"));
        let app = build_profile_config(&args).unwrap();

        assert_eq!(app.output_path, Some(PathBuf::from("out.csv")));
        assert_eq!(
            app.core_config.target,
            ProfileTarget::Points(vec![Point3::origin(), Point3::new(1.0, 1.0, 1.0)])
        );
    }

    #[test]
    fn bad_points_file_reports_its_path() {
        let dir = tempdir().unwrap();
        let points_path = dir.path().join("centres.txt");
        fs::write(&points_path, "0,0\n").unwrap();

        let mut args = base_profile_args();
        args.points = Some(points_path.clone());
        match build_profile_config(&args) {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, points_path),
            _ => panic!("expected FileParsing error"),
        }
    }

    #[test]
    fn custom_charge_table_is_loaded() {
        let dir = tempdir().unwrap();
        let table_path = dir.path().join("charges.toml");
        fs::write(&table_path, "[LIG]\nO1 = -0.75\n").unwrap();

        let mut args = base_point_args();
        args.sphere.charge_table = Some(table_path);
        let app = build_point_config(&args).unwrap();
        assert_eq!(app.sphere.charge_table.get("LIG", "O1"), Some(-0.75));
        assert!(app.sphere.charge_table.get("ALA", "CB").is_some());
    }

    #[test]
    fn charge_table_from_config_resolves_next_to_the_config() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("site");
        fs::create_dir(&config_dir).unwrap();
        fs::write(config_dir.join("charges.toml"), "[LIG]\nN1 = -0.5\n").unwrap();
        let cfg_path = config_dir.join("config.toml");
        fs::write(&cfg_path, "[sphere]\ncharge-table = \"charges.toml\"\n").unwrap();

        let mut args = base_point_args();
        args.sphere.config = Some(cfg_path);
        let app = build_point_config(&args).unwrap();
        assert_eq!(app.sphere.charge_table.get("LIG", "N1"), Some(-0.5));
    }

    #[test]
    fn only_relative_config_paths_are_rebased() {
        let config = Path::new("/data/site/config.toml");
        assert_eq!(
            resolve_config_relative(config, PathBuf::from("charges.toml")),
            PathBuf::from("/data/site/charges.toml")
        );
        assert_eq!(
            resolve_config_relative(config, PathBuf::from("/abs/charges.toml")),
            PathBuf::from("/abs/charges.toml")
        );
        assert_eq!(
            resolve_config_relative(Path::new("config.toml"), PathBuf::from("charges.toml")),
            PathBuf::from("charges.toml")
        );
    }

    #[test]
    fn set_charge_table_is_not_rebased() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(&cfg_path, "[sphere]\nradius = 6.0\n").unwrap();

        let args = SphereArgs {
            config: Some(cfg_path),
            set_values: vec!["sphere.charge-table=charges.toml".to_string()],
            ..SphereArgs::default()
        };
        let file_config = load_file_config(&args).unwrap();
        assert_eq!(
            file_config.sphere.unwrap().charge_table,
            Some(PathBuf::from("charges.toml"))
        );
    }
}
