use super::file::FileTarget;

pub struct DefaultsConfig {
    pub radius: f64,
    pub partial_charges: bool,
    pub include_het: bool,
    pub include_metals: bool,
    pub target: FileTarget,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            partial_charges: false,
            include_het: true,
            include_metals: true,
            target: FileTarget::Metals,
        }
    }
}
