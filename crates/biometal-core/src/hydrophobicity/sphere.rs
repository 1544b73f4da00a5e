use super::charges::PartialChargeTable;
use super::classify::Classifier;
use super::error::DescriptorError;
use crate::core::models::query::{AtomFilter, AtomRecord, SphereQuery};
use nalgebra::Point3;
use tracing::debug;

/// Checks that a sphere radius is finite and non-negative.
pub fn check_radius(radius: f64) -> Result<(), DescriptorError> {
    if !radius.is_finite() {
        return Err(DescriptorError::NonNumericRadius(radius));
    }
    if radius < 0.0 {
        return Err(DescriptorError::NegativeRadius(radius));
    }
    Ok(())
}

/// A validated sphere: finite centre, finite non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3<f64>,
    radius: f64,
}

impl Sphere {
    pub fn new(x: f64, y: f64, z: f64, radius: f64) -> Result<Self, DescriptorError> {
        for (axis, value) in [('x', x), ('y', y), ('z', z)] {
            if !value.is_finite() {
                return Err(DescriptorError::NonNumericCoordinate { axis, value });
            }
        }
        check_radius(radius)?;
        Ok(Self {
            center: Point3::new(x, y, z),
            radius,
        })
    }

    pub fn at(center: Point3<f64>, radius: f64) -> Result<Self, DescriptorError> {
        Self::new(center.x, center.y, center.z, radius)
    }

    pub fn center(&self) -> &Point3<f64> {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Flags shared by both descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DescriptorOptions {
    /// Use squared partial charges instead of solvation parameters.
    pub partial_charges: bool,
    /// Include heteroatoms.
    pub het: bool,
    /// Include metal atoms.
    pub metal: bool,
}

impl Default for DescriptorOptions {
    fn default() -> Self {
        Self {
            partial_charges: false,
            het: true,
            metal: true,
        }
    }
}

impl DescriptorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn partial_charges(mut self, enabled: bool) -> Self {
        self.partial_charges = enabled;
        self
    }

    pub fn het(mut self, include: bool) -> Self {
        self.het = include;
        self
    }

    pub fn metal(mut self, include: bool) -> Self {
        self.metal = include;
        self
    }

    pub fn filter(&self) -> AtomFilter {
        AtomFilter::new(self.het, self.metal)
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::from_partial_charges(self.partial_charges)
    }
}

/// Both descriptors evaluated over one sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereSummary {
    pub atom_count: usize,
    pub solvation: f64,
    pub hydrophobic_contrast: f64,
}

/// One atom's contribution: classifier value and squared distance to the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    value: f64,
    distance_sq: f64,
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}

// Σ v·d² − n · mean · (Σ d² / n)
fn contrast(samples: &[Sample], mean: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let n = samples.len() as f64;
    let weighted: f64 = samples.iter().map(|s| s.value * s.distance_sq).sum();
    let mean_distance_sq = samples.iter().map(|s| s.distance_sq).sum::<f64>() / n;
    weighted - n * mean * mean_distance_sq
}

/// Evaluates the hydrophobicity descriptors against any [`SphereQuery`] model.
///
/// Holds the partial-charge table used when
/// [`DescriptorOptions::partial_charges`] is set.
#[derive(Debug, Clone, Default)]
pub struct SphereDescriptors {
    charges: PartialChargeTable,
}

impl SphereDescriptors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_charge_table(charges: PartialChargeTable) -> Self {
        Self { charges }
    }

    pub fn charge_table(&self) -> &PartialChargeTable {
        &self.charges
    }

    fn samples<M: SphereQuery + ?Sized>(
        &self,
        model: &M,
        sphere: &Sphere,
        options: DescriptorOptions,
    ) -> Vec<Sample> {
        let classifier = options.classifier();
        let center = sphere.center();
        model
            .atoms_in_sphere(center, sphere.radius(), options.filter())
            .iter()
            .map(|atom| Sample {
                value: classifier.value(atom, &self.charges),
                distance_sq: atom.distance_to(center).powi(2),
            })
            .collect()
    }

    /// Mean classifier value over the sphere, 0 when it holds no atoms.
    pub fn solvation<M: SphereQuery + ?Sized>(
        &self,
        model: &M,
        sphere: &Sphere,
        options: DescriptorOptions,
    ) -> f64 {
        let samples = self.samples(model, sphere, options);
        let solvation = mean(samples.iter().map(|s| s.value));
        debug!(
            atoms = samples.len(),
            radius = sphere.radius(),
            solvation,
            "Evaluated sphere solvation."
        );
        solvation
    }

    /// Second-moment contrast of the classifier values over the sphere.
    ///
    /// Zero for an empty or homogeneous sphere; positive when hydrophilic
    /// atoms sit at the core and hydrophobic atoms at the rim, negative for
    /// the converse.
    pub fn hydrophobic_contrast<M: SphereQuery + ?Sized>(
        &self,
        model: &M,
        sphere: &Sphere,
        options: DescriptorOptions,
    ) -> f64 {
        self.evaluate(model, sphere, options).hydrophobic_contrast
    }

    /// Both descriptors from a single sphere query.
    pub fn evaluate<M: SphereQuery + ?Sized>(
        &self,
        model: &M,
        sphere: &Sphere,
        options: DescriptorOptions,
    ) -> SphereSummary {
        let samples = self.samples(model, sphere, options);
        let solvation = mean(samples.iter().map(|s| s.value));
        let hydrophobic_contrast = contrast(&samples, solvation);
        debug!(
            atoms = samples.len(),
            radius = sphere.radius(),
            solvation,
            hydrophobic_contrast,
            "Evaluated sphere descriptors."
        );
        SphereSummary {
            atom_count: samples.len(),
            solvation,
            hydrophobic_contrast,
        }
    }
}

/// Average classifier value of the atoms within `radius` of `(x, y, z)`.
///
/// Uses the built-in partial-charge table when `options.partial_charges` is
/// set.
///
/// # Errors
///
/// [`DescriptorError`] when a coordinate or the radius is not finite, or the
/// radius is negative. Validation happens before the model is queried.
pub fn solvation<M: SphereQuery + ?Sized>(
    model: &M,
    x: f64,
    y: f64,
    z: f64,
    radius: f64,
    options: DescriptorOptions,
) -> Result<f64, DescriptorError> {
    let sphere = Sphere::new(x, y, z, radius)?;
    Ok(SphereDescriptors::new().solvation(model, &sphere, options))
}

/// Hydrophobic contrast of the atoms within `radius` of `(x, y, z)`.
///
/// # Errors
///
/// Same validation as [`solvation`].
pub fn hydrophobic_contrast<M: SphereQuery + ?Sized>(
    model: &M,
    x: f64,
    y: f64,
    z: f64,
    radius: f64,
    options: DescriptorOptions,
) -> Result<f64, DescriptorError> {
    let sphere = Sphere::new(x, y, z, radius)?;
    Ok(SphereDescriptors::new().hydrophobic_contrast(model, &sphere, options))
}
