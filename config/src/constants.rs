//! # Configuration Constants
//!
//! Centralized constants and run configuration for the rind pipeline.
//!
//! ## Categories
//!
//! - **Precision**: floating-point comparison tolerances
//! - **Defaults**: shell generation tunables
//! - **Colors**: default gradient stops and viewer background
//! - **ShellConfig**: validated, immutable run configuration

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for general floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
/// assert!(approximately_equal(0.1 + 0.2, 0.3));
/// ```
pub const EPSILON: f64 = 1e-9;

/// Tolerance for treating two unit directions as parallel or antiparallel.
///
/// Used by the orientation solver to select its degenerate branches and by
/// the direction-set unit-norm invariant.
pub const ALIGNMENT_EPSILON: f64 = 1e-6;

// =============================================================================
// SHELL GENERATION DEFAULTS
// =============================================================================

/// Radius of the innermost shell.
pub const DEFAULT_BASE_RADIUS: f64 = 1.0;

/// Minor radius of the rind tori (shell thickness).
pub const DEFAULT_RIND_THICKNESS: f64 = 0.05;

/// Number of concentric shells to generate.
pub const DEFAULT_SHELL_COUNT: u32 = 4;

/// Radial distance between successive shells.
pub const DEFAULT_SHELL_SPACING: f64 = 0.5;

/// Segments around the major circle of each torus.
pub const DEFAULT_TORUS_MAJOR_SEGMENTS: u32 = 128;

/// Segments around the minor (tube) circle of each torus.
pub const DEFAULT_TORUS_MINOR_SEGMENTS: u32 = 64;

/// Radius of the optional central sphere. Should stay below the base
/// shell radius so the sphere sits inside the innermost rind.
pub const DEFAULT_CENTRAL_SPHERE_RADIUS: f64 = 0.6;

/// Angular resolution of the central sphere.
pub const DEFAULT_SPHERE_SEGMENTS: u32 = 60;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Default radial gradient, innermost stop first.
///
/// Yellow at the center fading through orange and magenta to purple at
/// the outermost shell.
pub const DEFAULT_GRADIENT_STOPS: [[u8; 3]; 4] = [
    [255, 255, 0],
    [255, 165, 0],
    [255, 0, 255],
    [128, 0, 128],
];

/// Background color hint handed to the external renderer.
pub const DEFAULT_BACKGROUND_COLOR: [u8; 3] = [0, 0, 0];

// =============================================================================
// SHELL CONFIG
// =============================================================================

/// Immutable configuration for one generation run.
///
/// Constructed once before generation and treated as read-only for the
/// whole pipeline run. Call [`ShellConfig::validate`] before use.
///
/// # Example
///
/// ```rust
/// use config::ShellConfig;
///
/// let cfg = ShellConfig {
///     shell_count: 2,
///     apply_union: false,
///     ..ShellConfig::default()
/// };
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Radius of the innermost shell. Must be positive.
    pub base_radius: f64,
    /// Minor radius of the rind tori. Must be positive.
    pub rind_thickness: f64,
    /// Number of concentric shells. Zero produces only the central sphere
    /// (or nothing at all).
    pub shell_count: u32,
    /// Radial distance between successive shells.
    pub shell_spacing: f64,
    /// Segments around the major circle of each torus.
    pub torus_major_segments: u32,
    /// Segments around the minor circle of each torus.
    pub torus_minor_segments: u32,
    /// Whether to place a solid sphere at the origin.
    pub central_sphere: bool,
    /// Radius of the central sphere. Must be positive when enabled.
    pub central_sphere_radius: f64,
    /// Angular resolution of the central sphere.
    pub sphere_segments: u32,
    /// Whether to attempt an exact boolean union of all parts.
    pub apply_union: bool,
    /// Whether to attach the radial color gradient.
    pub apply_gradient: bool,
    /// Ordered gradient stops, innermost first. At least two are required
    /// when the gradient is enabled.
    pub gradient_stops: Vec<[u8; 3]>,
    /// Whether the renderer should display the result.
    pub show_visualization: bool,
    /// Background color hint for the renderer.
    pub background: [u8; 3],
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            base_radius: DEFAULT_BASE_RADIUS,
            rind_thickness: DEFAULT_RIND_THICKNESS,
            shell_count: DEFAULT_SHELL_COUNT,
            shell_spacing: DEFAULT_SHELL_SPACING,
            torus_major_segments: DEFAULT_TORUS_MAJOR_SEGMENTS,
            torus_minor_segments: DEFAULT_TORUS_MINOR_SEGMENTS,
            central_sphere: true,
            central_sphere_radius: DEFAULT_CENTRAL_SPHERE_RADIUS,
            sphere_segments: DEFAULT_SPHERE_SEGMENTS,
            apply_union: true,
            apply_gradient: true,
            gradient_stops: DEFAULT_GRADIENT_STOPS.to_vec(),
            show_visualization: true,
            background: DEFAULT_BACKGROUND_COLOR,
        }
    }
}

impl ShellConfig {
    /// Checks every field against its documented invariant.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_radius > 0.0) {
            return Err(ConfigError::InvalidBaseRadius(self.base_radius));
        }
        if !(self.rind_thickness > 0.0) {
            return Err(ConfigError::InvalidRindThickness(self.rind_thickness));
        }
        if !self.shell_spacing.is_finite() {
            return Err(ConfigError::InvalidShellSpacing(self.shell_spacing));
        }
        if self.torus_major_segments < 3 {
            return Err(ConfigError::InvalidSegments(self.torus_major_segments));
        }
        if self.torus_minor_segments < 3 {
            return Err(ConfigError::InvalidSegments(self.torus_minor_segments));
        }
        if self.central_sphere {
            if !(self.central_sphere_radius > 0.0) {
                return Err(ConfigError::InvalidSphereRadius(self.central_sphere_radius));
            }
            if self.sphere_segments < 3 {
                return Err(ConfigError::InvalidSegments(self.sphere_segments));
            }
        }
        if self.apply_gradient && self.gradient_stops.len() < 2 {
            return Err(ConfigError::NotEnoughGradientStops(
                self.gradient_stops.len(),
            ));
        }
        Ok(())
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Base shell radius is zero, negative, or not a number.
    InvalidBaseRadius(f64),
    /// Rind minor radius is zero, negative, or not a number.
    InvalidRindThickness(f64),
    /// Shell spacing is infinite or not a number.
    InvalidShellSpacing(f64),
    /// A tessellation segment count is too small to form a polygon.
    InvalidSegments(u32),
    /// Central sphere is enabled with a non-positive radius.
    InvalidSphereRadius(f64),
    /// Gradient is enabled with fewer than two stops.
    NotEnoughGradientStops(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseRadius(value) => {
                write!(f, "base_radius must be positive: {value}")
            }
            ConfigError::InvalidRindThickness(value) => {
                write!(f, "rind_thickness must be positive: {value}")
            }
            ConfigError::InvalidShellSpacing(value) => {
                write!(f, "shell_spacing must be finite: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segment counts must be >= 3: {value}")
            }
            ConfigError::InvalidSphereRadius(value) => {
                write!(f, "central_sphere_radius must be positive: {value}")
            }
            ConfigError::NotEnoughGradientStops(count) => {
                write!(f, "gradient needs at least 2 stops: {count}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
