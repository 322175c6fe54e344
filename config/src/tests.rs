//! # Tests for Config Constants
//!
//! Unit tests for constants and `ShellConfig` validation.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_alignment_epsilon_ordering() {
    assert!(
        ALIGNMENT_EPSILON >= EPSILON,
        "ALIGNMENT_EPSILON should be the looser tolerance"
    );
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_central_sphere_fits_inside_base_shell() {
    assert!(DEFAULT_CENTRAL_SPHERE_RADIUS < DEFAULT_BASE_RADIUS);
}

#[test]
fn test_default_gradient_has_enough_stops() {
    assert!(DEFAULT_GRADIENT_STOPS.len() >= 2);
}

#[test]
fn test_default_config_is_valid() {
    assert!(ShellConfig::default().validate().is_ok());
}

// =============================================================================
// VALIDATION TESTS
// =============================================================================

#[test]
fn test_validate_rejects_zero_base_radius() {
    let cfg = ShellConfig {
        base_radius: 0.0,
        ..ShellConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidBaseRadius(0.0)));
}

#[test]
fn test_validate_rejects_nan_thickness() {
    let cfg = ShellConfig {
        rind_thickness: f64::NAN,
        ..ShellConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidRindThickness(_))
    ));
}

#[test]
fn test_validate_rejects_tiny_segment_counts() {
    let cfg = ShellConfig {
        torus_minor_segments: 2,
        ..ShellConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidSegments(2)));
}

#[test]
fn test_validate_rejects_single_gradient_stop() {
    let cfg = ShellConfig {
        gradient_stops: vec![[255, 0, 0]],
        ..ShellConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::NotEnoughGradientStops(1)));
}

#[test]
fn test_validate_ignores_sphere_radius_when_disabled() {
    let cfg = ShellConfig {
        central_sphere: false,
        central_sphere_radius: -1.0,
        ..ShellConfig::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_validate_ignores_stops_when_gradient_disabled() {
    let cfg = ShellConfig {
        apply_gradient: false,
        gradient_stops: Vec::new(),
        ..ShellConfig::default()
    };
    assert!(cfg.validate().is_ok());
}
