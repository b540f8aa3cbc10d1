//! Planar geometry of the crank plane.
//!
//! Each crank rotates within a fixed vertical plane. Positions within that
//! plane are (x, z) pairs, with y identically zero; the crank angle is measured
//! from the positive x axis towards the positive z axis.

/// Pin position for a crank of the given length at the given angle (radians).
pub fn polar_to_xz(length: f64, theta: f64) -> (f64, f64) {
    (length * theta.cos(), length * theta.sin())
}

/// Crank angle in radians for a pin at (x, z), as `atan(z / x)`.
///
/// The result stays within (-90°, 90°). A vertical crank (x = 0) divides into
/// IEEE ±inf, whose arctangent is exactly ±90°, so the vertical case needs no
/// special handling.
pub fn theta_from_xz(x: f64, z: f64) -> f64 {
    (z / x).atan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    const SMALL: f64 = 1e-12;

    #[test]
    fn known_pin_positions() {
        let (x, z) = polar_to_xz(2.0, 0.0);
        assert!((x - 2.0).abs() < SMALL && z.abs() < SMALL, "horizontal crank");

        let (x, z) = polar_to_xz(2.0, FRAC_PI_4);
        assert!((x - z).abs() < SMALL, "45 degree crank has equal components");
        assert!((x.hypot(z) - 2.0).abs() < SMALL, "crank length preserved");
    }

    #[test]
    fn angle_round_trip() {
        for length in [0.5, 1.0, 5.0, 12.0] {
            for step in -17..=17 {
                let theta = step as f64 * 5.0_f64.to_radians();
                let (x, z) = polar_to_xz(length, theta);
                assert!(
                    (theta_from_xz(x, z) - theta).abs() < SMALL,
                    "round trip failed for length {}, theta {}",
                    length,
                    theta
                );
            }
        }
    }

    #[test]
    fn vertical_crank_does_not_panic() {
        assert_eq!(theta_from_xz(0.0, 3.0), FRAC_PI_2);
        assert_eq!(theta_from_xz(0.0, -3.0), -FRAC_PI_2);
    }
}
