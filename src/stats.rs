//! Dispersion statistics: the standard-deviational ellipse of a point group.
//!
//! For centered deviations `dx`, `dy` with sums `Sxx`, `Syy`, `Sxy`:
//!
//! ```text
//! theta  = atan((Sxx - Syy + sqrt((Sxx - Syy)^2 + 4 Sxy^2)) / (2 Sxy))
//! sigmaX = sqrt(sum((dx cos theta - dy sin theta)^2) / n)
//! sigmaY = sqrt(sum((dx sin theta - dy cos theta)^2) / n)
//! ```
//!
//! `theta` is the clockwise angle of the major axis from the downfield (+Y)
//! direction, which is exactly the clockwise on-screen rotation a canvas
//! ellipse expects. The sigmas are population deviations (divide by `n`).

use std::fmt;

use crate::errors::DegenerateGroupError;
use crate::types::{FieldPoint, Radians, Yards};

/// Minimum number of points that defines a spread and an orientation
pub const MIN_POINTS: usize = 2;

/// Summary ellipse of one group, recomputed on every pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionEllipse {
    pub center: FieldPoint,
    /// Rotation in `(-pi/2, pi/2)`; `0` when the deviations are uncorrelated
    pub theta: Radians,
    pub sigma_x: Yards,
    pub sigma_y: Yards,
}

/// Arithmetic mean of the points, or `None` for an empty slice
pub fn mean_center(points: &[FieldPoint]) -> Option<FieldPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x.raw(), sy + p.y.raw()));
    Some(FieldPoint::yards(sum_x / n, sum_y / n))
}

/// Compute the dispersion ellipse of `points`.
///
/// Fewer than two points have no defined spread; the caller skips that group.
pub fn compute_dispersion_ellipse(
    label: &str,
    points: &[FieldPoint],
) -> Result<DispersionEllipse, DegenerateGroupError> {
    let center = match mean_center(points) {
        Some(center) if points.len() >= MIN_POINTS => center,
        _ => {
            return Err(DegenerateGroupError {
                label: label.to_string(),
                count: points.len(),
            });
        }
    };

    let n = points.len() as f64;
    let deviations: Vec<(f64, f64)> = points
        .iter()
        .map(|p| ((p.x - center.x).raw(), (p.y - center.y).raw()))
        .collect();

    let (sxx, syy, sxy) = deviations
        .iter()
        .fold((0.0, 0.0, 0.0), |(xx, yy, xy), &(dx, dy)| {
            (xx + dx * dx, yy + dy * dy, xy + dx * dy)
        });

    let theta = orientation(sxx, syy, sxy);
    let (sin, cos) = theta.sin_cos();

    let (sum_x, sum_y) = deviations.iter().fold((0.0, 0.0), |(ax, ay), &(dx, dy)| {
        let rx = dx * cos - dy * sin;
        let ry = dx * sin - dy * cos;
        (ax + rx * rx, ay + ry * ry)
    });

    Ok(DispersionEllipse {
        center,
        theta: Radians(theta),
        sigma_x: Yards((sum_x / n).sqrt()),
        sigma_y: Yards((sum_y / n).sqrt()),
    })
}

/// Principal-axis angle of the 2x2 scatter matrix.
///
/// Uncorrelated deviations already lie on the principal axes; the closed form
/// would divide by zero there, so they resolve to `0`.
fn orientation(sxx: f64, syy: f64, sxy: f64) -> f64 {
    if sxy == 0.0 {
        return 0.0;
    }
    let diff = sxx - syy;
    ((diff + (diff * diff + 4.0 * sxy * sxy).sqrt()) / (2.0 * sxy)).atan()
}

/// One row of the per-group statistics table
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub label: String,
    pub count: usize,
    pub ellipse: Option<DispersionEllipse>,
}

impl GroupSummary {
    pub fn new(label: &str, points: &[FieldPoint]) -> Self {
        Self {
            label: label.to_string(),
            count: points.len(),
            ellipse: compute_dispersion_ellipse(label, points).ok(),
        }
    }

    /// Column header matching the `Display` layout
    pub fn header() -> String {
        format!(
            "{:<16} {:>5} {:>8} {:>8} {:>7} {:>7} {:>7}",
            "group", "shots", "carry", "offline", "sigma_x", "sigma_y", "theta"
        )
    }
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<16} {:>5}", self.label, self.count)?;
        match &self.ellipse {
            Some(e) => write!(
                f,
                " {:>8.1} {:>8.1} {:>7.2} {:>7.2} {:>6.1}°",
                e.center.y.raw(),
                e.center.x.raw(),
                e.sigma_x.raw(),
                e.sigma_y.raw(),
                e.theta.to_degrees()
            ),
            None => write!(f, " {:>8} {:>8} {:>7} {:>7} {:>7}", "n/a", "n/a", "n/a", "n/a", "n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, PI};

    const EPS: f64 = 1e-9;

    fn pts(raw: &[(f64, f64)]) -> Vec<FieldPoint> {
        raw.iter().map(|&(x, y)| FieldPoint::yards(x, y)).collect()
    }

    /// Points on an ellipse with semi-axes `a` (along +Y) and `b` (along +X),
    /// turned clockwise by `phi` and moved to `center`.
    fn rotated_ellipse(a: f64, b: f64, phi: f64, center: (f64, f64)) -> Vec<FieldPoint> {
        (0..36)
            .map(|k| {
                let t = 2.0 * PI * k as f64 / 36.0;
                let (x, y) = (b * t.cos(), a * t.sin());
                let rx = x * phi.cos() + y * phi.sin();
                let ry = -x * phi.sin() + y * phi.cos();
                FieldPoint::yards(rx + center.0, ry + center.1)
            })
            .collect()
    }

    #[test]
    fn empty_and_single_point_are_degenerate() {
        let err = compute_dispersion_ellipse("empty", &[]).unwrap_err();
        assert_eq!(err.count, 0);

        let err = compute_dispersion_ellipse("one", &pts(&[(3.0, 140.0)])).unwrap_err();
        assert_eq!(err, DegenerateGroupError { label: "one".into(), count: 1 });
    }

    #[test]
    fn identical_points_have_zero_spread() {
        let e = compute_dispersion_ellipse("pair", &pts(&[(5.0, 150.0), (5.0, 150.0)])).unwrap();
        assert_eq!(e.center, FieldPoint::yards(5.0, 150.0));
        assert_eq!(e.theta, Radians::ZERO);
        assert_eq!(e.sigma_x, Yards::ZERO);
        assert_eq!(e.sigma_y, Yards::ZERO);
    }

    #[test]
    fn mean_matches_arithmetic_mean_in_any_order() {
        let forward = pts(&[(30.0, 120.0), (35.0, 130.0), (40.0, 125.0), (-2.5, 97.25)]);
        let mut backward = forward.clone();
        backward.reverse();

        let a = compute_dispersion_ellipse("a", &forward).unwrap().center;
        let b = compute_dispersion_ellipse("b", &backward).unwrap().center;
        let expected_x = (30.0 + 35.0 + 40.0 - 2.5) / 4.0;
        let expected_y = (120.0 + 130.0 + 125.0 + 97.25) / 4.0;

        for c in [a, b] {
            assert!((c.x.raw() - expected_x).abs() < EPS);
            assert!((c.y.raw() - expected_y).abs() < EPS);
        }
    }

    #[test]
    fn three_shot_group() {
        let e = compute_dispersion_ellipse(
            "red",
            &pts(&[(30.0, 120.0), (35.0, 130.0), (40.0, 125.0)]),
        )
        .unwrap();
        assert!((e.center.x.raw() - 35.0).abs() < EPS);
        assert!((e.center.y.raw() - 125.0).abs() < EPS);
        // Sxx = Syy = 50, Sxy = 25 -> tan(theta) = 1
        assert!((e.theta.raw() - FRAC_PI_4).abs() < EPS);
        assert!((e.sigma_x.raw() - e.sigma_y.raw()).abs() < EPS);
    }

    #[test]
    fn recovers_known_rotation() {
        for phi in [0.3, -0.7, 1.2, -1.4] {
            let points = rotated_ellipse(10.0, 4.0, phi, (20.0, 150.0));
            let e = compute_dispersion_ellipse("synthetic", &points).unwrap();

            // theta is only defined modulo pi
            let delta = (e.theta.raw() - phi).rem_euclid(PI);
            let delta = delta.min(PI - delta);
            assert!(delta < 1e-6, "phi={phi} theta={}", e.theta.raw());

            // Minor axis RMS of a sampled ellipse is b / sqrt(2)
            assert!((e.sigma_x.raw() - 4.0 / 2f64.sqrt()).abs() < 1e-6);
            assert!((e.center.x.raw() - 20.0).abs() < 1e-9);
            assert!((e.center.y.raw() - 150.0).abs() < 1e-9);
        }
    }

    #[test]
    fn uncorrelated_deviations_resolve_to_zero_theta() {
        // Rectangle corners: Sxy is exactly zero
        let e = compute_dispersion_ellipse(
            "box",
            &pts(&[(0.0, 0.0), (2.0, 0.0), (0.0, 4.0), (2.0, 4.0)]),
        )
        .unwrap();
        assert_eq!(e.theta, Radians::ZERO);
        assert!((e.sigma_x.raw() - 1.0).abs() < EPS);
        assert!((e.sigma_y.raw() - 2.0).abs() < EPS);
    }

    #[test]
    fn wide_uncorrelated_spread_is_still_finite() {
        let e = compute_dispersion_ellipse("wide", &pts(&[(-10.0, 200.0), (10.0, 200.0)])).unwrap();
        assert_eq!(e.theta, Radians::ZERO);
        assert!((e.sigma_x.raw() - 10.0).abs() < EPS);
        assert_eq!(e.sigma_y, Yards::ZERO);
    }

    #[test]
    fn theta_stays_in_open_half_turn() {
        let e = compute_dispersion_ellipse(
            "diag",
            &pts(&[(0.0, 0.0), (1.0, -1.0), (2.0, -2.0), (3.0, -3.1)]),
        )
        .unwrap();
        assert!(e.theta.raw() > -PI / 2.0 && e.theta.raw() < PI / 2.0);
    }

    #[test]
    fn summary_marks_degenerate_groups() {
        let summary = GroupSummary::new("lonely", &pts(&[(1.0, 1.0)]));
        assert_eq!(summary.count, 1);
        assert!(summary.ellipse.is_none());
        assert!(summary.to_string().contains("n/a"));
    }

    #[test]
    fn summary_row_shows_carry_and_offline() {
        let summary = GroupSummary::new(
            "red",
            &pts(&[(30.0, 120.0), (35.0, 130.0), (40.0, 125.0)]),
        );
        let row = summary.to_string();
        assert!(row.starts_with("red"));
        assert!(row.contains("125.0"));
        assert!(row.contains("35.0"));
        assert!(row.contains("45.0°"));
    }
}
