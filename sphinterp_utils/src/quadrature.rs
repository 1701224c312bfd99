/////////////////////////////////////////////////////////////////////////////////////////////
//
// Provides adaptive Gauss-Kronrod quadrature for integrating kernels along a line of sight.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2026, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Adaptive Gauss-Kronrod (G7/K15) quadrature.
//!
//! # References
//! 1. R. Piessens, E. de Doncker-Kapenga, C. W. Ueberhuber, D. K. Kahaner.
//!    QUADPACK: A Subroutine Package for Automatic Integration. Springer, 1983.

/// Abscissae of the 15-point Kronrod rule on [-1, 1], descending, centre last.
/// Odd indices are the abscissae of the embedded 7-point Gauss rule.
const XGK: [f64; 8] = [
    0.991455371120812639206854697526329,
    0.949107912342758524526189684047851,
    0.864864423359769072789712788640926,
    0.741531185599394439863864773280788,
    0.586087235467691130294144845693013,
    0.405845151377397166906606412076961,
    0.207784955007898467600689403773245,
    0.000000000000000000000000000000000,
];

/// Weights of the 15-point Kronrod rule.
const WGK: [f64; 8] = [
    0.022935322010529224963732008058970,
    0.063092092629978553290700663189204,
    0.104790010322250183839876322541518,
    0.140653259715525918745189590510238,
    0.169004726639267902826583426598550,
    0.190350578064785409913256402421014,
    0.204432940075298892414161999234649,
    0.209482141084727828012999174891714,
];

/// Weights of the embedded 7-point Gauss rule.
const WG: [f64; 4] = [
    0.129484966168869693270611432679082,
    0.279705391489276667901467771423780,
    0.381830050505118944950369775488975,
    0.417959183673469387755102040816327,
];

/// Tolerances controlling when an interval stops being bisected.
///
/// ### Default Values
/// - `abs_tol`: `1e-14`
/// - `rel_tol`: `1e-12`
/// - `max_depth`: `40`
#[derive(Debug, Clone, Copy)]
pub struct QuadratureSettings {
    /// Accept an interval once its error estimate falls below this value.
    pub abs_tol: f64,

    /// Accept an interval once its error estimate falls below this fraction
    /// of the interval's integral.
    pub rel_tol: f64,

    /// Maximum number of bisections applied to any starting interval.
    pub max_depth: usize,
}

impl Default for QuadratureSettings {
    fn default() -> Self {
        QuadratureSettings {
            abs_tol: 1e-14,
            rel_tol: 1e-12,
            max_depth: 40,
        }
    }
}

/// Value of a definite integral along with the accumulated error estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integral {
    pub value: f64,
    pub error_estimate: f64,
}

impl std::ops::Add for Integral {
    type Output = Integral;

    fn add(self, other: Integral) -> Integral {
        Integral {
            value: self.value + other.value,
            error_estimate: self.error_estimate + other.error_estimate,
        }
    }
}

/// Applies the 15-point Kronrod rule over `[a, b]` and returns the
/// integral along with `|K15 - G7|` as an error estimate.
fn gauss_kronrod_15<F>(f: &F, a: f64, b: f64) -> Integral
where
    F: Fn(f64) -> f64,
{
    let centre = 0.5 * (a + b);
    let half_length = 0.5 * (b - a);

    let f_centre = f(centre);
    let mut result_kronrod = f_centre * WGK[7];
    let mut result_gauss = f_centre * WG[3];

    for j in 0..7 {
        let offset = half_length * XGK[j];
        let pair = f(centre - offset) + f(centre + offset);
        result_kronrod += WGK[j] * pair;
        if j % 2 == 1 {
            result_gauss += WG[j / 2] * pair;
        }
    }

    Integral {
        value: result_kronrod * half_length,
        error_estimate: ((result_kronrod - result_gauss) * half_length).abs(),
    }
}

fn adaptive<F>(f: &F, a: f64, b: f64, settings: &QuadratureSettings, depth: usize) -> Integral
where
    F: Fn(f64) -> f64,
{
    let estimate = gauss_kronrod_15(f, a, b);
    let tolerance = settings.abs_tol.max(settings.rel_tol * estimate.value.abs());

    if estimate.error_estimate <= tolerance || depth >= settings.max_depth {
        return estimate;
    }

    let midpoint = 0.5 * (a + b);
    adaptive(f, a, midpoint, settings, depth + 1) + adaptive(f, midpoint, b, settings, depth + 1)
}

/// Integrates `f` over `[a, b]` with the default [`QuadratureSettings`].
///
/// # Examples
///
/// ```
/// use sphinterp_utils::integrate;
///
/// let area = integrate(|x| x.sin(), 0.0, std::f64::consts::PI);
/// assert!((area.value - 2.0).abs() < 1e-12);
/// ```
pub fn integrate<F>(f: F, a: f64, b: f64) -> Integral
where
    F: Fn(f64) -> f64,
{
    integrate_with_settings(f, &[a, b], &QuadratureSettings::default())
}

/// Integrates `f` over consecutive sub-intervals of `breakpoints`.
///
/// Place breakpoints where `f` or its low derivatives are discontinuous so
/// that each sub-interval sees a smooth integrand.
pub fn integrate_with_breakpoints<F>(f: F, breakpoints: &[f64]) -> Integral
where
    F: Fn(f64) -> f64,
{
    integrate_with_settings(f, breakpoints, &QuadratureSettings::default())
}

/// Integrates `f` over consecutive sub-intervals of `breakpoints` with
/// explicit tolerances. Zero-length sub-intervals contribute exactly zero.
pub fn integrate_with_settings<F>(f: F, breakpoints: &[f64], settings: &QuadratureSettings) -> Integral
where
    F: Fn(f64) -> f64,
{
    breakpoints
        .windows(2)
        .filter(|w| w[1] != w[0])
        .map(|w| adaptive(&f, w[0], w[1], settings, 0))
        .fold(Integral::default(), |acc, piece| acc + piece)
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use faer::utils::approx::*;
    use std::f64::consts::PI;

    #[test]
    fn polynomials_are_integrated_exactly() {
        let approx_eq = ApproxEq { abs_tol: 1e-14, rel_tol: 1e-14 };

        // Degree 9 is well inside the exactness of the 15-point rule.
        let result = integrate(|x| x.powi(9) - 3.0 * x.powi(4) + 1.0, -1.0, 2.0);
        let exact = (2f64.powi(10) - 1.0) / 10.0 - 3.0 * (2f64.powi(5) + 1.0) / 5.0 + 3.0;
        assert!(result.value ~ exact);
    }

    #[test]
    fn smooth_transcendental_integrand() {
        let approx_eq = ApproxEq { abs_tol: 1e-13, rel_tol: 1e-12 };

        let result = integrate(|x| (-x * x).exp(), -8.0, 8.0);
        assert!(result.value ~ PI.sqrt());
    }

    #[test]
    fn square_root_endpoint_behaviour_is_resolved() {
        let approx_eq = ApproxEq { abs_tol: 1e-10, rel_tol: 1e-10 };

        // Quarter circle of unit radius; the integrand has an infinite slope at x = 1.
        let result = integrate(|x: f64| (1.0 - x * x).max(0.0).sqrt(), 0.0, 1.0);
        assert!(result.value ~ PI / 4.0);
    }

    #[test]
    fn kinks_are_handled_by_breakpoints() {
        let approx_eq = ApproxEq { abs_tol: 1e-14, rel_tol: 1e-14 };

        let result = integrate_with_breakpoints(|x: f64| (x - 0.3).abs(), &[0.0, 0.3, 1.0]);
        assert!(result.value ~ 0.5 * (0.09 + 0.49));
    }

    #[test]
    fn empty_intervals_contribute_exactly_zero() {
        let result = integrate(|x| x.exp(), 1.5, 1.5);
        assert_eq!(result.value, 0.0);

        let result = integrate_with_breakpoints(|x| x * x, &[0.0, 0.0, 1.0, 1.0]);
        assert!((result.value - 1.0 / 3.0).abs() < 1e-15);
    }
}
