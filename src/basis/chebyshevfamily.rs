use std::f64::consts::PI;

use crate::math::chebyshev::{
    chebyshev_t,
    to_unit_interval
};
use crate::math::curve::integration::integrate;
use crate::math::curve::oversampling::{
    oversample,
    MIN_POINTS_PER_PERIOD
};
use crate::math::curve::sampledcurve::{
    interpolate,
    Point2D
};

use super::coefficientfamily::CoefficientFamily;

/// θ 取樣步數下限。
const MIN_THETA_STEPS: usize = 200;
/// 每增加一階多加的 θ 步數：cos(kθ) 在 [0, π] 有 k/2 個週期，
/// 50·k 保證每週期 ≥ 100 步。
const THETA_STEPS_PER_ORDER: usize = 50;

// ─────────────────────────────────────────────────────────────────────────────
// ChebyshevFamily
// ─────────────────────────────────────────────────────────────────────────────
//
// 代換 x = mid + half·cos θ 後，帶權 Chebyshev 內積化為 θ∈[0, π] 上的
// 純 cosine-Fourier 係數：
//
//   ∫_{-1}^{1} y(x)·T_k(x̃)/√(1-x̃²) dx̃ = ∫_0^π y(θ)·cos(kθ) dθ
//
// 正規化：k = 0 除以 π，k > 0 除以 π/2。
//
// θ 遞增時 x 單調遞減，y 查表用 backward-advancing pointer，
// 每步攤銷 O(1)。

pub struct ChebyshevFamily;

impl CoefficientFamily for ChebyshevFamily {
    fn id(&self) -> &'static str {
        "T"
    }

    fn coef_prefix(&self) -> &'static str {
        "T"
    }

    fn compute_coef(&self, points: &[Point2D], a: f64, b: f64, k: usize) -> Option<f64> {
        let fine = oversample(points, a, b, k.max(10) as f64, MIN_POINTS_PER_PERIOD);
        if fine.len() < 2 {
            return None;
        }

        let mid = (a + b) / 2.0;
        let half = (b - a) / 2.0;
        let steps = (THETA_STEPS_PER_ORDER * k).max(MIN_THETA_STEPS);
        let last = fine.len() - 1;

        let mut theta_points = Vec::with_capacity(steps + 1);
        let mut j = last;
        for i in 0..=steps {
            let theta = PI * i as f64 / steps as f64;
            let x = mid + half * theta.cos();

            while j > 1 && fine[j - 1].x() >= x {
                j -= 1;
            }

            let y = if x <= fine[0].x() {
                fine[0].y()
            } else if x >= fine[last].x() {
                fine[last].y()
            } else {
                interpolate(x, &fine[j - 1], &fine[j])
            };

            theta_points.push(Point2D::new(theta, y * (k as f64 * theta).cos()));
        }

        let integral = integrate(&theta_points, 0.0, PI)?;
        if k == 0 {
            Some(integral / PI)
        } else {
            Some(integral / (PI / 2.0))
        }
    }

    fn eval_term(&self, k: usize, x: f64, a: f64, b: f64) -> Option<f64> {
        Some(chebyshev_t(k, to_unit_interval(x, a, b)))
    }
}
