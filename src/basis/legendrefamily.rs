use crate::math::chebyshev::to_unit_interval;
use crate::math::curve::integration::integrate;
use crate::math::curve::oversampling::{
    oversample,
    MIN_POINTS_PER_PERIOD
};
use crate::math::curve::sampledcurve::Point2D;
use crate::math::legendre::cachebackend::{
    CacheBackend,
    RefCellBackend,
    RwLockBackend
};
use crate::math::legendre::legendreevaluator::LegendreEvaluator;

use super::coefficientfamily::CoefficientFamily;

// ─────────────────────────────────────────────────────────────────────────────
// LegendreFamily
// ─────────────────────────────────────────────────────────────────────────────
//
// 係數 = (2k+1)/2 · ∫_{-1}^{1} y·P_k(x̃) dx̃，其中 x̃ 是 [a, b] 正規化到
// [-1, 1] 的座標，(2k+1)/2 為 Legendre 正交常數。過取樣在原始 x 空間進行
// （指標 k：P_k 在 [-1, 1] 內有 k 個根）。
//
// 每個 family 實例擁有自己的 evaluator（及其快取）；獨立實例之間不共享
// 任何狀態。

pub struct LegendreFamily<C: CacheBackend> {
    evaluator: LegendreEvaluator<C>,
}

impl LegendreFamily<RefCellBackend> {
    pub fn new() -> Self {
        Self { evaluator: LegendreEvaluator::new() }
    }
}

impl LegendreFamily<RwLockBackend> {
    pub fn new_threadsafe() -> Self {
        Self { evaluator: LegendreEvaluator::new_threadsafe() }
    }
}

impl<C: CacheBackend> LegendreFamily<C> {
    pub fn evaluator(&self) -> &LegendreEvaluator<C> {
        &self.evaluator
    }
}

impl<C: CacheBackend> CoefficientFamily for LegendreFamily<C> {
    fn id(&self) -> &'static str {
        "P"
    }

    fn coef_prefix(&self) -> &'static str {
        "P"
    }

    fn compute_coef(&self, points: &[Point2D], a: f64, b: f64, k: usize) -> Option<f64> {
        let oversampled = oversample(points, a, b, k as f64, MIN_POINTS_PER_PERIOD);

        let product: Vec<Point2D> = oversampled
            .iter()
            .map(|p| {
                let x_norm = to_unit_interval(p.x(), a, b);
                Point2D::new(x_norm, p.y() * self.evaluator.value(k, x_norm))
            })
            .collect();

        integrate(&product, -1.0, 1.0)
            .map(|integral| integral * (2.0 * k as f64 + 1.0) / 2.0)
    }

    fn eval_term(&self, k: usize, x: f64, a: f64, b: f64) -> Option<f64> {
        let x_norm = to_unit_interval(x, a, b);
        if x_norm < self.evaluator.x_min() || x_norm > self.evaluator.x_max() {
            return None;
        }
        Some(self.evaluator.value(k, x_norm))
    }
}
