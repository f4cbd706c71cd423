use std::f64::consts::PI;

use crate::math::curve::integration::integrate;
use crate::math::curve::oversampling::{
    oversample,
    MIN_POINTS_PER_PERIOD
};
use crate::math::curve::sampledcurve::Point2D;

use super::coefficientfamily::CoefficientFamily;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TrigKind {
    Cosine,
    Sine
}

impl TrigKind {
    fn apply(&self, theta: f64) -> f64 {
        match self {
            TrigKind::Cosine => theta.cos(),
            TrigKind::Sine => theta.sin(),
        }
    }

    fn id(&self) -> &'static str {
        match self {
            TrigKind::Cosine => "cos",
            TrigKind::Sine => "sin",
        }
    }

    fn coef_prefix(&self) -> &'static str {
        match self {
            TrigKind::Cosine => "a",
            TrigKind::Sine => "b",
        }
    }
}

/// 週期模式：角度參數與有效過取樣指標都由此決定。
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PeriodMode {
    /// 乘數 2、位移 0：基底在 [a, b] 上走 k 個完整週期。
    Full,
    /// 乘數 1、位移 a：半週期展開，相對區間的時間頻率減半，
    /// 有效過取樣指標為 k/2。
    Half,
}

// ─────────────────────────────────────────────────────────────────────────────
// TrigFamily
// ─────────────────────────────────────────────────────────────────────────────
//
// 三角係數 = (2/(b-a)) · ∫ y·trig(multiplier·k·π·(x-offset)/(b-a)) dx
//
// 三種實例化：
//   standard 的 cos/sin 對     → Full
//   cosine-only（半週期 cos）  → Half
//   sine-only（半週期 sin）    → Half
//
// eval_term 鏡射同一個角度參數，處處有定義。

pub struct TrigFamily {
    kind: TrigKind,
    mode: PeriodMode,
}

impl TrigFamily {
    pub fn full_period(kind: TrigKind) -> TrigFamily {
        TrigFamily { kind, mode: PeriodMode::Full }
    }

    pub fn half_period(kind: TrigKind) -> TrigFamily {
        TrigFamily { kind, mode: PeriodMode::Half }
    }

    fn angle(&self, k: usize, x: f64, a: f64, b: f64) -> f64 {
        let (multiplier, offset) = match self.mode {
            PeriodMode::Full => (2.0, 0.0),
            PeriodMode::Half => (1.0, a),
        };
        multiplier * k as f64 * PI * (x - offset) / (b - a)
    }

    fn effective_index(&self, k: usize) -> f64 {
        match self.mode {
            PeriodMode::Full => k as f64,
            PeriodMode::Half => k as f64 / 2.0,
        }
    }
}

impl CoefficientFamily for TrigFamily {
    fn id(&self) -> &'static str {
        self.kind.id()
    }

    fn coef_prefix(&self) -> &'static str {
        self.kind.coef_prefix()
    }

    fn compute_coef(&self, points: &[Point2D], a: f64, b: f64, k: usize) -> Option<f64> {
        let oversampled =
            oversample(points, a, b, self.effective_index(k), MIN_POINTS_PER_PERIOD);

        let product: Vec<Point2D> = oversampled
            .iter()
            .map(|p| Point2D::new(p.x(), p.y() * self.kind.apply(self.angle(k, p.x(), a, b))))
            .collect();

        integrate(&product, a, b).map(|integral| integral * 2.0 / (b - a))
    }

    fn eval_term(&self, k: usize, x: f64, a: f64, b: f64) -> Option<f64> {
        Some(self.kind.apply(self.angle(k, x, a, b)))
    }
}
