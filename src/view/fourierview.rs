use serde::Serialize;

use crate::basis::basissystem::BasisSystem;
use crate::expansion::coefficientset::{
    CoefficientSet,
    FamilyCoefficients
};
use crate::math::curve::sampledcurve::Point2D;

// ─────────────────────────────────────────────────────────────────────────────
// CoefficientActivity
// ─────────────────────────────────────────────────────────────────────────────

/// 每個係數的啟用遮罩。純粹是檢視層狀態，不屬於數值契約。
pub struct CoefficientActivity {
    c0: bool,
    families: Vec<Vec<bool>>,
}

impl CoefficientActivity {
    pub fn new(c0: bool, families: Vec<Vec<bool>>) -> CoefficientActivity {
        CoefficientActivity { c0, families }
    }

    /// 依係數集的形狀建立全啟用遮罩。
    pub fn all_active(coefs: &CoefficientSet) -> CoefficientActivity {
        CoefficientActivity {
            c0: true,
            families: coefs
                .families()
                .iter()
                .map(|family| vec![true; family.coefs().len()])
                .collect(),
        }
    }

    pub fn c0(&self) -> bool {
        self.c0
    }

    pub fn set_c0(&mut self, active: bool) {
        self.c0 = active;
    }

    /// k 為 1-based 諧波指標；遮罩外的位置視為未啟用。
    pub fn is_active(&self, family_index: usize, k: usize) -> bool {
        self.families
            .get(family_index)
            .and_then(|family| family.get(k - 1))
            .copied()
            .unwrap_or(false)
    }

    pub fn set_active(&mut self, family_index: usize, k: usize, active: bool) {
        if let Some(flag) = self
            .families
            .get_mut(family_index)
            .and_then(|family| family.get_mut(k - 1))
        {
            *flag = active;
        }
    }
}

/// 回傳把未啟用係數歸零後的複本；原係數集不變。
pub fn active_coefs(coefs: &CoefficientSet, activity: &CoefficientActivity) -> CoefficientSet {
    let families = coefs
        .families()
        .iter()
        .enumerate()
        .map(|(family_index, family)| {
            let masked = family
                .coefs()
                .iter()
                .enumerate()
                .map(|(index, &coef)| {
                    if activity.is_active(family_index, index + 1) { coef } else { 0.0 }
                })
                .collect();
            FamilyCoefficients::new(family.id().to_owned(), masked)
        })
        .collect();

    CoefficientSet::new(
        coefs.system_type(),
        if activity.c0() { coefs.c0() } else { 0.0 },
        families,
        coefs.domain(),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// TermSeries
// ─────────────────────────────────────────────────────────────────────────────

/// 單一諧波項 coef·eval_term 的取樣序列，附繪圖屬性。
/// 超出可外插範圍的 x 不產生點（序列留空隙，不補零）。
#[derive(Clone, Debug, Serialize)]
pub struct TermSeries {
    points: Vec<Point2D>,
    color: String,
    label: String,
    dashed: bool,
}

impl TermSeries {
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn dashed(&self) -> bool {
        self.dashed
    }
}

/// 為一個係數族的每個諧波建立取樣序列。未啟用的係數以虛線標示。
pub fn term_series(
    system: &BasisSystem,
    coefs: &CoefficientSet,
    activity: &CoefficientActivity,
    family_index: usize,
    x_domain: (f64, f64),
    samples: usize,
) -> Vec<TermSeries> {
    let Some(family_coefs) = coefs.families().get(family_index) else {
        return Vec::new();
    };
    let family_def = &system.families()[family_index];
    let (a, b) = coefs.domain();
    let harmonic_count = family_coefs.coefs().len().max(1);

    family_coefs
        .coefs()
        .iter()
        .enumerate()
        .map(|(index, &coef)| {
            let k = index + 1;

            let mut points = Vec::with_capacity(samples + 1);
            for i in 0..=samples {
                let x = x_domain.0 + (x_domain.1 - x_domain.0) * i as f64 / samples as f64;
                if let Some(term) = family_def.eval_term(k, x, a, b) {
                    points.push(Point2D::new(x, coef * term));
                }
            }

            TermSeries {
                points,
                color: format!("hsl({}, 70%, 50%)", index * 360 / harmonic_count),
                label: format!("{}{}", family_def.coef_prefix(), k),
                dashed: !activity.is_active(family_index, k),
            }
        })
        .collect()
}

/// 所有族係數的頻域範圍：對稱整數化，負值才往下開。
pub fn frequency_domain(coefs: &CoefficientSet) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for family in coefs.families() {
        for &coef in family.coefs() {
            min = min.min(coef);
            max = max.max(coef);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 0.0);
    }

    let range = min.abs().max(max.abs()).ceil();
    (
        if min < 0.0 { -range } else { 0.0 },
        if max < 0.0 { 0.0 } else { range },
    )
}
