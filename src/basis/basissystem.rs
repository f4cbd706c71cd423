use std::str::FromStr;

use serde::{
    Serialize,
    Deserialize
};

use crate::expansion::approximation::FourierApproximation;
use crate::expansion::coefficientset::{
    CoefficientSet,
    FamilyCoefficients
};
use crate::expansion::expansionerror::ExpansionError;
use crate::math::curve::integration::integrate;
use crate::math::curve::sampledcurve::Point2D;

use super::chebyshevfamily::ChebyshevFamily;
use super::coefficientfamily::CoefficientFamily;
use super::legendrefamily::LegendreFamily;
use super::trigfamily::{
    TrigFamily,
    TrigKind
};

// ─────────────────────────────────────────────────────────────────────────────
// BasisSystemType
// ─────────────────────────────────────────────────────────────────────────────

/// 五個基底系統的封閉集合。字串 id 只存在於 serde／`FromStr` 邊界；
/// 內部一律以 `match` 分派。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasisSystemType {
    Standard,
    Cos,
    Sin,
    Chebyshev,
    Legendre
}

/// 顯示順序。
pub const SYSTEM_ORDER: [BasisSystemType; 5] = [
    BasisSystemType::Standard,
    BasisSystemType::Cos,
    BasisSystemType::Sin,
    BasisSystemType::Chebyshev,
    BasisSystemType::Legendre,
];

impl BasisSystemType {
    pub fn id(&self) -> &'static str {
        match self {
            BasisSystemType::Standard => "standard",
            BasisSystemType::Cos => "cos",
            BasisSystemType::Sin => "sin",
            BasisSystemType::Chebyshev => "chebyshev",
            BasisSystemType::Legendre => "legendre",
        }
    }

    /// 三角類系統才能送進諧波振盪器（見 sound::harmonicwave）。
    pub fn is_trigonometric(&self) -> bool {
        matches!(
            self,
            BasisSystemType::Standard | BasisSystemType::Cos | BasisSystemType::Sin
        )
    }
}

impl FromStr for BasisSystemType {
    type Err = ExpansionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(BasisSystemType::Standard),
            "cos" => Ok(BasisSystemType::Cos),
            "sin" => Ok(BasisSystemType::Sin),
            "chebyshev" => Ok(BasisSystemType::Chebyshev),
            "legendre" => Ok(BasisSystemType::Legendre),
            _ => Err(ExpansionError::UnknownSystem(s.to_owned())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BasisSystem
// ─────────────────────────────────────────────────────────────────────────────
//
// 常數項規則：
//
//   standard / cos：c0 = 2/(b-a)·∫y，求值貢獻 c0/2
//   sin           ：恆為 0
//   chebyshev     ：k = 0 的 Chebyshev 係數，求值貢獻 c0
//   legendre      ：k = 0 的 Legendre 係數，求值貢獻 c0
//
// Legendre 系統在建構時取得自己的 evaluator 快取；獨立的 BasisSystem
// 實例之間不共享狀態。

pub struct BasisSystem {
    system_type: BasisSystemType,
    families: Vec<Box<dyn CoefficientFamily>>,
}

impl BasisSystem {
    pub fn new(system_type: BasisSystemType) -> BasisSystem {
        let families: Vec<Box<dyn CoefficientFamily>> = match system_type {
            BasisSystemType::Standard => vec![
                Box::new(TrigFamily::full_period(TrigKind::Cosine)),
                Box::new(TrigFamily::full_period(TrigKind::Sine)),
            ],
            BasisSystemType::Cos => {
                vec![Box::new(TrigFamily::half_period(TrigKind::Cosine))]
            }
            BasisSystemType::Sin => {
                vec![Box::new(TrigFamily::half_period(TrigKind::Sine))]
            }
            BasisSystemType::Chebyshev => vec![Box::new(ChebyshevFamily)],
            BasisSystemType::Legendre => vec![Box::new(LegendreFamily::new())],
        };
        BasisSystem { system_type, families }
    }

    pub fn system_type(&self) -> BasisSystemType {
        self.system_type
    }

    pub fn families(&self) -> &[Box<dyn CoefficientFamily>] {
        &self.families
    }

    pub fn compute_c0(&self, points: &[Point2D], a: f64, b: f64) -> Option<f64> {
        match self.system_type {
            BasisSystemType::Standard | BasisSystemType::Cos => {
                integrate(points, a, b).map(|integral| integral * 2.0 / (b - a))
            }
            BasisSystemType::Sin => Some(0.0),
            BasisSystemType::Chebyshev | BasisSystemType::Legendre => {
                self.families[0].compute_coef(points, a, b, 0)
            }
        }
    }

    pub fn eval_c0(&self, c0: f64) -> f64 {
        match self.system_type {
            BasisSystemType::Standard | BasisSystemType::Cos => c0 / 2.0,
            BasisSystemType::Sin => 0.0,
            BasisSystemType::Chebyshev | BasisSystemType::Legendre => c0,
        }
    }

    /// 計算 c0 與各族 k = 1..=max_k 的係數（k 遞增），組成不可變的
    /// 係數集。積分因資料不足失敗時回傳 `InsufficientData`，不會 panic。
    pub fn compute_coefs(
        &self,
        points: &[Point2D],
        a: f64,
        b: f64,
        max_k: usize,
    ) -> Result<CoefficientSet, ExpansionError> {
        let c0 = self
            .compute_c0(points, a, b)
            .ok_or(ExpansionError::InsufficientData { a, b })?;

        let mut families = Vec::with_capacity(self.families.len());
        for family in &self.families {
            let mut coefs = Vec::with_capacity(max_k);
            for k in 1..=max_k {
                let coef = family
                    .compute_coef(points, a, b, k)
                    .ok_or(ExpansionError::InsufficientData { a, b })?;
                coefs.push(coef);
            }
            families.push(FamilyCoefficients::new(family.id().to_owned(), coefs));
        }

        Ok(CoefficientSet::new(self.system_type, c0, families, (a, b)))
    }

    /// 以此係數集建立部分和求值器。係數集必須出自同型系統。
    pub fn approximation<'a>(&'a self, coefs: &'a CoefficientSet) -> FourierApproximation<'a> {
        FourierApproximation::new(self, coefs)
    }
}
