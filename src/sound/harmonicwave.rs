use crate::basis::basissystem::BasisSystemType;
use crate::expansion::coefficientset::CoefficientSet;
use crate::expansion::expansionerror::ExpansionError;
use crate::view::fourierview::CoefficientActivity;

pub const DEFAULT_BASE_FREQUENCY: f64 = 220.0;

// ─────────────────────────────────────────────────────────────────────────────
// HarmonicWave
// ─────────────────────────────────────────────────────────────────────────────
//
// 把三角類係數集映射到諧波振盪器的波表：real 放 cosine 項（a_k）、
// imag 放 sine 項（b_k），索引 0（直流）固定為 0，索引 1..=max_k 為各
// 諧波。未啟用的係數視為 0。
//
// 半週期展開（cos/sin 系統）的基本週期是 2L，播放頻率減半。
// chebyshev/legendre 不是諧波疊加，一律回報 UnsupportedSystem。

pub struct HarmonicWave {
    real: Vec<f32>,
    imag: Vec<f32>,
    frequency: f64,
}

impl HarmonicWave {
    pub fn from_coefs(
        coefs: &CoefficientSet,
        activity: &CoefficientActivity,
        base_frequency: f64,
    ) -> Result<HarmonicWave, ExpansionError> {
        let max_k = coefs.max_k();
        let mut real = vec![0.0f32; max_k + 1];
        let mut imag = vec![0.0f32; max_k + 1];

        let masked = |family_index: usize, k: usize| -> f32 {
            if activity.is_active(family_index, k) {
                coefs.family(family_index).coef(k) as f32
            } else {
                0.0
            }
        };

        match coefs.system_type() {
            BasisSystemType::Standard => {
                for k in 1..=coefs.family(0).coefs().len() {
                    real[k] = masked(0, k);
                }
                for k in 1..=coefs.family(1).coefs().len() {
                    imag[k] = masked(1, k);
                }
            }
            BasisSystemType::Cos => {
                for k in 1..=coefs.family(0).coefs().len() {
                    real[k] = masked(0, k);
                }
            }
            BasisSystemType::Sin => {
                for k in 1..=coefs.family(0).coefs().len() {
                    imag[k] = masked(0, k);
                }
            }
            other => return Err(ExpansionError::UnsupportedSystem(other.id())),
        }

        let frequency = if coefs.system_type() == BasisSystemType::Standard {
            base_frequency
        } else {
            base_frequency / 2.0
        };

        Ok(HarmonicWave { real, imag, frequency })
    }

    pub fn real(&self) -> &[f32] {
        &self.real
    }

    pub fn imag(&self) -> &[f32] {
        &self.imag
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}
