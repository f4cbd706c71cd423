use crate::basis::basissystem::BasisSystem;

use super::coefficientset::CoefficientSet;

/// 部分和求值器：y = eval_c0(c0) + Σ_families Σ_k coef·eval_term(k, x)。
///
/// 任一項在 x 處回傳 out-of-range 標記時，整個值就是 `None`——
/// 不會退化成部分和。
pub struct FourierApproximation<'a> {
    system: &'a BasisSystem,
    coefs: &'a CoefficientSet,
}

impl<'a> FourierApproximation<'a> {
    pub fn new(system: &'a BasisSystem, coefs: &'a CoefficientSet) -> FourierApproximation<'a> {
        assert!(
            system.system_type() == coefs.system_type(),
            "coefficient set was computed for a different basis system"
        );
        FourierApproximation { system, coefs }
    }

    pub fn value(&self, x: f64) -> Option<f64> {
        let (a, b) = self.coefs.domain();
        let mut y = self.system.eval_c0(self.coefs.c0());

        for (family_def, family_coefs) in
            self.system.families().iter().zip(self.coefs.families())
        {
            for (index, &coef) in family_coefs.coefs().iter().enumerate() {
                let term = family_def.eval_term(index + 1, x, a, b)?;
                y += coef * term;
            }
        }

        Some(y)
    }
}
