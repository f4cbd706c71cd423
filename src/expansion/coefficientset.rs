use serde::{
    Serialize,
    Deserialize
};

use crate::basis::basissystem::BasisSystemType;

/// 一個係數族在 k = 1..=max_k 的係數，依 k 遞增排列。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FamilyCoefficients {
    id: String,
    coefs: Vec<f64>,
}

impl FamilyCoefficients {
    pub fn new(id: String, coefs: Vec<f64>) -> FamilyCoefficients {
        FamilyCoefficients { id, coefs }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coefs(&self) -> &[f64] {
        &self.coefs
    }

    /// k 為 1-based 諧波指標。
    pub fn coef(&self, k: usize) -> f64 {
        self.coefs[k - 1]
    }
}

/// 一次展開請求的完整結果。建構後不可變（僅提供 accessor）。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoefficientSet {
    system_type: BasisSystemType,
    c0: f64,
    families: Vec<FamilyCoefficients>,
    domain: (f64, f64),
}

impl CoefficientSet {
    pub fn new(
        system_type: BasisSystemType,
        c0: f64,
        families: Vec<FamilyCoefficients>,
        domain: (f64, f64),
    ) -> CoefficientSet {
        CoefficientSet { system_type, c0, families, domain }
    }

    pub fn system_type(&self) -> BasisSystemType {
        self.system_type
    }

    pub fn c0(&self) -> f64 {
        self.c0
    }

    pub fn families(&self) -> &[FamilyCoefficients] {
        &self.families
    }

    pub fn family(&self, index: usize) -> &FamilyCoefficients {
        &self.families[index]
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn max_k(&self) -> usize {
        self.families
            .iter()
            .map(|family| family.coefs.len())
            .max()
            .unwrap_or(0)
    }
}
