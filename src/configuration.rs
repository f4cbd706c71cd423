use std::f64::consts::PI;

use serde::Serialize;

use crate::basis::basissystem::BasisSystemType;
use crate::math::curve::sampledcurve::{
    sample_function,
    Point2D
};

// ─────────────────────────────────────────────────────────────────────────────
// 顯示設定（靜態）
// ─────────────────────────────────────────────────────────────────────────────

/// 一個係數族的顯示中繼資料。
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FamilyConfig {
    id: &'static str,
    title: &'static str,
    plot_title: &'static str,
    coef_prefix: &'static str,
}

impl FamilyConfig {
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn plot_title(&self) -> &'static str {
        self.plot_title
    }

    pub fn coef_prefix(&self) -> &'static str {
        self.coef_prefix
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SystemConfig {
    system_type: BasisSystemType,
    label: &'static str,
    families: Vec<FamilyConfig>,
}

impl SystemConfig {
    pub fn system_type(&self) -> BasisSystemType {
        self.system_type
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn families(&self) -> &[FamilyConfig] {
        &self.families
    }
}

pub fn system_config(system_type: BasisSystemType) -> SystemConfig {
    match system_type {
        BasisSystemType::Standard => SystemConfig {
            system_type,
            label: "Standard (½, sin, cos)",
            families: vec![
                FamilyConfig {
                    id: "cos",
                    title: "Cosine terms",
                    plot_title: "aₖ · cos(2kπx/(b-a))",
                    coef_prefix: "a",
                },
                FamilyConfig {
                    id: "sin",
                    title: "Sine terms",
                    plot_title: "bₖ · sin(2kπx/(b-a))",
                    coef_prefix: "b",
                },
            ],
        },
        BasisSystemType::Cos => SystemConfig {
            system_type,
            label: "Cosine",
            families: vec![FamilyConfig {
                id: "cos",
                title: "Cosine terms",
                plot_title: "aₖ · cos(kπ(x-a)/(b-a))",
                coef_prefix: "a",
            }],
        },
        BasisSystemType::Sin => SystemConfig {
            system_type,
            label: "Sine",
            families: vec![FamilyConfig {
                id: "sin",
                title: "Sine terms",
                plot_title: "bₖ · sin(kπ(x-a)/(b-a))",
                coef_prefix: "b",
            }],
        },
        BasisSystemType::Chebyshev => SystemConfig {
            system_type,
            label: "Chebyshev",
            families: vec![FamilyConfig {
                id: "T",
                title: "Chebyshev polynomials Tₖ",
                plot_title: "aₖ · Tₖ(x)",
                coef_prefix: "T",
            }],
        },
        BasisSystemType::Legendre => SystemConfig {
            system_type,
            label: "Legendre",
            families: vec![FamilyConfig {
                id: "P",
                title: "Legendre polynomials Pₖ",
                plot_title: "aₖ · Pₖ(x)",
                coef_prefix: "P",
            }],
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 範例函數目錄
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
pub struct ExampleFunction {
    name: &'static str,
    func: fn(f64) -> f64,
    domain: (f64, f64),
}

impl ExampleFunction {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn eval(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    /// 在自然定義域上取樣成曲線。
    pub fn sample(&self, n: usize) -> Vec<Point2D> {
        sample_function(self.func, self.domain.0, self.domain.1, n)
    }
}

pub fn example_functions() -> Vec<ExampleFunction> {
    vec![
        ExampleFunction {
            name: "sin(x)",
            func: f64::sin,
            domain: (-PI, PI),
        },
        ExampleFunction {
            name: "x²",
            func: |x| x * x,
            domain: (-2.0, 2.0),
        },
        ExampleFunction {
            name: "e^x",
            func: f64::exp,
            domain: (-1.0, 1.0),
        },
        ExampleFunction {
            name: "step",
            func: |x| if x > 0.0 { 1.0 } else { -1.0 },
            domain: (-1.0, 1.0),
        },
        ExampleFunction {
            name: "sawtooth",
            func: |x| x - x.floor(),
            domain: (0.0, 1.0),
        },
    ]
}
