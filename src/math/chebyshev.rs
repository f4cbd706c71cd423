// ─────────────────────────────────────────────────────────────────────────────
// Chebyshev 第一類多項式求值
// ─────────────────────────────────────────────────────────────────────────────
//
// [-1, 1] 內使用三角恆等式，界外使用雙曲延拓：
//
//   |x| ≤ 1：T_k(x) = cos(k·acos x)
//   x > 1 ：T_k(x) = cosh(k·acosh x)
//   x < -1：T_k(x) = (-1)^k·cosh(k·acosh(-x))   （T_k(-x) = (-1)^k·T_k(x)）
//
// 雙曲分支讓部分和在擬合區間外仍可溫和外插。

pub fn chebyshev_t(k: usize, x: f64) -> f64 {
    let kf = k as f64;
    if x.abs() <= 1.0 {
        (kf * x.acos()).cos()
    } else if x > 1.0 {
        (kf * x.acosh()).cosh()
    } else {
        let value = (kf * (-x).acosh()).cosh();
        if k % 2 == 0 { value } else { -value }
    }
}

/// 將 [a, b] 上的 x 正規化到 [-1, 1]。
pub fn to_unit_interval(x: f64, a: f64, b: f64) -> f64 {
    (2.0 * x - (b + a)) / (b - a)
}
