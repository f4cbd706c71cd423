use super::sampledcurve::{
    clean_curve,
    interpolate,
    Point2D
};

// ─────────────────────────────────────────────────────────────────────────────
// 截斷梯形積分
// ─────────────────────────────────────────────────────────────────────────────
//
// 將折線曲線視為分段線性函數，逐段累加梯形面積：
//
//   ∫ ≈ Σ (x2-x1)·(y1+y2)/2
//
// 積分範圍 [a, b] 與曲線支撐不一致時：
//   - 曲線超出 [a, b]：首尾段以內插截斷到邊界
//   - [a, b] 超出曲線：以曲線端點為界（不外插）
//   - [a, b] 完全落在曲線支撐之外：無結果

/// 對折線曲線計算 [a, b] 上的定積分。
///
/// 先清理曲線；可用點不足兩個、或請求區間與曲線支撐不相交時回傳 `None`。
pub fn integrate(points: &[Point2D], a: f64, b: f64) -> Option<f64> {
    let cleaned = clean_curve(points);
    if cleaned.len() < 2 {
        return None;
    }

    // 最小的「右端點 ≥ a」段與最大的「左端點 ≤ b」段
    let mut start_idx = 0;
    while start_idx < cleaned.len() - 1 && cleaned[start_idx + 1].x() < a {
        start_idx += 1;
    }

    let mut end_idx = cleaned.len() - 1;
    while end_idx > 0 && cleaned[end_idx - 1].x() > b {
        end_idx -= 1;
    }

    if start_idx >= end_idx {
        return None;
    }

    let first_x = a.max(cleaned[start_idx].x());
    let last_x = b.min(cleaned[end_idx].x());

    let mut integral = 0.0;
    for i in start_idx..end_idx {
        let x1 = if i == start_idx { first_x } else { cleaned[i].x() };
        let x2 = if i == end_idx - 1 { last_x } else { cleaned[i + 1].x() };

        let mut y1 = cleaned[i].y();
        let mut y2 = cleaned[i + 1].y();

        if i == start_idx && x1 > cleaned[i].x() {
            y1 = interpolate(x1, &cleaned[i], &cleaned[i + 1]);
        }
        if i == end_idx - 1 && x2 < cleaned[i + 1].x() {
            y2 = interpolate(x2, &cleaned[i], &cleaned[i + 1]);
        }

        integral += (x2 - x1) * (y1 + y2) / 2.0;
    }

    Some(integral)
}
