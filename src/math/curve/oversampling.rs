use super::sampledcurve::{
    clean_curve,
    interpolate,
    Point2D
};

/// 每個振盪週期的最低取樣數。
pub const MIN_POINTS_PER_PERIOD: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// 適應性過取樣
// ─────────────────────────────────────────────────────────────────────────────
//
// 基底指標 k 在 [a, b] 上的振盪週期估計：
//   k = 0：整個區間
//   k > 0：(b-a)/(2k)
//
// 由此推得最低取樣數 desired_n = ceil((b-a)/period · min_points_per_period)。
// 輸入曲線比這更稀疏時，改以均勻 x 重新取樣（forward-advancing pointer 做
// 線性內插），避免高階乘積積分時的 aliasing。
//
// k 為 f64：半週期族的有效指標是 k/2。

/// 確保曲線密度足以積分基底指標 k 的乘積曲線。
///
/// 點數永不減少；已滿足密度要求的（乾淨）曲線原樣回傳。輸入會先經過
/// `clean_curve`，因此 pointer 掃描所要求的 x 遞增前置條件恆成立；可用點
/// 不足兩個時不重新取樣，直接回傳清理後的結果。
pub fn oversample(
    points: &[Point2D],
    a: f64,
    b: f64,
    k: f64,
    min_points_per_period: usize,
) -> Vec<Point2D> {
    let cleaned = clean_curve(points);
    if cleaned.len() < 2 {
        return cleaned;
    }

    let period = if k == 0.0 { b - a } else { (b - a) / (2.0 * k) };
    let desired_n = ((b - a) / period * min_points_per_period as f64).ceil() as usize;

    if desired_n < 2 || cleaned.len() >= desired_n {
        return cleaned;
    }

    let mut resampled = Vec::with_capacity(desired_n);
    let mut j = 0;
    for i in 0..desired_n {
        let x = a + (b - a) * i as f64 / (desired_n - 1) as f64;
        while j < cleaned.len() - 1 && cleaned[j].x() < x {
            j += 1;
        }
        if j == 0 {
            j = 1;
        }
        resampled.push(Point2D::new(x, interpolate(x, &cleaned[j - 1], &cleaned[j])));
    }

    resampled
}
