use super::cachebackend::{
    CacheBackend,
    RefCellBackend,
    RwLockBackend
};

/// 預設格點數。
pub const DEFAULT_GRID_SIZE: usize = 2000;
/// 預設延伸域界：格點涵蓋 [-1.5, 1.5]，讓部分和可稍微外插到擬合區間外。
pub const DEFAULT_DOMAIN_BOUND: f64 = 1.5;

// ─────────────────────────────────────────────────────────────────────────────
// LegendreEvaluator
// ─────────────────────────────────────────────────────────────────────────────
//
// 在固定均勻格點上以三項遞迴建表：
//
//   P_0(x) = 1
//   P_1(x) = x
//   P_{n+1}(x) = ((2n+1)·x·P_n(x) - n·P_{n-1}(x)) / (n+1)
//
// 逐列快取（append-only，見 cachebackend.rs）。點求值時先夾到
// [x_min, x_max]，再於最近的兩個格點間線性內插。
//
// 階數型別為 usize：負數／非整數階在型別上不可表示。

/// 核心 struct 只寫一次，C 決定執行緒安全性
pub struct LegendreEvaluator<C: CacheBackend> {
    x_min: f64,
    x_max: f64,
    step: f64,
    grid_size: usize,
    backend: C,
}

fn seed_rows(grid_size: usize, x_min: f64, x_max: f64) -> Vec<Vec<f64>> {
    let step = (x_max - x_min) / (grid_size - 1) as f64;
    let p0 = vec![1.0; grid_size];
    let p1 = (0..grid_size).map(|i| x_min + step * i as f64).collect();
    vec![p0, p1]
}

impl<C: CacheBackend> LegendreEvaluator<C> {
    fn new_with_backend(grid_size: usize, x_min: f64, x_max: f64, backend: C) -> Self {
        assert!(grid_size >= 2, "grid requires at least 2 points");
        assert!(x_max > x_min, "empty grid domain");
        Self {
            x_min,
            x_max,
            step: (x_max - x_min) / (grid_size - 1) as f64,
            grid_size,
            backend,
        }
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// 目前已快取的最高階數。
    pub fn cached_order(&self) -> usize {
        self.backend.row_count() - 1
    }

    /// 求 P_order(x)。x 超出格點域時夾到邊界，域內以線性內插求值。
    pub fn value(&self, order: usize, x: f64) -> f64 {
        let x = x.clamp(self.x_min, self.x_max);
        let pos = (x - self.x_min) / self.step;
        let i = (pos as usize).min(self.grid_size - 2);
        let weight = pos - i as f64;

        self.backend.with_row(
            order,
            |p_prev, p_curr, n| {
                let nf = n as f64;
                (0..p_curr.len())
                    .map(|j| {
                        let xj = self.x_min + self.step * j as f64;
                        ((2.0 * nf + 1.0) * xj * p_curr[j] - nf * p_prev[j]) / (nf + 1.0)
                    })
                    .collect()
            },
            |row| row[i] + weight * (row[i + 1] - row[i]),
        )
    }
}

/// 兩個 convenience constructor，分別對應兩種用途
impl LegendreEvaluator<RefCellBackend> {
    pub fn new() -> Self {
        Self::with_grid(DEFAULT_GRID_SIZE, -DEFAULT_DOMAIN_BOUND, DEFAULT_DOMAIN_BOUND)
    }

    pub fn with_grid(grid_size: usize, x_min: f64, x_max: f64) -> Self {
        let backend = RefCellBackend::new(seed_rows(grid_size, x_min, x_max));
        Self::new_with_backend(grid_size, x_min, x_max, backend)
    }
}

impl LegendreEvaluator<RwLockBackend> {
    pub fn new_threadsafe() -> Self {
        Self::with_grid_threadsafe(DEFAULT_GRID_SIZE, -DEFAULT_DOMAIN_BOUND, DEFAULT_DOMAIN_BOUND)
    }

    pub fn with_grid_threadsafe(grid_size: usize, x_min: f64, x_max: f64) -> Self {
        let backend = RwLockBackend::new(seed_rows(grid_size, x_min, x_max));
        Self::new_with_backend(grid_size, x_min, x_max, backend)
    }
}

// ── Type alias：對外只暴露這兩個名字 ─────────────────────────────────────────

pub type SingleThreadedLegendreEvaluator = LegendreEvaluator<RefCellBackend>;
pub type ThreadSafeLegendreEvaluator = LegendreEvaluator<RwLockBackend>;
