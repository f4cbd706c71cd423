// ── cachebackend.rs ─────────────────────────────────────────────────────────

use std::cell::RefCell;
use std::sync::RwLock;

/// 抽象快取行為：單調擴充 + 讀取。
///
/// # Cache 設計：append-only 遞迴表
///
/// 快取內容是多項式遞迴表：第 n 列存 P_n 在整個格點上的值，建構時植入
/// P_0、P_1 兩列。表只往後增長，已存在的列永不重算，因此：
/// - order 小於表長時為純讀取，不觸發任何計算
/// - 擴充具冪等性：同一 order 重複擴充得到相同的表
///
/// `next_row(p_prev, p_curr, n)` 由第 n-1、n 列產生第 n+1 列；
/// `read` 在表擴充到位後取用第 `order` 列。
pub trait CacheBackend {
    fn with_row<R>(
        &self,
        order: usize,
        next_row: impl Fn(&[f64], &[f64], usize) -> Vec<f64>,
        read: impl FnOnce(&[f64]) -> R,
    ) -> R;

    /// 目前已快取的列數（僅供觀測，不觸發計算）。
    fn row_count(&self) -> usize;
}

// ── 單執行緒版：RefCell ──────────────────────────────────────────────────────

pub struct RefCellBackend {
    rows: RefCell<Vec<Vec<f64>>>,
}

impl RefCellBackend {
    pub fn new(seed_rows: Vec<Vec<f64>>) -> Self {
        Self {
            rows: RefCell::new(seed_rows),
        }
    }
}

impl CacheBackend for RefCellBackend {
    fn with_row<R>(
        &self,
        order: usize,
        next_row: impl Fn(&[f64], &[f64], usize) -> Vec<f64>,
        read: impl FnOnce(&[f64]) -> R,
    ) -> R {
        let mut rows = self.rows.borrow_mut();
        while rows.len() <= order {
            let n = rows.len() - 1;
            let next = next_row(&rows[n - 1], &rows[n], n);
            rows.push(next);
        }
        read(&rows[order])
    }

    fn row_count(&self) -> usize {
        self.rows.borrow().len()
    }
}

// ── 多執行緒版：RwLock ───────────────────────────────────────────────────────
//
// # 擴充的序列化
//
// Step 1（read lock）與 Step 2（write lock）之間，兩條執行緒可能都發現表
// 不夠長而先後進入 write lock；持鎖後重新檢查表長，後到者看到的表已擴充
// 完畢，迴圈直接結束。擴充永遠在 write lock 內逐列進行，讀取端看到的表長
// 只增不減，已存在的列內容不變。

pub struct RwLockBackend {
    rows: RwLock<Vec<Vec<f64>>>,
}

impl RwLockBackend {
    pub fn new(seed_rows: Vec<Vec<f64>>) -> Self {
        Self {
            rows: RwLock::new(seed_rows),
        }
    }
}

impl CacheBackend for RwLockBackend {
    fn with_row<R>(
        &self,
        order: usize,
        next_row: impl Fn(&[f64], &[f64], usize) -> Vec<f64>,
        read: impl FnOnce(&[f64]) -> R,
    ) -> R {
        // Step 1：讀鎖快速路徑——表已夠長時純讀取
        {
            let rows = self.rows.read().unwrap();
            if order < rows.len() {
                return read(&rows[order]);
            }
        }

        // Step 2：寫鎖擴充（double-checked：持鎖後重新檢查表長）
        {
            let mut rows = self.rows.write().unwrap();
            while rows.len() <= order {
                let n = rows.len() - 1;
                let next = next_row(&rows[n - 1], &rows[n], n);
                rows.push(next);
            }
        }

        // Step 3：表只增不減，釋放寫鎖後第 order 列仍然有效
        let rows = self.rows.read().unwrap();
        read(&rows[order])
    }

    fn row_count(&self) -> usize {
        self.rows.read().unwrap().len()
    }
}
