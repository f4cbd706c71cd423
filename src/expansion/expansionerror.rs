use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpansionError {
    /// 清理後可用點不足兩個，或請求區間在曲線支撐之外。
    #[error("curve has fewer than 2 usable points over [{a}, {b}]")]
    InsufficientData { a: f64, b: f64 },

    #[error("unknown basis system id '{0}'")]
    UnknownSystem(String),

    /// 非三角系統無法對應到諧波振盪器。
    #[error("system '{0}' cannot drive a harmonic oscillator")]
    UnsupportedSystem(&'static str),
}
