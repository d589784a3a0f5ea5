//! # ETA Calculation Engine
//!
//! 交期區間計算引擎：截單時間調整、庫存閘控、營業日推算與格式化

pub mod calculator;
pub mod cutoff;
pub mod format;
pub mod stock;

// Re-export 主要類型
pub use calculator::WindowCalculator;
pub use stock::StockDisplay;
