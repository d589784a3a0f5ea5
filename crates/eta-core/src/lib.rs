//! # ETA Core
//!
//! 交期估算核心資料模型與類型定義

pub mod calendar;
pub mod order;
pub mod rules;
pub mod settings;
pub mod window;

// Re-export 主要類型
pub use calendar::BusinessCalendar;
pub use order::{OrderContext, StockStatus};
pub use rules::{CalendarRules, ExpressLane, Locale, ProcessingRange};
pub use settings::StoreSettings;
pub use window::DeliveryWindow;

/// 交期估算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum EtaError {
    #[error("無效的日曆規則: {0}")]
    InvalidRules(String),

    #[error("庫存不可用，無法估算交期")]
    StockUnavailable,

    #[error("無效的設定值: {key} = {value}")]
    InvalidSetting { key: String, value: String },

    #[error("日期運算溢出")]
    DateOverflow,
}

pub type Result<T> = std::result::Result<T, EtaError>;
