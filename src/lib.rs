//! # ETA
//!
//! 電商交期區間估算引擎：營業日推算、截單時間、節假日、
//! 備貨與運輸區間、加急通道與庫存顯示截頂。

pub use eta_calc::{StockDisplay, WindowCalculator};
pub use eta_core::{
    BusinessCalendar, CalendarRules, DeliveryWindow, EtaError, ExpressLane, Locale, OrderContext,
    ProcessingRange, Result, StockStatus, StoreSettings,
};
