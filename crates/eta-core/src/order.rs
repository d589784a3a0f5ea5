//! 訂單上下文模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 庫存狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    /// 有現貨
    InStock,
    /// 缺貨中，附預計補貨日期
    BackorderUntil(NaiveDate),
    /// 不可購買（無法給出任何交期估算）
    Unavailable,
}

/// 單次估算的訂單輸入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderContext {
    /// 訂購數量
    ///
    /// 目前不影響日期計算；呼叫端可依數量先行放寬備貨區間
    /// 再傳入規則（數量相關的備貨調整屬於呼叫端擴充點）。
    pub quantity: u32,

    /// 庫存狀態
    pub stock_status: StockStatus,

    /// 是否選擇加急出貨
    pub express: bool,
}

impl OrderContext {
    /// 創建新的訂單上下文（預設非加急）
    pub fn new(quantity: u32, stock_status: StockStatus) -> Self {
        Self {
            quantity,
            stock_status,
            express: false,
        }
    }

    /// 建構器模式：標記為加急訂單
    pub fn with_express(mut self, express: bool) -> Self {
        self.express = express;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_context() {
        let ctx = OrderContext::new(2, StockStatus::InStock);

        assert_eq!(ctx.quantity, 2);
        assert_eq!(ctx.stock_status, StockStatus::InStock);
        assert!(!ctx.express);
    }

    #[test]
    fn test_express_builder() {
        let ctx = OrderContext::new(1, StockStatus::InStock).with_express(true);
        assert!(ctx.express);
    }
}
