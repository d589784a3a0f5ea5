//! 交期區間主計算器

use chrono::NaiveDateTime;
use eta_core::{CalendarRules, DeliveryWindow, OrderContext, Result};

use crate::{cutoff, format};

/// 交期區間計算器
///
/// 純計算：不讀系統時鐘、不做 I/O、不改動規則；
/// 相同輸入永遠產生相同輸出。
pub struct WindowCalculator {
    /// 估算規則（計算期間唯讀）
    rules: CalendarRules,
}

impl WindowCalculator {
    /// 創建新的計算器
    pub fn new(rules: CalendarRules) -> Self {
        Self { rules }
    }

    /// 取出規則（供呼叫端讀取顯示上限等欄位）
    pub fn rules(&self) -> &CalendarRules {
        &self.rules
    }

    /// 主計算入口：`(now, context)` → 交期區間
    ///
    /// `now` 由呼叫端注入，一次請求取一次時鐘，重算必定可重現。
    pub fn compute(&self, now: NaiveDateTime, context: &OrderContext) -> Result<DeliveryWindow> {
        // Step 0: 規則驗證，失敗就不做任何日期運算
        self.rules.validate()?;

        tracing::debug!(
            "開始交期計算：now {}, 數量 {}, 加急 {}",
            now,
            context.quantity,
            context.express
        );

        // Step 1: 截單時間調整
        let nominal_date = cutoff::effective_order_date(now, self.rules.cutoff_time)?;

        // Step 2: 庫存閘控（不可購買在此直接失敗）
        let order_placed_on = cutoff::gate_by_stock(nominal_date, context.stock_status)?;
        tracing::debug!("生效下單日期: {}", order_placed_on);

        // Step 3: 選擇生效通道（加急或標準）
        let (processing, lead_time_days) = self.rules.effective_lane(context.express);

        // Step 4: 備貨區間，所有路徑共用同一個營業日推算原語
        let calendar = &self.rules.calendar;
        let ship_by_date = calendar.add_business_days(order_placed_on, processing.min)?;
        let ship_by_latest = calendar.add_business_days(order_placed_on, processing.max)?;
        tracing::debug!("出貨日: {} 至 {}", ship_by_date, ship_by_latest);

        // Step 5: 運輸區間
        let earliest_delivery_date = calendar.add_business_days(ship_by_date, lead_time_days)?;
        let latest_delivery_date = calendar.add_business_days(ship_by_latest, lead_time_days)?;
        tracing::debug!(
            "到貨區間: {} 至 {}",
            earliest_delivery_date,
            latest_delivery_date
        );

        // Step 6: 格式化
        let window_formatted = format::format_window(
            earliest_delivery_date,
            latest_delivery_date,
            self.rules.locale,
        );

        Ok(DeliveryWindow {
            order_placed_on,
            ship_by_date,
            earliest_delivery_date,
            latest_delivery_date,
            window_formatted,
        })
    }
}
