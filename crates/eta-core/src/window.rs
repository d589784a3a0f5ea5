//! 交期估算結果模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 交期估算結果（每次請求重新計算，不跨請求快取）
///
/// 序列化欄位名對齊前端渲染層消費的扁平鍵：
/// `earliest_date` / `latest_date` / `delivery_window` / `ship_by_date`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    /// 生效下單日期（截單時間調整後）
    pub order_placed_on: NaiveDate,

    /// 最晚出貨日（按最少備貨天數推算）
    pub ship_by_date: NaiveDate,

    /// 預估最早到貨日
    #[serde(rename = "earliest_date")]
    pub earliest_delivery_date: NaiveDate,

    /// 預估最晚到貨日
    #[serde(rename = "latest_date")]
    pub latest_delivery_date: NaiveDate,

    /// 格式化後的到貨區間字串，例如 "Mi, 12.11. – Do, 13.11."
    #[serde(rename = "delivery_window")]
    pub window_formatted: String,
}

impl DeliveryWindow {
    /// 檢查日期單調性：下單 <= 出貨 <= 最早到貨 <= 最晚到貨
    pub fn is_ordered(&self) -> bool {
        self.order_placed_on <= self.ship_by_date
            && self.ship_by_date <= self.earliest_delivery_date
            && self.earliest_delivery_date <= self.latest_delivery_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_window() -> DeliveryWindow {
        DeliveryWindow {
            order_placed_on: NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
            ship_by_date: NaiveDate::from_ymd_opt(2025, 11, 11).unwrap(),
            earliest_delivery_date: NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(),
            latest_delivery_date: NaiveDate::from_ymd_opt(2025, 11, 13).unwrap(),
            window_formatted: "Mi, 12.11. – Do, 13.11.".to_string(),
        }
    }

    #[test]
    fn test_is_ordered() {
        assert!(sample_window().is_ordered());

        let mut bad = sample_window();
        bad.earliest_delivery_date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        assert!(!bad.is_ordered());
    }

    #[test]
    fn test_serializes_flat_rendering_keys() {
        let json = serde_json::to_value(sample_window()).unwrap();

        assert!(json.get("earliest_date").is_some());
        assert!(json.get("latest_date").is_some());
        assert!(json.get("delivery_window").is_some());
        assert!(json.get("ship_by_date").is_some());
    }
}
