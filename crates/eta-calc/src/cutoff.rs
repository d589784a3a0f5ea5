//! 截單時間與庫存閘控

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use eta_core::{EtaError, Result, StockStatus};

/// 依截單時間求生效下單日期
///
/// 到達截單時刻（含）之後的訂單順延一個日曆日再開始營業日推算；
/// 順延是日曆日，不是營業日，後續的備貨推算才負責跳過非營業日。
pub fn effective_order_date(now: NaiveDateTime, cutoff: NaiveTime) -> Result<NaiveDate> {
    let date = now.date();
    if now.time() >= cutoff {
        date.succ_opt().ok_or(EtaError::DateOverflow)
    } else {
        Ok(date)
    }
}

/// 依庫存狀態閘控下單日期
///
/// 缺貨補貨中的商品最早從補貨日起算；不可購買的商品直接失敗，
/// 不猜測任何替代日期。
pub fn gate_by_stock(order_date: NaiveDate, stock: StockStatus) -> Result<NaiveDate> {
    match stock {
        StockStatus::InStock => Ok(order_date),
        StockStatus::BackorderUntil(restock) => Ok(order_date.max(restock)),
        StockStatus::Unavailable => Err(EtaError::StockUnavailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[rstest]
    #[case(13, 59, 14)] // 截單前一分鐘：當日
    #[case(14, 0, 15)] // 正好截單時刻：次日（含）
    #[case(14, 1, 15)] // 截單後：次日
    #[case(0, 0, 14)] // 午夜下單：當日
    fn test_cutoff_boundary(#[case] hour: u32, #[case] minute: u32, #[case] expected_day: u32) {
        let cutoff = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        let result = effective_order_date(at(hour, minute), cutoff).unwrap();
        assert_eq!(result, NaiveDate::from_ymd_opt(2025, 11, expected_day).unwrap());
    }

    #[test]
    fn test_backorder_pushes_order_date() {
        let order_date = NaiveDate::from_ymd_opt(2025, 11, 14).unwrap();
        let restock = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();

        let gated = gate_by_stock(order_date, StockStatus::BackorderUntil(restock)).unwrap();
        assert_eq!(gated, restock);
    }

    #[test]
    fn test_past_restock_date_is_inert() {
        // 補貨日已過：維持原下單日期
        let order_date = NaiveDate::from_ymd_opt(2025, 11, 14).unwrap();
        let restock = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();

        let gated = gate_by_stock(order_date, StockStatus::BackorderUntil(restock)).unwrap();
        assert_eq!(gated, order_date);
    }

    #[test]
    fn test_unavailable_stock_fails() {
        let order_date = NaiveDate::from_ymd_opt(2025, 11, 14).unwrap();

        assert!(matches!(
            gate_by_stock(order_date, StockStatus::Unavailable),
            Err(EtaError::StockUnavailable)
        ));
    }
}
