//! 加急出貨比較示例：同一張訂單，標準與加急通道的到貨區間對比

use chrono::NaiveDate;
use eta_calc::WindowCalculator;
use eta_core::{
    BusinessCalendar, CalendarRules, ExpressLane, OrderContext, ProcessingRange, StockStatus,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 加急出貨比較示例 ===\n");

    // 直接用建構器組規則（不經設定存儲）
    let rules = CalendarRules::new(BusinessCalendar::new())
        .with_processing_days(ProcessingRange::new(1, 2)?)
        .with_lead_time_days(3)
        .with_express(ExpressLane {
            processing_days: ProcessingRange::new(0, 1)?,
            lead_time_days: 1,
        });
    let calculator = WindowCalculator::new(rules);

    // 2025-11-12（週三）11:00 下單
    let now = NaiveDate::from_ymd_opt(2025, 11, 12)
        .unwrap()
        .and_hms_opt(11, 0, 0)
        .unwrap();

    let standard = calculator.compute(now, &OrderContext::new(1, StockStatus::InStock))?;
    let express = calculator.compute(
        now,
        &OrderContext::new(1, StockStatus::InStock).with_express(true),
    )?;

    println!("標準: {}", standard.window_formatted);
    println!("加急: {}", express.window_formatted);

    let saved = calculator.rules().calendar.business_days_between(
        express.earliest_delivery_date,
        standard.earliest_delivery_date,
    );
    println!("\n加急最多提早 {saved} 個營業日到貨");

    Ok(())
}
