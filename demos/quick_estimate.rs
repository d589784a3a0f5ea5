//! 簡單交期估算示例

use chrono::NaiveDate;
use eta_calc::{StockDisplay, WindowCalculator};
use eta_core::{OrderContext, StockStatus, StoreSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單交期估算示例 ===\n");

    // 模擬從設定存儲載入的扁平鍵值
    let settings: StoreSettings = serde_json::from_value(serde_json::json!({
        "cutoff_time": "14:00",
        "business_days": [1, 2, 3, 4, 5],
        "holidays": ["2025-12-25", "2025-12-26"],
        "processing_min": 1,
        "processing_max": 2,
        "default_lead_time": 3,
        "debug_mode": true
    }))?;

    // debug_mode 只影響日誌等級，不參與計算
    let level = if settings.debug_mode {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let rules = settings.into_rules()?;
    let locale = rules.locale;
    let max_visible = rules.max_visible_stock;
    let calculator = WindowCalculator::new(rules);

    // 注入的「現在」：2025-11-14（週五）15:30，已過截單時間
    let now = NaiveDate::from_ymd_opt(2025, 11, 14)
        .unwrap()
        .and_hms_opt(15, 30, 0)
        .unwrap();

    let context = OrderContext::new(2, StockStatus::InStock);
    let window = calculator.compute(now, &context)?;

    println!("下單時刻: {now}");
    println!("生效下單日期: {}", window.order_placed_on);
    println!("最晚出貨日: {}", window.ship_by_date);
    println!(
        "到貨區間: {} 至 {}",
        window.earliest_delivery_date, window.latest_delivery_date
    );
    println!("顯示字串: {}", window.window_formatted);

    // 庫存訊息截頂
    let display = StockDisplay::from_quantity(137, max_visible);
    println!("庫存訊息: {}", display.message(locale));

    // 渲染層消費的扁平 JSON
    println!("\nJSON: {}", serde_json::to_string_pretty(&window)?);

    Ok(())
}
