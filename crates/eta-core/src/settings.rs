//! 商店設定載入
//!
//! 設定存儲以扁平鍵值對供應規則（外部系統的序列化格式），
//! 缺少的鍵一律退回文件化的預設值：截單 14:00、週一到週五營業、
//! 無節假日、備貨 1–2 天、運輸 3 天。

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar::BusinessCalendar;
use crate::rules::{CalendarRules, ExpressLane, Locale, ProcessingRange};
use crate::{EtaError, Result};

/// 商店設定（扁平鍵值，全部可缺省）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// 截單時間，"HH:MM" 格式
    pub cutoff_time: Option<String>,

    /// 營業日，ISO 星期編號（1=週一, ..., 7=週日）
    pub business_days: Option<Vec<u8>>,

    /// 節假日，"YYYY-MM-DD" 格式
    pub holidays: Option<Vec<String>>,

    /// 最少備貨天數
    pub processing_min: Option<u32>,

    /// 最多備貨天數
    pub processing_max: Option<u32>,

    /// 預設運輸天數
    pub default_lead_time: Option<u32>,

    /// 加急最少備貨天數
    pub express_processing_min: Option<u32>,

    /// 加急最多備貨天數
    pub express_processing_max: Option<u32>,

    /// 加急運輸天數（缺省時不啟用加急通道）
    pub express_lead_time: Option<u32>,

    /// 庫存顯示上限
    pub max_visible_stock: Option<u32>,

    /// 顯示語系（"de" / "en"）
    pub locale: Option<String>,

    /// 除錯模式（只影響呼叫端的日誌等級，不參與計算）
    pub debug_mode: bool,
}

impl StoreSettings {
    /// 轉換為已驗證的估算規則
    ///
    /// 缺少的鍵套用預設值；存在但無法解析的值回報
    /// `InvalidSetting`，不做靜默跳過。
    pub fn into_rules(self) -> Result<CalendarRules> {
        let cutoff_time = match &self.cutoff_time {
            Some(raw) => parse_cutoff(raw)?,
            None => NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        };

        let holidays = match &self.holidays {
            Some(raw_dates) => {
                let mut dates = Vec::with_capacity(raw_dates.len());
                for raw in raw_dates {
                    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                        EtaError::InvalidSetting {
                            key: "holidays".to_string(),
                            value: raw.clone(),
                        }
                    })?;
                    dates.push(date);
                }
                dates
            }
            None => Vec::new(),
        };

        let calendar = match &self.business_days {
            Some(weekdays) => BusinessCalendar::from_weekday_numbers(weekdays, holidays)?,
            None => BusinessCalendar::new().with_holidays(holidays),
        };

        let processing_days = ProcessingRange::new(
            self.processing_min.unwrap_or(1),
            self.processing_max.unwrap_or(2),
        )?;

        let locale = match self.locale.as_deref() {
            Some("de") | Some("DE") => Locale::De,
            Some("en") | Some("EN") => Locale::En,
            Some(other) => {
                return Err(EtaError::InvalidSetting {
                    key: "locale".to_string(),
                    value: other.to_string(),
                })
            }
            None => Locale::default(),
        };

        let mut rules = CalendarRules::new(calendar)
            .with_cutoff_time(cutoff_time)
            .with_processing_days(processing_days)
            .with_lead_time_days(self.default_lead_time.unwrap_or(3))
            .with_max_visible_stock(self.max_visible_stock.unwrap_or(10))
            .with_locale(locale);

        // 加急通道只在物流方式明確提供加急運輸天數時啟用，
        // 加急備貨區間缺省時沿用標準區間
        if let Some(express_lead) = self.express_lead_time {
            let express_range = ProcessingRange::new(
                self.express_processing_min.unwrap_or(processing_days.min),
                self.express_processing_max.unwrap_or(processing_days.max),
            )?;
            rules = rules.with_express(ExpressLane {
                processing_days: express_range,
                lead_time_days: express_lead,
            });
        }

        rules.validate()?;
        Ok(rules)
    }
}

/// 解析 "HH:MM" 截單時間
fn parse_cutoff(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| EtaError::InvalidSetting {
        key: "cutoff_time".to_string(),
        value: raw.to_string(),
    })
}
