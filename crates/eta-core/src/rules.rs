//! 交期估算規則配置模型

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::calendar::BusinessCalendar;
use crate::{EtaError, Result};

/// 備貨天數區間（含上下界，單位：營業日）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingRange {
    /// 最少備貨天數
    pub min: u32,
    /// 最多備貨天數
    pub max: u32,
}

impl ProcessingRange {
    /// 創建備貨區間，`min > max` 視為配置錯誤
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(EtaError::InvalidRules(format!(
                "備貨天數區間無效: min {} > max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }
}

/// 加急出貨通道（較短的備貨區間與運輸天數）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressLane {
    /// 加急備貨區間
    pub processing_days: ProcessingRange,
    /// 加急運輸天數（營業日）
    pub lead_time_days: u32,
}

/// 顯示語系（影響區間字串的星期縮寫與日期格式）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// 德文，例如 "Mi, 12.11."
    De,
    /// 英文，例如 "Wed, Nov 12"
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::De
    }
}

/// 交期估算規則（每次計算載入一次，計算期間唯讀）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRules {
    /// 出貨營業日曆
    pub calendar: BusinessCalendar,

    /// 截單時間：當日此時刻（含）之後的訂單視為次日下單
    pub cutoff_time: NaiveTime,

    /// 標準備貨區間
    pub processing_days: ProcessingRange,

    /// 標準運輸天數（營業日，依物流方式而定）
    pub lead_time_days: u32,

    /// 加急通道（未配置時加急選項退回標準通道）
    pub express: Option<ExpressLane>,

    /// 庫存顯示上限（只影響庫存訊息，不參與日期計算）
    pub max_visible_stock: u32,

    /// 顯示語系
    pub locale: Locale,
}

impl CalendarRules {
    /// 創建新的估算規則（預設：截單 14:00、備貨 1–2 天、運輸 3 天）
    pub fn new(calendar: BusinessCalendar) -> Self {
        Self {
            calendar,
            cutoff_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            processing_days: ProcessingRange { min: 1, max: 2 },
            lead_time_days: 3,
            express: None,
            max_visible_stock: 10,
            locale: Locale::default(),
        }
    }

    /// 建構器模式：設置截單時間
    pub fn with_cutoff_time(mut self, cutoff: NaiveTime) -> Self {
        self.cutoff_time = cutoff;
        self
    }

    /// 建構器模式：設置備貨區間
    pub fn with_processing_days(mut self, range: ProcessingRange) -> Self {
        self.processing_days = range;
        self
    }

    /// 建構器模式：設置運輸天數
    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = days;
        self
    }

    /// 建構器模式：設置加急通道
    pub fn with_express(mut self, lane: ExpressLane) -> Self {
        self.express = Some(lane);
        self
    }

    /// 建構器模式：設置庫存顯示上限
    pub fn with_max_visible_stock(mut self, cap: u32) -> Self {
        self.max_visible_stock = cap;
        self
    }

    /// 建構器模式：設置顯示語系
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// 驗證規則，任何日期計算前必須先通過
    pub fn validate(&self) -> Result<()> {
        if !self.calendar.has_business_day() {
            return Err(EtaError::InvalidRules(
                "營業日集合為空，無法推算任何日期".to_string(),
            ));
        }

        if self.processing_days.min > self.processing_days.max {
            return Err(EtaError::InvalidRules(format!(
                "備貨天數區間無效: min {} > max {}",
                self.processing_days.min, self.processing_days.max
            )));
        }

        if let Some(lane) = &self.express {
            if lane.processing_days.min > lane.processing_days.max {
                return Err(EtaError::InvalidRules(format!(
                    "加急備貨天數區間無效: min {} > max {}",
                    lane.processing_days.min, lane.processing_days.max
                )));
            }
        }

        Ok(())
    }

    /// 依訂單是否加急，取出實際生效的備貨區間與運輸天數
    pub fn effective_lane(&self, express: bool) -> (ProcessingRange, u32) {
        match (express, &self.express) {
            (true, Some(lane)) => (lane.processing_days, lane.lead_time_days),
            _ => (self.processing_days, self.lead_time_days),
        }
    }
}

impl Default for CalendarRules {
    fn default() -> Self {
        Self::new(BusinessCalendar::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = CalendarRules::default();

        assert_eq!(rules.cutoff_time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(rules.processing_days, ProcessingRange { min: 1, max: 2 });
        assert_eq!(rules.lead_time_days, 3);
        assert!(rules.express.is_none());
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_rules_builder() {
        let rules = CalendarRules::new(BusinessCalendar::all_week())
            .with_cutoff_time(NaiveTime::from_hms_opt(12, 30, 0).unwrap())
            .with_processing_days(ProcessingRange::new(0, 1).unwrap())
            .with_lead_time_days(5)
            .with_max_visible_stock(25)
            .with_locale(Locale::En);

        assert_eq!(rules.cutoff_time, NaiveTime::from_hms_opt(12, 30, 0).unwrap());
        assert_eq!(rules.lead_time_days, 5);
        assert_eq!(rules.max_visible_stock, 25);
        assert_eq!(rules.locale, Locale::En);
    }

    #[test]
    fn test_validate_empty_business_days() {
        let calendar = BusinessCalendar::new().with_business_days([false; 7]);
        let rules = CalendarRules::new(calendar);

        assert!(matches!(
            rules.validate(),
            Err(crate::EtaError::InvalidRules(_))
        ));
    }

    #[test]
    fn test_processing_range_rejects_inverted() {
        assert!(ProcessingRange::new(3, 1).is_err());
        assert!(ProcessingRange::new(2, 2).is_ok());
    }

    #[test]
    fn test_effective_lane_without_express_config() {
        // 未配置加急通道時，加急請求退回標準參數
        let rules = CalendarRules::default();
        let (range, lead) = rules.effective_lane(true);

        assert_eq!(range, rules.processing_days);
        assert_eq!(lead, rules.lead_time_days);
    }

    #[test]
    fn test_effective_lane_with_express_config() {
        let rules = CalendarRules::default().with_express(ExpressLane {
            processing_days: ProcessingRange { min: 0, max: 1 },
            lead_time_days: 1,
        });

        let (range, lead) = rules.effective_lane(true);
        assert_eq!(range, ProcessingRange { min: 0, max: 1 });
        assert_eq!(lead, 1);

        // 非加急訂單仍走標準通道
        let (range, lead) = rules.effective_lane(false);
        assert_eq!(range, rules.processing_days);
        assert_eq!(lead, 3);
    }
}
