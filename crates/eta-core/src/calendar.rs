//! 營業日曆模型

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{EtaError, Result};

/// 出貨營業日曆
///
/// 營業日的定義：該日的星期落在 `business_days` 內，且不在 `holidays` 裡。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCalendar {
    /// 營業日（週一到週日，true表示營業日）
    /// 索引 0 = 週一, 1 = 週二, ..., 6 = 週日
    pub business_days: [bool; 7],

    /// 節假日列表（與星期無關，一律排除）
    pub holidays: Vec<NaiveDate>,
}

impl BusinessCalendar {
    /// 創建新的營業日曆（預設週一到週五營業）
    pub fn new() -> Self {
        Self {
            business_days: [true, true, true, true, true, false, false],
            holidays: Vec::new(),
        }
    }

    /// 創建全週營業日曆（七天都出貨的倉庫）
    pub fn all_week() -> Self {
        Self {
            business_days: [true; 7],
            holidays: Vec::new(),
        }
    }

    /// 建構器模式：設置營業日
    pub fn with_business_days(mut self, business_days: [bool; 7]) -> Self {
        self.business_days = business_days;
        self
    }

    /// 建構器模式：設置節假日
    pub fn with_holidays(mut self, holidays: Vec<NaiveDate>) -> Self {
        self.holidays = holidays;
        self.holidays.sort();
        self.holidays.dedup();
        self
    }

    /// 添加節假日
    pub fn add_holiday(&mut self, date: NaiveDate) {
        if !self.holidays.contains(&date) {
            self.holidays.push(date);
            self.holidays.sort();
        }
    }

    /// 從設定存儲的星期編號創建日曆（ISO 編號：1=週一, ..., 7=週日）
    ///
    /// 編號超出 1..=7 視為設定錯誤，直接回報而不是默默略過。
    pub fn from_weekday_numbers(weekdays: &[u8], holidays: Vec<NaiveDate>) -> Result<Self> {
        let mut business_days = [false; 7];
        for &n in weekdays {
            if !(1..=7).contains(&n) {
                return Err(EtaError::InvalidSetting {
                    key: "business_days".to_string(),
                    value: n.to_string(),
                });
            }
            business_days[(n - 1) as usize] = true;
        }

        Ok(Self {
            business_days,
            holidays: Vec::new(),
        }
        .with_holidays(holidays))
    }

    /// 檢查是否為營業日
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        // 節假日一律排除（落在非營業星期的節假日是多餘但無害的）
        if self.holidays.contains(&date) {
            return false;
        }

        let weekday_index = date.weekday().num_days_from_monday() as usize;
        self.business_days[weekday_index]
    }

    /// 檢查是否至少有一個營業日
    pub fn has_business_day(&self) -> bool {
        self.business_days.iter().any(|&d| d)
    }

    /// 向前推算 N 個營業日
    ///
    /// 逐日掃描，只計入營業日；`days = 0` 時回傳起始日期本身。
    pub fn add_business_days(&self, start_date: NaiveDate, days: u32) -> Result<NaiveDate> {
        let mut current = start_date;
        let mut remaining = days;

        while remaining > 0 {
            current = current.succ_opt().ok_or(EtaError::DateOverflow)?;
            if self.is_business_day(current) {
                remaining -= 1;
            }
        }

        Ok(current)
    }

    /// 獲取下一個營業日
    pub fn next_business_day(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.add_business_days(date, 1)
    }

    /// 計算兩個日期之間的營業日數量（不含 start，含 end）
    pub fn business_days_between(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        let mut count = 0;
        let mut current = start;

        while current < end {
            current = match current.succ_opt() {
                Some(d) => d,
                None => break,
            };
            if self.is_business_day(current) {
                count += 1;
            }
        }

        count
    }
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self::new()
    }
}
