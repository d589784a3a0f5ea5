//! 庫存顯示訊息
//!
//! 庫存數字只做展示截頂，不參與任何日期計算。

use eta_core::Locale;
use serde::{Deserialize, Serialize};

/// 對外展示的庫存數量（實際數量以 `max_visible_stock` 截頂）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockDisplay {
    /// 數量在上限以內，照實顯示
    Exact(u32),
    /// 超過上限，只顯示「超過 N 件」
    MoreThan(u32),
}

impl StockDisplay {
    /// 依顯示上限截頂實際庫存數量
    pub fn from_quantity(actual: u32, cap: u32) -> Self {
        if actual > cap {
            StockDisplay::MoreThan(cap)
        } else {
            StockDisplay::Exact(actual)
        }
    }

    /// 本地化的庫存訊息字串
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (StockDisplay::Exact(n), Locale::De) => format!("Noch {} auf Lager", n),
            (StockDisplay::Exact(n), Locale::En) => format!("{} in stock", n),
            (StockDisplay::MoreThan(n), Locale::De) => format!("Mehr als {} auf Lager", n),
            (StockDisplay::MoreThan(n), Locale::En) => format!("More than {} in stock", n),
        }
    }
}
