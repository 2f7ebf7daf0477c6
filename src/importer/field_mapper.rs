// ==========================================
// EC退货率分析系统 - 字段映射器
// ==========================================
// 职责: 源表头 → RawShopRow 标准字段映射
// 列名按对比年度动态生成 (如 "2025年净销售" / "2024年YTD-退货率")
// 数值/百分比单元格保持原始文本,清洗交给 DataCleaner
// ==========================================

use crate::config::CompareYears;
use crate::domain::record::RawShopRow;
use std::collections::HashMap;

pub struct FieldMapper {
    channel_col: String,
    shop_col: String,
    sales_current_col: String,
    sales_previous_col: String,
    return_current_col: String,
    return_previous_col: String,
}

impl FieldMapper {
    /// 按对比年度构造列名映射
    pub fn new(years: CompareYears) -> Self {
        Self {
            channel_col: "渠道".to_string(),
            shop_col: "店铺".to_string(),
            sales_current_col: format!("{}年净销售", years.current),
            sales_previous_col: format!("{}年净销售", years.previous),
            return_current_col: format!("{}年YTD-退货率", years.current),
            return_previous_col: format!("{}年YTD-退货率", years.previous),
        }
    }

    /// 映射单行: 渠道或店铺为空的行视为无效行,返回 None
    pub fn map_to_raw_row(&self, row: &HashMap<String, String>) -> Option<RawShopRow> {
        let channel = self.get_string(row, &self.channel_col)?;
        let shop_name = self.get_string(row, &self.shop_col)?;

        Some(RawShopRow {
            channel,
            shop_name,
            sales_current: self.get_string(row, &self.sales_current_col),
            sales_previous: self.get_string(row, &self.sales_previous_col),
            return_rate_current: self.get_string(row, &self.return_current_col),
            return_rate_previous: self.get_string(row, &self.return_previous_col),
        })
    }

    /// 提取字符串字段 (TRIM,空白返回 None)
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key).and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new(CompareYears::default())
    }
}
