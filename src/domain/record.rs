// ==========================================
// EC退货率分析系统 - 原始行与标准记录
// ==========================================
// RawShopRow: 导入边界的原始文本行 (来自 CSV/Excel)
// CanonicalRecord: 清洗后的 (店铺, 年度) 标准记录
// 约束: 同一 (shop_name, year) 至多一条标准记录
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 原始店铺行 (RawShopRow)
// ==========================================
// 单元格保持来源文本形态: 可能带千分位逗号、百分号、
// 占位符 "-" 或为空,由 DataCleaner 统一清洗
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawShopRow {
    /// 渠道代码/名称
    pub channel: String,
    /// 店铺名称
    pub shop_name: String,
    /// 本年净销售 (原始文本)
    pub sales_current: Option<String>,
    /// 上年净销售 (原始文本)
    pub sales_previous: Option<String>,
    /// 本年YTD退货率 (原始文本)
    pub return_rate_current: Option<String>,
    /// 上年YTD退货率 (原始文本)
    pub return_rate_previous: Option<String>,
}

// ==========================================
// 标准记录 (CanonicalRecord)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// 渠道
    pub channel: String,
    /// 店铺名称 (同一年度内唯一)
    pub shop_name: String,
    /// 品牌 (由店铺名称关键字映射得出)
    pub brand: String,
    /// 年度 (数据集内仅出现本年/上年两个值)
    pub year: i32,
    /// 净销售额 (缺失为 None,不折算为 0)
    pub net_sales: Option<f64>,
    /// 退货率小数 [0,1] (缺失为 None)
    pub return_rate: Option<f64>,
}
