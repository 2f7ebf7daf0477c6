// ==========================================
// EC退货率分析系统 - 店铺同比实体
// ==========================================
// ShopYoy: 单店铺的 YOY 派生结果,管线运行后不可变
// 约束: is_new_shop=true 时三项 YOY 字段一律为 None,
//       不从缺失的上年数据推算
// 注意: 所有数值均为未舍入原值,展示舍入在 api::formatter
// ==========================================

use crate::domain::types::RiskLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopYoy {
    /// 品牌
    pub brand: String,
    /// 渠道
    pub channel: String,
    /// 店铺名称
    pub shop_name: String,
    /// 本年净销售 (记录缺失时为 0,仅用于展示)
    pub sales_current: f64,
    /// 上年净销售 (记录缺失时为 0,仅用于展示,不参与除法)
    pub sales_previous: f64,
    /// 本年退货率小数 (缺失时为 0,仅用于展示)
    pub return_rate_current: f64,
    /// 上年退货率小数 (缺失时为 0,仅用于展示)
    pub return_rate_previous: f64,
    /// 销售同比绝对额 (不可计算时为 None)
    pub sales_yoy_amount: Option<f64>,
    /// 销售同比百分比 (上年为 0 或缺失时为 None)
    pub sales_yoy_pct: Option<f64>,
    /// 退货率同比 (百分点差值,不可计算时为 None)
    pub return_rate_yoy_pct: Option<f64>,
    /// 是否新开店
    pub is_new_shop: bool,
    /// 风险等级 (五级细分)
    pub risk_level: RiskLevel,
    /// 建议文案 (risk_level 的静态查表结果)
    pub suggestion: String,
}

impl ShopYoy {
    /// 是否可比店铺: 非新开店且上年销售额有效非零
    pub fn is_comparable(&self) -> bool {
        !self.is_new_shop && self.sales_previous > 0.0
    }
}
