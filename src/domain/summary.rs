// ==========================================
// EC退货率分析系统 - 分组汇总实体
// ==========================================
// GroupSummary: 渠道或品牌维度的汇总视图,可随时由
// ShopYoy 集合重算,除 key 外无独立身份
// ==========================================
// 口径红线: total_sales_current (全部成员) 与
// comparable_sales_current (可比子集) 是两个不同的分母,
// 禁止复用同一个 "总销售额" 变量
// ==========================================

use crate::domain::shop::ShopYoy;
use crate::domain::types::GroupDimension;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// 汇总维度 (渠道/品牌)
    pub dimension: GroupDimension,
    /// 分组键 (渠道名或品牌名)
    pub key: String,
    /// 本年总销售额: 全部成员店铺求和 (含新开店)
    pub total_sales_current: f64,
    /// 上年总销售额: 仅可比子集求和
    pub total_sales_previous: f64,
    /// 本年可比子集销售额: 本年加权退货率的分母
    pub comparable_sales_current: f64,
    /// 本年加权退货率 (按可比子集本年销售额加权,小数)
    pub weighted_return_rate_current: f64,
    /// 上年加权退货率 (按可比子集上年销售额加权,小数)
    pub weighted_return_rate_previous: f64,
    /// 销售同比绝对额 (由汇总值重新推导,非店铺均值)
    pub sales_yoy_amount: f64,
    /// 销售同比百分比 (上年总额为 0 时为 None)
    pub sales_yoy_pct: Option<f64>,
    /// 退货率同比 (加权率差值,百分点)
    pub return_rate_yoy_pct: f64,
    /// 成员店铺数 (全部成员)
    pub shop_count: usize,
    /// 高风险店铺数 (五级细分计数)
    pub high_risk_count: usize,
    /// 观察店铺数 (五级细分计数)
    pub watch_count: usize,
    /// 新开店数
    pub new_store_count: usize,
    /// 组级风险指标 (粗粒度判定路径,见 RiskEngine::classify_coarse)
    pub has_risk: bool,
    /// 成员店铺 (按风险等级排序,同级保持输入顺序)
    pub member_shops: Vec<ShopYoy>,
}
