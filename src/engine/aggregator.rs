// ==========================================
// EC退货率分析系统 - 渠道/品牌汇总引擎
// ==========================================
// 职责: ShopYoy 集合按维度分组,产出 GroupSummary
// ==========================================
// 口径红线 (两个分母不可混用):
// - total_sales_current: 全部成员求和,含新开店
// - comparable_sales_current: 可比子集求和,本年加权退货率的分母
// 组级 YOY 由汇总值重新推导,不做店铺百分比求均
// 内部全程使用未舍入原值,舍入只发生在展示边界
// ==========================================

use crate::domain::shop::ShopYoy;
use crate::domain::summary::GroupSummary;
use crate::domain::types::{CoarseRisk, GroupDimension, RiskLevel};
use crate::engine::risk::RiskEngine;
use std::collections::HashMap;

// ==========================================
// SummaryEngine - 汇总引擎
// ==========================================
pub struct SummaryEngine {
    risk_engine: RiskEngine,
}

impl SummaryEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            risk_engine: RiskEngine::new(),
        }
    }

    /// 按维度汇总
    ///
    /// # 参数
    /// - `shops`: 全量 ShopYoy (输入顺序即原始顺序)
    /// - `dimension`: 汇总维度 (渠道/品牌)
    ///
    /// # 返回
    /// GroupSummary 列表,按本年总销售额降序
    pub fn summarize(&self, shops: &[ShopYoy], dimension: GroupDimension) -> Vec<GroupSummary> {
        // 分组,保持键首次出现顺序
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<&ShopYoy>> = HashMap::new();

        for shop in shops {
            let key = match dimension {
                GroupDimension::Channel => shop.channel.clone(),
                GroupDimension::Brand => shop.brand.clone(),
            };
            if let Some(members) = groups.get_mut(&key) {
                members.push(shop);
            } else {
                order.push(key.clone());
                groups.insert(key, vec![shop]);
            }
        }

        let mut summaries: Vec<GroupSummary> = order
            .iter()
            .map(|key| self.summarize_group(dimension, key, &groups[key]))
            .collect();

        // 组间按本年总销售额降序
        summaries.sort_by(|a, b| b.total_sales_current.total_cmp(&a.total_sales_current));
        summaries
    }

    /// 汇总单个分组
    fn summarize_group(
        &self,
        dimension: GroupDimension,
        key: &str,
        members: &[&ShopYoy],
    ) -> GroupSummary {
        // 可比子集: 非新开店且上年销售有效非零
        let comparable: Vec<&&ShopYoy> = members.iter().filter(|s| s.is_comparable()).collect();

        // 本年总销售额: 全部成员 (新开店的本年营收计入本年总额)
        let total_sales_current: f64 = members.iter().map(|s| s.sales_current).sum();
        // 上年总销售额: 仅可比子集
        let total_sales_previous: f64 = comparable.iter().map(|s| s.sales_previous).sum();
        // 本年可比子集销售额: 本年加权退货率的专用分母
        let comparable_sales_current: f64 = comparable.iter().map(|s| s.sales_current).sum();

        // 加权退货率 = Σ(率×销售额) / Σ(销售额),均在可比子集上
        let weighted_return_rate_current = Self::weighted_rate(
            comparable.iter().map(|s| (s.return_rate_current, s.sales_current)),
            comparable_sales_current,
        );
        let weighted_return_rate_previous = Self::weighted_rate(
            comparable.iter().map(|s| (s.return_rate_previous, s.sales_previous)),
            total_sales_previous,
        );

        // 组级 YOY 由汇总值重新推导
        let sales_yoy_amount = total_sales_current - total_sales_previous;
        let sales_yoy_pct = if total_sales_previous > 0.0 {
            Some(sales_yoy_amount / total_sales_previous * 100.0)
        } else {
            None
        };
        let return_rate_yoy_pct =
            (weighted_return_rate_current - weighted_return_rate_previous) * 100.0;

        // 风险计数: 全部成员上的五级细分计数
        let high_risk_count = members
            .iter()
            .filter(|s| s.risk_level == RiskLevel::HighRisk)
            .count();
        let watch_count = members
            .iter()
            .filter(|s| s.risk_level == RiskLevel::Watch)
            .count();
        let new_store_count = members.iter().filter(|s| s.is_new_shop).count();

        // 组级风险指标走粗粒度判定路径
        let has_risk = self.risk_engine.classify_coarse(
            false,
            sales_yoy_pct.unwrap_or(0.0),
            return_rate_yoy_pct,
        ) != CoarseRisk::Normal;

        // 成员排序: 风险等级序号升序,同级保持输入顺序 (稳定排序)
        let mut member_shops: Vec<ShopYoy> = members.iter().map(|s| (**s).clone()).collect();
        member_shops.sort_by_key(|s| s.risk_level.rank());

        GroupSummary {
            dimension,
            key: key.to_string(),
            total_sales_current,
            total_sales_previous,
            comparable_sales_current,
            weighted_return_rate_current,
            weighted_return_rate_previous,
            sales_yoy_amount,
            sales_yoy_pct,
            return_rate_yoy_pct,
            shop_count: members.len(),
            high_risk_count,
            watch_count,
            new_store_count,
            has_risk,
            member_shops,
        }
    }

    /// 销售额加权均值,分母为零时取 0
    fn weighted_rate<I>(pairs: I, denominator: f64) -> f64
    where
        I: Iterator<Item = (f64, f64)>,
    {
        if denominator <= 0.0 {
            return 0.0;
        }
        let numerator: f64 = pairs.map(|(rate, sales)| rate * sales).sum();
        numerator / denominator
    }
}

impl Default for SummaryEngine {
    fn default() -> Self {
        Self::new()
    }
}
