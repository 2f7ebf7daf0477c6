// ==========================================
// EC退货率分析系统 - YOY 计算引擎
// ==========================================
// 职责: 标准记录按店铺配对 → ShopYoy 派生结果
// 输入: CanonicalRecord 集合 (同店铺至多本年/上年各一条)
// 红线: 新开店不计算 YOY; 上年缺失的展示默认值 0
//       仅用于展示,绝不进入除法
// 输出保持输入中店铺首次出现的顺序
// ==========================================

use crate::config::CompareYears;
use crate::domain::record::CanonicalRecord;
use crate::domain::shop::ShopYoy;
use crate::engine::new_shop::NewShopDetector;
use crate::engine::risk::RiskEngine;
use std::collections::HashMap;

// ==========================================
// YoyEngine - YOY 计算引擎
// ==========================================
pub struct YoyEngine {
    detector: NewShopDetector,
    risk_engine: RiskEngine,
}

impl YoyEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            detector: NewShopDetector::new(),
            risk_engine: RiskEngine::new(),
        }
    }

    /// 派生整批店铺的 YOY 结果
    ///
    /// # 参数
    /// - `records`: 标准记录集
    /// - `years`: 对比年度
    ///
    /// # 返回
    /// ShopYoy 列表,无本年记录的店铺被整体剔除
    pub fn derive(&self, records: &[CanonicalRecord], years: CompareYears) -> Vec<ShopYoy> {
        // 按 (品牌, 渠道, 店铺) 分组,保持首次出现顺序
        let mut order: Vec<(String, String, String)> = Vec::new();
        let mut groups: HashMap<(String, String, String), (Option<usize>, Option<usize>)> =
            HashMap::new();

        for (idx, rec) in records.iter().enumerate() {
            let key = (
                rec.brand.clone(),
                rec.channel.clone(),
                rec.shop_name.clone(),
            );
            let entry = groups.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                (None, None)
            });
            if rec.year == years.current {
                entry.0.get_or_insert(idx);
            } else if rec.year == years.previous {
                entry.1.get_or_insert(idx);
            }
        }

        let mut results = Vec::with_capacity(order.len());
        for key in &order {
            let (current_idx, previous_idx) = groups[key];

            // 无本年记录的店铺不存在于报告期,整体剔除
            let current = match current_idx {
                Some(idx) => &records[idx],
                None => continue,
            };
            let previous = previous_idx.map(|idx| &records[idx]);

            results.push(self.derive_shop(current, previous));
        }

        results
    }

    /// 派生单店铺 YOY
    fn derive_shop(&self, current: &CanonicalRecord, previous: Option<&CanonicalRecord>) -> ShopYoy {
        let is_new_shop = self.detector.is_new_shop(previous);

        // 展示默认值: 缺失记录/单元格按 0 展示
        let sales_current = current.net_sales.unwrap_or(0.0);
        let sales_previous = previous.and_then(|r| r.net_sales).unwrap_or(0.0);
        let return_rate_current = current.return_rate.unwrap_or(0.0);
        let return_rate_previous = previous.and_then(|r| r.return_rate).unwrap_or(0.0);

        let (sales_yoy_amount, sales_yoy_pct, return_rate_yoy_pct) = if is_new_shop {
            // 新开店不可比: 三项 YOY 一律为 None
            (None, None, None)
        } else {
            self.compute_yoy(current, previous)
        };

        let risk_level = self.risk_engine.classify(
            is_new_shop,
            sales_yoy_amount,
            sales_yoy_pct,
            return_rate_yoy_pct,
        );

        ShopYoy {
            brand: current.brand.clone(),
            channel: current.channel.clone(),
            shop_name: current.shop_name.clone(),
            sales_current,
            sales_previous,
            return_rate_current,
            return_rate_previous,
            sales_yoy_amount,
            sales_yoy_pct,
            return_rate_yoy_pct,
            is_new_shop,
            risk_level,
            suggestion: risk_level.suggestion().to_string(),
        }
    }

    /// 非新开店的 YOY 算术
    ///
    /// - sales_yoy_amount = 本年销售 − 上年销售 (任一缺失则 None)
    /// - sales_yoy_pct = amount / 上年销售 × 100 (上年为 0 则 None)
    /// - return_rate_yoy_pct = (本年率 − 上年率) × 100 (百分点差值)
    fn compute_yoy(
        &self,
        current: &CanonicalRecord,
        previous: Option<&CanonicalRecord>,
    ) -> (Option<f64>, Option<f64>, Option<f64>) {
        let prev = match previous {
            Some(p) => p,
            None => return (None, None, None),
        };

        let sales_yoy_amount = match (current.net_sales, prev.net_sales) {
            (Some(cur), Some(p)) => Some(cur - p),
            _ => None,
        };

        let sales_yoy_pct = match (sales_yoy_amount, prev.net_sales) {
            (Some(amount), Some(p)) if p != 0.0 => Some(amount / p * 100.0),
            _ => None,
        };

        let return_rate_yoy_pct = match (current.return_rate, prev.return_rate) {
            (Some(cur), Some(p)) => Some((cur - p) * 100.0),
            _ => None,
        };

        (sales_yoy_amount, sales_yoy_pct, return_rate_yoy_pct)
    }
}

impl Default for YoyEngine {
    fn default() -> Self {
        Self::new()
    }
}
