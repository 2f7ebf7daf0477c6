// ==========================================
// EC退货率分析系统 - 风险判定引擎
// ==========================================
// 职责: 店铺风险等级判定,全定义域覆盖,无未匹配分支
// ==========================================
// 两条独立判定路径,禁止合并 (会改变展示计数):
// - classify:        五级细分,服务店铺级 risk_level 与建议文案
// - classify_coarse: 三级简分,服务组级 has_risk 指标
// ==========================================

use crate::domain::types::{CoarseRisk, RiskLevel};

// ==========================================
// RiskEngine - 风险判定引擎
// ==========================================
pub struct RiskEngine {
    // 无状态引擎,不需要注入依赖
}

impl RiskEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 五级细分判定
    ///
    /// 判定顺序 (顺序敏感,不可调换):
    /// 1. 新开店 → NewStore
    /// 2. 任一 YOY 输入缺失 → IncompleteData
    /// 3. 销售下降且退货率上升 → HighRisk
    /// 4. 销售上升且退货率增幅大于销售增幅 → Risk
    /// 5. 销售上升且退货率增幅不超过销售增幅 → Watch
    /// 6. 其他情形 → Normal
    ///
    /// # 参数
    /// - `is_new_shop`: 新开店标志
    /// - `sales_yoy_amount`: 销售同比绝对额
    /// - `sales_yoy_pct`: 销售同比百分比
    /// - `return_rate_yoy_pct`: 退货率同比 (百分点)
    pub fn classify(
        &self,
        is_new_shop: bool,
        sales_yoy_amount: Option<f64>,
        sales_yoy_pct: Option<f64>,
        return_rate_yoy_pct: Option<f64>,
    ) -> RiskLevel {
        if is_new_shop {
            return RiskLevel::NewStore;
        }

        let (amount, pct, return_yoy) =
            match (sales_yoy_amount, sales_yoy_pct, return_rate_yoy_pct) {
                (Some(a), Some(p), Some(r)) => (a, p, r),
                _ => return RiskLevel::IncompleteData,
            };

        // 高风险: 销售下降 且 退货率上升
        if amount < 0.0 && return_yoy > 0.0 {
            return RiskLevel::HighRisk;
        }

        // 风险: 销售上升 但 退货率增幅大于销售增幅
        if pct > 0.0 && return_yoy > 0.0 && return_yoy > pct {
            return RiskLevel::Risk;
        }

        // 观察: 销售上升 退货率也增长但增幅不超过销售增幅
        if pct > 0.0 && return_yoy > 0.0 && return_yoy <= pct {
            return RiskLevel::Watch;
        }

        RiskLevel::Normal
    }

    /// 三级简分判定 (粗粒度路径)
    ///
    /// 规则: 销售下降且退货率上升 → High;
    ///       销售上升且退货率上升 → Watch; 其他 → Normal
    ///
    /// # 参数
    /// - `is_new_shop`: 新开店标志
    /// - `sales_yoy_pct`: 销售同比百分比 (缺失按 0 处理)
    /// - `return_rate_yoy_pct`: 退货率同比百分点 (缺失按 0 处理)
    pub fn classify_coarse(
        &self,
        is_new_shop: bool,
        sales_yoy_pct: f64,
        return_rate_yoy_pct: f64,
    ) -> CoarseRisk {
        if is_new_shop {
            return CoarseRisk::NewStore;
        }
        if sales_yoy_pct < 0.0 && return_rate_yoy_pct > 0.0 {
            return CoarseRisk::High;
        }
        if sales_yoy_pct > 0.0 && return_rate_yoy_pct > 0.0 {
            return CoarseRisk::Watch;
        }
        CoarseRisk::Normal
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_new_shop_short_circuits() {
        let engine = RiskEngine::new();
        // 新开店优先于其他一切判定
        assert_eq!(
            engine.classify(true, Some(-1000.0), Some(-10.0), Some(5.0)),
            RiskLevel::NewStore
        );
        assert_eq!(engine.classify(true, None, None, None), RiskLevel::NewStore);
    }

    #[test]
    fn test_classify_incomplete_data_on_any_null() {
        let engine = RiskEngine::new();
        assert_eq!(
            engine.classify(false, None, Some(10.0), Some(1.0)),
            RiskLevel::IncompleteData
        );
        assert_eq!(
            engine.classify(false, Some(100.0), None, Some(1.0)),
            RiskLevel::IncompleteData
        );
        assert_eq!(
            engine.classify(false, Some(100.0), Some(10.0), None),
            RiskLevel::IncompleteData
        );
    }

    #[test]
    fn test_classify_high_risk() {
        let engine = RiskEngine::new();
        // 销售下降 且 退货率上升
        assert_eq!(
            engine.classify(false, Some(-20000.0), Some(-20.0), Some(4.0)),
            RiskLevel::HighRisk
        );
    }

    #[test]
    fn test_classify_risk_vs_watch_boundary() {
        let engine = RiskEngine::new();
        // 退货率增幅大于销售增幅 → Risk
        assert_eq!(
            engine.classify(false, Some(5000.0), Some(5.0), Some(6.0)),
            RiskLevel::Risk
        );
        // 增幅相等归入 Watch (<= 判定)
        assert_eq!(
            engine.classify(false, Some(5000.0), Some(5.0), Some(5.0)),
            RiskLevel::Watch
        );
        assert_eq!(
            engine.classify(false, Some(10000.0), Some(10.0), Some(2.0)),
            RiskLevel::Watch
        );
    }

    #[test]
    fn test_classify_normal_cases() {
        let engine = RiskEngine::new();
        // 退货率下降
        assert_eq!(
            engine.classify(false, Some(5000.0), Some(5.0), Some(-1.0)),
            RiskLevel::Normal
        );
        // 双降
        assert_eq!(
            engine.classify(false, Some(-5000.0), Some(-5.0), Some(-1.0)),
            RiskLevel::Normal
        );
        // 全部为零
        assert_eq!(
            engine.classify(false, Some(0.0), Some(0.0), Some(0.0)),
            RiskLevel::Normal
        );
    }

    #[test]
    fn test_classify_coarse_paths() {
        let engine = RiskEngine::new();
        assert_eq!(
            engine.classify_coarse(true, 0.0, 0.0),
            CoarseRisk::NewStore
        );
        assert_eq!(
            engine.classify_coarse(false, -10.0, 2.0),
            CoarseRisk::High
        );
        assert_eq!(engine.classify_coarse(false, 10.0, 2.0), CoarseRisk::Watch);
        assert_eq!(
            engine.classify_coarse(false, 10.0, -2.0),
            CoarseRisk::Normal
        );
        assert_eq!(
            engine.classify_coarse(false, -10.0, -2.0),
            CoarseRisk::Normal
        );
    }

    #[test]
    fn test_two_paths_disagree_by_design() {
        // 细分路径会把"退货率增幅超销售增幅"判为 Risk,
        // 粗分路径只有 Watch,两者不可互相替代
        let engine = RiskEngine::new();
        assert_eq!(
            engine.classify(false, Some(5000.0), Some(5.0), Some(6.0)),
            RiskLevel::Risk
        );
        assert_eq!(engine.classify_coarse(false, 5.0, 6.0), CoarseRisk::Watch);
    }
}
