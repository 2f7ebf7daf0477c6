// ==========================================
// EC退货率分析系统 - 品牌映射配置
// ==========================================
// 职责: 店铺名称关键字 → 品牌的有序映射表
// 红线: 映射表作为显式配置对象注入 Normalizer,
//       不使用进程级全局可变状态
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 品牌规则 (BrandRule)
// ==========================================
/// 单条品牌规则: 店铺名称(大写)包含任一关键字即命中该品牌
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRule {
    /// 品牌名
    pub brand: String,
    /// 关键字列表 (匹配前统一转大写)
    pub keywords: Vec<String>,
}

// ==========================================
// 品牌映射表 (BrandMapping)
// ==========================================
/// 有序品牌映射表,先匹配的规则优先
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandMapping {
    rules: Vec<BrandRule>,
}

impl BrandMapping {
    /// 从规则列表构造 (保持传入顺序)
    pub fn new(rules: Vec<BrandRule>) -> Self {
        Self { rules }
    }

    /// 解析品牌: 大写店铺名称逐条测试关键字包含,首个命中的品牌生效
    ///
    /// # 返回
    /// - Some(brand): 命中品牌
    /// - None: 无规则命中,该行应被剔除 (静默跳过,仅计数)
    pub fn resolve(&self, shop_name: &str) -> Option<&str> {
        let shop_upper = shop_name.to_uppercase();
        for rule in &self.rules {
            if rule
                .keywords
                .iter()
                .any(|kw| shop_upper.contains(&kw.to_uppercase()))
            {
                return Some(&rule.brand);
            }
        }
        None
    }

    /// 规则条数
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for BrandMapping {
    /// 默认映射表 (已剔除经营支援类 SP/DV 店铺)
    fn default() -> Self {
        Self::new(vec![
            BrandRule {
                brand: "MLB".to_string(),
                keywords: vec!["MLB".to_string(), "MM".to_string(), "ML ".to_string()],
            },
            BrandRule {
                brand: "MLB KIDS".to_string(),
                keywords: vec!["MK".to_string(), "MLBKIDS".to_string()],
            },
            BrandRule {
                brand: "Discovery".to_string(),
                keywords: vec!["DX".to_string()],
            },
        ])
    }
}
