// ==========================================
// EC退货率分析系统 - 新开店判定引擎
// ==========================================
// 口径 (唯一判定路径): 上年记录缺失,或上年净销售缺失/为 0,
// 即判定为新开店。上年销售为显式 0 的店铺同样按新开店处理,
// 不进入除零分支。
// 名称集合差的老口径仅保留为诊断辅助,不参与任何下游判定。
// ==========================================

use crate::domain::record::CanonicalRecord;
use std::collections::BTreeSet;

pub struct NewShopDetector;

impl NewShopDetector {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    /// 新开店判定 (唯一口径)
    ///
    /// # 参数
    /// - `previous`: 该店铺的上年标准记录 (可能不存在)
    ///
    /// # 返回
    /// true 当且仅当上年记录缺失或上年净销售缺失/为 0
    pub fn is_new_shop(&self, previous: Option<&CanonicalRecord>) -> bool {
        match previous {
            None => true,
            Some(rec) => match rec.net_sales {
                None => true,
                Some(sales) => sales == 0.0,
            },
        }
    }

    /// 诊断辅助: 本年出现而上年未出现的店铺名称集合
    ///
    /// 在良构输入上与 is_new_shop 口径一致,仅用于导入诊断对账
    pub fn shops_without_previous_year(
        &self,
        records: &[CanonicalRecord],
        current_year: i32,
        previous_year: i32,
    ) -> BTreeSet<String> {
        let current: BTreeSet<&str> = records
            .iter()
            .filter(|r| r.year == current_year)
            .map(|r| r.shop_name.as_str())
            .collect();
        let previous: BTreeSet<&str> = records
            .iter()
            .filter(|r| r.year == previous_year)
            .map(|r| r.shop_name.as_str())
            .collect();

        current
            .difference(&previous)
            .map(|s| s.to_string())
            .collect()
    }
}

impl Default for NewShopDetector {
    fn default() -> Self {
        Self::new()
    }
}
