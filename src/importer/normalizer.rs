// ==========================================
// EC退货率分析系统 - 记录标准化器 (Record Normalizer)
// ==========================================
// 职责: RawShopRow → CanonicalRecord (每行按年度拆分,至多两条)
// 规则: 品牌无法映射的行静默剔除,仅计入诊断计数;
//       单元格清洗失败降级为缺失值,本层永不报错
// ==========================================

use crate::config::{BrandMapping, CompareYears};
use crate::domain::record::{CanonicalRecord, RawShopRow};
use crate::importer::data_cleaner::DataCleaner;
use tracing::debug;

// ==========================================
// 标准化结果 (NormalizeOutcome)
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOutcome {
    /// 标准记录集
    pub records: Vec<CanonicalRecord>,
    /// 因品牌未映射被剔除的行数 (诊断用)
    pub skipped_unmapped_brand: usize,
}

// ==========================================
// RecordNormalizer - 记录标准化器
// ==========================================
pub struct RecordNormalizer {
    brand_mapping: BrandMapping,
    years: CompareYears,
    cleaner: DataCleaner,
}

impl RecordNormalizer {
    /// 构造函数: 品牌映射表作为显式配置注入
    pub fn new(brand_mapping: BrandMapping, years: CompareYears) -> Self {
        Self {
            brand_mapping,
            years,
            cleaner: DataCleaner,
        }
    }

    /// 标准化整批原始行
    pub fn normalize(&self, rows: &[RawShopRow]) -> NormalizeOutcome {
        let mut records = Vec::new();
        let mut skipped_unmapped_brand = 0usize;

        for row in rows {
            // 品牌映射: 无命中则剔除整行
            let brand = match self.brand_mapping.resolve(&row.shop_name) {
                Some(b) => b.to_string(),
                None => {
                    skipped_unmapped_brand += 1;
                    debug!(shop_name = %row.shop_name, "品牌未映射,剔除该行");
                    continue;
                }
            };

            // 按年度拆分: 该年度任一单元格存在即产出一条标准记录
            self.push_year_record(&mut records, row, &brand, self.years.current, true);
            self.push_year_record(&mut records, row, &brand, self.years.previous, false);
        }

        NormalizeOutcome {
            records,
            skipped_unmapped_brand,
        }
    }

    /// 产出单年度标准记录
    fn push_year_record(
        &self,
        records: &mut Vec<CanonicalRecord>,
        row: &RawShopRow,
        brand: &str,
        year: i32,
        current: bool,
    ) {
        let (sales_cell, rate_cell) = if current {
            (&row.sales_current, &row.return_rate_current)
        } else {
            (&row.sales_previous, &row.return_rate_previous)
        };

        // 两个单元格均不存在时,该年度无记录
        if sales_cell.is_none() && rate_cell.is_none() {
            return;
        }

        let net_sales = self.cleaner.clean_number(sales_cell.as_deref());
        let return_rate = self.cleaner.clean_percentage(rate_cell.as_deref());

        records.push(CanonicalRecord {
            channel: self.cleaner.clean_text(&row.channel, false),
            shop_name: self.cleaner.clean_text(&row.shop_name, false),
            brand: brand.to_string(),
            year,
            net_sales,
            return_rate,
        });
    }
}
