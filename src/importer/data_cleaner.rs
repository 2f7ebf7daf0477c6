// ==========================================
// EC退货率分析系统 - 数据清洗器
// ==========================================
// 职责: TRIM / NULL 标准化 / 数值与百分比清洗
// 规则: 占位符 "-" 与空白一律视为缺失 (None),绝不折算为 0;
//       清洗后仍非数字的余串同样降级为缺失,不报错
// ==========================================

pub struct DataCleaner;

impl DataCleaner {
    /// 文本清洗 (TRIM,可选 UPPER)
    pub fn clean_text(&self, value: &str, uppercase: bool) -> String {
        let trimmed = value.trim();
        if uppercase {
            trimmed.to_uppercase()
        } else {
            trimmed.to_string()
        }
    }

    /// NULL 标准化: 空白串归一为 None
    pub fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 判断是否为缺失占位符 ("-" 或空白)
    fn is_placeholder(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty() || trimmed == "-"
    }

    /// 清洗数值单元格: 去除千分位逗号与空格后解析
    ///
    /// # 返回
    /// - Some(f64): 有效数值
    /// - None: 占位符/空白/无法解析
    pub fn clean_number(&self, value: Option<&str>) -> Option<f64> {
        let raw = value?;
        if Self::is_placeholder(raw) {
            return None;
        }
        let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
        if cleaned.is_empty() || cleaned == "-" {
            return None;
        }
        cleaned.parse::<f64>().ok()
    }

    /// 清洗百分比单元格: 去除 "%" 后解析并除以 100 存为小数
    ///
    /// # 返回
    /// - Some(f64): 小数形式退货率 (如 "5%" -> 0.05)
    /// - None: 占位符/空白/无法解析
    pub fn clean_percentage(&self, value: Option<&str>) -> Option<f64> {
        let raw = value?;
        if Self::is_placeholder(raw) {
            return None;
        }
        let cleaned = raw.replace('%', "");
        self.clean_number(Some(&cleaned)).map(|v| v / 100.0)
    }
}
