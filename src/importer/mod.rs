// ==========================================
// EC退货率分析系统 - 导入层
// ==========================================
// 职责: 外部快照文件 → 标准记录集
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod normalizer;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use normalizer::{NormalizeOutcome, RecordNormalizer};
