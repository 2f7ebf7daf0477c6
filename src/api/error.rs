// ==========================================
// EC退货率分析系统 - API层错误类型
// ==========================================
// 职责: 对外接口错误,转换导入层错误为用户友好消息
// 注意: 未知渠道键查询返回 Ok(None),不是错误
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("结果导出失败: {0}")]
    ExportError(String),

    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 从 ImportError 转换
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

// 从 serde_json::Error 转换
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
