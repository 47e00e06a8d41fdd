// ==========================================
// 航空餐车配餐系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型, 转换配置/序列化错误为可读消息
// 说明: 输入校验违规不走错误通道, 由 ValidationReport 逐字段上报
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 当前结果不允许该操作 (如对未通过校验的计算执行再分配)
    #[error("无效的状态: {0}")]
    InvalidState(String),

    // ==========================================
    // 配置与序列化错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("序列化失败: {0}")]
    Serialization(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: ApiError = ConfigError::Invalid("maxCartCapacity 必须大于 0".to_string()).into();
        match err {
            ApiError::ConfigError(msg) => assert!(msg.contains("maxCartCapacity")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ApiError = serde_err.into();
        assert!(matches!(err, ApiError::Serialization(_)));
        assert!(err.to_string().starts_with("序列化失败"));
    }
}
