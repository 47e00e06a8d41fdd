// ==========================================
// 航空餐车配餐系统 - 配置层
// ==========================================
// 职责: 分配参数的默认值与文件覆写
// 存储: 可选 JSON 配置文件 (无持久化写入)
// ==========================================

pub mod allocation_config;
pub mod config_manager;

use thiserror::Error;

// 重导出核心配置
pub use allocation_config::{defaults, AllocationConfig};
pub use config_manager::{default_config_path, resolve_config_path, ConfigManager, CONFIG_ENV_VAR};

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: path={path}, {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: path={path}, {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置无效: {0}")]
    Invalid(String),
}
