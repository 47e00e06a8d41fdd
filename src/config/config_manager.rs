// ==========================================
// 航空餐车配餐系统 - 配置管理器
// ==========================================
// 职责: 配置加载与查询
// 来源优先级: 显式路径 > 环境变量 > 用户配置目录 > 内置默认值
// ==========================================

use crate::config::allocation_config::AllocationConfig;
use crate::config::ConfigError;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV_VAR: &str = "MEAL_CART_PLANNER_CONFIG";

/// 用户配置目录下的子目录名
const CONFIG_DIR_NAME: &str = "meal-cart-planner";

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: Arc<AllocationConfig>,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用内置默认值
    pub fn with_defaults() -> Self {
        Self {
            config: Arc::new(AllocationConfig::default()),
            source: None,
        }
    }

    /// 由已有配置构造 (会先做配置自检)
    pub fn from_config(config: AllocationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            source: None,
        })
    }

    /// 按优先级加载配置
    ///
    /// # 参数
    /// - explicit_path: 显式指定的配置文件; 指定后文件必须存在
    ///
    /// # 返回
    /// - Ok(ConfigManager): 加载成功 (未找到任何文件时使用默认值)
    /// - Err(ConfigError): 读取/解析/自检失败
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("未找到配置文件, 使用内置默认值");
                Ok(Self::with_defaults())
            }
        }
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: AllocationConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        config.validate()?;

        info!(path = %path.display(), "配置文件加载成功");
        Ok(Self {
            config: Arc::new(config),
            source: Some(path.to_path_buf()),
        })
    }

    /// 当前配置 (共享只读)
    pub fn config(&self) -> Arc<AllocationConfig> {
        Arc::clone(&self.config)
    }

    /// 配置来源文件 (默认值时为 None)
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 配置快照 (JSON)
    ///
    /// # 用途
    /// - 随计算结果记录, 便于复核时确认所用参数
    pub fn config_snapshot(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self.config.as_ref()).map_err(|source| ConfigError::Parse {
            path: "<snapshot>".to_string(),
            source,
        })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// 用户配置目录下的默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// 解析配置文件路径
///
/// 显式路径与环境变量指定的路径直接返回 (由读取时报告不存在);
/// 默认目录下的文件仅在存在时返回
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Ok(value) = env::var(CONFIG_ENV_VAR) {
        let value = value.trim();
        if !value.is_empty() {
            return Some(PathBuf::from(value));
        }
    }

    default_config_path().filter(|path| path.is_file())
}
