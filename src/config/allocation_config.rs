// ==========================================
// 航空餐车配餐系统 - 分配参数配置
// ==========================================
// 职责: 全局常量的命名化与覆写 (餐车容量、车数上限、旅客上限等)
// ==========================================

use crate::config::ConfigError;
use crate::domain::types::{MAX_GENERAL_OPTIONS, MIN_GENERAL_OPTIONS};
use serde::{Deserialize, Serialize};

/// 默认值
pub mod defaults {
    /// 单车最大容量
    pub const MAX_CART_CAPACITY: u32 = 40;
    /// 餐车数量上限
    pub const MAX_NUMBER_OF_CARTS: u32 = 12;
    /// 旅客数量上限
    pub const MAX_PASSENGERS: u32 = 600;
    /// 默认普通餐选项数
    pub const DEFAULT_GENERAL_OPTIONS: u32 = 3;
    /// 再分配迭代上限系数: 容量 × 车数 × 系数
    pub const REDISTRIBUTION_ATTEMPT_FACTOR: u32 = 3;
    /// 默认选项名
    pub const DEFAULT_OPTION_NAMES: [&str; 3] = ["Chicken", "Beef", "Vegetarian"];
}

// ==========================================
// AllocationConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllocationConfig {
    pub max_cart_capacity: u32,
    pub max_number_of_carts: u32,
    pub max_passengers: u32,
    pub default_general_options: u32,
    pub redistribution_attempt_factor: u32,
    pub default_option_names: Vec<String>,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            max_cart_capacity: defaults::MAX_CART_CAPACITY,
            max_number_of_carts: defaults::MAX_NUMBER_OF_CARTS,
            max_passengers: defaults::MAX_PASSENGERS,
            default_general_options: defaults::DEFAULT_GENERAL_OPTIONS,
            redistribution_attempt_factor: defaults::REDISTRIBUTION_ATTEMPT_FACTOR,
            default_option_names: defaults::DEFAULT_OPTION_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AllocationConfig {
    /// 再分配迭代上限
    pub fn redistribution_budget(&self, num_carts: usize) -> u64 {
        u64::from(self.max_cart_capacity)
            * num_carts as u64
            * u64::from(self.redistribution_attempt_factor)
    }

    /// 配置自检
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cart_capacity == 0 {
            return Err(ConfigError::Invalid(
                "maxCartCapacity 必须大于 0".to_string(),
            ));
        }
        if self.redistribution_attempt_factor == 0 {
            return Err(ConfigError::Invalid(
                "redistributionAttemptFactor 必须大于 0".to_string(),
            ));
        }

        let count = self.default_general_options as usize;
        if !(MIN_GENERAL_OPTIONS..=MAX_GENERAL_OPTIONS).contains(&count) {
            return Err(ConfigError::Invalid(format!(
                "defaultGeneralOptions 必须为 {} 或 {}, 实际为 {}",
                MIN_GENERAL_OPTIONS, MAX_GENERAL_OPTIONS, count
            )));
        }
        if self.default_option_names.len() != MAX_GENERAL_OPTIONS {
            return Err(ConfigError::Invalid(format!(
                "defaultOptionNames 必须包含 {} 个名称",
                MAX_GENERAL_OPTIONS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AllocationConfig::default();
        assert_eq!(config.max_cart_capacity, 40);
        assert_eq!(config.max_number_of_carts, 12);
        assert_eq!(config.max_passengers, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_redistribution_budget() {
        let config = AllocationConfig::default();
        assert_eq!(config.redistribution_budget(4), 40 * 4 * 3);
        assert_eq!(config.redistribution_budget(0), 0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AllocationConfig = serde_json::from_str(r#"{"maxCartCapacity":32}"#).unwrap();
        assert_eq!(config.max_cart_capacity, 32);
        assert_eq!(config.max_number_of_carts, 12);
    }

    #[test]
    fn test_invalid_config() {
        let config = AllocationConfig {
            default_general_options: 4,
            ..AllocationConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = AllocationConfig {
            max_cart_capacity: 0,
            ..AllocationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
