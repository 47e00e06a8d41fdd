// ==========================================
// 航空餐车配餐系统 - 原始表单快照
// ==========================================
// 用途: 界面层采集的原始字符串输入, 由校验器解析为 FlightManifest
// 约定: 空字符串按 0 计算且不报错
// ==========================================

use crate::config::AllocationConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestForm {
    pub passengers: String,
    pub total_special_meals: String,
    pub num_carts: String,
    pub num_general_options: String,
    pub option_names: Vec<String>,
    pub option_quantities: Vec<String>,
    /// 键为 1 基餐车序号
    pub special_meals_per_cart_input: BTreeMap<u32, String>,
}

impl ManifestForm {
    /// 清空后的表单 (默认选项数与默认选项名来自配置)
    pub fn with_defaults(config: &AllocationConfig) -> Self {
        Self {
            passengers: String::new(),
            total_special_meals: String::new(),
            num_carts: String::new(),
            num_general_options: config.default_general_options.to_string(),
            option_names: config.default_option_names.clone(),
            option_quantities: vec![String::new(); config.default_option_names.len()],
            special_meals_per_cart_input: BTreeMap::new(),
        }
    }

    /// 指定选项的原始名称 (缺失返回空串)
    pub fn option_name(&self, index: usize) -> &str {
        self.option_names.get(index).map(String::as_str).unwrap_or("")
    }

    /// 指定选项的原始数量 (缺失返回空串)
    pub fn option_quantity(&self, index: usize) -> &str {
        self.option_quantities
            .get(index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// 设置某一车的特殊餐输入
    pub fn set_cart_special(&mut self, cart_index: u32, value: impl Into<String>) {
        self.special_meals_per_cart_input
            .insert(cart_index, value.into());
    }
}

impl Default for ManifestForm {
    fn default() -> Self {
        Self::with_defaults(&AllocationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_form() {
        let form = ManifestForm::default();
        assert_eq!(form.num_general_options, "3");
        assert_eq!(form.option_names, vec!["Chicken", "Beef", "Vegetarian"]);
        assert_eq!(form.option_quantities, vec!["", "", ""]);
        assert!(form.special_meals_per_cart_input.is_empty());
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let form: ManifestForm =
            serde_json::from_str(r#"{"passengers":"120","specialMealsPerCartInput":{"2":"4"}}"#)
                .unwrap();
        assert_eq!(form.passengers, "120");
        assert_eq!(form.num_general_options, "3");
        assert_eq!(form.special_meals_per_cart_input.get(&2).map(String::as_str), Some("4"));
        assert_eq!(form.option_quantity(5), "");
    }
}
