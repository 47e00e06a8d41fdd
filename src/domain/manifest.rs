// ==========================================
// 航空餐车配餐系统 - 航班配餐输入模型
// ==========================================
// 用途: 校验通过后的数值化输入快照 (每次计算重新构造)
// ==========================================

use crate::domain::types::OptionSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// MealOption - 普通餐选项
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealOption {
    pub name: String,  // 显示名称 (非主键)
    pub quantity: u32, // 供应数量
}

impl MealOption {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

// ==========================================
// FlightManifest - 航班配餐清单
// ==========================================
// 红线: total_special_meals <= total_passengers (由校验器保证)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightManifest {
    pub total_passengers: u32,
    pub total_special_meals: u32,
    pub num_carts: u32,
    pub general_options: Vec<MealOption>, // 2 或 3 个, 顺序即优先级
}

impl FlightManifest {
    /// 已配置的普通餐选项数
    pub fn option_count(&self) -> usize {
        self.general_options.len()
    }

    /// 已配置的选项位
    pub fn slots(&self) -> impl Iterator<Item = OptionSlot> {
        OptionSlot::configured(self.option_count())
    }

    /// 指定选项位的供应数量 (未配置的选项位视为 0)
    pub fn option_quantity(&self, slot: OptionSlot) -> u32 {
        self.general_options
            .get(slot.index())
            .map(|o| o.quantity)
            .unwrap_or(0)
    }

    /// 选项显示标签, 名称为空时回退为 "Option N"
    pub fn option_label(&self, slot: OptionSlot) -> String {
        match self.general_options.get(slot.index()) {
            Some(option) if !option.name.trim().is_empty() => option.name.clone(),
            _ => format!("Option {}", slot.index() + 1),
        }
    }

    /// 全部选项的显示标签
    pub fn option_labels(&self) -> Vec<String> {
        self.slots().map(|slot| self.option_label(slot)).collect()
    }
}

// ==========================================
// CartSpecialInput - 各餐车人工指定的特殊餐数量
// ==========================================
// 键为 1 基餐车序号; 未填写的餐车按 0 处理
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSpecialInput {
    per_cart: BTreeMap<u32, u32>,
}

impl CartSpecialInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由 (餐车序号, 数量) 列表构造
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        Self {
            per_cart: pairs.into_iter().collect(),
        }
    }

    pub fn set(&mut self, cart_index: u32, count: u32) {
        self.per_cart.insert(cart_index, count);
    }

    /// 指定餐车的特殊餐数量, 未填写返回 0
    pub fn get(&self, cart_index: u32) -> u32 {
        self.per_cart.get(&cart_index).copied().unwrap_or(0)
    }

    /// 1..=num_carts 范围内的特殊餐合计 (范围外的残留输入不计入)
    pub fn sum_for_carts(&self, num_carts: u32) -> u64 {
        if num_carts == 0 {
            return 0;
        }
        self.per_cart
            .range(1..=num_carts)
            .map(|(_, count)| u64::from(*count))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.per_cart.iter().map(|(k, v)| (*k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.per_cart.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(names: &[&str]) -> FlightManifest {
        FlightManifest {
            total_passengers: 100,
            total_special_meals: 0,
            num_carts: 2,
            general_options: names.iter().map(|n| MealOption::new(*n, 10)).collect(),
        }
    }

    #[test]
    fn test_option_label_fallback() {
        let m = manifest(&["Chicken", "  ", "Vegetarian"]);
        assert_eq!(m.option_label(OptionSlot::First), "Chicken");
        assert_eq!(m.option_label(OptionSlot::Second), "Option 2");
        assert_eq!(m.option_labels().len(), 3);
    }

    #[test]
    fn test_unconfigured_slot_quantity_is_zero() {
        let m = manifest(&["Chicken", "Beef"]);
        assert_eq!(m.option_quantity(OptionSlot::Third), 0);
        assert_eq!(m.slots().count(), 2);
    }

    #[test]
    fn test_cart_special_sum_ignores_out_of_range() {
        let specials = CartSpecialInput::from_pairs([(1, 3), (2, 4), (5, 100)]);
        assert_eq!(specials.sum_for_carts(2), 7);
        assert_eq!(specials.sum_for_carts(0), 0);
        assert_eq!(specials.get(3), 0);
    }
}
