// ==========================================
// 航空餐车配餐系统 - 分配结果领域模型
// ==========================================
// 红线: total = special + Σ general, 且任何时刻 total <= 餐车容量
// ==========================================

use crate::domain::types::{OptionSlot, SPECIALS_LABEL};
use serde::{Deserialize, Serialize};

// ==========================================
// CartAllocation - 单车分配结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAllocation {
    pub cart_index: u32,             // 1 基餐车序号
    pub special: u32,                // 特殊餐
    pub general_by_option: Vec<u32>, // 各普通餐选项数量 (长度 2 或 3)
    pub total: u32,                  // 全车合计
}

impl CartAllocation {
    /// 构造并计算合计
    pub fn new(cart_index: u32, special: u32, general_by_option: Vec<u32>) -> Self {
        let total = special + general_by_option.iter().sum::<u32>();
        Self {
            cart_index,
            special,
            general_by_option,
            total,
        }
    }

    /// 显示名称 "Cart N"
    pub fn cart_name(&self) -> String {
        format!("Cart {}", self.cart_index)
    }

    /// 普通餐合计
    pub fn general_total(&self) -> u32 {
        self.general_by_option.iter().sum()
    }

    /// 指定选项位数量 (未配置返回 0)
    pub fn option_quantity(&self, slot: OptionSlot) -> u32 {
        self.general_by_option
            .get(slot.index())
            .copied()
            .unwrap_or(0)
    }

    /// 剩余容量
    pub fn remaining_capacity(&self, max_cart_capacity: u32) -> u32 {
        max_cart_capacity.saturating_sub(self.total)
    }

    /// 向指定选项位追加一份, 同步更新合计
    ///
    /// 选项位未配置时返回 false 且不做修改
    pub fn add_one(&mut self, slot: OptionSlot) -> bool {
        match self.general_by_option.get_mut(slot.index()) {
            Some(qty) => {
                *qty += 1;
                self.total += 1;
                true
            }
            None => false,
        }
    }
}

// ==========================================
// ExcessEntry - 余量条目
// ==========================================
// quantity 为有符号数: 负数表示短缺 (上游合计不一致), 只上报不修正
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcessEntry {
    pub option_label: String,
    pub slot: Option<OptionSlot>, // None = 特殊餐
    pub quantity: i64,
}

impl ExcessEntry {
    pub fn specials(quantity: i64) -> Self {
        Self {
            option_label: SPECIALS_LABEL.to_string(),
            slot: None,
            quantity,
        }
    }

    pub fn general(slot: OptionSlot, label: impl Into<String>, quantity: i64) -> Self {
        Self {
            option_label: label.into(),
            slot: Some(slot),
            quantity,
        }
    }

    pub fn is_special(&self) -> bool {
        self.slot.is_none()
    }

    /// 是否为可再分配的普通餐盈余
    pub fn is_general_surplus(&self) -> bool {
        self.slot.is_some() && self.quantity > 0
    }
}

// ==========================================
// ShortageReport - 餐食短缺提示
// ==========================================
// 仅为提示信息, 不阻断任何操作
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortageReport {
    pub is_short: bool,
    pub missing: u64,          // 缺少份数
    pub coverage_percent: f64, // 覆盖率 (%)
    pub required: u64,         // 需求 = 旅客数
    pub available: u64,        // 可用 = 普通餐 + 特殊餐
}

// ==========================================
// 再分配结果
// ==========================================

/// 单个类别的再分配停止原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedistributionStop {
    Completed,       // 余量已全部放入
    NoCapacity,      // 餐车均已满
    BudgetExhausted, // 达到迭代上限, 剩余量保留
}

/// 单个类别的再分配统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRedistribution {
    pub slot: OptionSlot,
    pub option_label: String,
    pub initial_excess: i64,
    pub placed: i64,
    pub remaining: i64,
    pub attempts: u32,
    pub stop: RedistributionStop,
}

/// 再分配输出; 初始分配结果不在此修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedistributionResult {
    pub adjusted_allocation: Vec<CartAllocation>,
    pub updated_excess: Vec<ExcessEntry>,
    pub stats: Vec<CategoryRedistribution>,
}

impl RedistributionResult {
    /// 本次共放入的份数
    pub fn total_placed(&self) -> i64 {
        self.stats.iter().map(|s| s.placed).sum()
    }
}
