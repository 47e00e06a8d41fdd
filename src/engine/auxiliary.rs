// ==========================================
// 航空餐车配餐系统 - 辅助量计算
// ==========================================
// 职责: 普通餐总量、单车基础容量、加一车数、各选项占比
// 红线: 无状态, 纯函数
// ==========================================

use crate::domain::manifest::FlightManifest;
use crate::domain::types::OptionSlot;
use serde::{Deserialize, Serialize};

/// 辅助量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuxiliaryValues {
    pub total_general: u64,
    pub base_capacity_per_cart: u64,
    /// 从 1 号车起依次获得 1 份额外基础容量的车数
    pub remainder_carts: u64,
    /// 各选项占比, 作为比例分配权重 (取整后不保证合计为 1)
    pub option_shares: Vec<f64>,
}

impl AuxiliaryValues {
    /// 指定选项位占比, 未配置返回 0
    pub fn share(&self, slot: OptionSlot) -> f64 {
        self.option_shares.get(slot.index()).copied().unwrap_or(0.0)
    }
}

// ==========================================
// AuxiliaryCalculator
// ==========================================
pub struct AuxiliaryCalculator;

impl AuxiliaryCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate(&self, manifest: &FlightManifest) -> AuxiliaryValues {
        let total_general: u64 = manifest
            .slots()
            .map(|s| u64::from(manifest.option_quantity(s)))
            .sum();

        let num_carts = u64::from(manifest.num_carts);
        let base_capacity_per_cart = if num_carts == 0 {
            0
        } else {
            total_general / num_carts
        };
        let remainder_carts = total_general - base_capacity_per_cart * num_carts;

        let option_shares = manifest
            .slots()
            .map(|slot| {
                if total_general == 0 {
                    0.0
                } else {
                    f64::from(manifest.option_quantity(slot)) / total_general as f64
                }
            })
            .collect();

        AuxiliaryValues {
            total_general,
            base_capacity_per_cart,
            remainder_carts,
            option_shares,
        }
    }
}

impl Default for AuxiliaryCalculator {
    fn default() -> Self {
        Self::new()
    }
}
