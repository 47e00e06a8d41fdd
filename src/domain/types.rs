// ==========================================
// 航空餐车配餐系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 余量表中特殊餐的固定标签
pub const SPECIALS_LABEL: &str = "Specials";

/// 普通餐选项数量下限
pub const MIN_GENERAL_OPTIONS: usize = 2;

/// 普通餐选项数量上限
pub const MAX_GENERAL_OPTIONS: usize = 3;

// ==========================================
// 普通餐选项位 (Option Slot)
// ==========================================
// 红线: 分配身份按位置, 不按名称 (名称只是显示标签, 允许重复)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionSlot {
    First,
    Second,
    Third,
}

impl OptionSlot {
    /// 全部选项位, 按固定处理顺序
    pub const ALL: [OptionSlot; MAX_GENERAL_OPTIONS] =
        [OptionSlot::First, OptionSlot::Second, OptionSlot::Third];

    /// 0 基下标
    pub fn index(self) -> usize {
        match self {
            OptionSlot::First => 0,
            OptionSlot::Second => 1,
            OptionSlot::Third => 2,
        }
    }

    /// 由 0 基下标构造
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 前 count 个选项位 (count 超过 3 时截断)
    pub fn configured(count: usize) -> impl Iterator<Item = OptionSlot> {
        Self::ALL.into_iter().take(count.min(MAX_GENERAL_OPTIONS))
    }
}

impl fmt::Display for OptionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "option{}", self.index() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_index_roundtrip() {
        for (i, slot) in OptionSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
            assert_eq!(OptionSlot::from_index(i), Some(*slot));
        }
        assert_eq!(OptionSlot::from_index(3), None);
    }

    #[test]
    fn test_configured_slots() {
        let two: Vec<_> = OptionSlot::configured(2).collect();
        assert_eq!(two, vec![OptionSlot::First, OptionSlot::Second]);

        let many: Vec<_> = OptionSlot::configured(7).collect();
        assert_eq!(many.len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(OptionSlot::Third.to_string(), "option3");
    }
}
