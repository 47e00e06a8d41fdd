// ==========================================
// 航空餐车配餐系统 - 余量计算
// ==========================================
// 余量 = 供应量 − 已装车量 (有符号)
// 负数表示短缺, 只上报不截断
// ==========================================

use crate::domain::allocation::{CartAllocation, ExcessEntry};
use crate::domain::manifest::FlightManifest;
use tracing::warn;

pub struct ExcessCalculator;

impl ExcessCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 计算特殊餐与各普通餐选项的余量
    ///
    /// # 返回
    /// 第一条为 "Specials", 其后按选项顺序
    pub fn calculate(
        &self,
        manifest: &FlightManifest,
        allocation: &[CartAllocation],
    ) -> Vec<ExcessEntry> {
        let assigned_special: i64 = allocation.iter().map(|c| i64::from(c.special)).sum();

        let mut entries = Vec::with_capacity(manifest.option_count() + 1);
        entries.push(ExcessEntry::specials(
            i64::from(manifest.total_special_meals) - assigned_special,
        ));

        for slot in manifest.slots() {
            let assigned: i64 = allocation
                .iter()
                .map(|c| i64::from(c.option_quantity(slot)))
                .sum();
            entries.push(ExcessEntry::general(
                slot,
                manifest.option_label(slot),
                i64::from(manifest.option_quantity(slot)) - assigned,
            ));
        }

        for entry in entries.iter().filter(|e| e.quantity < 0) {
            warn!(
                option = %entry.option_label,
                quantity = entry.quantity,
                "余量为负: 已装车量超过供应量"
            );
        }

        entries
    }
}

impl Default for ExcessCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manifest::MealOption;
    use crate::domain::types::{OptionSlot, SPECIALS_LABEL};

    fn manifest() -> FlightManifest {
        FlightManifest {
            total_passengers: 100,
            total_special_meals: 6,
            num_carts: 2,
            general_options: vec![MealOption::new("Chicken", 50), MealOption::new("Beef", 10)],
        }
    }

    #[test]
    fn test_excess_per_category() {
        let allocation = vec![
            CartAllocation::new(1, 2, vec![20, 5]),
            CartAllocation::new(2, 1, vec![20, 5]),
        ];
        let excess = ExcessCalculator::new().calculate(&manifest(), &allocation);

        assert_eq!(excess.len(), 3);
        assert_eq!(excess[0].option_label, SPECIALS_LABEL);
        assert_eq!(excess[0].quantity, 3);
        assert_eq!(excess[1].slot, Some(OptionSlot::First));
        assert_eq!(excess[1].option_label, "Chicken");
        assert_eq!(excess[1].quantity, 10);
        assert_eq!(excess[2].quantity, 0);
    }

    #[test]
    fn test_deficit_is_reported_not_clamped() {
        let allocation = vec![CartAllocation::new(1, 0, vec![10, 15])];
        let excess = ExcessCalculator::new().calculate(&manifest(), &allocation);
        assert_eq!(excess[2].quantity, -5);
    }

    #[test]
    fn test_empty_allocation_keeps_all_supply() {
        let excess = ExcessCalculator::new().calculate(&manifest(), &[]);
        let quantities: Vec<i64> = excess.iter().map(|e| e.quantity).collect();
        assert_eq!(quantities, vec![6, 50, 10]);
    }
}
