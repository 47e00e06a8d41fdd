// ==========================================
// 航空餐车配餐系统 - 余量再分配引擎
// ==========================================
// 职责: 将普通餐正余量填入餐车剩余容量
// 输入: 初始分配 (只读) + 余量表
// 输出: 调整后分配 (工作副本) + 更新后余量表
// ==========================================
// 策略: 每轮先"拉平"(给该类别数量最少且有空位的车各加 1),
//       拉平无进展时"轮转"(给所有有空位的车各加 1);
//       直到余量为 0 / 无空位 / 达到迭代上限
// 红线: 不修改初始分配; 不减少任何车的合计; 任何车合计不超过容量
// ==========================================

use crate::config::AllocationConfig;
use crate::domain::allocation::{
    CartAllocation, CategoryRedistribution, ExcessEntry, RedistributionResult, RedistributionStop,
};
use crate::domain::types::OptionSlot;
use std::sync::Arc;
use tracing::{debug, info, instrument};

// ==========================================
// Redistributor - 余量再分配引擎
// ==========================================
pub struct Redistributor {
    config: Arc<AllocationConfig>,
}

impl Redistributor {
    pub fn new(config: Arc<AllocationConfig>) -> Self {
        Self { config }
    }

    /// 执行再分配
    ///
    /// 各类别按选项顺序依次处理, 共享同一工作副本:
    /// 前一类别占用的空位对后一类别不可用
    #[instrument(skip_all, fields(carts = initial.len()))]
    pub fn redistribute(
        &self,
        initial: &[CartAllocation],
        excess: &[ExcessEntry],
    ) -> RedistributionResult {
        let mut working = initial.to_vec();
        let mut updated_excess = excess.to_vec();
        let mut stats = Vec::new();

        for entry in updated_excess.iter_mut() {
            let slot = match entry.slot {
                Some(slot) if entry.quantity > 0 => slot,
                _ => continue,
            };

            let (remaining, attempts, stop) =
                self.place_category(&mut working, slot, entry.quantity);
            let initial_excess = entry.quantity;
            entry.quantity = remaining;

            debug!(
                option = %entry.option_label,
                initial_excess,
                remaining,
                attempts,
                stop = ?stop,
                "类别再分配完成"
            );

            stats.push(CategoryRedistribution {
                slot,
                option_label: entry.option_label.clone(),
                initial_excess,
                placed: initial_excess - remaining,
                remaining,
                attempts,
                stop,
            });
        }

        let result = RedistributionResult {
            adjusted_allocation: working,
            updated_excess,
            stats,
        };
        info!(placed = result.total_placed(), "余量再分配完成");
        result
    }

    /// 单类别再分配
    ///
    /// # 返回
    /// (剩余余量, 已用迭代次数, 停止原因)
    fn place_category(
        &self,
        carts: &mut [CartAllocation],
        slot: OptionSlot,
        excess: i64,
    ) -> (i64, u32, RedistributionStop) {
        let max = self.config.max_cart_capacity;
        let budget = self.config.redistribution_budget(carts.len());
        let mut remaining = excess;
        let mut attempts: u64 = 0;

        while remaining > 0 && attempts < budget {
            attempts += 1;
            let mut progressed = false;

            // 拉平: 有空位的车中该类别的最小数量
            let min_qty = carts
                .iter()
                .filter(|c| c.remaining_capacity(max) > 0)
                .map(|c| c.option_quantity(slot))
                .min();

            if let Some(min_qty) = min_qty {
                for cart in carts.iter_mut() {
                    if remaining > 0
                        && cart.remaining_capacity(max) > 0
                        && cart.option_quantity(slot) == min_qty
                        && cart.add_one(slot)
                    {
                        remaining -= 1;
                        progressed = true;
                    }
                }
            }

            // 轮转: 拉平无进展时, 所有有空位的车各加 1
            if !progressed && remaining > 0 {
                for cart in carts.iter_mut() {
                    if remaining > 0 && cart.remaining_capacity(max) > 0 && cart.add_one(slot) {
                        remaining -= 1;
                        progressed = true;
                    }
                }
            }

            if !progressed {
                break;
            }
        }

        let stop = if remaining == 0 {
            RedistributionStop::Completed
        } else if carts.iter().all(|c| c.remaining_capacity(max) == 0) {
            RedistributionStop::NoCapacity
        } else {
            RedistributionStop::BudgetExhausted
        };

        (remaining, u32::try_from(attempts).unwrap_or(u32::MAX), stop)
    }
}
