// ==========================================
// 航空餐车配餐系统 - 初始分配引擎
// ==========================================
// 职责: 按车序将特殊餐与普通餐装入各车
// 输入: FlightManifest + CartSpecialInput + AuxiliaryValues
// 输出: 每车一条 CartAllocation (车数为 0 时为空)
// ==========================================
// 红线: 选项按固定顺序取整, 前序选项优先占用取整余量;
//       取整缺口整体补给占比最大的选项 (>= 比较, 1 号优先, 其次 2 号)
// ==========================================

use crate::config::AllocationConfig;
use crate::domain::allocation::CartAllocation;
use crate::domain::manifest::{CartSpecialInput, FlightManifest};
use crate::domain::types::OptionSlot;
use crate::engine::auxiliary::AuxiliaryValues;
use std::sync::Arc;
use tracing::{debug, instrument};

/// 四舍五入 (非负值, .5 向上)
pub fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor().max(0.0) as u32
}

/// 取整缺口的补给对象: 占比最大者, 平局时按 1 → 2 → 3 的顺序
pub fn shortfall_target(aux: &AuxiliaryValues) -> OptionSlot {
    let p1 = aux.share(OptionSlot::First);
    let p2 = aux.share(OptionSlot::Second);
    let p3 = aux.share(OptionSlot::Third);

    if p1 >= p2 && p1 >= p3 {
        OptionSlot::First
    } else if p2 >= p1 && p2 >= p3 {
        OptionSlot::Second
    } else {
        OptionSlot::Third
    }
}

// ==========================================
// InitialDistributor - 初始分配引擎
// ==========================================
pub struct InitialDistributor {
    config: Arc<AllocationConfig>,
}

impl InitialDistributor {
    pub fn new(config: Arc<AllocationConfig>) -> Self {
        Self { config }
    }

    /// 执行初始分配
    #[instrument(skip_all, fields(num_carts = manifest.num_carts))]
    pub fn distribute(
        &self,
        manifest: &FlightManifest,
        cart_specials: &CartSpecialInput,
        aux: &AuxiliaryValues,
    ) -> Vec<CartAllocation> {
        let target = shortfall_target(aux);

        let allocation: Vec<CartAllocation> = (1..=manifest.num_carts)
            .map(|cart_index| {
                let special = cart_specials.get(cart_index);
                self.fill_cart(manifest, cart_index, special, aux, target)
            })
            .collect();

        debug!(
            carts = allocation.len(),
            shortfall_target = %target,
            "初始分配完成"
        );
        allocation
    }

    /// 单车分配
    fn fill_cart(
        &self,
        manifest: &FlightManifest,
        cart_index: u32,
        special: u32,
        aux: &AuxiliaryValues,
        shortfall_target: OptionSlot,
    ) -> CartAllocation {
        // 1) 普通餐容量 = min(单车上限, 基础容量 + 是否加一)
        let extra = u64::from(u64::from(cart_index) <= aux.remainder_carts);
        let general_capacity =
            (aux.base_capacity_per_cart + extra).min(u64::from(self.config.max_cart_capacity)) as u32;

        // 2) 扣除特殊餐后的可用空间
        let available = general_capacity.saturating_sub(special);

        // 3) 按选项顺序取整, 后序选项以剩余空间为上限
        let mut general_by_option = Vec::with_capacity(manifest.option_count());
        let mut remaining = available;
        for slot in manifest.slots() {
            let candidate = (f64::from(available) * aux.share(slot)).min(f64::from(remaining));
            let assigned = round_half_up(candidate).min(remaining);
            remaining -= assigned;
            general_by_option.push(assigned);
        }

        // 4) 取整缺口整体补给占比最大的选项
        let assigned_total: u32 = general_by_option.iter().sum();
        let shortfall = available - assigned_total;
        if shortfall > 0 {
            if let Some(qty) = general_by_option.get_mut(shortfall_target.index()) {
                *qty += shortfall;
            }
        }

        CartAllocation::new(cart_index, special, general_by_option)
    }
}
