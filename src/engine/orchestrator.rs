// ==========================================
// 航空餐车配餐系统 - 引擎编排器
// ==========================================
// 用途: 协调各引擎的执行顺序
// 主流程: 校验 → 辅助量 → 初始分配 → 余量 → 短缺评估
// 再分配: 按需单独调用, 只读初始分配
// ==========================================

use crate::config::AllocationConfig;
use crate::domain::allocation::{CartAllocation, ExcessEntry, RedistributionResult, ShortageReport};
use crate::domain::form::ManifestForm;
use crate::domain::manifest::{CartSpecialInput, FlightManifest};
use crate::domain::validation::ValidationReport;
use crate::engine::{
    AuxiliaryCalculator, AuxiliaryValues, ExcessCalculator, InitialDistributor, ManifestValidator,
    Redistributor, ShortageEvaluator,
};
use std::sync::Arc;
use tracing::{debug, info};

// ==========================================
// AllocationPlan - 一次计算的完整结果
// ==========================================
#[derive(Debug, Clone)]
pub struct AllocationPlan {
    // 校验输出
    pub manifest: FlightManifest,
    pub cart_specials: CartSpecialInput,

    // 辅助量
    pub auxiliary: AuxiliaryValues,

    // 初始分配输出
    pub allocation: Vec<CartAllocation>,

    // 余量与短缺
    pub excess: Vec<ExcessEntry>,
    pub shortage: ShortageReport,
}

// ==========================================
// AllocationOrchestrator - 引擎编排器
// ==========================================
// 各引擎无状态, 每次调用只依赖传入快照
pub struct AllocationOrchestrator {
    config: Arc<AllocationConfig>,
    validator: ManifestValidator,
    auxiliary: AuxiliaryCalculator,
    distributor: InitialDistributor,
    excess: ExcessCalculator,
    shortage: ShortageEvaluator,
    redistributor: Redistributor,
}

impl AllocationOrchestrator {
    /// 创建新的编排器实例
    pub fn new(config: Arc<AllocationConfig>) -> Self {
        Self {
            validator: ManifestValidator::new(config.clone()),
            auxiliary: AuxiliaryCalculator::new(),
            distributor: InitialDistributor::new(config.clone()),
            excess: ExcessCalculator::new(),
            shortage: ShortageEvaluator::new(),
            redistributor: Redistributor::new(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// 执行完整计算流程
    ///
    /// # 返回
    /// - Ok(AllocationPlan): 校验通过并完成初始分配
    /// - Err(ValidationReport): 校验未通过, 未执行任何分配
    pub fn execute(&self, form: &ManifestForm) -> Result<AllocationPlan, ValidationReport> {
        // ==========================================
        // 步骤1: 输入校验 (全有或全无)
        // ==========================================
        let input = self.validator.validate(form)?;
        let manifest = input.manifest;
        let cart_specials = input.cart_specials;

        info!(
            passengers = manifest.total_passengers,
            special_meals = manifest.total_special_meals,
            num_carts = manifest.num_carts,
            options = manifest.option_count(),
            "开始执行配餐计算"
        );

        // ==========================================
        // 步骤2: 辅助量
        // ==========================================
        let auxiliary = self.auxiliary.calculate(&manifest);
        debug!(
            total_general = auxiliary.total_general,
            base_capacity_per_cart = auxiliary.base_capacity_per_cart,
            remainder_carts = auxiliary.remainder_carts,
            "辅助量计算完成"
        );

        // ==========================================
        // 步骤3: 初始分配
        // ==========================================
        let allocation = self
            .distributor
            .distribute(&manifest, &cart_specials, &auxiliary);

        // ==========================================
        // 步骤4: 余量与短缺评估
        // ==========================================
        let excess = self.excess.calculate(&manifest, &allocation);
        let shortage = self.shortage.evaluate(&manifest, &auxiliary);
        if shortage.is_short {
            info!(
                missing = shortage.missing,
                coverage_percent = shortage.coverage_percent,
                "餐食不足以覆盖全部旅客"
            );
        }

        info!(carts = allocation.len(), "配餐计算完成");

        Ok(AllocationPlan {
            manifest,
            cart_specials,
            auxiliary,
            allocation,
            excess,
            shortage,
        })
    }

    /// 普通餐余量再分配 (初始分配保持不变)
    pub fn redistribute(
        &self,
        allocation: &[CartAllocation],
        excess: &[ExcessEntry],
    ) -> RedistributionResult {
        self.redistributor.redistribute(allocation, excess)
    }
}
