// ==========================================
// 航空餐车配餐系统 - 核心库
// ==========================================
// 系统定位: 餐食分配计算 (人工最终确认)
// 计算主线: 校验 → 辅助量 → 初始分配 → 余量 → (可选) 再分配
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分配规则
pub mod engine;

// 配置层 - 全局常量与覆写
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 对外接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CartAllocation, CartSpecialInput, ExcessEntry, FlightManifest, ManifestForm, MealOption,
    OptionSlot, RedistributionResult, ShortageReport, ValidationReport,
};

// 引擎
pub use engine::{
    AllocationOrchestrator, AuxiliaryCalculator, ExcessCalculator, InitialDistributor,
    ManifestValidator, Redistributor, ShortageEvaluator,
};

// 配置
pub use config::{AllocationConfig, ConfigManager};

// API
pub use api::{AllocationApi, ApiError, ApiResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Flight Meal Cart Planner";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
