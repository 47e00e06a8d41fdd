// ==========================================
// 航空餐车配餐系统 - 领域模型层
// ==========================================
// 职责: 定义输入快照、分配结果、校验报告
// 红线: 不含计算逻辑, 不含 I/O
// ==========================================

pub mod allocation;
pub mod form;
pub mod manifest;
pub mod types;
pub mod validation;

// 重导出核心类型
pub use allocation::{
    CartAllocation, CategoryRedistribution, ExcessEntry, RedistributionResult,
    RedistributionStop, ShortageReport,
};
pub use form::ManifestForm;
pub use manifest::{CartSpecialInput, FlightManifest, MealOption};
pub use types::{OptionSlot, SPECIALS_LABEL};
pub use validation::{FieldViolation, ValidationReport, ViolationCode, ViolationScope};
