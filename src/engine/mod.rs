// ==========================================
// 航空餐车配餐系统 - 引擎层
// ==========================================
// 职责: 实现分配规则, 不做 I/O
// 红线: 各引擎无状态, 同一输入必得同一输出
// ==========================================

pub mod auxiliary;
pub mod distributor;
pub mod excess;
pub mod orchestrator;
pub mod redistributor;
pub mod shortage;
pub mod validator;

// 重导出核心引擎
pub use auxiliary::{AuxiliaryCalculator, AuxiliaryValues};
pub use distributor::InitialDistributor;
pub use excess::ExcessCalculator;
pub use orchestrator::{AllocationOrchestrator, AllocationPlan};
pub use redistributor::Redistributor;
pub use shortage::ShortageEvaluator;
pub use validator::{ManifestValidator, ValidatedInput};
