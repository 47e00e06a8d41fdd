// ==========================================
// 航空餐车配餐系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供界面层与命令行调用
// ==========================================

pub mod allocation_api;
pub mod error;

// 重导出核心类型
pub use allocation_api::{AllocationApi, CalculationResponse, RedistributionResponse};
pub use error::{ApiError, ApiResult};
