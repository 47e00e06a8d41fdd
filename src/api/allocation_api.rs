// ==========================================
// 航空餐车配餐系统 - 配餐计算 API
// ==========================================
// 职责: 对外提供初始计算与余量再分配两个入口
// 约定: 请求/响应均可 JSON 序列化 (camelCase), 供界面层直接消费
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::{AllocationConfig, ConfigManager};
use crate::domain::allocation::{
    CartAllocation, CategoryRedistribution, ExcessEntry, ShortageReport,
};
use crate::domain::form::ManifestForm;
use crate::domain::validation::ValidationReport;
use crate::engine::AllocationOrchestrator;
use crate::i18n::{t, t_with_args};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

// ==========================================
// 响应类型
// ==========================================

/// 初始计算响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub calculation_id: Uuid,
    pub calculated_at: DateTime<Utc>,
    pub valid: bool,
    pub errors: ValidationReport,
    /// 普通餐选项显示标签 (按选项顺序)
    pub option_labels: Vec<String>,
    pub allocation: Vec<CartAllocation>,
    pub excess: Vec<ExcessEntry>,
    /// 校验未通过时为 None
    pub shortage: Option<ShortageReport>,
}

/// 再分配响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedistributionResponse {
    /// 来源计算ID
    pub calculation_id: Uuid,
    pub redistributed_at: DateTime<Utc>,
    pub adjusted_allocation: Vec<CartAllocation>,
    pub updated_excess: Vec<ExcessEntry>,
    pub stats: Vec<CategoryRedistribution>,
    pub message: String,
}

// ==========================================
// AllocationApi - 配餐计算 API
// ==========================================
pub struct AllocationApi {
    orchestrator: AllocationOrchestrator,
}

impl AllocationApi {
    /// 创建新的 AllocationApi 实例
    pub fn new(config: Arc<AllocationConfig>) -> Self {
        Self {
            orchestrator: AllocationOrchestrator::new(config),
        }
    }

    /// 由配置管理器创建
    pub fn from_config_manager(manager: &ConfigManager) -> Self {
        Self::new(manager.config())
    }

    /// 清空后的表单 (默认选项数与选项名)
    pub fn cleared_form(&self) -> ManifestForm {
        ManifestForm::with_defaults(self.orchestrator.config())
    }

    /// 初始计算
    ///
    /// 校验未通过时 valid=false, 分配与余量为空, 不执行任何计算
    #[instrument(skip(self, form))]
    pub fn calculate(&self, form: &ManifestForm) -> CalculationResponse {
        let calculation_id = Uuid::new_v4();
        let calculated_at = Utc::now();

        match self.orchestrator.execute(form) {
            Ok(plan) => {
                info!(%calculation_id, carts = plan.allocation.len(), "配餐计算成功");
                CalculationResponse {
                    calculation_id,
                    calculated_at,
                    valid: true,
                    errors: ValidationReport::new(),
                    option_labels: plan.manifest.option_labels(),
                    allocation: plan.allocation,
                    excess: plan.excess,
                    shortage: Some(plan.shortage),
                }
            }
            Err(errors) => {
                warn!(%calculation_id, violations = errors.len(), "{}", t("validation.blocked"));
                CalculationResponse {
                    calculation_id,
                    calculated_at,
                    valid: false,
                    errors,
                    option_labels: Vec::new(),
                    allocation: Vec::new(),
                    excess: Vec::new(),
                    shortage: None,
                }
            }
        }
    }

    /// 从 JSON 表单计算
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): JSON 结构无法解析
    pub fn calculate_json(&self, form_json: &str) -> ApiResult<CalculationResponse> {
        let form: ManifestForm = serde_json::from_str(form_json)
            .map_err(|e| ApiError::InvalidInput(format!("表单 JSON 解析失败: {}", e)))?;
        Ok(self.calculate(&form))
    }

    /// 普通餐余量再分配
    ///
    /// # 参数
    /// - calculation: 初始计算响应 (不会被修改)
    ///
    /// # 返回
    /// - Ok(RedistributionResponse): 调整后分配与更新后余量
    /// - Err(ApiError::InvalidState): 计算未通过校验
    /// - Err(ApiError::InvalidInput): 分配结果不一致 (合计不符或超过容量)
    #[instrument(skip(self, calculation), fields(calculation_id = %calculation.calculation_id))]
    pub fn redistribute(
        &self,
        calculation: &CalculationResponse,
    ) -> ApiResult<RedistributionResponse> {
        if !calculation.valid {
            return Err(ApiError::InvalidState(
                "计算未通过校验, 无法再分配".to_string(),
            ));
        }
        self.check_allocation(&calculation.allocation)?;

        let result = self
            .orchestrator
            .redistribute(&calculation.allocation, &calculation.excess);

        let message = if result.stats.is_empty() {
            t("redistribution.nothing")
        } else {
            t("redistribution.done")
        };

        Ok(RedistributionResponse {
            calculation_id: calculation.calculation_id,
            redistributed_at: Utc::now(),
            adjusted_allocation: result.adjusted_allocation,
            updated_excess: result.updated_excess,
            stats: result.stats,
            message,
        })
    }

    /// 短缺提示文本
    pub fn shortage_message(&self, report: &ShortageReport) -> String {
        if report.is_short {
            t_with_args(
                "shortage.problem",
                &[
                    ("missing", report.missing.to_string().as_str()),
                    ("coverage", format!("{:.1}", report.coverage_percent).as_str()),
                ],
            )
        } else {
            t("shortage.ok")
        }
    }

    /// 校验外部传入的分配结果
    fn check_allocation(&self, allocation: &[CartAllocation]) -> ApiResult<()> {
        let max = self.orchestrator.config().max_cart_capacity;
        for cart in allocation {
            let expected: u64 = u64::from(cart.special)
                + cart.general_by_option.iter().map(|q| u64::from(*q)).sum::<u64>();
            if u64::from(cart.total) != expected {
                return Err(ApiError::InvalidInput(format!(
                    "{} 合计不一致: total={}, expected={}",
                    cart.cart_name(),
                    cart.total,
                    expected
                )));
            }
            if cart.total > max {
                return Err(ApiError::InvalidInput(format!(
                    "{} 超过单车容量: total={}, max={}",
                    cart.cart_name(),
                    cart.total,
                    max
                )));
            }
        }
        Ok(())
    }
}

impl Default for AllocationApi {
    fn default() -> Self {
        Self::new(Arc::new(AllocationConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::tests::LOCALE_TEST_LOCK;

    fn form(passengers: &str, specials: &str, carts: &str, quantities: &[&str]) -> ManifestForm {
        let mut form = ManifestForm::default();
        form.passengers = passengers.to_string();
        form.total_special_meals = specials.to_string();
        form.num_carts = carts.to_string();
        form.num_general_options = quantities.len().to_string();
        form.option_quantities = quantities.iter().map(|q| q.to_string()).collect();
        form
    }

    #[test]
    fn test_invalid_calculation_has_no_results() {
        let api = AllocationApi::default();
        let response = api.calculate(&form("3", "5", "1", &["1", "1"]));
        assert!(!response.valid);
        assert!(response.allocation.is_empty());
        assert!(response.excess.is_empty());
        assert!(response.shortage.is_none());

        let err = api.redistribute(&response).unwrap_err();
        assert!(matches!(err, ApiError::InvalidState(_)));
    }

    #[test]
    fn test_redistribute_rejects_tampered_allocation() {
        let api = AllocationApi::default();
        let mut response = api.calculate(&form("20", "0", "2", &["10", "10"]));
        response.allocation[0].total = 99;

        let err = api.redistribute(&response).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn test_calculate_json() {
        let api = AllocationApi::default();
        let response = api
            .calculate_json(
                r#"{"passengers":"20","numCarts":"2","numGeneralOptions":"2","optionQuantities":["10","10"]}"#,
            )
            .unwrap();
        assert!(response.valid);
        assert_eq!(response.option_labels, vec!["Chicken", "Beef"]);

        let err = api.calculate_json("[1,2").unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn test_cleared_form() {
        let api = AllocationApi::default();
        assert_eq!(api.cleared_form(), ManifestForm::default());
    }

    #[test]
    fn test_shortage_message() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("en");

        let api = AllocationApi::default();
        let short = ShortageReport {
            is_short: true,
            missing: 40,
            coverage_percent: 80.0,
            required: 200,
            available: 160,
        };
        assert_eq!(
            api.shortage_message(&short),
            "PROBLEM: MEALS MISSING! Not enough meals for all passengers. (40 meals missing. Coverage: 80.0%)"
        );

        let ok = ShortageReport {
            is_short: false,
            missing: 0,
            coverage_percent: 100.0,
            required: 10,
            available: 10,
        };
        assert_eq!(api.shortage_message(&ok), "Meal Quantity OK");
    }
}
