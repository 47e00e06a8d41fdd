// ==========================================
// 航空餐车配餐系统 - 校验报告模型
// ==========================================
// 职责: 承载字段级/跨字段校验违规, 供界面按字段显示
// 红线: 校验失败只上报, 不抛出; 有任何违规则不执行分配
// ==========================================

use serde::{Deserialize, Serialize};

/// 字段键 (稳定值, 调用方据此定位输入框)
pub mod field_keys {
    pub const PASSENGERS: &str = "passengers";
    pub const TOTAL_SPECIAL_MEALS: &str = "totalSpecialMeals";
    pub const NUM_CARTS: &str = "numCarts";
    pub const NUM_GENERAL_OPTIONS: &str = "numGeneralOptions";
    pub const SPECIAL_MEALS_TOTAL_VS_CART_SUM: &str = "specialMealsTotalVsCartSum";
    pub const SPECIAL_MEALS_VS_PASSENGERS: &str = "specialMealsVsPassengers";

    /// 普通餐数量字段, 0 基下标
    pub fn option_quantity(index: usize) -> String {
        format!("optionQuantities[{}]", index)
    }

    /// 单车特殊餐字段, 1 基餐车序号
    pub fn special_meals_per_cart(cart_index: u32) -> String {
        format!("specialMealsPerCart[{}]", cart_index)
    }
}

/// 违规范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationScope {
    Field,      // 单字段, 用户修改该字段即可恢复
    CrossField, // 跨字段一致性, 在表单级显示
}

/// 违规代码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    NotANumber,
    Negative,
    NotWholeNumber,
    TooManyCarts,
    TooManyPassengers,
    InvalidOptionCount,
    CartSpecialExceedsCapacity,
    SpecialCartSumExceedsTotal,
    SpecialExceedsPassengers,
}

impl ViolationCode {
    pub fn scope(self) -> ViolationScope {
        match self {
            ViolationCode::SpecialCartSumExceedsTotal | ViolationCode::SpecialExceedsPassengers => {
                ViolationScope::CrossField
            }
            _ => ViolationScope::Field,
        }
    }
}

/// 单条违规
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub field: String,
    pub scope: ViolationScope,
    pub code: ViolationCode,
    pub message: String,
}

// ==========================================
// ValidationReport - 校验报告
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, code: ViolationCode, message: String) {
        self.violations.push(FieldViolation {
            field: field.into(),
            scope: code.scope(),
            code,
            message,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// 指定字段的第一条错误信息
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message.as_str())
    }

    pub fn has_code(&self, code: ViolationCode) -> bool {
        self.violations.iter().any(|v| v.code == code)
    }

    pub fn cross_field(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations
            .iter()
            .filter(|v| v.scope == ViolationScope::CrossField)
    }
}
