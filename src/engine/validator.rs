// ==========================================
// 航空餐车配餐系统 - 输入校验器
// ==========================================
// 职责: 原始表单 → 数值化输入; 字段级与跨字段校验
// 红线: 全有或全无, 任一违规则不执行分配; 校验失败只上报不抛出
// ==========================================

use crate::config::AllocationConfig;
use crate::domain::form::ManifestForm;
use crate::domain::manifest::{CartSpecialInput, FlightManifest, MealOption};
use crate::domain::types::{MAX_GENERAL_OPTIONS, MIN_GENERAL_OPTIONS};
use crate::domain::validation::{field_keys, ValidationReport, ViolationCode};
use crate::i18n::{t, t_with_args};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// 数值字段解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedCount {
    Empty,
    Value(u32),
    Invalid(ViolationCode),
}

impl ParsedCount {
    /// 用于计算的值: 空或无效按 0
    pub fn value_or_zero(self) -> u32 {
        match self {
            ParsedCount::Value(v) => v,
            _ => 0,
        }
    }
}

/// 解析非负整数输入
///
/// 规则: 去除首尾空白; 空串 → Empty; 非数字 → NotANumber;
/// 负数 → Negative; 小数 → NotWholeNumber
pub fn parse_count(raw: &str) -> ParsedCount {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedCount::Empty;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if value < 0.0 {
                ParsedCount::Invalid(ViolationCode::Negative)
            } else if value.fract() != 0.0 {
                ParsedCount::Invalid(ViolationCode::NotWholeNumber)
            } else if value > f64::from(u32::MAX) {
                ParsedCount::Invalid(ViolationCode::NotANumber)
            } else {
                ParsedCount::Value(value as u32)
            }
        }
        _ => ParsedCount::Invalid(ViolationCode::NotANumber),
    }
}

/// 字段上限规则
struct Limit {
    max: u32,
    code: ViolationCode,
}

/// 校验通过的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub manifest: FlightManifest,
    pub cart_specials: CartSpecialInput,
}

// ==========================================
// ManifestValidator - 输入校验器
// ==========================================
pub struct ManifestValidator {
    config: Arc<AllocationConfig>,
}

impl ManifestValidator {
    pub fn new(config: Arc<AllocationConfig>) -> Self {
        Self { config }
    }

    /// 校验表单
    ///
    /// # 返回
    /// - Ok(ValidatedInput): 全部规则通过
    /// - Err(ValidationReport): 至少一条违规 (非空)
    #[instrument(skip(self, form), fields(num_carts = %form.num_carts))]
    pub fn validate(&self, form: &ManifestForm) -> Result<ValidatedInput, ValidationReport> {
        let mut report = ValidationReport::new();

        // ===== 单字段 =====
        let total_passengers = self.check_count(
            &mut report,
            field_keys::PASSENGERS,
            &form.passengers,
            &t("label.passengers"),
            Some(Limit {
                max: self.config.max_passengers,
                code: ViolationCode::TooManyPassengers,
            }),
        );

        let total_special_meals = self.check_count(
            &mut report,
            field_keys::TOTAL_SPECIAL_MEALS,
            &form.total_special_meals,
            &t("label.total_special_meals"),
            None,
        );

        let num_carts = self.check_count(
            &mut report,
            field_keys::NUM_CARTS,
            &form.num_carts,
            &t("label.num_carts"),
            Some(Limit {
                max: self.config.max_number_of_carts,
                code: ViolationCode::TooManyCarts,
            }),
        );

        let option_count = self.check_option_count(&mut report, &form.num_general_options);

        // ===== 普通餐选项 =====
        let mut general_options = Vec::with_capacity(option_count);
        for index in 0..option_count {
            let raw_name = form.option_name(index);
            let display_name = if raw_name.trim().is_empty() {
                format!("Option {}", index + 1)
            } else {
                raw_name.to_string()
            };
            let quantity = self.check_count(
                &mut report,
                &field_keys::option_quantity(index),
                form.option_quantity(index),
                &t_with_args("label.option_quantity", &[("name", display_name.as_str())]),
                None,
            );
            general_options.push(MealOption::new(raw_name, quantity));
        }

        // ===== 单车特殊餐 =====
        let mut cart_specials = CartSpecialInput::new();
        if num_carts > 0 {
            for (cart_index, raw) in form.special_meals_per_cart_input.range(1..=num_carts) {
                let count = self.check_count(
                    &mut report,
                    &field_keys::special_meals_per_cart(*cart_index),
                    raw,
                    &t_with_args("label.cart_special", &[("cart", cart_index.to_string().as_str())]),
                    Some(Limit {
                        max: self.config.max_cart_capacity,
                        code: ViolationCode::CartSpecialExceedsCapacity,
                    }),
                );
                cart_specials.set(*cart_index, count);
            }
        }

        // ===== 跨字段 =====
        if cart_specials.sum_for_carts(num_carts) > u64::from(total_special_meals) {
            report.push(
                field_keys::SPECIAL_MEALS_TOTAL_VS_CART_SUM,
                ViolationCode::SpecialCartSumExceedsTotal,
                t("validation.special_cart_sum_exceeds_total"),
            );
        }

        if total_special_meals > total_passengers {
            report.push(
                field_keys::SPECIAL_MEALS_VS_PASSENGERS,
                ViolationCode::SpecialExceedsPassengers,
                t("validation.special_exceeds_passengers"),
            );
        }

        if !report.is_valid() {
            warn!(violations = report.len(), "输入校验未通过, 不执行分配");
            return Err(report);
        }

        debug!(
            total_passengers,
            total_special_meals,
            num_carts,
            option_count,
            "输入校验通过"
        );

        Ok(ValidatedInput {
            manifest: FlightManifest {
                total_passengers,
                total_special_meals,
                num_carts,
                general_options,
            },
            cart_specials,
        })
    }

    /// 校验单个数值字段, 返回计算用值 (无效按 0)
    fn check_count(
        &self,
        report: &mut ValidationReport,
        field: &str,
        raw: &str,
        label: &str,
        limit: Option<Limit>,
    ) -> u32 {
        let parsed = parse_count(raw);

        if let ParsedCount::Invalid(code) = parsed {
            report.push(field, code, invalid_message(code, label));
            return 0;
        }

        let value = parsed.value_or_zero();
        if let Some(limit) = limit {
            if value > limit.max {
                let max = limit.max.to_string();
                let message = match limit.code {
                    ViolationCode::TooManyCarts => {
                        t_with_args("validation.too_many_carts", &[("max", max.as_str())])
                    }
                    ViolationCode::TooManyPassengers => {
                        t_with_args("validation.too_many_passengers", &[("max", max.as_str())])
                    }
                    _ => t_with_args(
                        "validation.cart_special_exceeds_capacity",
                        &[("field", label), ("max", max.as_str())],
                    ),
                };
                report.push(field, limit.code, message);
            }
        }
        value
    }

    /// 选项数: 空值取配置默认; 非 2/3 报错
    ///
    /// 报错时按 "3 则 3, 否则 2" 继续解析, 以便同时报告其它字段
    fn check_option_count(&self, report: &mut ValidationReport, raw: &str) -> usize {
        let parsed = match parse_count(raw) {
            ParsedCount::Empty => ParsedCount::Value(self.config.default_general_options),
            other => other,
        };

        let value = parsed.value_or_zero() as usize;
        let in_range = (MIN_GENERAL_OPTIONS..=MAX_GENERAL_OPTIONS).contains(&value);
        if !in_range || matches!(parsed, ParsedCount::Invalid(_)) {
            report.push(
                field_keys::NUM_GENERAL_OPTIONS,
                ViolationCode::InvalidOptionCount,
                t_with_args(
                    "validation.invalid_option_count",
                    &[
                        ("min", MIN_GENERAL_OPTIONS.to_string().as_str()),
                        ("max", MAX_GENERAL_OPTIONS.to_string().as_str()),
                    ],
                ),
            );
        }

        if value == MAX_GENERAL_OPTIONS {
            MAX_GENERAL_OPTIONS
        } else {
            MIN_GENERAL_OPTIONS
        }
    }
}

fn invalid_message(code: ViolationCode, label: &str) -> String {
    let key = match code {
        ViolationCode::Negative => "validation.negative",
        ViolationCode::NotWholeNumber => "validation.not_whole_number",
        _ => "validation.not_a_number",
    };
    t_with_args(key, &[("field", label)])
}
