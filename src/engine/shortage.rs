// ==========================================
// 航空餐车配餐系统 - 餐食短缺评估
// ==========================================
// 可用 = 普通餐总量 + 特殊餐总量; 需求 = 旅客数
// 短缺只作提示, 不阻断后续操作
// ==========================================

use crate::domain::allocation::ShortageReport;
use crate::domain::manifest::FlightManifest;
use crate::engine::auxiliary::AuxiliaryValues;

pub struct ShortageEvaluator;

impl ShortageEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, manifest: &FlightManifest, aux: &AuxiliaryValues) -> ShortageReport {
        let available = aux.total_general + u64::from(manifest.total_special_meals);
        let required = u64::from(manifest.total_passengers);
        let is_short = available < required;

        // 需求为 0 时覆盖率记为 0 (此时不可能短缺)
        let coverage_percent = if required == 0 {
            0.0
        } else {
            available as f64 / required as f64 * 100.0
        };

        ShortageReport {
            is_short,
            missing: required.saturating_sub(available),
            coverage_percent,
            required,
            available,
        }
    }
}

impl Default for ShortageEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
