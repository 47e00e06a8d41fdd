// ==========================================
// AllocationApi 集成测试
// ==========================================
// 测试目标: 验证初始计算的端到端结果
// 覆盖范围: 典型航班、容量上限、校验阻断、守恒与容量约束
// ==========================================

use meal_cart_planner::api::{AllocationApi, CalculationResponse};
use meal_cart_planner::domain::validation::{field_keys, ViolationCode};
use meal_cart_planner::{ManifestForm, OptionSlot};

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试表单 (选项数由数量个数决定)
fn create_form(passengers: &str, specials: &str, carts: &str, quantities: &[&str]) -> ManifestForm {
    let mut form = ManifestForm::default();
    form.passengers = passengers.to_string();
    form.total_special_meals = specials.to_string();
    form.num_carts = carts.to_string();
    form.num_general_options = quantities.len().to_string();
    form.option_quantities = quantities.iter().map(|q| q.to_string()).collect();
    form
}

/// 断言每车合计不超过容量, 且各选项守恒
fn assert_conserved(form: &ManifestForm, response: &CalculationResponse) {
    assert!(response.valid);
    for cart in &response.allocation {
        assert!(cart.total <= 40, "{} 超过容量: {}", cart.cart_name(), cart.total);
        assert_eq!(cart.total, cart.special + cart.general_total());
    }

    for entry in &response.excess {
        let assigned: i64 = match entry.slot {
            Some(slot) => response
                .allocation
                .iter()
                .map(|c| i64::from(c.option_quantity(slot)))
                .sum(),
            None => response.allocation.iter().map(|c| i64::from(c.special)).sum(),
        };
        let supplied: i64 = match entry.slot {
            Some(slot) => form.option_quantity(slot.index()).parse().unwrap_or(0),
            None => form.total_special_meals.parse().unwrap_or(0),
        };
        assert_eq!(assigned + entry.quantity, supplied, "{} 不守恒", entry.option_label);
    }
}

// ==========================================
// 典型场景
// ==========================================

#[test]
fn test_two_carts_even_split() {
    let api = AllocationApi::default();
    let form = create_form("20", "0", "2", &["10", "10"]);
    let response = api.calculate(&form);

    assert!(response.valid);
    assert_eq!(response.allocation.len(), 2);
    for cart in &response.allocation {
        assert_eq!(cart.special, 0);
        assert_eq!(cart.general_by_option, vec![5, 5]);
        assert_eq!(cart.total, 10);
    }
    assert!(response.excess.iter().all(|e| e.quantity == 0));
    assert_eq!(response.option_labels, vec!["Chicken", "Beef"]);
    assert_conserved(&form, &response);
}

#[test]
fn test_single_cart_capped_at_capacity() {
    let api = AllocationApi::default();
    let form = create_form("50", "0", "1", &["50", "0"]);
    let response = api.calculate(&form);

    assert!(response.valid);
    assert_eq!(response.allocation[0].total, 40);
    assert_eq!(response.allocation[0].general_by_option, vec![40, 0]);
    assert_eq!(response.excess[1].quantity, 10);
    assert_eq!(response.excess[1].slot, Some(OptionSlot::First));
    assert_conserved(&form, &response);

    // 唯一的车已满, 再分配无法改善
    let redistribution = api.redistribute(&response).unwrap();
    assert_eq!(redistribution.adjusted_allocation, response.allocation);
    assert_eq!(redistribution.updated_excess[1].quantity, 10);
}

#[test]
fn test_special_meals_exceed_passengers_blocks_calculation() {
    let api = AllocationApi::default();
    let response = api.calculate(&create_form("3", "5", "1", &["1", "1"]));

    assert!(!response.valid);
    assert!(response.allocation.is_empty());
    assert!(response.excess.is_empty());
    assert!(response.shortage.is_none());
    assert!(response.errors.has_code(ViolationCode::SpecialExceedsPassengers));
    assert!(response
        .errors
        .message_for(field_keys::SPECIAL_MEALS_VS_PASSENGERS)
        .is_some());
}

#[test]
fn test_three_options_with_cart_specials() {
    let api = AllocationApi::default();
    let mut form = create_form("100", "3", "3", &["35", "35", "30"]);
    form.set_cart_special(1, "3");
    let response = api.calculate(&form);

    // 普通餐 100 份 / 3 车: 基础 33, 第 1 车多 1
    assert_eq!(response.allocation[0].special, 3);
    assert_eq!(response.allocation[0].general_by_option, vec![11, 11, 9]);
    assert_eq!(response.allocation[1].general_by_option, vec![12, 12, 9]);
    assert_eq!(response.allocation[2].general_by_option, vec![12, 12, 9]);
    assert_eq!(response.allocation[0].total, 34);

    assert_eq!(response.excess[0].quantity, 0);
    assert_eq!(response.excess[1].quantity, 0);
    assert_eq!(response.excess[2].quantity, 0);
    assert_eq!(response.excess[3].quantity, 3);
    assert_conserved(&form, &response);
}

#[test]
fn test_zero_carts_gives_empty_allocation() {
    let api = AllocationApi::default();
    let form = create_form("10", "2", "0", &["4", "4"]);
    let response = api.calculate(&form);

    assert!(response.valid);
    assert!(response.allocation.is_empty());
    assert_eq!(response.excess[0].quantity, 2);
    assert_eq!(response.excess[1].quantity, 4);
    assert_eq!(response.excess[2].quantity, 4);
}

#[test]
fn test_shortage_is_informational() {
    let api = AllocationApi::default();
    let response = api.calculate(&create_form("200", "10", "4", &["100", "50"]));

    assert!(response.valid);
    assert!(!response.allocation.is_empty());
    let shortage = response.shortage.unwrap();
    assert!(shortage.is_short);
    assert_eq!(shortage.missing, 40);
}

// ==========================================
// 约束检查
// ==========================================

#[test]
fn test_capacity_and_conservation_hold_across_flights() {
    let api = AllocationApi::default();
    let flights: Vec<(&str, &str, &str, Vec<&str>, Vec<(u32, &str)>)> = vec![
        ("600", "12", "12", vec!["250", "200", "150"], vec![(1, "4"), (5, "8")]),
        ("480", "40", "12", vec!["300", "140"], vec![(2, "40")]),
        ("150", "0", "5", vec!["77", "41", "32"], vec![]),
        ("37", "7", "3", vec!["13", "9", "8"], vec![(1, "2"), (2, "2"), (3, "3")]),
        ("90", "5", "2", vec!["45", "45", "45"], vec![(1, "5")]),
    ];

    for (passengers, specials, carts, quantities, cart_specials) in flights {
        let mut form = create_form(passengers, specials, carts, &quantities);
        for (cart, qty) in cart_specials {
            form.set_cart_special(cart, qty);
        }
        let response = api.calculate(&form);
        assert_conserved(&form, &response);
    }
}

#[test]
fn test_response_serializes_camel_case() {
    let api = AllocationApi::default();
    let response = api.calculate(&create_form("20", "0", "2", &["10", "10"]));
    let json = serde_json::to_value(&response).unwrap();

    assert!(json.get("calculationId").is_some());
    assert!(json.get("optionLabels").is_some());
    assert!(json["allocation"][0].get("generalByOption").is_some());

    let back: CalculationResponse = serde_json::from_value(json).unwrap();
    assert_eq!(back, response);
}
