//! Pre-submission checks on the public forms.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use coffee_supply_client::{
    errors::ClientError,
    forms::{
        check, rules, BusinessProfileForm, CreateShipmentForm, CropSeasonDetailForm,
        ShipmentDetailForm, UpdateDeliveryStatusForm,
    },
    workflow::DeliveryStatus,
};
use test_case::test_case;
use uuid::Uuid;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

#[test_case("12345", false ; "five digits")]
#[test_case("1234567890", true ; "ten digits")]
#[test_case("0312345678-001", true ; "branch suffix")]
fn tax_id_rule(input: &str, valid: bool) {
    assert_eq!(rules::tax_id(input).is_ok(), valid);
}

#[test]
fn date_range_rejects_start_not_before_end() {
    assert!(rules::date_range(date(1, 1), date(1, 2)).is_ok());
    assert!(rules::date_range(date(1, 2), date(1, 2)).is_err());
    assert!(rules::date_range(date(1, 3), date(1, 2)).is_err());
}

fn shipment_form(total: f64, lines: &[f64]) -> CreateShipmentForm {
    CreateShipmentForm {
        order_id: Some(Uuid::new_v4()),
        delivery_staff_id: Some(Uuid::new_v4()),
        shipped_quantity: total,
        shipped_at: None,
        shipment_details: lines
            .iter()
            .map(|&quantity| ShipmentDetailForm {
                order_item_id: Uuid::new_v4(),
                quantity,
                unit: Some("kg".to_string()),
                note: None,
            })
            .collect(),
    }
}

#[test]
fn shipment_lines_must_sum_to_total() {
    assert!(check(&shipment_form(300.0, &[100.0, 200.0])).is_ok());
    assert_matches!(
        check(&shipment_form(300.0, &[100.0, 150.0])),
        Err(ClientError::Validation(msg)) if msg.contains("add up")
    );
}

#[test]
fn shipment_needs_lines_and_staff() {
    let mut form = shipment_form(300.0, &[]);
    assert!(check(&form).is_err());
    form = shipment_form(300.0, &[300.0]);
    form.delivery_staff_id = None;
    assert_matches!(
        check(&form),
        Err(ClientError::Validation(msg)) if msg == "Delivery staff is required"
    );
}

#[test]
fn received_time_only_with_delivered() {
    let mut form = UpdateDeliveryStatusForm::to(DeliveryStatus::InTransit);
    form.received_at = date(5, 1).and_hms_opt(9, 30, 0);
    assert!(check(&form).is_err());
    form.delivery_status = DeliveryStatus::Delivered;
    assert!(check(&form).is_ok());
}

#[test]
fn harvest_window_must_be_ordered() {
    let form = CropSeasonDetailForm {
        coffee_type_id: Some(Uuid::new_v4()),
        area_allocated: 1.5,
        expected_harvest_start: date(11, 1),
        expected_harvest_end: date(10, 1),
        estimated_yield: Some(3000.0),
    };
    assert_matches!(check(&form), Err(ClientError::Validation(_)));
}

#[test]
fn profile_phone_rule_applies() {
    let form = BusinessProfileForm {
        company_name: "Buôn Ma Thuột Trading".to_string(),
        position: None,
        company_address: None,
        tax_id: "1234567890".to_string(),
        website: None,
        contact_email: None,
        phone_number: Some("12345".to_string()),
    };
    assert_matches!(
        check(&form),
        Err(ClientError::Validation(msg)) if msg == "Phone number is not valid"
    );
}
