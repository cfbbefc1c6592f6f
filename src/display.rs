//! Presentation helpers: status labels and colours, dates, money, quantities.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{
    CropSeasonStatus, DeliveryStatus, InboundRequestStatus, OrderStatus, ProcessingBatchStatus,
    SeverityLevel, UserRole,
};

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "—";

const NEUTRAL: &str = "#9E9E9E";

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    En,
    #[default]
    Vi,
}

/// Label and badge colour for a status value.
pub trait StatusDisplay {
    fn label(&self, locale: Locale) -> &'static str;

    /// Hex colour of the status badge.
    fn color(&self) -> &'static str;
}

macro_rules! labels {
    ($locale:expr, $vi:expr, $en:expr) => {
        match $locale {
            Locale::Vi => $vi,
            Locale::En => $en,
        }
    };
}

impl StatusDisplay for DeliveryStatus {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            DeliveryStatus::Pending => labels!(locale, "Chờ giao", "Pending"),
            DeliveryStatus::InTransit => labels!(locale, "Đang giao", "In transit"),
            DeliveryStatus::Delivered => labels!(locale, "Đã giao", "Delivered"),
            DeliveryStatus::Failed => labels!(locale, "Giao thất bại", "Failed"),
            DeliveryStatus::Returned => labels!(locale, "Đã hoàn trả", "Returned"),
            DeliveryStatus::Canceled => labels!(locale, "Đã hủy", "Canceled"),
            DeliveryStatus::Unknown => labels!(locale, "Không xác định", "Unknown"),
        }
    }

    fn color(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "#FFA000",
            DeliveryStatus::InTransit => "#1E88E5",
            DeliveryStatus::Delivered => "#43A047",
            DeliveryStatus::Failed => "#E53935",
            DeliveryStatus::Returned => "#8E24AA",
            DeliveryStatus::Canceled => "#757575",
            DeliveryStatus::Unknown => NEUTRAL,
        }
    }
}

impl StatusDisplay for CropSeasonStatus {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            CropSeasonStatus::Active => labels!(locale, "Đang hoạt động", "Active"),
            CropSeasonStatus::Paused => labels!(locale, "Tạm dừng", "Paused"),
            CropSeasonStatus::Completed => labels!(locale, "Hoàn thành", "Completed"),
            CropSeasonStatus::Cancelled => labels!(locale, "Đã hủy", "Cancelled"),
            CropSeasonStatus::Unknown => labels!(locale, "Không xác định", "Unknown"),
        }
    }

    fn color(&self) -> &'static str {
        match self {
            CropSeasonStatus::Active => "#43A047",
            CropSeasonStatus::Paused => "#FFA000",
            CropSeasonStatus::Completed => "#1E88E5",
            CropSeasonStatus::Cancelled => "#E53935",
            CropSeasonStatus::Unknown => NEUTRAL,
        }
    }
}

impl StatusDisplay for ProcessingBatchStatus {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            ProcessingBatchStatus::NotStarted => labels!(locale, "Chưa bắt đầu", "Not started"),
            ProcessingBatchStatus::InProgress => labels!(locale, "Đang sơ chế", "In progress"),
            ProcessingBatchStatus::Completed => labels!(locale, "Hoàn thành", "Completed"),
            ProcessingBatchStatus::AwaitingEvaluation => {
                labels!(locale, "Chờ đánh giá", "Awaiting evaluation")
            }
            ProcessingBatchStatus::Unknown => labels!(locale, "Không xác định", "Unknown"),
        }
    }

    fn color(&self) -> &'static str {
        match self {
            ProcessingBatchStatus::NotStarted => "#757575",
            ProcessingBatchStatus::InProgress => "#1E88E5",
            ProcessingBatchStatus::Completed => "#43A047",
            ProcessingBatchStatus::AwaitingEvaluation => "#FFA000",
            ProcessingBatchStatus::Unknown => NEUTRAL,
        }
    }
}

impl StatusDisplay for InboundRequestStatus {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            InboundRequestStatus::Pending => labels!(locale, "Chờ duyệt", "Pending"),
            InboundRequestStatus::Approved => labels!(locale, "Đã duyệt", "Approved"),
            InboundRequestStatus::Rejected => labels!(locale, "Từ chối", "Rejected"),
            InboundRequestStatus::Completed => labels!(locale, "Đã nhập kho", "Completed"),
            InboundRequestStatus::Cancelled => labels!(locale, "Đã hủy", "Cancelled"),
            InboundRequestStatus::Unknown => labels!(locale, "Không xác định", "Unknown"),
        }
    }

    fn color(&self) -> &'static str {
        match self {
            InboundRequestStatus::Pending => "#FFA000",
            InboundRequestStatus::Approved => "#1E88E5",
            InboundRequestStatus::Rejected => "#E53935",
            InboundRequestStatus::Completed => "#43A047",
            InboundRequestStatus::Cancelled => "#757575",
            InboundRequestStatus::Unknown => NEUTRAL,
        }
    }
}

impl StatusDisplay for OrderStatus {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            OrderStatus::Pending => labels!(locale, "Chờ xử lý", "Pending"),
            OrderStatus::Preparing => labels!(locale, "Đang chuẩn bị", "Preparing"),
            OrderStatus::Shipping => labels!(locale, "Đang giao hàng", "Shipping"),
            OrderStatus::Delivered => labels!(locale, "Đã giao", "Delivered"),
            OrderStatus::Cancelled => labels!(locale, "Đã hủy", "Cancelled"),
            OrderStatus::Unknown => labels!(locale, "Không xác định", "Unknown"),
        }
    }

    fn color(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "#FFA000",
            OrderStatus::Preparing => "#6D4C41",
            OrderStatus::Shipping => "#1E88E5",
            OrderStatus::Delivered => "#43A047",
            OrderStatus::Cancelled => "#757575",
            OrderStatus::Unknown => NEUTRAL,
        }
    }
}

impl StatusDisplay for SeverityLevel {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            SeverityLevel::Low => labels!(locale, "Thấp", "Low"),
            SeverityLevel::Medium => labels!(locale, "Trung bình", "Medium"),
            SeverityLevel::High => labels!(locale, "Cao", "High"),
            SeverityLevel::Unknown => labels!(locale, "Không xác định", "Unknown"),
        }
    }

    fn color(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "#43A047",
            SeverityLevel::Medium => "#FFA000",
            SeverityLevel::High => "#E53935",
            SeverityLevel::Unknown => NEUTRAL,
        }
    }
}

impl StatusDisplay for UserRole {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            UserRole::Admin => labels!(locale, "Quản trị viên", "Administrator"),
            UserRole::BusinessManager => labels!(locale, "Quản lý doanh nghiệp", "Business manager"),
            UserRole::BusinessStaff => labels!(locale, "Nhân viên doanh nghiệp", "Business staff"),
            UserRole::Farmer => labels!(locale, "Nông dân", "Farmer"),
            UserRole::AgriculturalExpert => labels!(locale, "Chuyên gia nông nghiệp", "Agricultural expert"),
            UserRole::DeliveryStaff => labels!(locale, "Nhân viên giao hàng", "Delivery staff"),
            UserRole::Unknown => labels!(locale, "Không xác định", "Unknown"),
        }
    }

    fn color(&self) -> &'static str {
        match self {
            UserRole::Admin => "#37474F",
            UserRole::BusinessManager => "#6D4C41",
            UserRole::BusinessStaff => "#8D6E63",
            UserRole::Farmer => "#43A047",
            UserRole::AgriculturalExpert => "#00897B",
            UserRole::DeliveryStaff => "#1E88E5",
            UserRole::Unknown => NEUTRAL,
        }
    }
}

/// Localized name of a crop stage code; unknown codes are echoed back.
pub fn stage_label(code: &str, locale: Locale) -> String {
    let label = match code.to_ascii_uppercase().as_str() {
        "PLANTING" => labels!(locale, "Gieo trồng", "Planting"),
        "FLOWERING" => labels!(locale, "Ra hoa", "Flowering"),
        "FRUITING" => labels!(locale, "Kết trái", "Fruiting"),
        "RIPENING" => labels!(locale, "Chín", "Ripening"),
        "HARVESTING" => labels!(locale, "Thu hoạch", "Harvesting"),
        _ => return code.to_string(),
    };
    label.to_string()
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_datetime(value: Option<NaiveDateTime>) -> String {
    value
        .map(|v| v.format("%H:%M %d/%m/%Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Groups the integer digits of `digits` with `separator` every three places.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn separators(locale: Locale) -> (char, char) {
    match locale {
        Locale::Vi => ('.', ','),
        Locale::En => (',', '.'),
    }
}

/// Formats an amount of đồng, rounded to the nearest whole unit.
pub fn format_currency(amount: Decimal, locale: Locale) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().trunc().to_string();
    let (thousands, _) = separators(locale);
    let grouped = group_thousands(&digits, thousands);
    let sign = if negative { "-" } else { "" };
    match locale {
        Locale::Vi => format!("{}{} ₫", sign, grouped),
        Locale::En => format!("{}VND {}", sign, grouped),
    }
}

/// Formats a quantity with at most two decimals, trailing zeros trimmed.
pub fn format_quantity(value: f64, unit: &str, locale: Locale) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let Some(rounded) = Decimal::from_f64_retain(value).map(|d| {
        d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }) else {
        return PLACEHOLDER.to_string();
    };
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };
    let (thousands, decimal) = separators(locale);
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part, thousands));
    if let Some(frac) = frac_part {
        out.push(decimal);
        out.push_str(&frac);
    }
    let unit = unit.trim();
    if unit.is_empty() {
        out
    } else {
        format!("{} {}", out, unit)
    }
}
