// Typed form validation for listing and seller-message drafts
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_YEAR: u16 = 1900;
pub const MAX_DESCRIPTION_CHARS: usize = 2000;
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Raw form input, exactly as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingDraft {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub mileage: String,
    pub description: String,
    pub phone: String,
}

/// A draft that passed validation, ready to hand to the backend store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewListing {
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub price: f64,
    pub mileage: u32,
    pub description: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageDraft {
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Required,
    NotANumber,
    OutOfRange,
    TooLong,
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

impl FieldError {
    fn new(field: &'static str, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.field, self.kind)
    }
}

/// Validates every field and reports all failures at once.
pub fn validate_listing(
    draft: &ListingDraft,
    current_year: u16,
) -> Result<NewListing, Vec<FieldError>> {
    let mut errors = Vec::new();

    let brand = required(&mut errors, "brand", &draft.brand);
    let model = required(&mut errors, "model", &draft.model);

    let year = parse_number::<u16>(&mut errors, "year", &draft.year).and_then(|y| {
        if (MIN_YEAR..=current_year.saturating_add(1)).contains(&y) {
            Some(y)
        } else {
            errors.push(FieldError::new("year", FieldErrorKind::OutOfRange));
            None
        }
    });

    let price = parse_number::<f64>(&mut errors, "price", &draft.price).and_then(|p| {
        if p.is_finite() && p > 0.0 {
            Some(p)
        } else {
            errors.push(FieldError::new("price", FieldErrorKind::OutOfRange));
            None
        }
    });

    // Mileage may be left blank for new cars.
    let mileage = if draft.mileage.trim().is_empty() {
        Some(0)
    } else {
        parse_number::<u32>(&mut errors, "mileage", &draft.mileage)
    };

    let description = draft.description.trim().to_string();
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.push(FieldError::new("description", FieldErrorKind::TooLong));
    }

    let phone = draft.phone.trim();
    let phone = if phone.is_empty() {
        None
    } else if is_valid_phone(phone) {
        Some(phone.to_string())
    } else {
        errors.push(FieldError::new("phone", FieldErrorKind::InvalidFormat));
        None
    };

    match (brand, model, year, price, mileage) {
        (Some(brand), Some(model), Some(year), Some(price), Some(mileage)) if errors.is_empty() => {
            Ok(NewListing {
                brand,
                model,
                year,
                price,
                mileage,
                description,
                phone,
            })
        }
        _ => Err(errors),
    }
}

pub fn validate_message(draft: &MessageDraft) -> Result<String, Vec<FieldError>> {
    let body = draft.body.trim();
    if body.is_empty() {
        return Err(vec![FieldError::new("body", FieldErrorKind::Required)]);
    }
    if body.chars().count() > MAX_MESSAGE_CHARS {
        return Err(vec![FieldError::new("body", FieldErrorKind::TooLong)]);
    }
    Ok(body.to_string())
}

fn required(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, FieldErrorKind::Required));
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_number<T: std::str::FromStr>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, FieldErrorKind::Required));
        return None;
    }
    // Thousands separators are common in typed prices ("35 000").
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.parse::<T>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(FieldError::new(field, FieldErrorKind::NotANumber));
            None
        }
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    digits.chars().all(|c| c.is_ascii_digit()) && (7..=15).contains(&digits.len())
}
