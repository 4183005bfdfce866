//! Booking form validation and the WhatsApp hand-off message.
//!
//! A submission is read from the form, validated against the required
//! field set, rendered into the fixed message template, and discarded.
//! Nothing here is stored.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use std::collections::BTreeMap;

use crate::config::{Strings, WhatsAppConfig};

/// Visibility of the booking modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Form controls of the booking form, named by their element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BookingField {
    Name,
    Phone,
    CarType,
    Notes,
}

impl BookingField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Phone, Self::CarType, Self::Notes];
    pub const REQUIRED: [Self; 3] = [Self::Name, Self::Phone, Self::CarType];

    /// Element id and form-data key of the control.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::CarType => "car-type",
            Self::Notes => "notes",
        }
    }

    /// Id of the inline error slot rendered next to the control.
    pub fn error_slot_id(self) -> String {
        format!("{}-error", self.id())
    }
}

/// Flat key/value view of the submitted form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, field: BookingField, value: &str) -> Self {
        self.insert(field.id(), value);
        self
    }

    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.0.get(field.id()).map(String::as_str)
    }

    /// Trimmed value, or `None` when missing or blank.
    pub fn filled(&self, field: BookingField) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }
}

/// A validated booking request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub car_type: String,
    pub notes: Option<String>,
}

/// Outcome of checking one required field, in `BookingField::REQUIRED` order.
pub type FieldCheck = (BookingField, bool);

/// Per-field validity of the required fields.
pub fn check_required(values: &FormValues) -> Vec<FieldCheck> {
    BookingField::REQUIRED
        .iter()
        .map(|&field| (field, values.filled(field).is_some()))
        .collect()
}

/// Validate a submission. On failure returns every blank required field.
pub fn validate(values: &FormValues) -> Result<BookingRequest, Vec<BookingField>> {
    let missing: Vec<BookingField> = check_required(values)
        .into_iter()
        .filter_map(|(field, ok)| (!ok).then_some(field))
        .collect();

    match (
        values.filled(BookingField::Name),
        values.filled(BookingField::Phone),
        values.filled(BookingField::CarType),
    ) {
        (Some(name), Some(phone), Some(car_type)) if missing.is_empty() => Ok(BookingRequest {
            name: name.to_owned(),
            phone: phone.to_owned(),
            car_type: car_type.to_owned(),
            notes: values.filled(BookingField::Notes).map(str::to_owned),
        }),
        _ => Err(missing),
    }
}

impl BookingRequest {
    /// Render the fixed WhatsApp message. The notes block is omitted
    /// entirely when there are no notes.
    pub fn message(&self, strings: &Strings) -> String {
        let mut out = format!(
            "*{header}*\n\n*{customer}:*\n{name_label}: {name}\n{phone_label}: {phone}\n\n*{car_heading}:*\n{car}\n\n",
            header = strings.booking_header,
            customer = strings.customer_heading,
            name_label = strings.name_label,
            name = self.name,
            phone_label = strings.phone_label,
            phone = self.phone,
            car_heading = strings.car_heading,
            car = self.car_type,
        );
        if let Some(notes) = &self.notes {
            out.push_str(&format!("*{}:*\n{notes}\n\n", strings.notes_heading));
        }
        out.push_str(&strings.closing_line);
        out
    }
}

/// Deep link that opens a chat with `message` pre-filled.
pub fn whatsapp_link(whatsapp: &WhatsAppConfig, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        whatsapp.base_url.trim_end_matches('/'),
        whatsapp.recipient,
        urlencoding::encode(message)
    )
}

/// Index of the first select option whose visible text equals `car_type`.
pub fn matching_option(options: &[String], car_type: &str) -> Option<usize> {
    if car_type.is_empty() {
        return None;
    }
    options.iter().position(|text| text == car_type)
}
