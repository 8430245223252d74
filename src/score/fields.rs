use crate::types::profile::ProfileSnapshot;
use serde_json::Value;

/// Scalar profile fields that take part in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    StreetAddress,
    City,
    StateProvince,
    ZipCode,
    Country,
    Position,
    Department,
    Bio,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::StreetAddress => "street_address",
            Field::City => "city",
            Field::StateProvince => "state_province",
            Field::ZipCode => "zip_code",
            Field::Country => "country",
            Field::Position => "position",
            Field::Department => "department",
            Field::Bio => "bio",
        }
    }

    pub fn value(self, profile: &ProfileSnapshot) -> Option<&str> {
        let value = match self {
            Field::FirstName => &profile.first_name,
            Field::LastName => &profile.last_name,
            Field::Email => &profile.email,
            Field::Phone => &profile.phone,
            Field::StreetAddress => &profile.street_address,
            Field::City => &profile.city,
            Field::StateProvince => &profile.state_province,
            Field::ZipCode => &profile.zip_code,
            Field::Country => &profile.country,
            Field::Position => &profile.position,
            Field::Department => &profile.department,
            Field::Bio => &profile.bio,
        };
        value.as_deref()
    }
}

pub const BASIC_FIELDS: [Field; 3] = [Field::FirstName, Field::LastName, Field::Email];

pub const ADDRESS_FIELDS: [Field; 5] = [
    Field::StreetAddress,
    Field::City,
    Field::StateProvince,
    Field::ZipCode,
    Field::Country,
];

pub const PROFESSIONAL_FIELDS: [Field; 2] = [Field::Position, Field::Department];

pub fn is_present(value: Option<&str>) -> bool {
    value.map(|text| !text.trim().is_empty()).unwrap_or(false)
}

pub fn list_len(value: Option<&Vec<Value>>) -> usize {
    value.map(Vec::len).unwrap_or(0)
}

pub fn count_present(profile: &ProfileSnapshot, fields: &[Field]) -> usize {
    fields
        .iter()
        .filter(|field| is_present(field.value(profile)))
        .count()
}

pub fn absent_names(profile: &ProfileSnapshot, fields: &[Field]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|field| !is_present(field.value(profile)))
        .map(|field| field.name())
        .collect()
}
