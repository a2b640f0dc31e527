use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entry path used to establish the starting valuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingMode {
    /// The owner declares what they paid and when.
    #[default]
    #[serde(rename = "self")]
    SelfReported,
    /// The price is looked up from the address and property metadata.
    #[serde(rename = "lookup")]
    Lookup,
}

impl PricingMode {
    pub const fn ordered() -> [Self; 2] {
        [Self::SelfReported, Self::Lookup]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::SelfReported => "self",
            Self::Lookup => "lookup",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SelfReported => "I know my price",
            Self::Lookup => "Find my price for me",
        }
    }
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PricingMode {
    type Err = FieldParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "self" => Ok(Self::SelfReported),
            "lookup" => Ok(Self::Lookup),
            other => Err(FieldParseError::UnknownMode(other.to_string())),
        }
    }
}

/// Which part of the form a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    Mode(PricingMode),
    Shared,
}

impl FieldGroup {
    pub fn visible_in(self, mode: PricingMode) -> bool {
        match self {
            FieldGroup::Mode(owner) => owner == mode,
            FieldGroup::Shared => true,
        }
    }
}

/// Every input on the intake form, keyed by its payload name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    ReportedPrice,
    PurchaseMonth,
    Country,
    StateRegion,
    City,
    Address1,
    Address2,
    ZipCode,
    SquareFeet,
    HouseType,
    Beds,
    Baths,
    YearOfPurchase,
    Renovations,
}

impl FormField {
    pub const SELF_REPORTED: [Self; 2] = [Self::ReportedPrice, Self::PurchaseMonth];

    pub const LOOKUP: [Self; 11] = [
        Self::Country,
        Self::StateRegion,
        Self::City,
        Self::Address1,
        Self::Address2,
        Self::ZipCode,
        Self::SquareFeet,
        Self::HouseType,
        Self::Beds,
        Self::Baths,
        Self::YearOfPurchase,
    ];

    pub const SHARED: [Self; 1] = [Self::Renovations];

    /// Every field in form order: self-reported, lookup, then shared.
    pub const ALL: [Self; 14] = [
        Self::ReportedPrice,
        Self::PurchaseMonth,
        Self::Country,
        Self::StateRegion,
        Self::City,
        Self::Address1,
        Self::Address2,
        Self::ZipCode,
        Self::SquareFeet,
        Self::HouseType,
        Self::Beds,
        Self::Baths,
        Self::YearOfPurchase,
        Self::Renovations,
    ];

    pub const fn group(self) -> FieldGroup {
        match self {
            Self::ReportedPrice | Self::PurchaseMonth => FieldGroup::Mode(PricingMode::SelfReported),
            Self::Renovations => FieldGroup::Shared,
            _ => FieldGroup::Mode(PricingMode::Lookup),
        }
    }

    /// Fields owned by `mode`, in form order. Shared fields are not included.
    pub fn for_mode(mode: PricingMode) -> &'static [Self] {
        match mode {
            PricingMode::SelfReported => &Self::SELF_REPORTED,
            PricingMode::Lookup => &Self::LOOKUP,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::ReportedPrice => "reportedPrice",
            Self::PurchaseMonth => "purchaseMonth",
            Self::Country => "country",
            Self::StateRegion => "stateRegion",
            Self::City => "city",
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::ZipCode => "zipCode",
            Self::SquareFeet => "squareFeet",
            Self::HouseType => "houseType",
            Self::Beds => "beds",
            Self::Baths => "baths",
            Self::YearOfPurchase => "yearOfPurchase",
            Self::Renovations => "renovations",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ReportedPrice => "Price paid",
            Self::PurchaseMonth => "Year & month",
            Self::Country => "Country",
            Self::StateRegion => "State / Region",
            Self::City => "City",
            Self::Address1 => "Address",
            Self::Address2 => "Apt / Unit",
            Self::ZipCode => "Zip code",
            Self::SquareFeet => "Square feet",
            Self::HouseType => "House type",
            Self::Beds => "Beds",
            Self::Baths => "Baths",
            Self::YearOfPurchase => "Year of purchase",
            Self::Renovations => "Renovations / Notes (optional)",
        }
    }

    pub const fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::ReportedPrice => Some("e.g. 525000"),
            Self::PurchaseMonth | Self::HouseType => None,
            Self::Country => Some("United States"),
            Self::StateRegion => Some("CA"),
            Self::City => Some("San Francisco"),
            Self::Address1 => Some("123 Main St"),
            Self::Address2 => Some("Unit 4B"),
            Self::ZipCode => Some("94103"),
            Self::SquareFeet => Some("1750"),
            Self::Beds => Some("3"),
            Self::Baths => Some("2"),
            Self::YearOfPurchase => Some("2018"),
            Self::Renovations => {
                Some("Describe recent renovations, upgrades, or known issues...")
            }
        }
    }

    pub const fn input_kind(self) -> InputKind {
        match self {
            Self::ReportedPrice | Self::SquareFeet | Self::Beds | Self::Baths => InputKind::Number,
            Self::YearOfPurchase => InputKind::Number,
            Self::PurchaseMonth => InputKind::Month,
            Self::HouseType => InputKind::Select,
            Self::Renovations => InputKind::TextArea,
            _ => InputKind::Text,
        }
    }

    /// Required inputs block submission while blank.
    pub const fn is_required(self) -> bool {
        matches!(self, Self::ReportedPrice | Self::PurchaseMonth)
    }

    pub const fn initial_value(self) -> &'static str {
        match self {
            Self::Country => DEFAULT_COUNTRY,
            Self::HouseType => HOUSE_TYPES[0],
            _ => "",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::HouseType => &HOUSE_TYPES,
            _ => &[],
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = FieldParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        FormField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FieldParseError::UnknownField(trimmed.to_string()))
    }
}

pub const DEFAULT_COUNTRY: &str = "United States";

pub const HOUSE_TYPES: [&str; 5] = [
    "Single Family",
    "Condo",
    "Townhouse",
    "Multi Family",
    "Manufactured",
];

/// Presentation hint for the view layer; the store itself only holds text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Number,
    Month,
    Select,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldParseError {
    #[error("unknown pricing mode '{0}', expected 'self' or 'lookup'")]
    UnknownMode(String),
    #[error("unknown form field '{0}'")]
    UnknownField(String),
    #[error("expected FIELD=VALUE, got '{0}'")]
    MissingAssignment(String),
}

/// Splits a `field=value` assignment as typed on the command line.
pub fn parse_assignment(raw: &str) -> Result<(FormField, String), FieldParseError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| FieldParseError::MissingAssignment(raw.to_string()))?;
    let field = name.parse::<FormField>()?;
    Ok((field, value.to_string()))
}
