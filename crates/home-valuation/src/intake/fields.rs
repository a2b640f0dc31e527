use super::domain::{FormField, PricingMode};
use serde::{Deserialize, Serialize};

/// Values typed in "I know my price" mode. Kept as raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfModeFields {
    pub reported_price: String,
    /// Expected as `YYYY-MM`.
    pub purchase_month: String,
}

/// Address and property metadata used for the price lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupModeFields {
    pub country: String,
    pub state_region: String,
    pub city: String,
    pub address1: String,
    pub address2: String,
    pub zip_code: String,
    pub square_feet: String,
    pub house_type: String,
    pub beds: String,
    pub baths: String,
    pub year_of_purchase: String,
}

impl Default for LookupModeFields {
    fn default() -> Self {
        Self {
            country: FormField::Country.initial_value().to_string(),
            state_region: String::new(),
            city: String::new(),
            address1: String::new(),
            address2: String::new(),
            zip_code: String::new(),
            square_feet: String::new(),
            house_type: FormField::HouseType.initial_value().to_string(),
            beds: String::new(),
            baths: String::new(),
            year_of_purchase: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedFields {
    pub renovations_notes: String,
}

/// Holds every input of both modes at once, so toggling modes loses nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFieldStore {
    self_reported: SelfModeFields,
    lookup: LookupModeFields,
    shared: SharedFields,
}

impl FormFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts any text for any field; no coercion happens here.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::ReportedPrice => &self.self_reported.reported_price,
            FormField::PurchaseMonth => &self.self_reported.purchase_month,
            FormField::Country => &self.lookup.country,
            FormField::StateRegion => &self.lookup.state_region,
            FormField::City => &self.lookup.city,
            FormField::Address1 => &self.lookup.address1,
            FormField::Address2 => &self.lookup.address2,
            FormField::ZipCode => &self.lookup.zip_code,
            FormField::SquareFeet => &self.lookup.square_feet,
            FormField::HouseType => &self.lookup.house_type,
            FormField::Beds => &self.lookup.beds,
            FormField::Baths => &self.lookup.baths,
            FormField::YearOfPurchase => &self.lookup.year_of_purchase,
            FormField::Renovations => &self.shared.renovations_notes,
        }
    }

    /// Current values for the fields owned by `mode`, in form order.
    pub fn fields(&self, mode: PricingMode) -> Vec<(FormField, &str)> {
        FormField::for_mode(mode)
            .iter()
            .map(|field| (*field, self.field(*field)))
            .collect()
    }

    pub fn self_reported(&self) -> &SelfModeFields {
        &self.self_reported
    }

    pub fn lookup(&self) -> &LookupModeFields {
        &self.lookup
    }

    pub fn shared(&self) -> &SharedFields {
        &self.shared
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::ReportedPrice => &mut self.self_reported.reported_price,
            FormField::PurchaseMonth => &mut self.self_reported.purchase_month,
            FormField::Country => &mut self.lookup.country,
            FormField::StateRegion => &mut self.lookup.state_region,
            FormField::City => &mut self.lookup.city,
            FormField::Address1 => &mut self.lookup.address1,
            FormField::Address2 => &mut self.lookup.address2,
            FormField::ZipCode => &mut self.lookup.zip_code,
            FormField::SquareFeet => &mut self.lookup.square_feet,
            FormField::HouseType => &mut self.lookup.house_type,
            FormField::Beds => &mut self.lookup.beds,
            FormField::Baths => &mut self.lookup.baths,
            FormField::YearOfPurchase => &mut self.lookup.year_of_purchase,
            FormField::Renovations => &mut self.shared.renovations_notes,
        }
    }
}
