use super::domain::PricingMode;
use super::fields::{LookupModeFields, SelfModeFields, SharedFields};
use super::files::FileSelection;
use serde::{Deserialize, Serialize};

/// Request handed to the valuation service, tagged by `pricingMode`.
///
/// Each variant carries only its own mode's inputs, so a payload can never
/// mix self-reported and lookup fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pricingMode")]
pub enum ValuationPayload {
    #[serde(rename = "self")]
    SelfReported(SelfReportedPayload),
    #[serde(rename = "lookup")]
    Lookup(LookupPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfReportedPayload {
    pub reported_price: String,
    pub purchase_month: String,
    pub renovations: String,
    pub zip_file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupPayload {
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
    pub renovations: String,
    pub zip_file_name: Option<String>,
}

impl ValuationPayload {
    /// Builds the request for `mode`. Never fails and never validates;
    /// callers withhold invocation until required inputs are present.
    pub fn build(
        mode: PricingMode,
        self_fields: &SelfModeFields,
        lookup_fields: &LookupModeFields,
        shared: &SharedFields,
        file: Option<&FileSelection>,
    ) -> Self {
        let renovations = shared.renovations_notes.clone();
        let zip_file_name = file.map(|selection| selection.name.clone());

        match mode {
            PricingMode::SelfReported => Self::SelfReported(SelfReportedPayload {
                reported_price: self_fields.reported_price.clone(),
                purchase_month: self_fields.purchase_month.clone(),
                renovations,
                zip_file_name,
            }),
            PricingMode::Lookup => Self::Lookup(LookupPayload {
                country: lookup_fields.country.clone(),
                state_region: lookup_fields.state_region.clone(),
                city: lookup_fields.city.clone(),
                address1: lookup_fields.address1.clone(),
                address2: lookup_fields.address2.clone(),
                zip_code: lookup_fields.zip_code.clone(),
                square_feet: lookup_fields.square_feet.clone(),
                house_type: lookup_fields.house_type.clone(),
                beds: lookup_fields.beds.clone(),
                baths: lookup_fields.baths.clone(),
                year_of_purchase: lookup_fields.year_of_purchase.clone(),
                renovations,
                zip_file_name,
            }),
        }
    }

    pub fn pricing_mode(&self) -> PricingMode {
        match self {
            Self::SelfReported(_) => PricingMode::SelfReported,
            Self::Lookup(_) => PricingMode::Lookup,
        }
    }

    pub fn zip_file_name(&self) -> Option<&str> {
        match self {
            Self::SelfReported(payload) => payload.zip_file_name.as_deref(),
            Self::Lookup(payload) => payload.zip_file_name.as_deref(),
        }
    }

    pub fn renovations(&self) -> &str {
        match self {
            Self::SelfReported(payload) => &payload.renovations,
            Self::Lookup(payload) => &payload.renovations,
        }
    }
}

/// JSON keys a payload of `mode` carries, `pricingMode` included.
pub fn schema_keys(mode: PricingMode) -> &'static [&'static str] {
    match mode {
        PricingMode::SelfReported => &[
            "pricingMode",
            "reportedPrice",
            "purchaseMonth",
            "renovations",
            "zipFileName",
        ],
        PricingMode::Lookup => &[
            "pricingMode",
            "country",
            "stateRegion",
            "city",
            "address1",
            "address2",
            "zipCode",
            "squareFeet",
            "houseType",
            "beds",
            "baths",
            "yearOfPurchase",
            "renovations",
            "zipFileName",
        ],
    }
}
