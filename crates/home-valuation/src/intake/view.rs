use super::domain::{FormField, InputKind, PricingMode};
use super::fields::FormFieldStore;
use serde::Serialize;

/// One input the presentation layer should render for the active mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView<'a> {
    pub field: FormField,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub value: &'a str,
    pub required: bool,
    pub input: InputKind,
    #[serde(skip_serializing_if = "has_no_options")]
    pub options: &'static [&'static str],
}

fn has_no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

/// Mode inputs in form order followed by the shared inputs.
pub fn visible_fields(mode: PricingMode, store: &FormFieldStore) -> Vec<FieldView<'_>> {
    FormField::ALL
        .iter()
        .filter(|field| field.group().visible_in(mode))
        .map(|field| FieldView {
            field: *field,
            label: field.label(),
            placeholder: field.placeholder(),
            value: store.field(*field),
            required: field.is_required(),
            input: field.input_kind(),
            options: field.options(),
        })
        .collect()
}
