//! Form model: one numeric input per feature, payload building and the
//! sample/reset helpers.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;

/// Prefix prepended to a feature name to form its input id.
pub const FIELD_ID_PREFIX: &str = "f-";

/// Demo values written by [`FormState::fill_sample`].
pub const SAMPLE_VALUES: [(&str, f64); 8] = [
    ("agg", 2.0),
    ("col", 1.0),
    ("nb_usagers", 2.0),
    ("nb_vehicules", 1.0),
    ("v1", 50.0),
    ("plan", 1.0),
    ("situ", 1.0),
    ("vma", 50.0),
];

/// Input id for `feature`.
pub fn field_id(feature: &str) -> String {
    format!("{FIELD_ID_PREFIX}{feature}")
}

/// Demo value for `feature`, `0` when it has none.
pub fn sample_value(feature: &str) -> f64 {
    SAMPLE_VALUES
        .iter()
        .find(|(name, _)| *name == feature)
        .map(|(_, value)| *value)
        .unwrap_or(0.0)
}

/// Parse input text as a number; blank, non-numeric and non-finite text is `None`.
pub fn parse_input(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// A labeled numeric input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub feature: String,
    pub id: String,
    /// Raw text currently in the input.
    pub value: String,
}

impl FormField {
    fn new(feature: &str) -> Self {
        Self {
            feature: feature.to_string(),
            id: field_id(feature),
            value: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    pub fn from_features(features: &[String]) -> Self {
        let mut form = Self::default();
        form.build(features);
        form
    }

    /// Replace every field with one empty input per feature, in order.
    /// A repeated name keeps only its first input.
    pub fn build(&mut self, features: &[String]) {
        self.fields.clear();
        let mut seen = HashSet::new();
        self.fields.extend(
            features
                .iter()
                .filter(|feature| seen.insert(feature.as_str()))
                .map(|feature| FormField::new(feature)),
        );
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [FormField] {
        &mut self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|field| field.id == id)
    }

    /// Write `value` into the input with `id`. Returns `false` for unknown ids.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.field_mut(id) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Feature names in display order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.feature.as_str())
    }

    /// Snapshot the current values as a submission payload, one key per
    /// feature; the first input for a name wins.
    pub fn payload(&self) -> Payload {
        let mut seen = HashSet::new();
        Payload {
            entries: self
                .fields
                .iter()
                .filter(|field| seen.insert(field.feature.as_str()))
                .map(|field| (field.feature.clone(), parse_input(&field.value)))
                .collect(),
        }
    }

    pub fn fill_sample(&mut self) {
        for field in &mut self.fields {
            field.value = sample_value(&field.feature).to_string();
        }
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}

/// Flat JSON object of feature name to number or `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    entries: Vec<(String, Option<f64>)>,
}

impl Payload {
    /// `None` when the feature is not in the payload, `Some(None)` when it is null.
    pub fn get(&self, feature: &str) -> Option<Option<f64>> {
        self.entries
            .iter()
            .find(|(name, _)| name == feature)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.entries.iter().filter(|(_, value)| value.is_none()).count()
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
