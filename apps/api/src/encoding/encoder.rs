//! Encoding of raw form answers into the feature frame the scoring backend
//! expects. Pure and infallible: every malformed or missing answer degrades
//! to the 0 baseline for its slot instead of rejecting the submission.

use std::collections::HashMap;

use crate::encoding::schema::FormSchema;

/// A single-row numeric frame: column names and values in training order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    pub columns: &'static [&'static str],
    pub values: Vec<f64>,
}

impl FeatureFrame {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Encodes raw form answers (keyed by display label) into the fixed-order
/// feature frame.
///
/// Categorical answers resolve through the display map and the field's
/// codebook; unrecognized or absent text encodes as 0. Numeric answers parse
/// as `f64`; parse failures encode as 0.0. Schema slots with no submitted
/// label default to 0.
pub fn encode(schema: &FormSchema, answers: &HashMap<String, String>) -> FeatureFrame {
    let mut by_column: HashMap<&'static str, f64> = HashMap::new();

    for field in schema.dropdowns() {
        let column = match schema.feature_for_display(field.label) {
            Some(column) => column,
            None => continue,
        };
        let code = answers
            .get(field.label)
            .map(|text| field.code_for(text))
            .unwrap_or(0);
        by_column.insert(column, code as f64);
    }

    for label in schema.number_inputs() {
        let column = match schema.feature_for_display(label) {
            Some(column) => column,
            None => continue,
        };
        let value = answers
            .get(*label)
            .and_then(|text| text.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        by_column.insert(column, value);
    }

    let values = schema
        .feature_names()
        .iter()
        .map(|column| by_column.get(column).copied().unwrap_or(0.0))
        .collect();

    FeatureFrame {
        columns: schema.feature_names(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_submission_yields_all_zero_frame() {
        let schema = FormSchema::new();
        let frame = encode(&schema, &HashMap::new());
        assert_eq!(frame.len(), 19);
        assert!(frame.values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_columns_are_in_training_order() {
        let schema = FormSchema::new();
        let frame = encode(&schema, &HashMap::new());
        assert_eq!(frame.columns, &schema.feature_names()[..]);
    }

    #[test]
    fn test_unknown_dropdown_text_encodes_as_zero() {
        let schema = FormSchema::new();
        let frame = encode(&schema, &answers(&[("Gender", "Nonbinary Penguin")]));
        assert_eq!(frame.values[1], 0.0);
    }

    #[test]
    fn test_unparseable_number_encodes_as_zero() {
        let schema = FormSchema::new();
        let frame = encode(&schema, &answers(&[("Age", "twenty five")]));
        assert_eq!(frame.values[0], 0.0);
    }

    #[test]
    fn test_numbers_parse_with_surrounding_whitespace() {
        let schema = FormSchema::new();
        let frame = encode(&schema, &answers(&[("Daily Water Intake", " 2.5 ")]));
        assert_eq!(frame.values[15], 2.5);
    }

    #[test]
    fn test_dropdown_answers_land_in_their_slots() {
        let schema = FormSchema::new();
        let frame = encode(
            &schema,
            &answers(&[
                ("Work Environment", "Corporate Job"),
                ("Birth Month", "March"),
                ("Motivation for Career Choice", "Passion"),
            ]),
        );
        assert_eq!(frame.values[7], 3.0);
        assert_eq!(frame.values[16], 3.0);
        assert_eq!(frame.values[13], 2.0);
    }

    #[test]
    fn test_unmapped_form_keys_are_ignored() {
        let schema = FormSchema::new();
        let frame = encode(&schema, &answers(&[("Favourite Dinosaur", "Triceratops")]));
        assert!(frame.values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_postgraduate_female_age_25_round_trip() {
        let schema = FormSchema::new();
        let frame = encode(
            &schema,
            &answers(&[
                ("Gender", "Female"),
                ("Highest Education Level", "Postgraduate"),
                ("Age", "25"),
            ]),
        );
        let expected = [
            25.0, 1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            0.0, 0.0,
        ];
        assert_eq!(frame.values, expected);
    }
}
