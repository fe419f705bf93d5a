//! Feature schema for the career classifier.
//!
//! The column names below are frozen to the schema the scaler and classifier
//! were trained on, misspellings included ("Prefer4", the "(in Litres)"
//! suffix). The display map reconciles the form's labels with those columns.
//! It is a hand-authored table; do not normalize either side, since the
//! trained artifacts trust column position and the form copy drifted from the
//! training columns long ago.

use std::collections::HashMap;

use serde::Serialize;

use crate::encoding::codebook::{DropdownField, DROPDOWN_FIELDS};

/// Training-time column names, in training-time order. Order is load-bearing:
/// once `transform` runs, the scoring backend trusts position, not name.
pub const FEATURE_NAMES: [&str; 19] = [
    "Age",
    "Gender",
    "Highest Education Level",
    "Prefer4 Subjects in Highschool/College",
    "Academic Performance (CGPA/Percentage)",
    "Participation in Extracurricular Activities",
    "Previous Work Experience (If Any)",
    "Prefer4 Work Environment",
    "Risk-Taking Ability",
    "Leadership Experience",
    "Networking & Social Skills",
    "Tech-Savviness",
    "Financial Stability - self/family (1 is low income and 10 is high income)",
    "Motivation for Career Choice",
    "Favorite Color",
    "Daily Water Intake (in Litres)",
    "Birth Month",
    "Prefer4 Music Genre",
    "Number of Siblings",
];

/// Form label -> training-time column name.
const DISPLAY_TO_FEATURE: &[(&str, &str)] = &[
    ("Age", "Age"),
    ("Gender", "Gender"),
    ("Highest Education Level", "Highest Education Level"),
    (
        "Prefered Subject in Highschool/College",
        "Prefer4 Subjects in Highschool/College",
    ),
    (
        "Academic Performance",
        "Academic Performance (CGPA/Percentage)",
    ),
    (
        "Extracurricular Activities",
        "Participation in Extracurricular Activities",
    ),
    ("Work Experience", "Previous Work Experience (If Any)"),
    ("Work Environment", "Prefer4 Work Environment"),
    ("Risk-Taking Ability", "Risk-Taking Ability"),
    ("Leadership Experience", "Leadership Experience"),
    ("Networking & Social Skills", "Networking & Social Skills"),
    ("Tech-Savviness", "Tech-Savviness"),
    (
        "Financial Stability",
        "Financial Stability - self/family (1 is low income and 10 is high income)",
    ),
    ("Motivation for Career Choice", "Motivation for Career Choice"),
    ("Favorite Color", "Favorite Color"),
    ("Daily Water Intake", "Daily Water Intake (in Litres)"),
    ("Birth Month", "Birth Month"),
    ("Prefered Music Genre", "Prefer4 Music Genre"),
    ("Number of Siblings", "Number of Siblings"),
];

/// Form labels rendered as free number inputs rather than dropdowns.
pub const NUMBER_INPUTS: [&str; 4] = [
    "Age",
    "Academic Performance",
    "Daily Water Intake",
    "Number of Siblings",
];

/// 1-based class label -> career text.
const CAREERS: &[(u32, &str)] = &[
    (1, "Government Officer"),
    (2, "Entrepreneur"),
    (3, "Corporate Employee"),
    (4, "Freelance"),
    (5, "Researcher/Scientist"),
];

/// Placeholder for class labels outside the career table.
pub const UNKNOWN_CAREER: &str = "Unknown Career";

/// Immutable form schema built once at startup and shared via `AppState`.
pub struct FormSchema {
    display_to_feature: HashMap<&'static str, &'static str>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self {
            display_to_feature: DISPLAY_TO_FEATURE.iter().copied().collect(),
        }
    }

    pub fn feature_names(&self) -> &'static [&'static str; 19] {
        &FEATURE_NAMES
    }

    /// Resolves a form label to its training-time column name.
    pub fn feature_for_display(&self, display: &str) -> Option<&'static str> {
        self.display_to_feature.get(display).copied()
    }

    pub fn dropdowns(&self) -> &'static [DropdownField] {
        DROPDOWN_FIELDS
    }

    pub fn number_inputs(&self) -> &'static [&'static str] {
        &NUMBER_INPUTS
    }

    /// Looks up the career text for a 1-based class label.
    pub fn career_for_label(&self, label: u32) -> Option<&'static str> {
        CAREERS
            .iter()
            .find(|(n, _)| *n == label)
            .map(|(_, career)| *career)
    }

    /// Builds the form descriptor served to the frontend: every dropdown with
    /// its options in codebook order, then the number inputs.
    pub fn descriptor(&self) -> FormDescriptor {
        let mut fields: Vec<FieldDescriptor> = self
            .dropdowns()
            .iter()
            .map(|field| FieldDescriptor::Select {
                label: field.label,
                options: field.options.iter().map(|(text, _)| *text).collect(),
            })
            .collect();
        fields.extend(
            self.number_inputs()
                .iter()
                .map(|label| FieldDescriptor::Number { label: *label }),
        );
        FormDescriptor { fields }
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormDescriptor {
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDescriptor {
    Select {
        label: &'static str,
        options: Vec<&'static str>,
    },
    Number {
        label: &'static str,
    },
}
