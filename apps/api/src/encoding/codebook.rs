//! Dropdown codebooks: option text -> integer code.
//!
//! Codes were assigned by enumeration order at training time and must never
//! be re-assigned; the trained classifier only knows the numbers. Every field
//! except `Birth Month` carries an explicit 0 baseline ("nil" or "0"), and
//! anything the codebook does not recognize also encodes as 0.

/// One categorical form field and its option-to-code table.
pub struct DropdownField {
    pub label: &'static str,
    pub options: &'static [(&'static str, i64)],
}

impl DropdownField {
    /// Encodes submitted option text. Unrecognized text falls back to the 0
    /// baseline rather than failing.
    pub fn code_for(&self, text: &str) -> i64 {
        self.options
            .iter()
            .find(|(option, _)| *option == text)
            .map(|(_, code)| *code)
            .unwrap_or(0)
    }
}

const GENDER: &[(&str, i64)] = &[("Male", 0), ("Female", 1), ("Other", 2)];

const EDUCATION_LEVEL: &[(&str, i64)] = &[
    ("nil", 0),
    ("Undergraduate", 1),
    ("Postgraduate", 2),
    ("Highschool", 3),
];

const PREFERRED_SUBJECT: &[(&str, i64)] = &[
    ("nil", 0),
    ("Science", 1),
    ("Commerce", 2),
    ("Arts", 3),
    ("Mixed", 4),
];

const EXTRACURRICULARS: &[(&str, i64)] = &[
    ("nil", 0),
    ("Culturals", 1),
    ("Sports", 2),
    ("Debate", 3),
];

const WORK_EXPERIENCE: &[(&str, i64)] = &[
    ("nil", 0),
    ("Internship", 1),
    ("Part Time", 2),
    ("Full Time", 3),
];

const WORK_ENVIRONMENT: &[(&str, i64)] = &[
    ("nil", 0),
    ("StartUp", 1),
    ("Research", 2),
    ("Corporate Job", 3),
    ("Freelancing", 4),
];

const ZERO_TO_TEN: &[(&str, i64)] = &[
    ("0", 0),
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("10", 10),
];

const LEADERSHIP: &[(&str, i64)] = &[
    ("nil", 0),
    ("Student Council Member", 1),
    ("Event Management", 2),
];

const NETWORKING: &[(&str, i64)] = &[
    ("nil", 0),
    ("Attended Corporate Events", 1),
    ("Attended Business Meets", 2),
    ("Attended Conferences", 3),
];

const TECH_SAVVINESS: &[(&str, i64)] = &[
    ("nil", 0),
    ("Good Coding Knowledge", 1),
    ("Comfortable Using Newly Launched Technologies", 2),
    ("Can Efficiently Work with AI tools", 3),
];

const MOTIVATION: &[(&str, i64)] = &[
    ("nil", 0),
    ("Social Impact", 1),
    ("Passion", 2),
    ("Money", 3),
    ("Freedom", 4),
    ("Work Life Balance", 5),
];

const FAVORITE_COLOR: &[(&str, i64)] = &[
    ("nil", 0),
    ("Black", 1),
    ("Blue", 2),
    ("Purple", 3),
    ("Red", 4),
    ("White", 5),
    ("Green", 6),
    ("Pink", 7),
    ("Yellow", 8),
    ("Orange", 9),
];

// Birth Month has no nil entry; an absent answer still encodes as 0 through
// the unrecognized-text fallback.
const BIRTH_MONTH: &[(&str, i64)] = &[
    ("January", 1),
    ("February", 2),
    ("March", 3),
    ("April", 4),
    ("May", 5),
    ("June", 6),
    ("July", 7),
    ("August", 8),
    ("September", 9),
    ("October", 10),
    ("November", 11),
    ("December", 12),
];

const MUSIC_GENRE: &[(&str, i64)] = &[
    ("nil", 0),
    ("Classical", 1),
    ("Rock", 2),
    ("Rap", 3),
    ("Pop", 4),
];

/// All categorical form fields, in form display order.
pub const DROPDOWN_FIELDS: &[DropdownField] = &[
    DropdownField {
        label: "Gender",
        options: GENDER,
    },
    DropdownField {
        label: "Highest Education Level",
        options: EDUCATION_LEVEL,
    },
    DropdownField {
        label: "Prefered Subject in Highschool/College",
        options: PREFERRED_SUBJECT,
    },
    DropdownField {
        label: "Extracurricular Activities",
        options: EXTRACURRICULARS,
    },
    DropdownField {
        label: "Work Experience",
        options: WORK_EXPERIENCE,
    },
    DropdownField {
        label: "Work Environment",
        options: WORK_ENVIRONMENT,
    },
    DropdownField {
        label: "Risk-Taking Ability",
        options: ZERO_TO_TEN,
    },
    DropdownField {
        label: "Leadership Experience",
        options: LEADERSHIP,
    },
    DropdownField {
        label: "Networking & Social Skills",
        options: NETWORKING,
    },
    DropdownField {
        label: "Tech-Savviness",
        options: TECH_SAVVINESS,
    },
    DropdownField {
        label: "Financial Stability",
        options: ZERO_TO_TEN,
    },
    DropdownField {
        label: "Motivation for Career Choice",
        options: MOTIVATION,
    },
    DropdownField {
        label: "Favorite Color",
        options: FAVORITE_COLOR,
    },
    DropdownField {
        label: "Birth Month",
        options: BIRTH_MONTH,
    },
    DropdownField {
        label: "Prefered Music Genre",
        options: MUSIC_GENRE,
    },
];
