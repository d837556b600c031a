//! Core domain types for college catalogs and student profiles.
//!
//! `CollegeRecord` mirrors the JSON shape served by the catalog backend
//! (camelCase keys). `StudentProfile` is built from the flat form
//! submission a student fills in; only the exam fields and the home state
//! matter for ranking, everything else in the form is ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique, slug-like identifier for a college (e.g. "iit-bombay")
pub type CollegeId = String;

// =============================================================================
// College
// =============================================================================

/// A single college in the catalog.
///
/// Every scoring input is optional. Missing data costs the college the
/// points for that factor and nothing more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeRecord {
    pub id: CollegeId,
    pub name: String,
    /// Full state/UT name, matched case-insensitively against the home state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_type: Option<String>,
    /// Free-text exam names, in the order the college lists them
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entrance_exams: Vec<String>,
    /// Free text such as "₹21.5 Lakhs (4 years)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_package: Option<String>,
    /// Placement rate, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_percent: Option<f64>,
    /// Aggregate rating, 0-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// NIRF rank, lower is better. `None` means unranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nirf_rank: Option<u32>,
}

impl CollegeRecord {
    /// Creates a record with only the required fields set
    pub fn new(id: impl Into<CollegeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: None,
            city: None,
            category: None,
            college_type: None,
            entrance_exams: Vec::new(),
            fees: None,
            avg_package: None,
            placement_percent: None,
            rating: None,
            nirf_rank: None,
        }
    }

    /// Rating with a missing (or non-finite) value read as 0, the order used
    /// for top-rated lists
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.filter(|r| r.is_finite()).unwrap_or(0.0)
    }
}

/// The backend sends `null` for empty exam lists
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Entrance Exams
// =============================================================================

/// Entrance exams a student can report on the application form.
///
/// Each variant corresponds to exactly one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExamKind {
    JeeMain,
    Bitsat,
    Comedk,
    Viteee,
    Kcet,
    MhtCet,
    Eapcet,
    Srmjee,
    Wbjee,
}

impl ExamKind {
    /// Every supported exam, in form order
    pub const ALL: [ExamKind; 9] = [
        ExamKind::JeeMain,
        ExamKind::Bitsat,
        ExamKind::Comedk,
        ExamKind::Viteee,
        ExamKind::Kcet,
        ExamKind::MhtCet,
        ExamKind::Eapcet,
        ExamKind::Srmjee,
        ExamKind::Wbjee,
    ];

    /// Name of the form field carrying this exam's score
    pub fn form_key(self) -> &'static str {
        match self {
            ExamKind::JeeMain => "jeePercentile",
            ExamKind::Bitsat => "bitsatScore",
            ExamKind::Comedk => "comedkRank",
            ExamKind::Viteee => "viteeeRank",
            ExamKind::Kcet => "kcetRank",
            ExamKind::MhtCet => "mhtcetPercentile",
            ExamKind::Eapcet => "eapcetRank",
            ExamKind::Srmjee => "srmjeeRank",
            ExamKind::Wbjee => "wbjeeRank",
        }
    }

    /// Inverse of [`ExamKind::form_key`]
    pub fn from_form_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.form_key() == key)
    }
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExamKind::JeeMain => "JEE Main",
            ExamKind::Bitsat => "BITSAT",
            ExamKind::Comedk => "COMEDK",
            ExamKind::Viteee => "VITEEE",
            ExamKind::Kcet => "KCET",
            ExamKind::MhtCet => "MHT-CET",
            ExamKind::Eapcet => "EAPCET",
            ExamKind::Srmjee => "SRMJEE",
            ExamKind::Wbjee => "WBJEE",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Student Profile
// =============================================================================

/// The personalization signals taken from a student's form submission.
///
/// Only exams with a filled-in value are kept. The value itself is stored
/// for display but ranking looks at presence alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawProfile", into = "RawProfile")]
pub struct StudentProfile {
    exams: BTreeMap<ExamKind, String>,
    home_state: Option<String>,
}

impl StudentProfile {
    /// Creates an empty profile (no exams, no home state)
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the student appeared for `exam` (builder pattern).
    /// Blank values are ignored, matching how the form is read.
    pub fn with_exam(mut self, exam: ExamKind, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.exams.insert(exam, value.trim().to_string());
        }
        self
    }

    /// Sets the home state; a blank value clears it
    pub fn with_home_state(mut self, state: impl Into<String>) -> Self {
        self.home_state = non_blank(state.into());
        self
    }

    pub fn has_appeared(&self, exam: ExamKind) -> bool {
        self.exams.contains_key(&exam)
    }

    /// Exams the student appeared for, with the value they entered
    pub fn exams(&self) -> impl Iterator<Item = (ExamKind, &str)> + '_ {
        self.exams.iter().map(|(kind, value)| (*kind, value.as_str()))
    }

    pub fn home_state(&self) -> Option<&str> {
        self.home_state.as_deref()
    }

    /// True when there is anything to personalize on
    pub fn has_signal(&self) -> bool {
        !self.exams.is_empty() || self.home_state.is_some()
    }
}

/// Wire shape of a profile: the flat form object
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawProfile {
    #[serde(rename = "homeState", default, skip_serializing_if = "Option::is_none")]
    home_state: Option<String>,
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl From<RawProfile> for StudentProfile {
    fn from(raw: RawProfile) -> Self {
        let exams = raw
            .fields
            .iter()
            .filter_map(|(key, value)| {
                let kind = ExamKind::from_form_key(key)?;
                filled_value(value).map(|v| (kind, v))
            })
            .collect();

        Self {
            exams,
            home_state: raw.home_state.and_then(non_blank),
        }
    }
}

impl From<StudentProfile> for RawProfile {
    fn from(profile: StudentProfile) -> Self {
        let fields = profile
            .exams
            .into_iter()
            .map(|(kind, value)| (kind.form_key().to_string(), Value::String(value)))
            .collect();

        Self {
            home_state: profile.home_state,
            fields,
        }
    }
}

/// A form value counts as filled when it is a non-blank string, a non-zero
/// number, or `true`. Everything else means the field was left empty.
fn filled_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s.trim().to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}
