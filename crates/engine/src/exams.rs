//! Exam alias table and the per-request view of a student's signals.
//!
//! Colleges list accepted exams as free text ("JEE Main", "MHT CET", ...),
//! so every form field maps to the spellings that count as the same exam.
//! The table is the single place those spellings live; bump
//! [`EXAM_ALIAS_TABLE_VERSION`] whenever it changes.

use catalog::{ExamKind, StudentProfile};
use std::collections::BTreeSet;

/// Revision of [`aliases`]
pub const EXAM_ALIAS_TABLE_VERSION: u32 = 1;

/// Accepted spellings for each exam, as they appear in catalogs
pub fn aliases(exam: ExamKind) -> &'static [&'static str] {
    match exam {
        ExamKind::JeeMain => &["JEE Main", "JEE Mains", "JEE Advanced"],
        ExamKind::Bitsat => &["BITSAT"],
        ExamKind::Comedk => &["COMEDK"],
        ExamKind::Viteee => &["VITEEE"],
        ExamKind::Kcet => &["KCET"],
        ExamKind::MhtCet => &["MHT-CET", "MHT CET"],
        ExamKind::Eapcet => &["EAPCET", "AP EAPCET"],
        ExamKind::Srmjee => &["SRMJEE"],
        ExamKind::Wbjee => &["WBJEE"],
    }
}

/// A student profile normalized for scoring.
///
/// Built once per ranking call: lower-cased aliases of every exam the
/// student appeared for, and the lower-cased home state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentSignals {
    exam_aliases: BTreeSet<String>,
    home_state: Option<String>,
}

impl StudentSignals {
    pub fn from_profile(profile: &StudentProfile) -> Self {
        let exam_aliases = profile
            .exams()
            .flat_map(|(kind, _)| aliases(kind).iter())
            .map(|alias| alias.to_lowercase())
            .collect();

        Self {
            exam_aliases,
            home_state: profile.home_state().map(str::to_lowercase),
        }
    }

    /// Lower-cased alias set of every exam the student appeared for
    pub fn exam_aliases(&self) -> &BTreeSet<String> {
        &self.exam_aliases
    }

    /// Lower-cased home state
    pub fn home_state(&self) -> Option<&str> {
        self.home_state.as_deref()
    }

    pub fn has_signal(&self) -> bool {
        !self.exam_aliases.is_empty() || self.home_state.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_exam_has_aliases() {
        for kind in ExamKind::ALL {
            assert!(!aliases(kind).is_empty(), "{kind} has no aliases");
        }
    }

    #[test]
    fn test_signals_collect_lowercase_aliases() {
        let profile = StudentProfile::new()
            .with_exam(ExamKind::JeeMain, "95")
            .with_exam(ExamKind::MhtCet, "97.5")
            .with_home_state("Maharashtra");

        let signals = StudentSignals::from_profile(&profile);
        let expected: BTreeSet<String> = ["jee main", "jee mains", "jee advanced", "mht-cet", "mht cet"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(signals.exam_aliases(), &expected);
        assert_eq!(signals.home_state(), Some("maharashtra"));
        assert!(signals.has_signal());
    }

    #[test]
    fn test_empty_profile_has_no_signal() {
        let signals = StudentSignals::from_profile(&StudentProfile::new());
        assert!(!signals.has_signal());
    }
}
