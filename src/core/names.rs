//! Teacher name matching
//!
//! Schedules spell the same lecturer in several ways ("ThS. Nguyễn Văn A",
//! "Nguyen Van A", "GV Nguyễn Văn A"), so names are compared after folding.

use crate::utils::{collapse_whitespace, fold_diacritics};

/// Academic-title prefixes stripped before comparing names
const TITLE_PREFIXES: [&str; 5] = ["pgs", "ths", "gs", "ts", "gv"];

fn strip_title(name: &str) -> Option<&str> {
    for title in TITLE_PREFIXES {
        let Some(rest) = name.strip_prefix(title) else {
            continue;
        };
        if let Some(after_dot) = rest.strip_prefix('.') {
            return Some(after_dot.trim_start());
        }
        if rest.starts_with(char::is_whitespace) {
            return Some(rest.trim_start());
        }
    }
    None
}

/// Lowercase, fold diacritics, drop leading academic titles and collapse
/// whitespace.
pub(crate) fn normalize_teacher_name(name: &str) -> String {
    let folded = fold_diacritics(&name.to_lowercase());
    let mut rest = collapse_whitespace(&folded);
    while let Some(stripped) = strip_title(&rest) {
        rest = stripped.to_string();
    }
    rest
}

/// The primary teacher, normalized once per evaluation.
///
/// Names match when either normalized name contains the other. An empty
/// primary name matches every session, and a session without a teacher is
/// taken to belong to the primary teacher.
#[derive(Debug, Clone)]
pub(crate) struct TeacherFilter {
    primary: String,
}

impl TeacherFilter {
    pub(crate) fn new(primary: &str) -> Self {
        Self {
            primary: normalize_teacher_name(primary),
        }
    }

    pub(crate) fn matches(&self, session_teacher: &str) -> bool {
        if self.primary.is_empty() {
            return true;
        }
        let other = normalize_teacher_name(session_teacher);
        other.is_empty() || self.primary.contains(&other) || other.contains(&self.primary)
    }
}
