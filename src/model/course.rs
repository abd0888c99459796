//! Course records.
//!
//! Transcript imports name the catalog code either `courseId` or `id`, and
//! the title either `courseName` or `name`. [`CourseRecord`] normalizes both
//! spellings into a single `id` and `name` at deserialization time.

use serde::{Deserialize, Serialize};

/// A single course taken (or being taken) by the student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCourseRecord", rename_all = "camelCase")]
pub struct CourseRecord {
    /// Catalog code (e.g. `FG101`). Prefix and category rules match on this.
    pub id: String,
    /// Course title. `courses` rules and required lists match on this.
    pub name: String,
    /// Credit value. Never negative once constructed.
    pub credits: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub is_passed: bool,
    pub is_in_progress: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    /// Category label from the transcript. Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CourseRecord {
    fn new(id: impl Into<String>, name: impl Into<String>, credits: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits: sanitize_credits(Some(credits)),
            grade: None,
            is_passed: false,
            is_in_progress: false,
            year: None,
            semester: None,
            category: None,
        }
    }

    /// A course the student has passed.
    pub fn passed(id: impl Into<String>, name: impl Into<String>, credits: f64) -> Self {
        Self {
            is_passed: true,
            ..Self::new(id, name, credits)
        }
    }

    /// A course the student is currently enrolled in.
    pub fn in_progress(id: impl Into<String>, name: impl Into<String>, credits: f64) -> Self {
        Self {
            is_in_progress: true,
            ..Self::new(id, name, credits)
        }
    }

    /// A course the student took but did not pass.
    pub fn failed(id: impl Into<String>, name: impl Into<String>, credits: f64) -> Self {
        Self::new(id, name, credits)
    }

    /// Set the grade.
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    /// Credits used for summation: zero for negative or non-finite values.
    pub fn counted_credits(&self) -> f64 {
        sanitize_credits(Some(self.credits))
    }

    /// Whether this course can be claimed by a requirement at all.
    ///
    /// Only passed or in-progress courses count; failed attempts never
    /// consume a requirement slot.
    pub fn is_countable(&self) -> bool {
        self.is_passed || self.is_in_progress
    }
}

fn sanitize_credits(credits: Option<f64>) -> f64 {
    match credits {
        Some(c) if c.is_finite() && c > 0.0 => c,
        _ => 0.0,
    }
}

/// Wire shape accepted from transcript imports.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCourseRecord {
    id: Option<String>,
    course_id: Option<String>,
    name: Option<String>,
    course_name: Option<String>,
    credits: Option<f64>,
    grade: Option<String>,
    #[serde(default)]
    is_passed: bool,
    #[serde(default)]
    is_in_progress: bool,
    year: Option<i32>,
    semester: Option<String>,
    category: Option<String>,
}

impl TryFrom<RawCourseRecord> for CourseRecord {
    type Error = String;

    fn try_from(raw: RawCourseRecord) -> Result<Self, Self::Error> {
        let id = raw
            .course_id
            .or(raw.id)
            .ok_or_else(|| "course record has neither `courseId` nor `id`".to_string())?;
        let name = raw
            .course_name
            .or(raw.name)
            .ok_or_else(|| format!("course record '{}' has neither `courseName` nor `name`", id))?;

        Ok(Self {
            id,
            name,
            credits: sanitize_credits(raw.credits),
            grade: raw.grade,
            is_passed: raw.is_passed,
            is_in_progress: raw.is_in_progress,
            year: raw.year,
            semester: raw.semester,
            category: raw.category,
        })
    }
}
