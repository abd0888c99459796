//! Course pool and used-course ledger.
//!
//! A [`CoursePool`] is created per calculation and threaded by mutable
//! reference through every evaluator. It tracks which input records have
//! already been claimed, so there is no shared state between calculations.
//!
//! The ledger is keyed on the record's position in the input, not its
//! course code: a course repeated for credit or a failed attempt followed
//! by a retake are separate records that share a code.

use crate::model::CourseRecord;

/// Courses still available for matching during one calculation.
#[derive(Debug)]
pub struct CoursePool<'a> {
    courses: &'a [CourseRecord],
    used: Vec<bool>,
}

impl<'a> CoursePool<'a> {
    /// Create a pool over the given courses with an empty ledger.
    pub fn new(courses: &'a [CourseRecord]) -> Self {
        Self {
            courses,
            used: vec![false; courses.len()],
        }
    }

    fn records(&self) -> impl Iterator<Item = (&'a CourseRecord, bool)> + '_ {
        self.courses.iter().zip(self.used.iter().copied())
    }

    fn slot(&self, course: &CourseRecord) -> Option<usize> {
        self.courses.iter().position(|c| std::ptr::eq(c, course))
    }

    /// Countable records that nobody has claimed yet, in input order.
    pub fn available(&self) -> Vec<&'a CourseRecord> {
        self.records()
            .filter(|(c, used)| c.is_countable() && !used)
            .map(|(c, _)| c)
            .collect()
    }

    /// Mark a record as used. Returns `false` if it was already claimed or
    /// does not belong to this pool.
    pub fn claim(&mut self, course: &'a CourseRecord) -> bool {
        let Some(index) = self.slot(course) else {
            return false;
        };
        match self.used.get_mut(index) {
            Some(used) if !*used => {
                *used = true;
                true
            }
            _ => false,
        }
    }

    /// Whether any record with this course code has been claimed.
    pub fn is_used(&self, id: &str) -> bool {
        self.records().any(|(c, used)| used && c.id == id)
    }

    /// Number of claimed records.
    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|u| **u).count()
    }

    /// Every input record that was never claimed, failed ones included.
    pub fn unclaimed(&self) -> Vec<&'a CourseRecord> {
        self.records()
            .filter(|(_, used)| !used)
            .map(|(c, _)| c)
            .collect()
    }
}
