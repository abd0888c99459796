//! Data model shared by the engine, the loaders and the CLI.
//!
//! - [`course`] - Course records produced by the transcript import
//! - [`requirements`] - The user-authored requirement tree
//! - [`course_types`] - The course-type master hierarchy used by `category` rules
//! - [`status`] - The computed status tree

pub mod course;
pub mod course_types;
pub mod requirements;
pub mod status;

pub use course::CourseRecord;
pub use course_types::{CourseTypeEntry, CourseTypeMaster, CourseTypeNode};
pub use requirements::{
    CreditPool, GraduationRequirements, GroupRule, RequiredCourses, RequirementCategory,
    RequirementGroup, RequirementSubcategory, SubcategoryKind, SubcategoryType,
    CURRENT_SCHEMA_VERSION,
};
pub use status::{
    CategoryStatus, GroupStatus, MatchedCourse, RequiredCourseStatus, RequirementStatus,
    SubcategoryStatus,
};
