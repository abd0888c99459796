//! JSON Schema generation for requirement definitions.
//!
//! The schema is derived from the model types, so it always describes the
//! current (version 2) document shape. Legacy documents are not covered;
//! run them through `gradtrack migrate` first.

use schemars::schema_for;
use serde_json::Value;

use crate::model::{CourseTypeMaster, GraduationRequirements};

/// Which document the schema describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SchemaTarget {
    #[default]
    Requirements,
    CourseTypes,
}

/// Generates JSON Schema for gradtrack input documents.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the JSON Schema for `target`.
    pub fn generate(&self, target: SchemaTarget) -> Value {
        let (schema, title) = match target {
            SchemaTarget::Requirements => (
                schema_for!(GraduationRequirements),
                "gradtrack requirement definition",
            ),
            SchemaTarget::CourseTypes => {
                (schema_for!(CourseTypeMaster), "gradtrack course-type master")
            }
        };

        let mut value = schema.to_value();
        if let Some(object) = value.as_object_mut() {
            object.insert("title".to_string(), Value::String(title.to_string()));
        }
        value
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
