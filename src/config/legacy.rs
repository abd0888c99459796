//! Migration of older requirement definitions into the canonical shape.
//!
//! Version 1 definitions keep a single `rules` array per group (or per
//! subcategory, with no groups at all) and use the rule kinds `pattern`,
//! `specific`, `group` and `exclude`. They also leave `type` off
//! subcategories. Everything here operates on raw YAML values so the
//! typed model only ever describes the current schema.

use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::error::{GradError, Result};
use crate::model::{GraduationRequirements, CURRENT_SCHEMA_VERSION};

fn key(name: &str) -> Value {
    Value::String(name.to_string())
}

/// Whether `value` uses any construct that [`migrate_value`] rewrites.
pub fn needs_migration(value: &Value) -> bool {
    let version = value.get("version").and_then(Value::as_u64);
    if version.is_some_and(|v| v < u64::from(CURRENT_SCHEMA_VERSION)) {
        return true;
    }

    subcategories(value).any(|sub| {
        sub.get("type").is_none()
            || sub.get("rules").is_some()
            || sub
                .get("groups")
                .and_then(Value::as_sequence)
                .is_some_and(|groups| groups.iter().any(|g| g.get("rules").is_some()))
    })
}

fn subcategories(value: &Value) -> impl Iterator<Item = &Value> {
    value
        .get("categories")
        .and_then(Value::as_sequence)
        .into_iter()
        .flatten()
        .filter_map(|c| c.get("subcategories").and_then(Value::as_sequence))
        .flatten()
}

/// Rewrite a raw requirement definition into the current schema.
///
/// Canonical definitions pass through unchanged apart from `version`.
///
/// # Errors
///
/// Returns `MigrationError` if the document root is not a mapping.
pub fn migrate_value(mut value: Value) -> Result<Value> {
    let root = value
        .as_mapping_mut()
        .ok_or_else(|| GradError::MigrationError {
            message: "requirement definition must be a mapping".to_string(),
        })?;

    if let Some(categories) = root.get_mut("categories").and_then(Value::as_sequence_mut) {
        for category in categories.iter_mut().filter_map(Value::as_mapping_mut) {
            let Some(subs) = category
                .get_mut("subcategories")
                .and_then(Value::as_sequence_mut)
            else {
                continue;
            };
            for sub in subs.iter_mut().filter_map(Value::as_mapping_mut) {
                migrate_subcategory(sub);
            }
        }
    }

    root.insert(key("version"), Value::from(CURRENT_SCHEMA_VERSION));
    Ok(value)
}

/// Migrate a raw definition and deserialize it.
///
/// # Errors
///
/// Returns `MigrationError` if the document is not a mapping or the
/// migrated document still does not describe valid requirements.
pub fn migrate_requirements(value: Value) -> Result<GraduationRequirements> {
    let migrated = migrate_value(value)?;
    serde_yaml::from_value(migrated).map_err(|e| GradError::MigrationError {
        message: e.to_string(),
    })
}

fn migrate_subcategory(sub: &mut Mapping) {
    if !sub.contains_key("type") {
        let inferred = if sub.contains_key("courseNames") {
            "required"
        } else {
            "elective"
        };
        debug!(
            "Subcategory {:?} has no type, treating as {}",
            sub.get("id").and_then(|v| v.as_str()).unwrap_or("?"),
            inferred
        );
        sub.insert(key("type"), key(inferred));
    }

    // A flat subcategory-level rule list becomes its own group, appended
    // after any declared groups.
    if let Some(rules) = sub.remove("rules") {
        let id = sub
            .get("id")
            .and_then(|v| v.as_str())
            .map(|id| format!("{id}-rules"))
            .unwrap_or_else(|| "rules".to_string());
        let mut group = Mapping::new();
        group.insert(key("id"), key(&id));
        group.insert(key("rules"), rules);

        match sub.get_mut("groups").and_then(Value::as_sequence_mut) {
            Some(groups) => {
                debug!("Appending subcategory-level rules as group '{}'", id);
                groups.push(Value::Mapping(group));
            }
            None => {
                if let Some(min) = sub.get("minCredits") {
                    group.insert(key("minCredits"), min.clone());
                }
                sub.insert(key("groups"), Value::Sequence(vec![Value::Mapping(group)]));
            }
        }
    }

    if let Some(groups) = sub.get_mut("groups").and_then(Value::as_sequence_mut) {
        for group in groups.iter_mut().filter_map(Value::as_mapping_mut) {
            migrate_group(group);
        }
    }
}

fn migrate_group(group: &mut Mapping) {
    let Some(rules) = group.remove("rules") else {
        return;
    };

    let mut include = take_sequence(group, "includeRules");
    let mut exclude = take_sequence(group, "excludeRules");

    for rule in rules.as_sequence().into_iter().flatten() {
        match rule.get("type").and_then(Value::as_str) {
            Some("exclude") => exclude.extend(exclusion_rules(rule)),
            Some("specific") => include.push(courses_rule(rule)),
            Some("group") => include.push(category_rule(rule)),
            _ => include.push(rule.clone()),
        }
    }

    group.insert(key("includeRules"), Value::Sequence(include));
    if !exclude.is_empty() {
        group.insert(key("excludeRules"), Value::Sequence(exclude));
    }
}

fn take_sequence(map: &mut Mapping, name: &str) -> Vec<Value> {
    match map.remove(name) {
        Some(Value::Sequence(items)) => items,
        _ => Vec::new(),
    }
}

fn course_names(rule: &Value) -> Value {
    rule.get("courseNames")
        .or_else(|| rule.get("courses"))
        .cloned()
        .unwrap_or_else(|| Value::Sequence(Vec::new()))
}

fn courses_rule(rule: &Value) -> Value {
    let mut out = Mapping::new();
    out.insert(key("type"), key("courses"));
    out.insert(key("courseNames"), course_names(rule));
    Value::Mapping(out)
}

fn category_rule(rule: &Value) -> Value {
    let mut out = Mapping::new();
    out.insert(key("type"), key("category"));
    let major = rule
        .get("majorCategory")
        .or_else(|| rule.get("name"))
        .cloned()
        .unwrap_or_else(|| key(""));
    out.insert(key("majorCategory"), major);
    for (legacy, canonical) in [
        ("middle", "middleCategory"),
        ("middleCategory", "middleCategory"),
        ("minor", "minorCategory"),
        ("minorCategory", "minorCategory"),
    ] {
        if let Some(v) = rule.get(legacy) {
            out.insert(key(canonical), v.clone());
        }
    }
    Value::Mapping(out)
}

/// A legacy `exclude` entry may combine prefixes, names and a pattern.
fn exclusion_rules(rule: &Value) -> Vec<Value> {
    let mut out = Vec::new();

    if let Some(prefixes) = rule.get("prefixes") {
        let mut m = Mapping::new();
        m.insert(key("type"), key("prefix"));
        m.insert(key("prefixes"), prefixes.clone());
        out.push(Value::Mapping(m));
    }
    if rule.get("courseNames").is_some() || rule.get("courses").is_some() {
        out.push(courses_rule(rule));
    }
    if let Some(pattern) = rule.get("pattern") {
        let mut m = Mapping::new();
        m.insert(key("type"), key("pattern"));
        m.insert(key("pattern"), pattern.clone());
        out.push(Value::Mapping(m));
    }

    if out.is_empty() {
        warn!("Legacy exclude rule names nothing to exclude; dropped");
    }
    out
}
