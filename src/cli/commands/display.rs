//! Rendering of a [`RequirementStatus`] through the [`UserInterface`].
//!
//! Normal mode prints the category/subcategory/group tree followed by a
//! credit summary. Verbose mode adds the matched courses under each node;
//! quiet mode prints the summary only.

use crate::model::{
    CategoryStatus, GroupStatus, MatchedCourse, RequirementStatus, SubcategoryStatus,
    SubcategoryType,
};
use crate::ui::{format_credit, StatusKind, Table, UserInterface};

/// Title line for a status report.
pub fn report_title(status: &RequirementStatus) -> String {
    match &status.major {
        Some(major) => format!("{} / {} {}", status.department, major, status.year),
        None => format!("{} {}", status.department, status.year),
    }
}

fn credits(earned: f64, in_progress: f64, required: f64) -> String {
    let mut text = format!("{} / {}", format_credit(earned), format_credit(required));
    if in_progress > 0.0 {
        text.push_str(&format!(" (+{} in progress)", format_credit(in_progress)));
    }
    text
}

fn course_line(course: &MatchedCourse) -> String {
    let mut line = format!("{} {} ({})", course.id, course.name, format_credit(course.credits));
    if course.is_in_progress {
        line.push_str(" in progress");
    } else if let Some(grade) = &course.grade {
        line.push_str(&format!(" {}", grade));
    }
    line
}

/// Status icon for a category.
pub fn category_kind(category: &CategoryStatus) -> StatusKind {
    StatusKind::classify(
        category.is_satisfied,
        category.earned_credits,
        category.in_progress_credits,
        category.required_credits,
    )
}

/// Status icon for a subcategory.
pub fn subcategory_kind(sub: &SubcategoryStatus) -> StatusKind {
    if sub.kind == SubcategoryType::Required {
        return if !sub.is_satisfied {
            StatusKind::Unsatisfied
        } else if sub.in_progress_credits > 0.0 {
            StatusKind::InProgress
        } else {
            StatusKind::Satisfied
        };
    }
    StatusKind::classify(
        sub.is_satisfied,
        sub.earned_credits,
        sub.in_progress_credits,
        sub.required_credits,
    )
}

/// Status icon for a group. Unsatisfied groups waiting on course types
/// are shown as pending.
pub fn group_kind(group: &GroupStatus) -> StatusKind {
    if !group.is_satisfied && group.lookup_pending {
        return StatusKind::Pending;
    }
    StatusKind::classify(
        group.is_satisfied,
        group.uncapped_earned_credits,
        group.in_progress_credits,
        group.required_credits,
    )
}

fn show_subcategory(ui: &mut dyn UserInterface, sub: &SubcategoryStatus, details: bool) {
    if sub.kind == SubcategoryType::Required {
        let total = sub.required_courses.len();
        let found = total - sub.missing_courses().len();
        ui.status_line(
            subcategory_kind(sub),
            1,
            &format!("{}  {} / {} courses", sub.name, found, total),
        );
        for entry in &sub.required_courses {
            match &entry.matched {
                Some(course) if details => {
                    let kind = if course.is_in_progress {
                        StatusKind::InProgress
                    } else {
                        StatusKind::Satisfied
                    };
                    ui.status_line(kind, 2, &course_line(course));
                }
                Some(_) => {}
                None => ui.status_line(StatusKind::Unsatisfied, 2, &entry.course_name),
            }
        }
        return;
    }

    let mut line = format!(
        "{}  {}",
        sub.name,
        credits(sub.earned_credits, sub.in_progress_credits, sub.required_credits)
    );
    if let Some(max) = sub.max_credits {
        line.push_str(&format!(" (max {})", format_credit(max)));
    }
    ui.status_line(subcategory_kind(sub), 1, &line);

    for group in &sub.groups {
        let label = group.name.as_deref().unwrap_or(&group.id);
        ui.status_line(
            group_kind(group),
            2,
            &format!(
                "{}  {}",
                label,
                credits(
                    group.earned_credits,
                    group.in_progress_credits,
                    group.required_credits
                )
            ),
        );
        if details {
            for course in &group.matched_courses {
                ui.message(&format!("      {}", course_line(course)));
            }
        }
    }
}

/// Print the requirement tree.
pub fn show_tree(ui: &mut dyn UserInterface, status: &RequirementStatus) {
    let details = ui.output_mode().shows_details();
    for category in &status.categories {
        ui.status_line(
            category_kind(category),
            0,
            &format!(
                "{}  {}",
                category.name,
                credits(
                    category.earned_credits,
                    category.in_progress_credits,
                    category.required_credits
                )
            ),
        );
        for sub in &category.subcategories {
            show_subcategory(ui, sub, details);
        }
    }
}

/// Build the credit summary table.
pub fn summary_table(status: &RequirementStatus) -> Table {
    let mut table = Table::new(vec!["", "Credits"]).align_right(1);
    let rows = [
        ("Required", status.total_credits),
        ("Earned", status.total_earned_credits),
        ("In progress", status.total_in_progress_credits),
        ("Remaining", status.remaining_credits()),
    ];
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), format_credit(value)]);
    }
    table
}

/// Print unclaimed courses.
pub fn show_unmatched(ui: &mut dyn UserInterface, status: &RequirementStatus) {
    if status.unmatched_courses.is_empty() {
        ui.message("All courses counted toward a requirement.");
        return;
    }
    ui.message(&format!(
        "{} course(s) not counted toward any requirement:",
        status.unmatched_courses.len()
    ));
    for course in &status.unmatched_courses {
        ui.message(&format!("  {}", course_line(course)));
    }
}

/// Render a full human-readable report.
pub fn show_report(ui: &mut dyn UserInterface, status: &RequirementStatus, unmatched: bool) {
    ui.show_header(&report_title(status));

    if ui.output_mode().shows_tree() {
        show_tree(ui, status);
        ui.message("");
    }

    ui.message(&summary_table(status).render());

    if status.pending_lookups > 0 {
        ui.show_hint(&format!(
            "{} group(s) use category rules with no known prefixes; pass --course-types to resolve them",
            status.pending_lookups
        ));
    }

    if unmatched {
        show_unmatched(ui, status);
    }

    if status.is_graduation_eligible {
        ui.success("Eligible for graduation");
        if !status.all_categories_satisfied {
            ui.show_hint("Some categories are still unsatisfied");
        }
    } else {
        ui.warning(&format!(
            "Not yet eligible: {} credit(s) remaining",
            format_credit(status.remaining_credits())
        ));
    }
}
