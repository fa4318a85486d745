use crate::domain::model::{Plan, Schedule};
use crate::utils::error::{PlannerError, Result};

/// `Routine_<member name>.<extension>`. Every character of the name other than
/// letters, digits, `-` and `_` becomes `_`, so the result is always a single
/// path component.
pub fn report_file_name(member_name: &str, extension: &str) -> String {
    let name: String = member_name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("Routine_{}.{}", name, extension)
}

/// Plain-text confirmation view of a stored plan.
pub fn plan_summary(plan: &Plan) -> String {
    let mut lines = vec![
        format!("Name: {}", plan.member_name()),
        format!("Age: {}", plan.member_age()),
        format!("Goal: {}", plan.goal().display_name()),
        format!("Requested days: {}", plan.requested_days()),
        format!("Days in generated plan: {}", plan.schedule_length()),
        format!("Routine: {}", plan.routine().name),
        format!("Description: {}", plan.routine().description),
        format!("Generated: {}", plan.generated_at().format("%Y-%m-%d %H:%M UTC")),
    ];
    for (day, exercises) in plan.schedule().iter() {
        lines.push(format!("{}: {}", Schedule::day_label(day), exercises.join(", ")));
    }
    lines.join("\n")
}

/// Schedule as `day,position,exercise` rows, days ascending.
pub fn schedule_csv(plan: &Plan) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["day", "position", "exercise"])?;

    for (day, exercises) in plan.schedule().iter() {
        let label = Schedule::day_label(day);
        for (position, exercise) in exercises.iter().enumerate() {
            let position = (position + 1).to_string();
            writer.write_record([label.as_str(), position.as_str(), exercise.as_str()])?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| PlannerError::EncodingError {
        message: format!("CSV buffer could not be flushed: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| PlannerError::EncodingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
