//! Raw task input and its validated form.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Timelike, Utc};

use super::{FieldError, Priority, Task, TaskField, ValidationError};

const LOCAL_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Raw field values as typed into the task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Activity label.
    pub activity: String,
    /// Free-text description; empty means none.
    pub description: String,
    /// Scheduled date and time.
    pub schedule: String,
    /// Priority tier name.
    pub priority: String,
}

impl TaskDraft {
    /// Creates a draft with the required fields.
    #[must_use]
    pub fn new(
        activity: impl Into<String>,
        schedule: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            activity: activity.into(),
            description: String::new(),
            schedule: schedule.into(),
            priority: priority.into(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds a draft holding the current values of `task`, ready for
    /// editing.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        let schedule = task.schedule();
        // Sub-second schedules only round-trip through RFC 3339.
        let schedule_text = if schedule.nanosecond() != 0 {
            schedule.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        } else if schedule.second() == 0 {
            schedule.format("%Y-%m-%dT%H:%M").to_string()
        } else {
            schedule.format("%Y-%m-%dT%H:%M:%S").to_string()
        };
        Self {
            activity: task.activity().to_owned(),
            description: task.description().unwrap_or_default().to_owned(),
            schedule: schedule_text,
            priority: task.priority().as_str().to_owned(),
        }
    }
}

/// Validated task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    /// Trimmed, non-empty activity label.
    pub activity: String,
    /// Trimmed description, absent when blank.
    pub description: Option<String>,
    /// Scheduled instant.
    pub schedule: DateTime<Utc>,
    /// Priority tier.
    pub priority: Priority,
}

impl TaskFields {
    /// Validates every field of `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing each rejected field when the
    /// activity is blank, the schedule is blank or unparseable, or the
    /// priority is blank or not a known tier.
    pub fn parse(draft: &TaskDraft) -> Result<Self, ValidationError> {
        let activity = parse_activity(&draft.activity);
        let schedule = parse_schedule(&draft.schedule);
        let priority = parse_priority(&draft.priority);

        match (activity, schedule, priority) {
            (Ok(activity), Ok(schedule), Ok(priority)) => {
                let description = draft.description.trim();
                Ok(Self {
                    activity,
                    description: (!description.is_empty()).then(|| description.to_owned()),
                    schedule,
                    priority,
                })
            }
            (activity, schedule, priority) => Err(ValidationError::new(
                [activity.err(), schedule.err(), priority.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}

fn parse_activity(raw: &str) -> Result<String, FieldError> {
    let activity = raw.trim();
    if activity.is_empty() {
        return Err(FieldError::required(TaskField::Activity));
    }
    Ok(activity.to_owned())
}

fn parse_priority(raw: &str) -> Result<Priority, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::required(TaskField::Priority));
    }
    Priority::try_from(value).map_err(|_| FieldError::invalid(TaskField::Priority, value))
}

/// Parses a schedule in RFC 3339 or `datetime-local` form.
///
/// Values without an offset are read as UTC.
///
/// # Errors
///
/// Returns a [`FieldError`] for [`TaskField::Schedule`] when the value is
/// blank or matches no accepted format.
pub fn parse_schedule(raw: &str) -> Result<DateTime<Utc>, FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::required(TaskField::Schedule));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    LOCAL_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| FieldError::invalid(TaskField::Schedule, value))
}
