/// Template builder for conflict repair suggestions. Wording is part
/// of the wire contract; clients display these strings verbatim.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Suggestion for a structured attendance-fact conflict.
    pub fn pick_attendance_value(value_a: &str, value_b: &str) -> String {
        format!("Pick one attendance value ({} vs {})", value_a, value_b)
    }

    /// Suggestion when two sentences name different percentages.
    pub fn standardize_attendance(value_a: &str, value_b: &str) -> String {
        format!("Standardize attendance to {} or {}", value_a, value_b)
    }

    /// Suggestion when two sentences name different deadline times.
    pub fn unify_deadline_time(time_a: &str, time_b: &str) -> String {
        format!("Unify deadline time ({} vs {})", time_a, time_b)
    }

    /// Fallback suggestion for contradictions with no specific repair.
    pub fn review_statements() -> String {
        "Review these statements".to_string()
    }
}
