use focuspath_domain::Quadrant;

/// Render the instruction prompt around the user's brain dump.
pub fn build_prompt(raw_input: &str) -> String {
    let quadrants = Quadrant::ALL
        .iter()
        .map(|q| format!("{} ({})", q.wire_name(), q.subtitle()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"Analyze the following list of tasks or "brain dump" and organize them into the Eisenhower Matrix.
Evaluate each task based on Urgency and Importance.

Input:
{raw_input}

Instructions:
1. Extract individual tasks from the messy input.
2. Assign each to exactly one of the 4 quadrants: {quadrants}.
3. Score urgency and importance from 1 to 10 and give a rough time estimate.
4. Provide a brief reasoning for the placement.
5. Create a short executive summary of the workload.
6. Identify the single most critical task."#
    )
}
