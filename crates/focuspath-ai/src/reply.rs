use focuspath_domain::{Plan, PlanPayload};

use crate::ClassifyError;

/// Parse the model's reply text into a plan with fresh task ids.
///
/// Tolerates a Markdown code fence around the JSON.
pub fn parse_plan(text: &str) -> Result<Plan, ClassifyError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(ClassifyError::EmptyResponse);
    }

    let payload: PlanPayload =
        serde_json::from_str(body).map_err(|e| ClassifyError::Malformed(e.to_string()))?;
    let plan = Plan::from_payload(payload);
    tracing::debug!("Parsed plan with {} tasks", plan.len());
    Ok(plan)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
