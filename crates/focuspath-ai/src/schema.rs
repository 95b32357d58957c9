use focuspath_domain::Quadrant;
use serde_json::{json, Value};

/// JSON schema the model's reply is constrained to.
pub fn response_schema() -> Value {
    let quadrants: Vec<&str> = Quadrant::ALL.iter().map(|q| q.wire_name()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "tasks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "quadrant": {
                            "type": "STRING",
                            "format": "enum",
                            "enum": quadrants,
                            "description": format!("One of: {}", quadrants.join(", "))
                        },
                        "urgencyScore": { "type": "INTEGER" },
                        "importanceScore": { "type": "INTEGER" },
                        "reasoning": { "type": "STRING" },
                        "estimatedTime": { "type": "STRING" }
                    },
                    "required": [
                        "title",
                        "quadrant",
                        "urgencyScore",
                        "importanceScore",
                        "reasoning",
                        "estimatedTime"
                    ]
                }
            },
            "executiveSummary": { "type": "STRING" },
            "topPriority": { "type": "STRING" }
        },
        "required": ["tasks", "executiveSummary", "topPriority"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_every_field() {
        let schema = response_schema();
        assert_eq!(
            schema["required"],
            json!(["tasks", "executiveSummary", "topPriority"])
        );

        let task = &schema["properties"]["tasks"]["items"];
        assert_eq!(task["required"].as_array().map(Vec::len), Some(6));
        assert_eq!(
            task["properties"]["quadrant"]["enum"],
            json!(["DO_FIRST", "SCHEDULE", "DELEGATE", "ELIMINATE"])
        );
        assert_eq!(task["properties"]["urgencyScore"]["type"], "INTEGER");
    }
}
