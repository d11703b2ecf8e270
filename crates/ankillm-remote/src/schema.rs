//! Structured-output schemas, one per note template

use ankillm_core::NoteTemplate;
use serde_json::{json, Map, Value};

/// JSON schema (Gemini `responseSchema` dialect) the model must answer with
pub fn response_schema(template: NoteTemplate) -> Value {
    let fields = template.required_fields();

    let mut properties = Map::new();
    for field in fields {
        properties.insert((*field).to_string(), json!({ "type": "STRING" }));
    }

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": properties,
            "required": fields,
        }
    })
}
