use crate::domain::ports::GenerationRequest;
use serde_json::{json, Value};

pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// Number of alternatives the model is asked for.
pub const SUGGESTION_COUNT: usize = 5;

/// 建立給模型的指示文字。可用性是模擬的，不是真正的註冊查詢。
pub fn build_prompt(domain: &str) -> String {
    format!(
        r#"You are a helpful domain registrar assistant.
A user wants to check the availability of the domain "{domain}".

1. First, determine if "{domain}" is likely to be available. Treat very common or famous names (e.g., 'google.com', 'apple.com', 'news.com') as 'Taken'. Treat creative or unique names as 'Available'. This is a simulation.
2. If "{domain}" is taken, provide a reason like "Already registered".
3. Then, generate exactly {count} creative, clever, and available alternative domain suggestions.
4. The suggestions should use a mix of modern TLDs like .ai, .io, .app, .dev, .co, as well as traditional .com.
5. Ensure all suggested domains are marked as 'isAvailable: true'.
6. Return the response strictly in the specified JSON format."#,
        domain = domain,
        count = SUGGESTION_COUNT,
    )
}

fn domain_info_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "domainName": {
                "type": "STRING",
                "description": "The full domain name, including the TLD."
            },
            "isAvailable": {
                "type": "BOOLEAN",
                "description": "Whether the domain is available for registration."
            },
            "reason": {
                "type": "STRING",
                "description": "A brief reason if the domain is not available (e.g., 'Already registered', 'Premium domain'). Optional."
            }
        },
        "required": ["domainName", "isAvailable"]
    })
}

/// Output schema: `primary` plus a `suggestions` array, both required.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "primary": domain_info_schema(),
            "suggestions": {
                "type": "ARRAY",
                "description": format!("A list of {} creative and available alternative domain names.", SUGGESTION_COUNT),
                "items": domain_info_schema()
            }
        },
        "required": ["primary", "suggestions"]
    })
}

pub fn availability_request(domain: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: build_prompt(domain),
        response_mime_type: RESPONSE_MIME_TYPE.to_string(),
        response_schema: response_schema(),
    }
}
