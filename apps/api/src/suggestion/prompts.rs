// Prompt template for phrasing suggestions.
// The system prompt is the shared llm_client::prompts::JSON_ONLY_SYSTEM.

/// Replace `{section_type}` then `{information}` before sending. Both are
/// interpolated verbatim.
pub const PHRASING_PROMPT_TEMPLATE: &str = r#"You are a resume writing expert. Your task is to provide suggested phrasing for the {section_type} section of a resume, based on the information provided.

Return a JSON object with this EXACT schema:
{
  "suggestedPhrasing": "the rewritten text"
}

Information: {information}"#;

pub fn render_phrasing_prompt(section_type: &str, information: &str) -> String {
    PHRASING_PROMPT_TEMPLATE
        .replace("{section_type}", section_type)
        .replace("{information}", information)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolates_both_values() {
        let prompt = render_phrasing_prompt("Summary", "Rust developer");
        assert!(prompt.contains("for the Summary section"));
        assert!(prompt.ends_with("Information: Rust developer"));
    }

    #[test]
    fn test_information_is_not_reinterpreted() {
        let prompt = render_phrasing_prompt("Leadership", "literal {section_type} text");
        assert!(prompt.contains("Information: literal {section_type} text"));
    }
}
