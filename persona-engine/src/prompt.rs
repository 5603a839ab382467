/// System message establishing the analyst role for every completion call.
pub const SYSTEM_PROMPT: &str = "You are an expert social media analyst specializing in creating detailed user personas from social media content. Provide thorough, evidence-based analysis with specific citations.";

/// Build the user message: analysis instructions for the six persona
/// sections, the mandatory citation format, then the corpus block verbatim.
pub fn build_persona_prompt(username: &str, corpus: &str) -> String {
    format!(
        "Analyze the following Reddit user's posts and comments to create a detailed user persona.\n\
        \n\
        For the user '{username}', provide a comprehensive analysis including:\n\
        \n\
        1. **PERSONALITY TRAITS** - What kind of person are they? (e.g., introverted/extroverted, optimistic/pessimistic, analytical/creative, etc.)\n\
        \n\
        2. **INTERESTS AND HOBBIES** - What are they passionate about? What do they spend time on?\n\
        \n\
        3. **WRITING STYLE** - How do they communicate? (formal/casual, humorous/serious, detailed/brief, etc.)\n\
        \n\
        4. **POSSIBLE DEMOGRAPHICS** - Age estimate, location clues, profession hints, education level, etc.\n\
        \n\
        5. **BEHAVIORAL PATTERNS** - How do they interact on Reddit? What triggers their engagement?\n\
        \n\
        6. **VALUES AND BELIEFS** - What seems important to them based on their content?\n\
        \n\
        **IMPORTANT**: For EACH characteristic you identify, you MUST cite the specific post or comment that supports this conclusion. Use the format [CITATION: POST/COMMENT X - brief quote] after each trait.\n\
        \n\
        Format your response as a detailed user persona report with clear sections and citations.\n\
        \n\
        {corpus}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_user_and_embeds_corpus() {
        let prompt = build_persona_prompt("alice", "REDDIT USER CONTENT FOR ANALYSIS:\nPOST 1:");
        assert!(prompt.contains("For the user 'alice'"));
        assert!(prompt.ends_with("REDDIT USER CONTENT FOR ANALYSIS:\nPOST 1:"));
    }

    #[test]
    fn test_prompt_demands_all_six_sections_and_citations() {
        let prompt = build_persona_prompt("alice", "");
        for section in [
            "PERSONALITY TRAITS",
            "INTERESTS AND HOBBIES",
            "WRITING STYLE",
            "POSSIBLE DEMOGRAPHICS",
            "BEHAVIORAL PATTERNS",
            "VALUES AND BELIEFS",
        ] {
            assert!(prompt.contains(section), "missing section: {}", section);
        }
        assert!(prompt.contains("[CITATION: POST/COMMENT X - brief quote]"));
    }
}
