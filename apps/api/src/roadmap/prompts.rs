pub const ROADMAP_SYSTEM: &str = "You are a career development advisor for university students. \
    Give concrete, practical guidance.";

/// Placeholders: `{role}`, `{skills}`, `{experience}`.
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Generate a detailed career development roadmap for someone interested in becoming a {role}.

Current skills: {skills}
{experience}

The roadmap should include:
1. Short-term goals (next 3-6 months)
2. Medium-term goals (6-18 months)
3. Long-term goals (1.5-3 years)
4. Specific skills to develop at each stage
5. Recommended learning resources (courses, books, etc.)
6. Potential career milestones to aim for
7. Industry certifications that would be valuable

Format the response in a structured way that can be easily displayed to the user."#;
