// Prompt constants and prompt-building utilities for the analysis pipeline.

/// Template for the résumé-vs-job-description matching prompt. The wording
/// is part of the observable upstream request; change with care.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = "Analyze this resume:\n\n{resume_text} \n\nAnd match it to this job description:\n\n{job_description}";

/// Builds the matching prompt from the extracted résumé text and the
/// job description.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_and_job_description() {
        let prompt = build_analysis_prompt("Jane Doe\nRust engineer", "Senior Rust role");
        assert!(prompt.contains("Jane Doe\nRust engineer"));
        assert!(prompt.contains("Senior Rust role"));
    }

    #[test]
    fn test_prompt_orders_resume_before_job_description() {
        let prompt = build_analysis_prompt("RESUME_TEXT", "JD_TEXT");
        let resume_at = prompt.find("RESUME_TEXT").unwrap();
        let jd_at = prompt.find("JD_TEXT").unwrap();
        assert!(resume_at < jd_at);
        assert!(prompt.starts_with("Analyze this resume:"));
    }

    #[test]
    fn test_prompt_leaves_no_placeholders() {
        let prompt = build_analysis_prompt("resume", "jd");
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description}"));
    }
}
