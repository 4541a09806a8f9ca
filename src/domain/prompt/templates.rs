//! The assistant's built-in prompts

use std::collections::HashMap;

use super::{PromptTemplate, TemplateError};

const COVER_LETTER_TEMPLATE: &str = "\
You are a professional career consultant. Create a compelling cover letter based on the following:

JOB DESCRIPTION:
${var:job-description}

CANDIDATE'S CV:
${var:cv}

Instructions:
- Write a professional, personalized cover letter
- Highlight relevant experience from the CV that matches the job requirements
- Show enthusiasm for the specific role and company
- Keep it concise (3-4 paragraphs)
- Use professional tone but make it engaging
- Include specific examples from the CV when possible

Please write the cover letter now:";

const CV_OPTIMIZATION_TEMPLATE: &str = "\
You are an expert CV optimization consultant. Optimize the following CV for the target job description:

TARGET JOB DESCRIPTION:
${var:job-description}

CURRENT CV:
${var:cv}

Instructions:
- Optimize the CV content to better match the target job requirements
- Highlight relevant skills, experience, and achievements
- Use industry-relevant keywords from the job description
- Maintain the original structure but improve content relevance
- Make specific sections more impactful for this role
- Ensure all information remains truthful to the original CV
- Format as clean, readable text that can be easily copied

Please provide the optimized CV:";

fn render(template: &str, job_description: &str, cv: &str) -> Result<String, TemplateError> {
    let values = HashMap::from([
        ("job-description".to_string(), job_description.to_string()),
        ("cv".to_string(), cv.to_string()),
    ]);

    PromptTemplate::parse(template).render(&values)
}

/// Compose the cover-letter prompt from a job description and the candidate's CV.
pub fn cover_letter_prompt(job_description: &str, cv: &str) -> Result<String, TemplateError> {
    render(COVER_LETTER_TEMPLATE, job_description, cv)
}

/// Compose the CV-optimization prompt from a target job description and the current CV.
pub fn optimize_cv_prompt(target_job: &str, cv: &str) -> Result<String, TemplateError> {
    render(CV_OPTIMIZATION_TEMPLATE, target_job, cv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_letter_prompt_embeds_inputs() {
        let prompt = cover_letter_prompt("Senior Rust Engineer at Acme", "Ten years of Rust")
            .unwrap();

        assert!(prompt.contains("professional career consultant"));
        assert!(prompt.contains("Senior Rust Engineer at Acme"));
        assert!(prompt.contains("Ten years of Rust"));
        assert!(prompt.ends_with("Please write the cover letter now:"));
    }

    #[test]
    fn test_optimize_cv_prompt_embeds_inputs() {
        let prompt = optimize_cv_prompt("Platform team lead", "Led two teams").unwrap();

        assert!(prompt.contains("CV optimization consultant"));
        assert!(prompt.contains("Platform team lead"));
        assert!(prompt.contains("Led two teams"));
        assert!(prompt.ends_with("Please provide the optimized CV:"));
    }
}
