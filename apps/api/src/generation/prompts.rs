// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Temperature for the extract pass. Deterministic JSON.
pub const EXTRACT_TEMPERATURE: f32 = 0.0;

/// Temperature for the compose pass.
pub const COMPOSE_TEMPERATURE: f32 = 0.3;

/// System prompt for fact extraction.
pub const EXTRACT_SYSTEM: &str = "You extract structured resume data. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Extract prompt template.
/// Replace: {json_only_instruction}, {grounding_instruction}, {base_resume}, {job_listing}
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"{json_only_instruction}

{grounding_instruction}

Read the candidate's BASE RESUME and the JOB LISTING. Extract only facts that appear in the
base resume, and map them against what the job asks for.

Return a JSON object with this EXACT schema (no extra fields):
{
  "targetCompany": "Company named in the listing, or null",
  "targetRoleTitle": "Role title from the listing, or null",
  "jobKeywords": ["Rust", "distributed systems"],
  "requirements": [
    {
      "requirement": "5+ years of backend development",
      "keywords": ["backend"],
      "evidence": ["Senior Engineer at Acme, 2018-2024"],
      "supportLevel": "strong"
    }
  ],
  "roles": [
    {
      "title": "Senior Engineer",
      "company": "Acme",
      "location": "Remote",
      "start": "2018",
      "end": "2024",
      "bullets": ["Verbatim or lightly cleaned achievement from the base resume"]
    }
  ],
  "topAchievements": ["Strongest quantified achievements, copied from the base resume"],
  "education": [
    {"degree": "B.S.", "field": "Computer Science", "institution": "Purdue University", "details": []}
  ],
  "certifications": [{"name": "CKA", "issuer": "CNCF", "date": "2022"}],
  "gaps": ["Job requirements the base resume does not support"]
}

Rules:
- supportLevel is exactly one of "strong", "weak", "unsupported".
- Use null for unknown optional values; use [] for empty lists.
- Roles appear most recent first.
- Never move a fact from the job listing into the candidate's roles, education or certifications.

BASE RESUME:
{base_resume}

JOB LISTING:
{job_listing}"#;

/// System prompt for composing the tailored Markdown resume.
pub const COMPOSE_SYSTEM: &str = "You write precise, grounded resumes. \
    You respond with the resume in Markdown only — no preamble, no commentary, no code fences.";

/// Compose prompt template.
/// Replace: {grounding_instruction}, {tone_guidance}, {emphasis_guidance},
///          {section_names}, {facts_json}
pub const COMPOSE_PROMPT_TEMPLATE: &str = r####"{grounding_instruction}

Write a one-page resume tailored to the target role using ONLY the facts in the JSON below.

TONE: {tone_guidance}
EMPHASIS: {emphasis_guidance}

FORMAT (follow exactly — the output is converted to a Word document line by line):
- Do NOT write the candidate's name or contact details; they are added separately.
- Section titles go on their own line, in capitals, with no # marker. Use only these
  titles, in a sensible order, omitting any with no content: {section_names}
- Each role starts with a line "### Title | Company | Start – End".
- Achievements are bullets starting with "- ". Use **double asterisks** to bold a short
  key phrase or metric; never bold a whole bullet.
- Skills are short "- " bullets of one to three words each, one skill or tool per bullet.
- Each education entry is one line: "Degree, Field — Institution".
- Leave one blank line between sections. No tables, links, images or horizontal rules.
- Do not mention gaps or unsupported requirements.

RESUME FACTS (source of truth):
{facts_json}"####;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_template_keeps_role_line_format() {
        assert!(COMPOSE_PROMPT_TEMPLATE.contains("\"### Title | Company | Start – End\""));
        assert!(COMPOSE_PROMPT_TEMPLATE.ends_with("{facts_json}"));
    }

    #[test]
    fn test_extract_template_has_all_placeholders() {
        for placeholder in [
            "{json_only_instruction}",
            "{grounding_instruction}",
            "{base_resume}",
            "{job_listing}",
        ] {
            assert!(EXTRACT_PROMPT_TEMPLATE.contains(placeholder), "{placeholder}");
        }
    }
}
