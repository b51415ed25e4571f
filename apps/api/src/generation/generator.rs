//! Resume Tailoring — orchestrates the two-pass generation pipeline.
//!
//! Flow: extract prompt → LLM (JSON facts) → validate as `ResumeFacts` →
//!       compose prompt (facts + tone + emphasis) → LLM (Markdown) → response.
//!
//! The Markdown follows the dialect understood by `export::classifier`.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::export::classifier::SECTION_VOCABULARY;
use crate::generation::facts::ResumeFacts;
use crate::generation::prompts::{
    COMPOSE_PROMPT_TEMPLATE, COMPOSE_SYSTEM, COMPOSE_TEMPERATURE, EXTRACT_PROMPT_TEMPLATE,
    EXTRACT_SYSTEM, EXTRACT_TEMPERATURE,
};
use crate::generation::tone::{emphasis_guidance, tone_guidance, GenerationOptions};
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::{strip_code_fences, TextGenerator};

/// Minimum length (in characters) of both the base resume and the job listing.
pub const MIN_INPUT_CHARS: usize = 50;

/// Request body for resume tailoring.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub base_resume: String,
    pub job_listing: String,
    #[serde(default)]
    pub options: Option<GenerationOptions>,
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.base_resume.trim().chars().count() < MIN_INPUT_CHARS {
            return Err(AppError::Validation(format!(
                "baseResume must be at least {MIN_INPUT_CHARS} characters"
            )));
        }
        if self.job_listing.trim().chars().count() < MIN_INPUT_CHARS {
            return Err(AppError::Validation(format!(
                "jobListing must be at least {MIN_INPUT_CHARS} characters"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub tailored_resume_md: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs both passes and returns the tailored Markdown resume.
pub async fn tailor_resume(
    llm: &dyn TextGenerator,
    request: &GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    let options = request.options.unwrap_or_default();

    info!("Pass 1: extracting resume facts");
    let facts = extract_facts(llm, &request.base_resume, &request.job_listing).await?;
    info!(
        "Extracted {} roles, {} requirements ({} unsupported), target role: {:?}",
        facts.roles.len(),
        facts.requirements.len(),
        facts.unsupported_requirements().count(),
        facts.target_role_title
    );

    info!(
        "Pass 2: composing resume (tone={:?}, emphasis={:?})",
        options.tone(),
        options.emphasis()
    );
    let prompt = build_compose_prompt(&facts, &options)?;
    let markdown = llm
        .generate(COMPOSE_SYSTEM, &prompt, COMPOSE_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Compose LLM call failed: {e}")))?;

    Ok(GenerateResponse {
        tailored_resume_md: strip_code_fences(&markdown).to_string(),
    })
}

/// Pass 1: asks the model for JSON facts and validates them against `ResumeFacts`.
async fn extract_facts(
    llm: &dyn TextGenerator,
    base_resume: &str,
    job_listing: &str,
) -> Result<ResumeFacts, AppError> {
    let prompt = build_extract_prompt(base_resume, job_listing);
    let text = llm
        .generate(EXTRACT_SYSTEM, &prompt, EXTRACT_TEMPERATURE)
        .await
        .map_err(|e| AppError::Llm(format!("Extract LLM call failed: {e}")))?;

    serde_json::from_str::<ResumeFacts>(strip_code_fences(&text)).map_err(|e| {
        error!("Pass 1 extract failed: {e}; raw output: {text}");
        AppError::Extraction(e.to_string())
    })
}

fn build_extract_prompt(base_resume: &str, job_listing: &str) -> String {
    EXTRACT_PROMPT_TEMPLATE
        .replace("{json_only_instruction}", JSON_ONLY_SYSTEM)
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{base_resume}", base_resume)
        .replace("{job_listing}", job_listing)
}

fn build_compose_prompt(
    facts: &ResumeFacts,
    options: &GenerationOptions,
) -> Result<String, AppError> {
    let facts_json = serde_json::to_string_pretty(facts)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize facts: {e}")))?;

    Ok(COMPOSE_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{tone_guidance}", tone_guidance(options.tone()))
        .replace("{emphasis_guidance}", emphasis_guidance(options.emphasis()))
        .replace("{section_names}", &SECTION_VOCABULARY.join(", "))
        .replace("{facts_json}", &facts_json))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
