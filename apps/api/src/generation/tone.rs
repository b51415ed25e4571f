//! Tone and emphasis — caller-selected writing style for the compose pass.

use serde::Deserialize;

/// Voice of the tailored resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Conversational,
    Executive,
}

/// What the tailored resume leads with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Skills,
    #[default]
    Impact,
    Leadership,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GenerationOptions {
    #[serde(default)]
    pub tone: Option<Tone>,
    #[serde(default)]
    pub emphasis: Option<Emphasis>,
}

impl GenerationOptions {
    pub fn tone(&self) -> Tone {
        self.tone.unwrap_or_default()
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis.unwrap_or_default()
    }
}

/// Guidance inserted into the compose prompt for the requested tone.
pub fn tone_guidance(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => {
            "Plain, factual and concise. Strong past-tense verbs, no adjectives \
             that the source does not justify."
        }
        Tone::Conversational => {
            "Approachable and warm while staying professional. Prefer everyday words \
             over jargon; still no first-person pronouns."
        }
        Tone::Executive => {
            "Strategic and outcome-led. Frame work in terms of business results, scope \
             of ownership and organisational reach."
        }
    }
}

/// Guidance inserted into the compose prompt for the requested emphasis.
pub fn emphasis_guidance(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Skills => {
            "Lead with technical depth: place SKILLS directly after SUMMARY and mirror \
             the job's keywords wherever the source supports them."
        }
        Emphasis::Impact => {
            "Lead every bullet with a measurable outcome (percentages, money, time, \
             scale) whenever the source provides one."
        }
        Emphasis::Leadership => {
            "Foreground ownership, mentoring, hiring and cross-team influence where the \
             source supports it."
        }
    }
}
