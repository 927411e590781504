//! Tone labels and their static prompt/sampling profiles.
//!
//! Two immutable tables indexed by [`Tone`]: one holds the instruction
//! block, the other the sampling temperature. Every label, recognized or
//! not, resolves to exactly one entry in each.

use std::fmt;

/// Label shown to users when the request carries no tone.
pub const DISPLAY_DEFAULT_TONE: &str = "professional";

/// Closed set of reply tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Professional,
    Friendly,
    Casual,
    Enthusiastic,
    Empathetic,
    /// Fallback for absent or unrecognized labels.
    Default,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Casual,
        Tone::Enthusiastic,
        Tone::Empathetic,
        Tone::Default,
    ];

    /// Resolve a request label. Matching is case-insensitive and nothing
    /// else: surrounding whitespace makes a label unrecognized.
    pub fn resolve(label: Option<&str>) -> Tone {
        let Some(label) = label else {
            return Tone::Default;
        };
        match label.to_lowercase().as_str() {
            "professional" => Tone::Professional,
            "friendly" => Tone::Friendly,
            "casual" => Tone::Casual,
            "enthusiastic" => Tone::Enthusiastic,
            "empathetic" => Tone::Empathetic,
            _ => Tone::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Casual => "casual",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Empathetic => "empathetic",
            Tone::Default => "default",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn instructions(self) -> &'static ToneInstructions {
        &INSTRUCTION_TABLE[self.index()]
    }

    pub fn temperature(self) -> f64 {
        TEMPERATURE_TABLE[self.index()]
    }

    pub fn profile(self) -> ToneProfile {
        ToneProfile {
            instructions: self.instructions(),
            temperature: self.temperature(),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label used in logs and user-facing error text. Absent or empty labels
/// read as `professional` even though lookup treats them as [`Tone::Default`].
pub fn display_tone(label: Option<&str>) -> &str {
    match label {
        Some(label) if !label.is_empty() => label,
        _ => DISPLAY_DEFAULT_TONE,
    }
}

/// The four labeled lines describing a tone to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneInstructions {
    pub tone: &'static str,
    pub style: &'static str,
    pub language: &'static str,
    pub purpose: &'static str,
}

impl ToneInstructions {
    /// Render as `TONE:`/`STYLE:`/`LANGUAGE:`/`PURPOSE:` lines plus a blank line.
    pub fn render(&self) -> String {
        format!(
            "TONE: {}\nSTYLE: {}\nLANGUAGE: {}\nPURPOSE: {}\n\n",
            self.tone, self.style, self.language, self.purpose
        )
    }
}

/// Instruction block and temperature resolved for one tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneProfile {
    pub instructions: &'static ToneInstructions,
    pub temperature: f64,
}

static INSTRUCTION_TABLE: [ToneInstructions; 6] = [
    ToneInstructions {
        tone: "Professional and formal",
        style: "Business-appropriate, respectful, clear, and concise",
        language: "Use formal language, proper grammar, and avoid contractions",
        purpose: "Maintain professional relationships and clear communication",
    },
    ToneInstructions {
        tone: "Warm and friendly",
        style: "Approachable, positive, and engaging",
        language: "Use contractions, friendly expressions, and positive language",
        purpose: "Build rapport and maintain positive relationships",
    },
    ToneInstructions {
        tone: "Relaxed and casual",
        style: "Conversational, informal, and comfortable",
        language: "Use everyday language, contractions, and friendly expressions",
        purpose: "Communicate in a relaxed, approachable manner",
    },
    ToneInstructions {
        tone: "Energetic and enthusiastic",
        style: "Positive, excited, and motivational",
        language: "Use exclamation points sparingly, positive adjectives, and energetic phrases",
        purpose: "Convey excitement and positive energy",
    },
    ToneInstructions {
        tone: "Understanding and supportive",
        style: "Compassionate, caring, and validating",
        language: "Use supportive phrases, show understanding, and be reassuring",
        purpose: "Show empathy and build trust",
    },
    ToneInstructions {
        tone: "Professional and balanced",
        style: "Clear, respectful, and appropriate for business communication",
        language: "Use standard professional language",
        purpose: "Effective and clear communication",
    },
];

static TEMPERATURE_TABLE: [f64; 6] = [0.3, 0.6, 0.8, 0.9, 0.5, 0.7];
