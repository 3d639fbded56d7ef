use serde::Deserialize;

// How the assembler treats inconsistent option combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    // Incomplete inputs are dropped from the message
    #[default]
    Lenient,
    // Incomplete or contradictory inputs are rejected
    Strict,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    pub validation: ValidationMode,
}

impl AssemblerConfig {
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
        }
    }
}
