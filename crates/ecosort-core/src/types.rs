use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Enums
// =============================================================================

/// Identifier of a pre-authored response template.
///
/// The dialogue runtime owns the template content; this crate only selects
/// which one to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseId {
    PlasticRecycling,
    PaperRecycling,
    GlassRecycling,
    MetalRecycling,
    Composting,
    EWasteDisposal,
    HazardousWaste,
}

impl ResponseId {
    /// All identifiers, in the order of the default rule table.
    pub const ALL: [ResponseId; 7] = [
        ResponseId::PlasticRecycling,
        ResponseId::PaperRecycling,
        ResponseId::GlassRecycling,
        ResponseId::MetalRecycling,
        ResponseId::Composting,
        ResponseId::EWasteDisposal,
        ResponseId::HazardousWaste,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseId::PlasticRecycling => "plastic_recycling",
            ResponseId::PaperRecycling => "paper_recycling",
            ResponseId::GlassRecycling => "glass_recycling",
            ResponseId::MetalRecycling => "metal_recycling",
            ResponseId::Composting => "composting",
            ResponseId::EWasteDisposal => "e_waste_disposal",
            ResponseId::HazardousWaste => "hazardous_waste",
        }
    }

    /// Template key the dialogue runtime registers for this response.
    pub fn template_name(&self) -> String {
        format!("utter_{}", self.as_str())
    }
}

impl fmt::Display for ResponseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ResponseId {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResponseId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("Unknown response id: {}", s))
    }
}

// =============================================================================
// Resolution outcome
// =============================================================================

/// Outcome of resolving a waste-category slot value.
///
/// Every input maps to exactly one variant; there is no error case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// No category was supplied (absent or blank slot).
    NeedsInput,
    /// A rule matched; render the named template.
    Matched(ResponseId),
    /// Input supplied but no rule matched. Carries the original text,
    /// case preserved, for the fallback message.
    Unmatched(String),
}

impl ResolutionResult {
    pub fn response_id(&self) -> Option<ResponseId> {
        match self {
            ResolutionResult::Matched(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, ResolutionResult::Matched(_))
    }
}
