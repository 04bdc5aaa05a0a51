//! Plan-related API types

use serde::{Deserialize, Serialize};
use waypoint_core::{GenerationId, Plan, PlanType};

/// Response from `POST /notes/{id}/plan/generate`. Nothing is persisted
/// until the text is saved with the returned correlation token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePlanResponse {
    pub plan_text: String,
    pub generation_id: GenerationId,
}

/// Request to create (or accept) the plan for a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanCreateRequest {
    pub plan_text: String,
    pub plan_type: PlanType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_id: Option<GenerationId>,
}

/// Request to update the existing plan for a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanUpdateRequest {
    pub plan_text: String,
    pub plan_type: PlanType,
}

/// Plan responses deserialize directly into the core entity.
pub type PlanResponse = Plan;
