//! Plan editor state and type reconciliation.
//!
//! The derived plan type is a pure function of (current text, saved text,
//! saved type, last AI text). It is recomputed on every edit, never assigned
//! independently, except on explicit load/generate/save events.

use waypoint_api::types::PlanResponse;
use waypoint_core::{plan_text_too_long, GenerationId, NoteId, PlanId, PlanType};

/// Classify the in-progress edit without a server round-trip.
///
/// A plan saved as HYBRID stays HYBRID even when the text reverts to the
/// exact AI original: the last persisted type wins over text equality.
/// Replicated from observed behavior; product rationale is an open question.
pub fn derive_plan_type(
    text: &str,
    saved_text: &str,
    saved_type: Option<PlanType>,
    last_ai_text: Option<&str>,
) -> PlanType {
    if saved_type == Some(PlanType::Hybrid) && text == saved_text {
        return PlanType::Hybrid;
    }
    if last_ai_text == Some(text) {
        if saved_type == Some(PlanType::Hybrid) {
            return PlanType::Hybrid;
        }
        return PlanType::Ai;
    }
    if last_ai_text.is_some()
        || matches!(saved_type, Some(PlanType::Ai) | Some(PlanType::Hybrid))
    {
        return PlanType::Hybrid;
    }
    PlanType::Manual
}

#[derive(Debug, Clone)]
pub struct PlanState {
    pub active_note_id: Option<NoteId>,
    pub plan_id: Option<PlanId>,
    pub text: String,
    pub plan_type: PlanType,
    pub generation_id: Option<GenerationId>,
    last_ai_text: Option<String>,
    saved_text: String,
    saved_type: Option<PlanType>,
    saved_generation_id: Option<GenerationId>,
    /// An AI generation exists that has never been persisted.
    unsaved_generation: bool,
    pub is_loading: bool,
    pub is_saving: bool,
    pub is_generating: bool,
    pub error: Option<String>,
}

impl PlanState {
    pub fn new() -> Self {
        Self {
            active_note_id: None,
            plan_id: None,
            text: String::new(),
            plan_type: PlanType::Manual,
            generation_id: None,
            last_ai_text: None,
            saved_text: String::new(),
            saved_type: None,
            saved_generation_id: None,
            unsaved_generation: false,
            is_loading: false,
            is_saving: false,
            is_generating: false,
            error: None,
        }
    }

    /// Clear everything except the active note id. Idempotent.
    pub fn reset(&mut self) {
        let note_id = self.active_note_id;
        *self = Self::new();
        self.active_note_id = note_id;
    }

    pub fn set_active_note(&mut self, note_id: NoteId) {
        if self.active_note_id != Some(note_id) {
            self.active_note_id = Some(note_id);
            self.reset();
        }
    }

    /// Load a persisted plan into the editor. The saved snapshot equals the
    /// buffer afterwards, so `is_modified` is false.
    pub fn set_initial_plan_data(&mut self, plan: &PlanResponse) {
        self.apply_snapshot(
            Some(plan.id),
            plan.plan_text.clone(),
            Some(plan.plan_type),
            plan.generation_id,
        );
        self.is_loading = false;
        self.error = None;
    }

    /// No persisted plan exists for the note.
    pub fn set_no_plan(&mut self) {
        self.reset();
    }

    /// Record a fresh AI generation. Nothing is persisted until saved.
    pub fn record_generation(&mut self, plan_text: String, generation_id: GenerationId) {
        self.last_ai_text = Some(plan_text.clone());
        self.generation_id = Some(generation_id);
        self.unsaved_generation = true;
        self.is_generating = false;
        self.error = None;
        self.text = plan_text;
        self.recompute_type();
    }

    /// Replace the text buffer and rederive the type.
    pub fn update_text(&mut self, text: String) {
        self.text = text;
        self.recompute_type();
    }

    /// A save round-trip finished; snapshot what the server now holds.
    pub fn mark_saved(&mut self, plan: &PlanResponse) {
        self.plan_id = Some(plan.id);
        self.text = plan.plan_text.clone();
        self.plan_type = plan.plan_type;
        self.generation_id = plan.generation_id;
        self.saved_text = plan.plan_text.clone();
        self.saved_type = Some(plan.plan_type);
        self.saved_generation_id = plan.generation_id;
        self.unsaved_generation = false;
        self.is_saving = false;
        self.error = None;
    }

    /// Throw away unsaved edits (and any unsaved generation) and return to
    /// the last persisted snapshot, or to an empty manual buffer when the
    /// note has no plan yet.
    pub fn discard(&mut self) {
        match self.saved_type {
            Some(saved_type) => {
                self.apply_snapshot(
                    self.plan_id,
                    self.saved_text.clone(),
                    Some(saved_type),
                    self.saved_generation_id,
                );
            }
            None => self.set_no_plan(),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.text != self.saved_text || self.unsaved_generation
    }

    pub fn text_too_long(&self) -> bool {
        plan_text_too_long(&self.text)
    }

    /// Saving needs non-empty text unless an AI generation is being
    /// accepted as-is.
    pub fn can_save(&self) -> bool {
        if self.is_saving || self.is_generating || self.text_too_long() {
            return false;
        }
        if !self.is_modified() {
            return false;
        }
        !self.text.trim().is_empty() || self.generation_id.is_some()
    }

    pub fn can_discard(&self) -> bool {
        self.is_modified() && !self.is_saving
    }

    pub fn has_persisted_plan(&self) -> bool {
        self.plan_id.is_some()
    }

    pub fn last_ai_text(&self) -> Option<&str> {
        self.last_ai_text.as_deref()
    }

    fn apply_snapshot(
        &mut self,
        plan_id: Option<PlanId>,
        text: String,
        plan_type: Option<PlanType>,
        generation_id: Option<GenerationId>,
    ) {
        self.plan_id = plan_id;
        self.saved_text = text.clone();
        self.saved_type = plan_type;
        self.saved_generation_id = generation_id;
        self.generation_id = generation_id;
        // The AI original is not persisted; for a plan saved as pure AI the
        // saved text is by definition the generation output.
        self.last_ai_text = match plan_type {
            Some(PlanType::Ai) => Some(text.clone()),
            _ => None,
        };
        self.unsaved_generation = false;
        self.text = text;
        self.recompute_type();
    }

    fn recompute_type(&mut self) {
        self.plan_type = derive_plan_type(
            &self.text,
            &self.saved_text,
            self.saved_type,
            self.last_ai_text.as_deref(),
        );
    }
}

impl Default for PlanState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn plan_response(id: i64, text: &str, plan_type: PlanType, gen: Option<Uuid>) -> PlanResponse {
        PlanResponse {
            id,
            note_id: 1,
            plan_text: text.to_string(),
            plan_type,
            generation_id: gen,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn fresh_state_is_manual_and_unmodified() {
        let state = PlanState::new();
        assert_eq!(state.plan_type, PlanType::Manual);
        assert!(!state.is_modified());
        assert!(!state.can_save());
    }

    #[test]
    fn typing_without_lineage_stays_manual() {
        let mut state = PlanState::new();
        state.update_text("pack an umbrella".to_string());
        assert_eq!(state.plan_type, PlanType::Manual);
        assert!(state.is_modified());
        assert!(state.can_save());
    }

    #[test]
    fn load_round_trips_and_clears_modified() {
        let mut state = PlanState::new();
        state.set_active_note(1);
        let gen = Uuid::new_v4();
        let plan = plan_response(10, "day 1: museum", PlanType::Ai, Some(gen));
        state.set_initial_plan_data(&plan);

        assert_eq!(state.text, "day 1: museum");
        assert_eq!(state.plan_type, PlanType::Ai);
        assert_eq!(state.generation_id, Some(gen));
        assert!(!state.is_modified());
    }

    #[test]
    fn edit_ai_plan_becomes_hybrid_then_reverts_to_ai() {
        let mut state = PlanState::new();
        state.set_initial_plan_data(&plan_response(10, "X", PlanType::Ai, None));

        state.update_text("Y".to_string());
        assert_eq!(state.plan_type, PlanType::Hybrid);
        assert!(state.is_modified());

        state.update_text("X".to_string());
        assert_eq!(state.plan_type, PlanType::Ai);
        assert!(!state.is_modified());
    }

    #[test]
    fn saved_hybrid_stays_hybrid_when_text_reverts_to_ai_original() {
        let mut state = PlanState::new();
        let gen = Uuid::new_v4();
        state.record_generation("X".to_string(), gen);
        state.update_text("Y".to_string());
        assert_eq!(state.plan_type, PlanType::Hybrid);

        state.mark_saved(&plan_response(10, "Y", PlanType::Hybrid, Some(gen)));
        assert!(!state.is_modified());

        // The persisted type wins over AI text equality.
        state.update_text("X".to_string());
        assert_eq!(state.plan_type, PlanType::Hybrid);
        assert!(state.is_modified());
    }

    #[test]
    fn generation_is_modified_until_saved() {
        let mut state = PlanState::new();
        state.record_generation("X".to_string(), Uuid::new_v4());
        assert_eq!(state.plan_type, PlanType::Ai);
        assert!(state.is_modified());
        // Accept-as-is: empty edits, text equals the generation output.
        assert!(state.can_save());

        state.mark_saved(&plan_response(10, "X", PlanType::Ai, state.generation_id));
        assert!(!state.is_modified());
    }

    #[test]
    fn reset_is_idempotent_and_keeps_note_id() {
        let mut state = PlanState::new();
        state.set_active_note(7);
        state.record_generation("X".to_string(), Uuid::new_v4());
        state.update_text("Y".to_string());

        state.reset();
        let after_once = state.clone();
        state.reset();

        assert_eq!(state.active_note_id, Some(7));
        assert_eq!(state.text, after_once.text);
        assert_eq!(state.plan_type, after_once.plan_type);
        assert_eq!(state.is_modified(), after_once.is_modified());
    }

    #[test]
    fn discard_returns_to_saved_snapshot() {
        let mut state = PlanState::new();
        state.set_initial_plan_data(&plan_response(10, "X", PlanType::Ai, None));
        state.update_text("Y".to_string());
        assert!(state.can_discard());

        state.discard();
        assert_eq!(state.text, "X");
        assert_eq!(state.plan_type, PlanType::Ai);
        assert!(!state.is_modified());
    }

    #[test]
    fn discard_without_saved_plan_empties_the_buffer() {
        let mut state = PlanState::new();
        state.set_active_note(3);
        state.record_generation("X".to_string(), Uuid::new_v4());

        state.discard();
        assert_eq!(state.text, "");
        assert_eq!(state.plan_type, PlanType::Manual);
        assert!(!state.is_modified());
        assert_eq!(state.active_note_id, Some(3));
    }

    #[test]
    fn empty_text_without_generation_cannot_save() {
        let mut state = PlanState::new();
        state.set_initial_plan_data(&plan_response(10, "X", PlanType::Manual, None));
        state.update_text("   ".to_string());
        assert!(!state.can_save());
    }

    #[test]
    fn over_limit_text_cannot_save() {
        let mut state = PlanState::new();
        state.update_text("x".repeat(5001));
        assert!(state.text_too_long());
        assert!(!state.can_save());

        state.update_text("x".repeat(5000));
        assert!(!state.text_too_long());
        assert!(state.can_save());
    }

    #[test]
    fn derive_type_is_pure() {
        let cases = [
            ("X", "X", Some(PlanType::Ai), Some("X"), PlanType::Ai),
            ("Y", "X", Some(PlanType::Ai), Some("X"), PlanType::Hybrid),
            ("X", "Y", Some(PlanType::Hybrid), Some("X"), PlanType::Hybrid),
            ("Y", "Y", Some(PlanType::Hybrid), Some("X"), PlanType::Hybrid),
            ("Z", "", None, None, PlanType::Manual),
            ("X", "", None, Some("X"), PlanType::Ai),
            ("Y", "", None, Some("X"), PlanType::Hybrid),
        ];
        for (text, saved, saved_type, ai, expected) in cases {
            assert_eq!(
                derive_plan_type(text, saved, saved_type, ai),
                expected,
                "text={text:?} saved={saved:?} saved_type={saved_type:?} ai={ai:?}"
            );
            // Same inputs, same answer.
            assert_eq!(
                derive_plan_type(text, saved, saved_type, ai),
                derive_plan_type(text, saved, saved_type, ai)
            );
        }
    }
}
