//! Form state for auth and note create/edit.
//!
//! Forms hold raw string buffers; local validation mirrors the backend's
//! limits so obvious mistakes never leave the client. Server-side 422
//! violations are folded back onto fields by dotted path.

use crate::errors::ValidationError;
use chrono::NaiveDate;
use waypoint_api::types::{NoteCreateRequest, NoteResponse, NoteUpdateRequest};
use waypoint_core::{MAX_KEY_IDEAS_CHARS, MAX_PEOPLE, MAX_TITLE_CHARS, MIN_PEOPLE};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Login and register share the same two-field shape.
#[derive(Debug, Default)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
    pub focus: CredentialsField,
    pub is_submitting: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialsField {
    #[default]
    Email,
    Password,
}

impl CredentialsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            CredentialsField::Email => CredentialsField::Password,
            CredentialsField::Password => CredentialsField::Email,
        };
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            CredentialsField::Email => self.email.push(c),
            CredentialsField::Password => self.password.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            CredentialsField::Email => {
                self.email.pop();
            }
            CredentialsField::Password => {
                self.password.pop();
            }
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting && !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteField {
    #[default]
    Title,
    Place,
    DateFrom,
    DateTo,
    NumberOfPeople,
    KeyIdeas,
}

impl NoteField {
    pub const ALL: [NoteField; 6] = [
        NoteField::Title,
        NoteField::Place,
        NoteField::DateFrom,
        NoteField::DateTo,
        NoteField::NumberOfPeople,
        NoteField::KeyIdeas,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NoteField::Title => "Title",
            NoteField::Place => "Place",
            NoteField::DateFrom => "From (YYYY-MM-DD)",
            NoteField::DateTo => "To (YYYY-MM-DD)",
            NoteField::NumberOfPeople => "People",
            NoteField::KeyIdeas => "Key ideas",
        }
    }

    /// Path the backend uses for this field in 422 violations.
    fn server_path(self) -> &'static str {
        match self {
            NoteField::Title => "body.title",
            NoteField::Place => "body.place",
            NoteField::DateFrom => "body.date_from",
            NoteField::DateTo => "body.date_to",
            NoteField::NumberOfPeople => "body.number_of_people",
            NoteField::KeyIdeas => "body.key_ideas",
        }
    }
}

#[derive(Debug, Default)]
pub struct NoteFormState {
    pub title: String,
    pub place: String,
    pub date_from: String,
    pub date_to: String,
    pub number_of_people: String,
    pub key_ideas: String,
    pub focus: NoteField,
    pub is_submitting: bool,
    /// (field, message) pairs from local validation or the server.
    errors: Vec<(NoteField, String)>,
    pub form_error: Option<String>,
}

impl NoteFormState {
    pub fn new() -> Self {
        Self {
            number_of_people: "1".to_string(),
            ..Self::default()
        }
    }

    /// Pre-fill from an existing note for editing.
    pub fn from_note(note: &NoteResponse) -> Self {
        Self {
            title: note.title.clone(),
            place: note.place.clone(),
            date_from: note.date_from.format(DATE_FORMAT).to_string(),
            date_to: note.date_to.format(DATE_FORMAT).to_string(),
            number_of_people: note.number_of_people.to_string(),
            key_ideas: note.key_ideas.clone().unwrap_or_default(),
            focus: NoteField::Title,
            is_submitting: false,
            errors: Vec::new(),
            form_error: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn next_field(&mut self) {
        let index = NoteField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = NoteField::ALL[(index + 1) % NoteField::ALL.len()];
    }

    pub fn prev_field(&mut self) {
        let index = NoteField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = NoteField::ALL[(index + NoteField::ALL.len() - 1) % NoteField::ALL.len()];
    }

    pub fn push_char(&mut self, c: char) {
        self.buffer_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer_mut().pop();
    }

    pub fn field_errors(&self, field: NoteField) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.form_error.is_some()
    }

    /// Fold a 422 response onto the fields it names. Violations without a
    /// recognizable field land in the form-level error.
    pub fn apply_server_errors(&mut self, validation: &ValidationError) {
        self.errors.clear();
        self.form_error = None;
        let mut unmatched = Vec::new();
        for (path, msg) in validation.all_violations() {
            match NoteField::ALL.iter().find(|f| f.server_path() == path) {
                Some(field) => self.errors.push((*field, msg.clone())),
                None => unmatched.push(msg.clone()),
            }
        }
        if !unmatched.is_empty() {
            self.form_error = Some(unmatched.join("; "));
        } else if self.errors.is_empty() {
            self.form_error = Some(validation.user_message.clone());
        }
    }

    /// Validate locally and build the create payload.
    pub fn to_create_request(&mut self) -> Option<NoteCreateRequest> {
        let validated = self.validate()?;
        Some(NoteCreateRequest {
            title: validated.title,
            place: validated.place,
            date_from: validated.date_from,
            date_to: validated.date_to,
            number_of_people: validated.number_of_people,
            key_ideas: validated.key_ideas,
        })
    }

    /// Validate locally and build the full-record update payload.
    pub fn to_update_request(&mut self) -> Option<NoteUpdateRequest> {
        let validated = self.validate()?;
        Some(NoteUpdateRequest {
            title: validated.title,
            place: validated.place,
            date_from: validated.date_from,
            date_to: validated.date_to,
            number_of_people: validated.number_of_people,
            key_ideas: validated.key_ideas,
        })
    }

    fn validate(&mut self) -> Option<Validated> {
        self.errors.clear();
        self.form_error = None;

        let title = self.title.trim().to_string();
        if title.is_empty() {
            self.errors
                .push((NoteField::Title, "Title is required.".to_string()));
        } else if title.chars().count() > MAX_TITLE_CHARS {
            self.errors.push((
                NoteField::Title,
                format!("Title must be at most {MAX_TITLE_CHARS} characters."),
            ));
        }

        let place = self.place.trim().to_string();
        if place.is_empty() {
            self.errors
                .push((NoteField::Place, "Place is required.".to_string()));
        }

        let date_from = self.parse_date(NoteField::DateFrom, &self.date_from.clone());
        let date_to = self.parse_date(NoteField::DateTo, &self.date_to.clone());
        if let (Some(from), Some(to)) = (date_from, date_to) {
            if to < from {
                self.errors.push((
                    NoteField::DateTo,
                    "End date must not be before the start date.".to_string(),
                ));
            }
        }

        let number_of_people = match self.number_of_people.trim().parse::<i32>() {
            Ok(n) if (MIN_PEOPLE..=MAX_PEOPLE).contains(&n) => Some(n),
            Ok(_) => {
                self.errors.push((
                    NoteField::NumberOfPeople,
                    format!("People must be between {MIN_PEOPLE} and {MAX_PEOPLE}."),
                ));
                None
            }
            Err(_) => {
                self.errors.push((
                    NoteField::NumberOfPeople,
                    "People must be a whole number.".to_string(),
                ));
                None
            }
        };

        let key_ideas = self.key_ideas.trim();
        if key_ideas.chars().count() > MAX_KEY_IDEAS_CHARS {
            self.errors.push((
                NoteField::KeyIdeas,
                format!("Key ideas must be at most {MAX_KEY_IDEAS_CHARS} characters."),
            ));
        }
        let key_ideas = if key_ideas.is_empty() {
            None
        } else {
            Some(key_ideas.to_string())
        };

        if !self.errors.is_empty() {
            return None;
        }
        Some(Validated {
            title,
            place,
            date_from: date_from?,
            date_to: date_to?,
            number_of_people: number_of_people?,
            key_ideas,
        })
    }

    fn parse_date(&mut self, field: NoteField, raw: &str) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.errors
                    .push((field, "Enter a date as YYYY-MM-DD.".to_string()));
                None
            }
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self.focus {
            NoteField::Title => &mut self.title,
            NoteField::Place => &mut self.place,
            NoteField::DateFrom => &mut self.date_from,
            NoteField::DateTo => &mut self.date_to,
            NoteField::NumberOfPeople => &mut self.number_of_people,
            NoteField::KeyIdeas => &mut self.key_ideas,
        }
    }
}

struct Validated {
    title: String,
    place: String,
    date_from: NaiveDate,
    date_to: NaiveDate,
    number_of_people: i32,
    key_ideas: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> NoteFormState {
        NoteFormState {
            title: "Lisbon weekend".to_string(),
            place: "Lisbon".to_string(),
            date_from: "2026-09-01".to_string(),
            date_to: "2026-09-07".to_string(),
            number_of_people: "2".to_string(),
            key_ideas: "tram 28, pasteis".to_string(),
            ..NoteFormState::new()
        }
    }

    #[test]
    fn valid_form_builds_create_request() {
        let mut form = filled_form();
        let request = form.to_create_request().unwrap();
        assert_eq!(request.title, "Lisbon weekend");
        assert_eq!(request.number_of_people, 2);
        assert_eq!(request.key_ideas.as_deref(), Some("tram 28, pasteis"));
        assert!(!form.has_errors());
    }

    #[test]
    fn empty_key_ideas_becomes_none() {
        let mut form = filled_form();
        form.key_ideas = "   ".to_string();
        let request = form.to_create_request().unwrap();
        assert_eq!(request.key_ideas, None);
    }

    #[test]
    fn missing_title_is_rejected() {
        let mut form = filled_form();
        form.title = "  ".to_string();
        assert!(form.to_create_request().is_none());
        assert_eq!(form.field_errors(NoteField::Title), vec!["Title is required."]);
    }

    #[test]
    fn title_over_limit_is_rejected() {
        let mut form = filled_form();
        form.title = "x".repeat(MAX_TITLE_CHARS + 1);
        assert!(form.to_create_request().is_none());
        assert!(!form.field_errors(NoteField::Title).is_empty());

        form.title = "x".repeat(MAX_TITLE_CHARS);
        assert!(form.to_create_request().is_some());
    }

    #[test]
    fn reversed_dates_are_rejected() {
        let mut form = filled_form();
        form.date_from = "2026-09-07".to_string();
        form.date_to = "2026-09-01".to_string();
        assert!(form.to_create_request().is_none());
        assert!(!form.field_errors(NoteField::DateTo).is_empty());
    }

    #[test]
    fn equal_dates_are_allowed() {
        let mut form = filled_form();
        form.date_from = "2026-09-01".to_string();
        form.date_to = "2026-09-01".to_string();
        assert!(form.to_create_request().is_some());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut form = filled_form();
        form.date_to = "07/09/2026".to_string();
        assert!(form.to_create_request().is_none());
        assert_eq!(
            form.field_errors(NoteField::DateTo),
            vec!["Enter a date as YYYY-MM-DD."]
        );
    }

    #[test]
    fn people_bounds_are_enforced() {
        let mut form = filled_form();
        form.number_of_people = "0".to_string();
        assert!(form.to_create_request().is_none());
        form.number_of_people = "51".to_string();
        assert!(form.to_create_request().is_none());
        form.number_of_people = "50".to_string();
        assert!(form.to_create_request().is_some());
        form.number_of_people = "two".to_string();
        assert!(form.to_create_request().is_none());
    }

    #[test]
    fn server_errors_land_on_fields() {
        let mut form = filled_form();
        let validation = ValidationError::new(vec![
            ("body.title".to_string(), "already used".to_string()),
            ("body.weird".to_string(), "nope".to_string()),
        ]);
        form.apply_server_errors(&validation);
        assert_eq!(form.field_errors(NoteField::Title), vec!["already used"]);
        assert_eq!(form.form_error.as_deref(), Some("nope"));
    }

    #[test]
    fn from_note_round_trips_buffers() {
        use chrono::{NaiveDate, Utc};
        let note = NoteResponse {
            id: 5,
            owner_id: 1,
            title: "T".to_string(),
            place: "P".to_string(),
            date_from: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            number_of_people: 3,
            key_ideas: Some("k".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let mut form = NoteFormState::from_note(&note);
        assert_eq!(form.date_from, "2026-09-01");
        let request = form.to_update_request().unwrap();
        assert_eq!(request.number_of_people, 3);
        assert_eq!(request.key_ideas.as_deref(), Some("k"));
    }
}
