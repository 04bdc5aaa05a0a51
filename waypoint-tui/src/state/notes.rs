//! Note list state: offset pagination, title search, last-request-wins.
//!
//! Every fetch is tagged with a token from a monotonically increasing
//! counter. A response is applied only when its token is still current, so
//! a slow earlier request can never overwrite a newer one.

use crate::errors::AppError;
use waypoint_api::types::{ListNotesResponse, NoteResponse};
use waypoint_core::NoteId;

/// Identifies one in-flight list request.
pub type FetchToken = u64;

#[derive(Debug)]
pub struct NotesState {
    pub notes: Vec<NoteResponse>,
    /// Total matching rows on the server, not just what is loaded.
    pub total: i64,
    /// Items loaded so far; doubles as the next request offset.
    pub offset: i64,
    pub page_size: i64,
    pub has_more: bool,
    pub all_loaded: bool,
    pub is_loading: bool,
    /// Active search filter. Empty means unfiltered browsing.
    pub search_query: String,
    pub selected: Option<NoteId>,
    pub error: Option<String>,
    seq: FetchToken,
}

impl NotesState {
    pub fn new(page_size: i64) -> Self {
        Self {
            notes: Vec::new(),
            total: 0,
            offset: 0,
            page_size,
            has_more: false,
            all_loaded: false,
            is_loading: false,
            search_query: String::new(),
            selected: None,
            error: None,
            seq: 0,
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }

    /// Load-more is a silent no-op while loading, while a search filter is
    /// active, or when everything is already in.
    pub fn can_load_more(&self) -> bool {
        !self.is_loading && !self.is_searching() && self.has_more
    }

    /// First page, no filter.
    pub fn begin_initial_load(&mut self) -> FetchToken {
        self.search_query.clear();
        self.begin(0)
    }

    /// Next page of the unfiltered list, if one is due.
    pub fn begin_load_more(&mut self) -> Option<(FetchToken, i64)> {
        if !self.can_load_more() {
            return None;
        }
        let offset = self.offset;
        Some((self.begin(offset), offset))
    }

    /// Commit a search query and restart from offset zero. Supersedes any
    /// request still in flight.
    pub fn begin_search(&mut self, query: String) -> FetchToken {
        self.search_query = query;
        self.begin(0)
    }

    /// Drop the filter and refetch the unfiltered first page.
    pub fn clear_search(&mut self) -> FetchToken {
        self.search_query.clear();
        self.begin(0)
    }

    pub fn current_search(&self) -> Option<&str> {
        if self.search_query.is_empty() {
            None
        } else {
            Some(&self.search_query)
        }
    }

    /// True while `token` names the newest request.
    pub fn is_current(&self, token: FetchToken) -> bool {
        token == self.seq
    }

    /// Apply a finished fetch. Returns false when the response was stale
    /// and ignored.
    pub fn apply_page(
        &mut self,
        token: FetchToken,
        request_offset: i64,
        result: Result<ListNotesResponse, AppError>,
    ) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(page) => {
                if request_offset == 0 {
                    self.notes = page.notes;
                } else {
                    self.notes.extend(page.notes);
                }
                self.total = page.total;
                self.offset = self.notes.len() as i64;
                self.has_more = self.offset < self.total;
                self.all_loaded = !self.has_more && self.total > 0;
                self.error = None;
                if let Some(id) = self.selected {
                    if !self.notes.iter().any(|n| n.id == id) {
                        self.selected = self.notes.first().map(|n| n.id);
                    }
                } else {
                    self.selected = self.notes.first().map(|n| n.id);
                }
            }
            Err(err) => {
                self.error = Some(err.user_message().to_string());
            }
        }
        true
    }

    /// Patch a note in place after an update round-trip.
    pub fn upsert(&mut self, note: NoteResponse) {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(slot) => *slot = note,
            None => self.notes.push(note),
        }
    }

    /// Drop a deleted note locally; counters shrink with it.
    pub fn remove(&mut self, note_id: NoteId) {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != note_id);
        if self.notes.len() < before {
            self.total = (self.total - 1).max(0);
            self.offset = self.notes.len() as i64;
            self.has_more = self.offset < self.total;
            self.all_loaded = !self.has_more && self.total > 0;
        }
        if self.selected == Some(note_id) {
            self.selected = self.notes.first().map(|n| n.id);
        }
    }

    pub fn selected_note(&self) -> Option<&NoteResponse> {
        let id = self.selected?;
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.notes.iter().position(|n| n.id == id)
    }

    /// Returns true when the cursor was already on the last loaded note,
    /// which is the cue to fetch the next page.
    pub fn select_next(&mut self) -> bool {
        let Some(index) = self.selected_index() else {
            self.selected = self.notes.first().map(|n| n.id);
            return false;
        };
        if index + 1 < self.notes.len() {
            self.selected = Some(self.notes[index + 1].id);
            false
        } else {
            true
        }
    }

    pub fn select_prev(&mut self) {
        let Some(index) = self.selected_index() else {
            self.selected = self.notes.first().map(|n| n.id);
            return;
        };
        if index > 0 {
            self.selected = Some(self.notes[index - 1].id);
        }
    }

    fn begin(&mut self, offset: i64) -> FetchToken {
        self.seq += 1;
        self.is_loading = true;
        self.error = None;
        if offset == 0 {
            self.offset = 0;
        }
        self.seq
    }
}
