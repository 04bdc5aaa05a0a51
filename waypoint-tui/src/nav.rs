//! Screen routing with session guards.
//!
//! Guards run synchronously against token presence only; whether the token
//! is still valid is discovered on the first authenticated request.

use serde::{Deserialize, Serialize};
use waypoint_core::NoteId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    Login,
    Register,
    Profile,
    NoteList,
    NoteCreate,
    NoteDetail(NoteId),
    NoteEdit(NoteId),
    NotFound,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Log in",
            Route::Register => "Register",
            Route::Profile => "Profile",
            Route::NoteList => "Notes",
            Route::NoteCreate => "New note",
            Route::NoteDetail(_) => "Note",
            Route::NoteEdit(_) => "Edit note",
            Route::NotFound => "Not found",
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Profile
                | Route::NoteList
                | Route::NoteCreate
                | Route::NoteDetail(_)
                | Route::NoteEdit(_)
        )
    }

    /// Login and register are pointless with a live session.
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guarded {
    Allow(Route),
    /// Bounce to login, remembering where the user wanted to go.
    RedirectToLogin { return_to: Route },
    /// Authenticated users skip the auth screens.
    RedirectToNotes,
}

pub fn resolve(target: Route, has_session: bool) -> Guarded {
    if target.requires_auth() && !has_session {
        return Guarded::RedirectToLogin { return_to: target };
    }
    if target.is_guest_only() && has_session {
        return Guarded::RedirectToNotes;
    }
    Guarded::Allow(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_bounce_guests_to_login() {
        for target in [
            Route::Profile,
            Route::NoteList,
            Route::NoteCreate,
            Route::NoteDetail(5),
            Route::NoteEdit(5),
        ] {
            assert_eq!(
                resolve(target, false),
                Guarded::RedirectToLogin { return_to: target }
            );
            assert_eq!(resolve(target, true), Guarded::Allow(target));
        }
    }

    #[test]
    fn auth_screens_bounce_logged_in_users() {
        assert_eq!(resolve(Route::Login, true), Guarded::RedirectToNotes);
        assert_eq!(resolve(Route::Register, true), Guarded::RedirectToNotes);
        assert_eq!(resolve(Route::Login, false), Guarded::Allow(Route::Login));
    }

    #[test]
    fn public_routes_pass_through() {
        for has_session in [false, true] {
            assert_eq!(resolve(Route::Home, has_session), Guarded::Allow(Route::Home));
            assert_eq!(
                resolve(Route::NotFound, has_session),
                Guarded::Allow(Route::NotFound)
            );
        }
    }
}
