//! DOM HUD updates
//!
//! Pushes score/level text and toggles modal visibility. Write-only from the
//! game's perspective; nothing here is ever read back. Every lookup degrades
//! silently with a warning so a missing element never stops the frame loop.

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::sim::GameSession;

    fn element(id: &str) -> Option<web_sys::Element> {
        let found = web_sys::window()?.document()?.get_element_by_id(id);
        if found.is_none() {
            log::warn!("missing HUD element #{id}");
        }
        found
    }

    /// Set an element's text content by id
    pub fn set_text(id: &str, text: &str) {
        if let Some(el) = element(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Unhide an element
    pub fn show(id: &str) {
        if let Some(el) = element(id) {
            let _ = el.set_attribute("class", "");
        }
    }

    /// Hide an element
    pub fn hide(id: &str) {
        if let Some(el) = element(id) {
            let _ = el.set_attribute("class", "hidden");
        }
    }

    /// Push the current score and level
    pub fn update_score_display(session: &GameSession) {
        set_text("current-score", &session.score.to_string());
        set_text("current-level", &session.level.to_string());
    }

    /// Inline message on the login modal
    pub fn show_login_error(message: &str) {
        set_text("login-error", message);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::*;

/// Native stubs: the HUD only exists in the browser
#[cfg(not(target_arch = "wasm32"))]
mod native {
    use crate::sim::GameSession;

    pub fn set_text(_id: &str, _text: &str) {}
    pub fn show(_id: &str) {}
    pub fn hide(_id: &str) {}
    pub fn update_score_display(_session: &GameSession) {}
    pub fn show_login_error(_message: &str) {}
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;
