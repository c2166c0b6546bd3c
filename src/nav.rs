//! Page navigation mirrored into browser history.
//!
//! Browser events are first turned into a [`Transition`] by the pure
//! [`resolve`] function, then applied through [`Navigator::apply_state`] as two
//! separate steps: the view update and the history write.

use crate::page::PageId;

/// What the page currently shows; mirrored into the history payload and the
/// URL fragment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub page: PageId,
}

/// The visible side of navigation: sections, controls, background motif.
pub trait PageView {
    /// Make `page` the only active section and control. Missing elements are
    /// skipped.
    fn render(&mut self, page: PageId);
}

/// The session history the navigator writes to.
pub trait HistoryPort {
    /// The `page` field of the current entry's payload, as stored.
    fn current_entry(&self) -> Option<String>;
    /// Add an entry for `page` with a matching `#page` URL.
    fn push(&mut self, page: PageId);
    /// Overwrite the current entry with `page` and `#page`.
    fn replace(&mut self, page: PageId);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// A control asked for this page (raw attribute value).
    Click(String),
    /// Back/forward landed on an entry.
    PopState {
        state_page: Option<String>,
        hash: String,
    },
    /// First load or reload, with the address fragment at that time.
    Load { hash: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryOp {
    Push,
    Replace,
    Keep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub page: PageId,
    pub history: HistoryOp,
}

/// Decide which page an event leads to and how history must follow.
///
/// `current_entry` is the page recorded in the active history entry, used to
/// avoid pushing a duplicate of it.
pub fn resolve(event: &NavEvent, current_entry: Option<&str>) -> Transition {
    match event {
        NavEvent::Click(raw) => {
            let page = PageId::normalize(raw);
            let history = if current_entry == Some(page.as_str()) {
                HistoryOp::Keep
            } else {
                HistoryOp::Push
            };
            Transition { page, history }
        }
        NavEvent::PopState { state_page, hash } => {
            let raw = state_page
                .as_deref()
                .filter(|page| !page.is_empty())
                .or_else(|| Some(strip_hash(hash)).filter(|page| !page.is_empty()))
                .unwrap_or_default();
            Transition {
                page: PageId::normalize(raw),
                history: HistoryOp::Keep,
            }
        }
        NavEvent::Load { hash } => Transition {
            page: PageId::normalize(strip_hash(hash)),
            history: HistoryOp::Replace,
        },
    }
}

fn strip_hash(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

/// Keeps the view and history agreeing on a single [`PageId`].
pub struct Navigator<V, H> {
    view: V,
    history: H,
    state: NavigationState,
}

impl<V: PageView, H: HistoryPort> Navigator<V, H> {
    pub fn new(view: V, history: H) -> Self {
        Self {
            view,
            history,
            state: NavigationState::default(),
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Navigate to `raw` (normalized), pushing history unless the current
    /// entry already records that page.
    pub fn show_page(&mut self, raw: &str) -> Transition {
        self.dispatch(NavEvent::Click(raw.to_owned()))
    }

    /// Same view update as [`Navigator::show_page`]; history is left alone.
    pub fn update_view_only(&mut self, raw: &str) -> PageId {
        let page = PageId::normalize(raw);
        self.apply_view(page);
        page
    }

    pub fn dispatch(&mut self, event: NavEvent) -> Transition {
        let current = self.history.current_entry();
        let transition = resolve(&event, current.as_deref());
        self.apply_state(transition);
        transition
    }

    /// The single place a transition takes effect: view first, then history.
    pub fn apply_state(&mut self, transition: Transition) {
        self.apply_view(transition.page);
        self.apply_history(transition);
    }

    pub fn apply_view(&mut self, page: PageId) {
        self.state = NavigationState { page };
        self.view.render(page);
    }

    pub fn apply_history(&mut self, transition: Transition) {
        match transition.history {
            HistoryOp::Push => self.history.push(transition.page),
            HistoryOp::Replace => self.history.replace(transition.page),
            HistoryOp::Keep => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_on_current_entry_keeps_history() {
        let t = resolve(&NavEvent::Click("skills".into()), Some("skills"));
        assert_eq!(t.page, PageId::Skills);
        assert_eq!(t.history, HistoryOp::Keep);
    }

    #[test]
    fn click_on_unknown_page_targets_home() {
        let t = resolve(&NavEvent::Click("contact".into()), Some("skills"));
        assert_eq!(t.page, PageId::Home);
        assert_eq!(t.history, HistoryOp::Push);
    }

    #[test]
    fn popstate_prefers_payload_then_hash() {
        let from_payload = NavEvent::PopState {
            state_page: Some("education".into()),
            hash: "#skills".into(),
        };
        assert_eq!(resolve(&from_payload, None).page, PageId::Education);

        let from_hash = NavEvent::PopState {
            state_page: Some(String::new()),
            hash: "#skills".into(),
        };
        assert_eq!(resolve(&from_hash, None).page, PageId::Skills);

        let neither = NavEvent::PopState {
            state_page: None,
            hash: String::new(),
        };
        let t = resolve(&neither, Some("experience"));
        assert_eq!(t.page, PageId::Home);
        assert_eq!(t.history, HistoryOp::Keep);
    }

    #[test]
    fn invalid_payload_does_not_fall_through_to_hash() {
        let event = NavEvent::PopState {
            state_page: Some("bogus".into()),
            hash: "#skills".into(),
        };
        assert_eq!(resolve(&event, None).page, PageId::Home);
    }

    #[test]
    fn load_replaces_with_valid_hash_or_home() {
        let t = resolve(&NavEvent::Load { hash: "#experience".into() }, None);
        assert_eq!(t.page, PageId::Experience);
        assert_eq!(t.history, HistoryOp::Replace);

        let t = resolve(&NavEvent::Load { hash: "#nope".into() }, None);
        assert_eq!(t.page, PageId::Home);
    }
}
