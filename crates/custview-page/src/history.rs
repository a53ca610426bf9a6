//! Navigation history.
//!
//! A linear stack of visited routes with a cursor. Pushing drops any
//! entries ahead of the cursor; going back only ever moves the cursor one
//! step toward older entries.

use crate::route::Route;

/// Browser-style history of visited routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Route>,
    cursor: usize,
}

impl History {
    /// Starts a history at `initial`.
    #[must_use]
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Route currently displayed.
    #[must_use]
    pub fn current(&self) -> &Route {
        &self.entries[self.cursor]
    }

    /// Navigates to `route`, discarding forward entries.
    pub fn push(&mut self, route: Route) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(route);
        self.cursor = self.entries.len() - 1;
        tracing::debug!(route = %self.current(), depth = self.cursor, "navigated");
    }

    /// Returns `true` when there is a prior view to return to.
    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Steps back to the immediately prior view.
    ///
    /// Returns the new current route, or `None` (leaving the history
    /// untouched) when already at the oldest entry.
    pub fn back(&mut self) -> Option<&Route> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        tracing::debug!(route = %self.current(), depth = self.cursor, "navigated back");
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visited() -> History {
        let mut history = History::new(Route::CustomerList);
        history.push(Route::read("C1"));
        history.push(Route::read("C2"));
        history
    }

    #[test]
    fn back_returns_immediately_prior_view() {
        let mut history = visited();
        assert_eq!(history.back(), Some(&Route::read("C1")));
        assert_eq!(history.back(), Some(&Route::CustomerList));
    }

    #[test]
    fn back_at_oldest_entry_is_noop() {
        let mut history = History::new(Route::CustomerList);
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), &Route::CustomerList);
    }

    #[test]
    fn back_never_moves_forward() {
        let mut history = visited();
        let _ = history.back();
        let _ = history.back();
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), &Route::CustomerList);
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut history = visited();
        let _ = history.back();
        history.push(Route::read("C3"));
        assert_eq!(history.current(), &Route::read("C3"));
        assert_eq!(history.back(), Some(&Route::read("C1")));
        assert_eq!(history.back(), Some(&Route::CustomerList));
        assert_eq!(history.back(), None);
    }
}
