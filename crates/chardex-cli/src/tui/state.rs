//! Character browser state management.

use chardex_api::disney::{ApiError, Character, FilmsAndTvShows, SearchCriterion};

use crate::card::{CharacterCard, NO_RESULTS_MESSAGE, selection_options};

/// Identifies which widget receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Search query input.
    Query,
    /// Film selection list.
    Films,
    /// TV show selection list.
    TvShows,
    /// Result cards.
    Results,
}

impl Focus {
    const fn next(self) -> Self {
        match self {
            Self::Query => Self::Films,
            Self::Films => Self::TvShows,
            Self::TvShows => Self::Results,
            Self::Results => Self::Query,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Query => Self::Results,
            Self::Films => Self::Query,
            Self::TvShows => Self::Films,
            Self::Results => Self::TvShows,
        }
    }
}

/// What the result pane currently shows. The last search wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No search has been made yet.
    Idle,
    /// A search request is in flight.
    Pending,
    /// Cards of the last successful search.
    Results(Vec<CharacterCard>),
    /// Message of the last failed or empty search.
    Error(String),
}

/// Side effect requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do besides redrawing.
    None,
    /// Run a search.
    Search {
        /// Query text.
        query: String,
        /// Field to match against.
        criterion: SearchCriterion,
    },
    /// Open a URL in the system browser.
    Open(String),
    /// Leave the browser.
    Quit,
}

/// A selection list: placeholder entry followed by options.
#[derive(Debug)]
pub struct SelectionList {
    /// Entries, placeholder first.
    options: Vec<String>,
    /// Cursor position.
    cursor: usize,
}

impl SelectionList {
    /// Creates a list from option values; the cursor starts on the placeholder.
    #[must_use]
    pub fn new(items: &[String]) -> Self {
        Self {
            options: selection_options(items),
            cursor: 0,
        }
    }

    /// Returns all entries, placeholder included.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the chosen value, or `None` while on the placeholder.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.options.get(self.cursor).map(String::as_str)
    }

    /// Moves the cursor up.
    pub const fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }
}

/// State for the character browser TUI.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct BrowserState {
    /// Search query text.
    pub query: String,
    /// Field the query matches against.
    pub criterion: SearchCriterion,
    /// Widget receiving key input.
    pub focus: Focus,
    /// Film selection list.
    pub films: SelectionList,
    /// TV show selection list.
    pub tv_shows: SelectionList,
    /// Result pane content.
    pub outcome: Outcome,
    /// Cursor position in the result cards.
    result_cursor: usize,
}

impl BrowserState {
    /// Creates a new state with both selection lists populated.
    #[must_use]
    pub fn new(summary: &FilmsAndTvShows, criterion: SearchCriterion) -> Self {
        Self {
            query: String::new(),
            criterion,
            focus: Focus::Query,
            films: SelectionList::new(&summary.films),
            tv_shows: SelectionList::new(&summary.tv_shows),
            outcome: Outcome::Idle,
            result_cursor: 0,
        }
    }

    /// Returns the cursor position in the result cards.
    #[must_use]
    pub const fn result_cursor(&self) -> usize {
        self.result_cursor
    }

    /// Returns the shown cards, empty unless the last search succeeded.
    #[must_use]
    pub fn cards(&self) -> &[CharacterCard] {
        match &self.outcome {
            Outcome::Results(cards) => cards,
            _ => &[],
        }
    }

    /// Returns the card under the cursor.
    #[must_use]
    pub fn current_card(&self) -> Option<&CharacterCard> {
        self.cards().get(self.result_cursor)
    }

    /// Moves focus to the next widget.
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous widget.
    pub const fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Appends a character to the query.
    pub fn query_push(&mut self, ch: char) {
        self.query.push(ch);
    }

    /// Removes the last character from the query.
    pub fn query_pop(&mut self) {
        self.query.pop();
    }

    /// Selects the next criterion.
    pub const fn criterion_next(&mut self) {
        self.criterion = self.criterion.next();
    }

    /// Selects the previous criterion.
    pub const fn criterion_prev(&mut self) {
        self.criterion = self.criterion.prev();
    }

    /// Moves the cursor up in the focused list.
    pub const fn move_up(&mut self) {
        match self.focus {
            Focus::Films => self.films.move_up(),
            Focus::TvShows => self.tv_shows.move_up(),
            Focus::Results => self.result_cursor = self.result_cursor.saturating_sub(1),
            Focus::Query => {}
        }
    }

    /// Moves the cursor down in the focused list.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_down(&mut self) {
        match self.focus {
            Focus::Films => self.films.move_down(),
            Focus::TvShows => self.tv_shows.move_down(),
            Focus::Results => {
                if self.result_cursor + 1 < self.cards().len() {
                    self.result_cursor += 1;
                }
            }
            Focus::Query => {}
        }
    }

    /// Builds the search for the query input.
    #[must_use]
    pub fn search_from_query(&self) -> Action {
        Action::Search {
            query: self.query.clone(),
            criterion: self.criterion,
        }
    }

    /// Builds the search for the focused selection list.
    ///
    /// Copies the chosen title into the query input and switches the
    /// criterion. Returns [`Action::None`] while on the placeholder.
    pub fn search_from_selection(&mut self) -> Action {
        let (list, criterion) = match self.focus {
            Focus::Films => (&self.films, SearchCriterion::Film),
            Focus::TvShows => (&self.tv_shows, SearchCriterion::TvShow),
            Focus::Query | Focus::Results => return Action::None,
        };
        let Some(title) = list.selected() else {
            return Action::None;
        };
        self.query = String::from(title);
        self.criterion = criterion;
        self.search_from_query()
    }

    /// Builds the action opening the current card's source page.
    #[must_use]
    pub fn open_current(&self) -> Action {
        self.current_card()
            .filter(|card| card.has_source())
            .map_or(Action::None, |card| Action::Open(card.source_url.clone()))
    }

    /// Marks a search as in flight.
    pub fn begin_search(&mut self) {
        self.outcome = Outcome::Pending;
    }

    /// Replaces the result pane with the outcome of a search.
    pub fn apply_results(&mut self, result: Result<Vec<Character>, ApiError>) {
        self.result_cursor = 0;
        self.outcome = match result {
            Ok(characters) if characters.is_empty() => {
                Outcome::Error(String::from(NO_RESULTS_MESSAGE))
            }
            Ok(characters) => Outcome::Results(characters.iter().map(CharacterCard::from).collect()),
            Err(err) => Outcome::Error(err.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    fn make_test_state() -> BrowserState {
        let summary = FilmsAndTvShows {
            films: vec![String::from("Fantasia"), String::from("Hercules (film)")],
            tv_shows: vec![String::from("House of Mouse")],
        };
        BrowserState::new(&summary, SearchCriterion::Name)
    }

    fn named(name: &str) -> Character {
        Character {
            name: Some(String::from(name)),
            source_url: Some(format!("https://disney.fandom.com/wiki/{name}")),
            ..Character::default()
        }
    }

    #[test]
    fn test_initial_state() {
        // Arrange & Act
        let state = make_test_state();

        // Assert
        assert_eq!(state.focus, Focus::Query);
        assert_eq!(state.outcome, Outcome::Idle);
        assert_eq!(state.films.options().len(), 3);
        assert_eq!(state.tv_shows.options().len(), 2);
        assert!(state.films.selected().is_none());
    }

    #[test]
    fn test_focus_cycle() {
        // Arrange
        let mut state = make_test_state();

        // Act & Assert
        state.focus_next();
        assert_eq!(state.focus, Focus::Films);
        state.focus_prev();
        state.focus_prev();
        assert_eq!(state.focus, Focus::Results);
    }

    #[test]
    fn test_selection_list_bounds() {
        // Arrange
        let mut state = make_test_state();
        state.focus = Focus::TvShows;

        // Act & Assert
        state.move_up();
        assert_eq!(state.tv_shows.cursor(), 0);
        state.move_down();
        state.move_down();
        assert_eq!(state.tv_shows.cursor(), 1);
        assert_eq!(state.tv_shows.selected(), Some("House of Mouse"));
    }

    #[test]
    fn test_search_from_query() {
        // Arrange
        let mut state = make_test_state();
        for ch in "Stitch".chars() {
            state.query_push(ch);
        }
        state.query_pop();
        state.criterion_next();

        // Act
        let action = state.search_from_query();

        // Assert
        assert_eq!(
            action,
            Action::Search {
                query: String::from("Stitc"),
                criterion: SearchCriterion::Film,
            }
        );
    }

    #[test]
    fn test_search_from_selection_placeholder_does_nothing() {
        // Arrange
        let mut state = make_test_state();
        state.focus = Focus::Films;

        // Act
        let action = state.search_from_selection();

        // Assert
        assert_eq!(action, Action::None);
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_search_from_selection_uses_title() {
        // Arrange
        let mut state = make_test_state();
        state.focus = Focus::Films;
        state.move_down();
        state.move_down();

        // Act
        let action = state.search_from_selection();

        // Assert
        assert_eq!(
            action,
            Action::Search {
                query: String::from("Hercules (film)"),
                criterion: SearchCriterion::Film,
            }
        );
        assert_eq!(state.query, "Hercules (film)");
        assert_eq!(state.criterion, SearchCriterion::Film);
    }

    #[test]
    fn test_apply_results_shows_cards() {
        // Arrange
        let mut state = make_test_state();
        state.begin_search();

        // Act
        state.apply_results(Ok(vec![named("Goofy"), named("Pluto")]));

        // Assert
        assert_eq!(state.cards().len(), 2);
        assert_eq!(state.current_card().unwrap().name, "Goofy");
    }

    #[test]
    fn test_apply_results_empty_shows_message() {
        // Arrange
        let mut state = make_test_state();

        // Act
        state.apply_results(Ok(vec![]));

        // Assert
        assert_eq!(state.outcome, Outcome::Error(String::from(NO_RESULTS_MESSAGE)));
        assert!(state.cards().is_empty());
    }

    #[test]
    fn test_apply_results_error_shows_message_verbatim() {
        // Arrange
        let mut state = make_test_state();
        state.apply_results(Ok(vec![named("Goofy")]));

        // Act
        state.apply_results(Err(ApiError::InvalidCriterion(String::from("genre"))));

        // Assert
        assert_eq!(
            state.outcome,
            Outcome::Error(String::from("Invalid search criterion: genre"))
        );
        assert!(state.current_card().is_none());
    }

    #[test]
    fn test_result_cursor_and_open() {
        // Arrange
        let mut state = make_test_state();
        state.apply_results(Ok(vec![named("Goofy"), Character::default()]));
        state.focus = Focus::Results;

        // Act & Assert
        assert_eq!(
            state.open_current(),
            Action::Open(String::from("https://disney.fandom.com/wiki/Goofy"))
        );
        state.move_down();
        state.move_down();
        assert_eq!(state.result_cursor(), 1);
        assert_eq!(state.open_current(), Action::None);
    }
}
