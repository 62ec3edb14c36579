//! Presentation of character records as text cards.

use chardex_api::disney::Character;

/// Image shown for characters without a portrait.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150?text=No+Image";

/// Link target used when a character has no source page.
pub const NO_SOURCE_URL: &str = "#";

/// Message shown when a search returns no characters.
pub const NO_RESULTS_MESSAGE: &str = "No characters found or API response format is incorrect.";

/// First entry of every selection list.
pub const SELECT_PLACEHOLDER: &str = "Select an Option";

/// Display-ready view of a [`Character`] with fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCard {
    /// Name, or `No Name`.
    pub name: String,
    /// Portrait URL, or the placeholder image.
    pub image_url: String,
    /// Comma-separated films, or `No Films`.
    pub films: String,
    /// Comma-separated TV shows, or `No TV Shows`.
    pub tv_shows: String,
    /// Source page URL, or `#`.
    pub source_url: String,
}

impl From<&Character> for CharacterCard {
    fn from(character: &Character) -> Self {
        Self {
            name: text_or(character.name.as_deref(), "No Name"),
            image_url: text_or(character.image_url.as_deref(), PLACEHOLDER_IMAGE_URL),
            films: list_or(character.films.as_deref(), "No Films"),
            tv_shows: list_or(character.tv_shows.as_deref(), "No TV Shows"),
            source_url: text_or(character.source_url.as_deref(), NO_SOURCE_URL),
        }
    }
}

impl CharacterCard {
    /// Returns `true` if the card links to a real source page.
    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source_url != NO_SOURCE_URL
    }

    /// Returns the card body as display lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format!("Image: {}", self.image_url),
            format!("Films: {}", self.films),
            format!("TV Shows: {}", self.tv_shows),
            format!("More Info: {}", self.source_url),
        ]
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    String::from(value.filter(|v| !v.is_empty()).unwrap_or(fallback))
}

fn list_or(values: Option<&[String]>, fallback: &str) -> String {
    values
        .filter(|v| !v.is_empty())
        .map_or_else(|| String::from(fallback), |v| v.join(", "))
}

/// Builds the entries of a selection list: placeholder first, then `items`.
#[must_use]
pub fn selection_options(items: &[String]) -> Vec<String> {
    std::iter::once(String::from(SELECT_PLACEHOLDER))
        .chain(items.iter().cloned())
        .collect()
}

/// Logs search results as cards, or the empty-result message.
pub fn report_characters(characters: &[Character]) {
    if characters.is_empty() {
        tracing::info!("{}", NO_RESULTS_MESSAGE);
        return;
    }

    for card in characters.iter().map(CharacterCard::from) {
        for line in card.lines() {
            tracing::info!("{}", line);
        }
        tracing::info!("---");
    }
    tracing::info!("Total: {} characters", characters.len());
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};

    use super::*;

    fn mickey() -> Character {
        Character {
            id: Some(4703),
            name: Some(String::from("Mickey Mouse")),
            image_url: Some(String::from("https://example.com/mickey.png")),
            films: Some(vec![String::from("Fantasia"), String::from("Fantasia 2000")]),
            tv_shows: Some(vec![String::from("House of Mouse")]),
            source_url: Some(String::from("https://disney.fandom.com/wiki/Mickey_Mouse")),
            ..Character::default()
        }
    }

    #[test]
    fn test_card_from_full_character() {
        // Arrange
        let character = mickey();

        // Act
        let card = CharacterCard::from(&character);

        // Assert
        assert_eq!(card.name, "Mickey Mouse");
        assert_eq!(card.films, "Fantasia, Fantasia 2000");
        assert_eq!(card.tv_shows, "House of Mouse");
        assert!(card.has_source());
    }

    #[test]
    fn test_card_fallbacks_for_missing_fields() {
        // Arrange
        let character = Character::default();

        // Act
        let card = CharacterCard::from(&character);

        // Assert
        assert_eq!(card.name, "No Name");
        assert_eq!(card.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(card.films, "No Films");
        assert_eq!(card.tv_shows, "No TV Shows");
        assert_eq!(card.source_url, "#");
        assert!(!card.has_source());
    }

    #[test]
    fn test_card_fallbacks_for_empty_values() {
        // Arrange
        let character = Character {
            name: Some(String::new()),
            films: Some(vec![]),
            tv_shows: Some(vec![]),
            ..Character::default()
        };

        // Act
        let card = CharacterCard::from(&character);

        // Assert
        assert_eq!(card.name, "No Name");
        assert_eq!(card.films, "No Films");
        assert_eq!(card.tv_shows, "No TV Shows");
    }

    #[test]
    fn test_card_lines() {
        // Arrange
        let card = CharacterCard::from(&mickey());

        // Act
        let lines = card.lines();

        // Assert
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Mickey Mouse");
        assert_eq!(lines[2], "Films: Fantasia, Fantasia 2000");
        assert_eq!(lines[4], "More Info: https://disney.fandom.com/wiki/Mickey_Mouse");
    }

    #[test]
    fn test_selection_options_start_with_placeholder() {
        // Arrange
        let items = vec![String::from("Fantasia"), String::from("Hercules")];

        // Act
        let options = selection_options(&items);

        // Assert
        assert_eq!(options, vec![SELECT_PLACEHOLDER, "Fantasia", "Hercules"]);
    }

    #[test]
    fn test_selection_options_empty() {
        // Arrange & Act
        let options = selection_options(&[]);

        // Assert
        assert_eq!(options, vec![SELECT_PLACEHOLDER]);
    }

    #[test]
    fn test_report_characters_empty() {
        // Arrange
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg(NO_RESULTS_MESSAGE)))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || report_characters(&[]));

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_report_characters_prints_cards() {
        // Arrange
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("Mickey Mouse")))
            .event(expect::event().with_fields(expect::msg("Image: https://example.com/mickey.png")))
            .event(expect::event().with_fields(expect::msg("Films: Fantasia, Fantasia 2000")))
            .event(expect::event().with_fields(expect::msg("TV Shows: House of Mouse")))
            .event(expect::event().with_fields(expect::msg(
                "More Info: https://disney.fandom.com/wiki/Mickey_Mouse",
            )))
            .event(expect::event().with_fields(expect::msg("---")))
            .event(expect::event().with_fields(expect::msg("Total: 1 characters")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || report_characters(&[mickey()]));

        // Assert
        handle.assert_finished();
    }
}
