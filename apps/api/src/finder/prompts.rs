// Prompt construction for the game finder.

use crate::finder::models::{FilterPayload, GameSuggestion};

/// How many suggestions the model is asked for.
pub const SUGGESTION_COUNT: usize = 3;

/// Renders the Gemini prompt for a filter payload.
///
/// Missing lists render as empty strings. A missing description renders as
/// `any`, a missing device as `Any`, and anything but `withGroup: true` as `No`.
pub fn render_find_games_prompt(filters: &FilterPayload) -> String {
    let description = filters.description.as_deref().unwrap_or("any");
    let genres = join_tags(filters.genres.as_deref());
    let with_group = if filters.with_group.unwrap_or(false) {
        "Yes"
    } else {
        "No"
    };
    let device = filters.device.as_deref().unwrap_or("Any");
    let mechanics = join_tags(filters.mechanics.as_deref());
    let vibes = join_tags(filters.vibes.as_deref());
    let example = example_response();

    format!(
        r#"Find {SUGGESTION_COUNT} Roblox games based on these criteria:
- Description: {description}
- Genres: {genres}
- Playing with a group: {with_group}
- Device: {device}
- Mechanics: {mechanics}
- Vibes: {vibes}

Return ONLY a valid JSON array of objects with the following keys for each game:
"gameName", "urlName", "gameId", "description", "matchRating".

- urlName should be a URL-friendly version of the name.
- matchRating must be a number from 1 to 10.
- The description should be short, engaging, and about 2-3 sentences.
- Do not include any text, markdown, or formatting outside of the JSON array.

Example response:
{example}"#
    )
}

fn join_tags(tags: Option<&[String]>) -> String {
    tags.map(|t| t.join(", ")).unwrap_or_default()
}

fn example_response() -> String {
    let example = [GameSuggestion {
        game_name: "Adopt Me!".to_string(),
        url_name: "Adopt-Me".to_string(),
        game_id: 920587237,
        description: "A relaxing social game where you can adopt pets and build a home."
            .to_string(),
        match_rating: 9,
    }];
    serde_json::to_string_pretty(&example).unwrap_or_default()
}
