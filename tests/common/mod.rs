use std::time::Duration;

use pushkind_games::repository::{ApiConfig, HttpRepository};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

/// Repository whose every endpoint points at `server`. Video search and
/// translation are left unconfigured unless `with_keys` is set.
pub fn repository(server: &MockServer, with_keys: bool) -> HttpRepository {
    let key = |value: &str| with_keys.then(|| value.to_string());

    HttpRepository::new(ApiConfig {
        rawg_api_url: server.uri(),
        rawg_api_key: API_KEY.to_string(),
        youtube_api_url: format!("{}/youtube", server.uri()),
        youtube_api_key: key("yt-key"),
        translate_api_url: format!("{}/translate", server.uri()),
        translate_api_key: key("tr-key"),
        request_timeout: Duration::from_secs(5),
    })
    .expect("client builds")
}

pub fn games_page(count: usize) -> Value {
    json!({
        "count": count,
        "results": [
            {
                "id": 3328,
                "name": "The Witcher 3: Wild Hunt",
                "metacritic": 92,
                "background_image": "https://media.rawg.io/media/games/witcher.jpg"
            },
            {
                "id": 58175,
                "name": "God of War",
                "metacritic": 94,
                "background_image": null
            },
            {
                "id": 4200,
                "name": "Portal 2",
                "metacritic": null
            }
        ]
    })
}

pub fn game_details() -> Value {
    json!({
        "id": 3328,
        "name": "The Witcher 3: Wild Hunt",
        "description": "<p>Geralt of Rivia</p>",
        "metacritic": 92,
        "released": "2015-05-18",
        "playtime": 46,
        "esrb_rating": { "name": "Mature" },
        "genres": [{ "slug": "role-playing-games-rpg", "name": "RPG" }],
        "platforms": [{ "platform": { "name": "PC" } }],
        "developers": [{ "name": "CD PROJEKT RED" }],
        "publishers": [],
        "tags": [{ "name": "Open World" }],
        "clip": null,
        "short_screenshots": [{ "image": "https://media.rawg.io/media/screenshots/1.jpg" }],
        "ratings": [{ "title": "exceptional", "count": 4000, "percent": 77.5 }]
    })
}
