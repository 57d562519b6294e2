//! Services backing the game detail page.

use crate::domain::game::{GameDetail, GameSummary, Trailer};
use crate::domain::types::GameId;
use crate::dto::catalog::GameCard;
use crate::dto::detail::{GameDetailPageData, TrailerView};
use crate::encoder::encode_recommended;
use crate::repository::errors::RepositoryError;
use crate::repository::{GameReader, Translator, VideoSearch};
use crate::services::{ServiceError, ServiceResult};

/// Loads a game together with its trailer, screenshots, recommendations and,
/// when `language` is given, a translated description.
///
/// Only the main record is required; every secondary lookup degrades to an
/// empty value on failure.
pub async fn load_game_detail<R>(
    repo: &R,
    id: GameId,
    language: Option<&str>,
) -> ServiceResult<GameDetailPageData>
where
    R: GameReader + VideoSearch + Translator + ?Sized,
{
    let game = repo
        .get_game(id)
        .await
        .map_err(|err| {
            log::error!("Failed to load game {id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let (trailer, screenshots, recommended, (description_html, translated)) = tokio::join!(
        find_trailer(repo, &game),
        load_screenshots(repo, &game),
        load_recommended(repo, &game),
        describe(repo, &game, language),
    );

    let stars = game.score.map(|score| score.stars()).unwrap_or(0);

    Ok(GameDetailPageData {
        stars,
        description_html,
        translated,
        language: language.map(str::to_string),
        trailer: trailer.as_ref().map(TrailerView::from),
        screenshots,
        recommended: recommended.into_iter().map(GameCard::from).collect(),
        game,
    })
}

async fn find_trailer<R>(repo: &R, game: &GameDetail) -> Option<Trailer>
where
    R: VideoSearch + ?Sized,
{
    if let Some(clip) = &game.clip_url {
        return Some(Trailer::Clip(clip.clone()));
    }

    match repo.find_video(&format!("{} trailer", game.name)).await {
        Ok(video) => video.map(Trailer::YouTube),
        Err(RepositoryError::NotConfigured(what)) => {
            log::debug!("Video search disabled: {what} is not set");
            None
        }
        Err(err) => {
            log::error!("Failed to search trailer for game {}: {err}", game.id);
            None
        }
    }
}

async fn load_screenshots<R>(repo: &R, game: &GameDetail) -> Vec<String>
where
    R: GameReader + ?Sized,
{
    if !game.screenshots.is_empty() {
        return game.screenshots.clone();
    }

    repo.list_screenshots(game.id).await.unwrap_or_else(|err| {
        log::error!("Failed to load screenshots for game {}: {err}", game.id);
        Vec::new()
    })
}

async fn load_recommended<R>(repo: &R, game: &GameDetail) -> Vec<GameSummary>
where
    R: GameReader + ?Sized,
{
    let request = encode_recommended(game.primary_genre().map(|genre| genre.slug.as_str()));

    match repo.list_games(&request).await {
        Ok(page) => page
            .items
            .into_iter()
            .filter(|candidate| candidate.id != game.id)
            .collect(),
        Err(err) => {
            log::error!("Failed to load recommendations for game {}: {err}", game.id);
            Vec::new()
        }
    }
}

/// Sanitized description, translated when possible. The flag tells whether
/// the translation was applied.
async fn describe<R>(repo: &R, game: &GameDetail, language: Option<&str>) -> (String, bool)
where
    R: Translator + ?Sized,
{
    let Some(original) = game.description_html.as_deref() else {
        return (String::new(), false);
    };

    let (text, translated) = match language {
        Some(language) => match translate_or_original(repo, original, language).await {
            Some(text) => (text, true),
            None => (original.to_string(), false),
        },
        None => (original.to_string(), false),
    };

    (ammonia::clean(&text), translated)
}

/// Translates `text`, returning `None` when the translator is unavailable or
/// fails so that callers can keep the original.
pub async fn translate_or_original<R>(repo: &R, text: &str, language: &str) -> Option<String>
where
    R: Translator + ?Sized,
{
    match repo.translate(text, language).await {
        Ok(translated) => Some(translated),
        Err(RepositoryError::NotConfigured(what)) => {
            log::debug!("Translation disabled: {what} is not set");
            None
        }
        Err(err) => {
            log::error!("Failed to translate text to '{language}': {err}");
            None
        }
    }
}
