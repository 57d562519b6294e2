use actix_web::http::StatusCode;
use actix_web::{Responder, get, web};
use tera::Tera;

use crate::domain::types::GameId;
use crate::forms::game::DetailQuery;
use crate::repository::HttpRepository;
use crate::routes::{base_context, render_template, render_template_with_status};
use crate::services::{ServiceError, detail as detail_service};

#[get("/game/{id}")]
/// Detail page of a single game.
pub async fn show_game(
    path: web::Path<String>,
    params: web::Query<DetailQuery>,
    repo: web::Data<HttpRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context("game");

    let Ok(id) = path.parse::<GameId>() else {
        return render_template_with_status(
            &tera,
            StatusCode::NOT_FOUND,
            "game/not_found.html",
            &context,
        );
    };

    match detail_service::load_game_detail(repo.get_ref(), id, params.language()).await {
        Ok(data) => {
            let mut context = context;
            context.insert("game", &data.game);
            context.insert("stars", &data.stars);
            context.insert("description_html", &data.description_html);
            context.insert("translated", &data.translated);
            context.insert("language", &data.language);
            context.insert("trailer", &data.trailer);
            context.insert("screenshots", &data.screenshots);
            context.insert("recommended", &data.recommended);

            render_template(&tera, "game/detail.html", &context)
        }
        Err(ServiceError::NotFound) => render_template_with_status(
            &tera,
            StatusCode::NOT_FOUND,
            "game/not_found.html",
            &context,
        ),
        Err(err) => {
            log::error!("Failed to load game page {id}: {err}");
            render_template_with_status(
                &tera,
                StatusCode::BAD_GATEWAY,
                "game/not_found.html",
                &context,
            )
        }
    }
}
