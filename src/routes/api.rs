use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::main::CatalogQuery;
use crate::repository::HttpRepository;
use crate::services::api as api_service;

#[get("/v1/games")]
/// JSON snapshot of the catalog for the given filters and page.
pub async fn api_v1_games(
    params: web::Query<CatalogQuery>,
    repo: web::Data<HttpRepository>,
) -> impl Responder {
    let state = api_service::list_games(repo.into_inner(), params.into_inner()).await;
    HttpResponse::Ok().json(state.as_ref())
}
