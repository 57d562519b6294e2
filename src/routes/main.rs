use actix_web::{Responder, get, web};
use tera::Tera;

use crate::forms::main::CatalogQuery;
use crate::repository::HttpRepository;
use crate::routes::{base_context, render_template};
use crate::services::main as main_service;

#[get("/")]
/// Catalog page: hero spotlight, filter form and the paginated game list.
pub async fn show_index(
    params: web::Query<CatalogQuery>,
    repo: web::Data<HttpRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = main_service::load_index_page(repo.into_inner(), params.into_inner()).await;

    let mut context = base_context("index");
    context.insert("hero", &data.hero);
    context.insert("games", &data.games);
    context.insert("status", &data.status);
    context.insert("query", &data.query);
    context.insert("filter_query", &data.filter_query);
    context.insert("orderings", &data.orderings);

    render_template(&tera, "main/index.html", &context)
}
