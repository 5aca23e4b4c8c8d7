// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, PaginationDto};
use crate::presentation::http::controllers::articles::{ArticleData, ArticleListData};
use crate::presentation::http::response::ResponseStatus;
use axum::Router;
#[cfg(not(feature = "swagger-ui"))]
use axum::{Json, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{OpenApi, ToSchema};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
#[cfg(feature = "swagger-ui")]
pub const SWAGGER_UI_PATH: &str = "/swagger";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ArticleResponse {
    pub status: ResponseStatus,
    pub data: ArticleData,
}

#[derive(Serialize, ToSchema)]
pub struct ArticleListResponse {
    pub status: ResponseStatus,
    pub data: ArticleListData,
    pub metadata: PaginationDto,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    #[schema(example = "Please provide a valid JSON body")]
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
    ),
    components(
        schemas(
            ArticleResponse,
            ArticleListResponse,
            ErrorResponse,
            ResponseStatus,
            ArticleData,
            ArticleListData,
            ArticleDto,
            PaginationDto,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest
        )
    ),
    tags(
        (name = "Articles", description = "Blog article management")
    ),
    info(
        title = "Article API",
        description = "Minimal blogging API with tag filtering and pagination",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// The generated document, with the article routes' mount point as its server.
pub fn openapi_document(base_path: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let server = if base_path.is_empty() { "/" } else { base_path };
    doc.servers = Some(vec![Server::new(server)]);
    doc
}

#[cfg(not(feature = "swagger-ui"))]
pub fn docs_router(base_path: &str) -> Router {
    let doc = openapi_document(base_path);
    Router::new().route(
        OPENAPI_JSON_PATH,
        get(move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }),
    )
}

/// Interactive UI under `/swagger`; it also serves the JSON document.
#[cfg(feature = "swagger-ui")]
pub fn docs_router(base_path: &str) -> Router {
    let doc = openapi_document(base_path);
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, doc),
    )
}

pub fn write_openapi_snapshot(output_path: &Path, base_path: &str) -> anyhow::Result<()> {
    let doc = openapi_document(base_path);
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_article_routes() {
        let doc = openapi_document("/api");
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/articles"));
        assert!(paths.iter().any(|p| p.as_str() == "/articles/{id}"));
        assert_eq!(doc.servers.unwrap()[0].url, "/api");
    }
}
