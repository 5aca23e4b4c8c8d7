// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, PaginationDto},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ArticleIdPath, JsonBody};
use crate::presentation::http::response::Envelope;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Comma separated tags; articles sharing at least one tag match.
    #[param(example = "go,food")]
    pub tags: Option<String>,
    /// Page number, starting at 1.
    #[param(example = "1")]
    pub page: Option<String>,
    /// Articles per page (max 100, default 20).
    #[param(example = "20")]
    pub per_page: Option<String>,
}

impl ArticleListParams {
    /// The first occurrence of each key wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "tags" => &mut params.tags,
                "page" => &mut params.page,
                "per_page" => &mut params.per_page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl From<ArticleListParams> for ListArticlesQuery {
    fn from(params: ArticleListParams) -> Self {
        Self {
            tags: params.tags,
            page: params.page,
            per_page: params.per_page,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[schema(example = "I love Rust")]
    pub title: Option<String>,
    #[schema(example = "lorem ipsum lorem ipsum lorem ipsum")]
    pub content: Option<String>,
    #[schema(example = json!(["rust", "tech"]))]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    #[schema(example = "I love Rust")]
    pub title: Option<String>,
    #[schema(example = "lorem ipsum lorem ipsum lorem ipsum")]
    pub content: Option<String>,
    #[schema(example = json!(["rust", "tech"]))]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleData {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleListData {
    pub articles: Vec<ArticleDto>,
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = crate::presentation::http::openapi::ArticleResponse),
        (status = 400, description = "Malformed body or invalid fields.", body = crate::presentation::http::openapi::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::openapi::ErrorResponse)
    ),
    tag = "Articles"
)]
#[tracing::instrument(name = "articles.create", skip_all)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<Envelope<ArticleData>>)> {
    let command = CreateArticleCommand {
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
        tags: payload.tags.unwrap_or_default(),
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(ArticleData { article })),
    ))
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles, newest first.", body = crate::presentation::http::openapi::ArticleListResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::openapi::ErrorResponse)
    ),
    tag = "Articles"
)]
#[tracing::instrument(name = "articles.list", skip_all)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> HttpResult<Json<Envelope<ArticleListData, PaginationDto>>> {
    let query = ListArticlesQuery::from(ArticleListParams::from_pairs(pairs));

    let page = state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()?;

    Ok(Json(Envelope::success_with_metadata(
        ArticleListData {
            articles: page.articles,
        },
        page.pagination,
    )))
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = crate::presentation::http::openapi::ArticleResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::openapi::ErrorResponse)
    ),
    tag = "Articles"
)]
#[tracing::instrument(name = "articles.get", skip_all)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
) -> HttpResult<Json<Envelope<ArticleData>>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    Ok(Json(Envelope::success(ArticleData { article })))
}

#[utoipa::path(
    patch,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "The updated article.", body = crate::presentation::http::openapi::ArticleResponse),
        (status = 400, description = "Malformed body or invalid fields.", body = crate::presentation::http::openapi::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::openapi::ErrorResponse)
    ),
    tag = "Articles"
)]
#[tracing::instrument(name = "articles.update", skip_all)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
    JsonBody(payload): JsonBody<UpdateArticleRequest>,
) -> HttpResult<Json<Envelope<ArticleData>>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        tags: payload.tags.unwrap_or_default(),
    };

    let article = state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;

    Ok(Json(Envelope::success(ArticleData { article })))
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "No such article.", body = crate::presentation::http::openapi::ErrorResponse)
    ),
    tag = "Articles"
)]
#[tracing::instrument(name = "articles.delete", skip_all)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn first_query_value_wins() {
        let params = ArticleListParams::from_pairs(pairs(&[
            ("page", "2"),
            ("page", "9"),
            ("tags", "go"),
            ("other", "x"),
        ]));
        assert_eq!(params.page.as_deref(), Some("2"));
        assert_eq!(params.tags.as_deref(), Some("go"));
        assert!(params.per_page.is_none());
    }
}
