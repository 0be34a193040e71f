// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, serde_time},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddArticleRequest {
    pub title: String,
    pub content: String,
}

impl From<AddArticleRequest> for CreateArticleCommand {
    fn from(request: AddArticleRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub content: String,
}

/// Public article shape. `id` and `updatedAt` are not part of it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub title: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<ArticleDto> for ArticleResponse {
    fn from(article: ArticleDto) -> Self {
        Self {
            title: article.title,
            content: article.content,
            created_at: article.created_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = AddArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleResponse),
        (status = 400, description = "Invalid article payload.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn add_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<AddArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let created = state
        .services
        .article_commands
        .create_article(payload.into())
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/api/articles",
    responses(
        (status = 200, description = "All articles in insertion order.", body = [ArticleResponse])
    ),
    tag = "Articles"
)]
pub async fn find_all_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleResponse>>> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http()?;

    Ok(Json(articles.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article found.", body = ArticleResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn find_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(|article| Json(article.into()))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleResponse),
        (status = 400, description = "Invalid article payload.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(|article| Json(article.into()))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted.", body = StatusResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
