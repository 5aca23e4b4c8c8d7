use article_api::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    error::ApplicationError,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
    services::ApplicationServices,
};
use article_api::infrastructure::repositories::InMemoryArticleRepository;
use chrono::Duration;
use std::sync::Arc;

mod support;

use support::{BASE_TIME, FrozenClock, StepClock};

fn services_with_step_clock() -> ApplicationServices {
    let repo = Arc::new(InMemoryArticleRepository::new(Arc::new(StepClock::default())));
    ApplicationServices::new(repo)
}

fn create_command(title: &str, tags: &[&str]) -> CreateArticleCommand {
    let mut builder = CreateArticleCommand::builder()
        .title(title)
        .content("lorem ipsum dolor sit amet");
    for tag in tags {
        builder = builder.tag(*tag);
    }
    builder.build().unwrap()
}

#[tokio::test]
async fn created_article_is_readable_by_id() {
    let services = services_with_step_clock();

    let created = services
        .article_commands
        .create_article(create_command("  Spaced title ", &["Rust"]))
        .await
        .unwrap();
    assert_eq!(created.title, "Spaced title");
    assert_eq!(created.tags, vec!["rust"]);
    assert_eq!(created.published_at, *BASE_TIME);

    let loaded = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(loaded, created);
}

#[tokio::test]
async fn invalid_create_does_not_store_anything() {
    let services = services_with_step_clock();

    let err = services
        .article_commands
        .create_article(create_command("abc", &[]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let page = services
        .article_queries
        .list_articles(ListArticlesQuery::default())
        .await
        .unwrap();
    assert!(page.articles.is_empty());
    assert_eq!(page.pagination.total_items, 0);
}

#[tokio::test]
async fn update_with_frozen_clock_still_moves_updated_at_forward() {
    let repo = Arc::new(InMemoryArticleRepository::new(Arc::new(FrozenClock)));
    let services = ApplicationServices::new(repo);

    let created = services
        .article_commands
        .create_article(create_command("Original title", &["go"]))
        .await
        .unwrap();

    let first = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: created.id,
            tags: vec!["food".into()],
            ..Default::default()
        })
        .await
        .unwrap();
    let second = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: created.id,
            content: Some("new body text".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(first.updated_at, created.updated_at + Duration::microseconds(1));
    assert!(second.updated_at > first.updated_at);
    assert_eq!(second.tags, vec!["food"]);
    assert_eq!(second.title, "Original title");
    assert_eq!(second.published_at, created.published_at);
}

#[tokio::test]
async fn non_positive_ids_are_not_found() {
    let services = services_with_step_clock();

    let err = services
        .article_commands
        .delete_article(DeleteArticleCommand { id: 0 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: -4,
            title: Some("Valid title".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn list_query_strings_are_coerced_before_reaching_storage() {
    let services = services_with_step_clock();
    for n in 1..=3 {
        services
            .article_commands
            .create_article(create_command(&format!("Article number {n}"), &["go"]))
            .await
            .unwrap();
    }

    let page = services
        .article_queries
        .list_articles(ListArticlesQuery {
            tags: Some("GO".into()),
            page: Some("-2".into()),
            per_page: Some("2".into()),
        })
        .await
        .unwrap();

    assert_eq!(page.pagination.current_page, 1);
    assert_eq!(page.pagination.total_pages, 2);
    assert_eq!(page.articles.len(), 2);
    assert_eq!(page.articles[0].title, "Article number 3");
}
