use std::sync::Arc;

use blog_api::application::commands::articles::{
    CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
};
use blog_api::application::queries::articles::{GetArticleByIdQuery, ListArticlesQuery};

mod support;

fn create(title: &str, content: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .content(content)
        .build()
        .unwrap()
}

#[tokio::test]
async fn created_article_appears_in_listing() {
    let services = support::build_services(Arc::new(support::DummyClock));

    services
        .article_commands
        .create_article(create("title", "content"))
        .await
        .unwrap();

    let all = services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .unwrap();
    assert!(
        all.iter()
            .any(|a| a.title == "title" && a.content == "content")
    );
}

#[tokio::test]
async fn listing_preserves_insertion_order() {
    let services = support::build_services(Arc::new(support::DummyClock));
    for title in ["first", "second", "third"] {
        services
            .article_commands
            .create_article(create(title, "body"))
            .await
            .unwrap();
    }

    let titles: Vec<String> = services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn created_article_is_fetchable_by_id() {
    let services = support::build_services(Arc::new(support::DummyClock));
    let created = services
        .article_commands
        .create_article(create("title", "content"))
        .await
        .unwrap();

    let fetched = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: created.id })
        .await
        .unwrap();

    assert_eq!(fetched.title, "title");
    assert_eq!(fetched.content, "content");
    assert_eq!(fetched.created_at, support::fixed_now());
    assert_eq!(fetched.updated_at, fetched.created_at);
}

#[tokio::test]
async fn update_replaces_fields_and_refreshes_updated_at_only() {
    let services = support::build_services(Arc::new(support::SteppingClock::new()));
    let created = services
        .article_commands
        .create_article(create("title", "content"))
        .await
        .unwrap();

    let first = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: created.id,
            title: "new title".into(),
            content: "new content".into(),
        })
        .await
        .unwrap();
    let second = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: created.id,
            title: "newer title".into(),
            content: "newer content".into(),
        })
        .await
        .unwrap();

    assert_eq!(first.created_at, created.created_at);
    assert_eq!(second.created_at, created.created_at);
    assert!(first.updated_at > created.updated_at);
    assert!(second.updated_at > first.updated_at);

    let fetched = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(fetched.title, "newer title");
    assert_eq!(fetched.content, "newer content");
    assert_eq!(fetched.updated_at, second.updated_at);
}

#[tokio::test]
async fn fetch_and_update_of_missing_id_fail_with_not_found() {
    let services = support::build_services(Arc::new(support::DummyClock));

    let err = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: 404 })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "article not found: 404");

    let err = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: 404,
            title: "t".into(),
            content: "c".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn deleted_article_is_no_longer_found() {
    let services = support::build_services(Arc::new(support::DummyClock));
    let created = services
        .article_commands
        .create_article(create("title", "content"))
        .await
        .unwrap();

    services
        .article_commands
        .delete_article(DeleteArticleCommand { id: created.id })
        .await
        .unwrap();

    let err = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: created.id })
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = services
        .article_commands
        .delete_article(DeleteArticleCommand { id: created.id })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn empty_title_is_rejected() {
    let services = support::build_services(Arc::new(support::DummyClock));
    let err = services
        .article_commands
        .create_article(create("", "content"))
        .await
        .unwrap_err();
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("title cannot be empty"));

    let all = services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn whitespace_title_is_stored_verbatim() {
    let services = support::build_services(Arc::new(support::DummyClock));
    let created = services
        .article_commands
        .create_article(create("   ", "content"))
        .await
        .unwrap();
    assert_eq!(created.title, "   ");
}

#[test]
fn builder_requires_both_fields() {
    assert!(CreateArticleCommand::builder().title("t").build().is_err());
    assert!(CreateArticleCommand::builder().content("c").build().is_err());
}
