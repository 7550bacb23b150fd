use chrono::{DateTime, Utc};
use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::BaseRepository;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: Uuid, title: &str, created_at: DateTime<Utc>) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        created_at: created_at.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(post_id, "Test Post", now)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.expect("post should be found");
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.created_at, now);
}

#[tokio::test]
async fn test_find_all_maps_every_row() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            model(Uuid::new_v4(), "First", now),
            model(Uuid::new_v4(), "Second", now),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts: Vec<Post> = repo.find_all().await.unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let post_id = Uuid::new_v4();
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(post_id, "Hello", now)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let saved: Post = repo
        .insert(Post {
            id: post_id,
            title: "Hello".to_owned(),
            content: "Content".to_owned(),
            created_at: now,
        })
        .await
        .unwrap();

    assert_eq!(saved.id, post_id);
    assert_eq!(saved.title, "Hello");
}

#[tokio::test]
async fn test_update_of_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo
        .update(Post {
            id: Uuid::new_v4(),
            title: "Hello".to_owned(),
            content: "Content".to_owned(),
            created_at: Utc::now(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_without_affected_rows_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn test_delete_existing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4())
        .await
        .unwrap();
}
