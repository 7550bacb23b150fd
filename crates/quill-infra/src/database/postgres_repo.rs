//! PostgreSQL repository implementations.

use super::entity::post::Entity as PostEntity;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
///
/// `PostRepository` comes from the blanket impl over `BaseRepository<Post, Uuid>`.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;
