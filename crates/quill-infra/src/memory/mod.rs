//! In-memory adapters.

mod post_repo;

pub use post_repo::InMemoryPostRepository;
