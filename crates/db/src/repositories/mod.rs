//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod project_repo;
pub mod project_user_repo;
pub mod resource_repo;
pub mod task_repo;

pub use project_repo::ProjectRepo;
pub use project_user_repo::ProjectUserRepo;
pub use resource_repo::ResourceRepo;
pub use task_repo::TaskRepo;
