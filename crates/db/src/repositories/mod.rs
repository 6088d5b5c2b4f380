//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Helpers used by cascading
//! deletes take `&mut PgConnection` instead, so handlers can run several
//! of them inside one transaction.

pub mod character_repo;
pub mod comment_repo;
pub mod favorite_repo;
pub mod follower_repo;
pub mod media_repo;
pub mod planet_repo;
pub mod post_repo;
pub mod user_repo;
pub mod vehicle_repo;

pub use character_repo::CharacterRepo;
pub use comment_repo::CommentRepo;
pub use favorite_repo::FavoriteRepo;
pub use follower_repo::FollowerRepo;
pub use media_repo::MediaRepo;
pub use planet_repo::PlanetRepo;
pub use post_repo::PostRepo;
pub use user_repo::UserRepo;
pub use vehicle_repo::VehicleRepo;
