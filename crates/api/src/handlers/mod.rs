pub mod character;
pub mod comment;
pub mod favorite;
pub mod follower;
pub mod media;
pub mod planet;
pub mod post;
pub mod user;
pub mod vehicle;
