pub mod character;
pub mod comment;
pub mod favorite;
pub mod follower;
pub mod health;
pub mod media;
pub mod planet;
pub mod post;
pub mod user;
pub mod vehicle;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                          list, create
/// /users/favorites                favorites summary of the current user
/// /users/{id}                     get, update, delete (cascading)
///
/// /posts                          list, create
/// /posts/{id}                     get, update, delete (cascading)
///
/// /comments                       list, create
/// /comments/{id}                  delete
///
/// /medias                         list, create
/// /medias/{id}                    get, update, delete
///
/// /followers                      list
/// /followers/{id}                 follow (POST), unfollow (DELETE)
///
/// /people                         list, create
/// /people/{id}                    get, update, delete
/// /planets                        list, create
/// /planets/{id}                   get, update, delete
/// /vehicles                       list, create
/// /vehicles/{id}                  get, update, delete
///
/// /favorite/people/{id}           add (POST), remove (DELETE)
/// /favorite/planet/{id}           add (POST), remove (DELETE)
/// /favorite/vehicle/{id}          add (POST), remove (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/posts", post::router())
        .nest("/comments", comment::router())
        .nest("/medias", media::router())
        .nest("/followers", follower::router())
        .nest("/people", character::router())
        .nest("/planets", planet::router())
        .nest("/vehicles", vehicle::router())
        .nest("/favorite", favorite::router())
}
