//! Integration tests for the blog and catalogue repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create / read / partial update / delete per entity
//! - Unique constraint and NOT NULL violations
//! - Foreign-key-driven delete helpers used by cascades

use assert_matches::assert_matches;
use holonet_db::models::character::CreateCharacter;
use holonet_db::models::comment::CreateComment;
use holonet_db::models::media::{CreateMedia, MediaType, UpdateMedia};
use holonet_db::models::planet::{CreatePlanet, UpdatePlanet};
use holonet_db::models::post::{CreatePost, UpdatePost};
use holonet_db::models::user::{CreateUser, UpdateUser, User};
use holonet_db::models::vehicle::CreateVehicle;
use holonet_db::repositories::{
    CharacterRepo, CommentRepo, FollowerRepo, MediaRepo, PlanetRepo, PostRepo, UserRepo,
    VehicleRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: Some(email.to_string()),
        password_hash: Some("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
        ..Default::default()
    }
}

fn new_post(user_id: i64, title: &str) -> CreatePost {
    CreatePost {
        title: Some(title.to_string()),
        description: Some("desc".to_string()),
        body: Some("body".to_string()),
        image_url: Some("https://img.example/1.png".to_string()),
        user_id: Some(user_id),
    }
}

async fn seed_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(pool, &new_user(email)).await.unwrap()
}

async fn count_where(pool: &PgPool, table: &str, column: &str, id: i64) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {table} WHERE {column} = $1");
    let (count,): (i64,) = sqlx::query_as(&query)
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_user_defaults_to_active(pool: PgPool) {
    let user = seed_user(&pool, "luke@rebels.org").await;
    assert!(user.is_active);
    assert_eq!(user.email, "luke@rebels.org");
    assert!(user.first_name.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_partial_update_keeps_other_fields(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            first_name: Some("Leia".to_string()),
            last_name: Some("Organa".to_string()),
            ..new_user("leia@rebels.org")
        },
    )
    .await
    .unwrap();

    let update = UpdateUser {
        last_name: Some(Some("Solo".to_string())),
        ..Default::default()
    };
    let updated = UserRepo::update(&pool, user.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.first_name.as_deref(), Some("Leia"));
    assert_eq!(updated.last_name.as_deref(), Some("Solo"));
    assert_eq!(updated.email, "leia@rebels.org");
    assert_eq!(updated.password_hash, user.password_hash);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_update_clears_name(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            first_name: Some("Ben".to_string()),
            ..new_user("ben@jedi.org")
        },
    )
    .await
    .unwrap();

    let update = UpdateUser {
        first_name: Some(None),
        ..Default::default()
    };
    let updated = UserRepo::update(&pool, user.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.first_name.is_none());
    assert_eq!(updated.email, "ben@jedi.org");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_user_returns_none(pool: PgPool) {
    let result = UserRepo::update(&pool, 999_999, &UpdateUser::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    seed_user(&pool, "han@falcon.net").await;
    let result = UserRepo::create(&pool, &new_user("han@falcon.net")).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_without_password_rejected(pool: PgPool) {
    let input = CreateUser {
        email: Some("nopass@example.com".to_string()),
        ..Default::default()
    };
    let result = UserRepo::create(&pool, &input).await;
    assert!(result.is_err(), "password_hash is NOT NULL");
}

// ---------------------------------------------------------------------------
// Posts, comments, media
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_post_gets_database_date(pool: PgPool) {
    let user = seed_user(&pool, "author@example.com").await;
    let post = PostRepo::create(&pool, &new_post(user.id, "First"))
        .await
        .unwrap();
    assert_eq!(post.user_id, user.id);

    let found = PostRepo::find_by_id(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(found.title, "First");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_post_update_only_touches_given_fields(pool: PgPool) {
    let user = seed_user(&pool, "editor@example.com").await;
    let post = PostRepo::create(&pool, &new_post(user.id, "Draft"))
        .await
        .unwrap();

    let update = UpdatePost {
        title: Some("Final".to_string()),
        ..Default::default()
    };
    let updated = PostRepo::update(&pool, post.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.body, post.body);
    assert_eq!(updated.date, post.date);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_post_with_unknown_user_violates_fk(pool: PgPool) {
    let result = PostRepo::create(&pool, &new_post(424_242, "Orphan")).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_comment_body_is_unique(pool: PgPool) {
    let user = seed_user(&pool, "c@example.com").await;
    let post = PostRepo::create(&pool, &new_post(user.id, "Thread"))
        .await
        .unwrap();
    let input = CreateComment {
        body: Some("Nice".to_string()),
        user_id: Some(user.id),
        post_id: Some(post.id),
    };
    let comment = CommentRepo::create(&pool, &input).await.unwrap();
    let found = CommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.body, "Nice");
    assert!(CommentRepo::create(&pool, &input).await.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_media_round_trips_enum_label(pool: PgPool) {
    let user = seed_user(&pool, "m@example.com").await;
    let post = PostRepo::create(&pool, &new_post(user.id, "Gallery"))
        .await
        .unwrap();
    let media = MediaRepo::create(
        &pool,
        &CreateMedia {
            media_type: Some(MediaType::Image),
            url: Some("https://img.example/a.png".to_string()),
            post_id: Some(post.id),
        },
    )
    .await
    .unwrap();
    assert_eq!(media.media_type, MediaType::Image);

    let updated = MediaRepo::update(
        &pool,
        media.id,
        &UpdateMedia {
            media_type: Some(MediaType::Video),
            url: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.media_type, MediaType::Video);
    assert_eq!(updated.url, media.url);

    assert_eq!(count_where(&pool, "medias", "post_id", post.id).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_post_author_helpers_clear_children(pool: PgPool) {
    let author = seed_user(&pool, "author2@example.com").await;
    let reader = seed_user(&pool, "reader@example.com").await;
    let post = PostRepo::create(&pool, &new_post(author.id, "Busy"))
        .await
        .unwrap();
    CommentRepo::create(
        &pool,
        &CreateComment {
            body: Some("from reader".to_string()),
            user_id: Some(reader.id),
            post_id: Some(post.id),
        },
    )
    .await
    .unwrap();
    MediaRepo::create(
        &pool,
        &CreateMedia {
            media_type: Some(MediaType::Audio),
            url: Some("https://audio.example/a.mp3".to_string()),
            post_id: Some(post.id),
        },
    )
    .await
    .unwrap();

    assert_eq!(count_where(&pool, "posts", "user_id", author.id).await, 1);
    assert_eq!(count_where(&pool, "comments", "post_id", post.id).await, 1);

    let mut tx = pool.begin().await.unwrap();
    let comments = CommentRepo::delete_by_post_author(&mut tx, author.id)
        .await
        .unwrap();
    let medias = MediaRepo::delete_by_post_author(&mut tx, author.id)
        .await
        .unwrap();
    let posts = PostRepo::delete_by_user(&mut tx, author.id).await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!((comments, medias, posts), (1, 1, 1));
    assert!(CommentRepo::list(&pool).await.unwrap().is_empty());
    assert_eq!(count_where(&pool, "medias", "post_id", post.id).await, 0);
}

// ---------------------------------------------------------------------------
// Followers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_follow_edges_removed_one_at_a_time(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;

    let first = FollowerRepo::create(&pool, b.id, a.id).await.unwrap();
    let second = FollowerRepo::create(&pool, b.id, a.id).await.unwrap();
    assert_ne!(first.id, second.id);

    assert!(FollowerRepo::delete_edge(&pool, b.id, a.id).await.unwrap());
    let remaining = FollowerRepo::list(&pool).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);

    assert!(FollowerRepo::delete_edge(&pool, b.id, a.id).await.unwrap());
    assert!(!FollowerRepo::delete_edge(&pool, b.id, a.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_character_name_is_unique(pool: PgPool) {
    let luke = CreateCharacter {
        name: Some("Luke Skywalker".to_string()),
        ..Default::default()
    };
    CharacterRepo::create(&pool, &luke).await.unwrap();
    assert!(CharacterRepo::create(&pool, &luke).await.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_planet_update_and_delete(pool: PgPool) {
    let planet = PlanetRepo::create(
        &pool,
        &CreatePlanet {
            name: Some("Tatooine".to_string()),
            climate: Some("arid".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = PlanetRepo::update(
        &pool,
        planet.id,
        &UpdatePlanet {
            population: Some(Some("200000".to_string())),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.climate.as_deref(), Some("arid"));
    assert_eq!(updated.population.as_deref(), Some("200000"));

    let cleared = PlanetRepo::update(
        &pool,
        planet.id,
        &UpdatePlanet {
            climate: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(cleared.climate.is_none());
    assert_eq!(cleared.population.as_deref(), Some("200000"));
    assert_eq!(cleared.name, "Tatooine");

    let mut conn = pool.acquire().await.unwrap();
    assert!(PlanetRepo::delete(&mut conn, planet.id).await.unwrap());
    assert!(!PlanetRepo::delete(&mut conn, planet.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_vehicle_requires_model_in_schema(pool: PgPool) {
    let input = CreateVehicle {
        name: Some("Sand Crawler".to_string()),
        ..Default::default()
    };
    let result = VehicleRepo::create(&pool, &input).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_lists_are_ordered_by_id(pool: PgPool) {
    for name in ["Yavin IV", "Alderaan", "Hoth"] {
        PlanetRepo::create(
            &pool,
            &CreatePlanet {
                name: Some(name.to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }
    let names: Vec<String> = PlanetRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Yavin IV", "Alderaan", "Hoth"]);
}
