//! Integration tests for the generic favorites repository.

use holonet_db::models::character::CreateCharacter;
use holonet_db::models::favorite::{CharacterFavorite, PlanetFavorite, VehicleFavorite};
use holonet_db::models::planet::CreatePlanet;
use holonet_db::models::user::CreateUser;
use holonet_db::repositories::{CharacterRepo, FavoriteRepo, PlanetRepo, UserRepo};
use sqlx::PgPool;

async fn seed_user(pool: &PgPool) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: Some("fan@example.com".to_string()),
            password_hash: Some("hash".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_character(pool: &PgPool, name: &str) -> i64 {
    CharacterRepo::create(
        pool,
        &CreateCharacter {
            name: Some(name.to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_find_and_remove_favorite(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let luke = seed_character(&pool, "Luke").await;

    let fav = FavoriteRepo::create::<CharacterFavorite>(&pool, user_id, luke)
        .await
        .unwrap();
    assert_eq!(fav.user_id, user_id);
    assert_eq!(fav.character_id, luke);

    let found = FavoriteRepo::find::<CharacterFavorite>(&pool, user_id, luke)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, fav.id);

    assert!(FavoriteRepo::delete_pair::<CharacterFavorite>(&pool, user_id, luke)
        .await
        .unwrap());
    assert!(!FavoriteRepo::delete_pair::<CharacterFavorite>(&pool, user_id, luke)
        .await
        .unwrap());
    assert!(FavoriteRepo::find::<CharacterFavorite>(&pool, user_id, luke)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_favorite_rejected_by_schema(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let luke = seed_character(&pool, "Luke").await;
    FavoriteRepo::create::<CharacterFavorite>(&pool, user_id, luke)
        .await
        .unwrap();
    let again = FavoriteRepo::create::<CharacterFavorite>(&pool, user_id, luke).await;
    assert!(again.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_vehicle_violates_fk(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let result = FavoriteRepo::create::<VehicleFavorite>(&pool, user_id, 777).await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_and_resolve_names(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let leia = seed_character(&pool, "Leia").await;
    let luke = seed_character(&pool, "Luke").await;
    FavoriteRepo::create::<CharacterFavorite>(&pool, user_id, luke)
        .await
        .unwrap();
    FavoriteRepo::create::<CharacterFavorite>(&pool, user_id, leia)
        .await
        .unwrap();

    let favs = FavoriteRepo::list_by_user::<CharacterFavorite>(&pool, user_id)
        .await
        .unwrap();
    let targets: Vec<i64> = favs.iter().map(|f| f.character_id).collect();
    assert_eq!(targets, vec![luke, leia]);

    let names = FavoriteRepo::target_names::<CharacterFavorite>(&pool, &[leia, luke, 9_999])
        .await
        .unwrap();
    assert_eq!(names.len(), 2);
    assert_eq!(names[&leia], "Leia");
    assert_eq!(names[&luke], "Luke");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_by_target_and_by_user(pool: PgPool) {
    let user_id = seed_user(&pool).await;
    let hoth = PlanetRepo::create(
        &pool,
        &CreatePlanet {
            name: Some("Hoth".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .id;
    let luke = seed_character(&pool, "Luke").await;
    FavoriteRepo::create::<PlanetFavorite>(&pool, user_id, hoth)
        .await
        .unwrap();
    FavoriteRepo::create::<CharacterFavorite>(&pool, user_id, luke)
        .await
        .unwrap();

    let mut tx = pool.begin().await.unwrap();
    let by_target = FavoriteRepo::delete_by_target::<PlanetFavorite>(&mut tx, hoth)
        .await
        .unwrap();
    let by_user = FavoriteRepo::delete_by_user::<CharacterFavorite>(&mut tx, user_id)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    assert_eq!((by_target, by_user), (1, 1));
    assert!(FavoriteRepo::list_by_user::<PlanetFavorite>(&pool, user_id)
        .await
        .unwrap()
        .is_empty());
}
