#![cfg(test)]

use sqlx::PgPool;

pub async fn insert_user(pool: &PgPool) -> i32 {
    sqlx::query_scalar::<_, i32>("INSERT INTO users DEFAULT VALUES RETURNING id")
        .fetch_one(pool)
        .await
        .expect("insert user")
}

pub async fn delete_user(pool: &PgPool, user_id: i32) {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}

/// An id past every existing user row.
pub async fn missing_user_id(pool: &PgPool) -> i32 {
    sqlx::query_scalar::<_, i32>("SELECT COALESCE(MAX(id), 0) + 1000 FROM users")
        .fetch_one(pool)
        .await
        .expect("missing user id")
}

pub async fn count_profiles(pool: &PgPool, user_id: i32) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("count profiles")
}
