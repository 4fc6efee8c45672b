use crate::{models::{Group, NewUser, User}, Store};

pub async fn create(first_name: &str, last_name: &str, store: &mut Store) -> Result<NewUser, sqlx::Error> {
    let res = sqlx::query("INSERT INTO user (first_name, last_name) VALUES (?, ?)")
        .bind(first_name)
        .bind(last_name)
        .execute(&mut *store)
        .await?;
    Ok(NewUser {
        id: res.last_insert_rowid(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
}

/// Inserts a full account row. `password` must already be hashed.
pub async fn register(user: &User, store: &mut Store) -> Result<i64, sqlx::Error> {
    let res = sqlx::query(
        "INSERT INTO user (first_name, last_name, username, email, password, group_id)
        VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password)
    .bind(user.group_id)
    .execute(&mut *store)
    .await?;
    Ok(res.last_insert_rowid())
}

pub async fn get_by_id(id: i64, store: &mut Store) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM user WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *store)
        .await
}

pub async fn get_all(store: &mut Store) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM user ORDER BY id")
        .fetch_all(&mut *store)
        .await
}

pub async fn get_by_username(username: &str, store: &mut Store) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM user WHERE username = ?")
        .bind(username)
        .fetch_optional(&mut *store)
        .await
}

pub async fn exists(username: &str, store: &mut Store) -> Result<bool, sqlx::Error> {
    Ok(get_by_username(username, store).await?.is_some())
}

pub async fn add_to_group(user_id: i64, group_id: i64, store: &mut Store) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("INSERT INTO user_group (user_id, group_id) VALUES (?, ?)")
        .bind(user_id)
        .bind(group_id)
        .execute(&mut *store)
        .await?;
    Ok(res.rows_affected())
}

pub async fn get_groups(user_id: i64, store: &mut Store) -> Result<Vec<Group>, sqlx::Error> {
    sqlx::query_as::<_, Group>(
        r#"SELECT id FROM "group"
        WHERE id IN (SELECT group_id FROM user_group WHERE user_id = ?)
        ORDER BY id"#,
    )
    .bind(user_id)
    .fetch_all(&mut *store)
    .await
}
