use crate::{models::Comment, Store};

pub async fn create(user_id: i64, event_id: i64, text: &str, store: &mut Store) -> Result<i64, sqlx::Error> {
    let res = sqlx::query("INSERT INTO comment (user_id, event_id, text) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(event_id)
        .bind(text)
        .execute(&mut *store)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn get_for_event(event_id: i64, store: &mut Store) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>("SELECT * FROM comment WHERE event_id = ? ORDER BY id")
        .bind(event_id)
        .fetch_all(&mut *store)
        .await
}
