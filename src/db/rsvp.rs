use crate::{models::{Rsvp, RsvpResponse}, Store};

pub async fn create(
    user_id: i64,
    event_id: i64,
    invitation_id: Option<i64>,
    response: RsvpResponse,
    store: &mut Store,
) -> Result<i64, sqlx::Error> {
    let res = sqlx::query(
        "INSERT INTO rsvp (user_id, event_id, invitation_id, response) VALUES (?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(event_id)
    .bind(invitation_id)
    .bind(response)
    .execute(&mut *store)
    .await?;
    Ok(res.last_insert_rowid())
}

pub async fn get_for_event(event_id: i64, store: &mut Store) -> Result<Vec<Rsvp>, sqlx::Error> {
    sqlx::query_as::<_, Rsvp>("SELECT * FROM rsvp WHERE event_id = ? ORDER BY id")
        .bind(event_id)
        .fetch_all(&mut *store)
        .await
}
