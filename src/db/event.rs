use crate::{dto::NewEventDto, models::{Event, User}, Store};

pub async fn create(event: &NewEventDto, store: &mut Store) -> Result<i64, sqlx::Error> {
    let res = sqlx::query(
        "INSERT INTO event (name, description, category_id, event_date, start_time, end_time, location, host_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&event.name)
    .bind(&event.description)
    .bind(event.category_id)
    .bind(event.event_date)
    .bind(event.start_time)
    .bind(event.end_time)
    .bind(&event.location)
    .bind(event.host_id)
    .execute(&mut *store)
    .await?;
    Ok(res.last_insert_rowid())
}

pub async fn get_by_id(id: i64, store: &mut Store) -> Result<Event, sqlx::Error> {
    sqlx::query_as::<_, Event>("SELECT * FROM event WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *store)
        .await
}

pub async fn get_by_host(host_id: i64, store: &mut Store) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>("SELECT * FROM event WHERE host_id = ? ORDER BY id")
        .bind(host_id)
        .fetch_all(&mut *store)
        .await
}

/// Returns 0 when the guest is already on the list.
pub async fn add_guest(event_id: i64, guest_id: i64, store: &mut Store) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("INSERT OR IGNORE INTO event_guest (event_id, guest_id) VALUES (?, ?)")
        .bind(event_id)
        .bind(guest_id)
        .execute(&mut *store)
        .await?;
    Ok(res.rows_affected())
}

pub async fn get_guests(event_id: i64, store: &mut Store) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT * FROM user WHERE id IN (SELECT guest_id FROM event_guest WHERE event_id = ?)
        ORDER BY id",
    )
    .bind(event_id)
    .fetch_all(&mut *store)
    .await
}
