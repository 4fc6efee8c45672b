use crate::{dto::NewInvitationDto, models::{Invitation, InvitationStatus}, Store};

/// Inserts a pending invitation and a notification for its receiver.
pub async fn create(invitation: &NewInvitationDto, store: &mut Store) -> Result<i64, sqlx::Error> {
    let res = sqlx::query(
        "INSERT INTO invitation (sender_id, receiver_id, event_id) VALUES (?, ?, ?)",
    )
    .bind(invitation.sender_id)
    .bind(invitation.receiver_id)
    .bind(invitation.event_id)
    .execute(&mut *store)
    .await?;
    let invitation_id = res.last_insert_rowid();
    let message = format!(
        "You were invited to event #{} (invitation #{})",
        invitation.event_id, invitation_id
    );
    notifications::create(invitation.receiver_id, invitation_id, &message, store).await?;
    Ok(invitation_id)
}

pub async fn get_by_id(id: i64, store: &mut Store) -> Result<Invitation, sqlx::Error> {
    sqlx::query_as::<_, Invitation>("SELECT * FROM invitation WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *store)
        .await
}

pub async fn set_status(id: i64, status: InvitationStatus, store: &mut Store) -> Result<u64, sqlx::Error> {
    let res = sqlx::query("UPDATE invitation SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(&mut *store)
        .await?;
    Ok(res.rows_affected())
}

pub mod notifications {
    use crate::{models::Notification, Store};

    pub async fn create(
        user_id: i64,
        invitation_id: i64,
        message: &str,
        store: &mut Store,
    ) -> Result<i64, sqlx::Error> {
        let res = sqlx::query(
            "INSERT INTO notification (user_id, invitation_id, message, read) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(invitation_id)
        .bind(message)
        .bind(false)
        .execute(&mut *store)
        .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn mark_read(id: i64, store: &mut Store) -> Result<u64, sqlx::Error> {
        let res = sqlx::query("UPDATE notification SET read = ? WHERE id = ?")
            .bind(true)
            .bind(id)
            .execute(&mut *store)
            .await?;
        Ok(res.rows_affected())
    }

    pub async fn get_for_user(user_id: i64, store: &mut Store) -> Result<Vec<Notification>, sqlx::Error> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notification WHERE user_id = ? ORDER BY id")
            .bind(user_id)
            .fetch_all(&mut *store)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, testing::memory_store};
    use crate::dto::NewEventDto;

    async fn seed(store: &mut Store) -> NewInvitationDto {
        let sender = db::user::create("Grace", "Hopper", store).await.unwrap();
        let receiver = db::user::create("Alan", "Turing", store).await.unwrap();
        let event = NewEventDto {
            name: "Launch".to_string(),
            host_id: Some(sender.id),
            ..Default::default()
        };
        let event_id = db::event::create(&event, store).await.unwrap();
        NewInvitationDto {
            sender_id: sender.id,
            receiver_id: receiver.id,
            event_id,
        }
    }

    #[tokio::test]
    async fn new_invitation_is_pending_and_notifies_receiver() {
        let mut store = memory_store(true).await;
        let dto = seed(&mut store).await;

        let id = create(&dto, &mut store).await.unwrap();
        let invitation = get_by_id(id, &mut store).await.unwrap();
        assert_eq!(invitation.status, InvitationStatus::Pending);

        let inbox = notifications::get_for_user(dto.receiver_id, &mut store).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].invitation_id, Some(id));
        assert_eq!(inbox[0].read, Some(false));

        assert_eq!(notifications::mark_read(inbox[0].id, &mut store).await.unwrap(), 1);
        let inbox = notifications::get_for_user(dto.receiver_id, &mut store).await.unwrap();
        assert_eq!(inbox[0].read, Some(true));
    }

    #[tokio::test]
    async fn set_status_accepts_listed_values() {
        let mut store = memory_store(true).await;
        let dto = seed(&mut store).await;
        let id = create(&dto, &mut store).await.unwrap();

        set_status(id, InvitationStatus::Declined, &mut store).await.unwrap();
        assert_eq!(get_by_id(id, &mut store).await.unwrap().status, InvitationStatus::Declined);
    }

    #[tokio::test]
    async fn unlisted_status_is_rejected() {
        let mut store = memory_store(true).await;
        let dto = seed(&mut store).await;
        let err = sqlx::query(
            "INSERT INTO invitation (sender_id, receiver_id, event_id, status) VALUES (?, ?, ?, ?)",
        )
        .bind(dto.sender_id)
        .bind(dto.receiver_id)
        .bind(dto.event_id)
        .bind("maybe")
        .execute(&mut store)
        .await
        .unwrap_err();
        assert!(err.to_string().contains("CHECK constraint failed"));
    }

    #[tokio::test]
    async fn unknown_event_is_rejected() {
        let mut store = memory_store(true).await;
        let mut dto = seed(&mut store).await;
        dto.event_id += 1000;
        assert!(create(&dto, &mut store).await.is_err());
        let inbox = notifications::get_for_user(dto.receiver_id, &mut store).await.unwrap();
        assert!(inbox.is_empty());
    }
}
