use crate::{models::Group, Store};

pub async fn create(store: &mut Store) -> Result<i64, sqlx::Error> {
    let res = sqlx::query(r#"INSERT INTO "group" DEFAULT VALUES"#)
        .execute(&mut *store)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn get_all(store: &mut Store) -> Result<Vec<Group>, sqlx::Error> {
    sqlx::query_as::<_, Group>(r#"SELECT id FROM "group" ORDER BY id"#)
        .fetch_all(&mut *store)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::memory_store;

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let mut store = memory_store(true).await;
        let first = create(&mut store).await.unwrap();
        let second = create(&mut store).await.unwrap();
        assert!(second > first);
        assert_eq!(get_all(&mut store).await.unwrap(), vec![Group { id: first }, Group { id: second }]);
    }
}
