use crate::{models::Category, Store};

pub async fn create(name: &str, description: Option<&str>, store: &mut Store) -> Result<i64, sqlx::Error> {
    let res = sqlx::query("INSERT INTO category (name, description) VALUES (?, ?)")
        .bind(name)
        .bind(description)
        .execute(&mut *store)
        .await?;
    Ok(res.last_insert_rowid())
}

pub async fn get_by_id(id: i64, store: &mut Store) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT * FROM category WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *store)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::memory_store;

    #[tokio::test]
    async fn create_and_read_back() {
        let mut store = memory_store(true).await;
        let id = create("Workshop", Some("Hands-on sessions"), &mut store).await.unwrap();
        let category = get_by_id(id, &mut store).await.unwrap();
        assert_eq!(category.name.as_deref(), Some("Workshop"));
        assert_eq!(category.description.as_deref(), Some("Hands-on sessions"));
        assert!(matches!(get_by_id(id + 1, &mut store).await, Err(sqlx::Error::RowNotFound)));
    }
}
