use log::{info, warn};

use crate::{
    db,
    dto::NewAccountDto,
    errors::AppError,
    models::{NewUser, User},
    Store,
};

use super::crypto;

pub async fn create(first_name: &str, last_name: &str, store: &mut Store) -> Result<NewUser, AppError> {
    let user = db::user::create(first_name, last_name, store).await?;
    info!("created user #{} ({} {})", user.id, user.first_name, user.last_name);
    Ok(user)
}

pub async fn register(dto: NewAccountDto, store: &mut Store) -> Result<i64, AppError> {
    let NewAccountDto { first_name, last_name, username, email, pwd, pwd_confirm, group_id } = dto;
    if db::user::exists(&username, store).await? {
        warn!("username '{}' is already taken", username);
        return Err(AppError::BadClientData);
    }
    if pwd != pwd_confirm {
        return Err(AppError::BadClientData);
    }
    let user = User {
        id: 0,
        first_name: Some(first_name),
        last_name: Some(last_name),
        username: Some(username),
        email,
        password: Some(crypto::get_sha3_256_hash(&pwd)),
        group_id,
    };
    let id = db::user::register(&user, store).await?;
    if let Some(group_id) = group_id {
        db::user::add_to_group(id, group_id, store).await?;
    }
    Ok(id)
}

pub async fn get_by_id(id: i64, store: &mut Store) -> Result<User, AppError> {
    Ok(db::user::get_by_id(id, store).await?)
}

pub async fn get_all(store: &mut Store) -> Result<Vec<User>, AppError> {
    Ok(db::user::get_all(store).await?)
}
