use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct NewAccountDto {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: Option<String>,
    pub pwd: String,
    pub pwd_confirm: String,
    pub group_id: Option<i64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NewEventDto {
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub host_id: Option<i64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewInvitationDto {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub event_id: i64,
}
