use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub id: i64,
}

#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub group_id: Option<i64>,
}

/// Row handed back by the user accessor after an insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq)]
pub struct UserGroup {
    pub user_id: i64,
    pub group_id: i64,
}

#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub created_date: Option<NaiveDate>,
    pub host_id: Option<i64>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq)]
pub struct EventGuest {
    pub event_id: i64,
    pub guest_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Invitation {
    pub id: i64,
    pub sender_id: Option<i64>,
    pub receiver_id: Option<i64>,
    pub event_id: Option<i64>,
    pub status: InvitationStatus,
}

#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub user_id: Option<i64>,
    pub invitation_id: Option<i64>,
    pub message: Option<String>,
    pub read: Option<bool>,
}

/// Stored as `A` (attending) or `N` (not attending).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
pub enum RsvpResponse {
    #[sqlx(rename = "A")]
    #[serde(rename = "A")]
    Attending,
    #[sqlx(rename = "N")]
    #[serde(rename = "N")]
    NotAttending,
}

#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Rsvp {
    pub id: i64,
    pub user_id: Option<i64>,
    pub event_id: Option<i64>,
    pub invitation_id: Option<i64>,
    pub response: RsvpResponse,
}

#[derive(Debug, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub user_id: Option<i64>,
    pub event_id: Option<i64>,
    pub text: Option<String>,
    pub created_date: Option<NaiveDate>,
}
