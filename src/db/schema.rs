//! Table definitions for the event planning store and the routine that
//! creates them.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so running the
//! initializer against an already populated store leaves it untouched.

use log::{error, info};

use crate::{errors::AppError, Store};

pub struct Table {
    pub name: &'static str,
    pub label: &'static str,
    pub ddl: &'static str,
}

/// Referenced tables come before the tables that point at them.
pub const TABLES: [Table; 10] = [
    Table {
        name: "group",
        label: "Group",
        ddl: r#"CREATE TABLE IF NOT EXISTS "group" (
            id INTEGER PRIMARY KEY
        )"#,
    },
    Table {
        name: "user",
        label: "User",
        ddl: r#"CREATE TABLE IF NOT EXISTS user (
            id INTEGER PRIMARY KEY,
            first_name TEXT,
            last_name TEXT,
            username TEXT,
            email TEXT,
            password TEXT,
            group_id INTEGER,
            FOREIGN KEY(group_id) REFERENCES "group"(id)
        )"#,
    },
    Table {
        name: "user_group",
        label: "UserGroup",
        ddl: r#"CREATE TABLE IF NOT EXISTS user_group (
            user_id INTEGER,
            group_id INTEGER,
            PRIMARY KEY(user_id, group_id),
            FOREIGN KEY(user_id) REFERENCES user(id),
            FOREIGN KEY(group_id) REFERENCES "group"(id)
        )"#,
    },
    Table {
        name: "category",
        label: "Category",
        ddl: r#"CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT,
            description TEXT
        )"#,
    },
    Table {
        name: "event",
        label: "Event",
        ddl: r#"CREATE TABLE IF NOT EXISTS event (
            id INTEGER PRIMARY KEY,
            name TEXT,
            description TEXT,
            category_id INTEGER,
            event_date DATE,
            start_time TIME,
            end_time TIME,
            location TEXT,
            created_date DATE DEFAULT CURRENT_DATE,
            host_id INTEGER,
            FOREIGN KEY(category_id) REFERENCES category(id),
            FOREIGN KEY(host_id) REFERENCES user(id)
        )"#,
    },
    // guests are users
    Table {
        name: "event_guest",
        label: "EventGuest",
        ddl: r#"CREATE TABLE IF NOT EXISTS event_guest (
            event_id INTEGER,
            guest_id INTEGER,
            PRIMARY KEY(event_id, guest_id),
            FOREIGN KEY(event_id) REFERENCES event(id),
            FOREIGN KEY(guest_id) REFERENCES user(id)
        )"#,
    },
    Table {
        name: "invitation",
        label: "Invitation",
        ddl: r#"CREATE TABLE IF NOT EXISTS invitation (
            id INTEGER PRIMARY KEY,
            sender_id INTEGER,
            receiver_id INTEGER,
            event_id INTEGER,
            status TEXT CHECK( status IN ('pending', 'accepted', 'declined') ) NOT NULL DEFAULT 'pending',
            FOREIGN KEY(sender_id) REFERENCES user(id),
            FOREIGN KEY(receiver_id) REFERENCES user(id),
            FOREIGN KEY(event_id) REFERENCES event(id)
        )"#,
    },
    Table {
        name: "notification",
        label: "Notification",
        ddl: r#"CREATE TABLE IF NOT EXISTS notification (
            id INTEGER PRIMARY KEY,
            user_id INTEGER,
            invitation_id INTEGER,
            message TEXT,
            read BOOLEAN,
            FOREIGN KEY(user_id) REFERENCES user(id),
            FOREIGN KEY(invitation_id) REFERENCES invitation(id)
        )"#,
    },
    Table {
        name: "rsvp",
        label: "RSVP",
        ddl: r#"CREATE TABLE IF NOT EXISTS rsvp (
            id INTEGER PRIMARY KEY,
            user_id INTEGER,
            event_id INTEGER,
            invitation_id INTEGER,
            response TEXT CHECK( response IN ('A', 'N') ) NOT NULL,
            FOREIGN KEY(user_id) REFERENCES user(id),
            FOREIGN KEY(event_id) REFERENCES event(id),
            FOREIGN KEY(invitation_id) REFERENCES invitation(id)
        )"#,
    },
    Table {
        name: "comment",
        label: "Comment",
        ddl: r#"CREATE TABLE IF NOT EXISTS comment (
            id INTEGER PRIMARY KEY,
            user_id INTEGER,
            event_id INTEGER,
            text TEXT,
            created_date DATE DEFAULT CURRENT_DATE,
            FOREIGN KEY(user_id) REFERENCES user(id),
            FOREIGN KEY(event_id) REFERENCES event(id)
        )"#,
    },
];

#[derive(Debug, Default)]
pub struct SchemaReport {
    pub created: Vec<&'static str>,
    pub failed: Vec<AppError>,
}

impl SchemaReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub async fn initialize(store: &mut Store) -> SchemaReport {
    initialize_tables(&TABLES, store).await
}

/// Runs each definition to completion before starting the next one. A
/// failing table is logged and skipped; nothing is rolled back.
pub async fn initialize_tables(tables: &[Table], store: &mut Store) -> SchemaReport {
    let mut report = SchemaReport::default();
    for table in tables {
        match sqlx::query(table.ddl).execute(&mut *store).await {
            Ok(_) => {
                info!("{} table created successfully.", table.label);
                report.created.push(table.name);
            }
            Err(source) => {
                let err = AppError::TableCreation {
                    table: table.name,
                    source,
                };
                error!("{}", err);
                report.failed.push(err);
            }
        }
    }
    report
}

pub async fn table_names(store: &mut Store) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT name FROM sqlite_master
        WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
        ORDER BY name",
    )
    .fetch_all(&mut *store)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, testing::memory_store};

    #[tokio::test]
    async fn creates_exactly_the_ten_tables() {
        let mut store = memory_store(true).await;
        let names = table_names(&mut store).await.unwrap();
        let mut expected: Vec<&str> = TABLES.iter().map(|t| t.name).collect();
        expected.sort();
        assert_eq!(names, expected);
        assert_eq!(
            expected,
            vec![
                "category",
                "comment",
                "event",
                "event_guest",
                "group",
                "invitation",
                "notification",
                "rsvp",
                "user",
                "user_group",
            ]
        );
    }

    #[tokio::test]
    async fn rerunning_keeps_existing_rows() {
        let mut store = memory_store(true).await;
        let user = db::user::create("Ada", "Lovelace", &mut store).await.unwrap();

        let report = initialize(&mut store).await;
        assert!(report.is_complete());
        assert_eq!(report.created.len(), 10);
        assert_eq!(table_names(&mut store).await.unwrap().len(), 10);

        let found = db::user::get_by_id(user.id, &mut store).await.unwrap();
        assert_eq!(found.first_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn failing_table_does_not_stop_the_rest() {
        let mut store = memory_store(true).await;
        let tables = [
            Table {
                name: "broken",
                label: "Broken",
                ddl: "CREATE TABLE IF NOT EXISTS broken (",
            },
            Table {
                name: "venue",
                label: "Venue",
                ddl: "CREATE TABLE IF NOT EXISTS venue (id INTEGER PRIMARY KEY)",
            },
        ];

        let report = initialize_tables(&tables, &mut store).await;
        assert_eq!(report.created, vec!["venue"]);
        assert!(matches!(
            report.failed.as_slice(),
            [AppError::TableCreation { table: "broken", .. }]
        ));
        assert!(table_names(&mut store)
            .await
            .unwrap()
            .contains(&"venue".to_string()));
    }

    #[test]
    fn referenced_tables_are_created_first() {
        let position = |name: &str| TABLES.iter().position(|t| t.name == name).unwrap();
        for (index, table) in TABLES.iter().enumerate() {
            for parent in TABLES.iter().filter(|p| p.name != table.name) {
                let reference = format!("REFERENCES {}(", parent.name);
                let quoted = format!("REFERENCES \"{}\"(", parent.name);
                if table.ddl.contains(&reference) || table.ddl.contains(&quoted) {
                    assert!(position(parent.name) < index, "{} before {}", parent.name, table.name);
                }
            }
        }
    }
}
