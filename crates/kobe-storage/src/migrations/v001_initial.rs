//! v001: users and their insertion-ordered tasks.

pub const MIGRATION_SQL: &str = "
    CREATE TABLE IF NOT EXISTS users (
        email         TEXT PRIMARY KEY,
        id            TEXT NOT NULL UNIQUE,
        display_name  TEXT NOT NULL DEFAULT '',
        photo_url     TEXT NOT NULL DEFAULT '',
        date_created  TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS tasks (
        id            TEXT PRIMARY KEY,
        user_email    TEXT NOT NULL,
        seq           INTEGER NOT NULL,
        name          TEXT NOT NULL,
        date_created  TEXT NOT NULL,
        last_updated  TEXT,
        score         INTEGER NOT NULL DEFAULT 0,
        FOREIGN KEY (user_email) REFERENCES users(email) ON DELETE CASCADE
    );
";
