//! v002: lookup indexes for per-user task reads and the leaderboard scan.

pub const MIGRATION_SQL: &str = "
    CREATE UNIQUE INDEX IF NOT EXISTS idx_tasks_user_seq ON tasks(user_email, seq);
    CREATE INDEX IF NOT EXISTS idx_users_date_created ON users(date_created);
";
