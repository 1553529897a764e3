use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables created on start-up when missing, in dependency order
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_department",
        r#"
        CREATE TABLE a001_department (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL
        );
        "#,
    ),
    (
        "a002_program",
        r#"
        CREATE TABLE a002_program (
            id TEXT PRIMARY KEY NOT NULL,
            key TEXT NOT NULL,
            name TEXT NOT NULL,
            short_name TEXT NOT NULL DEFAULT '',
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            duration INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a003_cycle",
        r#"
        CREATE TABLE a003_cycle (
            id TEXT PRIMARY KEY NOT NULL,
            program_id TEXT NOT NULL REFERENCES a002_program(id),
            name TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            duration INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "a004_objective",
        r#"
        CREATE TABLE a004_objective (
            id TEXT PRIMARY KEY NOT NULL,
            key TEXT,
            description TEXT NOT NULL,
            program_id TEXT NOT NULL REFERENCES a002_program(id)
        );
        "#,
    ),
    (
        "a005_project",
        r#"
        CREATE TABLE a005_project (
            id TEXT PRIMARY KEY NOT NULL,
            key TEXT NOT NULL,
            name TEXT NOT NULL,
            objective_id TEXT NOT NULL REFERENCES a004_objective(id)
        );
        "#,
    ),
    (
        "a006_goal",
        r#"
        CREATE TABLE a006_goal (
            id TEXT PRIMARY KEY NOT NULL,
            key TEXT NOT NULL,
            name TEXT,
            statement TEXT NOT NULL,
            project_id TEXT NOT NULL REFERENCES a005_project(id),
            department_id TEXT REFERENCES a001_department(id),
            indicator TEXT NOT NULL DEFAULT '',
            unit TEXT NOT NULL DEFAULT '',
            calculation_method TEXT NOT NULL DEFAULT '',
            accumulable INTEGER NOT NULL DEFAULT 0,
            percentage INTEGER NOT NULL DEFAULT 0,
            active INTEGER NOT NULL DEFAULT 1
        );
        "#,
    ),
    (
        "a007_goal_cycle_config",
        r#"
        CREATE TABLE a007_goal_cycle_config (
            id TEXT PRIMARY KEY NOT NULL,
            goal_id TEXT NOT NULL REFERENCES a006_goal(id),
            cycle_id TEXT NOT NULL REFERENCES a003_cycle(id),
            baseline TEXT,
            target TEXT,
            UNIQUE (goal_id, cycle_id)
        );
        "#,
    ),
    (
        "a008_progress_entry",
        r#"
        CREATE TABLE a008_progress_entry (
            id TEXT PRIMARY KEY NOT NULL,
            goal_id TEXT NOT NULL REFERENCES a006_goal(id),
            cycle_id TEXT REFERENCES a003_cycle(id),
            department_id TEXT REFERENCES a001_department(id),
            value TEXT NOT NULL,
            recorded_on TEXT NOT NULL
        );
        "#,
    ),
    (
        "a009_activity",
        r#"
        CREATE TABLE a009_activity (
            id TEXT PRIMARY KEY NOT NULL,
            goal_id TEXT REFERENCES a006_goal(id),
            cycle_id TEXT REFERENCES a003_cycle(id),
            department_id TEXT REFERENCES a001_department(id),
            name TEXT,
            description TEXT NOT NULL DEFAULT '',
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            state TEXT NOT NULL DEFAULT 'Activa',
            responsible TEXT
        );
        "#,
    ),
    (
        "a010_risk",
        r#"
        CREATE TABLE a010_risk (
            id TEXT PRIMARY KEY NOT NULL,
            activity_id TEXT REFERENCES a009_activity(id),
            statement TEXT NOT NULL,
            probability INTEGER NOT NULL,
            impact INTEGER NOT NULL
        );
        "#,
    ),
    (
        "a010_mitigation",
        r#"
        CREATE TABLE a010_mitigation (
            id TEXT PRIMARY KEY NOT NULL,
            risk_id TEXT NOT NULL REFERENCES a010_risk(id),
            action TEXT NOT NULL,
            action_date TEXT NOT NULL,
            responsible TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "sys_settings",
        r#"
        CREATE TABLE sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        "#,
    ),
];

/// Opens the SQLite file (created when missing) and bootstraps the schema
pub async fn connect(db_file: &str) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;
    Ok(conn)
}

pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, create_sql) in SCHEMA {
        let check_table = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            [(*table).into()],
        );
        let existing = conn.query_all(check_table).await?;

        if existing.is_empty() {
            tracing::info!("Creating {} table", table);
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                create_sql.to_string(),
            ))
            .await?;
        }
    }

    // Capture starts open, the same as a fresh installation
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "INSERT OR IGNORE INTO sys_settings (key, value) VALUES ('capture_enabled', 'true');"
            .to_string(),
    ))
    .await?;

    Ok(())
}

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/goals.db");
    let conn = connect(db_file).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
