use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::schema::ensure_schema;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped with `--test`)
///  - the SQLite database with empty reporting tables, if missing
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = cfg.database_path();

    if !cli.test {
        let path = cfg.save()?;
        info(format!("Config file : {}", path.display()));
    }

    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let pool = DbPool::new(&db_path.to_string_lossy())?;
    ensure_schema(&pool.conn)?;

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
