use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::db::log::audit;
use crate::db::migrate::{SCHEMA_VERSION, run_pending_migrations, schema_problems};
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // Opening the store already brings the schema up to date.
        let store = SqliteStore::open(&cfg.database)?;
        let conn = store.conn();

        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            if !run_pending_migrations(conn)? {
                println!("{}✔ Schema is up to date (v{}).{}\n", GREEN, SCHEMA_VERSION, RESET);
            }
        }

        if *info {
            stats::print_db_info(&store)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            for problem in schema_problems(conn)? {
                println!("{}✘ Schema:{} {}", RED, RESET, problem);
            }

            let integrity: String =
                conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            conn.execute_batch("VACUUM;")?;
            audit(conn, "vacuum", "database", "VACUUM completed");
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
