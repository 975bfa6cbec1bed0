#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use prodtracker::db::pool::DbPool;
use tempfile::TempDir;

/// Isolated database + config location for one test.
pub struct TestEnv {
    _dir: TempDir,
    pub db: String,
    pub config: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db = dir.path().join("prodtracker.sqlite").to_string_lossy().to_string();
        let config = dir.path().join("prodtracker.conf").to_string_lossy().to_string();
        Self {
            _dir: dir,
            db,
            config,
        }
    }

    /// The binary with `--db` and `--config` already pointing at this env.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("prodtracker");
        cmd.args(["--db", &self.db, "--config", &self.config]);
        cmd
    }

    /// `init` in test mode (no config file written).
    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    pub fn open(&self) -> DbPool {
        DbPool::open(&self.db).expect("open db")
    }

    pub fn row_count(&self) -> i64 {
        self.open()
            .conn
            .query_row("SELECT COUNT(*) FROM tasks", [], |r| r.get(0))
            .expect("count rows")
    }
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
