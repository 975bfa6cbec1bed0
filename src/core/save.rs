use crate::db::pool::DbPool;
use crate::db::queries::append_tasks;
use crate::errors::{AppError, AppResult};
use crate::models::task_record::NewTaskRecord;
use crate::models::task_type::TaskCatalog;
use chrono::NaiveDate;

/// Everything the entry form submits on save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub date: NaiveDate,
    pub account_id: String,
    /// (task type name, count) as typed by the user.
    pub counts: Vec<(String, i64)>,
}

/// Parse a `NAME=COUNT` entry. The split happens on the last `=`, so type
/// names may contain any other character.
pub fn parse_task_spec(input: &str) -> AppResult<(String, i64)> {
    let (name, count) = input
        .rsplit_once('=')
        .ok_or_else(|| AppError::InvalidTaskSpec(input.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidTaskSpec(input.to_string()));
    }

    let count: i64 = count
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidTaskSpec(input.to_string()))?;
    if count < 0 {
        return Err(AppError::InvalidTaskSpec(input.to_string()));
    }

    Ok((name.to_string(), count))
}

/// High-level business logic for the `add` command.
pub struct SaveLogic;

impl SaveLogic {
    /// Validate a save request and turn it into one insert batch.
    ///
    /// Zero counts are dropped; `time_per_task` comes from `catalog` and is
    /// frozen into each record.
    pub fn build_batch(req: &SaveRequest, catalog: &TaskCatalog) -> AppResult<Vec<NewTaskRecord>> {
        let account = req.account_id.trim();
        if account.is_empty() {
            return Err(AppError::MissingAccountId);
        }

        let mut batch = Vec::new();
        for (name, count) in &req.counts {
            if *count <= 0 {
                continue;
            }
            let task = catalog
                .resolve(name)
                .ok_or_else(|| AppError::UnknownTaskType(name.clone()))?;

            batch.push(NewTaskRecord::new(
                req.date,
                account,
                &task.name,
                *count,
                task.minutes_per_task,
            ));
        }

        if batch.is_empty() {
            return Err(AppError::NoTaskEntries);
        }
        Ok(batch)
    }

    /// Validate, then append the batch. Returns the number of rows written.
    ///
    /// Validation failures return before the database is opened.
    pub fn apply(db_path: &str, req: &SaveRequest, catalog: &TaskCatalog) -> AppResult<usize> {
        let batch = Self::build_batch(req, catalog)?;

        let mut pool = DbPool::open(db_path)?;
        let written = append_tasks(&mut pool.conn, &batch)?;

        log::info!(
            "logged {written} task row(s) for account {} on {}",
            batch.first().map(|r| r.account_id.as_str()).unwrap_or_default(),
            req.date
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task_type::TaskType;

    fn req(account: &str, counts: &[(&str, i64)]) -> SaveRequest {
        SaveRequest {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            account_id: account.to_string(),
            counts: counts.iter().map(|(n, c)| (n.to_string(), *c)).collect(),
        }
    }

    #[test]
    fn empty_account_is_rejected() {
        let err = SaveLogic::build_batch(&req("   ", &[("Calls", 3)]), &TaskCatalog::default())
            .unwrap_err();
        assert!(matches!(err, AppError::MissingAccountId));
    }

    #[test]
    fn all_zero_counts_is_rejected() {
        let err = SaveLogic::build_batch(
            &req("A1", &[("Calls", 0), ("Emails", 0)]),
            &TaskCatalog::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::NoTaskEntries));
    }

    #[test]
    fn zero_counts_are_dropped_and_account_trimmed() {
        let batch = SaveLogic::build_batch(
            &req(" A1 ", &[("Calls", 3), ("Emails", 0), ("Emails", 2)]),
            &TaskCatalog::default(),
        )
        .unwrap();
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().all(|r| r.account_id == "A1"));
        assert_eq!(batch[0].task_type, "Calls");
        assert_eq!(batch[0].time_per_task, 10.67);
        assert_eq!(batch[1].total_time, 6.0);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = SaveLogic::build_batch(&req("A1", &[("Faxes", 1)]), &TaskCatalog::default())
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownTaskType(ref t) if t == "Faxes"));
    }

    #[test]
    fn minutes_come_from_injected_catalog() {
        let catalog = TaskCatalog::new(vec![TaskType::new("Chats", 2.5)]);
        let batch = SaveLogic::build_batch(&req("A1", &[("chats", 4)]), &catalog).unwrap();
        assert_eq!(batch[0].task_type, "Chats");
        assert_eq!(batch[0].total_time, 10.0);
    }

    #[test]
    fn task_spec_parsing() {
        assert_eq!(parse_task_spec("Calls=3").unwrap(), ("Calls".to_string(), 3));
        assert_eq!(
            parse_task_spec("No Activity/Future Review/Account Review = 2").unwrap(),
            ("No Activity/Future Review/Account Review".to_string(), 2)
        );
        assert!(parse_task_spec("Calls").is_err());
        assert!(parse_task_spec("=3").is_err());
        assert!(parse_task_spec("Calls=-1").is_err());
        assert!(parse_task_spec("Calls=two").is_err());
    }

    #[test]
    fn invalid_request_never_touches_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("never.sqlite");
        let err = SaveLogic::apply(
            db.to_str().unwrap(),
            &req("", &[("Calls", 3)]),
            &TaskCatalog::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::MissingAccountId));
        assert!(!db.exists());
    }
}
