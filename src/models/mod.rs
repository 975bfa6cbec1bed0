pub mod day_summary;
pub mod filter;
pub mod task_record;
pub mod task_type;
