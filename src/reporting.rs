//! Everything that leaves the process: report files, the run log and the
//! operator console.

pub mod console;
pub mod runlog;
pub mod writer;

pub use runlog::{FileRunLog, MemoryRunLog, RunLog};
pub use writer::ReportWriter;

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
