//! CLI output formatting.

use mathcalc_core::ResultRecord;
use mathcalc_store::LoggedComputation;

/// Elide the middle of very long values for table display.
///
/// Counts characters, not bytes, so arbitrary strings are safe to pass.
#[must_use]
pub fn elide(s: &str) -> String {
    let len = s.chars().count();
    if len > 100 {
        let head: String = s.chars().take(50).collect();
        let tail: String = s.chars().skip(len - 50).collect();
        format!("{head}...{tail} ({len} digits)")
    } else {
        s.to_string()
    }
}

/// Print a result record: bare result by default, details/result table in
/// verbose mode. The bare form always prints the full value; the table
/// elides very long cells.
pub fn print_record(record: &ResultRecord, verbose: bool) {
    if verbose {
        let result = record.result.to_string();
        println!("{:<40}  {}", "Details", "Result");
        println!("{:-<40}  {:-<20}", "", "");
        println!("{:<40}  {}", elide(&record.details), elide(&result));
    } else {
        println!("{}", record.result);
    }
}

/// Print the history table, newest first.
pub fn print_history(rows: &[LoggedComputation]) {
    println!(
        "{:>5}  {:<5} {:<28} {:<24} {}",
        "id", "op", "params", "result", "created_at"
    );
    for row in rows {
        println!(
            "{:>5}  {:<5} {:<28} {:<24} {}",
            row.id,
            row.op,
            elide(&row.params),
            elide(&row.result),
            row.created_at
        );
    }
}
