use super::ReportResult;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Emit any report as pretty-printed JSON, either to a file or to stdout.
pub fn emit<T: Serialize>(report: &T, output: Option<&Path>) -> ReportResult<()> {
    let content = serde_json::to_string_pretty(report)?;

    match output {
        Some(path) => {
            fs::write(path, &content)?;
            info!("JSON report written to {}", path.display());
        }
        None => println!("{content}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        emit(&json!({"status": "completed"}), Some(&path)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["status"], "completed");
    }
}
