use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use diffcheck_engine::{build_summary, extract_functions};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{DiffCheckError, DiffCheckResult};
use crate::report;

pub fn execute(args: Cli) -> Result<()> {
    let config = Config::load(args.config.as_deref());
    let compare = config.compare();

    let original = fs::read_to_string(&args.original)
        .with_context(|| format!("failed to read {}", args.original.display()))?;
    let news = fs::read_to_string(&args.new)
        .with_context(|| format!("failed to read {}", args.new.display()))?;

    let orig_table = extract_functions(&original);
    let new_table = extract_functions(&news);
    tracing::info!(
        original = orig_table.len(),
        new = new_table.len(),
        "extracted function tables"
    );

    let report = if args.summary_only {
        let mut summary = build_summary(&orig_table, &new_table);
        summary.push('\n');
        summary
    } else {
        report::build_report(&orig_table, &new_table, compare.show_unchanged)
    };

    match args.save {
        Some(target) => {
            let (target, treat_as_dir) = if target.as_os_str().is_empty() {
                (PathBuf::from(&compare.save_dir), true)
            } else {
                (target, false)
            };
            let dest = save_report(&report, &target, treat_as_dir, args.force)?;
            println!("saved: {}", dest.display());
        }
        None => print!("{}", report),
    }

    Ok(())
}

/// Write the report under `target`.
///
/// An existing directory (or the configured save_dir, created on demand
/// when `treat_as_dir` is set) gets a timestamped `comparison-*.txt`
/// filename inside it; any other target is written as a file. Existing
/// files are refused unless `force` is set.
fn save_report(
    report: &str,
    target: &Path,
    treat_as_dir: bool,
    force: bool,
) -> DiffCheckResult<PathBuf> {
    let dest = if target.is_dir() || treat_as_dir {
        fs::create_dir_all(target)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        target.join(format!("comparison-{}.txt", stamp))
    } else {
        target.to_path_buf()
    };

    if dest.exists() && !force {
        return Err(DiffCheckError::FileExists(dest.display().to_string()));
    }

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&dest, report)?;
    tracing::debug!(path = %dest.display(), bytes = report.len(), "report written");
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(original: &Path, new: &Path) -> Cli {
        Cli {
            original: original.to_path_buf(),
            new: new.to_path_buf(),
            summary_only: false,
            save: None,
            force: false,
            config: None,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_execute_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let original = temp_dir.path().join("a.cpp");
        let new = temp_dir.path().join("b.cpp");
        fs::write(&original, "void f() { a(); }").unwrap();
        fs::write(&new, "void f() { b(); }").unwrap();

        let result = execute(cli(&original, &new));
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_missing_input_fails() {
        let temp_dir = TempDir::new().unwrap();
        let original = temp_dir.path().join("gone.cpp");
        let new = temp_dir.path().join("also-gone.cpp");

        let result = execute(cli(&original, &new));
        assert!(result.is_err());
    }

    #[test]
    fn test_save_report_into_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dest = save_report("report body\n", temp_dir.path(), false, false).unwrap();
        assert!(dest.starts_with(temp_dir.path()));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "report body\n");
        let name = dest.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("comparison-"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_save_report_refuses_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("out.txt");
        fs::write(&file, "old").unwrap();

        let result = save_report("new", &file, false, false);
        assert!(matches!(result, Err(DiffCheckError::FileExists(_))));
        assert_eq!(fs::read_to_string(&file).unwrap(), "old");

        save_report("new", &file, false, true).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn test_save_report_creates_missing_save_dir() {
        let temp_dir = TempDir::new().unwrap();
        let save_dir = temp_dir.path().join("reports");
        let dest = save_report("body", &save_dir, true, false).unwrap();
        assert!(save_dir.is_dir());
        assert!(dest.starts_with(&save_dir));
    }
}
