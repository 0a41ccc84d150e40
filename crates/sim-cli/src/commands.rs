//! Subcommand handlers. Output goes to the supplied writer so the handlers
//! can be driven from tests.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use sim_compare::{CompareEngine, Report};
use sim_core::Result;
use sim_report::{render_json, render_text, write_report, Layout};

use crate::cli::{OutputFormat, PairArgs, ScanArgs};
use crate::config::AppConfig;
use crate::source::{load_file, load_folder};

/// Compare every document in a folder, print the report and save it.
pub fn scan(args: &ScanArgs, mut config: AppConfig, out: &mut impl Write) -> Result<()> {
    args.engine.apply(&mut config);
    if let Some(ext) = &args.extension {
        config.source.extension = ext.trim_start_matches('.').to_string();
    }
    if args.no_save {
        config.report.save = false;
    }
    config.validate()?;

    let report_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.folder.join(&config.report.file_name));
    // Never treat our own output as an input document.
    let exclude: Option<String> = (report_path.parent() == Some(args.folder.as_path()))
        .then(|| report_path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .flatten();

    let documents = load_folder(&args.folder, &config.source.extension, exclude.as_deref())?;
    let report = CompareEngine::new(config.compare.clone()).compare_all(&documents);

    print_report(&report, args.format, out)?;

    if config.report.save {
        write_report(&report, &report_path)?;
        if args.format == OutputFormat::Text {
            writeln!(out, "Detailed report saved at: {}", report_path.display())?;
        }
    }
    Ok(())
}

/// Compare exactly two files.
pub fn pair(args: &PairArgs, mut config: AppConfig, out: &mut impl Write) -> Result<()> {
    args.engine.apply(&mut config);
    config.validate()?;

    let documents = vec![load_file(&args.left)?, load_file(&args.right)?];
    info!(left = %args.left.display(), right = %args.right.display(), "comparing pair");
    let report = CompareEngine::new(config.compare).compare_all(&documents);

    print_report(&report, args.format, out)
}

fn print_report(report: &Report, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(render_text(report, Layout::Console).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", render_json(report)?)?,
    }
    Ok(())
}

/// Resolve the configuration: the file given with `--config`, or defaults.
pub fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(p) => AppConfig::load(p),
        None => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;

    fn scan_args(argv: &[&str]) -> ScanArgs {
        let mut full = vec!["simcheck", "scan"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).expect("parse").command {
            Commands::Scan(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    fn fixture_folder() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("a.txt"), "The quick brown fox").expect("write");
        fs::write(dir.path().join("b.txt"), "The quick brown fox jumps").expect("write");
        fs::write(dir.path().join("c.txt"), "hello world").expect("write");
        dir
    }

    #[test]
    fn scan_prints_and_saves_report() {
        let dir = fixture_folder();
        let folder = dir.path().to_string_lossy().into_owned();
        let args = scan_args(&[folder.as_str()]);
        let mut out = Vec::new();

        scan(&args, AppConfig::default(), &mut out).expect("scan");

        let printed = String::from_utf8(out).expect("utf8");
        assert!(printed.starts_with("📑 Plagiarism Report\n"));
        assert!(printed.contains("a.txt  <-->  b.txt  :  86.36% similar\n"));
        assert!(printed.contains("Detailed report saved at: "));

        let saved = fs::read_to_string(dir.path().join("detailed_report.txt")).expect("saved report");
        assert!(saved.starts_with("a.txt  <-->  b.txt  :  86.36% similar\n Common content snippets:\n"));
        let pair_lines: Vec<&str> = saved.lines().filter(|l| l.contains("<-->")).collect();
        assert_eq!(pair_lines.len(), 3);
        assert!(pair_lines[1].starts_with("a.txt  <-->  c.txt"));
        assert!(pair_lines[2].starts_with("b.txt  <-->  c.txt"));
    }

    #[test]
    fn rescan_ignores_previous_report() {
        let dir = fixture_folder();
        let folder = dir.path().to_string_lossy().into_owned();
        let args = scan_args(&[folder.as_str()]);

        scan(&args, AppConfig::default(), &mut Vec::new()).expect("first scan");
        let first = fs::read_to_string(dir.path().join("detailed_report.txt")).expect("report");
        scan(&args, AppConfig::default(), &mut Vec::new()).expect("second scan");
        let second = fs::read_to_string(dir.path().join("detailed_report.txt")).expect("report");

        assert_eq!(first, second);
    }

    #[test]
    fn scan_no_save_leaves_folder_untouched() {
        let dir = fixture_folder();
        let folder = dir.path().to_string_lossy().into_owned();
        let args = scan_args(&[folder.as_str(), "--no-save"]);
        let mut out = Vec::new();

        scan(&args, AppConfig::default(), &mut out).expect("scan");

        assert!(!dir.path().join("detailed_report.txt").exists());
        assert!(!String::from_utf8(out).expect("utf8").contains("saved at"));
    }

    #[test]
    fn scan_json_output() {
        let dir = fixture_folder();
        let folder = dir.path().to_string_lossy().into_owned();
        let args = scan_args(&[folder.as_str(), "--format", "json", "--no-save"]);
        let mut out = Vec::new();

        scan(&args, AppConfig::default(), &mut out).expect("scan");

        let report: Report = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(report.pairs.len(), 3);
        assert_eq!(report.pairs[0].score, 86.36);
    }

    #[test]
    fn scan_custom_output_path() {
        let dir = fixture_folder();
        let out_dir = tempfile::tempdir().expect("tempdir");
        let out_path = out_dir.path().join("report.txt");
        let folder = dir.path().to_string_lossy().into_owned();
        let output = out_path.to_string_lossy().into_owned();
        let args = scan_args(&[folder.as_str(), "--output", output.as_str()]);

        scan(&args, AppConfig::default(), &mut Vec::new()).expect("scan");

        assert!(out_path.exists());
        assert!(!dir.path().join("detailed_report.txt").exists());
    }

    #[test]
    fn scan_empty_folder_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let folder = dir.path().to_string_lossy().into_owned();
        let args = scan_args(&[folder.as_str()]);
        let err = scan(&args, AppConfig::default(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, sim_core::SimError::NoDocuments { .. }));
    }

    #[test]
    fn scan_single_document_reports_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("only.txt"), "lonely").expect("write");
        let folder = dir.path().to_string_lossy().into_owned();
        let args = scan_args(&[folder.as_str()]);

        scan(&args, AppConfig::default(), &mut Vec::new()).expect("scan");

        let saved = fs::read_to_string(dir.path().join("detailed_report.txt")).expect("report");
        assert!(saved.is_empty());
    }

    #[test]
    fn pair_command() {
        let dir = fixture_folder();
        let cli = Cli::try_parse_from([
            "simcheck".to_string(),
            "pair".to_string(),
            dir.path().join("c.txt").to_string_lossy().into_owned(),
            dir.path().join("a.txt").to_string_lossy().into_owned(),
        ])
        .expect("parse");
        let Commands::Pair(args) = cli.command else {
            panic!("expected pair");
        };
        let mut out = Vec::new();

        pair(&args, AppConfig::default(), &mut out).expect("pair");

        let printed = String::from_utf8(out).expect("utf8");
        assert!(printed.contains("c.txt  <-->  a.txt  :  "));
    }

    #[test]
    fn load_config_defaults_without_path() {
        assert_eq!(load_config(None).expect("config"), AppConfig::default());
    }
}
