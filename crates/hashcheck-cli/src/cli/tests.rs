use super::*;
use std::fs;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_files() {
    let cli = parse(&["hashcheck"]);
    assert!(cli.files.is_empty());
    assert!(cli.jobs.is_none());
    assert!(!cli.strict);
}

#[test]
fn cli_parse_files() {
    let cli = parse(&["hashcheck", "a_deadbeef.bin", "b.txt"]);
    assert_eq!(
        cli.files,
        vec![PathBuf::from("a_deadbeef.bin"), PathBuf::from("b.txt")]
    );
}

#[test]
fn cli_parse_jobs_and_strict() {
    let cli = parse(&["hashcheck", "-j", "3", "--strict", "x"]);
    assert_eq!(cli.jobs, NonZeroUsize::new(3));
    assert!(cli.strict);
    let cfg = cli.config();
    assert_eq!(cfg.workers.get(), 3);
    assert!(cfg.strict);
}

#[test]
fn cli_parse_zero_jobs_rejected() {
    assert!(Cli::try_parse_from(["hashcheck", "--jobs", "0", "x"]).is_err());
}

#[test]
fn cli_parse_dash_prefixed_file_after_separator() {
    let cli = parse(&["hashcheck", "--", "-odd_12345678"]);
    assert_eq!(cli.files, vec![PathBuf::from("-odd_12345678")]);
}

#[test]
fn cli_parse_dash_prefixed_files() {
    let cli = parse(&["hashcheck", "-x_12345678", "--strict_deadbeef", "b.txt"]);
    assert_eq!(
        cli.files,
        vec![
            PathBuf::from("-x_12345678"),
            PathBuf::from("--strict_deadbeef"),
            PathBuf::from("b.txt"),
        ]
    );
    assert!(!cli.strict);
}

#[test]
fn cli_parse_options_after_first_file_are_files() {
    let cli = parse(&["hashcheck", "--strict", "a.bin", "--strict", "-j"]);
    assert!(cli.strict);
    assert_eq!(
        cli.files,
        vec![
            PathBuf::from("a.bin"),
            PathBuf::from("--strict"),
            PathBuf::from("-j"),
        ]
    );
}

#[test]
fn no_files_is_clean() {
    assert_eq!(parse(&["hashcheck"]).run().unwrap(), RunStatus::Clean);
}

#[test]
fn check_writes_report_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("a_cbf43926.bin");
    fs::write(&good, b"123456789").unwrap();
    let bad = dir.path().join("b_cbf43927.bin");
    fs::write(&bad, b"123456789").unwrap();

    let cfg = CheckConfig::with_workers(NonZeroUsize::new(2));
    let mut out = Vec::new();
    let summary = check::run_check_to(&cfg, vec![good.clone(), bad.clone()], &mut out).unwrap();
    assert_eq!(summary.ok, 1);
    assert_eq!(summary.bad, 1);
    assert!(summary.has_failures());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(&format!("OK:   {}\n", good.display())));
    assert!(text.contains(&format!("BAD:  {}\n", bad.display())));
    assert!(text.ends_with("[ok: 1][bad: 1]\n"));
}

#[test]
fn strict_reports_failures() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone_deadbeef.bin");
    let missing = missing.to_str().unwrap();
    let lenient = parse(&["hashcheck", missing]);
    assert_eq!(lenient.run().unwrap(), RunStatus::Clean);
    let strict = parse(&["hashcheck", "--strict", missing]);
    assert_eq!(strict.run().unwrap(), RunStatus::Failures);
}
