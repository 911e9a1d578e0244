use pitboss_cli::{exit_code, run};

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_goes_to_stdout_with_success() {
    let (code, stdout, stderr) = run_args(&["pitboss", "--help"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(stderr.is_empty());
    for cmd in ["play", "sim", "strategies", "cfg"] {
        assert!(stdout.contains(cmd), "help should list {cmd}");
    }
}

#[test]
fn version_goes_to_stdout() {
    let (code, stdout, _) = run_args(&["pitboss", "--version"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(stdout.contains("pitboss"));
}

#[test]
fn unknown_command_prints_usage() {
    let (code, stdout, stderr) = run_args(&["pitboss", "deal"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage: pitboss <command> [options]"));
    assert!(stderr.contains("  strategies"));
}

#[test]
fn strategies_lists_registry() {
    let (code, stdout, _) = run_args(&["pitboss", "strategies"]);
    assert_eq!(code, exit_code::SUCCESS);
    for id in pitboss_ai::strategy_ids() {
        assert!(stdout.contains(id));
    }
}
