mod common;
use common::*;

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert!(result.success);
    for cmd in ["add", "edit-phone", "add-birthday", "birthdays", "del"] {
        assert!(result.stdout.contains(cmd), "missing {cmd}:\n{}", result.stdout);
    }
    assert!(result.stdout.contains("interactive session"));
}

#[test]
fn session_help_lists_bot_commands() {
    let env = TestEnv::new();
    let result = env.session(&[], "help\nexit\n");

    assert!(result.stdout.contains("Commands:"));
    assert!(result.stdout.contains("show-birthday <name>"));
    assert!(result.stdout.contains("close"));
}

#[test]
fn version_flag() {
    let env = TestEnv::new();
    let result = env.run(&["--version"]);
    assert!(result.stdout.starts_with("assistant-bot "));
}
