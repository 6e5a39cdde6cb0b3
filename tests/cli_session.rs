//! Interactive session driven through stdin.

mod common;
use common::*;

#[test]
fn session_greets_and_says_goodbye() {
    let env = TestEnv::new();
    let result = env.session(&[], "hello\nexit\n");

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.starts_with("Welcome to the assistant bot!\n"));
    assert!(result.stdout.contains("Enter a command: How can I help you?"));
    assert!(result.stdout.ends_with("Good bye!\n"), "stdout:\n{}", result.stdout);
}

#[test]
fn contacts_survive_between_sessions() {
    let env = TestEnv::new();
    let first = env.session(
        &[],
        "add John 1234567890\nadd-birthday John 01.02.1990\nclose\n",
    );
    assert!(first.success, "stderr:\n{}", first.stderr);
    assert!(env.book_path().exists());

    let second = env.session(&[], "show-birthday John\nphone John\nexit\n");
    assert!(second.stdout.contains("John's birthday is on 01.02.1990"));
    assert!(second
        .stdout
        .contains("Phone numbers for contact 'John': 1234567890"));
}

#[test]
fn end_of_input_saves_book() {
    let env = TestEnv::new();
    let result = env.session(&[], "add Jane 0987654321\n");

    assert!(result.success);
    assert!(result.stdout.ends_with("Good bye!\n"));
    assert!(env.read_book().contains("Jane"));
}

#[test]
fn bad_input_does_not_end_session() {
    let env = TestEnv::new();
    let result = env.session(
        &[],
        "fly\nadd John\nadd John 123\nphone Nobody\nadd-birthday John 1990-02-01\nhello\nexit\n",
    );

    assert!(result.success);
    let out = &result.stdout;
    assert!(out.contains("Invalid command."));
    assert!(out.contains("Please provide both name and phone number."));
    assert!(out.contains("Phone number must be 10 digits."));
    assert!(out.contains("Contact not found."));
    assert!(out.contains("Invalid date format. Use DD.MM.YYYY"));
    assert!(out.contains("How can I help you?"));
}

#[test]
fn upcoming_birthdays_use_pinned_today() {
    let env = TestEnv::new();
    let result = env.session(
        &[],
        "add Ann 1111111111\nadd-birthday Ann 17.06.1990\n\
         add Bob 2222222222\nadd-birthday Bob 15.06.1985\n\
         add Cid 3333333333\nadd-birthday Cid 30.06.1970\n\
         birthdays\nexit\n",
    );

    assert!(result.stdout.contains(
        "Bob's birthday is on 2024-06-15\nAnn's birthday is on 2024-06-17\n"
    ));
    assert!(!result.stdout.contains("Cid's birthday"));
}

#[test]
fn json_session_has_no_prompt() {
    let env = TestEnv::new();
    let result = env.session(&["--json"], "hello\nexit\n");

    let types: Vec<String> = result
        .json_lines()
        .iter()
        .map(|v| v["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(types, vec!["greeting", "goodbye"]);
}
