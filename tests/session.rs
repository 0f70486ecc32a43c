use rpncalc::session::{Mode, Outcome, handle_line, render, run};

fn run_session(input: &str, mode: Mode) -> String {
    let mut output = Vec::new();
    run(input.as_bytes(), &mut output, mode, false).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn results_are_prefixed() {
    assert_eq!(render("1 + 1 * 5", Mode::Evaluate), "Result: 6.0");
    assert_eq!(render("-5 + 2", Mode::Evaluate), "Result: -3.0");
    assert_eq!(render("5 / 0", Mode::Evaluate), "Result: Error: Division by zero.");
}

#[test]
fn postfix_mode_prints_reverse_polish() {
    assert_eq!(render("(1 + 1) * 5", Mode::Postfix), "Postfix: 1.0 1.0 + 5.0 *");
    assert_eq!(render("5 + )", Mode::Postfix),
               "Postfix: Error: Unmatched closing parenthesis.");
    // Conversion alone does not divide.
    assert_eq!(render("5 / 0", Mode::Postfix), "Postfix: 5.0 0.0 /");
}

#[test]
fn exit_is_case_insensitive() {
    assert_eq!(handle_line("exit", Mode::Evaluate), Outcome::Exit);
    assert_eq!(handle_line("  Exit  ", Mode::Evaluate), Outcome::Exit);
    assert_eq!(handle_line("EXIT", Mode::Postfix), Outcome::Exit);
}

#[test]
fn blank_lines_are_skipped() {
    assert_eq!(handle_line("", Mode::Evaluate), Outcome::Skip);
    assert_eq!(handle_line(" \t ", Mode::Evaluate), Outcome::Skip);
}

#[test]
fn session_prints_one_line_per_expression() {
    let output = run_session("1 + 2\n\n   \n2 * 3\n3 ^ 4\n", Mode::Evaluate);
    assert_eq!(output,
               "Result: 3.0\nResult: 6.0\nResult: Error at position 2: Invalid character '^'.\n");
}

#[test]
fn session_stops_at_exit() {
    let output = run_session("1 + 2\nexit\n2 * 3\n", Mode::Evaluate);
    assert_eq!(output, "Result: 3.0\n");
}

#[test]
fn session_stops_at_end_of_input() {
    assert_eq!(run_session("", Mode::Evaluate), "");
    assert_eq!(run_session("10 / (6 - 1)", Mode::Evaluate), "Result: 2.0\n");
}

#[test]
fn prompt_is_written_before_each_read() {
    let mut output = Vec::new();
    run("1 + 1\n".as_bytes(), &mut output, Mode::Evaluate, true).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "> Result: 2.0\n> ");
}
