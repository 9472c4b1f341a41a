/// End-to-end integration tests for the LOOP interpreter
/// Demonstrates: Lexer → Parser → Evaluator working together
use loopi::lexer::Lexer;
use loopi::parser::Parser;
use loopi::runtime::{Evaluator, VariableStore};
use loopi::Error;

fn execute(source: &str, inputs: &[u64]) -> loopi::Result<VariableStore> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse()?;

    let mut evaluator = Evaluator::with_store(VariableStore::from_inputs(inputs));
    evaluator.execute(&program)?;
    Ok(evaluator.into_store())
}

#[test]
fn test_e2e_increment_leaves_output_untouched() {
    let store = execute("x1 := x1 + 3", &[]).unwrap();

    assert_eq!(store.output(), 0);
    assert_eq!(store.peek(1), Some(3));
}

#[test]
fn test_e2e_copy_input() {
    let store = execute("x0 := x1 + 0", &[5]).unwrap();
    assert_eq!(store.output(), 5);
}

#[test]
fn test_e2e_counting_loop() {
    let store = execute("LOOP x1 DO x0 := x0 + 1 END", &[4]).unwrap();
    assert_eq!(store.output(), 4);
}

#[test]
fn test_e2e_clamp_at_zero() {
    let store = execute("x0 := x0 - 1", &[]).unwrap();
    assert_eq!(store.output(), 0);
}

#[test]
fn test_e2e_loop_bound_fixed() {
    let store = execute("LOOP x1 DO x1 := x1 + 1; x0 := x0 + 1 END", &[3]).unwrap();
    assert_eq!(store.output(), 3);
}

#[test]
fn test_e2e_missing_colon_is_syntax_error() {
    let err = execute("x1 = x1 + 1", &[]).unwrap_err();

    match err {
        Error::SyntaxError { line, col, message } => {
            assert_eq!((line, col), (1, 4));
            assert!(message.contains("expected ':='"), "message: {}", message);
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_e2e_addition() {
    let source = "
        x0 := x1 + 0;
        LOOP x2 DO
            x0 := x0 + 1
        END
    ";
    assert_eq!(execute(source, &[17, 25]).unwrap().output(), 42);
}

#[test]
fn test_e2e_multiplication() {
    let source = "LOOP x1 DO LOOP x2 DO x0 := x0 + 1 END END";
    assert_eq!(execute(source, &[12, 12]).unwrap().output(), 144);
    assert_eq!(execute(source, &[0, 12]).unwrap().output(), 0);
}

#[test]
fn test_e2e_truncated_subtraction() {
    // x0 := max(0, x1 - x2)
    let source = "x0 := x1 + 0; LOOP x2 DO x0 := x0 - 1 END";
    assert_eq!(execute(source, &[10, 3]).unwrap().output(), 7);
    assert_eq!(execute(source, &[3, 10]).unwrap().output(), 0);
}

#[test]
fn test_e2e_if_zero() {
    // x0 := 1 if x1 == 0 else 0
    let source = "x0 := x0 + 1; LOOP x1 DO x0 := x0 - 1 END";
    assert_eq!(execute(source, &[0]).unwrap().output(), 1);
    assert_eq!(execute(source, &[5]).unwrap().output(), 0);
}

#[test]
fn test_e2e_power_of_two() {
    // x0 := 2 ^ x1
    let source = "
        x0 := x0 + 1;
        LOOP x1 DO
            x2 := x0 + 0;
            LOOP x2 DO x0 := x0 + 1 END
        END
    ";
    assert_eq!(execute(source, &[0]).unwrap().output(), 1);
    assert_eq!(execute(source, &[10]).unwrap().output(), 1024);
}

#[test]
fn test_e2e_overflow_faults() {
    let err = execute("x0 := x1 + 1", &[u64::MAX]).unwrap_err();
    assert!(matches!(err, Error::ArithmeticOverflow { target: 0, .. }));
}

#[test]
fn test_e2e_library_run_helper() {
    assert_eq!(loopi::run("x0 := x2 + 1", &[9, 4]).unwrap(), 5);
    assert!(loopi::run("LOOP x1 DO", &[]).is_err());
}

#[test]
fn test_e2e_independent_parses_in_threads() {
    let handles: Vec<_> = (0..4u64)
        .map(|n| {
            std::thread::spawn(move || {
                let source = format!("LOOP x1 DO x0 := x0 + {} END", n);
                loopi::run(&source, &[10]).unwrap()
            })
        })
        .collect();

    let results: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![0, 10, 20, 30]);
}

#[test]
fn test_e2e_interleaved_lexers() {
    let mut first = Lexer::new("x1 ; x2");
    let mut second = Lexer::new("LOOP x3");

    let a = first.next_token().unwrap();
    let b = second.next_token().unwrap();
    first.push_token(a.clone()).unwrap();
    second.push_token(b.clone()).unwrap();

    assert_eq!(first.next_token().unwrap(), a);
    assert_eq!(second.next_token().unwrap(), b);
}
