mod common;
use basic::mach::{Config, Event};
use common::*;

#[test]
fn test_input_prompt() {
    let mut r = runtime("10 INPUT \"NAME\";N$\n20 PRINT \"HI \";N$");
    assert_eq!(exec(&mut r), "NAME? ");
    assert!(r.input(" bob "));
    assert_eq!(exec(&mut r), "HI bob\n");
}

#[test]
fn test_input_number() {
    let mut r = runtime("10 INPUT A\n20 PRINT A*2");
    assert_eq!(exec_with_input(&mut r, &["21"]), "? 21\n42\n");
}

#[test]
fn test_input_text_is_not_coerced() {
    let mut r = runtime("10 INPUT A\n20 PRINT A+1");
    assert_eq!(
        exec_with_input(&mut r, &["abc"]),
        "? abc\n?TYPE MISMATCH IN 20 (10..11)\n"
    );
}

#[test]
fn test_input_too_large_is_text() {
    let mut r = runtime("10 INPUT A\n20 PRINT A\n30 PRINT A+1");
    assert_eq!(
        exec_with_input(&mut r, &["1e400"]),
        "? 1e400\n1e400\n?TYPE MISMATCH IN 30 (10..11)\n"
    );
}

#[test]
fn test_input_multiple_variables() {
    let mut r = runtime("10 INPUT \"X AND Y\",X,Y\n20 PRINT X+Y");
    assert_eq!(exec_with_input(&mut r, &["1", "2"]), "X AND Y? 1\n? 2\n3\n");
}

#[test]
fn test_input_waits() {
    let mut r = runtime("10 PRINT \"A\";\n20 INPUT B");
    assert_eq!(r.execute(100), Event::Print("A".to_string()));
    assert_eq!(r.execute(100), Event::Input("? ".to_string()));
    assert_eq!(r.execute(100), Event::Input("? ".to_string()));
    assert!(r.input("1"));
    assert_eq!(r.execute(100), Event::Stopped);
}

#[test]
fn test_input_when_not_waiting() {
    let mut r = runtime("10 END");
    assert!(!r.input("1"));
}

#[test]
fn test_interrupt_input() {
    let mut r = runtime("10 INPUT A");
    assert_eq!(exec(&mut r), "? ");
    r.interrupt();
    assert_eq!(exec(&mut r), "?BREAK IN 10\n");
}

#[test]
fn test_rerun_is_idempotent() {
    let source = "10 INPUT N\n20 FOR I=1 TO N\n30 PRINT INT(RND*100);\" \";\n40 NEXT\n50 PRINT";
    let config = Config::default().seed(Some(1978));
    let mut first = runtime_with(source, config.clone());
    let mut second = runtime_with(source, config);
    let a = exec_with_input(&mut first, &["5"]);
    let b = exec_with_input(&mut second, &["5"]);
    assert_eq!(a, b);
    first.reset();
    assert_eq!(exec_with_input(&mut first, &["5"]), a);
}
