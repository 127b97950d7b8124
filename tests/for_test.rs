mod common;
use common::*;

#[test]
fn test_for_counts_up() {
    assert_eq!(
        run("10 FOR I=1 TO 5\n20 PRINT I;\n30 NEXT I\n40 PRINT\n50 PRINT I"),
        "12345\n6\n"
    );
}

#[test]
fn test_for_step_negative() {
    assert_eq!(run("10 FOR I=5 TO 1 STEP -1:PRINT I;:NEXT I"), "54321");
}

#[test]
fn test_for_step_fraction() {
    assert_eq!(
        run("10 FOR I=0 TO 1 STEP 0.5:PRINT I;\" \";:NEXT"),
        "0 0.5 1 "
    );
}

#[test]
fn test_for_loop_always_runs_once() {
    assert_eq!(run("10 FOR I=3 TO 1:PRINT I:NEXT"), "3\n");
}

#[test]
fn test_for_step_zero() {
    assert_eq!(
        run("10 FOR I=1 TO 5 STEP 0\n20 PRINT I\n30 NEXT"),
        "?FOR STEP IS ZERO IN 10 (3..6)\n"
    );
}

#[test]
fn test_for_string_variable() {
    assert_eq!(run("10 FOR A$=1 TO 2"), "?TYPE MISMATCH IN 10 (3..6)\n");
}

#[test]
fn test_next_without_for() {
    assert_eq!(run("10 NEXT"), "?NEXT WITHOUT FOR IN 10 (3..7)\n");
    assert_eq!(
        run("10 FOR I=1 TO 2\n20 NEXT J"),
        "?NEXT WITHOUT FOR IN 20 (3..7)\n"
    );
}

#[test]
fn test_nested_loops() {
    assert_eq!(
        run("10 FOR X=1 TO 2\n20 FOR Y=5 TO 6\n30 PRINT X;Y\n40 NEXT Y\n50 NEXT X"),
        "15\n16\n25\n26\n"
    );
}

#[test]
fn test_next_outer_discards_inner() {
    assert_eq!(
        run("10 FOR I=1 TO 2\n20 FOR J=1 TO 3\n30 PRINT I;J\n40 NEXT I"),
        "11\n21\n"
    );
}

#[test]
fn test_breaking_out_of_for_loop_with_goto() {
    assert_eq!(
        run("10 FOR Y=1 TO 2\n20 FOR X=8 TO 9\n30 PRINT Y;X\n40 GOTO 60\n50 NEXT\n60 NEXT Y"),
        "18\n28\n"
    );
}

#[test]
fn test_reentering_loop_variable() {
    assert_eq!(
        run("10 FOR I=1 TO 3\n20 FOR I=1 TO 2\n30 PRINT I;\n40 NEXT I\n50 NEXT I"),
        "12?NEXT WITHOUT FOR IN 50 (3..7)\n"
    );
}

#[test]
fn test_loop_variable_replaced() {
    assert_eq!(
        run("10 FOR I=1 TO 3\n20 I=\"X\"\n30 NEXT I"),
        "?UNKNOWN LOOP VARIABLE IN 30 (3..7); I\n"
    );
}

#[test]
fn test_limit_evaluated_once() {
    assert_eq!(
        run("10 N=3\n20 FOR I=1 TO N\n30 N=10\n40 PRINT I;\n50 NEXT"),
        "123"
    );
}
