mod common;
use common::*;

#[test]
fn test_precedence() {
    assert_eq!(run("10 PRINT 2+3*4"), "14\n");
    assert_eq!(run("10 PRINT (2+3)*4"), "20\n");
    assert_eq!(run("10 PRINT 10-4-3"), "3\n");
    assert_eq!(run("10 PRINT 8/4/2"), "1\n");
}

#[test]
fn test_power() {
    assert_eq!(run("10 PRINT 2^3^2"), "512\n");
    assert_eq!(run("10 PRINT -2^2"), "4\n");
    assert_eq!(run("10 PRINT 2*3^2"), "18\n");
}

#[test]
fn test_string_concat() {
    assert_eq!(run(r#"10 PRINT "AB"+"C""#), "ABC\n");
    assert_eq!(run(r#"10 PRINT "AB"+3"#), "?TYPE MISMATCH IN 10 (13..14)\n");
    assert_eq!(run(r#"10 PRINT -"A""#), "?TYPE MISMATCH IN 10 (9..10)\n");
}

#[test]
fn test_relational() {
    assert_eq!(
        run("10 PRINT 1<2\n20 PRINT 2<1\n30 PRINT \"A\"<\"B\"\n40 PRINT 2>=2"),
        "-1\n0\n-1\n-1\n"
    );
}

#[test]
fn test_logical() {
    assert_eq!(
        run("10 PRINT 1 AND 0\n20 PRINT 1 OR 0\n30 PRINT NOT 0\n40 PRINT 3>2 AND 2>1"),
        "0\n-1\n-1\n-1\n"
    );
}

#[test]
fn test_logical_short_circuit() {
    assert_eq!(run("10 PRINT 0 AND X\n20 PRINT 1 OR X"), "0\n-1\n");
    assert_eq!(
        run("10 PRINT 1 AND X"),
        "?UNDEFINED VARIABLE IN 10 (15..16); X\n"
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        run("10 PRINT 1\n20 PRINT 1/0\n30 PRINT 3"),
        "1\n?DIVISION BY ZERO IN 20 (10..11)\n"
    );
}

#[test]
fn test_number_format() {
    assert_eq!(run("10 PRINT 1/3"), "0.333333333333333\n");
    assert_eq!(run("10 PRINT 0.1+0.2"), "0.3\n");
    assert_eq!(run("10 PRINT 2.50"), "2.5\n");
    assert_eq!(run("10 PRINT 1E3"), "1000\n");
    assert_eq!(run("10 PRINT -.5"), "-0.5\n");
}
