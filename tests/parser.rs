use rscript::{
    ast::{
        BinaryOperator, Block, Comparison, ComparisonOperator, Expr, LiteralValue, Program,
        Statement,
    },
    error::ParseError,
    interpreter::parser::core::MAX_NESTING,
    parse,
};

fn int(value: i64, line: usize) -> Expr {
    Expr::Literal { value: LiteralValue::Integer(value),
                    line }
}

fn var(name: &str, line: usize) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr, line: usize) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line }
}

fn single_expression(src: &str) -> Expr {
    let program = parse(&format!("x <- {src}")).unwrap_or_else(|e| panic!("{src}: {e}"));
    match program.statements.as_slice() {
        [Statement::Assignment { value, .. }] => value.clone(),
        other => panic!("expected one assignment, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(single_expression("1 + 2 * 3"),
               binary(int(1, 1),
                      BinaryOperator::Add,
                      binary(int(2, 1), BinaryOperator::Mul, int(3, 1), 1),
                      1));
}

#[test]
fn arithmetic_is_left_associative() {
    assert_eq!(single_expression("10 - 3 - 2"),
               binary(binary(int(10, 1), BinaryOperator::Sub, int(3, 1), 1),
                      BinaryOperator::Sub,
                      int(2, 1),
                      1));
    assert_eq!(single_expression("8 / 4 %% 3"),
               binary(binary(int(8, 1), BinaryOperator::Div, int(4, 1), 1),
                      BinaryOperator::Mod,
                      int(3, 1),
                      1));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(single_expression("(a + 1) * b"),
               binary(binary(var("a", 1), BinaryOperator::Add, int(1, 1), 1),
                      BinaryOperator::Mul,
                      var("b", 1),
                      1));
}

#[test]
fn statements_carry_their_lines() {
    let program = parse("x <- \"hi\"\n\nprint(x)\ncat(x, 1)").unwrap();

    assert_eq!(program,
               Program { statements:
                             vec![Statement::Assignment { name:  "x".to_string(),
                                                          value: Expr::Literal { value:
                                                                                     LiteralValue::Text("hi".to_string()),
                                                                                 line:  1, },
                                                          line:  1, },
                                  Statement::Print { value: var("x", 3),
                                                     line:  3, },
                                  Statement::Cat { values: vec![var("x", 4), int(1, 4)],
                                                   line:   4, }], });
}

#[test]
fn if_with_and_without_else() {
    let program = parse("if (a >= 1) { print(a) }\nif (a == 2) { } else { print(0) }").unwrap();

    assert_eq!(program.statements,
               vec![Statement::If { condition:  Comparison { op:    ComparisonOperator::GreaterEqual,
                                                             left:  var("a", 1),
                                                             right: int(1, 1),
                                                             line:  1, },
                                    then_block: Block { statements:
                                                            vec![Statement::Print { value:
                                                                                        var("a", 1),
                                                                                    line:  1, }], },
                                    else_block: None,
                                    line:       1, },
                    Statement::If { condition:  Comparison { op:    ComparisonOperator::Equal,
                                                             left:  var("a", 2),
                                                             right: int(2, 2),
                                                             line:  2, },
                                    then_block: Block::default(),
                                    else_block: Some(Block { statements:
                                                                 vec![Statement::Print { value:
                                                                                             int(0, 2),
                                                                                         line:  2, }], }),
                                    line:       2, }]);
}

#[test]
fn while_with_arithmetic_in_condition() {
    let program = parse("while (i * 2 != n + 1) { i <- i + 1 }").unwrap();

    match program.statements.as_slice() {
        [Statement::While { condition, body, .. }] => {
            assert_eq!(condition.op, ComparisonOperator::NotEqual);
            assert_eq!(condition.left,
                       binary(var("i", 1), BinaryOperator::Mul, int(2, 1), 1));
            assert_eq!(condition.right,
                       binary(var("n", 1), BinaryOperator::Add, int(1, 1), 1));
            assert_eq!(body.statements.len(), 1);
        },
        other => panic!("expected one while loop, got {other:?}"),
    }
}

#[test]
fn nested_blocks() {
    let program = parse("while (i < 3) {\n  if (i == 1) {\n    print(i)\n  }\n  i <- i + 1\n}").unwrap();

    let [Statement::While { body, .. }] = program.statements.as_slice() else {
        panic!("expected one while loop");
    };
    assert!(matches!(body.statements.as_slice(),
                     [Statement::If { line: 2, .. }, Statement::Assignment { line: 5, .. }]));
}

#[test]
fn semicolons_are_optional_and_repeatable() {
    assert_eq!(parse("a <- 1; b <- 2;;; print(a)").unwrap().statements.len(), 3);
    assert_eq!(parse("a <- 1 b <- 2").unwrap().statements.len(), 2);
}

#[test]
fn empty_program() {
    assert_eq!(parse("").unwrap(), Program::default());
    assert_eq!(parse("  # comment only\n\n").unwrap(), Program::default());
}

#[test]
fn chained_comparisons_are_rejected() {
    assert_eq!(parse("if (1 < 2 < 3) { print(1) }"),
               Err(ParseError::UnexpectedToken { token: "<".to_string(),
                                                 line:  1, }));
}

#[test]
fn condition_requires_a_comparison() {
    assert_eq!(parse("if (x) { print(1) }"),
               Err(ParseError::UnexpectedToken { token: ")".to_string(),
                                                 line:  1, }));
}

#[test]
fn cat_requires_an_argument() {
    assert_eq!(parse("cat()"),
               Err(ParseError::UnexpectedToken { token: ")".to_string(),
                                                 line:  1, }));
}

#[test]
fn missing_assignment_arrow() {
    assert_eq!(parse("x 5"),
               Err(ParseError::UnexpectedToken { token: "5".to_string(),
                                                 line:  1, }));
}

#[test]
fn keywords_cannot_be_assigned() {
    assert_eq!(parse("print <- 1"),
               Err(ParseError::UnexpectedToken { token: "<-".to_string(),
                                                 line:  1, }));
}

#[test]
fn stray_closing_brace() {
    assert_eq!(parse("print(1)\n}"),
               Err(ParseError::UnexpectedToken { token: "}".to_string(),
                                                 line:  2, }));
}

#[test]
fn premature_end_of_input() {
    assert_eq!(parse("print(1"), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
    assert_eq!(parse("if (1 < 2) {\n"), Err(ParseError::UnexpectedEndOfInput { line: 2 }));
    assert_eq!(parse("x <-"), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
}

#[test]
fn else_without_if_is_rejected() {
    assert_eq!(parse("else { print(1) }"),
               Err(ParseError::UnexpectedToken { token: "else".to_string(),
                                                 line:  1, }));
}

#[test]
fn string_tokens_are_quoted_in_errors() {
    assert_eq!(parse("\"text\" <- 1"),
               Err(ParseError::UnexpectedToken { token: "\"text\"".to_string(),
                                                 line:  1, }));
}

#[test]
fn statements_report_their_line() {
    let program = parse("x <- 1\n\nwhile (x < 3) {\n  x <- x + 1\n}\nprint(x)").unwrap();
    let lines: Vec<usize> = program.statements.iter().map(Statement::line_number).collect();
    assert_eq!(lines, vec![1, 3, 6]);
}

#[test]
fn deeply_parenthesized_expression_is_rejected() {
    let src = format!("print({}1{})", "(".repeat(2000), ")".repeat(2000));
    let error = parse(&src).unwrap_err();
    assert_eq!(error, ParseError::NestingTooDeep { line: 1 });
    assert_eq!(error.to_string(), "Error on line 1: Nesting too deep.");
}

#[test]
fn parentheses_up_to_the_limit_are_accepted() {
    let depth = MAX_NESTING;
    assert!(parse(&format!("x <- {}1{}", "(".repeat(depth), ")".repeat(depth))).is_ok());
    assert_eq!(parse(&format!("x <- {}1{}", "(".repeat(depth + 1), ")".repeat(depth + 1))),
               Err(ParseError::NestingTooDeep { line: 1 }));
}

#[test]
fn long_operator_chain_is_rejected() {
    let src = format!("x <- 1{}", " + 1".repeat(10_000));
    assert_eq!(parse(&src), Err(ParseError::NestingTooDeep { line: 1 }));

    let src = format!("x <- 2{}", " * 2".repeat(10_000));
    assert_eq!(parse(&src), Err(ParseError::NestingTooDeep { line: 1 }));
}

#[test]
fn operator_chain_up_to_the_limit_is_accepted() {
    assert!(parse(&format!("x <- 1{}", " + 1".repeat(MAX_NESTING))).is_ok());
    assert_eq!(parse(&format!("x <- 1{}", " - 1".repeat(MAX_NESTING + 1))),
               Err(ParseError::NestingTooDeep { line: 1 }));
}

#[test]
fn chain_length_counts_against_enclosing_blocks() {
    let chain = " + 1".repeat(MAX_NESTING);
    assert_eq!(parse(&format!("if (1 < 2) {{\nx <- 1{chain}\n}}")),
               Err(ParseError::NestingTooDeep { line: 2 }));
}

#[test]
fn deeply_nested_blocks_are_rejected() {
    let src = format!("{}print(1){}",
                      "while (1 < 2) {\n".repeat(1000),
                      "}".repeat(1000));
    assert_eq!(parse(&src),
               Err(ParseError::NestingTooDeep { line: MAX_NESTING + 1 }));
}
