use npp::{
    ast::{BinaryOperator, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Position, TokenKind},
        parser::{Parser, parse},
    },
};

fn expression(source: &str) -> Expr {
    Parser::new(Lexer::new(source)).parse_expression()
                                   .unwrap_or_else(|e| panic!("{source:?} failed: {e}"))
}

fn assert_parses(source: &str) -> Vec<Statement> {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected diagnostics for {source:?}: {errors:?}");
    program.statements
}

fn binary_parts(expr: &Expr) -> (&Expr, BinaryOperator, &Expr) {
    match expr {
        Expr::Binary { left, op, right, .. } => (left, *op, right),
        other => panic!("expected binary expression, got {other:?}"),
    }
}

#[test]
fn product_binds_tighter_than_sum() {
    let expr = expression("1 + 2 * 3");
    let (left, op, right) = binary_parts(&expr);

    assert_eq!(op, BinaryOperator::Add);
    assert!(matches!(left, Expr::Integer { value: 1, .. }));
    assert_eq!(binary_parts(right).1, BinaryOperator::Mul);
}

#[test]
fn equal_precedence_associates_left() {
    let expr = expression("10 - 4 - 3");
    let (left, op, right) = binary_parts(&expr);

    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(right, Expr::Integer { value: 3, .. }));

    let (inner_left, inner_op, inner_right) = binary_parts(left);
    assert_eq!(inner_op, BinaryOperator::Sub);
    assert!(matches!(inner_left, Expr::Integer { value: 10, .. }));
    assert!(matches!(inner_right, Expr::Integer { value: 4, .. }));
}

#[test]
fn equality_is_the_weakest_level() {
    let expr = expression("a + 1 < b * 2 == 1");
    let (left, op, _) = binary_parts(&expr);

    assert_eq!(op, BinaryOperator::Equal);
    let (sum, less, product) = binary_parts(left);
    assert_eq!(less, BinaryOperator::Less);
    assert_eq!(binary_parts(sum).1, BinaryOperator::Add);
    assert_eq!(binary_parts(product).1, BinaryOperator::Mul);
}

#[test]
fn remainder_is_multiplicative() {
    let expr = expression("7 + 8 % 3");
    let (_, op, right) = binary_parts(&expr);

    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(binary_parts(right).1, BinaryOperator::Mod);
}

#[test]
fn binary_nodes_sit_at_their_operator() {
    let expr = expression("x  * 2");

    assert_eq!(expr.position(), Position::new(1, 4));
}

#[test]
fn minus_folds_into_integer_literal() {
    assert_eq!(expression("-5"),
               Expr::Integer { value:    -5,
                               position: Position::new(1, 1), });
    assert_eq!(expression("-9223372036854775808"),
               Expr::Integer { value:    i64::MIN,
                               position: Position::new(1, 1), });

    let expr = expression("1 - -2");
    let (_, op, right) = binary_parts(&expr);
    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(right, Expr::Integer { value: -2, .. }));
}

#[test]
fn minus_requires_an_integer() {
    let (program, errors) = parse("suna -x");

    assert!(program.statements.is_empty());
    assert_eq!(errors[0],
               ParseError::ExpectedNumber { found:    TokenKind::Identifier,
                                            position: Position::new(1, 7), });
}

#[test]
fn oversized_literals_are_rejected() {
    let (_, errors) = parse("suna 9223372036854775808");

    assert_eq!(errors,
               [ParseError::InvalidNumber { literal:  "9223372036854775808".to_string(),
                                            position: Position::new(1, 6), }]);
}

#[test]
fn reserved_keywords_start_no_statement() {
    let (program, errors) = parse("yas; suna 1");

    assert_eq!(program.statements.len(), 1);
    assert_eq!(errors,
               [ParseError::InvalidStatement { found:    TokenKind::Yas,
                                               position: Position::new(1, 1), }]);
}

#[test]
fn reserved_keywords_are_not_expressions() {
    let (_, errors) = parse("suna nah");

    assert_eq!(errors,
               [ParseError::ExpectedPrimary { found:    TokenKind::Nah,
                                              position: Position::new(1, 6), }]);
}

#[test]
fn reserved_keywords_are_not_names() {
    let (_, errors) = parse("sun grind = 1");

    assert_eq!(errors[0],
               ParseError::ExpectedIdentifier { found:    TokenKind::Grind,
                                                position: Position::new(1, 5), });
}

#[test]
fn missing_assign_skips_one_token_and_recovers() {
    let (program, errors) = parse("sun x 5; suna 2");

    assert_eq!(errors,
               [ParseError::ExpectedAssign { found:    TokenKind::Integer,
                                             position: Position::new(1, 7), }]);
    assert_eq!(program.to_string(), "suna 2\n");
}

#[test]
fn errors_inside_blocks_stay_inside() {
    let (program, errors) = parse("agar 1 { sun = 2; suna 3 } suna 4");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].to_string(),
               "Error at line 1, col 14: Expected identifier after sun, got =");
    assert_eq!(errors[1].to_string(), "Error at line 1, col 16: Invalid statement, got INT");
    assert_eq!(program.to_string(), "agar 1 { suna 3 }\nsuna 4\n");
}

#[test]
fn missing_brace_is_reported() {
    let (program, errors) = parse("agar 1 suna 2");

    assert!(program.statements.is_empty());
    assert_eq!(errors[0].to_string(), "Error at line 1, col 8: Expected { after condition, got SUNA");
}

#[test]
fn unclosed_block_fails_the_statement() {
    let (program, errors) = parse("agar 1 { suna 1");

    assert!(program.statements.is_empty());
    assert_eq!(errors,
               [ParseError::UnclosedBlock { found:    TokenKind::Eof,
                                            position: Position::new(1, 16), }]);
}

#[test]
fn illegal_characters_are_reported() {
    let (program, errors) = parse("suna @; $ suna 1");

    assert_eq!(program.statements.len(), 1);
    assert_eq!(errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
               ["Error at line 1, col 6: Illegal character '@'",
                "Error at line 1, col 9: Illegal character '$'"]);
}

#[test]
fn semicolons_are_optional() {
    let with = assert_parses(";;sun a = 1;; suna a;;;");
    let without = assert_parses("sun a = 1 suna a");

    assert_eq!(with.len(), 2);
    assert_eq!(with.iter().map(ToString::to_string).collect::<Vec<_>>(),
               without.iter().map(ToString::to_string).collect::<Vec<_>>());
}

#[test]
fn magar_may_follow_semicolons() {
    let statements = assert_parses("agar x { suna 1; }; magar { suna 2 }");

    match &statements[..] {
        [Statement::If { alternative: Some(alternative),
                         consequence,
                         .. }] => {
            assert_eq!(consequence.statements.len(), 1);
            assert_eq!(alternative.statements.len(), 1);
        },
        other => panic!("expected a single conditional, got {other:?}"),
    }
}

#[test]
fn statements_record_their_keyword_position() {
    let statements = assert_parses("sun a = 1\n  suna a");

    assert_eq!(statements[0].position(), Position::new(1, 1));
    assert_eq!(statements[1].position(), Position::new(2, 3));
}

#[test]
fn rendering_is_a_fixed_point() {
    let source = r#"
        sun number = 2;
        suna number;
        sun a = "hello ";
        agar number >= 10 { suna "big"; suna -3 } magar { agar a { suna a + "x" } }
        suna 1 - 2 - 3 * 4 % 5 == -7 != 0
        agar 0 {}
    "#;

    let (program, errors) = parse(source);
    assert!(errors.is_empty());

    let rendered = program.to_string();
    let (reparsed, errors) = parse(&rendered);
    assert!(errors.is_empty(), "rendering did not re-parse: {rendered}");
    assert_eq!(reparsed.to_string(), rendered);
    assert_eq!(reparsed.statements.len(), program.statements.len());
}
