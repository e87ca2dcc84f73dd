//! Parser tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::{parse, ParseError};
use pseudo_ir::Program;

fn parse_ok(source: &str) -> Program {
    let tokens = pseudo_lexer::tokenize(source).expect("lexing should succeed");
    match parse(&tokens) {
        Ok(program) => program,
        Err(errors) => panic!("unexpected parse errors for {source:?}: {errors:?}"),
    }
}

fn parse_err(source: &str) -> Vec<ParseError> {
    let tokens = pseudo_lexer::tokenize(source).expect("lexing should succeed");
    match parse(&tokens) {
        Ok(program) => panic!("expected parse errors for {source:?}, got {program:?}"),
        Err(errors) => errors,
    }
}
