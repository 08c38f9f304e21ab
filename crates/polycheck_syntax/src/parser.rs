//! Grammar engine for the polynomial language
//!
//! A recursive-descent recognizer with one procedure per nonterminal and at most two tokens of lookahead:
//!
//! ```text
//! program           := poly_decl_section start inputs END_OF_FILE
//! poly_decl_section := poly_decl+
//! poly_decl         := POLY header EQUAL body SEMICOLON
//! header            := ID ( LPAREN id_list RPAREN )?
//! id_list           := ID (COMMA ID)*
//! body              := term (addop term)*
//! term              := monomial+ | NUM monomial*
//! monomial          := ID (POWER NUM)?
//! addop             := PLUS | MINUS
//! start             := START stmt+
//! stmt              := INPUT ID SEMICOLON | poly_eval SEMICOLON
//! poly_eval         := ID LPAREN arg (COMMA arg)* RPAREN
//! arg               := poly_eval | ID | NUM
//! inputs            := NUM+
//! ```
//!
//! No syntax tree is built. Every recognized construct is reported to a [`ParseEvents`] implementation, which is how
//! the semantic analyzer runs interleaved with parsing. The first unexpected token aborts the run with a
//! [`SyntaxError`]. Evaluations nested deeper than [`MAX_NESTING_DEPTH`] are rejected the same way.
//!
//! ## Examples
//!
//! ```rust
//! use polycheck_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("POLY F(a, b) = a b^2; START INPUT a; F(a, 3); 7 8");
//! parser::check_syntax(&tokens).unwrap();
//!
//! let tokens = lexer::lex("POLY F = ; START F(1); 1");
//! let err = parser::check_syntax(&tokens).unwrap_err();
//! assert_eq!(err.line, 1);
//! ```

use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind, TokenStream};
use polycheck_core::lang::keywords::KeywordId;
use polycheck_core::lang::operators::{self, OperatorId};
use polycheck_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/events.rs");
include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
