#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on which programs are accepted, where the first syntax error is reported, and the exact order
/// in which semantic events are delivered.
mod tests {
    use super::*;
    use crate::lexer;

    /// Records every event as a short string.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl ParseEvents for Recorder {
        fn polynomial_declared(&mut self, name: &Token) {
            self.events.push(format!("decl {}@{}", name.text, name.line));
        }

        fn parameter_declared(&mut self, parameter: &Token) {
            self.events.push(format!("param {}", parameter.text));
        }

        fn header_finished(&mut self, has_parameter_list: bool) {
            self.events.push(format!("header {}", has_parameter_list));
        }

        fn monomial(&mut self, variable: &Token) {
            self.events.push(format!("mono {}@{}", variable.text, variable.line));
        }

        fn declaration_finished(&mut self) {
            self.events.push("end decl".to_string());
        }

        fn input_statement(&mut self, variable: &Token) {
            self.events.push(format!("input {}", variable.text));
        }

        fn evaluation_started(&mut self, name: &Token) {
            self.events.push(format!("eval {}", name.text));
        }

        fn argument(&mut self, argument: Argument<'_>) {
            let label = match argument {
                Argument::Literal(_) => "lit",
                Argument::Variable(_) => "var",
                Argument::Evaluation(_) => "nested",
            };
            self.events.push(format!("arg {} {}", label, argument.token().text));
        }

        fn evaluation_finished(&mut self, name: &Token) {
            self.events.push(format!("end eval {}", name.text));
        }
    }

    fn parse_str(source: &str) -> Result<(), SyntaxError> {
        check_syntax(&lexer::lex(source))
    }

    fn record(source: &str) -> (Result<(), SyntaxError>, Vec<String>) {
        let mut recorder = Recorder::default();
        let result = parse(&lexer::lex(source), &mut recorder);
        (result, recorder.events)
    }

    #[test]
    fn test_minimal_program() {
        parse_str("POLY F = x; START F(1); 1").unwrap();
    }

    #[test]
    fn test_lowercase_keyword_aliases() {
        parse_str("poly F = x; start input x; F(x); 1 2 3").unwrap();
    }

    #[test]
    fn test_many_declarations() {
        parse_str("POLY A = x; POLY B = x; POLY C(y) = y; POLY D = 1; START A(1); 5").unwrap();
    }

    #[test]
    fn test_term_forms() {
        parse_str("POLY F(a, b) = 3 + a + 2a b^3 - a^2 b + 0; START F(1, 2); 1").unwrap();
    }

    #[test]
    fn test_coefficient_cannot_follow_monomial_in_same_term() {
        let err = parse_str("POLY F = x 2; START F(1); 1").unwrap_err();
        assert_eq!(err.kind, TokenKind::Num);
    }

    #[test]
    fn test_missing_trailing_inputs_is_error() {
        let err = parse_str("POLY F = x; START F(1);").unwrap_err();
        assert_eq!(err.kind, TokenKind::Eof);
    }

    #[test]
    fn test_trailing_garbage_after_inputs_is_error() {
        let err = parse_str("POLY F = x; START F(1); 1 2 x").unwrap_err();
        assert_eq!(err.kind, TokenKind::Ident);
    }

    #[test]
    fn test_declaration_section_is_mandatory() {
        let err = parse_str("START F(1); 1").unwrap_err();
        assert_eq!(err.kind, TokenKind::Keyword(KeywordId::Start));
    }

    #[test]
    fn test_statement_list_is_mandatory() {
        let err = parse_str("POLY F = x; START 1").unwrap_err();
        assert_eq!(err.expected, "INPUT or ID");
    }

    #[test]
    fn test_empty_parameter_list_is_error() {
        let err = parse_str("POLY F() = x; START F(1); 1").unwrap_err();
        assert_eq!(err.kind, TokenKind::Punctuation(PunctuationId::RParen));
    }

    #[test]
    fn test_empty_argument_list_is_error() {
        assert!(parse_str("POLY F = x; START F(); 1").is_err());
    }

    #[test]
    fn test_unrecognized_character_is_syntax_error() {
        let err = parse_str("POLY F = x * 2; START F(1); 1").unwrap_err();
        assert_eq!(err.kind, TokenKind::Error);
        assert_eq!(err.found, "ERROR `*`");
    }

    #[test]
    fn test_error_line_is_offending_token_line() {
        let err = parse_str("POLY F = x;\nSTART\nF(1)\n1").unwrap_err();
        assert_eq!(err.line, 4);
        insta::assert_snapshot!(err.to_string(), @"expected SEMICOLON, found NUM `1` on line 4");
    }

    #[test]
    fn test_declaration_events() {
        let (result, events) = record("POLY F(a, b) = 2a b^2 - a;\nPOLY G = x; START F(1, 2); 1");
        result.unwrap();
        assert_eq!(
            &events[..10],
            &[
                "decl F@1",
                "param a",
                "param b",
                "header true",
                "mono a@1",
                "mono b@1",
                "mono a@1",
                "end decl",
                "decl G@2",
                "header false",
            ]
        );
    }

    #[test]
    fn test_nested_evaluation_event_order() {
        let (result, events) = record("POLY P = x; START INPUT y; P(Q(1, y), 3); 9");
        result.unwrap();
        assert_eq!(
            &events[4..],
            &[
                "input y",
                "eval P",
                "eval Q",
                "arg lit 1",
                "arg var y",
                "end eval Q",
                "arg nested Q",
                "arg lit 3",
                "end eval P",
            ]
        );
    }

    #[test]
    fn test_no_events_after_syntax_error() {
        let (result, events) = record("POLY F = x; POLY G = ; START F(1); 1");
        assert!(result.is_err());
        assert_eq!(events, vec!["decl F@1", "header false", "mono x@1", "end decl", "decl G@1", "header false"]);
    }

    #[test]
    fn test_evaluation_name_without_parenthesis_is_error() {
        let err = parse_str("POLY F = x; START F; 1").unwrap_err();
        assert_eq!(err.expected, "LPAREN");
    }

    fn nested_program(depth: usize) -> String {
        format!("POLY P = x; START {}1{}; 1", "P(".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn test_nesting_at_limit_is_accepted() {
        assert!(parse_str(&nested_program(MAX_NESTING_DEPTH)).is_ok());
    }

    #[test]
    fn test_nesting_past_limit_is_error() {
        let err = parse_str(&nested_program(MAX_NESTING_DEPTH + 1)).unwrap_err();
        assert_eq!(
            err.reason,
            crate::diagnostics::SyntaxErrorReason::NestingTooDeep {
                limit: MAX_NESTING_DEPTH
            }
        );
        assert_eq!(err.kind, TokenKind::Ident);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_hundred_thousand_nested_evaluations_fail_without_overflow() {
        let (result, events) = record(&nested_program(100_000));
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("nesting too deep"), "{err}");
        assert_eq!(events.iter().filter(|e| e.starts_with("eval ")).count(), MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_nesting_depth_is_per_statement() {
        let mut source = String::from("POLY P = x; START ");
        for _ in 0..3 {
            source.push_str(&format!("{}1{};\n", "P(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH)));
        }
        source.push('1');
        assert!(parse_str(&source).is_ok());
    }
}
