#![no_main]

use libfuzzer_sys::fuzz_target;
use polycheck::frontend::{analyzer, lexer};
use polycheck::Report;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let tokens = lexer::lex(s);
        if let Ok(diagnostics) = analyzer::check(&tokens) {
            // Reporting must never panic either
            let _ = Report::from_diagnostics(&diagnostics).to_string();
        }
    }
});
