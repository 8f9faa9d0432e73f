use cl_lexer::{check_balanced, KeywordTable, Lexer, LexerOptions};

const SAMPLE: &str = r#"
;;; Simple Common Lisp file
(in-package :cl-user)

#| Block comments #| nest |# freely |#
(defun greet (name &optional (greeting "Hello"))
  (format t "~a, ~a!~%" greeting name)
  (alexandria:when-let ((n (length name)))
    (loop for c across name collect #\x)))

(mapcar #'greet '(|Ada| |Grace|))
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let source = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)?,
        None => SAMPLE.to_string(),
    };
    let options = match std::env::var("CL_LEXER_OPTIONS") {
        Ok(json) => LexerOptions::from_json(&json)?,
        Err(_) => LexerOptions::default(),
    };

    println!("=== Common Lisp Lexer Demo ===\n");

    let tokens = Lexer::with_options(&source, KeywordTable::standard(), options).get_tokens();
    println!("Tokens generated: {}\n", tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        if !token.category.is_trivia() || token.text.starts_with(';') {
            println!(
                "  {:>4}: {:<24} {}-{} {:?}",
                i, token.category, token.start, token.end, token.text
            );
        }
    }

    check_balanced(&tokens)?;
    Ok(())
}
