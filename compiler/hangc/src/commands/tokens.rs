//! The `tokens` command: dump the token stream of a file.
//!
//! Shows exactly what the bracket resolver sees, layout markers included.

use super::{read_file, EXIT_UNANALYZABLE};

pub fn print_tokens(path: &str) {
    let content = read_file(path);

    let tokens = match hang_lexer::lex(&content) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{path}: error: lex error at {e}");
            std::process::exit(EXIT_UNANALYZABLE);
        }
    };

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for tok in &tokens {
        let kind = format!("{:?}", tok.kind);
        println!(
            "  {kind:<14} {}-{} {:?}",
            tok.span.start, tok.span.end, tok.text
        );
    }
}
