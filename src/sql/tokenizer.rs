use crate::sql::{token::Token, token_kind::TokenKind};

/// Lenient SQL tokenizer producing the flat token stream the context
/// classifier scans.
///
/// Behavior:
/// - Whitespace, `,`, `(`, `)` and `;` separate tokens and are not emitted.
///   The last punctuation separator before a token is kept in
///   `Token::preceded_by`.
/// - `=`, `<`, `>` and `!` become single-character operator tokens.
/// - `'...'` and `"..."` become one token each, quotes included. A quote left
///   open runs to the end of the input.
/// - Anything else accumulates into an upper-cased word.
///
/// Guarantees:
/// - Never panics and never returns an error, whatever the input.
/// - O(n) time.
pub fn tokenize(sql: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut pending: Option<char> = None;
    let mut chars = sql.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\'' | '"' => {
                flush_word(sql, &mut word_start, i, &mut pending, &mut out);
                let mut end = sql.len();
                for (j, cc) in chars.by_ref() {
                    if cc == c {
                        end = j + cc.len_utf8();
                        break;
                    }
                }
                let text = sql[i..end].to_string();
                let kind = if c == '\'' {
                    TokenKind::QuotedLiteral(text)
                } else {
                    TokenKind::QuotedIdentifier(text)
                };
                out.push(Token::new(kind, i, end, pending.take()));
            }
            '=' | '<' | '>' | '!' => {
                flush_word(sql, &mut word_start, i, &mut pending, &mut out);
                out.push(Token::new(
                    TokenKind::Operator(c),
                    i,
                    i + 1,
                    pending.take(),
                ));
            }
            ',' | '(' | ')' | ';' => {
                flush_word(sql, &mut word_start, i, &mut pending, &mut out);
                pending = Some(c);
            }
            c if c.is_whitespace() => {
                flush_word(sql, &mut word_start, i, &mut pending, &mut out);
            }
            _ => {
                word_start.get_or_insert(i);
            }
        }
    }
    flush_word(sql, &mut word_start, sql.len(), &mut pending, &mut out);

    out
}

fn flush_word(
    sql: &str,
    word_start: &mut Option<usize>,
    end: usize,
    pending: &mut Option<char>,
    out: &mut Vec<Token>,
) {
    if let Some(start) = word_start.take() {
        let kind = TokenKind::Word(sql[start..end].to_uppercase());
        out.push(Token::new(kind, start, end, pending.take()));
    }
}
