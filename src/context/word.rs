/// Byte range of the word being typed, relative to the text before the cursor.
///
/// Accepting a suggestion replaces exactly this range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordSpan {
    start: usize,
    end: usize,
}

impl WordSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '\\' | '#')
}

/// Span of the trailing word in `text`.
///
/// Empty (at the end of `text`) when the text ends in whitespace: the user is
/// starting a fresh word and nothing should be filtered.
pub fn word_span(text: &str) -> WordSpan {
    let end = text.len();
    if text.chars().next_back().is_none_or(char::is_whitespace) {
        return WordSpan::new(end, end);
    }
    let start = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map_or(end, |(i, _)| i);
    WordSpan::new(start, end)
}

/// The trailing word in `text`, dots and backslashes included.
pub fn last_word(text: &str) -> &str {
    word_span(text).slice(text)
}

/// Like [`word_span`] but only the part after the last `.`, which is what
/// gets filtered and replaced once the word is known to be `alias.col`.
pub fn filter_span(text: &str) -> WordSpan {
    let span = word_span(text);
    match span.slice(text).rfind('.') {
        Some(dot) => WordSpan::new(span.start + dot + 1, span.end),
        None => span,
    }
}
