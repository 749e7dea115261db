/// Splits text on Unicode whitespace. Tokens are kept verbatim: no case
/// folding, punctuation stays attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    pub fn tokenize<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        text.split_whitespace()
    }
}
