use super::types::CommandLine;

/// Parse a raw command line into its token sequence.
pub fn parse(input: &str) -> CommandLine {
    CommandLine {
        raw_text: input.to_string(),
        tokens: tokenize(input),
    }
}

/// Split a line into tokens, honoring angle-bracket quoting.
///
/// A span enclosed in `<` and `>` becomes one token containing the inner text
/// verbatim, embedded spaces included; the brackets are stripped. The bracket
/// form is only recognized where a token starts; a `<` inside a bare word is
/// literal. Outside bracket spans, any maximal run of non-whitespace
/// characters is one token.
///
/// There is no escaping. An unmatched `<`, or an empty `<>`, degrades to
/// literal characters inside a bare word rather than an error.
pub fn tokenize(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }

        if chars[i] == '<' {
            // A quoted span needs a closing '>' with at least one character
            // between the brackets.
            if let Some(gap) = chars[i + 1..].iter().position(|&c| c == '>') {
                if gap > 0 {
                    tokens.push(chars[i + 1..i + 1 + gap].iter().collect());
                    i += gap + 2;
                    continue;
                }
            }
        }

        let start = i;
        while i < chars.len() && !chars[i].is_whitespace() {
            i += 1;
        }
        tokens.push(chars[start..i].iter().collect());
    }

    tokens
}
