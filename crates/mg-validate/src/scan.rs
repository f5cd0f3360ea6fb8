//! Byte-level scanning helpers shared by the dialect rule sets.

pub(crate) fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Maximal alphanumeric/underscore runs immediately preceding any byte in
/// `delims`. Duplicate runs are kept; callers check each occurrence.
pub(crate) fn idents_before<'a>(input: &'a str, delims: &[u8]) -> Vec<&'a str> {
    let bytes = input.as_bytes();
    let mut out = Vec::new();
    for (at, &b) in bytes.iter().enumerate() {
        if !delims.contains(&b) || at == 0 || !is_ident_byte(bytes[at - 1]) {
            continue;
        }
        let mut start = at;
        while start > 0 && is_ident_byte(bytes[start - 1]) {
            start -= 1;
        }
        out.push(&input[start..at]);
    }
    out
}

/// Byte length of the leading run of `s` whose chars satisfy `pred`.
pub(crate) fn consume_while(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(at, _)| at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idents_before_collects_runs_for_each_delimiter_hit() {
        let ids = idents_before("A1[Start] --> B_2{Choice}", &[b'[', b'{']);
        assert_eq!(ids, vec!["A1", "B_2"]);
    }

    #[test]
    fn idents_before_skips_delimiters_without_identifier() {
        assert!(idents_before("foo ( bar", &[b'(']).is_empty());
        assert!(idents_before("[orphan]", &[b'[']).is_empty());
    }

    #[test]
    fn idents_before_handles_adjacent_delimiters() {
        let ids = idents_before("root((Topic))", &[b'[', b'(', b')', b'{']);
        assert_eq!(ids, vec!["root", "Topic"]);
    }

    #[test]
    fn consume_while_returns_prefix_length() {
        assert_eq!(consume_while("   x", char::is_whitespace), 3);
        assert_eq!(consume_while("abc", char::is_whitespace), 0);
        assert_eq!(consume_while("  ", char::is_whitespace), 2);
    }
}
