// src/parse/split.rs

/// Split `input` on every occurrence of `delimiter` that falls outside an
/// open quoted section.
///
/// Quote state is tracked by parity: naively split on the delimiter, then
/// fold over the fragments, and whenever the last fragment accumulated so far
/// holds an odd number of `"` characters, the next fragment still belongs to
/// it, so the two are rejoined with the delimiter re-inserted. Every `"`
/// flips parity; `""` counts as two flips, not as an escape. Fragments come
/// back verbatim, quotes included, and an unterminated quote keeps merging
/// fragments until parity is restored or the input ends.
pub fn split_quoted(input: &str, delimiter: &str) -> Vec<String> {
    input
        .split(delimiter)
        .fold(Vec::new(), |mut out, fragment| {
            match out.last_mut() {
                Some(last) if last.matches('"').count() % 2 == 1 => {
                    last.push_str(delimiter);
                    last.push_str(fragment);
                }
                _ => out.push(fragment.to_string()),
            }
            out
        })
}
