//! `$name` substitution for `p`.

use crate::environment::VariableStore;

/// Replace every `$<name>` of a declared variable with its rendering.
///
/// One left-to-right pass. At each `$` the longest declared name that follows
/// wins, so with both `a` and `ab` declared `$abc` renders `ab`'s value
/// followed by `c`. Inserted text is not scanned again, and a `$` that does
/// not introduce a declared name is kept as written.
pub fn substitute(text: &str, store: &VariableStore) -> String {
    if store.is_empty() || !text.contains('$') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        match store.longest_prefix_of(after) {
            Some((name, value)) => {
                out.push_str(&value.to_string());
                rest = &after[name.len()..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
