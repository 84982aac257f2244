use regex::Regex;

/// Maximum length of any submitted string field, in characters
pub const MAX_FIELD_LEN: usize = 1000;

/// Sanitize a user-supplied string field before it is logged or handed to a
/// notifier: drop `<script>...</script>` blocks, drop any remaining angle
/// brackets, cap the length, and trim surrounding whitespace.
///
/// The transformation is idempotent: sanitizing already-sanitized input is a
/// no-op.
pub fn sanitize(input: &str) -> String {
    lazy_static::lazy_static! {
        static ref SCRIPT_TAG: Regex = Regex::new(r"(?is)<script\b.*?</script>").unwrap();
    }

    let value = SCRIPT_TAG.replace_all(input.trim(), "");
    let value: String = value
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .take(MAX_FIELD_LEN)
        .collect();

    // Removals can leave whitespace at the edges; trim again so a second
    // pass over the output changes nothing.
    value.trim().to_string()
}
