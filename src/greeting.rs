//! The text the program prints.

use crate::constants::COUNT;

/// The first line.
pub const HELLO: &str = "Hello, sailor!";

/// The second line, before [`COUNT`] is substituted into `{value}`.
pub const COUNT_TEMPLATE: &str = "こんにちは! Count is {value}.";

/// Substitute `value` into [`COUNT_TEMPLATE`].
pub fn count_line(value: i32) -> String {
    COUNT_TEMPLATE.replacen("{value}", &value.to_string(), 1)
}

/// Both lines, in output order, without line terminators.
pub fn lines() -> [String; 2] {
    [HELLO.to_owned(), count_line(COUNT)]
}

/// The full standard-output payload, each line terminated by `\n`.
pub fn render() -> String {
    let mut out = String::new();
    for line in lines() {
        out.push_str(&line);
        out.push('\n');
    }
    log::trace!(target: "sailor::greeting", "Rendered {} bytes", out.len());
    out
}
