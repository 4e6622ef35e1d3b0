#![allow(dead_code)]

pub use pcmd_test_utils::builders;
pub use pcmd_test_utils::fake_executor::FakeExecutor;
pub use pcmd_test_utils::{init_tracing, with_timeout};

/// Strip the ANSI color sequences pcmd wraps prefixes and status lines in.
pub fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
