//! Pattern directives and the pattern compiler
//!
//! A format pattern is a printf-like string using `%` as the directive
//! escape, e.g. `%d{%Y-%m-%d %H:%M:%S}%T%t%T[%p]%T%f:%l%T%m%n`. The compiler
//! turns it into an ordered sequence of [`FormatItem`]s once; the sequence is
//! then replayed for every event.
//!
//! Directive vocabulary:
//!
//! | Key | Meaning                         | Argument |
//! |-----|---------------------------------|----------|
//! | `m` | message text                    | —        |
//! | `p` | severity display name           | —        |
//! | `r` | elapsed ms since process start  | —        |
//! | `c` | logger name                     | —        |
//! | `t` | thread id                       | —        |
//! | `n` | newline                         | —        |
//! | `d` | timestamp                       | `{strftime}`, defaults to `%Y-%m-%d %H:%M:%S` |
//! | `f` | source file                     | —        |
//! | `l` | source line                     | —        |
//! | `T` | tab                             | —        |
//! | `F` | fiber/task id                   | —        |
//! | `%` | literal percent                 | —        |
//!
//! Malformed input never fails compilation: unknown keys echo their raw
//! `%<key>` text and an unterminated `{` degrades the whole directive to
//! literal text. A bad pattern must not take the host process down.

use super::event::LogEvent;
use super::level::Level;

/// Timestamp sub-format used when `%d` carries no `{...}` argument.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One compiled fragment of a format pattern.
///
/// The variant set is closed on purpose: it keeps the compiler's dispatch
/// exhaustive at compile time. Each variant is a stateless transformation of
/// `(level, event)` into bytes appended to the output buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatItem {
    /// Verbatim text between directives (also the degraded form of
    /// malformed directives).
    Literal(String),
    /// `%m` message text
    Message,
    /// `%p` severity display name
    LevelName,
    /// `%r` elapsed milliseconds since process start
    ElapsedMs,
    /// `%c` name of the logger the event was aimed at
    LoggerName,
    /// `%t` thread id
    ThreadId,
    /// `%F` fiber/task id
    FiberId,
    /// `%d{...}` timestamp, strftime sub-format captured at compile time
    Timestamp(String),
    /// `%f` source file
    File,
    /// `%l` source line
    Line,
    /// `%n` newline
    Newline,
    /// `%T` tab
    Tab,
    /// `%%` literal percent
    Percent,
}

impl FormatItem {
    /// Append this fragment's rendering of `(level, event)` to `out`.
    ///
    /// Never fails for a well-formed event; a timestamp sub-format that
    /// chrono rejects at render time degrades to echoing the sub-format
    /// text.
    pub fn render(&self, out: &mut String, level: Level, event: &LogEvent) {
        match self {
            FormatItem::Literal(text) => out.push_str(text),
            FormatItem::Message => out.push_str(event.message()),
            FormatItem::LevelName => out.push_str(level.as_str()),
            FormatItem::ElapsedMs => out.push_str(&event.elapsed_ms().to_string()),
            FormatItem::LoggerName => out.push_str(event.logger_name()),
            FormatItem::ThreadId => out.push_str(&event.thread_id().to_string()),
            FormatItem::FiberId => out.push_str(&event.fiber_id().to_string()),
            FormatItem::Timestamp(format) => {
                use std::fmt::Write;
                let mut rendered = String::new();
                if write!(rendered, "{}", event.timestamp().format(format)).is_ok() {
                    out.push_str(&rendered);
                } else {
                    out.push_str(format);
                }
            }
            FormatItem::File => out.push_str(event.file()),
            FormatItem::Line => out.push_str(&event.line().to_string()),
            FormatItem::Newline => out.push('\n'),
            FormatItem::Tab => out.push('\t'),
            FormatItem::Percent => out.push('%'),
        }
    }
}

/// Compile a pattern string into its ordered item sequence.
///
/// Pure and deterministic: the same pattern always compiles to the same
/// sequence. Single left-to-right scan; literal characters accumulate in a
/// pending buffer that is flushed whenever a directive resolves.
pub fn parse(pattern: &str) -> Vec<FormatItem> {
    let mut items = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            literal.push(ch);
            continue;
        }

        let Some(key) = chars.next() else {
            // Lone trailing escape degrades to a literal percent.
            literal.push('%');
            break;
        };

        if key == '%' {
            flush_literal(&mut items, &mut literal);
            items.push(FormatItem::Percent);
            continue;
        }

        // Optional {sub-format} argument. The argument may itself contain
        // `%` (strftime formats require it); only a missing closing brace
        // is malformed.
        let mut argument = None;
        if chars.peek() == Some(&'{') {
            chars.next();
            let mut collected = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                collected.push(c);
            }
            if !closed {
                // Unterminated brace: the whole directive degrades to raw
                // trailing text.
                literal.push('%');
                literal.push(key);
                literal.push('{');
                literal.push_str(&collected);
                continue;
            }
            argument = Some(collected);
        }

        match resolve(key, argument.as_deref()) {
            Some(item) => {
                flush_literal(&mut items, &mut literal);
                items.push(item);
            }
            None => {
                // Unknown key: echo the raw directive text unchanged.
                literal.push('%');
                literal.push(key);
                if let Some(arg) = argument {
                    literal.push('{');
                    literal.push_str(&arg);
                    literal.push('}');
                }
            }
        }
    }

    flush_literal(&mut items, &mut literal);
    items
}

fn flush_literal(items: &mut Vec<FormatItem>, literal: &mut String) {
    if !literal.is_empty() {
        items.push(FormatItem::Literal(std::mem::take(literal)));
    }
}

/// Resolve a directive key against the fixed vocabulary. The argument is
/// meaningful only to `%d`; other directives consume and ignore it.
fn resolve(key: char, argument: Option<&str>) -> Option<FormatItem> {
    let item = match key {
        'm' => FormatItem::Message,
        'p' => FormatItem::LevelName,
        'r' => FormatItem::ElapsedMs,
        'c' => FormatItem::LoggerName,
        't' => FormatItem::ThreadId,
        'n' => FormatItem::Newline,
        'd' => FormatItem::Timestamp(
            argument
                .filter(|arg| !arg.is_empty())
                .unwrap_or(DEFAULT_TIMESTAMP_FORMAT)
                .to_string(),
        ),
        'f' => FormatItem::File,
        'l' => FormatItem::Line,
        'T' => FormatItem::Tab,
        'F' => FormatItem::FiberId,
        _ => return None,
    };
    Some(item)
}
