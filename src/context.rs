use std::fmt::Write;

use bytecount::num_chars;
use memchr::Memchr;

use crate::value::Node;

/// Splits on `\n` only, so a `\r` stays at the end of its line. Always yields at least one line.
fn lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut line_start = 0;

    for i in Memchr::new(b'\n', source.as_bytes()) {
        lines.push(&source[line_start..i]);
        line_start = i + 1;
    }
    lines.push(&source[line_start..]);

    lines
}

fn caret(out: &mut String, line: &str, col: usize, label: &str) {
    // Raw column as indentation, the `n: ` prefix is not accounted for
    if col > 0 && col <= num_chars(line.as_bytes()) {
        let _ = writeln!(out, "{}^ {}", " ".repeat(col), label);
    }
}

pub(crate) fn render(node: &Node, lines_before: usize, lines_after: usize) -> String {
    let lines = lines(node.source);
    let last = lines.len() - 1;

    let first = node.start.line.saturating_sub(1).saturating_sub(lines_before);
    let end = node
        .end
        .line
        .saturating_sub(1)
        .saturating_add(lines_after)
        .min(last);

    let mut out = String::new();

    for (index, line) in lines.iter().enumerate().take(end + 1).skip(first) {
        let number = index + 1;
        let _ = writeln!(out, "{}: {}", number, line);

        if number == node.start.line {
            caret(&mut out, line, node.start.col, "start");
        }
        if number == node.end.line {
            caret(&mut out, line, node.end.col, "end");
        }
    }

    out
}
