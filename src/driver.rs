//! Drives the scanner over files and interactive input, printing what it finds.
use std::{
    fs,
    io::{self, BufRead, Write},
    iter,
    path::Path,
};

use anyhow::{Context, Result};
use log::info;

use crate::{
    error::PositionalError,
    lexer::{LexError, Scanner},
    source_map::find_line,
    span::Line,
};

/// Writes one listing line per token, up to and including end-of-input.
/// The line number is only printed when it differs from the previous token's.
pub fn write_listing<W: Write>(source: &str, out: &mut W) -> io::Result<()> {
    let mut previous_line: Option<Line> = None;
    for token in Scanner::new(source) {
        if previous_line != Some(token.line) {
            write!(out, "{:4} ", token.line)?;
            previous_line = Some(token.line);
        } else {
            write!(out, "   | ")?;
        }
        writeln!(out, "{token}")?;
    }
    Ok(())
}

/// Writes every lexical error in `source`, with the offending line and a
/// marker underneath the offending range. Returns the number of errors.
pub fn write_errors<W: Write>(source: &str, out: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for error in Scanner::new(source).filter_map(|token| token.error().cloned()) {
        describe_error(&error, source, out)?;
        count += 1;
    }
    Ok(count)
}

fn describe_error<W: Write>(err: &LexError, source: &str, out: &mut W) -> io::Result<()> {
    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let Some(context) = find_line(source, err.range.start()) else {
        return writeln!(out, "{}", err.describe());
    };

    let gutter = context.line_no().to_string();
    let padding = context.column_of(err.range.start());
    let marked = err.range.lookup(source).trim_end_matches(['\r', '\n']);
    let width = marked.chars().count().max(1);

    writeln!(out, "{}| {}", gutter, context.for_display())?;
    writeln!(
        out,
        "{}| {}{}--- {}",
        pad_char(' ', gutter.len()),
        pad_char(' ', padding),
        pad_char('^', width),
        err
    )
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Unable to read file \"{}\"", path.display()))
}

/// Prints the token listing for the file at `path`.
pub fn run_file<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let source = read_source(path)?;
    info!("Scanning {} ({} bytes)", path.display(), source.len());

    write_listing(&source, out)?;
    Ok(())
}

/// Prints the lexical errors in the file at `path`. Returns `true` if the
/// file is free of errors.
pub fn check_file<W: Write>(path: &Path, out: &mut W) -> Result<bool> {
    let source = read_source(path)?;
    info!("Checking {} ({} bytes)", path.display(), source.len());

    let errors = write_errors(&source, out)?;
    if errors > 0 {
        writeln!(out, "{} lexical error(s) in {}", errors, path.display())?;
    }
    Ok(errors == 0)
}

/// Reads lines from `input` until it is exhausted, printing the token
/// listing for each line on its own.
pub fn repl<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Unable to read input")? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        write_listing(&line, out)?;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn listing(source: &str) -> String {
        let mut out = Vec::new();
        write_listing(source, &mut out).expect("write to Vec");
        String::from_utf8(out).expect("utf-8 listing")
    }

    fn errors(source: &str) -> (usize, String) {
        let mut out = Vec::new();
        let count = write_errors(source, &mut out).expect("write to Vec");
        (count, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn listing_prints_line_numbers_when_they_change() {
        let expected = concat!(
            "   1 INT 'int'\n",
            "   | IDENTIFIER 'x'\n",
            "   | SEMICOLON ';'\n",
            "   2 RETURN 'return'\n",
            "   | EOF ''\n",
        );

        assert_eq!(listing("int x;\nreturn"), expected);
    }

    #[test]
    fn listing_prints_error_messages_in_place_of_text() {
        assert_eq!(
            listing("@"),
            "   1 ERROR 'unexpected character: @'\n   | EOF ''\n"
        );
    }

    #[test]
    fn listing_of_empty_source() {
        assert_eq!(listing(""), "   1 EOF ''\n");
    }

    #[test]
    fn errors_are_marked_under_the_source() {
        let (count, output) = errors("int c = 'ab';");

        assert_eq!(count, 1);
        assert_eq!(
            output,
            "1| int c = 'ab';\n |         ^^^^--- non-single-character token: ab\n"
        );
    }

    #[test]
    fn errors_on_later_lines_use_their_line_number() {
        let (count, output) = errors("x\ny $\n");

        assert_eq!(count, 1);
        assert_eq!(output, "2| y $\n |   ^--- unexpected character: $\n");
    }

    #[test]
    fn marker_stops_before_carriage_return() {
        let (count, output) = errors("\"ab\r\nx");

        assert_eq!(count, 1);
        assert_eq!(output, "1| \"ab\n | ^^^--- unsupported multi-line string\n");
    }

    #[test]
    fn clean_source_has_no_errors() {
        assert_eq!(errors("while (1) { x++; }"), (0, String::new()));
    }

    #[test]
    fn repl_scans_each_line_separately() {
        let mut input = "a\nb +\n".as_bytes();
        let mut out = Vec::new();

        repl(&mut input, &mut out).expect("repl");

        let expected = concat!(
            "> ",
            "   1 IDENTIFIER 'a'\n",
            "   2 EOF ''\n",
            "> ",
            "   1 IDENTIFIER 'b'\n",
            "   | PLUS '+'\n",
            "   2 EOF ''\n",
            "> \n",
        );
        assert_eq!(String::from_utf8(out).expect("utf-8 output"), expected);
    }

    #[test]
    fn missing_file_is_reported() {
        let mut out = Vec::new();
        let result = run_file(Path::new("does/not/exist.c"), &mut out);

        let message = format!("{:#}", result.expect_err("missing file"));
        assert!(message.contains("Unable to read file"), "{message}");
    }
}
