// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn ch(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

/* ---------------- Parsing ---------------- */

/// Quote- and CRLF-tolerant CSV/TSV parser. Blank lines are skipped; a
/// leading UTF-8 BOM is ignored.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // "" inside quotes
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Last line without a trailing newline (or an unterminated quote).
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// First row is the header. `None` if there are no rows at all.
pub fn split_header(mut rows: Vec<Vec<String>>) -> Option<(Vec<String>, Vec<Vec<String>>)> {
    if rows.is_empty() { return None; }
    let header = rows.remove(0);
    Some((header, rows))
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_keep_separators_and_quotes() {
        let rows = parse_rows("a,\"b, c\",\"say \"\"hi\"\"\"\r\n1,2,3\n", ',');
        assert_eq!(rows, vec![
            vec![s!("a"), s!("b, c"), s!("say \"hi\"")],
            vec![s!("1"), s!("2"), s!("3")],
        ]);
    }

    #[test]
    fn blank_lines_skipped_and_trailing_row_kept() {
        let rows = parse_rows("\u{feff}h1,h2\n\n x ,\nlast,row", ',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec![s!("h1"), s!("h2")]);
        assert_eq!(rows[1], vec![s!(" x "), s!("")]);
        assert_eq!(rows[2], vec![s!("last"), s!("row")]);
    }

    #[test]
    fn newline_inside_quotes_is_data() {
        let rows = parse_rows("\"two\nlines\",x\n", ',');
        assert_eq!(rows, vec![vec![s!("two\nlines"), s!("x")]]);
    }

    #[test]
    fn split_header_on_empty_input() {
        assert!(split_header(parse_rows("", ',')).is_none());
        let (h, body) = split_header(parse_rows("a\n1\n", ',')).unwrap();
        assert_eq!(h, vec![s!("a")]);
        assert_eq!(body, vec![vec![s!("1")]]);
    }

    #[test]
    fn write_row_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "a,b", "q\"q"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain,\"a,b\",\"q\"\"q\"\n");

        let mut buf = Vec::new();
        write_row(&mut buf, &["a,b", "c"], Delim::Tsv.ch()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\tc\n");
    }
}
