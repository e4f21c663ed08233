// file: src/ingest/tokenizer.rs
// description: tab/CSV tokenization of pasted spreadsheet blocks
// reference: RFC 4180 quoting convention as produced by Excel and Sheets

/// Tokenize a full pasted block into rows of trimmed cells. Tabs delimit
/// cells, `\n`/`\r\n` delimit rows. Double-quoted cells follow the
/// spreadsheet convention: tabs and newlines inside quotes are literal,
/// `""` is one quote character, and embedded line breaks collapse to a
/// single space since a cell is single-line in this domain. Rows without a
/// single non-empty cell are dropped. An unterminated quote extends to the
/// end of the input.
pub fn tokenize_block(text: &str) -> Vec<Vec<String>> {
    let chars: Vec<char> = text.chars().collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if in_quotes {
            match c {
                '"' => {
                    if chars.get(i + 1) == Some(&'"') {
                        field.push('"');
                        i += 1;
                    } else {
                        in_quotes = false;
                    }
                }
                '\r' | '\n' => {
                    if c == '\r' && chars.get(i + 1) == Some(&'\n') {
                        i += 1;
                    }
                    if !field.ends_with(' ') {
                        field.push(' ');
                    }
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '\t' => flush_field(&mut field, &mut row),
                '\r' | '\n' => {
                    if c == '\r' && chars.get(i + 1) == Some(&'\n') {
                        i += 1;
                    }
                    flush_field(&mut field, &mut row);
                    flush_row(&mut row, &mut rows);
                }
                '"' if field.trim().is_empty() => {
                    // opening quote; leading whitespace is not cell content
                    field.clear();
                    in_quotes = true;
                }
                _ => field.push(c),
            }
        }

        i += 1;
    }

    if !field.is_empty() || !row.is_empty() {
        flush_field(&mut field, &mut row);
        flush_row(&mut row, &mut rows);
    }

    rows
}

/// Tokenize one line. A line without delimiters is a single-cell row; a
/// blank line yields no cells.
pub fn tokenize_row(line: &str) -> Vec<String> {
    tokenize_block(line).into_iter().next().unwrap_or_default()
}

fn flush_field(field: &mut String, row: &mut Vec<String>) {
    row.push(field.trim().to_string());
    field.clear();
}

fn flush_row(row: &mut Vec<String>, rows: &mut Vec<Vec<String>>) {
    if row.iter().any(|cell| !cell.is_empty()) {
        rows.push(std::mem::take(row));
    } else {
        row.clear();
    }
}
