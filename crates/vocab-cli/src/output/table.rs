#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub color: bool,
}

/// Render a simple aligned table for string rows, indented by two spaces.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(header, *width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.trim_end().chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let padded = pad(value, *width);
                if options.color {
                    colorize(value, &padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines
        .iter()
        .map(|line| format!("  {}", line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(fill))
}

fn colorize(value: &str, padded: &str) -> String {
    let code = match value {
        "word" => Some("36"),
        "idiom" => Some("35"),
        "terminology" => Some("34"),
        "never" => Some("33"),
        _ => None,
    };
    match code {
        Some(code) => padded.replacen(value, &paint(code, value), 1),
        None => padded.to_string(),
    }
}

/// Wrap `value` in an ANSI color sequence.
#[must_use]
pub fn paint(code: &str, value: &str) -> String {
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
