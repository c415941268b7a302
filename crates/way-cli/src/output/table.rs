//! Plain-text table rendering.

/// Render headers and rows as an aligned ASCII table.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
    for row in rows {
        for (index, cell) in row.iter().take(columns).enumerate() {
            widths[index] = widths[index].max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(
        &mut out,
        &headers.iter().map(ToString::to_string).collect::<Vec<_>>(),
        &widths,
    );
    out.push_str(
        &widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out.pop();
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let cell = cells.get(index).map_or("", String::as_str);
            format!("{cell:<width$}")
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns_to_widest_cell() {
        let rendered = render(
            &["id", "message"],
            &[
                vec!["card-1".into(), "short".into()],
                vec!["x".into(), "a longer message".into()],
            ],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id     | message"));
        assert!(lines[1].contains("-+-"));
        assert!(lines[2].starts_with("card-1 | short"));
    }

    #[test]
    fn missing_cells_render_empty() {
        let rendered = render(&["a", "b"], &[vec!["only".into()]]);
        assert!(rendered.lines().last().unwrap().starts_with("only"));
    }
}
