use crate::handlers::CrudOutcome;
use crate::store::Row;

/// Escapes a field value for interpolation into markup. The original sheet
/// app interpolated raw values; here every value passes through this before
/// reaching a fragment.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders a row as a fixed-header table fragment: headers are always
/// A, B, C while the body carries one cell per input value, in order. No
/// arity check; a short or long row produces a correspondingly ragged table.
pub fn to_html_string(values: &[String]) -> String {
    let cells: String = values
        .iter()
        .map(|value| format!("<td>{}</td>", escape_html(value)))
        .collect();
    format!(
        "<table>\
         <thead><tr><th>A</th><th>B</th><th>C</th></tr></thead>\
         <tbody><tr>{}</tr></tbody>\
         </table>",
        cells
    )
}

fn with_table(message: &str, row: &Row) -> String {
    format!("<p>{}</p>{}", message, to_html_string(row))
}

/// Maps a handler outcome to the HTML fragment the client receives. Success
/// and domain errors are both plain fragments; only the message wording
/// tells them apart.
pub fn render_outcome(outcome: &CrudOutcome) -> String {
    match outcome {
        CrudOutcome::EmptyKey => "<p>A may not be empty.</p>".to_string(),
        CrudOutcome::DuplicateKey => "<p>A must be unique.</p>".to_string(),
        CrudOutcome::NotFound => "<p>The data were not found in the sheet.</p>".to_string(),
        CrudOutcome::Inserted(row) => with_table("The data were inserted into the sheet:", row),
        CrudOutcome::Selected(row) => with_table("The data were selected from the sheet:", row),
        CrudOutcome::Updated(row) => with_table("The data were updated:", row),
        CrudOutcome::Deleted(row) => with_table("The data were deleted from the sheet:", row),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(a: &str, b: &str, c: &str) -> Row {
        vec![a.to_string(), b.to_string(), c.to_string()]
    }

    #[test]
    fn renders_fixed_header_and_ordered_cells() {
        let html = to_html_string(&row("x", "1", "2"));
        assert!(html.contains("<th>A</th><th>B</th><th>C</th>"));
        assert!(html.contains("<td>x</td><td>1</td><td>2</td>"));
    }

    #[test]
    fn header_stays_fixed_for_odd_arity() {
        let html = to_html_string(&["only".to_string()]);
        assert!(html.contains("<th>A</th><th>B</th><th>C</th>"));
        assert!(html.contains("<tr><td>only</td></tr>"));
    }

    #[test]
    fn escapes_markup_in_values() {
        let html = to_html_string(&row("<script>", "a&b", "\"q\""));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.contains("<td>a&amp;b</td>"));
        assert!(html.contains("<td>&quot;q&quot;</td>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn outcome_messages_match_the_sheet_wording() {
        assert_eq!(
            render_outcome(&CrudOutcome::EmptyKey),
            "<p>A may not be empty.</p>"
        );
        assert_eq!(
            render_outcome(&CrudOutcome::DuplicateKey),
            "<p>A must be unique.</p>"
        );
        assert_eq!(
            render_outcome(&CrudOutcome::NotFound),
            "<p>The data were not found in the sheet.</p>"
        );

        let inserted = render_outcome(&CrudOutcome::Inserted(row("x", "1", "2")));
        assert!(inserted.starts_with("<p>The data were inserted into the sheet:</p>"));
        assert!(inserted.contains("<td>x</td><td>1</td><td>2</td>"));
    }
}
