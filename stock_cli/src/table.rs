//! Table rendering for terminal output

use tabled::{builder::Builder, settings::Style};

use stock_core::export::ResultTable;

/// Render headers and rows as a rounded-border table
pub fn render<H, R>(headers: H, rows: impl IntoIterator<Item = R>) -> String
where
    H: IntoIterator,
    H::Item: Into<String>,
    R: IntoIterator,
    R::Item: Into<String>,
{
    let mut builder = Builder::default();
    builder.push_record(headers.into_iter().map(Into::<String>::into));
    for row in rows {
        builder.push_record(row.into_iter().map(Into::<String>::into));
    }
    builder.build().with(Style::rounded()).to_string()
}

pub fn render_result_table(table: &ResultTable) -> String {
    render(table.headers.iter().cloned(), table.rows.iter().map(|r| r.iter().cloned()))
}
