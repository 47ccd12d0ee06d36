use tracing::{info, warn};

use crate::{
    core::{
        bounds::{terminal_geometry, tick_label_width},
        config::GraphConfig,
        data::{read_series_from_path, read_table_from_path},
        error::AppError,
        format::TickFormat,
    },
    render::{Alignment, AsciiBorder, Graph, Table, Utf8Border},
};

use super::parse::{GraphArgs, StyleArg, TableArgs};

pub fn table(a: TableArgs) -> Result<(), AppError> {
    let data = read_table_from_path(&a.file, a.delimiter)?;
    info!(
        columns = data.headers.len(),
        rows = data.rows.len(),
        "loaded table"
    );

    let mut t = Table::from_data(data.headers, data.rows)?;
    t = match a.style {
        StyleArg::Utf8 => t.with_border_style(Utf8Border),
        StyleArg::Ascii => t.with_border_style(AsciiBorder),
    };
    if let Some(v) = a.null_value {
        t = t.with_null_value(v);
    }
    for col in a.right {
        t = t.with_column_alignment(col, Alignment::Right);
    }

    print!("{}", t.render());
    Ok(())
}

pub fn graph(a: &GraphArgs) -> Result<(), AppError> {
    let series = read_series_from_path(&a.file)?;
    info!(samples = series.len(), "loaded series");

    let g = Graph::from_series(series)?;
    let format = TickFormat::new(&a.tick_format);
    let (term_w, term_h) = terminal_geometry();

    let tick_width = a
        .tick_width
        .unwrap_or_else(|| tick_label_width(g.bounds(), &format));
    let height = match (a.height, a.fit) {
        (Some(h), _) => h,
        (None, true) => usize::from(term_h.0).saturating_sub(1).max(1),
        (None, false) => 0,
    };

    let cfg = GraphConfig::default()
        .height(height)
        .tick_width(tick_width)
        .tick_format(format)
        .offset(a.offset);
    let g = g.with_config(cfg);

    let plot = g.plot();
    let width = plot.lines().next().map_or(0, |l| l.chars().count());
    if width > usize::from(term_w.0) {
        warn!(
            width,
            terminal = term_w.0,
            "plot is wider than the terminal"
        );
    }
    print!("{plot}");
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "ascii-data";
    println!(
        "
Example invocations
-------------------
• Table from CSV      : {bin} table people.csv
• ASCII borders       : {bin} table people.csv --style ascii
• Tab separated       : {bin} table people.tsv --delimiter $'\\t'
• Placeholder + align : {bin} table stock.csv --null-value n/a --right 2
• Graph from stdin    : seq 0 10 | {bin} graph
• Fixed height        : {bin} graph samples.txt --height 10
• Custom ticks        : {bin} graph samples.txt --tick-format '#,##0.0' --tick-width 10
• Fill the terminal   : {bin} graph samples.txt --fit
"
    );
}
