//! Whole-output renderings pinned through the public API.

use ascii_data::{
    Alignment, AsciiBorder, Graph, InvalidInputError, Table, plot_series, render_table,
};

fn people() -> (Vec<&'static str>, Vec<[&'static str; 3]>) {
    (
        vec!["ID", "Name", "Email"],
        vec![
            ["123", "Alfred Alan", "aalan@gmail.com"],
            ["223", "Alison Smart", "asmart@gmail.com"],
            ["256", "Ben Bessel", "benb@outlook.com"],
            ["374", "John Roberts", "johnrob@company.com"],
        ],
    )
}

fn people_with_missing_name() -> Vec<Vec<Option<String>>> {
    let (_, rows) = people();
    rows.iter()
        .enumerate()
        .map(|(i, r)| {
            r.iter()
                .enumerate()
                .map(|(c, v)| (!(i == 1 && c == 1)).then(|| (*v).to_owned()))
                .collect()
        })
        .collect()
}

// --- tables ---

#[test]
fn simple_table() {
    let (headers, rows) = people();
    let t = Table::from_rows(headers, rows).unwrap();
    assert_eq!(
        t.render(),
        concat!(
            "╔═════╤══════════════╤═════════════════════╗\n",
            "║ ID  │ Name         │ Email               ║\n",
            "╠═════╪══════════════╪═════════════════════╣\n",
            "║ 123 │ Alfred Alan  │ aalan@gmail.com     ║\n",
            "╟─────┼──────────────┼─────────────────────╢\n",
            "║ 223 │ Alison Smart │ asmart@gmail.com    ║\n",
            "╟─────┼──────────────┼─────────────────────╢\n",
            "║ 256 │ Ben Bessel   │ benb@outlook.com    ║\n",
            "╟─────┼──────────────┼─────────────────────╢\n",
            "║ 374 │ John Roberts │ johnrob@company.com ║\n",
            "╚═════╧══════════════╧═════════════════════╝\n",
        )
    );
    let t = t.with_border_style(AsciiBorder);
    assert_eq!(
        t.render(),
        concat!(
            "+=====+==============+=====================+\n",
            "| ID  | Name         | Email               |\n",
            "|=====|==============|=====================|\n",
            "| 123 | Alfred Alan  | aalan@gmail.com     |\n",
            "|-----|--------------|---------------------|\n",
            "| 223 | Alison Smart | asmart@gmail.com    |\n",
            "|-----|--------------|---------------------|\n",
            "| 256 | Ben Bessel   | benb@outlook.com    |\n",
            "|-----|--------------|---------------------|\n",
            "| 374 | John Roberts | johnrob@company.com |\n",
            "+=====+==============+=====================+\n",
        )
    );
}

#[test]
fn empty_table() {
    let (headers, _) = people();
    let t = Table::from_headers(headers.clone()).unwrap();
    assert_eq!(
        t.render(),
        concat!(
            "╔════╤══════╤═══════╗\n",
            "║ ID │ Name │ Email ║\n",
            "╠════╧══════╧═══════╣\n",
            "║      (empty)      ║\n",
            "╚═══════════════════╝\n",
        )
    );
    let t = Table::from_data(headers, Vec::new())
        .unwrap()
        .with_border_style(AsciiBorder);
    assert_eq!(
        t.render(),
        concat!(
            "+====+======+=======+\n",
            "| ID | Name | Email |\n",
            "|===================|\n",
            "|      (empty)      |\n",
            "+===================+\n",
        )
    );
}

#[test]
fn multi_line_cells() {
    let (headers, rows) = people();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|[id, name, email]| {
            vec![(*id).to_owned(), name.replace(' ', "\n"), (*email).to_owned()]
        })
        .collect();
    let t = Table::from_rows(headers, rows).unwrap();
    assert_eq!(
        t.render(),
        concat!(
            "╔═════╤═════════╤═════════════════════╗\n",
            "║ ID  │ Name    │ Email               ║\n",
            "╠═════╪═════════╪═════════════════════╣\n",
            "║ 123 │ Alfred  │ aalan@gmail.com     ║\n",
            "║     │ Alan    │                     ║\n",
            "╟─────┼─────────┼─────────────────────╢\n",
            "║ 223 │ Alison  │ asmart@gmail.com    ║\n",
            "║     │ Smart   │                     ║\n",
            "╟─────┼─────────┼─────────────────────╢\n",
            "║ 256 │ Ben     │ benb@outlook.com    ║\n",
            "║     │ Bessel  │                     ║\n",
            "╟─────┼─────────┼─────────────────────╢\n",
            "║ 374 │ John    │ johnrob@company.com ║\n",
            "║     │ Roberts │                     ║\n",
            "╚═════╧═════════╧═════════════════════╝\n",
        )
    );
    let t = t.with_border_style(AsciiBorder);
    assert_eq!(
        t.render(),
        concat!(
            "+=====+=========+=====================+\n",
            "| ID  | Name    | Email               |\n",
            "|=====|=========|=====================|\n",
            "| 123 | Alfred  | aalan@gmail.com     |\n",
            "|     | Alan    |                     |\n",
            "|-----|---------|---------------------|\n",
            "| 223 | Alison  | asmart@gmail.com    |\n",
            "|     | Smart   |                     |\n",
            "|-----|---------|---------------------|\n",
            "| 256 | Ben     | benb@outlook.com    |\n",
            "|     | Bessel  |                     |\n",
            "|-----|---------|---------------------|\n",
            "| 374 | John    | johnrob@company.com |\n",
            "|     | Roberts |                     |\n",
            "+=====+=========+=====================+\n",
        )
    );
}

#[test]
fn nested_tables() {
    let (headers, rows) = people();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|[id, name, email]| {
            let parts: Vec<&str> = name.split(' ').collect();
            let inner = render_table(["First", "Last"], [parts]).unwrap();
            vec![(*id).to_owned(), inner, (*email).to_owned()]
        })
        .collect();
    let t = Table::from_rows(headers, rows).unwrap();
    assert_eq!(
        t.render(),
        concat!(
            "╔═════╤═════════════════════╤═════════════════════╗\n",
            "║ ID  │ Name                │ Email               ║\n",
            "╠═════╪═════════════════════╪═════════════════════╣\n",
            "║ 123 │ ╔════════╤══════╗   │ aalan@gmail.com     ║\n",
            "║     │ ║ First  │ Last ║   │                     ║\n",
            "║     │ ╠════════╪══════╣   │                     ║\n",
            "║     │ ║ Alfred │ Alan ║   │                     ║\n",
            "║     │ ╚════════╧══════╝   │                     ║\n",
            "╟─────┼─────────────────────┼─────────────────────╢\n",
            "║ 223 │ ╔════════╤═══════╗  │ asmart@gmail.com    ║\n",
            "║     │ ║ First  │ Last  ║  │                     ║\n",
            "║     │ ╠════════╪═══════╣  │                     ║\n",
            "║     │ ║ Alison │ Smart ║  │                     ║\n",
            "║     │ ╚════════╧═══════╝  │                     ║\n",
            "╟─────┼─────────────────────┼─────────────────────╢\n",
            "║ 256 │ ╔═══════╤════════╗  │ benb@outlook.com    ║\n",
            "║     │ ║ First │ Last   ║  │                     ║\n",
            "║     │ ╠═══════╪════════╣  │                     ║\n",
            "║     │ ║ Ben   │ Bessel ║  │                     ║\n",
            "║     │ ╚═══════╧════════╝  │                     ║\n",
            "╟─────┼─────────────────────┼─────────────────────╢\n",
            "║ 374 │ ╔═══════╤═════════╗ │ johnrob@company.com ║\n",
            "║     │ ║ First │ Last    ║ │                     ║\n",
            "║     │ ╠═══════╪═════════╣ │                     ║\n",
            "║     │ ║ John  │ Roberts ║ │                     ║\n",
            "║     │ ╚═══════╧═════════╝ │                     ║\n",
            "╚═════╧═════════════════════╧═════════════════════╝\n",
        )
    );
}

#[test]
fn null_cells_use_placeholder() {
    let (headers, _) = people();
    let t = Table::from_data(headers, people_with_missing_name()).unwrap();
    assert_eq!(
        t.render(),
        concat!(
            "╔═════╤══════════════╤═════════════════════╗\n",
            "║ ID  │ Name         │ Email               ║\n",
            "╠═════╪══════════════╪═════════════════════╣\n",
            "║ 123 │ Alfred Alan  │ aalan@gmail.com     ║\n",
            "╟─────┼──────────────┼─────────────────────╢\n",
            "║ 223 │              │ asmart@gmail.com    ║\n",
            "╟─────┼──────────────┼─────────────────────╢\n",
            "║ 256 │ Ben Bessel   │ benb@outlook.com    ║\n",
            "╟─────┼──────────────┼─────────────────────╢\n",
            "║ 374 │ John Roberts │ johnrob@company.com ║\n",
            "╚═════╧══════════════╧═════════════════════╝\n",
        )
    );
    let t = t.with_null_value("n/a").with_border_style(AsciiBorder);
    assert_eq!(
        t.render(),
        concat!(
            "+=====+==============+=====================+\n",
            "| ID  | Name         | Email               |\n",
            "|=====|==============|=====================|\n",
            "| 123 | Alfred Alan  | aalan@gmail.com     |\n",
            "|-----|--------------|---------------------|\n",
            "| 223 | n/a          | asmart@gmail.com    |\n",
            "|-----|--------------|---------------------|\n",
            "| 256 | Ben Bessel   | benb@outlook.com    |\n",
            "|-----|--------------|---------------------|\n",
            "| 374 | John Roberts | johnrob@company.com |\n",
            "+=====+==============+=====================+\n",
        )
    );
}

#[test]
fn right_aligned_columns_with_placeholder() {
    let rows = vec![
        vec![Some("bolt".to_owned()), Some("250".to_owned()), Some("0.05".to_owned())],
        vec![Some("washer\nM6".to_owned()), Some("1200".to_owned()), Some("0.01".to_owned())],
        vec![Some("nut".to_owned()), None, Some("0.04".to_owned())],
    ];
    let t = Table::from_data(["Item", "Qty", "Price"], rows)
        .unwrap()
        .with_null_value("?")
        .with_column_alignment(1, Alignment::Right)
        .with_column_alignment(2, Alignment::Right);
    assert_eq!(
        t.render(),
        concat!(
            "╔════════╤══════╤═══════╗\n",
            "║ Item   │ Qty  │ Price ║\n",
            "╠════════╪══════╪═══════╣\n",
            "║ bolt   │  250 │  0.05 ║\n",
            "╟────────┼──────┼───────╢\n",
            "║ washer │ 1200 │  0.01 ║\n",
            "║ M6     │      │       ║\n",
            "╟────────┼──────┼───────╢\n",
            "║ nut    │    ? │  0.04 ║\n",
            "╚════════╧══════╧═══════╝\n",
        )
    );
}

#[test]
fn rendered_cells_are_width_plus_padding() {
    let (headers, rows) = people();
    let t = Table::from_rows(headers, rows).unwrap().with_border_style(AsciiBorder);
    let widths = t.column_widths().to_vec();
    let out = t.render();
    for line in out.lines().filter(|l| !l.starts_with('+') && !l.contains('=') && !l.contains('-')) {
        let cells: Vec<&str> = line.trim_matches('|').split('|').collect();
        let lens: Vec<usize> = cells.iter().map(|c| c.chars().count()).collect();
        let expected: Vec<usize> = widths.iter().map(|w| w + 2).collect();
        assert_eq!(lens, expected, "{line}");
    }
}

#[test]
fn construction_errors() {
    assert_eq!(
        Table::from_headers(Vec::<&str>::new()).unwrap_err(),
        InvalidInputError::EmptyHeaders
    );
    let err = Table::from_rows(["a", "b"], [vec!["1", "2"], vec!["3"]]).unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::ColumnCountMismatch {
            row: 2,
            found: 1,
            expected: 2
        }
    );
    assert_eq!(err.to_string(), "row 2 has 1 columns, expected 2");
}

// --- graphs ---

#[test]
fn random_wave() {
    let series = [
        10.0, 16.0, 15.0, 14.0, 13.0, 7.0, 12.0, 16.0, 6.0, 8.0, 5.0, 18.0, 9.0, 13.0, 6.0, 16.0,
        4.0, 5.0, 2.0, 8.0, 6.0, 15.0, 19.0, 10.0, 1.0,
    ];
    assert_eq!(
        plot_series(series).unwrap(),
        concat!(
            "   19.00┤                     ╭╮  \n",
            "   18.00┤          ╭╮         ││  \n",
            "   17.00┤          ││         ││  \n",
            "   16.00┤╭╮    ╭╮  ││  ╭╮     ││  \n",
            "   15.00┤│╰╮   ││  ││  ││    ╭╯│  \n",
            "   14.00┤│ ╰╮  ││  ││  ││    │ │  \n",
            "   13.00┤│  ╰╮ ││  ││╭╮││    │ │  \n",
            "   12.00┤│   │╭╯│  ││││││    │ │  \n",
            "   11.00┤│   ││ │  ││││││    │ │  \n",
            "   10.00┼╯   ││ │  ││││││    │ ╰╮ \n",
            "    9.00┤    ││ │  │╰╯│││    │  │ \n",
            "    8.00┤    ││ │╭╮│  │││  ╭╮│  │ \n",
            "    7.00┤    ╰╯ ││││  │││  │││  │ \n",
            "    6.00┤       ╰╯││  ╰╯│  │╰╯  │ \n",
            "    5.00┤         ╰╯    │╭╮│    │ \n",
            "    4.00┤               ╰╯││    │ \n",
            "    3.00┤                 ││    │ \n",
            "    2.00┤                 ╰╯    │ \n",
            "    1.00┤                       ╰ \n",
        )
    );
}

#[test]
fn sine_wave_with_fixed_height() {
    let series: Vec<f64> = (0..40)
        .map(|i| 15.0 * (f64::from(i) * ((std::f64::consts::PI * 4.0) / 40.0)).sin())
        .collect();
    let g = Graph::from_series(series).unwrap().with_height(9);
    assert_eq!(
        g.plot(),
        concat!(
            "   15.00┤   ╭──╮                ╭──╮             \n",
            "   11.25┤  ╭╯  ╰╮              ╭╯  ╰╮            \n",
            "    7.50┤ ╭╯    ╰╮            ╭╯    ╰╮           \n",
            "    3.75┤╭╯      ╰╮          ╭╯      ╰╮          \n",
            "    0.00┼╯        ╰╮        ╭╯        ╰╮         \n",
            "   -3.75┤          ╰╮      ╭╯          ╰╮      ╭ \n",
            "   -7.50┤           ╰╮    ╭╯            ╰╮    ╭╯ \n",
            "  -11.25┤            ╰╮  ╭╯              ╰╮  ╭╯  \n",
            "  -15.00┤             ╰──╯                ╰──╯   \n",
        )
    );
}

#[test]
fn empty_series_is_rejected() {
    assert_eq!(
        plot_series(Vec::<f64>::new()).unwrap_err(),
        InvalidInputError::EmptySeries
    );
}
