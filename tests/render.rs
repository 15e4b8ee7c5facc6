/*
 * Copyright (c) 2025. Mark Barrett
 * This file is part of Boxtab.
 * Boxtab is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
 * Boxtab is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 * You should have received a copy of the GNU Affero General Public License along with Boxtab. If not, see <https://www.gnu.org/licenses/>.
 */
use boxtab::error::BoxtabError;
use boxtab::table::{Alignment, CellRef, DisplayCell, Row, Table, render};
use indoc::indoc;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_mixed_cell_types_with_header() {
    init();

    let mut table = Table::default();
    table.set_labels(vec!["Unit", "Qty", "Price"]);
    table.push_row(Row::new([
        CellRef::from("GBP"),
        CellRef::from(DisplayCell(1200)),
        CellRef::from("1.00"),
    ]));
    table.push_row(Row::new([
        CellRef::from("EUR"),
        CellRef::from(DisplayCell(7)),
        CellRef::from("0.85"),
    ]));

    assert_eq!(
        table.render().unwrap(),
        indoc! {"
            ┌──────┬──────┬───────┐
            │ Unit │ Qty  │ Price │
            ├──────┼──────┼───────┤
            │ GBP  │ 1200 │ 1.00  │
            │ EUR  │ 7    │ 0.85  │
            └──────┴──────┴───────┘"}
    );
}

#[test]
fn test_centered_header_table() {
    init();

    let mut table = Table::default();
    table.set_alignment(Alignment::Center);
    table.set_labels(vec!["ab", "c"]);
    table.push_row(vec!["x", "y"]);

    assert_eq!(
        table.render().unwrap(),
        indoc! {"
            ┌────┬───┐
            │ ab │ c │
            ├────┼───┤
            │ x  │ y │
            └────┴───┘"}
    );
}

#[test]
fn test_render_in_one_call() {
    init();

    let table = render(
        vec![vec!["assets", "120"], vec!["liabilities", "-80"]],
        Some(vec!["Account", "Balance"]),
        false,
    )
    .unwrap();

    assert_eq!(
        table,
        indoc! {"
            ┌─────────────┬─────────┐
            │ Account     │ Balance │
            ├─────────────┼─────────┤
            │ assets      │ 120     │
            │ liabilities │ -80     │
            └─────────────┴─────────┘"}
    );
}

#[test]
fn test_shape_errors_are_reported() {
    init();

    let err = render(vec![vec!["a", "b"], vec!["c", "d", "e"]], None::<Vec<&str>>, false)
        .unwrap_err();
    assert_eq!(err, BoxtabError::RaggedRow { row: 1, expected: 2, found: 3 });
    assert_eq!(err.to_string(), "row 1 has 3 columns where 2 were expected");
}
