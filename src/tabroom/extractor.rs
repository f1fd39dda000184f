use crate::{tabroom::Partnership, utils, EntriesError};
use itertools::Itertools;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

pub const ENTRIES_TABLE_ID: &str = "fieldsort";
pub const NAMES_TBA: &str = "Names TBA";

const E: &str = "Invalid selector";
lazy_static! {
    static ref ENTRIES_TABLE: Selector = Selector::parse(r#"[id="fieldsort"]"#).expect(E);
    static ref TR: Selector = Selector::parse("tr").expect(E);
    static ref TD: Selector = Selector::parse("td").expect(E);
}

/// Locates the entries table of a Tabroom fields page.
pub fn find_entries_table(doc: &Html) -> Result<ElementRef<'_>, EntriesError> {
    doc.select(&ENTRIES_TABLE)
        .next()
        .ok_or_else(|| EntriesError::TableNotFound {
            id: ENTRIES_TABLE_ID.to_string(),
        })
}

/// Trimmed text of every `td` in the row, in document order.
pub fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    row.select(&TD).map(utils::element_text).collect_vec()
}

/// Lazily walks the rows of `table`, yielding one item per row that carries a
/// partnership. Calling it again on the same table walks it again from the top.
pub fn extract_entries<'a>(
    table: ElementRef<'a>,
) -> impl Iterator<Item = Result<Partnership, EntriesError>> + 'a {
    table
        .select(&TR)
        .filter_map(|row| parse_row(cell_texts(row)))
}

/// Collects every entry of the table. The first malformed row fails the whole batch.
pub fn collect_entries(table: ElementRef<'_>) -> Result<Vec<Partnership>, EntriesError> {
    extract_entries(table).collect()
}

pub fn entries_from_markup(markup: &str) -> Result<Vec<Partnership>, EntriesError> {
    let doc = Html::parse_document(markup);
    let table = find_entries_table(&doc)?;
    collect_entries(table)
}

// Columns: school, seed (unused), names.
pub(crate) fn parse_row(cells: Vec<String>) -> Option<Result<Partnership, EntriesError>> {
    if cells.len() < 3 {
        debug!("Skip row with {} cells", cells.len());
        return None;
    }

    let mut cells = cells.into_iter();
    let school = cells.next()?;
    let names = cells.nth(1)?;

    if names == NAMES_TBA {
        debug!("Skip unfinalized entry of {}", school);
        return None;
    }

    let names = names
        .replace('&', "")
        .split_whitespace()
        .map(ToString::to_string)
        .collect_vec();

    Some(Partnership::new(school, names))
}
