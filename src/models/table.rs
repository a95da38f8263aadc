//! Client-side table state: filtering, sorting and pagination over rows
//! that describe themselves through [`TableRow`].

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Page sizes offered by every table.
pub const PAGE_SIZES: [usize; 7] = [5, 10, 20, 30, 40, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A single column: `key` is the wire/CSV name, `label` is the on-screen header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// A typed cell value. Numbers sort numerically and are written bare to CSV,
/// text sorts lexicographically and is quoted. Blank cells sort first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(i64),
    Empty,
}

impl From<Option<i64>> for Cell {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Cell::Empty, Cell::Number)
    }
}

impl Cell {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cell::Number(a), Cell::Number(b)) => a.cmp(b),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            (Cell::Empty, Cell::Empty) => Ordering::Equal,
            (Cell::Empty, _) | (Cell::Number(_), Cell::Text(_)) => Ordering::Less,
            (_, Cell::Empty) | (Cell::Text(_), Cell::Number(_)) => Ordering::Greater,
        }
    }

    /// Case-insensitive substring match. `needle` must already be lowercase.
    fn contains(&self, needle: &str) -> bool {
        match self {
            Cell::Text(text) => text.to_lowercase().contains(needle),
            Cell::Number(n) => n.to_string().contains(needle),
            Cell::Empty => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Empty => Ok(()),
        }
    }
}

/// Rows that can be shown in a `DataTable` and exported as CSV.
pub trait TableRow {
    const COLUMNS: &'static [Column];

    /// One cell per entry of `COLUMNS`, in the same order.
    fn cells(&self) -> Vec<Cell>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: usize,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    global_filter: String,
    column_filters: BTreeMap<usize, String>,
    sort: Option<Sort>,
    page_index: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            global_filter: String::new(),
            column_filters: BTreeMap::new(),
            sort: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableState {
    pub fn column_filter(&self, column: usize) -> &str {
        self.column_filters.get(&column).map_or("", String::as_str)
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    pub fn sort_direction(&self, column: usize) -> Option<SortDirection> {
        self.sort
            .filter(|sort| sort.column == column)
            .map(|sort| sort.direction)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_global_filter(&mut self, value: impl Into<String>) {
        self.global_filter = value.into();
        self.page_index = 0;
    }

    /// Sets the filter for one column; an empty value clears it.
    pub fn set_column_filter(&mut self, column: usize, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.column_filters.remove(&column);
        } else {
            self.column_filters.insert(column, value);
        }
        self.page_index = 0;
    }

    /// Cycles the sort on `column`: ascending, descending, unsorted.
    /// Sorting a different column starts again at ascending.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some(Sort {
                column: current,
                direction: SortDirection::Ascending,
            }) if current == column => Some(Sort {
                column,
                direction: SortDirection::Descending,
            }),
            Some(Sort {
                column: current,
                direction: SortDirection::Descending,
            }) if current == column => None,
            _ => Some(Sort {
                column,
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Changes the page size. Sizes outside [`PAGE_SIZES`] are ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZES.contains(&size) {
            self.page_size = size;
            self.page_index = 0;
        }
    }

    pub fn go_to_page(&mut self, index: usize, page_count: usize) {
        self.page_index = index.min(page_count.saturating_sub(1));
    }

    /// Filters, sorts and slices `rows` into the current page.
    pub fn apply<'a, R: TableRow>(&self, rows: &'a [R]) -> TableView<'a, R> {
        let global = self.global_filter.trim().to_lowercase();
        let column_filters: Vec<(usize, String)> = self
            .column_filters
            .iter()
            .map(|(column, value)| (*column, value.trim().to_lowercase()))
            .filter(|(_, value)| !value.is_empty())
            .collect();

        let mut matching: Vec<(&R, Vec<Cell>)> = rows
            .iter()
            .map(|row| (row, row.cells()))
            .filter(|(_, cells)| {
                (global.is_empty() || cells.iter().any(|cell| cell.contains(&global)))
                    && column_filters.iter().all(|(column, needle)| {
                        cells.get(*column).is_some_and(|cell| cell.contains(needle))
                    })
            })
            .collect();

        if let Some(sort) = self.sort {
            matching.sort_by(|(_, a), (_, b)| {
                let ordering = match (a.get(sort.column), b.get(sort.column)) {
                    (Some(a), Some(b)) => a.compare(b),
                    _ => Ordering::Equal,
                };
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let filtered_count = matching.len();
        let page_count = filtered_count.div_ceil(self.page_size).max(1);
        let page_index = self.page_index.min(page_count - 1);

        let page_rows = matching
            .into_iter()
            .skip(page_index * self.page_size)
            .take(self.page_size)
            .map(|(row, _)| row)
            .collect();

        TableView {
            rows: page_rows,
            total_count: rows.len(),
            filtered_count,
            page_count,
            page_index,
        }
    }
}

/// The visible page produced by [`TableState::apply`].
#[derive(Debug)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub page_count: usize,
    pub page_index: usize,
}

impl<R> TableView<'_, R> {
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }
}
