//! Table view engine: search, single-key sort and page slicing
//!
//! Rows expose their cells through [`TableRow`]. A query first filters rows
//! whose cells contain the search term (case-insensitive), then sorts them
//! stably by one column, then cuts out the requested page.

use crate::contract::{SortDirection, Staff, StaffColumn, TablePage, TableQuery};
use chrono::NaiveDate;
use std::borrow::Cow;

/// A single comparable cell value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cell<'a> {
    /// Absent optional value; orders before any present value
    Empty,
    Text(Cow<'a, str>),
    Date(NaiveDate),
}

impl Cell<'_> {
    /// Text form used for search matching
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Cell::Empty => Cow::Borrowed(""),
            Cell::Text(s) => Cow::Borrowed(s.as_ref()),
            Cell::Date(d) => Cow::Owned(d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// A row that can be searched and sorted
pub trait TableRow {
    type Column: Copy;

    fn cell(&self, column: Self::Column) -> Cell<'_>;

    /// Every value the search term is matched against
    fn searchable(&self) -> Vec<Cell<'_>>;
}

impl TableRow for Staff {
    type Column = StaffColumn;

    fn cell(&self, column: StaffColumn) -> Cell<'_> {
        match column {
            StaffColumn::EmployeeId => Cell::Text(Cow::Borrowed(&self.employee_id)),
            StaffColumn::FirstName => Cell::Text(Cow::Borrowed(&self.first_name)),
            StaffColumn::LastName => Cell::Text(Cow::Borrowed(&self.last_name)),
            StaffColumn::Email => Cell::Text(Cow::Borrowed(&self.email)),
            StaffColumn::PhoneNumber => match &self.phone_number {
                Some(p) => Cell::Text(Cow::Borrowed(p)),
                None => Cell::Empty,
            },
            StaffColumn::Department => Cell::Text(Cow::Borrowed(&self.department)),
            StaffColumn::Position => Cell::Text(Cow::Borrowed(&self.position)),
            StaffColumn::JoiningDate => Cell::Date(self.joining_date),
            StaffColumn::Status => Cell::Text(Cow::Borrowed(self.status.as_str())),
        }
    }

    fn searchable(&self) -> Vec<Cell<'_>> {
        let mut cells = Vec::with_capacity(StaffColumn::ALL.len() + 1);
        cells.push(Cell::Text(Cow::Owned(self.id.to_string())));
        cells.extend(StaffColumn::ALL.iter().map(|column| self.cell(*column)));
        cells
    }
}

/// Whether any searchable cell contains `needle` (already lower-cased)
fn matches<T: TableRow>(row: &T, needle: &str) -> bool {
    needle.is_empty()
        || row
            .searchable()
            .iter()
            .any(|cell| cell.render().to_lowercase().contains(needle))
}

/// Run a query over rows in store order
pub fn apply<T>(rows: Vec<T>, query: &TableQuery<T::Column>) -> TablePage<T>
where
    T: TableRow,
{
    let needle = query.search.to_lowercase();
    let mut filtered: Vec<T> = rows.into_iter().filter(|row| matches(row, &needle)).collect();

    if let Some(sort) = query.sort {
        // Vec::sort_by is stable: equal keys keep store order.
        filtered.sort_by(|a, b| {
            let ordering = a.cell(sort.key).cmp(&b.cell(sort.key));
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    paginate(filtered, query.page, query.rows_per_page)
}

/// Slice one page out of already filtered and sorted rows.
///
/// `page` is 1-based and `rows_per_page` must be non-zero.
pub fn paginate<T>(rows: Vec<T>, page: u32, rows_per_page: u32) -> TablePage<T> {
    let total = rows.len();
    let per_page = rows_per_page.max(1) as usize;
    let page_index = page.max(1) as usize - 1;

    let total_pages = total.div_ceil(per_page) as u32;
    let start = page_index.saturating_mul(per_page).min(total);
    let end = (page_index + 1).saturating_mul(per_page).min(total);

    let showing_from = (start + 1).min(total);

    let rows: Vec<T> = rows.into_iter().skip(start).take(end - start).collect();

    TablePage {
        rows,
        page,
        rows_per_page,
        total_pages,
        total_entries: total,
        showing_from,
        showing_to: end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{SortConfig, StaffStatus};
    use chrono::Utc;
    use uuid::Uuid;

    fn staff(employee_id: &str, first: &str, dept: &str, joined: (i32, u32, u32)) -> Staff {
        Staff {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            first_name: first.to_string(),
            last_name: "Smith".to_string(),
            email: format!("{}@example.org", first.to_lowercase()),
            phone_number: None,
            department: dept.to_string(),
            position: "Officer".to_string(),
            joining_date: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2).unwrap(),
            status: StaffStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn directory() -> Vec<Staff> {
        vec![
            staff("E3", "Carol", "Housing", (2021, 5, 1)),
            staff("E1", "alice", "Repairs", (2019, 2, 14)),
            staff("E2", "Bob", "Housing", (2023, 11, 30)),
        ]
    }

    fn ids(page: &TablePage<Staff>) -> Vec<&str> {
        page.rows.iter().map(|s| s.employee_id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let query = TableQuery {
            search: "HOUSING".to_string(),
            ..Default::default()
        };
        let page = apply(directory(), &query);
        assert_eq!(ids(&page), vec!["E3", "E2"]);
        assert_eq!(page.total_entries, 2);

        let query = TableQuery {
            search: "2019-02".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&apply(directory(), &query)), vec!["E1"]);
    }

    #[test]
    fn test_search_term_is_matched_verbatim() {
        // "Bob Smith" is not a cell, and the trailing space has to match too.
        let query = TableQuery {
            search: "bob ".to_string(),
            ..Default::default()
        };
        assert!(apply(directory(), &query).rows.is_empty());

        let query = TableQuery {
            search: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(directory(), &query).total_entries, 0);
    }

    #[test]
    fn test_empty_search_keeps_store_order() {
        let page = apply(directory(), &TableQuery::default());
        assert_eq!(ids(&page), vec!["E3", "E1", "E2"]);
    }

    #[test]
    fn test_sort_by_text_and_date() {
        let mut query = TableQuery {
            sort: Some(SortConfig {
                key: StaffColumn::EmployeeId,
                direction: SortDirection::Asc,
            }),
            ..Default::default()
        };
        assert_eq!(ids(&apply(directory(), &query)), vec!["E1", "E2", "E3"]);

        query.sort = Some(SortConfig {
            key: StaffColumn::JoiningDate,
            direction: SortDirection::Desc,
        });
        assert_eq!(ids(&apply(directory(), &query)), vec!["E2", "E3", "E1"]);
    }

    #[test]
    fn test_sort_is_plain_lexicographic() {
        // Lower-case sorts after upper-case, as a plain string compare does.
        let query = TableQuery {
            sort: Some(SortConfig {
                key: StaffColumn::FirstName,
                direction: SortDirection::Asc,
            }),
            ..Default::default()
        };
        assert_eq!(ids(&apply(directory(), &query)), vec!["E2", "E3", "E1"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let query = TableQuery {
            sort: Some(SortConfig {
                key: StaffColumn::Department,
                direction: SortDirection::Asc,
            }),
            ..Default::default()
        };
        assert_eq!(ids(&apply(directory(), &query)), vec!["E3", "E2", "E1"]);
    }

    #[test]
    fn test_sort_toggle() {
        let first = SortConfig::toggle(None, StaffColumn::Email);
        assert_eq!(first.direction, SortDirection::Asc);

        let second = SortConfig::toggle(Some(first), StaffColumn::Email);
        assert_eq!(second.direction, SortDirection::Desc);

        let third = SortConfig::toggle(Some(second), StaffColumn::Email);
        assert_eq!(third.direction, SortDirection::Asc);

        let other = SortConfig::toggle(Some(second), StaffColumn::Status);
        assert_eq!(other.key, StaffColumn::Status);
        assert_eq!(other.direction, SortDirection::Asc);
    }

    #[test]
    fn test_pagination_counters() {
        let rows: Vec<u32> = (1..=12).collect();

        let page = paginate(rows.clone(), 1, 5);
        assert_eq!(page.rows, vec![1, 2, 3, 4, 5]);
        assert_eq!(page.total_pages, 3);
        assert_eq!((page.showing_from, page.showing_to), (1, 5));

        let page = paginate(rows.clone(), 3, 5);
        assert_eq!(page.rows, vec![11, 12]);
        assert_eq!((page.showing_from, page.showing_to), (11, 12));

        let page = paginate(rows, 4, 5);
        assert!(page.rows.is_empty());
        assert_eq!((page.showing_from, page.showing_to), (12, 12));
        assert_eq!(page.total_entries, 12);
    }

    #[test]
    fn test_pagination_of_empty_table() {
        let page = paginate(Vec::<u32>::new(), 1, 10);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!((page.showing_from, page.showing_to), (0, 0));
    }
}
