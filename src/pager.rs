//! Fixed-size paging over raw trip records.

use crate::table::{Table, TripRecord};

/// Rows returned per page.
pub const PAGE_SIZE: usize = 5;

/// A cursor over a table, handing out successive windows of
/// [`PAGE_SIZE`] rows. One pager per table per run; the cursor is never
/// shared.
#[derive(Debug)]
pub struct RawRecordPager<'a> {
    table: &'a Table,
    cursor: usize,
}

impl<'a> RawRecordPager<'a> {
    pub fn new(table: &'a Table) -> Self {
        RawRecordPager { table, cursor: 0 }
    }

    /// The next window of up to [`PAGE_SIZE`] rows. An empty slice means
    /// the table is exhausted; that is a signal, not an error.
    pub fn next_page(&mut self) -> &'a [TripRecord] {
        let start = self.cursor.min(self.table.len());
        let end = (self.cursor + PAGE_SIZE).min(self.table.len());
        self.cursor += PAGE_SIZE;
        &self.table.rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_support::{record_on, table};

    fn seven_row_table() -> Table {
        table((1..=7).map(|d| record_on((2017, 1, d))).collect())
    }

    #[test]
    fn test_pages_of_five_then_remainder_then_empty() {
        let t = seven_row_table();
        let mut pager = RawRecordPager::new(&t);

        let first = pager.next_page();
        assert_eq!(first.len(), 5);
        assert_eq!(first[0].start_time, t.rows[0].start_time);

        let second = pager.next_page();
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].start_time, t.rows[5].start_time);

        assert!(pager.next_page().is_empty());
        // stays exhausted
        assert!(pager.next_page().is_empty());
    }

    #[test]
    fn test_empty_table_is_immediately_exhausted() {
        let t = table(vec![]);
        let mut pager = RawRecordPager::new(&t);
        assert!(pager.next_page().is_empty());
    }
}
