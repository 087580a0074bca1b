//! Per-row damage tracking for windows
//!
//! Records which rows of a window hold content not yet flushed to the
//! terminal, with per-row column bounds so a refresh repaints only the
//! changed area.

use tracing::trace;

use crate::WindowError;

/// Inclusive column range `first..=last` of pending changes on one row
///
/// Spans are only built by [`Damage`], which guarantees
/// `first <= last < width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtySpan {
    first: u16,
    last: u16,
}

impl DirtySpan {
    fn new(first: u16, last: u16) -> Self {
        debug_assert!(first <= last);
        Self { first, last }
    }

    /// First dirty column
    pub fn first(&self) -> u16 {
        self.first
    }

    /// Last dirty column (inclusive)
    pub fn last(&self) -> u16 {
        self.last
    }

    /// Number of columns covered
    pub fn len(&self) -> u16 {
        self.last - self.first + 1
    }

    fn widen(&mut self, first: u16, last: u16) {
        self.first = self.first.min(first);
        self.last = self.last.max(last);
    }
}

/// Damage map for one window: each row is either clean or carries the
/// column span that needs repainting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Damage {
    /// One entry per window row; `None` means the row is clean
    rows: Vec<Option<DirtySpan>>,

    /// Window width, used to build full-row spans
    width: u16,
}

impl Damage {
    /// Create an all-clean damage map for a window of the given size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            rows: vec![None; height as usize],
            width,
        }
    }

    /// Window width this map was built for
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of tracked rows
    pub fn height(&self) -> u16 {
        self.rows.len() as u16
    }

    /// Mark every row fully dirty
    pub fn mark_all(&mut self) {
        trace!("marking all {} rows dirty", self.rows.len());

        let span = self.full_span();
        for row in &mut self.rows {
            *row = span;
        }
    }

    /// Mark `count` rows starting at `start` fully dirty
    ///
    /// The range must lie within the tracked rows; on failure nothing is
    /// changed. `count == 0` is an accepted no-op as long as
    /// `start <= height`.
    pub fn mark_rows(&mut self, start: u16, count: u16) -> Result<(), WindowError> {
        trace!("marking {} rows dirty from row {}", count, start);

        self.check_range(start, count)?;
        let span = self.full_span();
        for row in &mut self.rows[start as usize..start as usize + count as usize] {
            *row = span;
        }
        Ok(())
    }

    /// Mark every row clean, discarding all pending damage
    pub fn clear_all(&mut self) {
        trace!("clearing damage on all {} rows", self.rows.len());

        for row in &mut self.rows {
            *row = None;
        }
    }

    /// Set `count` rows starting at `start` fully dirty or clean
    ///
    /// Same range rule as [`mark_rows`](Self::mark_rows); on failure
    /// nothing is changed.
    pub fn set_rows(&mut self, start: u16, count: u16, dirty: bool) -> Result<(), WindowError> {
        trace!("setting {} rows from row {} to dirty={}", count, start, dirty);

        self.check_range(start, count)?;
        let span = if dirty { self.full_span() } else { None };
        for row in &mut self.rows[start as usize..start as usize + count as usize] {
            *row = span;
        }
        Ok(())
    }

    /// True if the row has pending damage; rows outside the window are
    /// reported clean
    pub fn is_row_dirty(&self, row: u16) -> bool {
        trace!("querying damage on row {}", row);

        self.rows
            .get(row as usize)
            .map(|span| span.is_some())
            .unwrap_or(false)
    }

    /// True if any row has pending damage
    pub fn is_dirty(&self) -> bool {
        trace!("querying damage on {} rows", self.rows.len());

        self.rows.iter().any(|span| span.is_some())
    }

    /// Column bounds of a row's pending damage, if any
    pub fn row_span(&self, row: u16) -> Option<DirtySpan> {
        self.rows.get(row as usize).copied().flatten()
    }

    /// Widen a row's damage to cover `first..=last`
    ///
    /// This is the entry point for cell writes, which record the exact
    /// columns they changed. Columns are clamped to the window width;
    /// rows outside the window and spans entirely past the right edge
    /// are ignored.
    pub fn mark_span(&mut self, row: u16, first: u16, last: u16) {
        if row as usize >= self.rows.len() || first >= self.width || first > last {
            return;
        }

        let last = last.min(self.width - 1);
        let slot = &mut self.rows[row as usize];
        match slot {
            Some(span) => span.widen(first, last),
            None => *slot = Some(DirtySpan::new(first, last)),
        }
    }

    /// Mark a single row clean, after its span has been repainted
    pub fn clear_row(&mut self, row: u16) {
        if let Some(slot) = self.rows.get_mut(row as usize) {
            *slot = None;
        }
    }

    /// Full-row span, or `None` when the window has no columns
    fn full_span(&self) -> Option<DirtySpan> {
        if self.width == 0 {
            None
        } else {
            Some(DirtySpan::new(0, self.width - 1))
        }
    }

    fn check_range(&self, start: u16, count: u16) -> Result<(), WindowError> {
        if start as u32 + count as u32 > self.rows.len() as u32 {
            return Err(WindowError::RowsOutOfRange {
                start,
                count,
                height: self.height(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_clean() {
        let damage = Damage::new(10, 5);
        assert!(!damage.is_dirty());
        for row in 0..5 {
            assert!(!damage.is_row_dirty(row));
        }
    }

    #[test]
    fn test_mark_all_covers_every_row_fully() {
        let mut damage = Damage::new(10, 5);
        damage.mark_all();

        assert!(damage.is_dirty());
        for row in 0..5 {
            let span = damage.row_span(row).unwrap();
            assert_eq!(span.first(), 0);
            assert_eq!(span.last(), 9);
        }
    }

    #[test]
    fn test_mark_rows_touches_only_the_range() {
        let mut damage = Damage::new(10, 5);
        damage.mark_rows(1, 2).unwrap();

        assert!(!damage.is_row_dirty(0));
        assert!(damage.is_row_dirty(1));
        assert!(damage.is_row_dirty(2));
        assert!(!damage.is_row_dirty(3));
        assert!(!damage.is_row_dirty(4));
    }

    #[test]
    fn test_mark_rows_overwrites_narrow_spans() {
        let mut damage = Damage::new(10, 5);
        damage.mark_span(2, 3, 4);
        damage.mark_rows(2, 1).unwrap();

        let span = damage.row_span(2).unwrap();
        assert_eq!((span.first(), span.last()), (0, 9));
    }

    #[test]
    fn test_range_at_height_with_zero_count_is_accepted() {
        let mut damage = Damage::new(10, 5);
        assert!(damage.mark_rows(5, 0).is_ok());
        assert!(!damage.is_dirty());
    }

    #[test]
    fn test_range_past_height_is_rejected() {
        let mut damage = Damage::new(10, 5);

        assert_eq!(
            damage.mark_rows(5, 1),
            Err(WindowError::RowsOutOfRange {
                start: 5,
                count: 1,
                height: 5
            })
        );
        assert_eq!(
            damage.mark_rows(6, 0),
            Err(WindowError::RowsOutOfRange {
                start: 6,
                count: 0,
                height: 5
            })
        );
        assert!(damage.set_rows(3, 3, true).is_err());
    }

    #[test]
    fn test_range_check_does_not_overflow() {
        let mut damage = Damage::new(10, 5);
        assert!(damage.mark_rows(u16::MAX, u16::MAX).is_err());
        assert!(!damage.is_dirty());
    }

    #[test]
    fn test_set_rows_clears_as_well_as_marks() {
        let mut damage = Damage::new(10, 5);
        damage.mark_all();
        damage.set_rows(1, 2, false).unwrap();

        assert!(damage.is_row_dirty(0));
        assert!(!damage.is_row_dirty(1));
        assert!(!damage.is_row_dirty(2));
        assert!(damage.is_row_dirty(3));
        assert!(damage.is_row_dirty(4));

        damage.clear_all();
        damage.set_rows(2, 2, true).unwrap();
        assert!(!damage.is_row_dirty(1));
        assert!(damage.is_row_dirty(2));
        assert!(damage.is_row_dirty(3));
        assert!(!damage.is_row_dirty(4));
        assert_eq!(damage.row_span(2).unwrap().len(), 10);
    }

    #[test]
    fn test_clear_all_leaves_no_damage() {
        let mut damage = Damage::new(10, 5);
        damage.mark_all();
        damage.clear_all();

        assert!(!damage.is_dirty());
        assert_eq!(damage.row_span(0), None);
    }

    #[test]
    fn test_clear_on_clean_map_is_a_no_op() {
        let mut damage = Damage::new(10, 5);
        let before = damage.clone();
        damage.clear_all();
        assert_eq!(damage, before);
    }

    #[test]
    fn test_queries_report_clean_outside_the_window() {
        let mut damage = Damage::new(10, 5);
        damage.mark_all();

        assert!(!damage.is_row_dirty(5));
        assert!(!damage.is_row_dirty(u16::MAX));
        assert_eq!(damage.row_span(5), None);
    }

    #[test]
    fn test_mark_span_installs_then_widens() {
        let mut damage = Damage::new(10, 5);

        damage.mark_span(1, 4, 6);
        let span = damage.row_span(1).unwrap();
        assert_eq!((span.first(), span.last()), (4, 6));

        damage.mark_span(1, 2, 5);
        let span = damage.row_span(1).unwrap();
        assert_eq!((span.first(), span.last()), (2, 6));

        damage.mark_span(1, 8, 8);
        let span = damage.row_span(1).unwrap();
        assert_eq!((span.first(), span.last()), (2, 8));
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn test_mark_span_clamps_to_width() {
        let mut damage = Damage::new(10, 5);

        damage.mark_span(0, 8, 20);
        let span = damage.row_span(0).unwrap();
        assert_eq!((span.first(), span.last()), (8, 9));

        // Entirely past the right edge: nothing to record.
        damage.mark_span(1, 10, 20);
        assert!(!damage.is_row_dirty(1));
    }

    #[test]
    fn test_mark_span_ignores_rows_outside_the_window() {
        let mut damage = Damage::new(10, 5);
        damage.mark_span(5, 0, 3);
        assert!(!damage.is_dirty());
    }

    #[test]
    fn test_clear_row_affects_one_row() {
        let mut damage = Damage::new(10, 5);
        damage.mark_all();
        damage.clear_row(2);

        assert!(damage.is_row_dirty(1));
        assert!(!damage.is_row_dirty(2));
        assert!(damage.is_row_dirty(3));
    }

    #[test]
    fn test_zero_width_rows_never_become_dirty() {
        let mut damage = Damage::new(0, 5);

        damage.mark_all();
        assert!(!damage.is_dirty());

        damage.mark_rows(0, 5).unwrap();
        assert!(!damage.is_dirty());

        damage.mark_span(0, 0, 0);
        assert!(!damage.is_row_dirty(0));
    }

    #[test]
    fn test_zero_height_map_accepts_only_empty_ranges() {
        let mut damage = Damage::new(10, 0);

        assert!(damage.mark_rows(0, 0).is_ok());
        assert!(damage.mark_rows(0, 1).is_err());
        assert!(!damage.is_dirty());
    }
}
