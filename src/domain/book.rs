// ============================================================================
// Order Book View
// Borrowed, contiguous view over price/volume levels
// ============================================================================

use crate::domain::errors::ImpactError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single quoted level on one side of the book.
///
/// The view is side-agnostic: the caller supplies levels already sorted by
/// execution priority (ascending price for a buy-side sweep against asks,
/// descending for a sell-side sweep against bids).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Level {
    pub price: f64,
    pub volume: f64,
}

impl Level {
    pub fn new(price: f64, volume: f64) -> Self {
        Self { price, volume }
    }

    /// Cash value quoted at this level.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.price * self.volume
    }
}

/// Immutable view over an order book snapshot.
///
/// Rows are stored contiguously in row-major order: column 0 is the price,
/// column 1 is the volume, both native-endian IEEE-754 doubles. The layout
/// matches what the vector engines load directly into SIMD registers, so
/// the view never copies.
///
/// Sorting by execution priority is the caller's responsibility; the
/// engines assume sorted input and never re-sort.
#[derive(Debug, Clone, Copy)]
pub struct BookView<'a> {
    rows: &'a [[f64; 2]],
}

impl<'a> BookView<'a> {
    /// Create a view over pre-shaped rows.
    pub fn new(rows: &'a [[f64; 2]]) -> Self {
        Self { rows }
    }

    /// Create a view over a flat `[p0, v0, p1, v1, ..]` slice.
    ///
    /// Fails with [`ImpactError::MalformedBook`] when the slice length is
    /// odd and cannot form (price, volume) rows.
    pub fn from_flat(flat: &'a [f64]) -> Result<Self, ImpactError> {
        let (rows, rest) = flat.as_chunks::<2>();
        if !rest.is_empty() {
            return Err(ImpactError::MalformedBook { len: flat.len() });
        }
        Ok(Self { rows })
    }

    /// Number of levels in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn level(&self, index: usize) -> Level {
        Level::new(self.rows[index][0], self.rows[index][1])
    }

    #[inline]
    pub fn price(&self, index: usize) -> f64 {
        self.rows[index][0]
    }

    #[inline]
    pub fn volume(&self, index: usize) -> f64 {
        self.rows[index][1]
    }

    /// Raw rows, in execution priority order.
    #[inline]
    pub fn rows(&self) -> &'a [[f64; 2]] {
        self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = Level> + 'a {
        self.rows.iter().map(|row| Level::new(row[0], row[1]))
    }

    /// Total cash value quoted across all levels.
    pub fn total_notional(&self) -> f64 {
        self.rows.iter().map(|row| row[0] * row[1]).sum()
    }

    /// Total volume quoted across all levels.
    pub fn total_volume(&self) -> f64 {
        self.rows.iter().map(|row| row[1]).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_over_rows() {
        let rows = [[100.0, 1.0], [101.0, 2.0], [102.0, 3.0]];
        let view = BookView::new(&rows);

        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
        assert_eq!(view.price(1), 101.0);
        assert_eq!(view.volume(2), 3.0);
        assert_eq!(view.level(0), Level::new(100.0, 1.0));
    }

    #[test]
    fn test_view_from_flat() {
        let flat = [100.0, 1.0, 101.0, 2.0];
        let view = BookView::from_flat(&flat).unwrap();

        assert_eq!(view.len(), 2);
        assert_eq!(view.price(0), 100.0);
        assert_eq!(view.volume(1), 2.0);
    }

    #[test]
    fn test_from_flat_rejects_odd_length() {
        let flat = [100.0, 1.0, 101.0];
        let err = BookView::from_flat(&flat).unwrap_err();
        assert!(matches!(err, ImpactError::MalformedBook { len: 3 }));
    }

    #[test]
    fn test_empty_view() {
        let view = BookView::new(&[]);
        assert!(view.is_empty());
        assert_eq!(view.total_notional(), 0.0);
        assert_eq!(view.total_volume(), 0.0);
    }

    #[test]
    fn test_totals() {
        let rows = [[10.0, 5.0], [11.0, 5.0]];
        let view = BookView::new(&rows);

        assert_eq!(view.total_notional(), 105.0);
        assert_eq!(view.total_volume(), 10.0);
    }

    #[test]
    fn test_level_notional() {
        let level = Level::new(10.0, 5.0);
        assert_eq!(level.notional(), 50.0);
    }

    #[test]
    fn test_iter_preserves_order() {
        let rows = [[10.0, 1.0], [11.0, 2.0]];
        let view = BookView::new(&rows);
        let prices: Vec<f64> = view.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![10.0, 11.0]);
    }
}
