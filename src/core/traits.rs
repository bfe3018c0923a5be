//! Cursor abstraction consumed by the converter
//!
//! A database driver adapts its query result type to [`RowCursor`]; the converter
//! never executes queries itself.

use crate::types::Value;

/// Forward-only, single-pass sequence of rows from a tabular data source
///
/// The calling protocol mirrors a typical driver result set:
/// call [`columns`](RowCursor::columns) once, then loop on
/// [`advance`](RowCursor::advance), calling [`scan`](RowCursor::scan) for each row,
/// and finally check [`err`](RowCursor::err) to learn whether the loop ended
/// because the rows ran out or because something failed.
pub trait RowCursor {
    /// Error reported by the underlying source
    type Error: std::error::Error;

    /// Column names in result order
    fn columns(&self) -> Result<Vec<String>, Self::Error>;

    /// Move to the next row, returning false once exhausted or failed
    fn advance(&mut self) -> bool;

    /// Copy the current row's values into `out`, one slot per column
    fn scan(&mut self, out: &mut [Value]) -> Result<(), Self::Error>;

    /// Terminal error, if advancing stopped because of a failure
    fn err(&self) -> Option<&Self::Error>;
}

impl<C: RowCursor + ?Sized> RowCursor for &mut C {
    type Error = C::Error;

    fn columns(&self) -> Result<Vec<String>, Self::Error> {
        (**self).columns()
    }

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn scan(&mut self, out: &mut [Value]) -> Result<(), Self::Error> {
        (**self).scan(out)
    }

    fn err(&self) -> Option<&Self::Error> {
        (**self).err()
    }
}

impl<C: RowCursor + ?Sized> RowCursor for Box<C> {
    type Error = C::Error;

    fn columns(&self) -> Result<Vec<String>, Self::Error> {
        (**self).columns()
    }

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn scan(&mut self, out: &mut [Value]) -> Result<(), Self::Error> {
        (**self).scan(out)
    }

    fn err(&self) -> Option<&Self::Error> {
        (**self).err()
    }
}
