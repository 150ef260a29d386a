//! Session-scoped state: the unified case table.

use polars::prelude::DataFrame;

/// The in-memory unified table for one reporting session.
///
/// Built once per load event and read by every subsequent filter
/// computation. A new load replaces the frame wholesale; it is never
/// partially mutated.
#[derive(Debug, Clone)]
pub struct Session {
    data: DataFrame,
}

impl Session {
    /// Wrap a freshly loaded unified frame.
    pub fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// The unified case table.
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Replace the unified table with the result of a new load event.
    pub fn replace(&mut self, data: DataFrame) {
        self.data = data;
    }

    /// Number of case records currently loaded.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::{NamedFrom, Series};

    use super::*;

    #[test]
    fn replace_swaps_the_whole_table() {
        let first = DataFrame::new(vec![Series::new("a".into(), vec![1i64]).into()]).unwrap();
        let second =
            DataFrame::new(vec![Series::new("a".into(), vec![1i64, 2, 3]).into()]).unwrap();
        let mut session = Session::new(first);
        assert_eq!(session.record_count(), 1);
        session.replace(second);
        assert_eq!(session.record_count(), 3);
    }
}
