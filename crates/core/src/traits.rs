use common::DatasetEntry;

/// How a builder grows its output sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Reserve the final length up front.
    Presized,
    /// Push onto an empty `Vec` and let it reallocate as it grows, so the
    /// element copies made by each reallocation are part of the build cost.
    Grow,
}

/// A record family that can be built from a dataset entry and read back.
pub trait Record: Sized {
    /// Per-entry inputs shared by every record of a sequence.
    ///
    /// Produced once by [`Record::params`], outside any measured region.
    type Params;

    const FILL: Fill = Fill::Presized;

    /// Derives the shared inputs for `entry`.
    fn params(entry: &DatasetEntry) -> Self::Params;

    /// Builds the record at position `index`. Every field is a deterministic
    /// function of `index` and `params`.
    fn make(index: usize, params: &Self::Params) -> Self;

    /// Sums the record's fields. This is the read performed by iteration benchmarks.
    fn checksum(&self) -> i64;
}
