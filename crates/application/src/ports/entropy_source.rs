/// Source of uniformly distributed random draws used to reorder records.
///
/// A single instance is shared by every query in flight and is called
/// without any external locking, so implementations must be safe for
/// unsynchronized concurrent use. Cryptographic strength is not required,
/// but every draw must be uniform over its range.
pub trait EntropySource: Send + Sync {
    /// Next uniformly distributed 16-bit value.
    fn next_u16(&self) -> u16;

    /// Draw in `0..bound`. `bound` must be non-zero.
    ///
    /// The default reduces one 16-bit draw modulo `bound`, which is slightly
    /// biased whenever `bound` does not divide 65536. Production sources
    /// override it with an unbiased bounded draw.
    fn below(&self, bound: usize) -> usize {
        usize::from(self.next_u16()) % bound
    }
}
