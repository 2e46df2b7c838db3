/// Errors produced by the demo computations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DemoError {
    /// `n!` does not fit in a `u64`.
    #[error("factorial of {n} overflows a 64-bit integer")]
    FactorialOverflow {
        /// The input whose factorial overflowed.
        n: u32,
    },
}
