//! All-or-abort fan-out
//!
//! Runs independent branches of a stage concurrently on the rayon pool and
//! waits for every branch. The first error observed is returned; branches
//! that already finished are not undone.

use crate::error::DistpackResult;

/// One branch of a stage
pub type Task<'a, T> = Box<dyn FnOnce() -> DistpackResult<T> + Send + 'a>;

/// Run `tasks` concurrently and collect their results in task order.
pub fn fan_out<'a, T: Send>(tasks: Vec<Task<'a, T>>) -> DistpackResult<Vec<T>> {
    use rayon::prelude::*;

    tasks.into_par_iter().map(|task| task()).collect()
}

/// Run two heterogeneous branches concurrently.
///
/// Both branches always run to completion; when both fail, the error of `a`
/// is returned.
pub fn both<A, B, FA, FB>(a: FA, b: FB) -> DistpackResult<(A, B)>
where
    A: Send,
    B: Send,
    FA: FnOnce() -> DistpackResult<A> + Send,
    FB: FnOnce() -> DistpackResult<B> + Send,
{
    let (a, b) = rayon::join(a, b);
    Ok((a?, b?))
}
