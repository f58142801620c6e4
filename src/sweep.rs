//! Scan-and-patch driver
//!
//! Every mutating pass follows the same shape: take a snapshot of a
//! collection, inspect each item (usually refetching its detail form),
//! and issue at most one whole-object write-back per item. This module
//! holds that loop once, parameterized by the check and the write-back.
//! An item failure is not isolated: it propagates and aborts the rest of
//! the pass.

use crate::error::Result;
use std::future::Future;

/// Counters reported by a completed pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Items inspected
    pub scanned: usize,
    /// Items written back
    pub patched: usize,
}

/// Run a scan-and-patch pass over `items`
///
/// `check` inspects one item and returns the patched object to write back,
/// or `None` to leave it untouched. `apply` issues the single write-back.
/// Re-running over an already-clean collection performs zero writes.
pub async fn scan_and_patch<T, U, C, CFut, A, AFut>(
    items: impl IntoIterator<Item = T>,
    mut check: C,
    mut apply: A,
) -> Result<SweepStats>
where
    C: FnMut(T) -> CFut,
    CFut: Future<Output = Result<Option<U>>>,
    A: FnMut(U) -> AFut,
    AFut: Future<Output = Result<()>>,
{
    let mut stats = SweepStats::default();
    for item in items {
        stats.scanned += 1;
        if let Some(patched) = check(item).await? {
            apply(patched).await?;
            stats.patched += 1;
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_patches_only_matching_items() {
        let mut applied = Vec::new();
        let stats = scan_and_patch(
            vec![1, 2, 3, 4],
            |n| async move { Ok(if n % 2 == 0 { Some(n * 10) } else { None }) },
            |n| {
                applied.push(n);
                async { Ok(()) }
            },
        )
        .await
        .unwrap();

        assert_eq!(stats, SweepStats { scanned: 4, patched: 2 });
        assert_eq!(applied, vec![20, 40]);
    }

    #[tokio::test]
    async fn test_clean_collection_performs_zero_writes() {
        let stats = scan_and_patch(
            vec![1, 2, 3],
            |_| async { Ok(None::<i32>) },
            |_: i32| async { panic!("apply must not run") },
        )
        .await
        .unwrap();

        assert_eq!(stats, SweepStats { scanned: 3, patched: 0 });
    }

    #[tokio::test]
    async fn test_check_failure_aborts_pass() {
        let err = scan_and_patch(
            vec![1, 2, 3],
            |n| async move {
                if n == 2 {
                    Err(Error::http_status(500, "boom"))
                } else {
                    Ok(None::<i32>)
                }
            },
            |_: i32| async { Ok(()) },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_apply_failure_aborts_pass() {
        let mut applied = 0;
        let err = scan_and_patch(
            vec![1, 2, 3],
            |n| async move { Ok(Some(n)) },
            |_: i32| {
                applied += 1;
                async move { Err(Error::http_status(500, "write failed")) }
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
        assert_eq!(applied, 1);
    }
}
