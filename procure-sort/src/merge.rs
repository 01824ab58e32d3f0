//! Bottom-up stable merge sort over record indices.
//!
//! `slice::sort_by` may panic when the comparator is not a total order, and
//! the mixed-type policy is not one across every input. This merge never
//! inspects the comparator's consistency: each merge step is a plain
//! take-left-unless-right-is-less, so it terminates and yields a
//! permutation whatever the comparator answers.

use std::cmp::Ordering;

pub(crate) fn merge_sort_indices<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut src: Vec<usize> = (0..len).collect();
    if len < 2 {
        return src;
    }
    let mut dst = vec![0; len];

    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = start.saturating_add(width).min(len);
            let end = start.saturating_add(width.saturating_mul(2)).min(len);
            let (mut i, mut j, mut k) = (start, mid, start);

            while i < mid && j < end {
                // Ties take from the left run, which keeps the sort stable.
                if compare(src[j], src[i]) == Ordering::Less {
                    dst[k] = src[j];
                    j += 1;
                } else {
                    dst[k] = src[i];
                    i += 1;
                }
                k += 1;
            }
            dst[k..k + (mid - i)].copy_from_slice(&src[i..mid]);
            dst[j..end].copy_from_slice(&src[j..end]);

            start = end;
        }
        std::mem::swap(&mut src, &mut dst);
        width = width.saturating_mul(2);
    }
    src
}
