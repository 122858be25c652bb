//! Array index normalization and slice iteration

/// Resolve a possibly negative index against an array of `len` elements
pub(crate) fn normalize_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = if index < 0 { len.saturating_add(index) } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

/// Indices selected by `start:end:step` on an array of `len` elements
///
/// Bounds are normalized and clamped as in RFC 9535 section 2.3.4.2. A zero step selects
/// nothing; a negative step walks backwards from `start`.
pub(crate) fn slice_indices(
    len: usize,
    start: Option<i64>,
    end: Option<i64>,
    step: Option<i64>,
) -> SliceIndices {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let step = step.unwrap_or(1);
    let normalize = |i: i64| if i >= 0 { i } else { len.saturating_add(i) };

    if step >= 0 {
        let start = start.map_or(0, normalize);
        let end = end.map_or(len, normalize);
        SliceIndices {
            next: start.clamp(0, len),
            bound: end.clamp(0, len),
            step,
        }
    } else {
        let start = start.map_or(len - 1, normalize);
        let end = end.map_or(-len - 1, normalize);
        SliceIndices {
            next: start.clamp(-1, len - 1),
            bound: end.clamp(-1, len - 1),
            step,
        }
    }
}

/// Iterator over slice indices
#[derive(Debug, Clone)]
pub(crate) struct SliceIndices {
    next: i64,
    bound: i64,
    step: i64,
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let in_range = if self.step > 0 {
            self.next < self.bound
        } else {
            self.step < 0 && self.bound < self.next
        };
        if !in_range {
            return None;
        }
        let current = self.next;
        self.next = current.checked_add(self.step).unwrap_or(self.bound);
        usize::try_from(current).ok()
    }
}
