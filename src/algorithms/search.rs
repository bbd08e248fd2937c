//! Search routines over integer slices.
//!
//! `linear` accepts any slice; `binary`, `ternary` and `jump` require the
//! slice sorted ascending. All return the index of a matching element, or
//! `None` when the key is absent. With duplicate keys, which matching index
//! comes back is routine-specific.

/// Scan from the front; the first match wins.
///
/// Complexity: O(n)
pub fn linear(data: &[i64], key: i64) -> Option<usize> {
    data.iter().position(|&value| value == key)
}

/// Classic iterative binary search, halving an inclusive `[low, high]` window.
///
/// Complexity: O(log n)
pub fn binary(data: &[i64], key: i64) -> Option<usize> {
    if data.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = data.len() - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        if data[mid] == key {
            return Some(mid);
        }
        if data[mid] < key {
            low = mid + 1;
        } else if mid == 0 {
            // window would move below index zero
            return None;
        } else {
            high = mid - 1;
        }
    }
    None
}

/// Ternary search: probe two pivots a third of the way in from each end,
/// then recurse into the single segment that can still hold the key.
///
/// Complexity: O(log n), base 3
pub fn ternary(data: &[i64], key: i64) -> Option<usize> {
    ternary_at(data, key, 0)
}

fn ternary_at(data: &[i64], key: i64, base: usize) -> Option<usize> {
    if data.is_empty() {
        return None;
    }

    let high = data.len() - 1;
    let third = high / 3;
    let first = third;
    let second = high - third;

    if data[first] == key {
        return Some(base + first);
    }
    if data[second] == key {
        return Some(base + second);
    }

    if key < data[first] {
        ternary_at(&data[..first], key, base)
    } else if key > data[second] {
        ternary_at(&data[second + 1..], key, base + second + 1)
    } else {
        // key sits strictly between the pivots, so first < second and the
        // middle slice bounds are valid (possibly empty)
        ternary_at(&data[first + 1..second], key, base + first + 1)
    }
}

/// Jump search: stride through the slice in sqrt(n) blocks until a block
/// could hold the key, then scan that block linearly.
///
/// Complexity: O(sqrt n)
pub fn jump(data: &[i64], key: i64) -> Option<usize> {
    let n = data.len();
    if n == 0 {
        return None;
    }
    let step = n.isqrt().max(1);

    let mut block = 0usize;
    while block < n && data[(block + step).min(n) - 1] < key {
        block += step;
    }
    if block >= n {
        return None;
    }

    let end = (block + step).min(n);
    data[block..end]
        .iter()
        .position(|&value| value == key)
        .map(|offset| block + offset)
}
