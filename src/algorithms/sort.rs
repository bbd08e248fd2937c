//! In-place sorting routines over integer slices.
//!
//! Classic textbook renditions, kept faithful so their relative costs stay
//! comparable across runs. All routines sort ascending. Two carry documented
//! preconditions: `radix` assumes non-negative values and `bitonic` only
//! produces sorted output for power-of-two lengths.

/// Bubble sort: repeated adjacent compare-and-swap passes.
///
/// Complexity: O(n^2)
pub fn bubble(data: &mut [i64]) {
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        for i in 0..n - 1 - pass {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
            }
        }
    }
}

/// Quicksort with Lomuto partitioning, last element as pivot.
///
/// Complexity: O(n log n) expected. Recursion depth reaches O(n) on already
/// sorted input.
pub fn quick(data: &mut [i64]) {
    if data.len() > 1 {
        quick_range(data, 0, data.len() - 1);
    }
}

fn quick_range(data: &mut [i64], low: usize, high: usize) {
    if low < high {
        let pivot = partition(data, low, high);
        if pivot > 0 {
            quick_range(data, low, pivot - 1);
        }
        quick_range(data, pivot + 1, high);
    }
}

fn partition(data: &mut [i64], low: usize, high: usize) -> usize {
    let pivot = data[high];
    let mut boundary = low;
    for probe in low..high {
        if data[probe] <= pivot {
            data.swap(boundary, probe);
            boundary += 1;
        }
    }
    data.swap(boundary, high);
    boundary
}

/// Stooge sort: swap the ends, then recurse over the first two thirds, the
/// last two thirds, and the first two thirds again.
///
/// Complexity: O(n^2.71), deliberately the slowest routine in the suite
pub fn stooge(data: &mut [i64]) {
    if !data.is_empty() {
        stooge_range(data, 0, data.len() - 1);
    }
}

fn stooge_range(data: &mut [i64], low: usize, high: usize) {
    if data[low] > data[high] {
        data.swap(low, high);
    }
    let len = high - low + 1;
    if len > 2 {
        let third = len / 3;
        stooge_range(data, low, high - third);
        stooge_range(data, low + third, high);
        stooge_range(data, low, high - third);
    }
}

/// LSD radix sort in base 10.
///
/// Assumes non-negative values: a negative value wraps the digit index and
/// panics. Complexity: O(d * n) for d decimal digits.
pub fn radix(data: &mut [i64]) {
    let Some(&max) = data.iter().max() else {
        return;
    };

    let mut exp = 1;
    while max / exp > 0 {
        counting_pass(data, exp);
        exp *= 10;
    }
}

/// One stable counting-sort pass over the digit selected by `exp`.
fn counting_pass(data: &mut [i64], exp: i64) {
    let mut output = vec![0i64; data.len()];
    let mut counts = [0usize; 10];

    for &value in data.iter() {
        counts[((value / exp) % 10) as usize] += 1;
    }
    for digit in 1..10 {
        counts[digit] += counts[digit - 1];
    }
    // walk backwards so equal digits keep their relative order
    for &value in data.iter().rev() {
        let digit = ((value / exp) % 10) as usize;
        counts[digit] -= 1;
        output[counts[digit]] = value;
    }
    data.copy_from_slice(&output);
}

/// Top-down merge sort with freshly allocated half buffers per merge.
///
/// Complexity: O(n log n)
pub fn merge(data: &mut [i64]) {
    if data.len() > 1 {
        merge_range(data, 0, data.len() - 1);
    }
}

fn merge_range(data: &mut [i64], low: usize, high: usize) {
    if low < high {
        let mid = low + (high - low) / 2;
        merge_range(data, low, mid);
        merge_range(data, mid + 1, high);
        merge_halves(data, low, mid, high);
    }
}

fn merge_halves(data: &mut [i64], low: usize, mid: usize, high: usize) {
    let left: Vec<i64> = data[low..=mid].to_vec();
    let right: Vec<i64> = data[mid + 1..=high].to_vec();

    let (mut i, mut j, mut k) = (0, 0, low);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            data[k] = left[i];
            i += 1;
        } else {
            data[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        data[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        data[k] = right[j];
        j += 1;
        k += 1;
    }
}

/// Bitonic sort over the whole slice.
///
/// Produces sorted output only when `data.len()` is a power of two; other
/// lengths run to completion but leave the order unspecified.
/// Complexity: O(n log^2 n)
pub fn bitonic(data: &mut [i64]) {
    if data.len() > 1 {
        bitonic_range(data, 0, data.len(), true);
    }
}

fn bitonic_range(data: &mut [i64], low: usize, count: usize, ascending: bool) {
    if count > 1 {
        let half = count / 2;
        bitonic_range(data, low, half, true);
        bitonic_range(data, low + half, half, false);
        bitonic_merge(data, low, count, ascending);
    }
}

fn bitonic_merge(data: &mut [i64], low: usize, count: usize, ascending: bool) {
    if count > 1 {
        let half = count / 2;
        for i in low..low + half {
            if (data[i] > data[i + half]) == ascending {
                data.swap(i, i + half);
            }
        }
        bitonic_merge(data, low, half, ascending);
        bitonic_merge(data, low + half, half, ascending);
    }
}

/// Check whether a slice is sorted ascending.
#[inline]
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// Inputs every general-purpose sort must handle.
    fn general_cases() -> Vec<Vec<i64>> {
        vec![
            vec![],
            vec![42],
            vec![5, 3, 8, 1],
            (0..100).collect(),
            (0..100).rev().collect(),
            vec![5, 3, 5, 1, 3, 5, 1, 1],
            vec![7; 50],
            vec![-3, 12, 0, -50, 12, 7],
        ]
    }

    fn assert_sorts(name: &str, sort: fn(&mut [i64]), cases: Vec<Vec<i64>>) {
        for case in cases {
            let mut data = case.clone();
            let mut expected = case.clone();
            expected.sort_unstable();
            sort(&mut data);
            assert_eq!(data, expected, "{name} failed on {case:?}");
        }
    }

    #[test]
    fn test_bubble_sort() {
        assert_sorts("bubble", bubble, general_cases());
    }

    #[test]
    fn test_quick_sort() {
        assert_sorts("quick", quick, general_cases());
    }

    #[test]
    fn test_stooge_sort() {
        assert_sorts("stooge", stooge, general_cases());
    }

    #[test]
    fn test_merge_sort() {
        assert_sorts("merge", merge, general_cases());
    }

    #[test]
    fn test_radix_sort_non_negative_cases() {
        assert_sorts(
            "radix",
            radix,
            vec![
                vec![],
                vec![42],
                vec![5, 3, 8, 1],
                vec![0, 0, 0],
                vec![170, 45, 75, 90, 802, 24, 2, 66],
                vec![7; 50],
                (0..100).rev().collect(),
            ],
        );
    }

    #[test]
    fn test_radix_sort_handles_uneven_digit_counts() {
        let mut data = vec![1_000_000, 1, 10, 100_000, 100, 10_000, 1_000];
        radix(&mut data);
        assert_eq!(data, vec![1, 10, 100, 1_000, 10_000, 100_000, 1_000_000]);
    }

    #[test]
    fn test_bitonic_sort_power_of_two_lengths() {
        let mut rng = rand::rng();
        for exponent in 0..11 {
            let n = 1usize << exponent;
            let case: Vec<i64> = (0..n).map(|_| rng.random_range(0..1_000)).collect();
            let mut data = case.clone();
            let mut expected = case.clone();
            expected.sort_unstable();
            bitonic(&mut data);
            assert_eq!(data, expected, "bitonic failed on length {n}");
        }
    }

    #[test]
    fn test_quick_and_merge_on_large_random_input() {
        let mut rng = rand::rng();
        let case: Vec<i64> = (0..50_000)
            .map(|_| rng.random_range(10_000_000..100_000_000))
            .collect();
        let mut expected = case.clone();
        expected.sort_unstable();

        for sort in [quick, merge, radix] {
            let mut data = case.clone();
            sort(&mut data);
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn test_stooge_sort_small_random_input() {
        let mut rng = rand::rng();
        let mut data: Vec<i64> = (0..100).map(|_| rng.random_range(0..1_000)).collect();
        stooge(&mut data);
        assert!(is_sorted(&data));
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[1, 2, 3, 4, 5]));
        assert!(is_sorted(&[1, 1, 1]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[]));
        assert!(!is_sorted(&[5, 4, 3]));
        assert!(!is_sorted(&[1, 3, 2]));
    }
}
