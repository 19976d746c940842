//! This module defines [HeapPermutations],
//! which enumerates all orderings of a sequence with Heap's algorithm.

use streaming_iterator::StreamingIterator;

use crate::error::Error;

/// Swap the elements at two positions of a slice.
///
/// Returns the slice to allow chaining,
/// or [Error::IndexOutOfBounds] if one of the positions is outside of the slice.
pub fn swap_elements<T>(slice: &mut [T], first: usize, second: usize) -> Result<&mut [T], Error> {
    let len = slice.len();
    if let Some(index) = [first, second].into_iter().find(|&index| index >= len) {
        return Err(Error::IndexOutOfBounds { index, len });
    }

    slice.swap(first, second);
    Ok(slice)
}

/// Return the number of orderings of a sequence of length `len`,
/// or `None` if it does not fit into a [usize].
pub fn permutation_count(len: usize) -> Option<usize> {
    (1..=len).try_fold(1usize, |count, factor| count.checked_mul(factor))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GeneratorState {
    /// No arrangement has been requested yet
    Fresh,
    /// The buffer holds the current arrangement
    Current,
    /// All arrangements have been produced
    Exhausted,
}

/// Enumerates all orderings of a sequence by swapping elements of a working buffer in place.
///
/// Produces the arrangements in the order of the recursive formulation of Heap's algorithm:
/// for a segment of length `k`, all arrangements of the first `k - 1` elements are generated,
/// followed by a swap of the last element of the segment, `k` times in total.
/// If `k` is odd, the first element is swapped with the last one,
/// otherwise the element at the position given by the number of completed iterations.
///
/// As a [StreamingIterator], each arrangement is a view into the working buffer.
/// As an [Iterator], each arrangement is returned as an owned copy.
/// The buffer is left in the state reached after the final swap.
///
/// Repeated elements are not collapsed, so a sequence of length `n`
/// always has `n!` arrangements. The empty sequence has exactly one, empty, arrangement.
#[derive(Debug)]
pub struct HeapPermutations<'a, T> {
    /// Working buffer holding the current arrangement
    buffer: &'a mut [T],
    /// For each segment length `k`, the number of completed iterations for that segment.
    /// Entries 0 and 1 are unused.
    counters: Vec<usize>,
    /// Number of arrangements produced so far
    produced: usize,

    state: GeneratorState,
}

impl<'a, T> HeapPermutations<'a, T> {
    /// Create a new [HeapPermutations] that uses `buffer` as working memory.
    ///
    /// The first arrangement is the buffer as given.
    pub fn new(buffer: &'a mut [T]) -> Self {
        let counters = vec![0; buffer.len() + 1];

        Self {
            buffer,
            counters,
            produced: 0,
            state: GeneratorState::Fresh,
        }
    }

    /// Return the number of elements in each arrangement.
    pub fn sequence_len(&self) -> usize {
        self.buffer.len()
    }

    /// Perform the swaps leading to the next arrangement.
    ///
    /// Returns `false` if the previous arrangement was the last one.
    fn step(&mut self) -> bool {
        let len = self.buffer.len();

        let mut segment = 2;
        while segment <= len {
            let iteration = self.counters[segment];
            let swap_index = if segment % 2 == 0 { iteration } else { 0 };

            self.buffer.swap(swap_index, segment - 1);
            self.counters[segment] = iteration + 1;

            if iteration + 1 < segment {
                return true;
            }

            self.counters[segment] = 0;
            segment += 1;
        }

        false
    }

    fn remaining(&self) -> Option<usize> {
        match self.state {
            GeneratorState::Exhausted => Some(0),
            _ => permutation_count(self.buffer.len()).map(|total| total - self.produced),
        }
    }
}

impl<T> StreamingIterator for HeapPermutations<'_, T> {
    type Item = [T];

    fn advance(&mut self) {
        match self.state {
            GeneratorState::Fresh => self.state = GeneratorState::Current,
            GeneratorState::Current => {
                if !self.step() {
                    self.state = GeneratorState::Exhausted;
                    return;
                }
            }
            GeneratorState::Exhausted => return,
        }

        self.produced += 1;
    }

    fn get(&self) -> Option<&Self::Item> {
        match self.state {
            GeneratorState::Current => Some(&*self.buffer),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> Iterator for HeapPermutations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        StreamingIterator::advance(self);
        StreamingIterator::get(self).map(<[T]>::to_vec)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        StreamingIterator::size_hint(self)
    }
}

/// Return all orderings of `sequence`, in the order produced by [HeapPermutations].
///
/// The input is copied, so it stays untouched.
pub fn permute<T: Clone>(sequence: &[T]) -> Vec<Vec<T>> {
    let mut buffer = sequence.to_vec();
    permute_in_place(&mut buffer)
}

/// Return all orderings of `sequence`, using it as the working buffer.
///
/// After returning, `sequence` holds the state reached by the final swap of the algorithm,
/// which is in general not the original order.
pub fn permute_in_place<T: Clone>(sequence: &mut [T]) -> Vec<Vec<T>> {
    log::trace!("generating permutations of {} elements", sequence.len());

    HeapPermutations::new(sequence).collect()
}

#[cfg(test)]
mod test {
    use quickcheck_macros::quickcheck;
    use streaming_iterator::StreamingIterator;
    use test_log::test;

    use super::{
        permutation_count, permute, permute_in_place, swap_elements, HeapPermutations,
    };
    use crate::error::Error;

    /// Enumerate orderings by backtracking, independently of Heap's algorithm.
    fn brute_force<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
        fn backtrack<T: Clone>(start: usize, current: &mut [T], results: &mut Vec<Vec<T>>) {
            if start == current.len() {
                results.push(current.to_vec());
                return;
            }

            for index in start..current.len() {
                current.swap(start, index);
                backtrack(start + 1, current, results);
                current.swap(start, index);
            }
        }

        let mut current = items.to_vec();
        let mut results = Vec::new();
        backtrack(0, &mut current, &mut results);

        results
    }

    #[test]
    fn three_elements_in_generation_order() {
        let expected = vec![
            vec![1, 2, 3],
            vec![2, 1, 3],
            vec![3, 1, 2],
            vec![1, 3, 2],
            vec![2, 3, 1],
            vec![3, 2, 1],
        ];

        assert_eq!(permute(&[1, 2, 3]), expected);
    }

    #[test]
    fn four_elements_start() {
        let permutations = permute(&['a', 'b', 'c', 'd']);
        assert_eq!(permutations.len(), 24);

        let start = vec![
            vec!['a', 'b', 'c', 'd'],
            vec!['b', 'a', 'c', 'd'],
            vec!['c', 'a', 'b', 'd'],
            vec!['a', 'c', 'b', 'd'],
            vec!['b', 'c', 'a', 'd'],
            vec!['c', 'b', 'a', 'd'],
            vec!['d', 'b', 'c', 'a'],
            vec!['b', 'd', 'c', 'a'],
        ];
        assert_eq!(permutations[..8], start[..]);
    }

    #[test]
    fn permute_leaves_input_untouched() {
        let input = vec![1, 2, 3, 4];
        let _ = permute(&input);
        assert_eq!(input, vec![1, 2, 3, 4]);
    }

    #[test]
    fn permute_in_place_moves_buffer() {
        let mut odd = vec![1, 2, 3];
        assert_eq!(permute_in_place(&mut odd).len(), 6);
        assert_eq!(odd, vec![1, 2, 3]);

        let mut even = vec![1, 2, 3, 4];
        assert_eq!(permute_in_place(&mut even).len(), 24);
        assert_eq!(even, vec![4, 1, 2, 3]);

        let mut pair = vec![1, 2];
        assert_eq!(permute_in_place(&mut pair), vec![vec![1, 2], vec![2, 1]]);
        assert_eq!(pair, vec![2, 1]);
    }

    #[test]
    fn short_sequences() {
        assert_eq!(permute::<u8>(&[]), vec![Vec::<u8>::new()]);
        assert_eq!(permute(&["x"]), vec![vec!["x"]]);
    }

    #[test]
    fn repeated_elements_are_not_collapsed() {
        let permutations = permute(&[1, 1, 2]);
        assert_eq!(permutations.len(), 6);
        assert_eq!(
            permutations
                .iter()
                .filter(|arrangement| **arrangement == [1, 1, 2])
                .count(),
            2
        );
    }

    #[test]
    fn streaming_view_borrows_buffer() {
        let mut buffer = vec![3, 1, 2];
        let mut generator = HeapPermutations::new(&mut buffer);
        assert_eq!(generator.sequence_len(), 3);

        let mut count = 0;
        while let Some(arrangement) = StreamingIterator::next(&mut generator) {
            assert_eq!(arrangement.len(), 3);
            count += 1;
        }

        assert_eq!(count, 6);
        assert_eq!(StreamingIterator::get(&generator), None);
        // exhausted generators stay exhausted
        assert_eq!(Iterator::next(&mut generator), None);
    }

    #[test]
    fn size_hint_is_exact() {
        let mut buffer = vec![0; 4];
        let mut generator = HeapPermutations::new(&mut buffer);
        assert_eq!(Iterator::size_hint(&generator), (24, Some(24)));

        let _ = Iterator::next(&mut generator);
        let _ = Iterator::next(&mut generator);
        assert_eq!(Iterator::size_hint(&generator), (22, Some(22)));

        assert_eq!(Iterator::count(&mut generator), 22);
        assert_eq!(Iterator::size_hint(&generator), (0, Some(0)));
    }

    #[test]
    fn counts() {
        assert_eq!(permutation_count(0), Some(1));
        assert_eq!(permutation_count(1), Some(1));
        assert_eq!(permutation_count(5), Some(120));
        assert_eq!(permutation_count(20), Some(2_432_902_008_176_640_000));
        assert_eq!(permutation_count(usize::MAX), None);
    }

    #[test]
    fn swapping() {
        let mut values = vec!['a', 'b', 'c'];
        swap_elements(&mut values, 0, 2).expect("indices are in bounds");
        assert_eq!(values, vec!['c', 'b', 'a']);

        let chained = swap_elements(&mut values, 1, 1)
            .and_then(|values| swap_elements(values, 0, 1))
            .expect("indices are in bounds");
        assert_eq!(chained, ['b', 'c', 'a']);

        assert_eq!(
            swap_elements(&mut values, 1, 3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn same_arrangements_as_brute_force(mut items: Vec<u8>) -> bool {
        items.truncate(6);
        for item in &mut items {
            *item %= 4;
        }

        let mut generated = permute(&items);
        let mut expected = brute_force(&items);

        let count_matches = Some(generated.len()) == permutation_count(items.len());

        generated.sort_unstable();
        expected.sort_unstable();

        count_matches && generated == expected
    }
}
