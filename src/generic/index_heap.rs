/*!
A max-heap over a fixed index space.

The heap is backed by a vector of values indexed by `usize`, with a companion vector recording where (if anywhere) each index currently sits in the heap.
Values persist when an index is popped, so the structure doubles as a plain store of values for indices which happen to be off the heap.

This fits the use made of the heap for decisions during a solve: every variable has an activity, variables without a value are kept on the heap, and the most active of these is wanted quickly.
Popping is cheap, while re-activating an index after a backjump re-uses whatever value the index held.

```rust
# use marten_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.reserve(3);
heap.revalue(0, 1.0);
heap.revalue(2, 5.0);

heap.activate(0);
heap.activate(2);

assert_eq!(heap.pop_max(), Some(2));
assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), None);
```
*/

/// A max-heap over a fixed index space.
#[derive(Default)]
pub struct IndexHeap<V: PartialOrd + Default + Copy> {
    /// The value at each index, whether or not the index is on the heap.
    values: Vec<V>,

    /// The heap position of each index, if the index is on the heap.
    position: Vec<Option<usize>>,

    /// The heap itself, as a vector of indices.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default + Copy> IndexHeap<V> {
    /// Grows the index space to include `index`, filling fresh slots with default values.
    pub fn reserve(&mut self, index: usize) {
        if self.values.len() <= index {
            self.values.resize(index + 1, V::default());
            self.position.resize(index + 1, None);
        }
    }

    /// True if `index` is on the heap.
    pub fn contains(&self, index: usize) -> bool {
        self.position.get(index).is_some_and(|p| p.is_some())
    }

    /// The value at `index`.
    pub fn value_at(&self, index: usize) -> V {
        self.values[index]
    }

    /// Sets the value at `index` without adjusting the heap.
    ///
    /// If `index` may be on the heap, use [update](IndexHeap::update) instead.
    pub fn revalue(&mut self, index: usize, value: V) {
        self.values[index] = value;
    }

    /// Sets the value at `index` and restores heap order around it, if required.
    pub fn update(&mut self, index: usize, value: V) {
        self.values[index] = value;
        if let Some(heap_index) = self.position[index] {
            self.sift_up(heap_index);
            self.sift_down(heap_index);
        }
    }

    /// Applies `f` to every value, on or off the heap.
    ///
    /// Heap order is preserved, as any map applied to all values at once is monotone with respect to the stored order only if `f` is — which holds for the intended use of scaling every value by a positive constant.
    pub fn apply_to_all(&mut self, f: impl Fn(V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(*value);
        }
    }

    /// Places `index` on the heap, if not already present.
    pub fn activate(&mut self, index: usize) {
        if self.position[index].is_none() {
            self.position[index] = Some(self.heap.len());
            self.heap.push(index);
            self.sift_up(self.heap.len() - 1);
        }
    }

    /// The index with the maximal value, removed from the heap.
    ///
    /// The value at the index is retained.
    pub fn pop_max(&mut self) -> Option<usize> {
        match self.heap.first() {
            None => None,
            Some(&max_index) => {
                let last = self.heap.len() - 1;
                self.heap.swap(0, last);
                self.position[self.heap[0]] = Some(0);
                self.heap.pop();
                self.position[max_index] = None;
                if !self.heap.is_empty() {
                    self.sift_down(0);
                }
                Some(max_index)
            }
        }
    }

    /// The index with the maximal value, left on the heap.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// A count of indices on the heap.
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// The index at `heap_index` on the heap, for uniform sampling over heap members.
    pub fn heap_entry(&self, heap_index: usize) -> usize {
        self.heap[heap_index]
    }

    /// Clears the heap and rebuilds it from the given indices.
    pub fn rebuild(&mut self, indices: impl Iterator<Item = usize>) {
        for position in self.position.iter_mut() {
            *position = None;
        }
        self.heap.clear();
        for index in indices {
            self.position[index] = Some(self.heap.len());
            self.heap.push(index);
        }
        for heap_index in (0..self.heap.len() / 2).rev() {
            self.sift_down(heap_index);
        }
    }
}

impl<V: PartialOrd + Default + Copy> IndexHeap<V> {
    fn greater(&self, a: usize, b: usize) -> bool {
        matches!(
            self.values[self.heap[a]].partial_cmp(&self.values[self.heap[b]]),
            Some(std::cmp::Ordering::Greater)
        )
    }

    fn swap_heap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent = (heap_index - 1) / 2;
            if self.greater(heap_index, parent) {
                self.swap_heap(heap_index, parent);
                heap_index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut heap_index: usize) {
        loop {
            let left = 2 * heap_index + 1;
            if left >= self.heap.len() {
                break;
            }
            let mut largest = heap_index;
            if self.greater(left, largest) {
                largest = left;
            }
            let right = left + 1;
            if right < self.heap.len() && self.greater(right, largest) {
                largest = right;
            }
            if largest == heap_index {
                break;
            }
            self.swap_heap(heap_index, largest);
            heap_index = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_order() {
        let mut heap = IndexHeap::default();
        heap.reserve(6);
        for (index, value) in [(6, 10.0), (5, 20.0), (4, 30.0), (1, 60.0), (0, 70.0)] {
            heap.revalue(index, value);
            heap.activate(index);
        }

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(6));
        assert_eq!(heap.pop_max(), None);
    }

    #[test]
    fn reactivation_keeps_value() {
        let mut heap = IndexHeap::default();
        heap.reserve(2);
        heap.revalue(1, 5.0);
        heap.revalue(2, 3.0);
        heap.activate(1);
        heap.activate(2);

        assert_eq!(heap.pop_max(), Some(1));
        heap.activate(1);
        assert_eq!(heap.pop_max(), Some(1));
    }

    #[test]
    fn update_restores_order() {
        let mut heap = IndexHeap::default();
        heap.reserve(2);
        heap.revalue(0, 1.0);
        heap.revalue(1, 2.0);
        heap.revalue(2, 3.0);
        for index in 0..3 {
            heap.activate(index);
        }

        heap.update(0, 9.0);
        assert_eq!(heap.peek_max(), Some(0));

        heap.update(0, 0.0);
        assert_eq!(heap.pop_max(), Some(2));
    }

    #[test]
    fn rebuild_from_subset() {
        let mut heap = IndexHeap::default();
        heap.reserve(4);
        for index in 0..5 {
            heap.revalue(index, index as f64);
            heap.activate(index);
        }

        heap.rebuild([0, 2, 4].into_iter());
        assert_eq!(heap.heap_len(), 3);
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(2));
        assert_eq!(heap.pop_max(), Some(0));
    }
}
