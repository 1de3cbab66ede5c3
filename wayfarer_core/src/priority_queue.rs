use std::vec::IntoIter;

use crate::error::PriorityQueueError;

/// Element of a [`BinaryHeap`]. Elements are ordered by [`Ord`], smallest
/// first, and identified by a dense key used to locate them for removal.
/// Two elements in the same heap must not share a key.
pub trait HeapItem: Ord {
    fn heap_key(&self) -> usize;
}

/// Array-backed binary min-heap. Decrease-key is done by removing the element
/// and inserting it again with its new priority.
pub struct BinaryHeap<T>
where
    T: HeapItem,
{
    items: Vec<T>,
    positions: Vec<Option<usize>>,
}

impl<T> BinaryHeap<T>
where
    T: HeapItem,
{
    pub fn new() -> Self {
        BinaryHeap {
            items: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Preallocates room for keys in `0..keys`.
    pub fn with_capacity(keys: usize) -> Self {
        BinaryHeap {
            items: Vec::with_capacity(keys),
            positions: vec![None; keys],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.position(item.heap_key()).is_some()
    }

    pub fn insert(&mut self, item: T) -> Result<(), PriorityQueueError> {
        let key = item.heap_key();
        if self.contains(&item) {
            return Err(PriorityQueueError::ElementAlreadyExists(key));
        }

        if key >= self.positions.len() {
            self.positions.resize(key + 1, None);
        }

        let index = self.items.len();
        self.items.push(item);
        self.positions[key] = Some(index);
        self.sift_up(index);

        Ok(())
    }

    pub fn find_min(&self) -> Result<&T, PriorityQueueError> {
        self.items.first().ok_or(PriorityQueueError::EmptyQueue)
    }

    pub fn delete_min(&mut self) -> Result<T, PriorityQueueError> {
        if self.items.is_empty() {
            return Err(PriorityQueueError::EmptyQueue);
        }

        Ok(self.remove_at(0))
    }

    /// Removes the element sharing the key of `item`.
    pub fn remove(&mut self, item: &T) -> Result<T, PriorityQueueError> {
        let key = item.heap_key();
        let index = self
            .position(key)
            .ok_or(PriorityQueueError::ElementNotFound(key))?;

        Ok(self.remove_at(index))
    }

    pub fn clear(&mut self) {
        self.positions.fill(None);
        self.items.clear();
    }

    /// Elements sorted by priority, the heap is left untouched.
    pub fn to_vec(&self) -> Vec<&T> {
        let mut elements: Vec<&T> = self.items.iter().collect();
        elements.sort();
        elements
    }

    /// Consumes the heap, yielding elements in priority order.
    pub fn into_sorted_iter(self) -> IntoIter<T> {
        let mut items = self.items;
        items.sort();
        items.into_iter()
    }

    fn position(&self, key: usize) -> Option<usize> {
        self.positions.get(key).copied().flatten()
    }

    fn remove_at(&mut self, index: usize) -> T {
        let last = self.items.len() - 1;
        self.swap(index, last);

        let Some(removed) = self.items.pop() else {
            unreachable!("heap cannot be empty here");
        };
        self.positions[removed.heap_key()] = None;

        // The former last element now sits at `index` and may violate the
        // heap order in either direction
        if index < self.items.len() {
            if index > 0 && self.items[index] < self.items[parent(index)] {
                self.sift_up(index);
            } else {
                self.sift_down(index);
            }
        }

        removed
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.positions[self.items[a].heap_key()] = Some(a);
        self.positions[self.items[b].heap_key()] = Some(b);
    }

    fn sift_up(&mut self, element_index: usize) {
        let mut index = element_index;
        while index > 0 {
            let parent_index = parent(index);
            if self.items[index] >= self.items[parent_index] {
                break;
            }

            self.swap(index, parent_index);
            index = parent_index;
        }
    }

    fn sift_down(&mut self, element_index: usize) {
        let size = self.items.len();
        let mut index = element_index;

        loop {
            let left_child_index = 2 * index + 1;
            if left_child_index >= size {
                break;
            }

            let right_child_index = left_child_index + 1;
            let mut child_index = left_child_index;
            if right_child_index < size
                && self.items[right_child_index] < self.items[left_child_index]
            {
                child_index = right_child_index;
            }

            if self.items[index] <= self.items[child_index] {
                break;
            }

            self.swap(index, child_index);
            index = child_index;
        }
    }
}

impl<T> Default for BinaryHeap<T>
where
    T: HeapItem,
{
    fn default() -> Self {
        Self::new()
    }
}

#[inline(always)]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}
