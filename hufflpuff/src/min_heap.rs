//! Array backed binary min-heap, the priority queue used to build the huffman tree.
//!
//! Ties between equal weights are not broken in any particular way.

pub const INITIAL_CAPACITY: usize = 512;

pub trait Weighted {
    fn weight(&self) -> u32;
}

#[derive(Debug)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T: Weighted> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            elements: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn insert(&mut self, value: T) {
        if self.elements.len() == self.elements.capacity() {
            // double the backing storage
            self.elements.reserve_exact(self.elements.capacity().max(1));
        }
        self.elements.push(value);

        // move up while the parent is heavier
        let mut pos = self.elements.len() - 1;
        while pos != 0 {
            let parent = parent(pos);
            if self.elements[parent].weight() <= self.elements[pos].weight() {
                break;
            }
            self.elements.swap(parent, pos);
            pos = parent;
        }
    }

    /// removes the element with the smallest weight, `None` if the heap is empty
    pub fn extract_min(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop();

        // move the former last element down, always towards the lighter child
        let len = self.elements.len();
        let mut pos = 0;
        let mut child = left(pos);
        while child < len {
            if child + 1 < len && self.elements[child].weight() > self.elements[child + 1].weight() {
                child += 1;
            }
            if self.elements[pos].weight() < self.elements[child].weight() {
                break;
            }
            self.elements.swap(pos, child);
            pos = child;
            child = left(pos);
        }
        min
    }
}

impl<T: Weighted> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn parent(pos: usize) -> usize {
    (pos - 1) / 2
}

#[inline]
fn left(pos: usize) -> usize {
    2 * pos + 1
}
