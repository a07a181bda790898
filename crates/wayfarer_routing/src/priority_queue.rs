const INITIAL_CAPACITY: usize = 2;

/// Array-backed binary min-heap.
///
/// The smallest element according to `Ord` is always at the root. There is
/// no decrease-key and no removal by value: callers that improve the
/// priority of an element push it again and skip the stale copy when it
/// comes out of the queue.
///
/// `capacity` is a logical bound: when the queue holds that many elements
/// the bound doubles and the backing storage reserves at least as much. It
/// never shrinks.
#[derive(Debug, Clone)]
pub struct HeapPriorityQueue<T: Ord> {
    heap: Vec<T>,
    capacity: usize,
}

impl<T: Ord> HeapPriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Logical bound on the number of elements before the next doubling.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn push(&mut self, value: T) {
        if self.heap.len() == self.capacity {
            self.grow();
        }

        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        // The last leaf becomes the root
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        min
    }

    /// Drains the queue, smallest element first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.len());
        while let Some(element) = self.pop() {
            elements.push(element);
        }
        elements
    }

    fn grow(&mut self) {
        let additional = self.capacity;
        self.heap.reserve_exact(additional);
        self.capacity += additional;
    }

    fn sift_up(&mut self, element_index: usize) {
        let mut index = element_index;

        while index > 0 {
            let parent_index = (index - 1) >> 1;
            if self.heap[parent_index] <= self.heap[index] {
                break;
            }

            self.heap.swap(index, parent_index);
            index = parent_index;
        }
    }

    fn sift_down(&mut self, element_index: usize) {
        let size = self.heap.len();
        let mut index = element_index;

        loop {
            let left_child_index = (index << 1) + 1;
            if left_child_index >= size {
                break;
            }

            let right_child_index = left_child_index + 1;

            let mut child_index = left_child_index;
            if right_child_index < size
                && self.heap[right_child_index] < self.heap[left_child_index]
            {
                child_index = right_child_index;
            }

            if self.heap[index] <= self.heap[child_index] {
                break;
            }

            self.heap.swap(index, child_index);
            index = child_index;
        }
    }
}

impl<T: Ord> Default for HeapPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for HeapPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for HeapPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = HeapPriorityQueue::new();
        queue.extend(iter);
        queue
    }
}
