use std::alloc::{handle_alloc_error, Layout};
use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Deref;

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Growable list of integers that doubles its storage when full.
#[derive(Clone)]
pub struct IntVec {
    storage: Vec<i32>,
    len: usize,
}

impl IntVec {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            storage: allocate(capacity.get()),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.storage[..self.len]
    }

    pub fn push(&mut self, value: i32) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.storage[self.len] = value;
        self.len += 1;
    }

    pub fn sort(&mut self) {
        self.storage[..self.len].sort_unstable();
    }

    /// Counts `needle`, stopping at the first greater value. Only correct
    /// on sorted values.
    pub fn count_sorted(&self, needle: i32) -> usize {
        let mut count = 0;
        for &value in self.iter() {
            if value > needle {
                break;
            }
            if value == needle {
                count += 1;
            }
        }
        count
    }

    fn grow(&mut self) {
        let capacity = self.capacity().saturating_mul(2);
        log::trace!("growing from {} to {capacity} slots", self.capacity());
        let mut storage = allocate(capacity);
        storage[..self.len].copy_from_slice(self.as_slice());
        self.storage = storage;
    }
}

/// Zeroed storage of exactly `capacity` slots. Aborts if the allocation fails.
fn allocate(capacity: usize) -> Vec<i32> {
    let mut storage = Vec::new();
    if let Err(error) = storage.try_reserve_exact(capacity) {
        log::error!("memory allocation failed: {error}");
        let layout = Layout::array::<i32>(capacity).unwrap_or_else(|_| Layout::new::<i32>());
        handle_alloc_error(layout);
    }
    storage.resize(capacity, 0);
    storage
}

impl Default for IntVec {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for IntVec {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl PartialEq for IntVec {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntVec {}

impl Extend<i32> for IntVec {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<i32> for IntVec {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl fmt::Debug for IntVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for IntVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for value in self.iter() {
            write!(f, "{value}, ")?;
        }
        write!(f, "]")
    }
}
