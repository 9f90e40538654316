//! Arena storage for mesh elements, addressed by handles.

use std::{
    fmt,
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use stable_vec::StableVec;

use crate::handle::{hsize, Handle};


/// A map from handles to values that uses a simple contiguous vector to store
/// the values.
///
/// The handle is simply used as an index into the underlying vector. As all
/// elements of a [`HalfEdgeMesh`][crate::HalfEdgeMesh] are created with
/// sequentially increasing IDs, this is the fastest storage for them. The map
/// never removes elements: a mesh is discarded as a whole.
#[derive(Clone)]
pub struct DenseMap<H: Handle, T> {
    vec: StableVec<T>,
    _dummy: PhantomData<H>,
}

impl<H: Handle, T> DenseMap<H, T> {
    /// Creates an empty `DenseMap`.
    pub fn new() -> Self {
        Self {
            vec: StableVec::new(),
            _dummy: PhantomData,
        }
    }

    /// Creates an empty `DenseMap` with space for `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            vec: StableVec::with_capacity(cap),
            _dummy: PhantomData,
        }
    }

    /// Appends the element and returns its handle.
    pub fn push(&mut self, elem: T) -> H {
        H::from_usize(self.vec.push(elem))
    }

    /// Returns the handle the next `push` will return.
    pub fn next_push_handle(&self) -> H {
        H::from_usize(self.vec.next_push_index())
    }

    pub fn num_elements(&self) -> hsize {
        self.vec.num_elements() as hsize
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn contains_handle(&self, handle: H) -> bool {
        self.vec.has_element_at(handle.to_usize())
    }

    pub fn get_ref(&self, handle: H) -> Option<&T> {
        self.vec.get(handle.to_usize())
    }

    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        self.vec.get_mut(handle.to_usize())
    }

    /// Iterates over all `(handle, value)` pairs in handle order.
    pub fn iter(&self) -> Iter<'_, H, T> {
        Iter {
            map: self,
            next: 0,
        }
    }

    /// Iterates over all handles in order.
    pub fn handles(&self) -> impl Iterator<Item = H> + '_ {
        self.iter().map(|(h, _)| h)
    }

    /// Iterates over all values in handle order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<H: Handle, T> Default for DenseMap<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle, T> Index<H> for DenseMap<H, T> {
    type Output = T;

    fn index(&self, handle: H) -> &Self::Output {
        match self.get_ref(handle) {
            Some(v) => v,
            None => panic!("no element for {:?} in `DenseMap`", handle),
        }
    }
}

impl<H: Handle, T> IndexMut<H> for DenseMap<H, T> {
    fn index_mut(&mut self, handle: H) -> &mut Self::Output {
        match self.get_mut(handle) {
            Some(v) => v,
            None => panic!("no element for {:?} in `DenseMap`", handle),
        }
    }
}

impl<H: Handle, T: fmt::Debug> fmt::Debug for DenseMap<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}


/// Iterator over `(handle, &value)` pairs of a [`DenseMap`].
#[derive(Debug)]
pub struct Iter<'map, H: Handle, T> {
    map: &'map DenseMap<H, T>,
    next: usize,
}

impl<'map, H: Handle, T> Iterator for Iter<'map, H, T> {
    type Item = (H, &'map T);

    fn next(&mut self) -> Option<Self::Item> {
        // Elements are never removed, so there are no holes to skip.
        let idx = self.next;
        let value = self.map.vec.get(idx)?;
        self.next += 1;
        Some((H::from_usize(idx), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.map.vec.num_elements() - self.next;
        (len, Some(len))
    }
}

impl<H: Handle, T> ExactSizeIterator for Iter<'_, H, T> {}
impl<H: Handle, T> FusedIterator for Iter<'_, H, T> {}
