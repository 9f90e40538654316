//! Handles to refer to mesh elements.
//!
//! All mesh elements are stored in arenas (see [`DenseMap`][crate::map::DenseMap])
//! and every cross reference between them is a handle, i.e. a typed index
//! into the arena of the referenced element kind.

use std::{cmp, fmt, hash::Hash};

use static_assertions::assert_eq_size;


/// The integer type used as index inside of all handles.
///
/// By default, this is `u32`, which allows for roughly 4 billion elements per
/// element kind. With the `large-handle` feature, this is `u64`.
#[cfg(not(feature = "large-handle"))]
#[allow(non_camel_case_types)]
pub type hsize = u32;

/// The integer type used as index inside of all handles.
#[cfg(feature = "large-handle")]
#[allow(non_camel_case_types)]
pub type hsize = u64;

/// The largest index a handle can hold. `hsize::max_value()` itself is
/// reserved to encode "no handle" inside of `Opt<_>`.
pub(crate) const MAX_INDEX: hsize = hsize::max_value() - 1;


/// Types that are handles to some mesh element.
pub trait Handle: 'static + Copy + fmt::Debug + Eq + Ord + Hash {
    /// Creates a handle from the given index.
    fn new(idx: hsize) -> Self;

    /// Returns the index of this handle.
    fn idx(&self) -> hsize;

    /// Creates a handle from the given `usize`.
    ///
    /// # Panics
    ///
    /// Panics if `raw` does not fit into `hsize` or collides with the value
    /// reserved for "no handle".
    #[inline(always)]
    fn from_usize(raw: usize) -> Self {
        assert!(
            raw <= MAX_INDEX as usize,
            "handle index {} does not fit into `hsize`",
            raw,
        );
        Self::new(raw as hsize)
    }

    /// Returns the index of this handle as `usize`.
    #[inline(always)]
    fn to_usize(&self) -> usize {
        self.idx() as usize
    }
}

macro_rules! make_handle_type {
    ($(#[$attr:meta])* $name:ident = $short:expr;) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(hsize);

        impl Handle for $name {
            #[inline(always)]
            fn new(idx: hsize) -> Self {
                $name(idx)
            }

            #[inline(always)]
            fn idx(&self) -> hsize {
                self.0
            }
        }

        // The all-ones index is never handed out (see `Handle::from_usize`),
        // so we can use it as niche for `Opt<$name>`.
        impl optional::Noned for $name {
            #[inline(always)]
            fn is_none(&self) -> bool {
                self.0 == hsize::max_value()
            }

            #[inline(always)]
            fn get_none() -> Self {
                $name(hsize::max_value())
            }
        }

        impl optional::OptEq for $name {
            #[inline(always)]
            fn opt_eq(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}{}", $short, self.0)
            }
        }

        assert_eq_size!($name, hsize);
    }
}

make_handle_type! {
    /// Handle to refer to a vertex. The index is the vertex id: the position
    /// of the vertex' coordinate group in the input array.
    VertexHandle = "V";
}

make_handle_type! {
    /// Handle to refer to a half edge. Half edges are stored in the order of
    /// the input triangles, three per face.
    HalfEdgeHandle = "HE";
}

make_handle_type! {
    /// Handle to refer to a face.
    FaceHandle = "F";
}

impl VertexHandle {
    /// Converts a signed vertex id as used at the render boundary into a
    /// handle. Negative ids mean "no selection" and result in `None`. Ids
    /// too large for `hsize` saturate to the largest handle index, which no mesh
    /// contains, so queries report them as out of range.
    ///
    /// ```
    /// use heds::{Handle, VertexHandle};
    ///
    /// assert_eq!(VertexHandle::from_signed(-1), None);
    /// assert_eq!(VertexHandle::from_signed(3), Some(VertexHandle::new(3)));
    /// ```
    pub fn from_signed(id: i64) -> Option<Self> {
        if id < 0 {
            None
        } else {
            Some(Self::new(cmp::min(id as u64, MAX_INDEX as u64) as hsize))
        }
    }
}


#[cfg(test)]
mod tests {
    use optional::{Noned, Optioned as Opt};
    use super::*;

    #[test]
    fn debug_output() {
        assert_eq!(format!("{:?}", VertexHandle::new(7)), "V7");
        assert_eq!(format!("{:?}", HalfEdgeHandle::new(0)), "HE0");
        assert_eq!(format!("{:?}", FaceHandle::new(12)), "F12");
    }

    #[test]
    fn none_niche() {
        assert!(FaceHandle::get_none().is_none());
        assert!(!FaceHandle::new(0).is_none());

        let opt: Opt<HalfEdgeHandle> = Opt::none();
        assert!(opt.is_none());
        let opt = Opt::some(HalfEdgeHandle::new(3));
        assert_eq!(opt.into_option(), Some(HalfEdgeHandle::new(3)));
    }

    #[test]
    #[should_panic]
    fn reserved_index() {
        VertexHandle::from_usize(hsize::max_value() as usize);
    }
}
