//! Opaque handles crossing the engine boundary.
//!
//! A handle is an identity, nothing more: two handles are the same node if and
//! only if they compare equal. No arithmetic or dereference is offered here;
//! only an engine implementation converts a handle back into its raw form.

use std::fmt;

/// Handle to an engine-owned object (node, context or config).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativePtr(u64);

impl NativePtr {
    pub const NULL: NativePtr = NativePtr(0);

    /// Wrap a raw engine value. Intended for engine implementations only.
    #[inline]
    pub const fn from_raw(raw: u64) -> NativePtr {
        NativePtr(raw)
    }

    /// Unwrap into the raw engine value. Intended for engine implementations only.
    #[inline]
    pub const fn into_raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }

    /// `None` for the null handle.
    #[inline]
    pub const fn non_null(self) -> Option<NativePtr> {
        if self.is_null() { None } else { Some(self) }
    }
}

impl fmt::Debug for NativePtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("NativePtr(null)")
        } else {
            write!(f, "NativePtr({:#x})", self.0)
        }
    }
}

/// Handle to a string buffer owned by the interop layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeString(u64);

impl NativeString {
    #[inline]
    pub const fn from_raw(raw: u64) -> NativeString {
        NativeString(raw)
    }

    #[inline]
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

/// Handle to a packed sequence of node handles owned by the interop layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeArray(u64);

impl NativeArray {
    #[inline]
    pub const fn from_raw(raw: u64) -> NativeArray {
        NativeArray(raw)
    }

    #[inline]
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

/// One positional argument of a create/update entry point.
///
/// Strings and node sequences are only accepted in their marshalled form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NativeArg {
    Node(NativePtr),
    Array(NativeArray),
    Str(NativeString),
    Bool(bool),
    Int(i32),
    Double(f64),
}
