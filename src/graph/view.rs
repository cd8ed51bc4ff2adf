//! View selection: runtime flag sets and compile-time view sets
//!
//! A graph exposes any non-empty subset of {CSR, CSC, COO} except CSR and
//! CSC together. The subset is chosen either at compile time through a
//! [`ViewSet`] type such as `Views<On, Off, On>`, or at configuration time
//! through [`ViewFlags`] and [`DynGraph`](super::DynGraph).

use crate::error::{Error, Result};
use crate::formats::SparseFormat;
use std::fmt;
use std::marker::PhantomData;

/// Set of graph views, as bit flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewFlags(u8);

impl ViewFlags {
    /// No views
    pub const NONE: Self = Self(0);
    /// Compressed sparse row view
    pub const CSR: Self = Self(1);
    /// Compressed sparse column view
    pub const CSC: Self = Self(1 << 1);
    /// Coordinate view
    pub const COO: Self = Self(1 << 2);

    const ALL_BITS: u8 = 0b111;

    /// Raw bit representation
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a flag set from raw bits, rejecting unknown bits
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL_BITS != 0 {
            None
        } else {
            Some(Self(bits))
        }
    }

    /// Build a flag set from three enable bits
    pub const fn from_toggles(csr: bool, csc: bool, coo: bool) -> Self {
        Self((csr as u8) | ((csc as u8) << 1) | ((coo as u8) << 2))
    }

    /// Union of two flag sets
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if every view in `other` is in `self`
    #[inline]
    pub const fn has(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no view is selected
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the set can be built in a single pass
    pub const fn is_valid(self) -> bool {
        !self.is_empty() && !self.has(Self::CSR.union(Self::CSC))
    }

    /// Layouts selected by these flags, in flag order
    pub fn formats(self) -> impl Iterator<Item = SparseFormat> {
        SparseFormat::ALL
            .into_iter()
            .filter(move |format| self.has(format.flag()))
    }

    /// Check the set can be built, naming the reason when it cannot
    pub fn validate(self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::unsupported_views(
                self,
                "at least one view must be requested",
            ));
        }
        if self.has(Self::CSR.union(Self::CSC)) {
            return Err(Error::unsupported_views(
                self,
                "CSC and CSR views are not supported together",
            ));
        }
        Ok(())
    }
}

impl std::ops::BitOr for ViewFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for ViewFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for ViewFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, format) in self.formats().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{format}")?;
        }
        Ok(())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::On {}
    impl Sealed for super::Off {}
}

/// Type-level switch for one view
///
/// `Slot<T>` is the storage a graph keeps for the view: the record itself
/// when enabled, `()` when disabled.
pub trait Toggle: sealed::Sealed + Send + Sync + 'static {
    /// Whether the view is present
    const ENABLED: bool;

    /// Storage for a record of type `T`
    type Slot<T>;

    /// Produce the slot, running `make` only when the view is enabled
    fn materialize<T>(make: impl FnOnce() -> Result<T>) -> Result<Self::Slot<T>>;

    /// Borrow the record if the view is enabled
    fn get<T>(slot: &Self::Slot<T>) -> Option<&T>;
}

/// Enabled view
#[derive(Debug, Clone, Copy, Default)]
pub struct On;

/// Disabled view
#[derive(Debug, Clone, Copy, Default)]
pub struct Off;

impl Toggle for On {
    const ENABLED: bool = true;
    type Slot<T> = T;

    #[inline]
    fn materialize<T>(make: impl FnOnce() -> Result<T>) -> Result<T> {
        make()
    }

    #[inline]
    fn get<T>(slot: &T) -> Option<&T> {
        Some(slot)
    }
}

impl Toggle for Off {
    const ENABLED: bool = false;
    type Slot<T> = ();

    #[inline]
    fn materialize<T>(_make: impl FnOnce() -> Result<T>) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn get<T>(_slot: &()) -> Option<&T> {
        None
    }
}

/// Compile-time view set
pub trait ViewSet: Send + Sync + 'static {
    /// CSR switch
    type Csr: Toggle;
    /// CSC switch
    type Csc: Toggle;
    /// COO switch
    type Coo: Toggle;

    /// The same set as runtime flags
    const FLAGS: ViewFlags;
}

/// View set marker: `Views<Csr, Csc, Coo>` with each parameter `On` or `Off`
pub struct Views<Csr, Csc, Coo>(PhantomData<(Csr, Csc, Coo)>);

impl<A: Toggle, B: Toggle, C: Toggle> ViewSet for Views<A, B, C> {
    type Csr = A;
    type Csc = B;
    type Coo = C;

    const FLAGS: ViewFlags = ViewFlags::from_toggles(A::ENABLED, B::ENABLED, C::ENABLED);
}

/// CSR only
pub type CsrView = Views<On, Off, Off>;
/// CSC only
pub type CscView = Views<Off, On, Off>;
/// COO only
pub type CooView = Views<Off, Off, On>;
/// CSR and COO
pub type CsrCooViews = Views<On, Off, On>;
/// CSC and COO
pub type CscCooViews = Views<Off, On, On>;
