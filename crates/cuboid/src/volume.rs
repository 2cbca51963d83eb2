//! The dense three-dimensional volume container.

use std::ops::{Index, IndexMut};

use num_integer::div_rem;

use crate::eq::{CellEq, NativeEq};
use crate::error::VolumeError;

/// A generic three-dimensional dense array with value semantics and a
/// type-bound equality strategy.
///
/// Cells are stored in one contiguous owned buffer in row-major order with
/// the plane axis slowest-varying:
/// `linear = plane * height * width + row * width + col`. Every operation
/// that produces a new volume (clone, [`slice`](Volume::slice),
/// [`cast`](Volume::cast), [`transform`](crate::transform)) allocates fresh
/// independent storage; nothing ever aliases the source buffer.
///
/// The second type parameter is the equality strategy used by `==`, a
/// [`CellEq`] value bound at construction. It defaults to [`NativeEq`]
/// (the element type's own `PartialEq`), and because it is a type
/// parameter, volumes with different strategies are different types.
///
/// # Examples
///
/// ```
/// use cuboid::Volume;
///
/// let mut vol = Volume::filled(2, 3, 4, 0i32);
/// assert_eq!((vol.depth(), vol.height(), vol.width()), (2, 3, 4));
///
/// vol[(1, 2, 3)] = 7;
/// assert_eq!(*vol.at(1, 2, 3), 7);
/// ```
#[derive(Clone, Debug)]
pub struct Volume<T, E = NativeEq> {
    depth: usize,
    height: usize,
    width: usize,
    cells: Vec<T>,
    eq: E,
}

/// Panics unless all three construction dimensions are positive.
fn check_dims(depth: usize, height: usize, width: usize) {
    assert!(
        depth > 0 && height > 0 && width > 0,
        "volume dimensions must all be positive, got {depth}x{height}x{width}"
    );
}

impl<T> Volume<T> {
    /// Creates the empty volume: all dimensions zero, no allocation.
    ///
    /// Constructors produce a volume with the default [`NativeEq`]
    /// strategy; bind a different one with
    /// [`with_strategy`](Volume::with_strategy).
    pub fn new() -> Self {
        Self {
            depth: 0,
            height: 0,
            width: 0,
            cells: Vec::new(),
            eq: NativeEq,
        }
    }

    /// Creates a `depth x height x width` volume with every cell set to
    /// `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    pub fn with_dims(depth: usize, height: usize, width: usize) -> Self
    where
        T: Default,
    {
        check_dims(depth, height, width);
        let cells = (0..depth * height * width).map(|_| T::default()).collect();
        Self {
            depth,
            height,
            width,
            cells,
            eq: NativeEq,
        }
    }

    /// Creates a `depth x height x width` volume with every cell a clone of
    /// `value`.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuboid::Volume;
    ///
    /// let vol = Volume::filled(2, 2, 2, 'f');
    /// assert!(vol.iter().all(|&c| c == 'f'));
    /// ```
    pub fn filled(depth: usize, height: usize, width: usize, value: T) -> Self
    where
        T: Clone,
    {
        check_dims(depth, height, width);
        Self {
            depth,
            height,
            width,
            cells: vec![value; depth * height * width],
            eq: NativeEq,
        }
    }

    /// Fallible variant of [`with_dims`](Volume::with_dims).
    ///
    /// On allocation failure returns [`VolumeError::Alloc`]; no partially
    /// constructed volume exists in that case.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero. Zero dimensions are a contract
    /// violation, not a resource failure.
    pub fn try_with_dims(depth: usize, height: usize, width: usize) -> Result<Self, VolumeError>
    where
        T: Default,
    {
        check_dims(depth, height, width);
        let count = depth * height * width;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|source| VolumeError::Alloc {
                cells: count,
                source,
            })?;
        cells.extend((0..count).map(|_| T::default()));
        Ok(Self {
            depth,
            height,
            width,
            cells,
            eq: NativeEq,
        })
    }

    /// Fallible variant of [`filled`](Volume::filled).
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    pub fn try_filled(
        depth: usize,
        height: usize,
        width: usize,
        value: T,
    ) -> Result<Self, VolumeError>
    where
        T: Clone,
    {
        check_dims(depth, height, width);
        let count = depth * height * width;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|source| VolumeError::Alloc {
                cells: count,
                source,
            })?;
        cells.resize(count, value);
        Ok(Self {
            depth,
            height,
            width,
            cells,
            eq: NativeEq,
        })
    }
}

impl<T, E> Volume<T, E> {
    /// Rebinds the equality strategy, consuming `self`.
    ///
    /// The strategy is part of the volume's type, so this changes the type:
    /// the result cannot be compared against the original with `==`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuboid::{EpsilonEq, Volume};
    ///
    /// let a = Volume::filled(1, 1, 1, 1.0f64).with_strategy(EpsilonEq::new(1e-3));
    /// let b = Volume::filled(1, 1, 1, 1.0004f64).with_strategy(EpsilonEq::new(1e-3));
    /// assert!(a == b);
    /// ```
    pub fn with_strategy<E2>(self, eq: E2) -> Volume<T, E2> {
        Volume {
            depth: self.depth,
            height: self.height,
            width: self.width,
            cells: self.cells,
            eq,
        }
    }

    /// Assembles a volume from already-validated parts.
    pub(crate) fn from_parts(
        depth: usize,
        height: usize,
        width: usize,
        cells: Vec<T>,
        eq: E,
    ) -> Self {
        debug_assert_eq!(cells.len(), depth * height * width);
        Self {
            depth,
            height,
            width,
            cells,
            eq,
        }
    }

    /// Number of planes (the slowest-varying axis).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of rows per plane.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`depth * height * width`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for the empty volume (all dimensions zero).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The equality strategy bound to this volume.
    pub fn strategy(&self) -> &E {
        &self.eq
    }

    /// Unchecked linearization; callers validate coordinates first.
    fn linear(&self, plane: usize, row: usize, col: usize) -> usize {
        (plane * self.height + row) * self.width + col
    }

    /// Panics unless `(plane, row, col)` addresses a cell of this volume.
    fn check_cell(&self, plane: usize, row: usize, col: usize) {
        assert!(
            plane < self.depth && row < self.height && col < self.width,
            "cell ({plane}, {row}, {col}) out of bounds: [0, {}) x [0, {}) x [0, {})",
            self.depth,
            self.height,
            self.width
        );
    }

    /// Linear index of the cell at `(plane, row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is out of range.
    pub fn index_of(&self, plane: usize, row: usize, col: usize) -> usize {
        self.check_cell(plane, row, col);
        self.linear(plane, row, col)
    }

    /// Inverse of [`index_of`](Volume::index_of): the `(plane, row, col)`
    /// coordinates of a linear index.
    ///
    /// # Panics
    ///
    /// Panics if `linear >= self.len()`.
    pub fn coords_of(&self, linear: usize) -> (usize, usize, usize) {
        assert!(
            linear < self.cells.len(),
            "linear index {linear} out of bounds: [0, {})",
            self.cells.len()
        );
        let (plane, rem) = div_rem(linear, self.height * self.width);
        let (row, col) = div_rem(rem, self.width);
        (plane, row, col)
    }

    /// Shared reference to the cell at `(plane, row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is out of range. Out-of-range access is a
    /// caller bug; indices are never clamped or wrapped.
    pub fn at(&self, plane: usize, row: usize, col: usize) -> &T {
        self.check_cell(plane, row, col);
        &self.cells[self.linear(plane, row, col)]
    }

    /// Mutable reference to the cell at `(plane, row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is out of range.
    pub fn at_mut(&mut self, plane: usize, row: usize, col: usize) -> &mut T {
        self.check_cell(plane, row, col);
        let i = self.linear(plane, row, col);
        &mut self.cells[i]
    }

    /// All cells as one flat slice in layout order (plane-major, then row,
    /// then column).
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// All cells as one flat mutable slice in layout order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Iterates over cells in layout order.
    ///
    /// The borrow ties the iterator to the volume: clearing, reassigning,
    /// or otherwise mutating the volume first is rejected at compile time.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterates mutably over cells in layout order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// Consumes the volume, returning the backing store.
    pub(crate) fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// Extracts the inclusive sub-range
    /// `[plane1..=plane2] x [row1..=row2] x [col1..=col2]` as a new,
    /// independently owned volume of dimensions
    /// `(plane2-plane1+1, row2-row1+1, col2-col1+1)`.
    ///
    /// Cells are copied in plane-major, row, column order; the result
    /// carries a clone of this volume's equality strategy.
    ///
    /// # Panics
    ///
    /// Panics if any bound is out of range or any upper bound is below its
    /// lower bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuboid::Volume;
    ///
    /// let mut vol: Volume<i32> = Volume::with_dims(2, 5, 5);
    /// vol.fill_from(0..50);
    /// let sub = vol.slice(1, 1, 0, 1, 0, 2);
    /// assert_eq!((sub.depth(), sub.height(), sub.width()), (1, 2, 3));
    /// assert_eq!(sub.as_slice(), &[30, 31, 32, 35, 36, 37]);
    /// ```
    pub fn slice(
        &self,
        plane1: usize,
        plane2: usize,
        row1: usize,
        row2: usize,
        col1: usize,
        col2: usize,
    ) -> Self
    where
        T: Clone,
        E: Clone,
    {
        self.check_cell(plane1, row1, col1);
        self.check_cell(plane2, row2, col2);
        assert!(
            plane2 >= plane1 && row2 >= row1 && col2 >= col1,
            "inverted slice bounds: [{plane1}, {plane2}] x [{row1}, {row2}] x [{col1}, {col2}]"
        );

        let depth = plane2 - plane1 + 1;
        let height = row2 - row1 + 1;
        let width = col2 - col1 + 1;
        let mut cells = Vec::with_capacity(depth * height * width);
        for plane in plane1..=plane2 {
            for row in row1..=row2 {
                for col in col1..=col2 {
                    cells.push(self.cells[self.linear(plane, row, col)].clone());
                }
            }
        }
        Self {
            depth,
            height,
            width,
            cells,
            eq: self.eq.clone(),
        }
    }

    /// Overwrites every cell with a clone of `value`. Dimensions are
    /// untouched.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    /// Overwrites cells in layout order with values drawn from `source`,
    /// converting each via `Into<T>`.
    ///
    /// Stops as soon as either every cell has been overwritten or the
    /// source is exhausted. A short source leaves the tail of the volume at
    /// its prior values; a long source has its excess ignored. The volume
    /// is never resized to match the source length.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuboid::Volume;
    ///
    /// let mut vol = Volume::filled(1, 2, 2, 9u16);
    /// vol.fill_from([1u8, 2, 3]);
    /// assert_eq!(vol.as_slice(), &[1, 2, 3, 9]);
    /// ```
    pub fn fill_from<I>(&mut self, source: I)
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        for (cell, value) in self.cells.iter_mut().zip(source) {
            *cell = value.into();
        }
    }

    /// Exchanges contents and dimensions with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Releases the backing store and resets all dimensions to zero.
    ///
    /// This is the same empty state produced by [`new`](Volume::new); the
    /// equality strategy is retained.
    pub fn clear(&mut self) {
        self.cells = Vec::new();
        self.depth = 0;
        self.height = 0;
        self.width = 0;
    }
}

impl<T, E: Default> Default for Volume<T, E> {
    fn default() -> Self {
        Self {
            depth: 0,
            height: 0,
            width: 0,
            cells: Vec::new(),
            eq: E::default(),
        }
    }
}

impl<T, E> Index<(usize, usize, usize)> for Volume<T, E> {
    type Output = T;

    fn index(&self, (plane, row, col): (usize, usize, usize)) -> &T {
        self.at(plane, row, col)
    }
}

impl<T, E> IndexMut<(usize, usize, usize)> for Volume<T, E> {
    fn index_mut(&mut self, (plane, row, col): (usize, usize, usize)) -> &mut T {
        self.at_mut(plane, row, col)
    }
}

impl<T, E: CellEq<T>> PartialEq for Volume<T, E> {
    /// Cell-by-cell comparison in layout order under the left operand's
    /// strategy, short-circuiting on the first mismatch. Two empty volumes
    /// are equal.
    ///
    /// # Panics
    ///
    /// Panics if the operands' dimensions differ; comparing volumes of
    /// different shapes is a contract violation, never `false`.
    fn eq(&self, other: &Self) -> bool {
        assert!(
            self.depth == other.depth && self.height == other.height && self.width == other.width,
            "cannot compare volumes of different dimensions: {}x{}x{} vs {}x{}x{}",
            self.depth,
            self.height,
            self.width,
            other.depth,
            other.height,
            other.width
        );
        self.cells
            .iter()
            .zip(&other.cells)
            .all(|(a, b)| self.eq.eq(a, b))
    }
}
