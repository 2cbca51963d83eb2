//! Cross-type conversion and structure-preserving transformation.

use num_traits::AsPrimitive;

use crate::volume::Volume;

impl<T, E> Volume<T, E> {
    /// Converts every cell to `R` with `as`-cast semantics, producing a new
    /// volume of identical dimensions.
    ///
    /// The conversion is the primitive numeric cast: widening is exact,
    /// narrowing truncates, and float-to-int saturates, exactly as the `as`
    /// operator behaves. Lossy conversions are accepted silently; there is
    /// no error channel. The result binds a fresh default strategy of type
    /// `F`, independent of this volume's strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuboid::Volume;
    ///
    /// let wide: Volume<i64> = Volume::filled(1, 1, 2, 300);
    /// let narrow: Volume<u8> = wide.cast();
    /// assert_eq!(narrow.as_slice(), &[44, 44]); // 300 mod 256
    /// ```
    pub fn cast<R, F>(&self) -> Volume<R, F>
    where
        T: AsPrimitive<R>,
        R: Copy + 'static,
        F: Default,
    {
        let cells = self.iter().map(|cell| cell.as_()).collect();
        Volume::from_parts(
            self.depth(),
            self.height(),
            self.width(),
            cells,
            F::default(),
        )
    }
}

/// Applies `map` to every cell of `source` in layout order, producing a new
/// volume of identical dimensions over the mapped element type.
///
/// `source` is untouched. The result binds a fresh default strategy of type
/// `RE`, independent of the source's strategy. The mapper is `FnMut`, so a
/// stateful closure (e.g. a sequential counter) is permitted; it observes
/// cells exactly once each, in layout order.
///
/// # Examples
///
/// ```
/// use cuboid::{transform, Volume};
///
/// let vol: Volume<i32> = Volume::filled(1, 2, 2, 3);
/// let doubled: Volume<i64> = transform(&vol, |&cell| i64::from(cell) * 2);
/// assert_eq!(doubled.as_slice(), &[6, 6, 6, 6]);
/// assert_eq!(*vol.at(0, 0, 0), 3);
/// ```
pub fn transform<T, E, R, RE, F>(source: &Volume<T, E>, mut map: F) -> Volume<R, RE>
where
    F: FnMut(&T) -> R,
    RE: Default,
{
    let cells = source.iter().map(|cell| map(cell)).collect();
    Volume::from_parts(
        source.depth(),
        source.height(),
        source.width(),
        cells,
        RE::default(),
    )
}
