//! Iterator plumbing for [`Volume`].
//!
//! All traversal follows the layout order defined by the container:
//! plane-major, then row, then column. Callers may rely on this for
//! deterministic serialization and comparison.

use num_integer::div_rem;

use crate::volume::Volume;

impl<'a, T, E> IntoIterator for &'a Volume<T, E> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Volume<T, E> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> IntoIterator for Volume<T, E> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_cells().into_iter()
    }
}

impl<T, E> Volume<T, E> {
    /// Iterates over every cell coordinate in layout order.
    ///
    /// The iterator owns its dimensions and does not borrow the volume, so
    /// it can drive mutation:
    ///
    /// ```
    /// use cuboid::Volume;
    ///
    /// let mut vol: Volume<usize> = Volume::with_dims(2, 2, 2);
    /// for (p, r, c) in vol.coords() {
    ///     *vol.at_mut(p, r, c) = p + r + c;
    /// }
    /// assert_eq!(*vol.at(1, 1, 1), 3);
    /// ```
    pub fn coords(&self) -> Coords {
        Coords {
            height: self.height(),
            width: self.width(),
            next: 0,
            total: self.len(),
        }
    }
}

/// Iterator over `(plane, row, col)` coordinates in layout order.
///
/// Created by [`Volume::coords`].
#[derive(Clone, Debug)]
pub struct Coords {
    height: usize,
    width: usize,
    next: usize,
    total: usize,
}

impl Iterator for Coords {
    type Item = (usize, usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let (plane, rem) = div_rem(self.next, self.height * self.width);
        let (row, col) = div_rem(rem, self.width);
        self.next += 1;
        Some((plane, row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Coords {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_follow_layout_order() {
        let vol: Volume<u8> = Volume::with_dims(2, 2, 3);
        let coords: Vec<_> = vol.coords().collect();
        assert_eq!(coords.len(), vol.len());
        assert_eq!(coords[0], (0, 0, 0));
        assert_eq!(coords[1], (0, 0, 1));
        assert_eq!(coords[3], (0, 1, 0));
        assert_eq!(coords[6], (1, 0, 0));
        for (linear, (p, r, c)) in vol.coords().enumerate() {
            assert_eq!(vol.index_of(p, r, c), linear);
        }
    }

    #[test]
    fn coords_of_empty_volume_is_empty() {
        let vol: Volume<u8> = Volume::new();
        assert_eq!(vol.coords().count(), 0);
    }

    #[test]
    fn borrowed_and_owned_iteration_agree() {
        let mut vol: Volume<i32> = Volume::with_dims(1, 2, 2);
        vol.fill_from(0..4);

        let borrowed: Vec<i32> = (&vol).into_iter().copied().collect();
        for cell in &mut vol {
            *cell += 10;
        }
        let owned: Vec<i32> = vol.into_iter().collect();

        assert_eq!(borrowed, vec![0, 1, 2, 3]);
        assert_eq!(owned, vec![10, 11, 12, 13]);
    }
}
