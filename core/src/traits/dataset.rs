use crate::prelude::*;

/// A candidate record collection.
///
/// Sequence types expose their items as an indexable slice. Scalars implement
/// the trait too but report that they are not a sequence, so passing one to a
/// bulk statement builder fails with [`BatchError::NotAnArray`] instead of not
/// compiling. A reference or box around a sequence is dereferenced once.
///
/// [`BatchError::NotAnArray`]: crate::error::BatchError::NotAnArray
pub trait Dataset {
    type Item;

    /// The items of the collection, or `None` if this is not a sequence.
    fn as_sequence(&self) -> Option<&[Self::Item]>;
}

/// The sequence types themselves. Only these are dereferenced through a
/// reference, keeping the dereference to a single level.
pub trait Sequence {
    type Item;

    fn as_items(&self) -> &[Self::Item];
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self.as_slice()
    }
}

macro_rules! impl_sequence_dataset {
    ($(impl[$($generics:tt)*] for $ty:ty;)*) => {
        $(
            impl<$($generics)*> Dataset for $ty {
                type Item = <$ty as Sequence>::Item;

                fn as_sequence(&self) -> Option<&[Self::Item]> {
                    Some(self.as_items())
                }
            }
        )*
    };
}

impl_sequence_dataset! {
    impl[T] for [T];
    impl[T, const N: usize] for [T; N];
    impl[T] for Vec<T>;
}

impl<S: Sequence + ?Sized> Dataset for &S {
    type Item = S::Item;

    fn as_sequence(&self) -> Option<&[Self::Item]> {
        Some((**self).as_items())
    }
}

impl<S: Sequence + ?Sized> Dataset for &mut S {
    type Item = S::Item;

    fn as_sequence(&self) -> Option<&[Self::Item]> {
        Some((**self).as_items())
    }
}

impl<S: Sequence + ?Sized> Dataset for Box<S> {
    type Item = S::Item;

    fn as_sequence(&self) -> Option<&[Self::Item]> {
        Some((**self).as_items())
    }
}

macro_rules! impl_scalar_dataset {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Dataset for $ty {
                type Item = $ty;

                fn as_sequence(&self) -> Option<&[Self::Item]> {
                    None
                }
            }
        )*
    };
}

impl_scalar_dataset!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequences_expose_items() {
        let items = vec![1, 2, 3];
        assert_eq!(items.as_sequence(), Some(&[1, 2, 3][..]));
        assert_eq!((&items).as_sequence(), Some(&[1, 2, 3][..]));
        assert_eq!([4, 5].as_sequence(), Some(&[4, 5][..]));
        assert_eq!(items[..1].as_sequence(), Some(&[1][..]));
    }

    #[test]
    fn test_scalars_are_not_sequences() {
        assert!(42i32.as_sequence().is_none());
        assert!(String::from("rows").as_sequence().is_none());
    }
}
