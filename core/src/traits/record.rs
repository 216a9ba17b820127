use crate::prelude::*;

/// Column tag that explicitly suppresses an attribute.
pub const IGNORE_MARKER: &str = "-";

/// A declared record attribute and the column it publishes as.
///
/// This is the fixed, per-type table that `#[derive(Record)]` generates. An
/// attribute without a tag, with an empty tag, or tagged with [`IGNORE_MARKER`]
/// never participates in a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Name of the attribute on the record type.
    pub name: &'static str,
    tag: Option<&'static str>,
}

impl Attribute {
    /// An attribute publishing as `column`.
    pub const fn new(name: &'static str, column: &'static str) -> Self {
        Self {
            name,
            tag: Some(column),
        }
    }

    /// An attribute with no column tag.
    pub const fn untagged(name: &'static str) -> Self {
        Self { name, tag: None }
    }

    /// The raw tag as declared.
    pub const fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// The column this attribute maps to, if it maps to one at all.
    pub fn column(&self) -> Option<&'static str> {
        match self.tag {
            Some(tag) if !tag.is_empty() && tag != IGNORE_MARKER => Some(tag),
            _ => None,
        }
    }
}

/// A structured record with named, column-tagged attributes.
///
/// Usually implemented with `#[derive(Record)]`; hand-written impls only need
/// to return a static attribute table and a lookup from attribute name to
/// bound value.
///
/// ```ignore
/// impl Record<PostgresValue<'static>> for Substation {
///     fn attributes(&self) -> &'static [Attribute] {
///         const ATTRIBUTES: &[Attribute] = &[
///             Attribute::new("id", "id"),
///             Attribute::new("asset_id", "asset_id"),
///         ];
///         ATTRIBUTES
///     }
///
///     fn value(&self, attribute: &str) -> Option<PostgresValue<'static>> {
///         match attribute {
///             "id" => Some(self.id.into()),
///             "asset_id" => Some(self.asset_id.clone().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record<V> {
    /// Attribute table in declaration order.
    fn attributes(&self) -> &'static [Attribute];

    /// Bound value of the named attribute, or `None` if the record has no such
    /// attribute.
    fn value(&self, attribute: &str) -> Option<V>;
}

/// What a collection element turns out to be once inspected.
pub enum Shape<'r, V> {
    /// A record that can be bound directly.
    Struct(&'r dyn Record<V>),
    /// A reference to another element; dereferenced once during inspection.
    Reference(&'r dyn Element<V>),
    /// Anything without named attributes. Carries the type name.
    Scalar(&'static str),
}

/// A value that may appear inside a record collection.
pub trait Element<V> {
    fn shape(&self) -> Shape<'_, V>;
}

impl<V, T: Element<V>> Element<V> for &T {
    fn shape(&self) -> Shape<'_, V> {
        Shape::Reference(*self)
    }
}

impl<V, T: Element<V>> Element<V> for &mut T {
    fn shape(&self) -> Shape<'_, V> {
        Shape::Reference(&**self)
    }
}

impl<V, T: Element<V>> Element<V> for Box<T> {
    fn shape(&self) -> Shape<'_, V> {
        Shape::Reference(self.as_ref())
    }
}

impl<V, T: Element<V>> Element<V> for Rc<T> {
    fn shape(&self) -> Shape<'_, V> {
        Shape::Reference(self.as_ref())
    }
}

impl<V, T: Element<V>> Element<V> for Arc<T> {
    fn shape(&self) -> Shape<'_, V> {
        Shape::Reference(self.as_ref())
    }
}

macro_rules! impl_scalar_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<V> Element<V> for $ty {
                fn shape(&self) -> Shape<'_, V> {
                    Shape::Scalar(core::any::type_name::<$ty>())
                }
            }
        )*
    };
}

impl_scalar_element!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);
