use crate::loc;
use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a
/// "resource" (`TResource`) stored within some other data-store (`TSource`)
/// without holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// As a concrete example, [crate::types::ObjectType] stores a
/// `Vec<NamedRef<Schema, GraphQLType>>` as a way of storing "pointers" to the
/// [crate::types::InterfaceType]s it implements. Storing names instead of
/// embedded types lets [crate::schema::Schema] own every defined type in a
/// single registry, even when types refer to each other cyclically (e.g. a
/// field returning its own enclosing type).
pub struct NamedRef<TSource, TResource: DerefByName<Source = TSource>> {
    name: String,
    phantom: PhantomData<fn() -> TResource>,
    ref_location: loc::SchemaDefLocation,
}
impl<TSource, TResource: DerefByName<Source = TSource>> NamedRef<TSource, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SchemaDefLocation,
    ) -> Self {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn ref_location(&self) -> &loc::SchemaDefLocation {
        &self.ref_location
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

// Manual impls: derives would needlessly require `TSource: Clone + Debug +
// PartialEq`.
impl<TSource, TResource: DerefByName<Source = TSource>> Clone for NamedRef<TSource, TResource> {
    fn clone(&self) -> Self {
        Self::new(self.name.as_str(), self.ref_location.clone())
    }
}
impl<TSource, TResource: DerefByName<Source = TSource>> std::fmt::Debug for NamedRef<TSource, TResource> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedRef")
            .field("name", &self.name)
            .field("ref_location", &self.ref_location)
            .finish()
    }
}
impl<TSource, TResource: DerefByName<Source = TSource>> PartialEq for NamedRef<TSource, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.ref_location == other.ref_location
    }
}

/// Implement this trait for any type that could be referenced by name. This
/// will enable usage of [`NamedRef<TSource, T>`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(
        name: &str,
        ref_location: loc::SchemaDefLocation,
    ) -> NamedRef<Self::Source, Self> where Self: Sized {
        NamedRef::new(name, ref_location)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("dangling reference to `{0}`")]
    DanglingReference(String),
}
