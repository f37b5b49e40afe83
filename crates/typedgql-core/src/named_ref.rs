use std::marker::PhantomData;

/// Represents a strongly-typed, `String`-named reference to a
/// "resource" (`TResource`) stored within some other data-store (`TSource`)
/// without holding an explicit reference to the data-store. De-referencing a
/// [NamedRef] is done via [NamedRef::deref()] by providing an explicit
/// reference to the `TSource`.
///
/// `TSource` types are bound to implement the `DerefByName` trait in order to
/// execute de-referencing operations for a `TResource` given its [`String`]
/// name.
///
/// As a more concrete example, [crate::types::ObjectType] stores a
/// `Vec<NamedRef<crate::schema::Schema, crate::types::GraphQLType>>` as a way
/// of storing "pointers" to the [crate::types::InterfaceType]s implemented by
/// that [crate::types::ObjectType]. Storing [NamedRef] references instead of
/// direct references is what lets a [crate::schema::Schema] hold types that
/// refer to themselves, to each other, or to types that were registered later.
pub struct NamedRef<TSource, TResource: DerefByName<Source=TSource>> {
    name: String,
    phantom: PhantomData<fn() -> TResource>,
}
impl<TSource, TResource: DerefByName<Source=TSource>> NamedRef<TSource, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl AsRef<str>) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

// Derived impls would needlessly bound `TSource` and `TResource`; a
// `NamedRef` is fully identified by its name.
impl<TSource, TResource: DerefByName<Source=TSource>> Clone for NamedRef<TSource, TResource> {
    fn clone(&self) -> Self {
        Self::new(self.name.as_str())
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> core::fmt::Debug for NamedRef<TSource, TResource> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("NamedRef").field(&self.name).finish()
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> PartialEq for NamedRef<TSource, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> Eq for NamedRef<TSource, TResource> {}
impl<TSource, TResource: DerefByName<Source=TSource>> std::hash::Hash for NamedRef<TSource, TResource> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

/// Implement this trait for any type that could be referenced by named. This
/// will enable usage of NamedRef<T> for that type.
pub trait DerefByName: core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str) -> NamedRef<Self::Source, Self> where Self: Sized {
        NamedRef::<Self::Source, Self>::new(name)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No definition found for the name `{0}`")]
    DanglingReference(String),
}
