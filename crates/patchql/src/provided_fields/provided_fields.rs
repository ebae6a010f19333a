use indexmap::IndexMap;
use serde::Serialize;

/// The field names provided for each inspected input-object argument, keyed
/// by argument name.
///
/// An argument is missing from the map when it wasn't passed at all, or when
/// it referenced a variable the caller never bound.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProvidedFields(pub(super) IndexMap<String, Vec<String>>);
impl ProvidedFields {
    /// Whether `field_name` was provided within argument `argument_name`.
    pub fn contains_field(&self, argument_name: &str, field_name: &str) -> bool {
        self.fields(argument_name).iter().any(|f| f == field_name)
    }

    /// The provided field names of `argument_name`; empty when the argument
    /// contributed nothing.
    pub fn fields(&self, argument_name: &str) -> &[String] {
        self.get(argument_name).unwrap_or_default()
    }

    pub fn get(&self, argument_name: &str) -> Option<&[String]> {
        self.0.get(argument_name).map(Vec::as_slice)
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
impl<'a> IntoIterator for &'a ProvidedFields {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
