//! Three-state field wrapper for partial updates.
//!
//! A JSON patch body distinguishes a key that is missing from a key that is
//! present with `null`. `Option<T>` collapses the two, so update bodies use
//! [`Patch`] with `#[serde(default)]` instead. Merging treats both the same:
//! only a supplied value ever touches the stored field.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
  /// The key was not present in the body.
  #[default]
  Absent,
  /// The key was present with an explicit `null`.
  Null,
  Value(T),
}

impl<T> Patch<T> {
  /// The supplied value, if any. `Null` and `Absent` both yield `None`.
  pub fn value(&self) -> Option<&T> {
    match self {
      Self::Value(v) => Some(v),
      _ => None,
    }
  }

  /// Merge into a required field: only a supplied value overwrites.
  pub fn apply(self, target: &mut T) {
    if let Self::Value(v) = self {
      *target = v;
    }
  }

  /// Merge into a nullable field. `null` does not clear it.
  pub fn apply_nullable(self, target: &mut Option<T>) {
    if let Self::Value(v) = self {
      *target = Some(v);
    }
  }
}

impl<T> From<Option<T>> for Patch<T> {
  fn from(opt: Option<T>) -> Self {
    match opt {
      Some(v) => Self::Value(v),
      None => Self::Null,
    }
  }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
  T: Deserialize<'de>,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    // Only reached when the key is present; missing keys use `Default`.
    Option::<T>::deserialize(deserializer).map(Patch::from)
  }
}
