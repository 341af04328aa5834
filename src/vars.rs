//! Typed binding of route and query variables.
//!
//! Routers hand out path and query parameters as a flat `String -> String`
//! map. This module populates the fields of a caller-owned record from such
//! a map:
//!
//! - each bindable field names the variable it reads (its `var` key),
//! - the field's declared type selects how the raw string is coerced,
//! - fields whose key is missing from the map are left untouched,
//! - the first value that fails to parse aborts the whole bind.
//!
//! Records declare their field-to-key table once, with [`impl_bind_vars!`]
//! or a hand-written [`BindVars`] impl. There is no runtime reflection:
//! the table is a list of [`VarField`]s, each carrying a [`Slot`] that
//! mutably borrows one field.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use http_helper::{bind, impl_bind_vars};
//!
//! #[derive(Debug, Default)]
//! struct ListUsers {
//!     org: String,
//!     page: i32,
//!     ids: Vec<i64>,
//!     active: bool,
//!     // Not listed below, so never touched by `bind`.
//!     cursor: Option<String>,
//! }
//!
//! impl_bind_vars!(ListUsers {
//!     org: "org",
//!     page: "page",
//!     ids: "ids",
//!     active: "active",
//! });
//!
//! let vars = HashMap::from([
//!     ("org".to_string(), "acme".to_string()),
//!     ("page".to_string(), "3".to_string()),
//!     ("ids".to_string(), "7, 8 ,9".to_string()),
//! ]);
//!
//! let mut dst = ListUsers::default();
//! bind(&vars, &mut dst).expect("all values parse");
//!
//! assert_eq!(dst.org, "acme");
//! assert_eq!(dst.page, 3);
//! assert_eq!(dst.ids, vec![7, 8, 9]);
//! assert!(!dst.active); // key absent, prior value kept
//! ```

mod coerce;
mod slot;

use std::collections::HashMap;

use crate::error::{BindError, CoercionError};

pub use slot::{AsSlot, Slot, VarKind};

/// The tag name binding fields to variables.
pub const VAR_TAG: &str = "var";

/// One bindable field of a destination record.
///
/// Pairs the field identifier with the variable key it reads and a
/// [`Slot`] borrowing the field itself.
#[derive(Debug)]
pub struct VarField<'a> {
    name: &'static str,
    key: &'static str,
    slot: Slot<'a>,
}

impl<'a> VarField<'a> {
    /// Creates a field reading variable `key` into `slot`.
    ///
    /// An empty `key` marks the field as untagged; `bind` skips it.
    pub fn new(name: &'static str, key: &'static str, slot: Slot<'a>) -> Self {
        Self { name, key, slot }
    }

    /// Returns the field identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the variable key, empty for untagged fields.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the kind of the underlying field, `None` if unsupported.
    pub fn kind(&self) -> Option<VarKind> {
        self.slot.kind()
    }

    fn assign(self, raw: &str) -> Result<(), CoercionError> {
        let Self { name, key, slot } = self;
        slot.fill(raw).map_err(|rejected| CoercionError {
            field: name,
            key,
            value: rejected.value,
            kind: rejected.kind,
            reason: rejected.reason,
        })
    }
}

/// A record whose fields can be populated from a variable map.
///
/// Implementations list their bindable fields in declaration order. Fields
/// that are not listed are invisible to the binder.
///
/// Prefer [`impl_bind_vars!`] over writing this by hand.
///
/// # Examples
///
/// ```
/// use http_helper::{AsSlot, BindVars, VarField};
///
/// struct ItemPath {
///     id: i64,
///     slug: String,
/// }
///
/// impl BindVars for ItemPath {
///     fn var_fields(&mut self) -> Vec<VarField<'_>> {
///         vec![
///             VarField::new("id", "item_id", self.id.as_slot()),
///             VarField::new("slug", "slug", self.slug.as_slot()),
///         ]
///     }
/// }
/// ```
pub trait BindVars {
    /// Returns the bindable fields of `self`, in declaration order.
    fn var_fields(&mut self) -> Vec<VarField<'_>>;
}

/// Populates `dst` from `vars`.
///
/// For each field returned by [`BindVars::var_fields`], in order:
/// untagged fields and fields whose key is absent from `vars` are skipped,
/// unsupported kinds are skipped, and everything else is coerced from the
/// raw string and written in place.
///
/// # Errors
///
/// Returns [`BindError::Coercion`] for the first value that does not parse
/// as its field's kind. Binding stops there; fields already written keep
/// their new values and list fields may hold a partial append.
pub fn bind<T>(vars: &HashMap<String, String>, dst: &mut T) -> Result<(), BindError>
where
    T: BindVars + ?Sized,
{
    for field in dst.var_fields() {
        if field.key.is_empty() {
            tracing::trace!(field = field.name, tag = VAR_TAG, "untagged field skipped");
            continue;
        }

        let Some(raw) = vars.get(field.key) else {
            tracing::trace!(field = field.name, key = field.key, "no variable supplied");
            continue;
        };

        let Some(kind) = field.kind() else {
            tracing::trace!(field = field.name, key = field.key, "unsupported field kind skipped");
            continue;
        };

        let (name, key) = (field.name, field.key);
        if let Err(err) = field.assign(raw) {
            tracing::debug!(field = name, key, %kind, error = %err, "variable binding failed");
            return Err(err.into());
        }
        tracing::debug!(field = name, key, %kind, "variable bound");
    }

    Ok(())
}

/// Populates an optional, type-erased destination from `vars`.
///
/// This is the entry point for callers that carry the destination as
/// `Option<&mut dyn BindVars>`.
///
/// # Errors
///
/// Returns [`BindError::InvalidArgument`] when `dst` is `None`, without
/// touching anything. Otherwise behaves like [`bind`].
pub fn bind_dyn(
    vars: &HashMap<String, String>,
    dst: Option<&mut dyn BindVars>,
) -> Result<(), BindError> {
    match dst {
        Some(dst) => bind(vars, dst),
        None => Err(BindError::InvalidArgument),
    }
}

/// Implements [`BindVars`] from a field-to-key table.
///
/// Each entry is `field: "key"`, the key playing the role of the field's
/// [`VAR_TAG`] tag. Every listed field must implement
/// [`AsSlot`]; unlisted fields are never touched.
///
/// ```
/// use http_helper::impl_bind_vars;
///
/// #[derive(Default)]
/// struct Search {
///     query: String,
///     limit: i64,
///     tags: Vec<String>,
/// }
///
/// impl_bind_vars!(Search {
///     query: "q",
///     limit: "limit",
///     tags: "tags",
/// });
/// ```
#[macro_export]
macro_rules! impl_bind_vars {
    ($ty:ty { $($field:ident : $key:expr),* $(,)? }) => {
        impl $crate::BindVars for $ty {
            fn var_fields(&mut self) -> ::std::vec::Vec<$crate::VarField<'_>> {
                ::std::vec![
                    $(
                        $crate::VarField::new(
                            ::std::stringify!($field),
                            $key,
                            $crate::AsSlot::as_slot(&mut self.$field),
                        ),
                    )*
                ]
            }
        }
    };
}
