use std::fmt;

use super::coerce::{self, Rejected};

/// The semantic kind a variable is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
    /// Verbatim string.
    Str,
    /// 32-bit or native signed integer.
    Int,
    /// 64-bit signed integer.
    Int64,
    /// Floating point, parsed at 64-bit precision.
    Float,
    /// Boolean literal.
    Bool,
    /// Comma-separated integers.
    IntList,
    /// Comma-separated strings.
    StrList,
    /// Comma-separated 64-bit floats.
    FloatList,
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => write!(f, "string"),
            Self::Int => write!(f, "integer"),
            Self::Int64 => write!(f, "64-bit integer"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "boolean"),
            Self::IntList => write!(f, "integer list"),
            Self::StrList => write!(f, "string list"),
            Self::FloatList => write!(f, "float list"),
        }
    }
}

/// A mutable borrow of one destination field, tagged with its kind.
///
/// `Unsupported` covers every field type outside the binder's vocabulary
/// and carries the type name for diagnostics.
#[derive(Debug)]
pub enum Slot<'a> {
    /// A `String` field.
    Str(&'a mut String),
    /// An `i32` field.
    I32(&'a mut i32),
    /// An `isize` field.
    Isize(&'a mut isize),
    /// An `i64` field.
    I64(&'a mut i64),
    /// An `f32` field, narrowed from an `f64` parse.
    F32(&'a mut f32),
    /// An `f64` field.
    F64(&'a mut f64),
    /// A `bool` field.
    Bool(&'a mut bool),
    /// A `Vec<i32>` field. Parsed items are appended.
    I32List(&'a mut Vec<i32>),
    /// A `Vec<i64>` field. Parsed items are appended.
    I64List(&'a mut Vec<i64>),
    /// A `Vec<String>` field. The whole vector is replaced.
    StrList(&'a mut Vec<String>),
    /// A `Vec<f64>` field. Parsed items are appended.
    F64List(&'a mut Vec<f64>),
    /// A field the binder does not know how to fill.
    Unsupported(&'static str),
}

impl Slot<'_> {
    /// Returns the coercion kind, `None` for unsupported fields.
    pub fn kind(&self) -> Option<VarKind> {
        let kind = match self {
            Self::Str(_) => VarKind::Str,
            Self::I32(_) | Self::Isize(_) => VarKind::Int,
            Self::I64(_) => VarKind::Int64,
            Self::F32(_) | Self::F64(_) => VarKind::Float,
            Self::Bool(_) => VarKind::Bool,
            Self::I32List(_) | Self::I64List(_) => VarKind::IntList,
            Self::StrList(_) => VarKind::StrList,
            Self::F64List(_) => VarKind::FloatList,
            Self::Unsupported(_) => return None,
        };
        Some(kind)
    }

    /// Coerces `raw` and writes it into the borrowed field.
    pub(crate) fn fill(self, raw: &str) -> Result<(), Rejected> {
        match self {
            Self::Str(s) => *s = raw.to_string(),
            Self::I32(n) => *n = coerce::int(raw, VarKind::Int)?,
            Self::Isize(n) => *n = coerce::int(raw, VarKind::Int)?,
            Self::I64(n) => *n = coerce::int(raw, VarKind::Int64)?,
            Self::F32(x) => *x = coerce::float(raw, VarKind::Float)? as f32,
            Self::F64(x) => *x = coerce::float(raw, VarKind::Float)?,
            Self::Bool(b) => *b = coerce::boolean(raw)?,
            Self::I32List(items) => {
                for piece in coerce::split_list(raw) {
                    items.push(coerce::int(piece, VarKind::IntList)?);
                }
            }
            Self::I64List(items) => {
                for piece in coerce::split_list(raw) {
                    items.push(coerce::int(piece, VarKind::IntList)?);
                }
            }
            Self::StrList(items) => {
                *items = coerce::split_list(raw).map(str::to_string).collect();
            }
            Self::F64List(items) => {
                for piece in coerce::split_list(raw) {
                    items.push(coerce::float(piece, VarKind::FloatList)?);
                }
            }
            Self::Unsupported(_) => {}
        }
        Ok(())
    }
}

/// Converts a field into a [`Slot`].
///
/// Implemented for every supported field type. The default method reports
/// the type as unsupported, so any other type can take part in a
/// [`impl_bind_vars!`](crate::impl_bind_vars) table with an empty impl and
/// will be skipped at bind time:
///
/// ```
/// use http_helper::{AsSlot, Slot};
///
/// struct Color(u8);
/// impl AsSlot for Color {}
///
/// let mut color = Color(3);
/// assert!(matches!(color.as_slot(), Slot::Unsupported(_)));
/// ```
pub trait AsSlot {
    /// Borrows `self` as a slot.
    fn as_slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

macro_rules! supported {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl AsSlot for $ty {
                fn as_slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }
        )*
    };
}

supported! {
    String => Str,
    i32 => I32,
    isize => Isize,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    Vec<i32> => I32List,
    Vec<i64> => I64List,
    Vec<String> => StrList,
    Vec<f64> => F64List,
}

macro_rules! unsupported {
    ($($ty:ty),* $(,)?) => {
        $( impl AsSlot for $ty {} )*
    };
}

unsupported! {
    i8, i16, i128, u8, u16, u32, u64, u128, usize, char,
    Vec<bool>, Vec<u8>, Vec<f32>, Vec<isize>,
}

impl<T> AsSlot for Option<T> {}
