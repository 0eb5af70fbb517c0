use std::fmt::Display;

/// The kinds of key `model_description` knows how to describe
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyKind {
    /// String-like keys
    Text,
    /// Primitive integer keys
    Integer,
    /// Anything else
    Unsupported,
}

/// Reports which `KeyKind` a key belongs to.
///
/// Types with no natural kind can implement this with an empty body and are
/// reported as `KeyKind::Unsupported`.
pub trait ModelKey: Display {
    /// kind of this key
    fn key_kind(&self) -> KeyKind {
        KeyKind::Unsupported
    }
}

impl ModelKey for str {
    fn key_kind(&self) -> KeyKind {
        KeyKind::Text
    }
}

impl ModelKey for String {
    fn key_kind(&self) -> KeyKind {
        KeyKind::Text
    }
}

impl<T: ModelKey + ?Sized> ModelKey for &T {
    fn key_kind(&self) -> KeyKind {
        (**self).key_kind()
    }
}

macro_rules! integer_keys {
    ($($ty:ty),*) => {
        $(
            impl ModelKey for $ty {
                fn key_kind(&self) -> KeyKind {
                    KeyKind::Integer
                }
            }
        )*
    };
}

integer_keys!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ModelKey for char {}
impl ModelKey for bool {}
impl ModelKey for f32 {}
impl ModelKey for f64 {}

/// Canonical string form of a text or integer key, `None` for anything else.
///
/// ```rust
/// # use chainkv::model_description;
/// assert_eq!(model_description("firstName"), Some("firstName".to_owned()));
/// assert_eq!(model_description(&-7_i64), Some("-7".to_owned()));
/// assert_eq!(model_description(&1.5_f64), None);
/// ```
pub fn model_description<K: ModelKey + ?Sized>(key: &K) -> Option<String> {
    match key.key_kind() {
        KeyKind::Text | KeyKind::Integer => Some(key.to_string()),
        KeyKind::Unsupported => None,
    }
}
