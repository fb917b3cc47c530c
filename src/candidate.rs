//! Classification boundary - values that may or may not be password text.
//!
//! [`classify`](crate::classify) accepts anything implementing [`Candidate`].
//! Textual values expose their text; everything else exposes `None` and is
//! classified as weak without further checks.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

/// A value offered for classification.
pub trait Candidate {
    /// Returns the password text, or `None` if the value is not a string.
    fn as_password(&self) -> Option<&str>;
}

impl Candidate for str {
    fn as_password(&self) -> Option<&str> {
        Some(self)
    }
}

impl Candidate for String {
    fn as_password(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Candidate for Cow<'_, str> {
    fn as_password(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Candidate for Box<str> {
    fn as_password(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Candidate for Rc<str> {
    fn as_password(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Candidate for Arc<str> {
    fn as_password(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl Candidate for SecretString {
    fn as_password(&self) -> Option<&str> {
        Some(self.expose_secret())
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn as_password(&self) -> Option<&str> {
        (**self).as_password()
    }
}

/// `None` plays the role of a missing (null) value.
impl<T: Candidate> Candidate for Option<T> {
    fn as_password(&self) -> Option<&str> {
        self.as_ref().and_then(Candidate::as_password)
    }
}

macro_rules! not_a_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Candidate for $ty {
                fn as_password(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

not_a_string!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T> Candidate for [T] {
    fn as_password(&self) -> Option<&str> {
        None
    }
}

impl<T, const N: usize> Candidate for [T; N] {
    fn as_password(&self) -> Option<&str> {
        None
    }
}

impl<T> Candidate for Vec<T> {
    fn as_password(&self) -> Option<&str> {
        None
    }
}

impl<K, V, S> Candidate for HashMap<K, V, S> {
    fn as_password(&self) -> Option<&str> {
        None
    }
}

impl<K, V> Candidate for BTreeMap<K, V> {
    fn as_password(&self) -> Option<&str> {
        None
    }
}

/// Only `Value::String` is password text; null, numbers, booleans, arrays and objects are not.
#[cfg(feature = "json")]
impl Candidate for serde_json::Value {
    fn as_password(&self) -> Option<&str> {
        self.as_str()
    }
}
