//! Key trait for registry lookup.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// A discrete lookup key for handler registration and resolution.
///
/// Keys must be hashable, comparable, and cheap to snapshot. The
/// [`validate`](Key::validate) probe is run once at registration time so a
/// malformed key (an empty string) is rejected before it can enter a
/// registry; resolution never re-validates.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum Device { Light, Heating }
///
/// impl Key for Device {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Key",
    label = "must be `Hash + Eq + Clone + Debug + Send + Sync + 'static`",
    note = "Registry keys must be hashable, cloneable for snapshots, and thread-safe."
)]
pub trait Key: Hash + Eq + Clone + Debug + Send + Sync + 'static {
    /// Well-formedness probe, checked once at registration time.
    ///
    /// The default accepts every value; string-like keys reject the empty
    /// string.
    fn validate(&self) -> bool {
        true
    }
}

impl Key for String {
    fn validate(&self) -> bool {
        !self.is_empty()
    }
}

impl Key for &'static str {
    fn validate(&self) -> bool {
        !self.is_empty()
    }
}

impl Key for Arc<str> {
    fn validate(&self) -> bool {
        !self.is_empty()
    }
}

impl Key for Box<str> {
    fn validate(&self) -> bool {
        !self.is_empty()
    }
}

impl Key for char {}

macro_rules! impl_key_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(impl Key for $ty {})*
    };
}

impl_key_for_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn test_string_keys_reject_empty() {
        assert!("light".to_string().validate());
        assert!(!String::new().validate());
        assert!("heating".validate());
        assert!(!"".validate());
    }

    #[test]
    fn test_integer_keys_always_valid() {
        assert!(0u32.validate());
        assert!((-1i64).validate());
    }

    #[test]
    fn test_enum_keys() {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        enum Device {
            Light,
        }
        impl Key for Device {}

        assert!(Device::Light.validate());
    }
}
