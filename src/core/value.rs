//! Renderable argument values
//!
//! Logging calls accept a heterogeneous argument list. Each argument is
//! captured into a [`LogValue`], a closed tagged variant of renderable
//! kinds with an explicit fallback for everything else, so rendering can
//! never fail regardless of what a caller passes.

use std::fmt;

/// One captured logging argument, reduced to a renderable kind.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Int(i64),
    Uint(u64),
    Float(f64),
    /// Strings pass through unchanged.
    Str(String),
    /// Byte sequences render as raw text.
    Bytes(Vec<u8>),
    /// Any unlisted type, rendered as `(<type-name>) <debug-repr>`.
    Other {
        type_name: &'static str,
        repr: String,
    },
}

impl LogValue {
    /// Capture an arbitrary value through the default-rendering fallback.
    pub fn other<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        LogValue::Other {
            type_name: std::any::type_name::<T>(),
            repr: format!("{:?}", value),
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Int(v) => write!(f, "{}", v),
            LogValue::Uint(v) => write!(f, "{}", v),
            LogValue::Float(v) => write!(f, "{}", v),
            LogValue::Str(v) => f.write_str(v),
            LogValue::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            LogValue::Other { type_name, repr } => write!(f, "({}) {}", type_name, repr),
        }
    }
}

/// Capture wrapper used by the logging macros.
///
/// Dispatch is by inherent method where the argument is one of the listed
/// renderable kinds, with [`CaptureFallback`] picked up for anything else.
/// Inherent methods win over trait methods, which is what routes known
/// kinds away from the fallback without any annotation at the call site.
pub struct Capture<'a, T: ?Sized>(pub &'a T);

/// Default-rendering fallback for types with no dedicated capture.
pub trait CaptureFallback {
    fn capture(self) -> LogValue;
}

impl<T: fmt::Debug + ?Sized> CaptureFallback for Capture<'_, T> {
    fn capture(self) -> LogValue {
        LogValue::other(self.0)
    }
}

/// Dedicated captures for the listed renderable kinds.
///
/// Dispatching the inherent `capture` through one bounded impl keeps a
/// single method candidate, so an unannotated numeric literal resolves via
/// the language's integer/float defaulting instead of being ambiguous.
pub trait CaptureKind {
    fn capture_value(&self) -> LogValue;
}

impl<T: CaptureKind + ?Sized> Capture<'_, T> {
    #[inline]
    pub fn capture(self) -> LogValue {
        self.0.capture_value()
    }
}

macro_rules! capture_signed {
    ($($t:ty),*) => {
        $(impl CaptureKind for $t {
            #[inline]
            fn capture_value(&self) -> LogValue {
                LogValue::Int(*self as i64)
            }
        })*
    };
}

macro_rules! capture_unsigned {
    ($($t:ty),*) => {
        $(impl CaptureKind for $t {
            #[inline]
            fn capture_value(&self) -> LogValue {
                LogValue::Uint(*self as u64)
            }
        })*
    };
}

macro_rules! capture_float {
    ($($t:ty),*) => {
        $(impl CaptureKind for $t {
            #[inline]
            fn capture_value(&self) -> LogValue {
                LogValue::Float(*self as f64)
            }
        })*
    };
}

capture_signed!(i8, i16, i32, i64, isize);
capture_unsigned!(u8, u16, u32, u64, usize);
capture_float!(f32, f64);

impl CaptureKind for &str {
    #[inline]
    fn capture_value(&self) -> LogValue {
        LogValue::Str((*self).to_string())
    }
}

impl CaptureKind for String {
    #[inline]
    fn capture_value(&self) -> LogValue {
        LogValue::Str(self.clone())
    }
}

impl CaptureKind for Vec<u8> {
    #[inline]
    fn capture_value(&self) -> LogValue {
        LogValue::Bytes(self.clone())
    }
}

impl CaptureKind for &[u8] {
    #[inline]
    fn capture_value(&self) -> LogValue {
        LogValue::Bytes(self.to_vec())
    }
}

impl<const N: usize> CaptureKind for [u8; N] {
    #[inline]
    fn capture_value(&self) -> LogValue {
        LogValue::Bytes(self.to_vec())
    }
}

impl<const N: usize> CaptureKind for &[u8; N] {
    #[inline]
    fn capture_value(&self) -> LogValue {
        LogValue::Bytes(self.to_vec())
    }
}

// Already-captured values pass through, so callers may mix explicit
// LogValue arguments with plain ones.
impl CaptureKind for LogValue {
    #[inline]
    fn capture_value(&self) -> LogValue {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_capture() {
        assert_eq!(Capture(&42i32).capture(), LogValue::Int(42));
        assert_eq!(Capture(&42u8).capture(), LogValue::Uint(42));
        assert_eq!(Capture(&-7i64).capture(), LogValue::Int(-7));
        assert_eq!(Capture(&3.14f64).capture(), LogValue::Float(3.14));
    }

    #[test]
    fn test_string_capture() {
        assert_eq!(
            Capture(&"hi").capture(),
            LogValue::Str("hi".to_string())
        );
        let owned = String::from("owned");
        assert_eq!(Capture(&owned).capture(), LogValue::Str("owned".to_string()));
    }

    #[test]
    fn test_bytes_capture() {
        assert_eq!(Capture(&b"yo").capture(), LogValue::Bytes(b"yo".to_vec()));
        let v: Vec<u8> = vec![104, 105];
        assert_eq!(Capture(&v).capture(), LogValue::Bytes(vec![104, 105]));
        let s: &[u8] = &v;
        assert_eq!(Capture(&s).capture(), LogValue::Bytes(vec![104, 105]));
    }

    #[test]
    fn test_fallback_capture() {
        #[derive(Debug)]
        struct Point {
            x: i32,
            y: i32,
        }

        let point = Point { x: 1, y: 2 };
        let value = Capture(&point).capture();
        match value {
            LogValue::Other { type_name, repr } => {
                assert!(type_name.ends_with("Point"));
                assert_eq!(repr, "Point { x: 1, y: 2 }");
            }
            other => panic!("expected fallback capture, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(LogValue::Int(42).to_string(), "42");
        assert_eq!(LogValue::Float(3.14).to_string(), "3.14");
        assert_eq!(LogValue::Str("hi".into()).to_string(), "hi");
        assert_eq!(LogValue::Bytes(b"yo".to_vec()).to_string(), "yo");
        assert_eq!(
            LogValue::Other {
                type_name: "bool",
                repr: "true".into()
            }
            .to_string(),
            "(bool) true"
        );
    }

    #[test]
    fn test_bool_takes_fallback() {
        let value = Capture(&true).capture();
        assert_eq!(value.to_string(), "(bool) true");
    }

    #[test]
    fn test_log_value_passes_through() {
        let explicit = LogValue::Str("already captured".into());
        assert_eq!(Capture(&explicit).capture(), explicit);
    }
}
