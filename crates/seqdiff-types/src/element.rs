//! The comparison unit of a diff.

use std::borrow::Cow;

use crate::error::TypeError;

/// An opaque comparison unit: typically one line of text.
///
/// Elements compare by value equality and expose a canonical byte encoding
/// used for fingerprinting. Two equal elements must produce identical
/// encodings; unequal elements should produce different ones.
pub trait Element: Eq {
    /// Append this element's canonical encoding to `out`.
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError>;
}

impl<T: Element + ?Sized> Element for &T {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
        (**self).encode(out)
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
        (**self).encode(out)
    }
}

impl Element for str {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
        out.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl Element for String {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
        self.as_str().encode(out)
    }
}

impl Element for Cow<'_, str> {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
        self.as_ref().encode(out)
    }
}

impl Element for [u8] {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
        out.extend_from_slice(self);
        Ok(())
    }
}

impl Element for Vec<u8> {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
        self.as_slice().encode(out)
    }
}

impl Element for char {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
        let mut buf = [0u8; 4];
        out.extend_from_slice(self.encode_utf8(&mut buf).as_bytes());
        Ok(())
    }
}

impl Element for bool {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
        out.push(u8::from(*self));
        Ok(())
    }
}

macro_rules! impl_element_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
                    out.extend_from_slice(&self.to_le_bytes());
                    Ok(())
                }
            }
        )*
    };
}

impl_element_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// JSON values encode as canonical compact JSON text: object keys in
/// sorted order, and every float zero written as `0.0`, because `0.0` and
/// `-0.0` compare equal.
impl Element for serde_json::Value {
    fn encode(&self, out: &mut Vec<u8>) -> Result<(), TypeError> {
        encode_json(self, out)
    }
}

fn encode_json(value: &serde_json::Value, out: &mut Vec<u8>) -> Result<(), TypeError> {
    use serde_json::Value;

    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(b) => out.extend_from_slice(if *b { &b"true"[..] } else { &b"false"[..] }),
        Value::Number(n) if n.as_f64() == Some(0.0) && n.is_f64() => out.extend_from_slice(b"0.0"),
        Value::Number(n) => write_json(n, out)?,
        Value::String(s) => write_json(s, out)?,
        Value::Array(items) => {
            out.push(b'[');
            for (n, item) in items.iter().enumerate() {
                if n > 0 {
                    out.push(b',');
                }
                encode_json(item, out)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            out.push(b'{');
            for (n, (key, item)) in entries.into_iter().enumerate() {
                if n > 0 {
                    out.push(b',');
                }
                write_json(key, out)?;
                out.push(b':');
                encode_json(item, out)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

fn write_json<S: serde::Serialize + ?Sized>(value: &S, out: &mut Vec<u8>) -> Result<(), TypeError> {
    serde_json::to_writer(&mut *out, value).map_err(|e| TypeError::Encoding(e.to_string()))
}
