// Human-readable rendering for domain types.
//
// Each type declares its ordered field list once through `Render`; the
// rendering is a 4-space-indented JSON document tagged with the type name
// under `"_"`. Absent fields are dropped, nested types recurse, and raw bytes
// are shown as an escaped `b"..."` string instead of being decoded.

use bytes::Bytes;
use serde::Serialize;
use serde_json::{Map, Value};

/// A domain type with an explicit rendering schema.
pub trait Render {
    /// Name written under the `"_"` key.
    const TYPE_NAME: &'static str;

    /// Fields in declaration order. `None` marks an absent value.
    fn fields(&self) -> Vec<(&'static str, Option<Value>)>;

    /// Structural form used by `render` and by parents embedding this value.
    fn to_render_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("_".to_owned(), Value::String(Self::TYPE_NAME.to_owned()));
        for (name, value) in self.fields() {
            if let Some(value) = value {
                map.insert(name.to_owned(), value);
            }
        }
        Value::Object(map)
    }
}

/// Render a single domain value.
pub fn render<T: Render>(item: &T) -> String {
    pretty(&item.to_render_value()).unwrap_or_default()
}

/// Render an ordered sequence of domain values as one document.
pub fn render_list<T: Render>(items: &[T]) -> String {
    pretty(&list_value(items)).unwrap_or_default()
}

/// Embed a nested sequence of domain values in a parent's field list.
pub fn list_value<T: Render>(items: &[T]) -> Value {
    Value::Array(items.iter().map(T::to_render_value).collect())
}

/// Escaped representation of raw bytes, e.g. `b"\x89PNG\r\n"`.
pub fn bytes_marker(bytes: &Bytes) -> String {
    format!("{bytes:?}")
}

/// Embed raw bytes in a field list.
pub fn bytes_value(bytes: &Bytes) -> Value {
    Value::String(bytes_marker(bytes))
}

/// Convert a plain field value. Values that fail to serialize count as absent.
pub fn field<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok().filter(|v| !v.is_null())
}

/// Pretty-print with a 4-space indent.
pub(crate) fn pretty(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Implement `Display` through `render::render`.
macro_rules! display_via_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&$crate::render::render(self))
                }
            }
        )+
    };
}

pub(crate) use display_via_render;
