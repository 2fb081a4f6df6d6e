use std::io::{self, Write};

use serde::{ser::Error as _, Serialize};
use serde_json::ser::{Formatter, Serializer};

/// Single-line JSON with every non-ASCII code point escaped as `\uXXXX`
/// and `", "` / `": "` separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;

        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\x7f' {
                continue;
            }

            writer.write_all(&fragment.as_bytes()[start..i])?;

            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }

            start = i + ch.len_utf8();
        }

        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

pub fn to_ascii_line<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, AsciiFormatter);
    value.serialize(&mut ser)?;

    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Payload<'a> {
        text: &'a str,
        missing: Option<&'a str>,
        tags: Vec<&'a str>,
    }

    #[test]
    fn separators_and_nulls() {
        let line = to_ascii_line(&Payload {
            text: "hello",
            missing: None,
            tags: vec!["a", "b"],
        })
        .expect("serialized");

        assert_eq!(
            line,
            r#"{"text": "hello", "missing": null, "tags": ["a", "b"]}"#
        );
    }

    #[test]
    fn escapes_non_ascii() {
        let line = to_ascii_line(&"café").expect("serialized");
        assert_eq!(line, r#""caf\u00e9""#);

        let line = to_ascii_line(&"Рецепт").expect("serialized");
        assert_eq!(line, r#""\u0420\u0435\u0446\u0435\u043f\u0442""#);
    }

    #[test]
    fn escapes_astral_characters_as_surrogate_pairs() {
        let line = to_ascii_line(&"yum 🍝").expect("serialized");
        assert_eq!(line, r#""yum \ud83c\udf5d""#);
    }

    #[test]
    fn keeps_standard_escapes_and_stays_on_one_line() {
        let line = to_ascii_line(&"line one\nline \"two\"\t\\ \x7f").expect("serialized");

        assert_eq!(line, r#""line one\nline \"two\"\t\\ \u007f""#);
        assert!(!line.contains('\n'));
        assert!(line.is_ascii());
    }
}
