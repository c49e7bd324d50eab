//! `application/x-www-form-urlencoded` body decoding.
//!
//! Decoding is total: any byte sequence yields a (possibly empty) list of
//! fields, never an error. Valid percent-escapes decode, invalid ones pass
//! through verbatim, `+` decodes to a space, and a pair without `=` becomes a
//! field with an empty value. When a field name repeats, lookups take the
//! last occurrence.

/// Decode a body into `(name, value)` pairs, in order of appearance.
pub fn parse(body: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(body).into_owned().collect()
}

/// Look up a field by name, last occurrence winning.
pub fn last_value<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .rev()
        .find(|(field, _)| field == name)
        .map(|(_, value)| value.as_str())
}
