//! Tag segment parsing and IRCv3 tag value unescaping.

use std::collections::hash_map::{self, HashMap};

use crate::error::{DecodeError, Result};

/// Borrowed `key -> value` view of a line's tag segment.
///
/// Keys are unique. When a key repeats on the wire the later value wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagMap<'a> {
    inner: HashMap<&'a str, &'a str>,
}

impl<'a> TagMap<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, returning the value it replaced.
    pub fn insert(&mut self, key: &'a str, value: &'a str) -> Option<&'a str> {
        self.inner.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.inner.get(key).copied()
    }

    /// Look up a tag the caller cannot do without.
    pub fn require(&self, key: &'static str) -> Result<&'a str> {
        self.get(key)
            .ok_or(DecodeError::MissingRequiredTag { key })
    }

    /// Read a required `0`/`1` tag. Anything other than `1` is `false`.
    pub fn require_flag(&self, key: &'static str) -> Result<bool> {
        self.require(key).map(|v| v == "1")
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            inner: self.inner.iter(),
        }
    }
}

/// Iterator over the `(key, value)` pairs of a [`TagMap`], in no
/// particular order.
pub struct Iter<'m, 'a> {
    inner: hash_map::Iter<'m, &'a str, &'a str>,
}

impl<'m, 'a> Iterator for Iter<'m, 'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (*k, *v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'m, 'a> IntoIterator for &'m TagMap<'a> {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'m, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for TagMap<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

/// Parse a tag segment such as `display-name=Ash;color=;mod=0`.
///
/// The segment must not carry the leading `@` marker; see
/// [`MarkerPolicy`](crate::config::MarkerPolicy). Each fragment is split on
/// its first `=` only, so values may be empty. An empty segment yields an
/// empty map.
///
/// # Examples
///
/// ```
/// use twitch_tags::parse_tags;
///
/// let tags = parse_tags("display-name=Ash;color=;mod=1").unwrap();
/// assert_eq!(tags.get("display-name"), Some("Ash"));
/// assert_eq!(tags.get("color"), Some(""));
/// assert_eq!(tags.len(), 3);
/// ```
pub fn parse_tags(segment: &str) -> Result<TagMap<'_>> {
    let mut tags = TagMap::new();
    if segment.is_empty() {
        return Ok(tags);
    }

    for fragment in segment.split(';') {
        match fragment.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                tags.insert(key, value);
            }
            _ => {
                return Err(DecodeError::MalformedTagFragment {
                    fragment: fragment.to_string(),
                })
            }
        }
    }

    Ok(tags)
}

/// Unescape a tag value from wire format.
///
/// `\:` is `;`, `\s` is a space, `\\` is a backslash, `\r` and `\n` are CR
/// and LF. Any other escaped character stands for itself and a trailing
/// lone backslash is dropped.
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}
