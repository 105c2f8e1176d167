use std::iter::FusedIterator;

/// A single top-level product token of a `User-Agent`,
/// e.g. `Mozilla/5.0 (X11; Linux x86_64)`.
///
/// A section is made of a product `name`, an optional `version`
/// (the part after the first `/`) and an optional comment list:
/// the content between the parentheses that follow the product,
/// split on `"; "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section<'a> {
    name: &'a str,
    version: &'a str,
    comment: Vec<&'a str>,
}

impl<'a> Section<'a> {
    /// The product name, e.g. `Mozilla`.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The product version, e.g. `5.0`, empty if none was given.
    #[must_use]
    pub fn version(&self) -> &'a str {
        self.version
    }

    /// All comment entries, without the enclosing parentheses.
    ///
    /// Empty in case the product was not followed by a comment.
    #[must_use]
    pub fn comments(&self) -> &[&'a str] {
        &self.comment
    }

    /// The comment entry at the given index, if it exists.
    #[must_use]
    pub fn comment(&self, index: usize) -> Option<&'a str> {
        self.comment.get(index).copied()
    }
}

/// Split a product token into its name and version.
///
/// Only the first `/` separates the two, the version
/// is empty in case the token has no `/` at all.
///
/// ```
/// use agentsniff_ua::split_product;
///
/// assert_eq!(split_product("Chrome/29.0.1541.0"), ("Chrome", "29.0.1541.0"));
/// assert_eq!(split_product("Mobile"), ("Mobile", ""));
/// ```
#[must_use]
pub fn split_product(token: &str) -> (&str, &str) {
    token.split_once('/').unwrap_or((token, ""))
}

/// Tokenize a `User-Agent` into its [`Section`]s, in source order.
///
/// Tokenization never fails: an unterminated comment
/// is read until the end of the input.
///
/// ```
/// use agentsniff_ua::sections;
///
/// let mut iter = sections("Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101");
///
/// let mozilla = iter.next().unwrap();
/// assert_eq!(mozilla.name(), "Mozilla");
/// assert_eq!(mozilla.comments(), ["X11", "Linux x86_64"]);
///
/// let gecko = iter.next().unwrap();
/// assert_eq!((gecko.name(), gecko.version()), ("Gecko", "20100101"));
///
/// assert!(iter.next().is_none());
/// ```
#[must_use]
pub fn sections(ua: &str) -> SectionIter<'_> {
    SectionIter { ua, index: 0 }
}

/// Iterator over the [`Section`]s of a `User-Agent`,
/// created by [`sections`].
#[derive(Debug, Clone)]
pub struct SectionIter<'a> {
    ua: &'a str,
    index: usize,
}

impl<'a> SectionIter<'a> {
    /// Read until the (unescaped) delimiter or the end of the input,
    /// moving the cursor past the delimiter.
    ///
    /// With `nested` enabled every `(` has to be closed
    /// before the delimiter terminates the read.
    fn read_until(&mut self, delimiter: u8, nested: bool) -> &'a str {
        let rest = self.ua.get(self.index..).unwrap_or_default();
        let mut depth = 0usize;
        for (offset, byte) in rest.bytes().enumerate() {
            if byte == delimiter {
                if depth == 0 {
                    self.index += offset + 1;
                    return rest.get(..offset).unwrap_or(rest);
                }
                depth -= 1;
            } else if nested && byte == b'(' {
                depth += 1;
            }
        }
        self.index = self.ua.len();
        rest
    }

    /// Skip the character directly following a comment,
    /// usually the space separating it from the next product.
    fn skip_char(&mut self) {
        if let Some(c) = self
            .ua
            .get(self.index..)
            .and_then(|rest| rest.chars().next())
        {
            self.index += c.len_utf8();
        }
    }
}

impl<'a> Iterator for SectionIter<'a> {
    type Item = Section<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.ua.len() {
            return None;
        }

        let (name, version) = split_product(self.read_until(b' ', false));

        let mut comment = Vec::new();
        if self.ua.as_bytes().get(self.index) == Some(&b'(') {
            self.index += 1;
            comment.extend(self.read_until(b')', true).split("; "));
            self.skip_char();
        }

        Some(Section {
            name,
            version,
            comment,
        })
    }
}

impl FusedIterator for SectionIter<'_> {}
