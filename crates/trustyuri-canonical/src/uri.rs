//! Trusty URI layout: `<base><tag><digest>[#<fragment>]`.
//!
//! The tail (tag + digest) is located purely by position and alphabet, so
//! the same extraction works for bare URIs, dereferenceable URLs and local
//! file names such as `RA....nq`.

use crate::digest::{is_digest_char, Digest};
use crate::identifiers::{ArtifactCode, ModuleTag, TAG_LEN, TAIL_LEN};
use crate::validation::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Longest file extension that is skipped when locating a tail.
const MAX_EXTENSION_LEN: usize = 20;

/// Extracts the artifact code from the end of the path portion of `identifier`.
///
/// Query strings, fragments, trailing `/` and short file extensions are
/// ignored. The last [`TAIL_LEN`] characters of the trailing run of
/// digest-alphabet characters form the tail.
///
/// ```rust
/// use trustyuri_canonical::get_tail;
///
/// let id = "https://example.org/np/FA47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU#sub";
/// let tail = get_tail(id)?;
/// assert_eq!(tail.tag().as_ref(), "FA");
/// # Ok::<(), trustyuri_canonical::ValidationError>(())
/// ```
pub fn get_tail(identifier: &str) -> Result<ArtifactCode, ValidationError> {
    let path = identifier
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let mut stem = path.rsplit(['/', '\\']).next().unwrap_or(path);

    // Extensions are peeled off one at a time (`.tar.gz`) until a code ends the stem.
    while trailing_run(stem) < TAIL_LEN {
        match strip_extension(stem) {
            Some(shorter) => stem = shorter,
            None => {
                return Err(ValidationError::MalformedIdentifier {
                    identifier: identifier.to_string(),
                    reason: "trailing code is shorter than 45 characters",
                })
            }
        }
    }
    ArtifactCode::parse(&stem[stem.len() - TAIL_LEN..])
}

fn trailing_run(stem: &str) -> usize {
    stem.chars().rev().take_while(|c| is_digest_char(*c)).count()
}

fn strip_extension(segment: &str) -> Option<&str> {
    match segment.rsplit_once('.') {
        Some((stem, ext))
            if !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(is_digest_char) =>
        {
            Some(stem)
        }
        _ => None,
    }
}

/// Returns the module tag at the start of a tail.
pub fn tag_of(tail: &str) -> Result<ModuleTag, ValidationError> {
    if tail.len() < TAG_LEN || !tail.is_char_boundary(TAG_LEN) {
        return Err(ValidationError::PatternMismatch {
            field: "tail",
            value: tail.to_string(),
        });
    }
    ModuleTag::parse(&tail[..TAG_LEN])
}

/// Assembles `<base><tag><digest>[#<fragment>]`.
///
/// Trailing `/` on `base` collapse to one; a base ending in another
/// separator (`#`, `.`, ...) is kept as is, and a bare word gets a `/`.
/// No escaping is applied to `fragment`.
pub fn build(base: &str, tag: &ModuleTag, digest: &Digest, fragment: Option<&str>) -> String {
    let mut uri = normalized_base(base);
    uri.push_str(tag.as_ref());
    uri.push_str(digest.as_str());
    if let Some(fragment) = fragment {
        uri.push('#');
        uri.push_str(fragment);
    }
    uri
}

fn normalized_base(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.len() != base.len() {
        format!("{trimmed}/")
    } else if base.chars().last().is_some_and(is_digest_char) {
        format!("{base}/")
    } else {
        base.to_string()
    }
}

/// A self-certifying identifier.
///
/// The base is stored verbatim, so `base + code` is exactly the string the
/// identifier was parsed from or minted as. Use [`build`] to assemble an
/// identifier from loose parts with separator normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrustyUri {
    base: String,
    code: ArtifactCode,
    fragment: Option<String>,
}

impl TrustyUri {
    /// Creates an identifier without a fragment.
    pub fn new(base: impl Into<String>, code: ArtifactCode) -> Self {
        Self {
            base: base.into(),
            code,
            fragment: None,
        }
    }

    /// Attaches a local name after `#`.
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Splits a full identifier whose path ends in an artifact code.
    ///
    /// A query string is not part of the identifier and is dropped.
    pub fn parse(identifier: &str) -> Result<Self, ValidationError> {
        let code = get_tail(identifier)?;
        let (main, fragment) = match identifier.split_once('#') {
            Some((main, fragment)) => (main, Some(fragment.to_string())),
            None => (identifier, None),
        };
        let main = main.split_once('?').map_or(main, |(path, _)| path);
        let base = main
            .strip_suffix(code.to_string().as_str())
            .ok_or_else(|| ValidationError::MalformedIdentifier {
                identifier: identifier.to_string(),
                reason: "artifact code does not end the identifier",
            })?;
        Ok(Self {
            base: base.to_string(),
            code,
            fragment,
        })
    }

    /// Everything before the artifact code.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The tail.
    pub fn code(&self) -> &ArtifactCode {
        &self.code
    }

    /// Local name, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl fmt::Display for TrustyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.code)?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for TrustyUri {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
