use crate::digest::{Digest, DigestAlg, DIGEST_LEN};
use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a module tag.
pub const TAG_LEN: usize = 2;
/// Length of a full artifact code (tag + digest).
pub const TAIL_LEN: usize = TAG_LEN + DIGEST_LEN;

macro_rules! newtype {
    ($name:ident, $doc:expr, $pattern:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new instance without validation; callers are responsible for conformity.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Parses a validated identifier from a string.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s = value.into();
                if !Regex::new($pattern).expect("invalid regex").is_match(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

newtype!(
    ModuleTag,
    "Two-character module identifier such as `FA` or `RA` (pattern: `[A-Za-z0-9_-]{2}`).",
    r"^[A-Za-z0-9_-]{2}$"
);

/// The tail of a trusty URI: module tag followed by the digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCode {
    tag: ModuleTag,
    digest: Digest,
}

impl ArtifactCode {
    /// Pairs a tag with a digest.
    pub fn new(tag: ModuleTag, digest: Digest) -> Self {
        Self { tag, digest }
    }

    /// Parses a bare 45-character artifact code.
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        if code.len() != TAIL_LEN || !code.is_char_boundary(TAG_LEN) {
            return Err(ValidationError::PatternMismatch {
                field: "artifact_code",
                value: code.to_string(),
            });
        }
        let (tag, digest) = code.split_at(TAG_LEN);
        Ok(Self {
            tag: ModuleTag::parse(tag)?,
            digest: Digest::new(DigestAlg::Sha256, digest)?,
        })
    }

    /// Module tag.
    pub fn tag(&self) -> &ModuleTag {
        &self.tag
    }

    /// Declared digest.
    pub fn digest(&self) -> &Digest {
        &self.digest
    }
}

impl fmt::Display for ArtifactCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag, self.digest)
    }
}

impl FromStr for ArtifactCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ArtifactCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ArtifactCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
