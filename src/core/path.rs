use std::fmt;

use smallvec::SmallVec;

use crate::error::{BridgeError, BridgeResult};

pub const DEFAULT_PATH_DELIMITER: char = '/';

/// Parsed option address such as `dataLabels/style/fontWeight`.
///
/// Parsing is purely syntactic: empty segments produced by leading, trailing
/// or doubled delimiters are skipped and no segment is checked against a
/// schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionPath {
    segments: SmallVec<[String; 4]>,
}

impl OptionPath {
    pub fn parse(raw: &str) -> BridgeResult<Self> {
        Self::parse_with_delimiter(raw, DEFAULT_PATH_DELIMITER)
    }

    pub fn parse_with_delimiter(raw: &str, delimiter: char) -> BridgeResult<Self> {
        let segments: SmallVec<[String; 4]> = raw
            .split(delimiter)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();
        if segments.is_empty() {
            return Err(BridgeError::InvalidPath(raw.to_owned()));
        }
        Ok(Self { segments })
    }

    /// Builds a path from already-split segments, skipping empty ones.
    pub fn from_segments<I, S>(segments: I) -> BridgeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: SmallVec<[String; 4]> = segments
            .into_iter()
            .map(Into::into)
            .filter(|segment: &String| !segment.is_empty())
            .collect();
        if segments.is_empty() {
            return Err(BridgeError::InvalidPath(String::new()));
        }
        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits into the intermediate segments and the terminal key.
    #[must_use]
    pub fn split_terminal(&self) -> (&[String], &str) {
        // Construction rejects empty paths, so the fallback arm is unreachable.
        match self.segments.split_last() {
            Some((last, parents)) => (parents, last.as_str()),
            None => (&[], ""),
        }
    }

    /// Returns a new path with `child` appended below `self`.
    #[must_use]
    pub fn join(&self, child: &OptionPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(child.segments.iter().cloned());
        Self { segments }
    }
}

impl fmt::Display for OptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{DEFAULT_PATH_DELIMITER}{segment}")?;
        }
        Ok(())
    }
}
