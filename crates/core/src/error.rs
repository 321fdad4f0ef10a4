use crate::frontmatter::FrontmatterError;
use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Optional file path
    pub file: Option<String>,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    /// Create a source location with file information
    pub fn with_file(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: Some(file.into()),
            line,
            column,
        }
    }

    /// Start of a markdown-rs node position, if the node has one.
    pub fn from_position(position: Option<&markdown::unist::Position>) -> Option<Self> {
        position.map(|p| Self::new(p.start.line, p.start.column))
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}:{}:{}", file, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Errors that stop a render.
#[derive(Debug, Error)]
pub enum FolioError {
    /// markdown-rs rejected the document.
    #[error("Parse error at {location}: {message}")]
    Parse {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// Frontmatter could not be extracted.
    #[error(transparent)]
    Frontmatter(#[from] FrontmatterError),
    /// A tag that names no known node kind.
    #[error("Unknown node kind tag '{0}'")]
    UnknownTag(String),
    /// A component paired with a node kind it cannot draw.
    #[error("Component {component} cannot render <{tag}>")]
    ComponentMismatch {
        /// Component name.
        component: String,
        /// Tag of the node kind.
        tag: String,
    },
    /// Navigation entries broke an invariant (empty list, empty dropdown).
    #[error("Invalid navigation: {0}")]
    InvalidNavigation(String),
    /// Configuration could not be decoded.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl FolioError {
    /// Create a parse error with location
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Parse {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }
}

/// Non-fatal conditions found while rendering.
///
/// None of these stop the render; the affected node is drawn with its
/// fallback treatment and the warning is returned alongside the HTML.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderWarning {
    /// A heading depth with no entry in the title-size table.
    UnmappedHeading {
        /// Depth the title renderer was invoked with.
        depth: u8,
        /// Where the heading starts, when known.
        location: Option<SourceLocation>,
    },
    /// A link without an `href`, rendered as external.
    MissingHref {
        /// Where the link starts, when known.
        location: Option<SourceLocation>,
    },
    /// A capitalised JSX element with no registered component.
    UnknownComponent {
        /// Element name as written.
        name: String,
        /// Where the element starts, when known.
        location: Option<SourceLocation>,
    },
    /// An image `ratio` that is neither a number nor `a/b`.
    InvalidRatio {
        /// The value as written.
        value: String,
        /// Where the image starts, when known.
        location: Option<SourceLocation>,
    },
}

impl RenderWarning {
    /// Get the location of this warning
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            RenderWarning::UnmappedHeading { location, .. }
            | RenderWarning::MissingHref { location }
            | RenderWarning::UnknownComponent { location, .. }
            | RenderWarning::InvalidRatio { location, .. } => location.as_ref(),
        }
    }

    fn location_mut(&mut self) -> Option<&mut SourceLocation> {
        match self {
            RenderWarning::UnmappedHeading { location, .. }
            | RenderWarning::MissingHref { location }
            | RenderWarning::UnknownComponent { location, .. }
            | RenderWarning::InvalidRatio { location, .. } => location.as_mut(),
        }
    }
}

impl std::fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(location) = self.location() {
            write!(f, "{location}: ")?;
        }
        match self {
            RenderWarning::UnmappedHeading { depth, .. } => {
                write!(f, "no title size for heading depth {depth}")
            }
            RenderWarning::MissingHref { .. } => {
                write!(f, "link has no href, rendered as external")
            }
            RenderWarning::UnknownComponent { name, .. } => {
                write!(f, "no component registered for <{name}>")
            }
            RenderWarning::InvalidRatio { value, .. } => {
                write!(f, "image ratio '{value}' is not a number")
            }
        }
    }
}

/// Warnings collected over one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderDiagnostics {
    /// Warnings in the order they were found.
    pub warnings: Vec<RenderWarning>,
}

impl RenderDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning and logs it.
    pub fn warn(&mut self, warning: RenderWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Moves every warning of `other` into `self`.
    pub fn append(&mut self, other: &mut RenderDiagnostics) {
        self.warnings.append(&mut other.warnings);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of warnings.
    pub fn count(&self) -> usize {
        self.warnings.len()
    }

    /// Moves every location down by `lines`, for bodies rendered after a
    /// frontmatter block was cut off the top of the file.
    pub fn offset_lines(&mut self, lines: usize) {
        for location in self.warnings.iter_mut().filter_map(RenderWarning::location_mut) {
            location.line += lines;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display() {
        assert_eq!(SourceLocation::new(3, 7).to_string(), "3:7");
        assert_eq!(
            SourceLocation::with_file("post.mdx", 3, 7).to_string(),
            "post.mdx:3:7"
        );
    }

    #[test]
    fn warning_display_includes_location() {
        let warning = RenderWarning::UnmappedHeading {
            depth: 7,
            location: Some(SourceLocation::new(2, 1)),
        };
        insta::assert_snapshot!(warning.to_string(), @"2:1: no title size for heading depth 7");
    }

    #[test]
    fn diagnostics_collect_in_order() {
        let mut diagnostics = RenderDiagnostics::new();
        assert!(!diagnostics.has_warnings());
        diagnostics.warn(RenderWarning::MissingHref { location: None });
        let mut other = RenderDiagnostics::new();
        other.warn(RenderWarning::InvalidRatio {
            value: "wide".into(),
            location: None,
        });
        diagnostics.append(&mut other);
        assert_eq!(diagnostics.count(), 2);
        assert!(other.warnings.is_empty());
        assert_eq!(
            diagnostics.warnings[0],
            RenderWarning::MissingHref { location: None }
        );
    }

    #[test]
    fn offset_moves_known_locations_only() {
        let mut diagnostics = RenderDiagnostics::new();
        diagnostics.warn(RenderWarning::MissingHref {
            location: Some(SourceLocation::new(2, 4)),
        });
        diagnostics.warn(RenderWarning::MissingHref { location: None });
        diagnostics.offset_lines(5);
        assert_eq!(
            diagnostics.warnings[0].location(),
            Some(&SourceLocation::new(7, 4))
        );
        assert_eq!(diagnostics.warnings[1].location(), None);
    }
}
