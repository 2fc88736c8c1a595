use crate::types::GraphQLTypeKind;
use gqlsdl_parser::SdlParseError;
use gqlsdl_parser::ast::RootOperationKind;
use std::path::PathBuf;

/// Everything that can stop a schema from being built.
///
/// Every build call fails with exactly one of these: the first error
/// encountered, whether in parsing or resolution, aborts the build.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("a root `{operation}` type is declared more than once (line {line})")]
    DuplicateRootOperationDefinition {
        operation: RootOperationKind,
        line: usize,
    },

    #[error(
        "`{member_name}` is defined more than once in `{type_name}` (line {line})"
    )]
    DuplicateMemberName {
        type_name: String,
        member_name: String,
        line: usize,
    },

    #[error("{}", duplicate_type_message(type_name, *first_line, *line))]
    DuplicateTypeDefinition {
        type_name: String,
        /// `None` when the first definition is a built-in scalar.
        first_line: Option<usize>,
        line: usize,
    },

    #[error(
        "the root `{operation}` type `{type_name}` must be an object type, \
        found {found} (line {line})"
    )]
    InvalidRootOperationType {
        operation: RootOperationKind,
        type_name: String,
        found: GraphQLTypeKind,
        line: usize,
    },

    #[error(
        "`{type_name}` is referenced where {expected} is required, but it is \
        declared as {found} (line {line})"
    )]
    InvalidTypeReference {
        type_name: String,
        expected: &'static str,
        found: GraphQLTypeKind,
        line: usize,
    },

    #[error("no root query operation type is defined")]
    NoQueryOperationTypeDefined,

    #[error("{}", parse_error_message(file, error))]
    ParseError {
        file: Option<PathBuf>,
        error: SdlParseError,
    },

    #[error("failed to read schema file `{}`: {message}", path.display())]
    SchemaFileReadError {
        path: PathBuf,
        message: String,
    },

    #[error("async runtime unavailable for concurrent resolution: {message}")]
    AsyncRuntimeError {
        message: String,
    },

    #[error("undeclared type `{name}` referenced on line {line}")]
    UndeclaredType {
        name: String,
        line: usize,
    },
}
impl SchemaBuildError {
    /// The 1-based source line at which the failure was detected, when
    /// the failure has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::DuplicateRootOperationDefinition { line, .. }
            | Self::DuplicateMemberName { line, .. }
            | Self::DuplicateTypeDefinition { line, .. }
            | Self::InvalidRootOperationType { line, .. }
            | Self::InvalidTypeReference { line, .. }
            | Self::UndeclaredType { line, .. } => Some(*line),
            Self::ParseError { error, .. } => Some(error.line()),
            Self::AsyncRuntimeError { .. }
            | Self::NoQueryOperationTypeDefined
            | Self::SchemaFileReadError { .. } => None,
        }
    }
}

fn duplicate_type_message(
    type_name: &str,
    first_line: Option<usize>,
    line: usize,
) -> String {
    match first_line {
        Some(first_line) => format!(
            "type `{type_name}` is defined more than once (lines {first_line} and {line})",
        ),
        None => format!(
            "type `{type_name}` on line {line} redefines a built-in scalar",
        ),
    }
}

fn parse_error_message(file: &Option<PathBuf>, error: &SdlParseError) -> String {
    match file {
        // The parse error's own location already names the file.
        Some(_) => format!("schema parse error: {error}"),
        None => format!("schema parse error: line {}: {}", error.line(), error.message()),
    }
}
