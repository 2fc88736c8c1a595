//! Recursive descent parser for schema documents.
//!
//! [`SdlParser`] works with any token source implementing
//! [`SdlTokenSource`]. Each grammar rule has a `parse_*` method returning
//! `Result<_, SdlParseError>`.
//!
//! # Failure Model
//!
//! Parsing is fail-fast: the first lexical or structural error aborts the
//! parse. There is no resynchronization. [`SdlParser::parse_schema_document`]
//! is the single place errors are caught, and it drains the token source
//! before returning one so that a pipelined scanner is never left blocked.

use crate::SdlParseError;
use crate::SdlParseErrorKind;
use crate::SdlSourceSpan;
use crate::SdlTokenStream;
use crate::SourcePosition;
use crate::ast::ArgumentDeclaration;
use crate::ast::Declaration;
use crate::ast::EnumTypeDeclaration;
use crate::ast::EnumValueDeclaration;
use crate::ast::FieldDeclaration;
use crate::ast::InputObjectTypeDeclaration;
use crate::ast::InterfaceTypeDeclaration;
use crate::ast::ObjectTypeDeclaration;
use crate::ast::RawTypeRef;
use crate::ast::RootOperationKind;
use crate::ast::ScalarTypeDeclaration;
use crate::ast::SchemaDeclaration;
use crate::ast::SchemaDocument;
use crate::ast::UnionTypeDeclaration;
use crate::token::SdlKeyword;
use crate::token::SdlToken;
use crate::token::SdlTokenKind;
use crate::token_source::SdlTokenSource;
use crate::token_source::StrSdlTokenSource;
use crate::token_source::with_pipelined_tokens;
use std::path::Path;

type Result<T> = std::result::Result<T, SdlParseError>;

const DECLARATION_KEYWORDS: &[&str] =
    &["type", "interface", "input", "union", "enum", "scalar", "schema"];

/// Which kind of body a field list belongs to.
#[derive(Clone, Copy, Debug)]
enum FieldsContext {
    ObjectType,
    InterfaceType,
    InputObjectType,
}

impl FieldsContext {
    fn description(&self) -> &'static str {
        match self {
            FieldsContext::ObjectType => "object type declaration",
            FieldsContext::InterfaceType => "interface declaration",
            FieldsContext::InputObjectType => "input object declaration",
        }
    }

    fn allows_arguments(&self) -> bool {
        !matches!(self, FieldsContext::InputObjectType)
    }
}

/// A fail-fast parser for schema documents.
///
/// # Example
///
/// ```
/// use gqlsdl_parser::SdlParser;
///
/// let doc = SdlParser::new("type Query { hello: String }")
///     .parse_schema_document()
///     .unwrap();
/// assert_eq!(doc.declarations.len(), 1);
/// ```
pub struct SdlParser<'src, TTokenSource: SdlTokenSource<'src>> {
    token_stream: SdlTokenStream<'src, TTokenSource>,

    /// End position of the most recently consumed token, used to anchor
    /// errors when the token source ends unexpectedly.
    last_end_position: Option<SourcePosition>,
}

impl<'src> SdlParser<'src, StrSdlTokenSource<'src>> {
    /// Creates a parser that scans `source` on the calling thread.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrSdlTokenSource::new(source.as_ref()))
    }

    /// Like [`new`](Self::new), with `path` recorded in every span.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self::from_token_source(StrSdlTokenSource::with_file_path(source, path))
    }

    /// Parses `source` with the scanner running on its own thread, handing
    /// tokens over a rendezvous channel. Produces the same result as the
    /// synchronous path.
    pub fn parse_pipelined(
        source: &'src str,
        file_path: Option<&'src Path>,
    ) -> std::result::Result<SchemaDocument, SdlParseError> {
        with_pipelined_tokens(source, file_path, |token_source| {
            SdlParser::from_token_source(token_source).parse_schema_document()
        })
    }
}

impl<'src, TTokenSource: SdlTokenSource<'src>> SdlParser<'src, TTokenSource> {
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: SdlTokenStream::new(token_source),
            last_end_position: None,
        }
    }

    /// Parses every declaration up to end of input.
    ///
    /// On error the remaining tokens are drained from the source before the
    /// error is returned.
    pub fn parse_schema_document(mut self) -> std::result::Result<SchemaDocument, SdlParseError> {
        match self.parse_declarations() {
            Ok(document) => {
                log::debug!(
                    "parsed {} declaration(s) ending on line {}",
                    document.declarations.len(),
                    document.eof_line,
                );
                Ok(document)
            }
            Err(error) => {
                let discarded = self.token_stream.drain();
                log::debug!(
                    "parse failed on line {}; discarded {discarded} unread token(s)",
                    error.line(),
                );
                Err(error)
            }
        }
    }

    fn parse_declarations(&mut self) -> Result<SchemaDocument> {
        let mut declarations = vec![];
        loop {
            let description = self.parse_description()?;
            if self.peek_is(&SdlTokenKind::Eof)? {
                let eof = self.consume_token()?;
                // A description must be followed by the declaration it describes.
                if description.is_some() {
                    return Err(Self::unexpected(&eof, DECLARATION_KEYWORDS, "document"));
                }
                return Ok(SchemaDocument {
                    declarations,
                    eof_line: eof.line(),
                });
            }
            let declaration = self.parse_declaration(description)?;
            log::trace!(
                "parsed `{}` declaration {:?} on line {}",
                declaration.kind(),
                declaration.name(),
                declaration.line(),
            );
            declarations.push(declaration);
        }
    }

    fn parse_declaration(&mut self, description: Option<String>) -> Result<Declaration> {
        let keyword = match &self.peek_required("declaration")?.kind {
            SdlTokenKind::Keyword(keyword) => Some(*keyword),
            _ => None,
        };
        match keyword {
            Some(SdlKeyword::Type) => self
                .parse_object_type_declaration(description)
                .map(Declaration::Object),
            Some(SdlKeyword::Interface) => self
                .parse_interface_type_declaration(description)
                .map(Declaration::Interface),
            Some(SdlKeyword::Input) => self
                .parse_input_object_type_declaration(description)
                .map(Declaration::InputObject),
            Some(SdlKeyword::Union) => self
                .parse_union_type_declaration(description)
                .map(Declaration::Union),
            Some(SdlKeyword::Enum) => self
                .parse_enum_type_declaration(description)
                .map(Declaration::Enum),
            Some(SdlKeyword::Scalar) => self
                .parse_scalar_type_declaration(description)
                .map(Declaration::Scalar),
            Some(SdlKeyword::Schema) => self.parse_schema_declaration().map(Declaration::Schema),
            Some(SdlKeyword::Implements) | None => {
                let token = self.consume_token()?;
                Err(Self::unexpected(&token, DECLARATION_KEYWORDS, "document"))
            }
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// `type Name (implements A (& B)*)? { fields }`
    fn parse_object_type_declaration(
        &mut self,
        description: Option<String>,
    ) -> Result<ObjectTypeDeclaration> {
        let line = self.expect_keyword(SdlKeyword::Type)?.line();
        let (name, _) = self.expect_name("object type declaration")?;

        let mut implements = vec![];
        if self.peek_is(&SdlTokenKind::Keyword(SdlKeyword::Implements))? {
            self.consume_token()?;
            if self.peek_is(&SdlTokenKind::Ampersand)? {
                self.consume_token()?;
            }
            loop {
                let (iface, iface_line) = self.expect_name("implements list")?;
                implements.push(RawTypeRef::named(iface, iface_line));
                if !self.peek_is(&SdlTokenKind::Ampersand)? {
                    break;
                }
                self.consume_token()?;
            }
        }

        let fields = self.parse_fields(FieldsContext::ObjectType)?;
        Ok(ObjectTypeDeclaration {
            name,
            description,
            implements,
            fields,
            line,
        })
    }

    fn parse_interface_type_declaration(
        &mut self,
        description: Option<String>,
    ) -> Result<InterfaceTypeDeclaration> {
        let line = self.expect_keyword(SdlKeyword::Interface)?.line();
        let (name, _) = self.expect_name("interface declaration")?;
        let fields = self.parse_fields(FieldsContext::InterfaceType)?;
        Ok(InterfaceTypeDeclaration {
            name,
            description,
            fields,
            line,
        })
    }

    fn parse_input_object_type_declaration(
        &mut self,
        description: Option<String>,
    ) -> Result<InputObjectTypeDeclaration> {
        let line = self.expect_keyword(SdlKeyword::Input)?.line();
        let (name, _) = self.expect_name("input object declaration")?;
        let fields = self.parse_fields(FieldsContext::InputObjectType)?;
        Ok(InputObjectTypeDeclaration {
            name,
            description,
            fields,
            line,
        })
    }

    /// `union Name = Member (| Member)*` terminated by the end of the line.
    ///
    /// A `|` must sit between two members: a leading, doubled, or trailing
    /// `|` is [`SdlParseErrorKind::MalformedUnionMembers`].
    fn parse_union_type_declaration(
        &mut self,
        description: Option<String>,
    ) -> Result<UnionTypeDeclaration> {
        let line = self.expect_keyword(SdlKeyword::Union)?.line();
        let (name, _) = self.expect_name("union declaration")?;
        self.expect(&SdlTokenKind::Equals, "union declaration")?;

        let mut members = vec![];
        let mut after_pipe = false;
        loop {
            let token = self.consume_token()?;
            match token.kind {
                SdlTokenKind::Name(member) => members.push(member.into_owned()),
                SdlTokenKind::Keyword(keyword) => members.push(keyword.as_str().to_string()),
                SdlTokenKind::Pipe => {
                    let message = if members.is_empty() {
                        "expected union member before `|`"
                    } else {
                        "expected union member between `|` and `|`"
                    };
                    return Err(SdlParseError::new(
                        message,
                        token.span,
                        SdlParseErrorKind::MalformedUnionMembers,
                    ));
                }
                SdlTokenKind::UnionEnd if after_pipe => {
                    let mut error = SdlParseError::new(
                        "expected union member after trailing `|`",
                        token.span,
                        SdlParseErrorKind::MalformedUnionMembers,
                    );
                    error.add_help("union members must all be listed on the `union` line");
                    return Err(error);
                }
                _ => return Err(Self::unexpected(&token, &["union member"], "union declaration")),
            }

            let token = self.consume_token()?;
            match token.kind {
                SdlTokenKind::UnionEnd => break,
                SdlTokenKind::Pipe => after_pipe = true,
                _ => {
                    return Err(Self::unexpected(
                        &token,
                        &["|", "end of line"],
                        "union declaration",
                    ));
                }
            }
        }

        Ok(UnionTypeDeclaration {
            name,
            description,
            members,
            line,
        })
    }

    fn parse_enum_type_declaration(
        &mut self,
        description: Option<String>,
    ) -> Result<EnumTypeDeclaration> {
        let line = self.expect_keyword(SdlKeyword::Enum)?.line();
        let (name, _) = self.expect_name("enum declaration")?;
        self.expect(&SdlTokenKind::CurlyBraceOpen, "enum declaration")?;

        let mut values = vec![];
        loop {
            let value_description = self.parse_description()?;
            if self.peek_is(&SdlTokenKind::CurlyBraceClose)? {
                self.consume_token()?;
                break;
            }
            let (value, value_line) = self.expect_name("enum value")?;
            values.push(EnumValueDeclaration {
                name: value,
                description: value_description,
                line: value_line,
            });
        }

        Ok(EnumTypeDeclaration {
            name,
            description,
            values,
            line,
        })
    }

    fn parse_scalar_type_declaration(
        &mut self,
        description: Option<String>,
    ) -> Result<ScalarTypeDeclaration> {
        let line = self.expect_keyword(SdlKeyword::Scalar)?.line();
        let (name, _) = self.expect_name("scalar declaration")?;
        Ok(ScalarTypeDeclaration {
            name,
            description,
            line,
        })
    }

    /// `schema { query: Q mutation: M }`
    fn parse_schema_declaration(&mut self) -> Result<SchemaDeclaration> {
        let line = self.expect_keyword(SdlKeyword::Schema)?.line();
        self.expect(&SdlTokenKind::CurlyBraceOpen, "schema declaration")?;

        let mut schema = SchemaDeclaration {
            query: None,
            mutation: None,
            line,
        };
        while !self.peek_is(&SdlTokenKind::CurlyBraceClose)? {
            let token = self.consume_token()?;
            let operation = match &token.kind {
                SdlTokenKind::Name(name) => RootOperationKind::from_schema_field(name),
                _ => None,
            };
            let Some(operation) = operation else {
                return Err(Self::unexpected(
                    &token,
                    &["query", "mutation", "}"],
                    "schema declaration",
                ));
            };
            self.expect(&SdlTokenKind::Colon, "schema declaration")?;
            let (type_name, type_line) = self.expect_name("schema declaration")?;

            let slot = match operation {
                RootOperationKind::Query => &mut schema.query,
                RootOperationKind::Mutation => &mut schema.mutation,
            };
            if let Some(previous) = slot.as_ref() {
                let mut error = SdlParseError::new(
                    format!("root operation `{operation}` is declared more than once"),
                    token.span,
                    SdlParseErrorKind::DuplicateRootOperation {
                        operation: operation.to_string(),
                    },
                );
                error.add_note(format!(
                    "first declared as `{}` on line {}",
                    previous.name, previous.line,
                ));
                return Err(error);
            }
            *slot = Some(RawTypeRef::named(type_name, type_line));
        }
        self.consume_token()?;

        Ok(schema)
    }

    // =========================================================================
    // Fields, arguments and type references
    // =========================================================================

    /// `{ (description? field)* }`. A description directly before `}` is
    /// accepted and dropped.
    fn parse_fields(&mut self, context: FieldsContext) -> Result<Vec<FieldDeclaration>> {
        self.expect(&SdlTokenKind::CurlyBraceOpen, context.description())?;

        let mut fields = vec![];
        loop {
            let description = self.parse_description()?;
            if self.peek_is(&SdlTokenKind::CurlyBraceClose)? {
                self.consume_token()?;
                return Ok(fields);
            }
            fields.push(self.parse_field(description, context)?);
        }
    }

    /// `name ( '(' args ')' )? ':' TypeRef`
    fn parse_field(
        &mut self,
        description: Option<String>,
        context: FieldsContext,
    ) -> Result<FieldDeclaration> {
        let (name, line) = self.expect_name("field definition")?;

        let arguments = if context.allows_arguments() && self.peek_is(&SdlTokenKind::ParenOpen)? {
            self.parse_arguments()?
        } else {
            vec![]
        };

        self.expect(&SdlTokenKind::Colon, "field definition")?;
        let type_ref = self.parse_type_ref("field definition")?;

        Ok(FieldDeclaration {
            name,
            description,
            arguments,
            type_ref,
            line,
        })
    }

    /// `'(' ArgDecl (',' ArgDecl)* ')'`
    fn parse_arguments(&mut self) -> Result<Vec<ArgumentDeclaration>> {
        self.expect(&SdlTokenKind::ParenOpen, "argument list")?;

        let mut arguments = vec![];
        loop {
            let (name, line) = self.expect_name("argument definition")?;
            self.expect(&SdlTokenKind::Colon, "argument definition")?;
            let type_ref = self.parse_type_ref("argument definition")?;
            let default_value = if self.peek_is(&SdlTokenKind::Equals)? {
                self.consume_token()?;
                Some(self.parse_default_value()?)
            } else {
                None
            };
            arguments.push(ArgumentDeclaration {
                name,
                type_ref,
                default_value,
                line,
            });

            let token = self.consume_token()?;
            match token.kind {
                SdlTokenKind::Comma => continue,
                SdlTokenKind::ParenClose => return Ok(arguments),
                _ => return Err(Self::unexpected(&token, &[",", ")"], "argument list")),
            }
        }
    }

    /// Captures the raw text of a default value: every token up to the next
    /// `,` or `)` outside of brackets.
    fn parse_default_value(&mut self) -> Result<String> {
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            let token = self.consume_token()?;
            match token.kind {
                SdlTokenKind::Comma | SdlTokenKind::ParenClose if depth == 0 => {
                    if text.is_empty() {
                        return Err(Self::unexpected(&token, &["default value"], "argument definition"));
                    }
                    self.token_stream.push_back(token);
                    return Ok(text);
                }
                SdlTokenKind::SquareBracketOpen => depth += 1,
                SdlTokenKind::SquareBracketClose => depth = depth.saturating_sub(1),
                SdlTokenKind::Eof => {
                    return Err(Self::unexpected(&token, &["default value"], "argument definition"));
                }
                _ => (),
            }
            text.push_str(token.text());
            if matches!(token.kind, SdlTokenKind::Comma) {
                text.push(' ');
            }
        }
    }

    /// `'['? Name '!'? ']'? '!'?`
    fn parse_type_ref(&mut self, context: &str) -> Result<RawTypeRef> {
        if !self.peek_is(&SdlTokenKind::SquareBracketOpen)? {
            let (name, line) = self.expect_name(context)?;
            let is_non_null = self.consume_if(&SdlTokenKind::Bang)?;
            return Ok(RawTypeRef {
                name,
                is_list: false,
                is_non_null,
                is_list_item_non_null: false,
                line,
            });
        }

        let line = self.consume_token()?.line();
        let (name, _) = self.expect_name("list type")?;
        let is_list_item_non_null = self.consume_if(&SdlTokenKind::Bang)?;
        self.expect(&SdlTokenKind::SquareBracketClose, "list type")?;
        let is_non_null = self.consume_if(&SdlTokenKind::Bang)?;
        Ok(RawTypeRef {
            name,
            is_list: true,
            is_non_null,
            is_list_item_non_null,
            line,
        })
    }

    fn parse_description(&mut self) -> Result<Option<String>> {
        if !self.peek_is(&SdlTokenKind::StringValue("".into()))? {
            return Ok(None);
        }
        let token = self.consume_token()?;
        Ok(Some(token.text().to_string()))
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Consumes the next token. A scanner `Error` token becomes a
    /// [`SdlParseErrorKind::LexerError`].
    fn consume_token(&mut self) -> Result<SdlToken<'src>> {
        let Some(token) = self.token_stream.consume() else {
            return Err(self.source_exhausted_error());
        };
        self.last_end_position = Some(token.span.end_exclusive.clone());
        if let SdlTokenKind::Error { message, error_notes } = token.kind {
            return Err(SdlParseError::from_lexer_error(message, token.span, error_notes));
        }
        Ok(token)
    }

    /// Peeks at the next token, failing on a scanner error or an exhausted
    /// source.
    fn peek_required(&mut self, context: &str) -> Result<&SdlToken<'src>> {
        let is_error = match self.token_stream.peek() {
            Some(token) => token.kind.is_error(),
            None => {
                let mut error = self.source_exhausted_error();
                error.add_note(format!("while parsing {context}"));
                return Err(error);
            }
        };
        if is_error {
            return match self.consume_token() {
                Err(error) => Err(error),
                Ok(_) => unreachable!("an error token was peeked"),
            };
        }
        match self.token_stream.peek() {
            Some(token) => Ok(token),
            None => unreachable!("a token was peeked"),
        }
    }

    /// Checks if the next token has the same kind (ignoring payloads) as
    /// `kind` without consuming it.
    fn peek_is(&mut self, kind: &SdlTokenKind<'_>) -> Result<bool> {
        let token = self.peek_required("the next token")?;
        Ok(Self::token_kinds_match(&token.kind, kind))
    }

    fn consume_if(&mut self, kind: &SdlTokenKind<'_>) -> Result<bool> {
        if self.peek_is(kind)? {
            self.consume_token()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn expect(&mut self, expected: &SdlTokenKind<'_>, context: &str) -> Result<SdlToken<'src>> {
        let token = self.consume_token()?;
        if Self::token_kinds_match(&token.kind, expected) {
            return Ok(token);
        }
        Err(Self::unexpected(
            &token,
            &[Self::token_kind_display(expected).as_str()],
            context,
        ))
    }

    fn expect_keyword(&mut self, keyword: SdlKeyword) -> Result<SdlToken<'src>> {
        let token = self.consume_token()?;
        match token.kind {
            SdlTokenKind::Keyword(found) if found == keyword => Ok(token),
            _ => Err(Self::unexpected(&token, &[keyword.as_str()], "declaration")),
        }
    }

    /// Expects a name and returns it with its 1-based line. Keywords are
    /// accepted as names.
    fn expect_name(&mut self, context: &str) -> Result<(String, usize)> {
        let token = self.consume_token()?;
        let line = token.line();
        match token.kind {
            SdlTokenKind::Name(name) => Ok((name.into_owned(), line)),
            SdlTokenKind::Keyword(keyword) => Ok((keyword.as_str().to_string(), line)),
            _ => Err(Self::unexpected(&token, &["name"], context)),
        }
    }

    /// Builds the error for a token that does not fit the grammar at this
    /// point.
    fn unexpected(token: &SdlToken<'_>, expected: &[&str], context: &str) -> SdlParseError {
        let expected_display = expected
            .iter()
            .map(|e| format!("`{e}`"))
            .collect::<Vec<_>>()
            .join(" or ");
        let expected = expected.iter().map(|e| e.to_string()).collect();

        if matches!(token.kind, SdlTokenKind::Eof) {
            return SdlParseError::new(
                format!("expected {expected_display} in {context}, found end of input"),
                token.span.clone(),
                SdlParseErrorKind::UnexpectedEof { expected },
            );
        }

        let found = Self::token_kind_display(&token.kind);
        SdlParseError::new(
            format!("expected {expected_display} in {context}, found `{found}`"),
            token.span.clone(),
            SdlParseErrorKind::UnexpectedToken { expected, found },
        )
    }

    /// The token source ended without producing `Eof` or `Error`.
    fn source_exhausted_error(&self) -> SdlParseError {
        let position = self
            .last_end_position
            .clone()
            .unwrap_or_else(|| SourcePosition::new(0, 0, 0));
        SdlParseError::new(
            "token source ended without an end-of-input token",
            SdlSourceSpan::empty_at(position),
            SdlParseErrorKind::UnexpectedEof { expected: vec![] },
        )
    }

    fn token_kind_display(kind: &SdlTokenKind<'_>) -> String {
        match kind {
            SdlTokenKind::Name(name) => name.to_string(),
            SdlTokenKind::Keyword(keyword) => keyword.as_str().to_string(),
            SdlTokenKind::StringValue(_) => "text block".to_string(),
            SdlTokenKind::UnionEnd => "end of union member list".to_string(),
            SdlTokenKind::Eof => "end of input".to_string(),
            SdlTokenKind::Error { message, .. } => format!("lexical error: {message}"),
            punct => punct.as_punctuator_str().unwrap_or_default().to_string(),
        }
    }

    /// Compares token kinds, ignoring payloads except for keywords.
    fn token_kinds_match(actual: &SdlTokenKind<'_>, expected: &SdlTokenKind<'_>) -> bool {
        match (actual, expected) {
            (SdlTokenKind::Keyword(a), SdlTokenKind::Keyword(b)) => a == b,
            _ => std::mem::discriminant(actual) == std::mem::discriminant(expected),
        }
    }
}
