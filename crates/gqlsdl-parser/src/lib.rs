//! A scanner and parser for a practical subset of the GraphQL schema
//! definition language: object, interface, input, union, enum and scalar
//! declarations, `schema { ... }` root operation blocks, field arguments,
//! list and non-null type references, and `"""` descriptions.
//!
//! The scanner ([`token_source::StrSdlTokenSource`]) is driven by a
//! pushdown stack of lexical modes. It can run on the parser's thread or on
//! a producer thread feeding the parser over a rendezvous channel
//! ([`SdlParser::parse_pipelined`]). The parser ([`SdlParser`]) is
//! fail-fast and produces owned declaration records ([`ast`]) with raw,
//! unresolved type references.

pub mod ast;
mod dump_tokens;
mod lex_mode;
mod sdl_error_note;
mod sdl_parse_error;
mod sdl_parse_error_kind;
mod sdl_parser;
mod sdl_source_span;
mod sdl_token_stream;
mod source_position;
pub mod token;
pub mod token_source;

pub use dump_tokens::dump_tokens;
pub use lex_mode::LexMode;
pub use sdl_error_note::SdlErrorNote;
pub use sdl_error_note::SdlErrorNoteKind;
pub use sdl_error_note::SdlErrorNotes;
pub use sdl_parse_error::SdlParseError;
pub use sdl_parse_error_kind::SdlParseErrorKind;
pub use sdl_parser::SdlParser;
pub use sdl_source_span::SdlSourceSpan;
pub use sdl_token_stream::SdlTokenStream;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
