//! Token types produced by the scanner and consumed by the parser.

mod sdl_keyword;
mod sdl_token;
mod sdl_token_kind;

pub use sdl_keyword::SdlKeyword;
pub use sdl_token::SdlToken;
pub use sdl_token_kind::SdlTokenKind;
