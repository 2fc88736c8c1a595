//! Token source trait and implementations.

mod channel_sdl_token_source;
mod sdl_token_source;
mod str_sdl_token_source;

pub use channel_sdl_token_source::ChannelSdlTokenSource;
pub use channel_sdl_token_source::with_pipelined_tokens;
pub use sdl_token_source::SdlTokenSource;
pub use str_sdl_token_source::StrSdlTokenSource;

#[cfg(test)]
mod tests;
