use crate::token::SdlToken;

/// Marker trait for [`SdlToken`] producers (iterators that generate
/// [`SdlToken`]s).
///
/// [`StrSdlTokenSource`](crate::token_source::StrSdlTokenSource) scans a
/// `&str` on the calling thread;
/// [`ChannelSdlTokenSource`](crate::token_source::ChannelSdlTokenSource)
/// receives tokens from a scanner running on another thread.
///
/// Token sources are responsible for:
/// - Skipping whitespace and comments
/// - Emitting exactly one terminal token, either
///   [`SdlTokenKind::Eof`](crate::token::SdlTokenKind::Eof) or
///   [`SdlTokenKind::Error`](crate::token::SdlTokenKind::Error), and then
///   yielding `None`
///
/// All lookahead and push-back is handled by
/// [`SdlTokenStream`](crate::SdlTokenStream).
pub trait SdlTokenSource<'src>: Iterator<Item = SdlToken<'src>> {}

impl<'src, T> SdlTokenSource<'src> for T where T: Iterator<Item = SdlToken<'src>> {}
