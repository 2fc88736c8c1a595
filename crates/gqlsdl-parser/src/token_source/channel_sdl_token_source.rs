//! A pipelined token source: the scanner runs on its own thread and hands
//! tokens over a rendezvous channel, so scanning overlaps with parsing and is
//! backpressured by the consumer's read rate.

use crate::token::SdlToken;
use crate::token_source::StrSdlTokenSource;
use crossbeam_channel::Receiver;
use std::path::Path;

/// The receiving half of a pipelined scanner.
///
/// Only obtainable through [`with_pipelined_tokens`], which guarantees the
/// producer thread is drained and joined before returning.
pub struct ChannelSdlTokenSource<'src> {
    receiver: Receiver<SdlToken<'src>>,
}

impl<'src> ChannelSdlTokenSource<'src> {
    /// Receives and discards every remaining token, returning how many were
    /// discarded. Returns once the producer has finished.
    pub fn drain(&mut self) -> usize {
        self.receiver.iter().count()
    }
}

impl<'src> Iterator for ChannelSdlTokenSource<'src> {
    type Item = SdlToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.recv().ok()
    }
}

/// Runs a scanner over `source` on a scoped producer thread and hands the
/// receiving token source to `consumer`.
///
/// The channel has capacity zero: the scanner blocks until the consumer
/// takes each token. Whatever `consumer` leaves unread is drained before
/// this function returns, so the producer is never left blocked.
pub fn with_pipelined_tokens<'src, R>(
    source: &'src str,
    file_path: Option<&'src Path>,
    consumer: impl FnOnce(&mut ChannelSdlTokenSource<'src>) -> R,
) -> R {
    let (sender, receiver) = crossbeam_channel::bounded(0);

    std::thread::scope(|scope| {
        scope.spawn(move || {
            let scanner = match file_path {
                Some(path) => StrSdlTokenSource::with_file_path(source, path),
                None => StrSdlTokenSource::new(source),
            };
            for token in scanner {
                if sender.send(token).is_err() {
                    log::trace!("token consumer went away before end of input");
                    break;
                }
            }
        });

        let mut token_source = ChannelSdlTokenSource { receiver };
        let result = consumer(&mut token_source);
        let discarded = token_source.drain();
        if discarded > 0 {
            log::debug!("drained {discarded} unread token(s) from the scanner thread");
        }
        result
    })
}
