//! Copy-to-clipboard flow and the transient "copied" indicator.
//!
//! The browser specifics live behind [`ImageFetcher`] and [`ClipboardSink`];
//! this module only sequences them and tracks which card shows the indicator.

use std::future::Future;

use crate::error::CopyError;

/// Raw image bytes with their MIME type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Resolves an image url to its bytes.
pub trait ImageFetcher {
    fn fetch_bytes(&self, url: &str) -> impl Future<Output = Result<FetchedImage, CopyError>>;
}

/// Writes image bytes to the platform clipboard.
pub trait ClipboardSink {
    fn write_image(&self, image: &FetchedImage) -> impl Future<Output = Result<(), CopyError>>;
}

/// Fetch an image and place it on the clipboard.
///
/// A fetch failure is returned the same way as a clipboard rejection so the
/// caller has a single failure path.
pub async fn copy_image<F, C>(fetcher: &F, sink: &C, url: &str) -> Result<(), CopyError>
where
    F: ImageFetcher,
    C: ClipboardSink,
{
    let image = fetcher.fetch_bytes(url).await?;
    sink.write_image(&image).await
}

/// Identifies one copy action. Only the most recent token can clear the
/// indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CopyToken(u64);

/// Which card currently shows "Copied!".
///
/// Each successful copy calls [`CopyFeedback::mark_copied`], which moves the
/// indicator and returns a fresh token. When the display window elapses the
/// caller passes that token to [`CopyFeedback::expire`]; stale tokens from
/// earlier copies are ignored, so a slow timer cannot clear a newer indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    next_token: u64,
    active: Option<(usize, CopyToken)>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the indicator on `index` and return the token that may clear it.
    pub fn mark_copied(&mut self, index: usize) -> CopyToken {
        let token = CopyToken(self.next_token);
        self.next_token += 1;
        self.active = Some((index, token));
        token
    }

    /// Clear the indicator if `token` is still the latest. Returns whether it
    /// was cleared.
    pub fn expire(&mut self, token: CopyToken) -> bool {
        match self.active {
            Some((_, current)) if current == token => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// Position in the filtered sequence showing the indicator.
    pub fn active_index(&self) -> Option<usize> {
        self.active.map(|(index, _)| index)
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct StubFetcher(Result<FetchedImage, CopyError>);

    impl ImageFetcher for StubFetcher {
        async fn fetch_bytes(&self, _url: &str) -> Result<FetchedImage, CopyError> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        reject: bool,
        written: RefCell<Vec<FetchedImage>>,
    }

    impl ClipboardSink for RecordingSink {
        async fn write_image(&self, image: &FetchedImage) -> Result<(), CopyError> {
            if self.reject {
                return Err(CopyError::Clipboard("NotAllowedError".into()));
            }
            self.written.borrow_mut().push(image.clone());
            Ok(())
        }
    }

    fn png() -> FetchedImage {
        FetchedImage {
            bytes: vec![0x89, b'P', b'N', b'G'],
            content_type: "image/png".into(),
        }
    }

    #[tokio::test]
    async fn test_copy_image_writes_fetched_bytes() {
        let sink = RecordingSink::default();
        copy_image(&StubFetcher(Ok(png())), &sink, "icons/a/b.png")
            .await
            .unwrap();
        assert_eq!(sink.written.borrow().as_slice(), &[png()]);
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_clipboard() {
        let sink = RecordingSink::default();
        let err = copy_image(&StubFetcher(Err(CopyError::HttpStatus(404))), &sink, "x")
            .await
            .unwrap_err();
        assert_eq!(err, CopyError::HttpStatus(404));
        assert!(sink.written.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_clipboard_rejection() {
        let sink = RecordingSink {
            reject: true,
            ..Default::default()
        };
        let err = copy_image(&StubFetcher(Ok(png())), &sink, "x")
            .await
            .unwrap_err();
        assert!(matches!(err, CopyError::Clipboard(_)));
    }

    #[test]
    fn test_feedback_expires_own_token() {
        let mut feedback = CopyFeedback::new();
        let token = feedback.mark_copied(3);
        assert!(feedback.is_copied(3));
        assert!(feedback.expire(token));
        assert_eq!(feedback.active_index(), None);
    }

    #[test]
    fn test_stale_token_does_not_clear_newer_copy() {
        let mut feedback = CopyFeedback::new();
        let first = feedback.mark_copied(1);
        let second = feedback.mark_copied(2);

        // First timer fires after the second copy
        assert!(!feedback.expire(first));
        assert!(feedback.is_copied(2));
        assert!(!feedback.is_copied(1));

        assert!(feedback.expire(second));
        assert_eq!(feedback.active_index(), None);
    }

    #[test]
    fn test_recopy_same_index_extends_window() {
        let mut feedback = CopyFeedback::new();
        let first = feedback.mark_copied(5);
        let second = feedback.mark_copied(5);
        assert_ne!(first, second);
        assert!(!feedback.expire(first));
        assert!(feedback.is_copied(5));
        assert!(feedback.expire(second));
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut feedback = CopyFeedback::new();
        let token = feedback.mark_copied(0);
        assert!(feedback.expire(token));
        assert!(!feedback.expire(token));
    }
}
