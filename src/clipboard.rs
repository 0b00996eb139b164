//! Copying text to the system clipboard: the async Clipboard API when the
//! page runs in a secure context, otherwise a hidden textarea and
//! `execCommand("copy")`.

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{window, HtmlDocument, HtmlTextAreaElement};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CopyError {
    #[error("clipboard API is not available")]
    SecureUnavailable,
    #[error("clipboard write rejected: {0}")]
    SecureRejected(String),
    #[error("no document to host the fallback field")]
    NoDocument,
    #[error("copy command failed: {0}")]
    Legacy(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyPath {
    Secure,
    Legacy,
}

#[allow(async_fn_in_trait)]
pub trait CopyTarget {
    fn secure_available(&self) -> bool;
    async fn write_secure(&self, text: &str) -> Result<(), CopyError>;
    fn write_legacy(&self, text: &str) -> Result<(), CopyError>;
}

/// Tries the secure path first and falls back once.
pub async fn copy_with_fallback<T: CopyTarget>(target: &T, text: &str) -> Result<CopyPath, CopyError> {
    if target.secure_available() {
        match target.write_secure(text).await {
            Ok(()) => return Ok(CopyPath::Secure),
            Err(err) => warn!("secure clipboard write failed, falling back: {}", err),
        }
    } else {
        debug!("secure clipboard unavailable, using copy command");
    }
    target.write_legacy(text).map(|()| CopyPath::Legacy)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl BrowserClipboard {
    fn clipboard_object() -> Option<JsValue> {
        let navigator = window()?.navigator();
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
        (!clipboard.is_undefined() && !clipboard.is_null()).then_some(clipboard)
    }
}

impl CopyTarget for BrowserClipboard {
    fn secure_available(&self) -> bool {
        window().map(|w| w.is_secure_context()).unwrap_or(false) && Self::clipboard_object().is_some()
    }

    async fn write_secure(&self, text: &str) -> Result<(), CopyError> {
        let clipboard = Self::clipboard_object().ok_or(CopyError::SecureUnavailable)?;
        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(CopyError::SecureUnavailable)?;
        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|err| CopyError::SecureRejected(format!("{:?}", err)))?
            .dyn_into::<Promise>()
            .map_err(|_| CopyError::SecureRejected("writeText did not return a promise".to_string()))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|err| CopyError::SecureRejected(format!("{:?}", err)))
    }

    fn write_legacy(&self, text: &str) -> Result<(), CopyError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(CopyError::NoDocument)?;
        let body = document.body().ok_or(CopyError::NoDocument)?;
        let legacy = |err: JsValue| CopyError::Legacy(format!("{:?}", err));

        let field = document
            .create_element("textarea")
            .map_err(legacy)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| CopyError::Legacy("textarea cast failed".to_string()))?;
        field.set_value(text);
        field.set_attribute("readonly", "").map_err(legacy)?;
        let style = field.style();
        style.set_property("position", "fixed").map_err(legacy)?;
        style.set_property("top", "-1000px").map_err(legacy)?;
        body.append_child(&field).map_err(legacy)?;

        field.select();
        let copied = document
            .dyn_into::<HtmlDocument>()
            .map_err(|_| CopyError::Legacy("document is not an HTML document".to_string()))
            .and_then(|html| html.exec_command("copy").map_err(legacy));
        field.remove();

        match copied? {
            true => Ok(()),
            false => Err(CopyError::Legacy("copy command was refused".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeClipboard {
        secure: bool,
        secure_fails: bool,
        legacy_fails: bool,
        contents: RefCell<Option<String>>,
        legacy_calls: RefCell<u32>,
    }

    impl CopyTarget for FakeClipboard {
        fn secure_available(&self) -> bool {
            self.secure
        }

        async fn write_secure(&self, text: &str) -> Result<(), CopyError> {
            if self.secure_fails {
                return Err(CopyError::SecureRejected("denied".to_string()));
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }

        fn write_legacy(&self, text: &str) -> Result<(), CopyError> {
            *self.legacy_calls.borrow_mut() += 1;
            if self.legacy_fails {
                return Err(CopyError::Legacy("refused".to_string()));
            }
            *self.contents.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn secure_path_copies_without_fallback() {
        let target = FakeClipboard {
            secure: true,
            ..Default::default()
        };
        let result = block_on(copy_with_fallback(&target, "https://tidyhome.ly/invite/TH-2024"));
        assert_eq!(result, Ok(CopyPath::Secure));
        assert_eq!(target.contents.borrow().as_deref(), Some("https://tidyhome.ly/invite/TH-2024"));
        assert_eq!(*target.legacy_calls.borrow(), 0);
    }

    #[test]
    fn unavailable_secure_path_uses_copy_command() {
        let target = FakeClipboard::default();
        let result = block_on(copy_with_fallback(&target, "code"));
        assert_eq!(result, Ok(CopyPath::Legacy));
        assert_eq!(*target.legacy_calls.borrow(), 1);
    }

    #[test]
    fn rejected_secure_write_falls_back_once() {
        let target = FakeClipboard {
            secure: true,
            secure_fails: true,
            ..Default::default()
        };
        let result = block_on(copy_with_fallback(&target, "code"));
        assert_eq!(result, Ok(CopyPath::Legacy));
        assert_eq!(*target.legacy_calls.borrow(), 1);
    }

    #[test]
    fn both_paths_failing_reports_one_error() {
        let target = FakeClipboard {
            legacy_fails: true,
            ..Default::default()
        };
        let result = block_on(copy_with_fallback(&target, "code"));
        assert!(matches!(result, Err(CopyError::Legacy(_))));
        assert!(target.contents.borrow().is_none());
    }
}
