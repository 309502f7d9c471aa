use pagedom::Selector;
use thiserror::Error;

use crate::config::ElementRole;

/// Errors raised by the dropdown.
///
/// A missing element means the page and the dropdown's configuration are out
/// of sync. There is nothing sensible to fall back to, so callers should
/// surface it rather than carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropdownError {
    #[error("{role} element not found: {key}")]
    ElementNotFound { role: ElementRole, key: Selector },
}
