//! Page lifecycle shared by every page.
//!
//! `Loading` on mount, then `Failed` or `Ready`. A ready page may be
//! submitting a form or refreshing after a write; neither hides its data.

use std::rc::Rc;

use yew::Reducible;

/// Message shown above a page's form.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Error(String),
    Success(String),
}

/// Data a page has loaded plus its form status.
#[derive(Debug, Clone, PartialEq)]
pub struct Ready<T> {
    pub data: T,
    pub submitting: bool,
    pub refreshing: bool,
    pub notice: Option<Notice>,
}

impl<T> Ready<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            submitting: false,
            refreshing: false,
            notice: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Failed(String),
    Ready(Ready<T>),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Loading
    }
}

/// Transitions of `PageState`.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction<T> {
    /// A fetch started
    Reload,
    /// A fetch finished; the error is already a user-facing message
    Loaded(Result<T, String>),
    /// A form was sent
    Submit,
    /// Validation or the server refused a write
    Rejected(String),
    /// A write went through, with an optional message to show
    Succeeded(Option<String>),
}

impl<T: Clone> PageState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Ready(ready) => Some(&ready.data),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, PageState::Ready(ready) if ready.submitting)
    }

    /// Re-fetching after a write while still showing the previous data.
    pub fn is_refreshing(&self) -> bool {
        matches!(self, PageState::Ready(ready) if ready.refreshing)
    }

    /// Ready with data that is current: not mid-write and not re-fetching.
    /// Actions computed from the shown data must wait for this.
    pub fn accepts_writes(&self) -> bool {
        matches!(self, PageState::Ready(ready) if !ready.submitting && !ready.refreshing)
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            PageState::Ready(ready) => ready.notice.as_ref(),
            _ => None,
        }
    }

    /// Apply one transition. Actions that make no sense in the current
    /// state leave it unchanged.
    pub fn apply(&self, action: PageAction<T>) -> Self {
        match (self, action) {
            (PageState::Ready(ready), PageAction::Reload) => PageState::Ready(Ready {
                refreshing: true,
                ..ready.clone()
            }),
            (_, PageAction::Reload) => PageState::Loading,

            (PageState::Ready(ready), PageAction::Loaded(Ok(data))) => PageState::Ready(Ready {
                data,
                submitting: false,
                refreshing: false,
                notice: ready.notice.clone(),
            }),
            (_, PageAction::Loaded(Ok(data))) => PageState::Ready(Ready::new(data)),
            (_, PageAction::Loaded(Err(message))) => PageState::Failed(message),

            (PageState::Ready(ready), PageAction::Submit) => PageState::Ready(Ready {
                submitting: true,
                notice: None,
                ..ready.clone()
            }),
            (PageState::Ready(ready), PageAction::Rejected(message)) => PageState::Ready(Ready {
                submitting: false,
                notice: Some(Notice::Error(message)),
                ..ready.clone()
            }),
            (PageState::Ready(ready), PageAction::Succeeded(message)) => PageState::Ready(Ready {
                submitting: false,
                notice: message.map(Notice::Success),
                ..ready.clone()
            }),

            (state, _) => state.clone(),
        }
    }
}

impl<T: Clone> Reducible for PageState<T> {
    type Action = PageAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
