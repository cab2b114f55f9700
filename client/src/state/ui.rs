//! Transient UI chrome state: auth tab and the notice banner.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`session`, `records`,
//! `laps`) so feedback messages can change without touching loaded data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which form the login page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Error => "notice notice--error",
        }
    }
}

/// One user-facing message; replaces whatever was shown before.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub auth_tab: AuthTab,
    pub notice: Option<Notice>,
}

impl UiState {
    pub fn show(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }

    /// Switch auth tab; stale messages from the other form are dropped.
    pub fn select_tab(&mut self, tab: AuthTab) {
        if self.auth_tab != tab {
            self.notice = None;
        }
        self.auth_tab = tab;
    }
}
