//! Transient notification state (toasts).
//!
//! DESIGN
//! ======
//! A small append-only queue with monotonically increasing ids; the toast
//! host dismisses by id, so auto-dismiss timers and manual dismissal cannot
//! race each other into removing the wrong entry.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Visual flavor of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One toast entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Queue of visible notices.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    next_id: u64,
    pub items: Vec<Notice>,
}

impl NoticeState {
    fn push(&mut self, kind: NoticeKind, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, kind, text });
        id
    }

    pub fn push_success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, text.into())
    }

    pub fn push_error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, text.into())
    }

    /// Remove a notice by id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    /// Highest id handed out so far, if any. Used by the toast host to start
    /// auto-dismiss timers only for entries it has not seen yet.
    #[must_use]
    pub fn latest_id(&self) -> Option<u64> {
        self.next_id.checked_sub(1)
    }
}
