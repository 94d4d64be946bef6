//! Alert container state: the stack of dismissible outcome banners.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

/// Visual style of a banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    /// CSS modifier class for the banner.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
        }
    }
}

/// One banner. `id` is unique within its stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub body: String,
}

/// Banners ordered newest first.
#[derive(Clone, Debug, Default)]
pub struct AlertStack {
    next_id: u64,
    alerts: Vec<Alert>,
}

impl AlertStack {
    /// Insert a banner at the top of the container and return its id.
    pub fn prepend(&mut self, kind: AlertKind, body: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.alerts.insert(0, Alert { id, kind, body: body.into() });
        id
    }

    /// Remove the banner with `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() != before
    }

    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
