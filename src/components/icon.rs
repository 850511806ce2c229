//! Fixed icon set rendered as inline SVG.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

/// Every icon the portal draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Test,
    Certificate,
    Invitation,
    Logout,
}

impl IconKind {
    pub const ALL: [Self; 4] = [Self::Test, Self::Certificate, Self::Invitation, Self::Logout];

    /// SVG path data on a 24x24 viewbox.
    pub fn path(self) -> &'static str {
        match self {
            Self::Test => "M9 5h6M9 3h6a1 1 0 0 1 1 1v1h2a1 1 0 0 1 1 1v14a1 1 0 0 1-1 1H6a1 1 0 0 1-1-1V6a1 1 0 0 1 1-1h2V4a1 1 0 0 1 1-1zM9 12l2 2 4-4",
            Self::Certificate => "M4 4h16v12H4zM8 8h8M8 12h5M15 16l1 5 2-1.5 2 1.5-1-5",
            Self::Invitation => "M3 7l9 6 9-6M3 7v10h18V7L12 3z",
            Self::Logout => "M15 4h4v16h-4M10 8l-4 4 4 4M6 12h11",
        }
    }

    /// Accessible label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Test => "Tests",
            Self::Certificate => "Certificates",
            Self::Invitation => "Invitations",
            Self::Logout => "Log out",
        }
    }
}

#[component]
pub fn Icon(kind: IconKind) -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" role="img" aria-label=kind.label()>
            <path d=kind.path()></path>
        </svg>
    }
}
