//! Named navigation destinations and their auth annotations.
//!
//! DESIGN
//! ======
//! Every screen the dashboard can show is a [`Destination`]. Auth is
//! required by default; only the two onboarding screens (`Setup`, `Login`)
//! are exempt. The protected screens all live under one shared shell, so
//! the guard treats them uniformly, including the `NotFound` catch-all,
//! which renders inside the shell and is therefore protected too.

/// A named screen the user can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// First-run configuration wizard.
    Setup,
    /// Credential entry.
    Login,
    /// Overview dashboard; the home screen redirects land on.
    Dashboard,
    Containers,
    Orchestration,
    Images,
    Networks,
    Volumes,
    Settings,
    /// Catch-all for unknown paths.
    NotFound,
}

impl Destination {
    /// Every destination, for registry-style iteration.
    pub const ALL: [Self; 10] = [
        Self::Setup,
        Self::Login,
        Self::Dashboard,
        Self::Containers,
        Self::Orchestration,
        Self::Images,
        Self::Networks,
        Self::Volumes,
        Self::Settings,
        Self::NotFound,
    ];

    /// Whether reaching this destination needs an authenticated session.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        !matches!(self, Self::Setup | Self::Login)
    }

    /// Canonical path for this destination.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Setup => "/setup",
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Containers => "/containers",
            Self::Orchestration => "/orchestration",
            Self::Images => "/images",
            Self::Networks => "/networks",
            Self::Volumes => "/volumes",
            Self::Settings => "/settings",
            Self::NotFound => "/404",
        }
    }

    /// Resolve a requested path. Anything unrecognized collapses to the
    /// `NotFound` catch-all.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Dashboard,
            "/setup" => Self::Setup,
            "/login" => Self::Login,
            "/containers" => Self::Containers,
            "/orchestration" => Self::Orchestration,
            "/images" => Self::Images,
            "/networks" => Self::Networks,
            "/volumes" => Self::Volumes,
            "/settings" => Self::Settings,
            _ => Self::NotFound,
        }
    }

    /// Display name, as shown in navigation chrome.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Containers => "Containers",
            Self::Orchestration => "Orchestration",
            Self::Images => "Images",
            Self::Networks => "Networks",
            Self::Volumes => "Volumes",
            Self::Settings => "Settings",
            Self::NotFound => "Not Found",
        }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
