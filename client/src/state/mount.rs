//! Mount lifecycle for browser-only subtrees.
//!
//! The server pass never leaves `Unmounted`. In the browser the hydration
//! pass runs in `Mounting`, and the first post-mount effect moves to
//! `Mounted`. Transitions only move forward.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum MountPhase {
    #[default]
    Unmounted,
    Mounting,
    Mounted,
}

impl MountPhase {
    /// Phase a fresh subtree starts in for the current build target.
    #[must_use]
    pub fn initial() -> Self {
        if cfg!(feature = "hydrate") { Self::Unmounted.begin() } else { Self::Unmounted }
    }

    /// `Unmounted -> Mounting`; no-op otherwise.
    #[must_use]
    pub fn begin(self) -> Self {
        match self {
            Self::Unmounted => Self::Mounting,
            other => other,
        }
    }

    /// `Mounting -> Mounted`; no-op otherwise.
    #[must_use]
    pub fn complete(self) -> Self {
        match self {
            Self::Mounting => Self::Mounted,
            other => other,
        }
    }

    #[must_use]
    pub fn renders_children(self) -> bool {
        self == Self::Mounted
    }
}
