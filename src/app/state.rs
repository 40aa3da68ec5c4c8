//! Dashboard UI state machine.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::domain::DashboardSnapshot;

/// Dashboard tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Wallets,
    Trades,
    Bots,
}

impl DashboardTab {
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Wallets => "Wallets",
            DashboardTab::Trades => "Trades",
            DashboardTab::Bots => "Bots",
        }
    }
}

impl std::str::FromStr for DashboardTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overview" => Ok(DashboardTab::Overview),
            "wallets" => Ok(DashboardTab::Wallets),
            "trades" => Ok(DashboardTab::Trades),
            "bots" => Ok(DashboardTab::Bots),
            other => Err(format!(
                "unknown tab '{other}' (expected overview, wallets, trades or bots)"
            )),
        }
    }
}

/// Top-level UI state.
///
/// Starts in `AuthLoading` until session restore settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    AuthLoading,
    Unauthenticated,
    Authenticated { tab: DashboardTab },
}

/// Holds the UI state, the loaded snapshot, and the session epoch.
///
/// Every state change is an explicit method call; there are no implicit
/// side effects. The epoch increments whenever the session identity
/// changes, and a snapshot loaded under an older epoch is refused, so a
/// load that settles after sign-out cannot resurface stale data.
pub struct DashboardController {
    state: RwLock<DashboardState>,
    snapshot: RwLock<Option<DashboardSnapshot>>,
    epoch: AtomicU64,
}

impl DashboardController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(DashboardState::AuthLoading),
            snapshot: RwLock::new(None),
            epoch: AtomicU64::new(0),
        }
    }

    /// Current UI state.
    pub fn state(&self) -> DashboardState {
        *self.state.read()
    }

    /// Epoch of the current session identity.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// A session was established (restore, sign-in or sign-up).
    ///
    /// Lands on the overview tab with no snapshot yet; returns the epoch to
    /// stamp the entity load with.
    pub fn session_established(&self) -> u64 {
        *self.state.write() = DashboardState::Authenticated {
            tab: DashboardTab::Overview,
        };
        *self.snapshot.write() = None;
        self.epoch.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Restore settled with no session.
    pub fn restore_settled_unauthenticated(&self) {
        *self.state.write() = DashboardState::Unauthenticated;
    }

    /// The user signed out; stale loads from the previous epoch are now
    /// refused.
    pub fn signed_out(&self) {
        *self.state.write() = DashboardState::Unauthenticated;
        *self.snapshot.write() = None;
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// Switch the visible tab. Only the tab component changes; the loaded
    /// snapshot is untouched, and nothing is re-fetched.
    ///
    /// Returns `false` when not authenticated.
    pub fn select_tab(&self, tab: DashboardTab) -> bool {
        let mut state = self.state.write();
        match *state {
            DashboardState::Authenticated { .. } => {
                *state = DashboardState::Authenticated { tab };
                true
            }
            _ => false,
        }
    }

    /// Apply a loaded snapshot if it belongs to the current epoch.
    ///
    /// Returns `false` (and drops the snapshot) when the epoch is stale.
    pub fn apply_snapshot(&self, epoch: u64, snapshot: DashboardSnapshot) -> bool {
        if epoch != self.epoch() {
            return false;
        }
        *self.snapshot.write() = Some(snapshot);
        true
    }

    /// The snapshot loaded for this session, if any.
    pub fn snapshot(&self) -> Option<DashboardSnapshot> {
        self.snapshot.read().clone()
    }

    /// Whether a snapshot has been loaded for this session.
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.read().is_some()
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_auth_loading() {
        let controller = DashboardController::new();
        assert_eq!(controller.state(), DashboardState::AuthLoading);
    }

    #[test]
    fn session_lands_on_overview() {
        let controller = DashboardController::new();
        controller.session_established();
        assert_eq!(
            controller.state(),
            DashboardState::Authenticated {
                tab: DashboardTab::Overview
            }
        );
    }

    #[test]
    fn tab_selection_requires_authentication() {
        let controller = DashboardController::new();
        assert!(!controller.select_tab(DashboardTab::Trades));

        controller.session_established();
        assert!(controller.select_tab(DashboardTab::Trades));
        assert_eq!(
            controller.state(),
            DashboardState::Authenticated {
                tab: DashboardTab::Trades
            }
        );
    }

    #[test]
    fn stale_epoch_snapshot_is_refused() {
        let controller = DashboardController::new();
        let epoch = controller.session_established();

        controller.signed_out();
        assert!(!controller.apply_snapshot(epoch, DashboardSnapshot::empty()));
        assert!(controller.snapshot().is_none());
    }

    #[test]
    fn current_epoch_snapshot_is_applied() {
        let controller = DashboardController::new();
        let epoch = controller.session_established();
        assert!(controller.apply_snapshot(epoch, DashboardSnapshot::empty()));
        assert!(controller.has_snapshot());
    }

    #[test]
    fn tab_parses_from_str() {
        assert_eq!("wallets".parse::<DashboardTab>(), Ok(DashboardTab::Wallets));
        assert!("portfolio".parse::<DashboardTab>().is_err());
    }
}
