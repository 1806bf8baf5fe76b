//! Shell/layout state: which panels are open, which tab is active, and the
//! connected wallet address.

/// UI shell state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    pub sidebar_open: bool,
    pub profile_open: bool,
    /// Connected wallet address, empty until a wallet is linked.
    pub wallet_address: String,
    pub active_tab: String,
    /// Whether the connected address has been saved server-side.
    pub wallet_saved: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            sidebar_open: false,
            profile_open: false,
            wallet_address: String::new(),
            active_tab: "dashboard".to_string(),
            wallet_saved: false,
        }
    }
}

impl LayoutState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
    }

    pub fn set_profile(&mut self, open: bool) {
        self.profile_open = open;
    }

    pub fn set_wallet_address(&mut self, address: impl Into<String>) {
        self.wallet_address = address.into();
        // A new address has not been saved yet.
        self.wallet_saved = false;
    }

    pub fn set_wallet_saved(&mut self, saved: bool) {
        self.wallet_saved = saved;
    }

    pub fn set_active_tab(&mut self, tab: impl Into<String>) {
        self.active_tab = tab.into();
    }

    /// Back to the initial state, e.g. on logout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_dashboard() {
        assert_eq!(LayoutState::default().active_tab, "dashboard");
    }

    #[test]
    fn test_toggles() {
        let mut layout = LayoutState::default();
        layout.toggle_sidebar();
        assert!(layout.sidebar_open);
        layout.toggle_sidebar();
        assert!(!layout.sidebar_open);

        layout.set_profile(true);
        layout.toggle_profile();
        assert!(!layout.profile_open);
    }

    #[test]
    fn test_new_address_clears_saved_flag() {
        let mut layout = LayoutState::default();
        layout.set_wallet_address("TAddrOne");
        layout.set_wallet_saved(true);

        layout.set_wallet_address("TAddrTwo");
        assert!(!layout.wallet_saved);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut layout = LayoutState::default();
        layout.toggle_sidebar();
        layout.set_wallet_address("TAddr");
        layout.set_active_tab("rewards");

        layout.reset();
        assert_eq!(layout, LayoutState::default());
    }
}
