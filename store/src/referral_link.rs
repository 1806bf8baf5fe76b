//! The user's referral code, once fetched.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralLinkState {
    pub referral_code: String,
}

impl ReferralLinkState {
    pub fn set_referral_code(&mut self, code: impl Into<String>) {
        self.referral_code = code.into();
    }

    pub fn clear_referral_code(&mut self) {
        self.referral_code.clear();
    }

    /// Full invite URL for sharing, `None` until a code is set.
    pub fn invite_url(&self, base: &str) -> Option<String> {
        if self.referral_code.is_empty() {
            None
        } else {
            Some(format!("{base}/signup?ref={}", self.referral_code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut referral = ReferralLinkState::default();
        referral.set_referral_code("AB12CD");
        assert_eq!(referral.referral_code, "AB12CD");

        referral.clear_referral_code();
        assert!(referral.referral_code.is_empty());
    }

    #[test]
    fn test_invite_url() {
        let mut referral = ReferralLinkState::default();
        assert!(referral.invite_url("https://lazrchain.app").is_none());

        referral.set_referral_code("AB12CD");
        assert_eq!(
            referral.invite_url("https://lazrchain.app").as_deref(),
            Some("https://lazrchain.app/signup?ref=AB12CD")
        );
    }
}
