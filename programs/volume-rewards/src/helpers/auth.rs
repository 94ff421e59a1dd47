use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::state::{InterceptorState, RewardAccount, RewardsLedger};

/// Only the registered swap venue may drive the interceptor
pub fn is_venue(state: &InterceptorState, caller: &Pubkey) -> bool {
    !is_null(caller) && state.venue == *caller
}

/// Self-only check: the caller acts on its own entry
pub fn is_self(caller: &Pubkey, subject: &Pubkey) -> bool {
    caller == subject
}

/// A holder settles only its own entry. A fresh entry has no holder yet and
/// is left to the claim itself, which finds nothing to settle.
pub fn may_claim(caller: &Pubkey, entry: &RewardAccount) -> bool {
    is_null(&entry.holder) || is_self(caller, &entry.holder)
}

/// Null identity (all-zero key)
pub fn is_null(key: &Pubkey) -> bool {
    *key == Pubkey::default()
}

/// Two-step admin handoff
///
/// The current admin proposes, the proposed identity accepts. Until the
/// accept lands the current admin keeps full control and may re-propose.
pub trait Administered {
    fn admin(&self) -> Pubkey;
    fn set_admin(&mut self, admin: Pubkey);
    fn pending_admin(&self) -> Option<Pubkey>;
    fn set_pending_admin(&mut self, pending: Option<Pubkey>);

    /// Admin check shared by both components
    fn is_admin(&self, caller: &Pubkey) -> bool {
        !is_null(caller) && self.admin() == *caller
    }

    fn propose_admin(&mut self, proposed: Pubkey) -> Result<()> {
        require!(!is_null(&proposed), ErrorCode::InvalidArgument);
        self.set_pending_admin(Some(proposed));
        Ok(())
    }

    /// Returns the replaced admin
    fn accept_admin(&mut self, caller: &Pubkey) -> Result<Pubkey> {
        let pending = self.pending_admin().ok_or(ErrorCode::NoPendingAdminTransfer)?;
        require_keys_eq!(pending, *caller, ErrorCode::Unauthorized);

        let old_admin = self.admin();
        self.set_admin(pending);
        self.set_pending_admin(None);
        Ok(old_admin)
    }
}

impl Administered for InterceptorState {
    fn admin(&self) -> Pubkey {
        self.admin
    }
    fn set_admin(&mut self, admin: Pubkey) {
        self.admin = admin;
    }
    fn pending_admin(&self) -> Option<Pubkey> {
        self.pending_admin
    }
    fn set_pending_admin(&mut self, pending: Option<Pubkey>) {
        self.pending_admin = pending;
    }
}

impl Administered for RewardsLedger {
    fn admin(&self) -> Pubkey {
        self.admin
    }
    fn set_admin(&mut self, admin: Pubkey) {
        self.admin = admin;
    }
    fn pending_admin(&self) -> Option<Pubkey> {
        self.pending_admin
    }
    fn set_pending_admin(&mut self, pending: Option<Pubkey>) {
        self.pending_admin = pending;
    }
}
