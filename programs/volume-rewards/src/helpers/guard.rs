use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::state::{InterceptorState, RewardsLedger};

/// Non-reentrant scope stored on a state account
///
/// The flag is part of the account data, so the scope has to be persisted
/// (`AccountsExit::exit`) before any CPI for a callee to observe it.
pub trait NonReentrant {
    fn locked_mut(&mut self) -> &mut bool;

    fn enter_scope(&mut self) -> Result<()> {
        let locked = self.locked_mut();
        require!(!*locked, ErrorCode::ReentrantCall);
        *locked = true;
        Ok(())
    }

    fn leave_scope(&mut self) {
        *self.locked_mut() = false;
    }
}

impl NonReentrant for InterceptorState {
    fn locked_mut(&mut self) -> &mut bool {
        &mut self.locked
    }
}

impl NonReentrant for RewardsLedger {
    fn locked_mut(&mut self) -> &mut bool {
        &mut self.locked
    }
}
