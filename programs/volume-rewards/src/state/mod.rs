pub mod hook_params;
pub mod interceptor_state;
pub mod reward_account;
pub mod rewards_ledger;
pub mod user_volume;

pub use hook_params::*;
pub use interceptor_state::*;
pub use reward_account::*;
pub use rewards_ledger::*;
pub use user_volume::*;
