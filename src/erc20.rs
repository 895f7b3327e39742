//! ERC-20 surface used by the origin-chain side of a deposit: allowance
//! checks and approvals for the spoke pool.

use std::sync::Arc;

use ethers::contract::abigen;
use ethers::providers::Middleware;
use ethers::types::{Address, TxHash, U256, U64};
use log::info;

use crate::prelude::*;

abigen!(
    Erc20,
    r#"[
        function approve(address spender, uint256 amount) external returns (bool)
        function allowance(address owner, address spender) external view returns (uint256)
        function balanceOf(address account) external view returns (uint256)
        function decimals() external view returns (uint8)
    ]"#
);

/// Ensure `spender` may move at least `amount` of `token` owned by the
/// middleware's signer. An already-sufficient allowance is a no-op, so
/// concurrent attempts sharing a (owner, spender, token) tuple do not race
/// on redundant approvals. Returns the approval transaction hash when one
/// was sent.
pub async fn ensure_allowance<M: Middleware>(
    client: Arc<M>,
    token: Address,
    owner: Address,
    spender: Address,
    amount: U256,
) -> Result<Option<TxHash>> {
    let erc20 = Erc20::new(token, client);

    let current = erc20
        .allowance(owner, spender)
        .call()
        .await
        .map_err(|e| Error::Approval(format!("allowance query failed: {e}")))?;
    if current >= amount {
        info!("allowance {current} already covers {amount}, skipping approval");
        return Ok(None);
    }

    info!("approving {amount} of {token:?} for {spender:?}");
    let approve_call = erc20.approve(spender, amount);
    let pending = approve_call
        .send()
        .await
        .map_err(|e| Error::Approval(e.to_string()))?;
    let tx_hash = *pending;

    let receipt = pending
        .await
        .map_err(|e| Error::Approval(format!("{tx_hash:?}: {e}")))?
        .ok_or_else(|| Error::Approval(format!("{tx_hash:?} was dropped from the mempool")))?;
    if receipt.status != Some(U64::from(1)) {
        return Err(Error::ApprovalReverted {
            tx_hash: receipt.transaction_hash,
        });
    }

    info!("approval confirmed: {:?}", receipt.transaction_hash);
    Ok(Some(receipt.transaction_hash))
}

/// Whether a fresh approval is needed given the current allowance.
pub fn needs_approval(current_allowance: U256, required: U256) -> bool {
    current_allowance < required
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sufficient_allowance_skips_approval() {
        let required = U256::from(1_000_000u64);
        assert!(!needs_approval(required, required));
        assert!(!needs_approval(required + 1, required));
        assert!(needs_approval(required - 1, required));
        assert!(needs_approval(U256::zero(), required));
    }
}
