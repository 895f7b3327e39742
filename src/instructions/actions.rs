//! Action-call builders for the destination-chain protocols the example
//! flows target. Each builder produces one [`Call`]; the `*_bundle` helpers
//! compose them so token approvals always precede the call that spends the
//! allowance, with the depositor as fallback recipient.

use ethers::abi::{self, Token};
use ethers::types::{Address, Bytes, U256};

use super::{Call, InstructionBundle};

/// ERC-20 `approve(address,uint256)`
const APPROVE_SELECTOR: [u8; 4] = [0x09, 0x5e, 0xa7, 0xb3];
/// Aave v3 `supply(address,uint256,address,uint16)`
const AAVE_SUPPLY_SELECTOR: [u8; 4] = [0x61, 0x7b, 0xa0, 0x37];
/// Aave v3 `withdraw(address,uint256,address)`
const AAVE_WITHDRAW_SELECTOR: [u8; 4] = [0x69, 0x32, 0x8d, 0xec];
/// ERC-4626 `deposit(uint256,address)`
const VAULT_DEPOSIT_SELECTOR: [u8; 4] = [0x6e, 0x55, 0x3f, 0x65];
/// ERC-4626 `redeem(uint256,address,address)`
const VAULT_REDEEM_SELECTOR: [u8; 4] = [0xba, 0x08, 0x76, 0x52];
/// Curve `exchange(uint256,uint256,uint256,uint256)`
const CURVE_EXCHANGE_SELECTOR: [u8; 4] = [0x5b, 0x41, 0xb9, 0x08];

fn encode_call_data(selector: [u8; 4], params: &[Token]) -> Bytes {
    let mut data = selector.to_vec();
    data.extend_from_slice(&abi::encode(params));
    Bytes::from(data)
}

/// Approve `spender` to move `amount` of `token`.
pub fn erc20_approve(token: Address, spender: Address, amount: U256) -> Call {
    let data = encode_call_data(
        APPROVE_SELECTOR,
        &[Token::Address(spender), Token::Uint(amount)],
    );
    Call::new(token, data, U256::zero())
}

/// Supply `amount` of `asset` to an Aave v3 pool on behalf of `on_behalf_of`.
pub fn aave_supply(
    pool: Address,
    asset: Address,
    amount: U256,
    on_behalf_of: Address,
    referral_code: u16,
) -> Call {
    let data = encode_call_data(
        AAVE_SUPPLY_SELECTOR,
        &[
            Token::Address(asset),
            Token::Uint(amount),
            Token::Address(on_behalf_of),
            Token::Uint(U256::from(referral_code)),
        ],
    );
    Call::new(pool, data, U256::zero())
}

/// Withdraw `amount` of `asset` from an Aave v3 pool to `to`.
pub fn aave_withdraw(pool: Address, asset: Address, amount: U256, to: Address) -> Call {
    let data = encode_call_data(
        AAVE_WITHDRAW_SELECTOR,
        &[
            Token::Address(asset),
            Token::Uint(amount),
            Token::Address(to),
        ],
    );
    Call::new(pool, data, U256::zero())
}

/// Deposit `assets` into an ERC-4626 vault, minting shares to `receiver`.
pub fn vault_deposit(vault: Address, assets: U256, receiver: Address) -> Call {
    let data = encode_call_data(
        VAULT_DEPOSIT_SELECTOR,
        &[Token::Uint(assets), Token::Address(receiver)],
    );
    Call::new(vault, data, U256::zero())
}

/// Redeem `shares` from an ERC-4626 vault owned by `owner`, sending assets
/// to `receiver`.
pub fn vault_redeem(vault: Address, shares: U256, receiver: Address, owner: Address) -> Call {
    let data = encode_call_data(
        VAULT_REDEEM_SELECTOR,
        &[
            Token::Uint(shares),
            Token::Address(receiver),
            Token::Address(owner),
        ],
    );
    Call::new(vault, data, U256::zero())
}

/// Swap `dx` of coin `i` for at least `min_dy` of coin `j` on a Curve pool.
pub fn curve_exchange(pool: Address, i: U256, j: U256, dx: U256, min_dy: U256) -> Call {
    let data = encode_call_data(
        CURVE_EXCHANGE_SELECTOR,
        &[
            Token::Uint(i),
            Token::Uint(j),
            Token::Uint(dx),
            Token::Uint(min_dy),
        ],
    );
    Call::new(pool, data, U256::zero())
}

/// Approve + supply into an Aave v3 pool. The approval targets the bridged
/// token on the destination chain and must stay first in the bundle.
pub fn aave_supply_bundle(
    depositor: Address,
    pool: Address,
    asset: Address,
    amount: U256,
    referral_code: u16,
) -> InstructionBundle {
    InstructionBundle::new(
        vec![
            erc20_approve(asset, pool, amount),
            aave_supply(pool, asset, amount, depositor, referral_code),
        ],
        depositor,
    )
}

/// Approve + deposit into an ERC-4626 vault.
pub fn vault_deposit_bundle(
    depositor: Address,
    vault: Address,
    asset: Address,
    amount: U256,
) -> InstructionBundle {
    InstructionBundle::new(
        vec![
            erc20_approve(asset, vault, amount),
            vault_deposit(vault, amount, depositor),
        ],
        depositor,
    )
}

/// Approve + swap on a Curve pool.
pub fn curve_exchange_bundle(
    depositor: Address,
    pool: Address,
    input_token: Address,
    i: U256,
    j: U256,
    dx: U256,
    min_dy: U256,
) -> InstructionBundle {
    InstructionBundle::new(
        vec![
            erc20_approve(input_token, pool, dx),
            curve_exchange(pool, i, j, dx, min_dy),
        ],
        depositor,
    )
}
