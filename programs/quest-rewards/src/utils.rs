use anchor_lang::{
    prelude::*,
    solana_program::{program::invoke, system_instruction}
};
use anchor_spl::token_interface::{self, TransferChecked};
use crate::{
    constants::MAX_BPS,
    error::QuestRewardsError
};

// This function computes a basis-point share of an amount, rounding down
// Params
//   amount - Gross amount
//   bp - Share in basis points (1/10000)
// Return
//   floor(amount * bp / 10000)
pub fn bp_share(amount: u64, bp: u64) -> u64 {
    (amount as u128)
        .checked_mul(bp as u128)
        .unwrap()
        .checked_div(MAX_BPS as u128)
        .unwrap() as u64
}

/// Transfers lamports from one account (must be program owned)
/// to another account. The recipient can be any account
pub fn transfer_lamports(
    from_account: &AccountInfo,
    to_account: &AccountInfo,
    amount_of_lamports: u64
) -> Result<()> {
    // Does the from account have enough lamports to transfer?
    if **from_account.try_borrow_lamports()? < amount_of_lamports {
        return Err(QuestRewardsError::InsufficientFund.into());
    }
    // Debit from_account and credit to_account
    **from_account.try_borrow_mut_lamports()? -= amount_of_lamports;
    **to_account.try_borrow_mut_lamports()? += amount_of_lamports;
    Ok(())
}

// This function transfers lamports out of a signer account via the system program
// Params
//   from - Paying signer
//   to - Recipient
//   system_program - System program
//   amount - Amount of lamports
// Return
//   Ok on success, ErrorCode on failure
pub fn transfer_from_signer<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    invoke(
        &system_instruction::transfer(from.key, to.key, amount),
        &[from, to, system_program]
    )?;
    Ok(())
}

// This function transfers fungible tokens between token accounts
// Params
//   from - Source token account
//   to - Destination token account
//   authority - Source authority (signer)
//   mint - Token mint
//   token_program - Token program
//   amount - Amount of tokens
//   decimals - Mint decimals
// Return
//   Ok on success, ErrorCode on failure
pub fn transfer_tokens<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    authority: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority
    };
    token_interface::transfer_checked(
        CpiContext::new(token_program, cpi_accounts),
        amount,
        decimals
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bp_share_rounds_down() {
        assert_eq!(bp_share(1000, 200), 20);
        assert_eq!(bp_share(1000, 700), 70);
        assert_eq!(bp_share(1000, 100), 10);
        assert_eq!(bp_share(999, 100), 9); // 9.99 floors to 9
        assert_eq!(bp_share(1, 9999), 0);
    }

    #[test]
    fn test_bp_share_full_and_zero() {
        assert_eq!(bp_share(12_345, MAX_BPS), 12_345);
        assert_eq!(bp_share(12_345, 0), 0);
        assert_eq!(bp_share(0, 5000), 0);
    }

    #[test]
    fn test_bp_share_no_overflow_at_max() {
        // u64::MAX * 10000 stays inside u128
        assert_eq!(bp_share(u64::MAX, MAX_BPS), u64::MAX);
        assert_eq!(bp_share(u64::MAX, 5000), u64::MAX / 2);
    }
}
