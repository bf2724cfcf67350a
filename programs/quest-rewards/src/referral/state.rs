use anchor_lang::prelude::*;
use crate::{
    constants::{MAX_REFERRAL_DEPTH, MAX_TIER, TIER_BUCKETS},
    error::QuestRewardsError
};

// Referral graph node, one per participant
#[account]
pub struct ReferralAccount {
    pub id: u64,                // Stable account id, assigned at creation
    pub owner: Pubkey,          // Controllable owner wallet (payout destination)
    pub referred_by: Pubkey,    // Referrer's ReferralAccount address, default for roots; set once
    pub tier: u8,               // Tier level 0..=5
    pub eligible_for_tier_up: bool, // Master-settable gate, defaults true

    // Referral counts per tier bucket and depth: [bucket 1..=5][depth 1..=4].
    // A descendant of tier t sits in bucket max(t, 1) - its effective counting
    // tier - so freshly created (tier 0) referrals land in bucket 1.
    pub referral_counts: [[u64; MAX_REFERRAL_DEPTH]; TIER_BUCKETS],

    pub earned_rewards: u64     // Accrued referral rewards (lamports), claimed via claim_rewards
}

impl ReferralAccount {
    pub const MAX_SIZE: usize = std::mem::size_of::<Self>();    // Size of ReferralAccount
    pub const PREFIX_SEED: &'static [u8] = b"referral";         // Seed of ReferralAccount

    // Bucket index for a descendant holding the given tier
    pub fn bucket_index(tier: u8) -> usize {
        tier.max(1) as usize - 1
    }

    fn slot(&mut self, tier: u8, depth: u8) -> Result<&mut u64> {
        require!(tier <= MAX_TIER, QuestRewardsError::InvalidTier);
        require!(
            depth >= 1 && depth as usize <= MAX_REFERRAL_DEPTH,
            QuestRewardsError::InvalidDepth
        );
        Ok(&mut self.referral_counts[Self::bucket_index(tier)][depth as usize - 1])
    }

    // This function reads one referral-count entry
    // Params
    //   tier - The counted descendant's tier (bucketed by effective tier)
    //   depth - Relative depth of the descendant (1..=4)
    // Return
    //   The count, or InvalidTier/InvalidDepth for out-of-range inputs
    pub fn count_at(&mut self, tier: u8, depth: u8) -> Result<u64> {
        Ok(*self.slot(tier, depth)?)
    }

    // This function counts one more descendant of the given tier at the given depth
    pub fn credit_referral(&mut self, tier: u8, depth: u8) -> Result<()> {
        let slot = self.slot(tier, depth)?;
        *slot = slot.checked_add(1).unwrap();
        Ok(())
    }

    // This function removes one descendant of the given tier at the given depth
    // Return
    //   NoSuchEntry when the entry is already zero (desynchronized state)
    pub fn debit_referral(&mut self, tier: u8, depth: u8) -> Result<()> {
        let slot = self.slot(tier, depth)?;
        require!(*slot > 0, QuestRewardsError::NoSuchEntry);
        *slot -= 1;
        Ok(())
    }

    // This function sums each tier bucket over depths 1..=4
    // Return
    //   Referral counts per tier bucket 1..=5
    pub fn tier_counts(&self) -> [u64; TIER_BUCKETS] {
        let mut counts = [0u64; TIER_BUCKETS];
        for (bucket, depths) in self.referral_counts.iter().enumerate() {
            counts[bucket] = depths.iter().sum();
        }
        counts
    }

    // Total referral count across all buckets and depths
    pub fn total_referrals(&self) -> u64 {
        self.tier_counts().iter().sum()
    }
}

// This function walks a pre-resolved ancestor chain, verifying each provided
// link actually is the previous node's referrer, and hands back the node data
// Params
//   start - Expected address of the first ancestor (the walk origin's referred_by)
//   links - Candidate ancestor accounts in depth order, as supplied by the caller
// Return
//   The verified chain (possibly shorter than 4: stops at the first missing
//   link or at a root), or InvalidReferrer on a linkage mismatch
pub fn collect_chain<'a, 'info>(
    start: Pubkey,
    links: [Option<&'a mut Box<Account<'info, ReferralAccount>>>; MAX_REFERRAL_DEPTH]
) -> Result<Vec<&'a mut ReferralAccount>> {
    let mut chain: Vec<&'a mut ReferralAccount> = Vec::with_capacity(MAX_REFERRAL_DEPTH);
    let mut next = start;
    for link in links {
        if next.eq(&Pubkey::default()) {
            break;
        }
        match link {
            Some(account) => {
                require!(account.key().eq(&next), QuestRewardsError::InvalidReferrer);
                next = account.referred_by;
                chain.push(&mut ***account);
            }
            None => break
        }
    }
    Ok(chain)
}

// This function counts a freshly created (tier 0) account into its ancestors
// Params
//   chain - Verified ancestor chain in depth order (index 0 = direct referrer)
pub fn credit_new_referral(chain: &mut [&mut ReferralAccount]) -> Result<()> {
    for (i, ancestor) in chain.iter_mut().enumerate() {
        ancestor.credit_referral(0, i as u8 + 1)?;
    }
    Ok(())
}

// This function moves an account's contribution between tier buckets on every
// ancestor, preserving each ancestor's total referral count
// Params
//   chain - Verified ancestor chain in depth order
//   old_tier - Tier the account held when last counted
//   new_tier - Tier the account holds now
//   strict - true: a missing old entry is NoSuchEntry (self-service path);
//            false: missing entries are skipped (administrative path)
pub fn migrate_referral_counts(
    chain: &mut [&mut ReferralAccount],
    old_tier: u8,
    new_tier: u8,
    strict: bool
) -> Result<()> {
    for (i, ancestor) in chain.iter_mut().enumerate() {
        let depth = i as u8 + 1;
        if !strict && ancestor.count_at(old_tier, depth)? == 0 {
            continue;
        }
        ancestor.debit_referral(old_tier, depth)?;
        ancestor.credit_referral(new_tier, depth)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> ReferralAccount {
        ReferralAccount {
            id: 0,
            owner: Pubkey::new_unique(),
            referred_by: Pubkey::default(),
            tier: 0,
            eligible_for_tier_up: true,
            referral_counts: [[0; MAX_REFERRAL_DEPTH]; TIER_BUCKETS],
            earned_rewards: 0
        }
    }

    #[test]
    fn test_bucket_index_effective_tier() {
        assert_eq!(ReferralAccount::bucket_index(0), 0); // tier 0 counts in bucket 1
        assert_eq!(ReferralAccount::bucket_index(1), 0);
        assert_eq!(ReferralAccount::bucket_index(2), 1);
        assert_eq!(ReferralAccount::bucket_index(5), 4);
    }

    #[test]
    fn test_depth_bounds() {
        let mut account = node();
        assert!(account.credit_referral(0, 0).is_err());
        assert!(account.credit_referral(0, 5).is_err());
        assert!(account.count_at(0, 0).is_err());
        assert!(account.credit_referral(0, 1).is_ok());
        assert!(account.credit_referral(0, 4).is_ok());
    }

    #[test]
    fn test_tier_bounds() {
        let mut account = node();
        assert!(account.credit_referral(6, 1).is_err());
        assert!(account.credit_referral(5, 1).is_ok());
    }

    #[test]
    fn test_debit_zero_entry_fails() {
        let mut account = node();
        assert!(account.debit_referral(0, 1).is_err());
        account.credit_referral(0, 1).unwrap();
        assert!(account.debit_referral(0, 1).is_ok());
        assert!(account.debit_referral(0, 1).is_err());
    }

    #[test]
    fn test_tier_counts_sum_over_depth() {
        let mut account = node();
        account.credit_referral(0, 1).unwrap();
        account.credit_referral(1, 3).unwrap();
        account.credit_referral(3, 2).unwrap();
        assert_eq!(account.tier_counts(), [2, 0, 1, 0, 0]);
        assert_eq!(account.total_referrals(), 3);
    }

    #[test]
    fn test_chain_of_four_credits_each_depth() {
        // A refers B refers C refers D; a new E is referred by D
        let mut a = node();
        let mut b = node();
        let mut c = node();
        let mut d = node();
        {
            let mut chain = [&mut d, &mut c, &mut b, &mut a];
            credit_new_referral(&mut chain).unwrap();
        }
        assert_eq!(d.referral_counts[0], [1, 0, 0, 0]);
        assert_eq!(c.referral_counts[0], [0, 1, 0, 0]);
        assert_eq!(b.referral_counts[0], [0, 0, 1, 0]);
        assert_eq!(a.referral_counts[0], [0, 0, 0, 1]);

        // F referred by E: B, C, D and E are credited; A sits at depth 5 and is not
        let mut e = node();
        {
            let mut chain = [&mut e, &mut d, &mut c, &mut b];
            credit_new_referral(&mut chain).unwrap();
        }
        assert_eq!(e.referral_counts[0], [1, 0, 0, 0]);
        assert_eq!(d.referral_counts[0], [1, 1, 0, 0]);
        assert_eq!(c.referral_counts[0], [0, 1, 1, 0]);
        assert_eq!(b.referral_counts[0], [0, 0, 1, 1]);
        assert_eq!(a.total_referrals(), 1);
    }

    #[test]
    fn test_short_chain_credits_only_present_ancestors() {
        let mut a = node();
        let mut chain = [&mut a];
        credit_new_referral(&mut chain[..]).unwrap();
        assert_eq!(a.referral_counts[0], [1, 0, 0, 0]);
    }

    #[test]
    fn test_migrate_moves_bucket_and_preserves_totals() {
        let mut a = node();
        let mut b = node();
        {
            let mut chain = [&mut b, &mut a];
            credit_new_referral(&mut chain).unwrap();
            // the referred account reaches tier 3
            migrate_referral_counts(&mut chain, 0, 3, true).unwrap();
        }
        assert_eq!(b.referral_counts[0], [0, 0, 0, 0]);
        assert_eq!(b.referral_counts[2], [1, 0, 0, 0]);
        assert_eq!(b.total_referrals(), 1);
        assert_eq!(a.referral_counts[2], [0, 1, 0, 0]);
        assert_eq!(a.total_referrals(), 1);
    }

    #[test]
    fn test_migrate_tier_zero_and_one_share_a_bucket() {
        let mut a = node();
        a.credit_referral(0, 1).unwrap();
        let mut chain = [&mut a];
        migrate_referral_counts(&mut chain[..], 0, 1, true).unwrap();
        assert_eq!(a.referral_counts[0], [1, 0, 0, 0]);
        assert_eq!(a.total_referrals(), 1);
    }

    #[test]
    fn test_migrate_strict_fails_on_missing_entry() {
        let mut a = node();
        let mut chain = [&mut a];
        assert!(migrate_referral_counts(&mut chain[..], 2, 3, true).is_err());
    }

    #[test]
    fn test_migrate_lenient_skips_missing_entry() {
        let mut a = node();
        let mut b = node();
        b.credit_referral(2, 1).unwrap(); // only the direct referrer has history
        {
            let mut chain = [&mut b, &mut a];
            migrate_referral_counts(&mut chain, 2, 4, false).unwrap();
        }
        assert_eq!(b.referral_counts[1], [0, 0, 0, 0]);
        assert_eq!(b.referral_counts[3], [1, 0, 0, 0]);
        assert_eq!(a.total_referrals(), 0);
    }
}
