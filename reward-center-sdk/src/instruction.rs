//! Builders for instructions of the reward center program.
//!
//! Every instruction is described by a static [`InstructionKind`] collected in
//! [`REGISTRY`] and has a typed builder function taking an accounts structure
//! and the instruction parameters.  Typed builders go through the same
//! registry entry as the dynamic [`Registry::build`] path so both produce
//! identical instructions.
//!
//! Accounts structures hold one address per account the caller must provide.
//! Well-known programs and sysvars (system program, SPL token programs, rent)
//! are filled in automatically.  Any accounts in `remaining_accounts` are
//! appended after the fixed accounts in the order given with the flags given.

use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use crate::builder::AccountRole;
use crate::encode::Discriminator;
use crate::error::Result;
use crate::registry::{InstructionKind, Registry};
use crate::schema::{Field, Schema, Type};
use crate::types::*;
use crate::value::{Struct, ToValue};

/// Address of the SPL token program.
pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_program::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Address of the SPL associated token account program.
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    solana_program::pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

const SYSTEM_PROGRAM: AccountRole = AccountRole::readonly("system_program")
    .with_default(solana_system_interface::program::ID);
const TOKEN_PROGRAM: AccountRole =
    AccountRole::readonly("token_program").with_default(TOKEN_PROGRAM_ID);
const RENT: AccountRole =
    AccountRole::readonly("rent").with_default(solana_program::sysvar::rent::ID);


pub static EDIT_REWARD_CENTER: InstructionKind = InstructionKind {
    name: "edit_reward_center",
    discriminator: Discriminator::new([185, 238, 29, 159, 195, 37, 196, 120]),
    args: Schema::new("EditRewardCenterInstructionArgs", &[Field::new(
        "edit_reward_center_params",
        Type::Struct(&EDIT_REWARD_CENTER_PARAMS),
    )]),
    accounts: &[
        AccountRole::writable_signer("wallet"),
        AccountRole::readonly("auction_house"),
        AccountRole::writable("reward_center"),
    ],
};

pub static CREATE_REWARD_CENTER: InstructionKind = InstructionKind {
    name: "create_reward_center",
    discriminator: Discriminator::new([51, 138, 29, 157, 96, 169, 51, 139]),
    args: Schema::new("CreateRewardCenterInstructionArgs", &[Field::new(
        "create_reward_center_params",
        Type::Struct(&CREATE_REWARD_CENTER_PARAMS),
    )]),
    accounts: &[
        AccountRole::writable_signer("wallet"),
        AccountRole::readonly("mint"),
        AccountRole::readonly("auction_house_treasury_mint"),
        AccountRole::writable("associated_token_account"),
        AccountRole::readonly("auction_house"),
        AccountRole::writable("reward_center"),
        SYSTEM_PROGRAM,
        TOKEN_PROGRAM,
        AccountRole::readonly("associated_token_program")
            .with_default(ASSOCIATED_TOKEN_PROGRAM_ID),
        RENT,
    ],
};

pub static CREATE_OFFER: InstructionKind = InstructionKind {
    name: "create_offer",
    discriminator: Discriminator::new([237, 233, 192, 168, 248, 7, 249, 241]),
    args: Schema::new("CreateOfferInstructionArgs", &[Field::new(
        "create_offer_params",
        Type::Struct(&CREATE_OFFER_PARAMS),
    )]),
    accounts: &[
        AccountRole::writable_signer("wallet"),
        AccountRole::writable("offer"),
        AccountRole::writable("payment_account"),
        AccountRole::readonly("transfer_authority"),
        AccountRole::readonly("treasury_mint"),
        AccountRole::readonly("token_account"),
        AccountRole::readonly("metadata"),
        AccountRole::writable("escrow_payment_account"),
        AccountRole::readonly("authority"),
        AccountRole::readonly("reward_center"),
        AccountRole::readonly("auction_house"),
        AccountRole::writable("auction_house_fee_account"),
        AccountRole::writable("buyer_trade_state"),
        AccountRole::readonly("ah_auctioneer_pda"),
        AccountRole::readonly("auction_house_program"),
        TOKEN_PROGRAM,
        SYSTEM_PROGRAM,
        RENT,
    ],
};

pub static CLOSE_OFFER: InstructionKind = InstructionKind {
    name: "close_offer",
    discriminator: Discriminator::new([191, 72, 67, 35, 239, 209, 97, 132]),
    args: Schema::new("CloseOfferInstructionArgs", &[Field::new(
        "close_offer_params",
        Type::Struct(&CLOSE_OFFER_PARAMS),
    )]),
    accounts: &[
        AccountRole::writable_signer("wallet"),
        AccountRole::writable("offer"),
        AccountRole::readonly("treasury_mint"),
        AccountRole::writable("token_account"),
        AccountRole::writable("receipt_account"),
        AccountRole::writable("escrow_payment_account"),
        AccountRole::writable("metadata"),
        AccountRole::readonly("token_mint"),
        AccountRole::readonly("authority"),
        AccountRole::readonly("reward_center"),
        AccountRole::readonly("auction_house"),
        AccountRole::writable("auction_house_fee_account"),
        AccountRole::writable("trade_state"),
        AccountRole::readonly("ah_auctioneer_pda"),
        AccountRole::readonly("auction_house_program"),
        AccountRole::readonly("ata_program")
            .with_default(ASSOCIATED_TOKEN_PROGRAM_ID),
        SYSTEM_PROGRAM,
        TOKEN_PROGRAM,
        RENT,
    ],
};

pub static ATTRIBUTE: InstructionKind = InstructionKind {
    name: "attribute",
    discriminator: Discriminator::new([242, 187, 207, 90, 187, 238, 242, 237]),
    args: Schema::new("AttributeInstructionArgs", &[Field::new(
        "attribute_params",
        Type::Struct(&ATTRIBUTE_PARAMS),
    )]),
    accounts: &[],
};

/// All instructions of the reward center program.
pub static REGISTRY: Registry = Registry::new(
    "reward_center",
    env!("CARGO_PKG_VERSION"),
    &[
        &CREATE_REWARD_CENTER,
        &EDIT_REWARD_CENTER,
        &CREATE_OFFER,
        &CLOSE_OFFER,
        &ATTRIBUTE,
    ],
);


/// Builds instruction arguments consisting of a single named argument.
fn single_arg(name: &'static str, arg: &impl ToValue) -> Struct {
    Struct::new().with(name, arg.to_value())
}


/// Accounts of the `edit_reward_center` instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditRewardCenterAccounts {
    /// Auction house authority; signs and pays.
    pub wallet: Pubkey,
    pub auction_house: Pubkey,
    pub reward_center: Pubkey,
    pub remaining_accounts: Vec<AccountMeta>,
}

/// Creates an instruction changing reward rules of an existing reward center.
pub fn edit_reward_center(
    accounts: &EditRewardCenterAccounts,
    params: &EditRewardCenterParams,
) -> Result<Instruction> {
    edit_reward_center_with_program_id(crate::PROGRAM_ID, accounts, params)
}

/// Like [`edit_reward_center`] but calls program at given address.
pub fn edit_reward_center_with_program_id(
    program_id: Pubkey,
    accounts: &EditRewardCenterAccounts,
    params: &EditRewardCenterParams,
) -> Result<Instruction> {
    let keys = [
        ("wallet", accounts.wallet),
        ("auction_house", accounts.auction_house),
        ("reward_center", accounts.reward_center),
    ];
    let args = single_arg("edit_reward_center_params", params);
    EDIT_REWARD_CENTER.build(
        program_id,
        &keys,
        &accounts.remaining_accounts,
        &args,
    )
}


/// Accounts of the `create_reward_center` instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateRewardCenterAccounts {
    /// Auction house authority; signs and pays for the new accounts.
    pub wallet: Pubkey,
    /// Mint of the token paid out as rewards.
    pub mint: Pubkey,
    /// Mint of the currency accepted by the auction house.
    pub auction_house_treasury_mint: Pubkey,
    /// Reward center’s associated token account for `mint`.
    pub associated_token_account: Pubkey,
    pub auction_house: Pubkey,
    pub reward_center: Pubkey,
    pub remaining_accounts: Vec<AccountMeta>,
}

/// Creates an instruction initialising a reward center for an auction house.
pub fn create_reward_center(
    accounts: &CreateRewardCenterAccounts,
    params: &CreateRewardCenterParams,
) -> Result<Instruction> {
    create_reward_center_with_program_id(crate::PROGRAM_ID, accounts, params)
}

/// Like [`create_reward_center`] but calls program at given address.
pub fn create_reward_center_with_program_id(
    program_id: Pubkey,
    accounts: &CreateRewardCenterAccounts,
    params: &CreateRewardCenterParams,
) -> Result<Instruction> {
    let keys = [
        ("wallet", accounts.wallet),
        ("mint", accounts.mint),
        ("auction_house_treasury_mint", accounts.auction_house_treasury_mint),
        ("associated_token_account", accounts.associated_token_account),
        ("auction_house", accounts.auction_house),
        ("reward_center", accounts.reward_center),
    ];
    let args = single_arg("create_reward_center_params", params);
    CREATE_REWARD_CENTER.build(
        program_id,
        &keys,
        &accounts.remaining_accounts,
        &args,
    )
}


/// Accounts of the `create_offer` instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateOfferAccounts {
    pub wallet: Pubkey,
    pub offer: Pubkey,
    pub payment_account: Pubkey,
    pub transfer_authority: Pubkey,
    pub treasury_mint: Pubkey,
    pub token_account: Pubkey,
    pub metadata: Pubkey,
    pub escrow_payment_account: Pubkey,
    pub authority: Pubkey,
    pub reward_center: Pubkey,
    pub auction_house: Pubkey,
    pub auction_house_fee_account: Pubkey,
    pub buyer_trade_state: Pubkey,
    pub ah_auctioneer_pda: Pubkey,
    pub auction_house_program: Pubkey,
    pub remaining_accounts: Vec<AccountMeta>,
}

/// Creates an instruction placing an offer on a token through the reward
/// center.
pub fn create_offer(
    accounts: &CreateOfferAccounts,
    params: &CreateOfferParams,
) -> Result<Instruction> {
    create_offer_with_program_id(crate::PROGRAM_ID, accounts, params)
}

/// Like [`create_offer`] but calls program at given address.
pub fn create_offer_with_program_id(
    program_id: Pubkey,
    accounts: &CreateOfferAccounts,
    params: &CreateOfferParams,
) -> Result<Instruction> {
    let keys = [
        ("wallet", accounts.wallet),
        ("offer", accounts.offer),
        ("payment_account", accounts.payment_account),
        ("transfer_authority", accounts.transfer_authority),
        ("treasury_mint", accounts.treasury_mint),
        ("token_account", accounts.token_account),
        ("metadata", accounts.metadata),
        ("escrow_payment_account", accounts.escrow_payment_account),
        ("authority", accounts.authority),
        ("reward_center", accounts.reward_center),
        ("auction_house", accounts.auction_house),
        ("auction_house_fee_account", accounts.auction_house_fee_account),
        ("buyer_trade_state", accounts.buyer_trade_state),
        ("ah_auctioneer_pda", accounts.ah_auctioneer_pda),
        ("auction_house_program", accounts.auction_house_program),
    ];
    let args = single_arg("create_offer_params", params);
    CREATE_OFFER.build(program_id, &keys, &accounts.remaining_accounts, &args)
}


/// Accounts of the `close_offer` instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloseOfferAccounts {
    pub wallet: Pubkey,
    pub offer: Pubkey,
    pub treasury_mint: Pubkey,
    pub token_account: Pubkey,
    /// Account receiving the withdrawn funds.  For native SOL this is the
    /// wallet itself.
    pub receipt_account: Pubkey,
    pub escrow_payment_account: Pubkey,
    pub metadata: Pubkey,
    pub token_mint: Pubkey,
    pub authority: Pubkey,
    pub reward_center: Pubkey,
    pub auction_house: Pubkey,
    pub auction_house_fee_account: Pubkey,
    pub trade_state: Pubkey,
    pub ah_auctioneer_pda: Pubkey,
    pub auction_house_program: Pubkey,
    pub remaining_accounts: Vec<AccountMeta>,
}

/// Creates an instruction cancelling an offer and refunding the escrow.
pub fn close_offer(
    accounts: &CloseOfferAccounts,
    params: &CloseOfferParams,
) -> Result<Instruction> {
    close_offer_with_program_id(crate::PROGRAM_ID, accounts, params)
}

/// Like [`close_offer`] but calls program at given address.
pub fn close_offer_with_program_id(
    program_id: Pubkey,
    accounts: &CloseOfferAccounts,
    params: &CloseOfferParams,
) -> Result<Instruction> {
    let keys = [
        ("wallet", accounts.wallet),
        ("offer", accounts.offer),
        ("treasury_mint", accounts.treasury_mint),
        ("token_account", accounts.token_account),
        ("receipt_account", accounts.receipt_account),
        ("escrow_payment_account", accounts.escrow_payment_account),
        ("metadata", accounts.metadata),
        ("token_mint", accounts.token_mint),
        ("authority", accounts.authority),
        ("reward_center", accounts.reward_center),
        ("auction_house", accounts.auction_house),
        ("auction_house_fee_account", accounts.auction_house_fee_account),
        ("trade_state", accounts.trade_state),
        ("ah_auctioneer_pda", accounts.ah_auctioneer_pda),
        ("auction_house_program", accounts.auction_house_program),
    ];
    let args = single_arg("close_offer_params", params);
    CLOSE_OFFER.build(program_id, &keys, &accounts.remaining_accounts, &args)
}


/// Creates an instruction carrying an attribution memo.
///
/// The instruction has no fixed accounts; `remaining_accounts` are passed
/// through as is.
pub fn attribute(
    remaining_accounts: &[AccountMeta],
    params: &AttributeParams,
) -> Result<Instruction> {
    attribute_with_program_id(crate::PROGRAM_ID, remaining_accounts, params)
}

/// Like [`attribute`] but calls program at given address.
pub fn attribute_with_program_id(
    program_id: Pubkey,
    remaining_accounts: &[AccountMeta],
    params: &AttributeParams,
) -> Result<Instruction> {
    let args = single_arg("attribute_params", params);
    ATTRIBUTE.build(program_id, &[], remaining_accounts, &args)
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sha2::{Digest, Sha256};

    use super::*;
    use crate::error::Error;
    use crate::value::Value;

    fn rules() -> RewardRules {
        RewardRules {
            seller_reward_payout_basis_points: 2000,
            mathematical_operand: PayoutOperation::Multiple,
            payout_numeral: 10,
        }
    }

    fn edit_accounts() -> EditRewardCenterAccounts {
        EditRewardCenterAccounts {
            wallet: Pubkey::new_unique(),
            auction_house: Pubkey::new_unique(),
            reward_center: Pubkey::new_unique(),
            remaining_accounts: Vec::new(),
        }
    }

    #[test]
    fn test_discriminators_match_sighash() {
        for kind in REGISTRY.iter() {
            let hash = Sha256::digest(format!("global:{}", kind.name));
            assert_eq!(&hash[..8], &kind.discriminator.as_bytes()[..], "{}", kind.name);
        }
    }

    #[test]
    fn test_discriminators_unique() {
        let kinds: Vec<_> = REGISTRY.iter().collect();
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.discriminator, b.discriminator, "{} {}", a.name, b.name);
            }
            assert_eq!(Some(*a), REGISTRY.by_discriminator(&a.discriminator));
        }
    }

    #[test]
    fn test_edit_reward_center() {
        let mut accounts = edit_accounts();
        let extra = Pubkey::new_unique();
        accounts.remaining_accounts.push(AccountMeta::new_readonly(extra, false));
        let params = EditRewardCenterParams { reward_rules: rules() };

        let ix = edit_reward_center(&accounts, &params).unwrap();
        assert_eq!(crate::PROGRAM_ID, ix.program_id);
        assert_eq!(
            vec![
                AccountMeta::new(accounts.wallet, true),
                AccountMeta::new_readonly(accounts.auction_house, false),
                AccountMeta::new(accounts.reward_center, false),
                AccountMeta::new_readonly(extra, false),
            ],
            ix.accounts
        );
        assert_eq!(
            vec![185u8, 238, 29, 159, 195, 37, 196, 120, 0xd0, 0x07, 0, 10, 0],
            ix.data
        );
    }

    #[test]
    fn test_typed_and_dynamic_paths_agree() {
        let accounts = edit_accounts();
        let params = EditRewardCenterParams { reward_rules: rules() };
        let program_id = Pubkey::new_unique();
        let typed =
            edit_reward_center_with_program_id(program_id, &accounts, &params)
                .unwrap();

        let reward_rules = Struct::new()
            .with("payout_numeral", 10u16)
            .with("mathematical_operand", Value::unit("Multiple"))
            .with("seller_reward_payout_basis_points", 2000u16);
        let args = Struct::new().with(
            "edit_reward_center_params",
            Struct::new().with("reward_rules", reward_rules),
        );
        let dynamic = REGISTRY
            .build(
                "edit_reward_center",
                program_id,
                &[
                    ("auction_house", accounts.auction_house),
                    ("wallet", accounts.wallet),
                    ("reward_center", accounts.reward_center),
                ],
                &[],
                &args,
            )
            .unwrap();
        assert_eq!(typed, dynamic);
    }

    #[test]
    fn test_create_reward_center_defaults() {
        let accounts = CreateRewardCenterAccounts {
            wallet: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            auction_house_treasury_mint: Pubkey::new_unique(),
            associated_token_account: Pubkey::new_unique(),
            auction_house: Pubkey::new_unique(),
            reward_center: Pubkey::new_unique(),
            remaining_accounts: Vec::new(),
        };
        let params = CreateRewardCenterParams { reward_rules: rules() };
        let ix = create_reward_center(&accounts, &params).unwrap();

        let keys: Vec<_> = ix.accounts.iter().map(|meta| meta.pubkey).collect();
        assert_eq!(
            vec![
                accounts.wallet,
                accounts.mint,
                accounts.auction_house_treasury_mint,
                accounts.associated_token_account,
                accounts.auction_house,
                accounts.reward_center,
                solana_system_interface::program::ID,
                TOKEN_PROGRAM_ID,
                ASSOCIATED_TOKEN_PROGRAM_ID,
                solana_program::sysvar::rent::ID,
            ],
            keys
        );
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert!(ix.accounts[1..].iter().all(|meta| !meta.is_signer));
        assert_eq!(CREATE_REWARD_CENTER.discriminator.as_bytes(), &ix.data[..8]);
        assert_eq!(8 + 5, ix.data.len());
    }

    #[test]
    fn test_offers() {
        let key = Pubkey::new_unique;
        let accounts = CreateOfferAccounts {
            wallet: key(),
            offer: key(),
            payment_account: key(),
            transfer_authority: key(),
            treasury_mint: key(),
            token_account: key(),
            metadata: key(),
            escrow_payment_account: key(),
            authority: key(),
            reward_center: key(),
            auction_house: key(),
            auction_house_fee_account: key(),
            buyer_trade_state: key(),
            ah_auctioneer_pda: key(),
            auction_house_program: key(),
            remaining_accounts: Vec::new(),
        };
        let params = CreateOfferParams {
            trade_state_bump: 1,
            escrow_payment_bump: 2,
            buyer_price: 3,
            token_size: 4,
        };
        let ix = create_offer(&accounts, &params).unwrap();
        assert_eq!(CREATE_OFFER.accounts.len(), ix.accounts.len());
        assert_eq!(accounts.auction_house_program, ix.accounts[14].pubkey);
        assert_eq!(8 + 18, ix.data.len());
        assert_eq!(&[1u8, 2, 3, 0, 0, 0, 0, 0, 0, 0, 4][..], &ix.data[8..19]);

        let accounts = CloseOfferAccounts {
            wallet: accounts.wallet,
            offer: accounts.offer,
            treasury_mint: accounts.treasury_mint,
            token_account: accounts.token_account,
            receipt_account: accounts.wallet,
            escrow_payment_account: accounts.escrow_payment_account,
            metadata: accounts.metadata,
            token_mint: key(),
            authority: accounts.authority,
            reward_center: accounts.reward_center,
            auction_house: accounts.auction_house,
            auction_house_fee_account: accounts.auction_house_fee_account,
            trade_state: accounts.buyer_trade_state,
            ah_auctioneer_pda: accounts.ah_auctioneer_pda,
            auction_house_program: accounts.auction_house_program,
            remaining_accounts: Vec::new(),
        };
        let ix = close_offer(&accounts, &CloseOfferParams { escrow_payment_bump: 2 })
            .unwrap();
        assert_eq!(19, ix.accounts.len());
        assert_eq!(ASSOCIATED_TOKEN_PROGRAM_ID, ix.accounts[15].pubkey);
        assert_eq!(vec![191u8, 72, 67, 35, 239, 209, 97, 132, 2], ix.data);
    }

    #[test]
    fn test_attribute() {
        let extra = AccountMeta::new(Pubkey::new_unique(), true);
        let params = AttributeParams { memo: "hi".into() };
        let ix = attribute(core::slice::from_ref(&extra), &params).unwrap();
        assert_eq!(vec![extra], ix.accounts);
        assert_eq!(
            vec![242u8, 187, 207, 90, 187, 238, 242, 237, 2, 0, 0, 0, b'h', b'i'],
            ix.data
        );
    }

    #[test]
    fn test_dynamic_errors() {
        let accounts = edit_accounts();
        let args = Struct::new().with("edit_reward_center_params", Struct::new());
        assert!(matches!(
            REGISTRY.build(
                "edit_reward_center",
                crate::PROGRAM_ID,
                &[("wallet", accounts.wallet)],
                &[],
                &args,
            ),
            Err(Error::SchemaMismatch { .. })
        ));

        let params = single_arg(
            "edit_reward_center_params",
            &EditRewardCenterParams { reward_rules: rules() },
        );
        assert_eq!(
            Err(Error::MissingSigner { role: "wallet" }),
            REGISTRY.build(
                "edit_reward_center",
                crate::PROGRAM_ID,
                &[
                    ("auction_house", accounts.auction_house),
                    ("reward_center", accounts.reward_center),
                ],
                &[],
                &params,
            )
        );
    }

    #[test]
    fn test_concurrent_builds() {
        let accounts = edit_accounts();
        let params = EditRewardCenterParams { reward_rules: rules() };
        let want = edit_reward_center(&accounts, &params).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| edit_reward_center(&accounts, &params)))
                .collect();
            for handle in handles {
                assert_eq!(Ok(want.clone()), handle.join().unwrap());
            }
        });
    }
}
