//! Assembly of instructions from account roles and encoded instruction data.
//!
//! Every instruction kind declares a fixed, ordered list of [`AccountRole`]s.
//! The position of an account in the instruction is what the on-chain program
//! uses to interpret it so the order of roles is part of the wire format and
//! is never changed.  Callers may append any number of trailing accounts
//! (Anchor’s ‘remaining accounts’) which are passed through verbatim after the
//! fixed list.
//!
//! Missing accounts are rejected when the instruction is built rather than
//! left for the transaction submission to fail.

use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use crate::error::{Error, Result};

/// Account slot of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountRole {
    pub name: &'static str,
    pub writable: bool,
    pub signer: bool,
    /// Address used when the caller doesn’t provide one.  Set for well-known
    /// programs and sysvars.
    pub default: Option<Pubkey>,
}

impl AccountRole {
    /// Read-only non-signer account.
    pub const fn readonly(name: &'static str) -> Self {
        Self { name, writable: false, signer: false, default: None }
    }

    /// Writable non-signer account.
    pub const fn writable(name: &'static str) -> Self {
        Self { name, writable: true, signer: false, default: None }
    }

    /// Writable account which must sign the transaction.
    pub const fn writable_signer(name: &'static str) -> Self {
        Self { name, writable: true, signer: true, default: None }
    }

    /// Read-only account which must sign the transaction.
    pub const fn readonly_signer(name: &'static str) -> Self {
        Self { name, writable: false, signer: true, default: None }
    }

    /// Sets address used if the caller doesn’t provide one.
    pub const fn with_default(self, key: Pubkey) -> Self {
        Self { default: Some(key), ..self }
    }

    /// Returns account metadata for this role with given address.
    pub fn meta(&self, pubkey: Pubkey) -> AccountMeta {
        AccountMeta {
            pubkey,
            is_signer: self.signer,
            is_writable: self.writable,
        }
    }
}


/// Resolves account metadata for an instruction.
///
/// `keys` maps role names to addresses.  The result lists one account for
/// every role in `roles` order followed by `trailing` accounts in the order
/// given.  Roles not present in `keys` use their default address; if there is
/// none, fails with [`Error::MissingSigner`] or [`Error::MissingAccount`].  A
/// key naming a role the instruction doesn’t have or naming the same role
/// more than once is a [`Error::SchemaMismatch`].
pub fn account_metas(
    roles: &[AccountRole],
    keys: &[(&str, Pubkey)],
    trailing: &[AccountMeta],
) -> Result<Vec<AccountMeta>> {
    if let Some((name, _)) =
        keys.iter().find(|(name, _)| !roles.iter().any(|r| r.name == *name))
    {
        return Err(Error::SchemaMismatch {
            path: format!("accounts.{name}"),
            reason: "unknown account role".into(),
        });
    }
    if let Some((name, _)) = keys
        .iter()
        .enumerate()
        .find(|(idx, (name, _))| keys[..*idx].iter().any(|(n, _)| n == name))
        .map(|(_, entry)| entry)
    {
        return Err(Error::SchemaMismatch {
            path: format!("accounts.{name}"),
            reason: "duplicate account role".into(),
        });
    }

    let mut metas = Vec::with_capacity(roles.len() + trailing.len());
    for role in roles {
        let key = keys
            .iter()
            .find(|(name, _)| *name == role.name)
            .map(|(_, key)| *key)
            .or(role.default)
            .ok_or_else(|| {
                if role.signer {
                    Error::MissingSigner { role: role.name }
                } else {
                    Error::MissingAccount { role: role.name }
                }
            })?;
        metas.push(role.meta(key));
    }
    metas.extend_from_slice(trailing);
    Ok(metas)
}

/// Builds an instruction calling `program_id`.
///
/// Accounts are resolved with [`account_metas`] and `data` becomes the
/// instruction data unchanged.  The returned instruction owns all its data.
pub fn build(
    program_id: Pubkey,
    roles: &[AccountRole],
    keys: &[(&str, Pubkey)],
    trailing: &[AccountMeta],
    data: Vec<u8>,
) -> Result<Instruction> {
    let accounts = account_metas(roles, keys, trailing)?;
    log::debug!(
        "built instruction for {program_id}: {} accounts ({} trailing), {} \
         data bytes",
        accounts.len(),
        trailing.len(),
        data.len()
    );
    Ok(Instruction { program_id, accounts, data })
}
