//! Static table of instruction kinds exposed by a program.
//!
//! Each [`InstructionKind`] binds a name to its discriminator, argument schema
//! and account roles.  Tables are `static` and never change after
//! initialisation so they can be shared between threads without locking.

use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use crate::builder::{self, AccountRole};
use crate::encode::{encode_instruction_data, Discriminator};
use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::value::Struct;

/// Description of a single instruction of a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionKind {
    pub name: &'static str,
    pub discriminator: Discriminator,
    /// Schema of the instruction arguments.  Each field is one argument of the
    /// instruction.
    pub args: Schema,
    /// Fixed account roles in the order the program expects them.
    pub accounts: &'static [AccountRole],
}

impl InstructionKind {
    /// Encodes instruction data, that is discriminator followed by `args`.
    pub fn encode(&self, args: &Struct) -> Result<Vec<u8>> {
        encode_instruction_data(&self.discriminator, &self.args, args)
    }

    /// Builds the instruction.
    ///
    /// `keys` maps account role names to addresses (see
    /// [`builder::account_metas`]) and `trailing` accounts are appended after
    /// the fixed roles.
    pub fn build(
        &self,
        program_id: Pubkey,
        keys: &[(&str, Pubkey)],
        trailing: &[AccountMeta],
        args: &Struct,
    ) -> Result<Instruction> {
        let data = self.encode(args)?;
        log::debug!("building {} instruction", self.name);
        builder::build(program_id, self.accounts, keys, trailing, data)
    }
}


/// Versioned table of instruction kinds of a program.
#[derive(Debug)]
pub struct Registry {
    pub program: &'static str,
    pub version: &'static str,
    kinds: &'static [&'static InstructionKind],
}

impl Registry {
    /// Creates a new table.
    ///
    /// Panics if two kinds share a name or a discriminator.  When used to
    /// initialise a `static` this turns into a compile-time error.
    pub const fn new(
        program: &'static str,
        version: &'static str,
        kinds: &'static [&'static InstructionKind],
    ) -> Self {
        let mut i = 0;
        while i < kinds.len() {
            let mut j = i + 1;
            while j < kinds.len() {
                if bytes_eq(kinds[i].name.as_bytes(), kinds[j].name.as_bytes()) {
                    panic!("duplicate instruction name in registry");
                }
                if bytes_eq(
                    &kinds[i].discriminator.0,
                    &kinds[j].discriminator.0,
                ) {
                    panic!("duplicate instruction discriminator in registry");
                }
                j += 1;
            }
            i += 1;
        }
        Self { program, version, kinds }
    }

    /// Looks up instruction kind by name.
    pub fn get(&self, name: &str) -> Result<&'static InstructionKind> {
        self.kinds
            .iter()
            .copied()
            .find(|kind| kind.name == name)
            .ok_or_else(|| Error::UnknownInstruction { name: name.into() })
    }

    /// Looks up instruction kind by its discriminator.
    pub fn by_discriminator(
        &self,
        discriminator: &Discriminator,
    ) -> Option<&'static InstructionKind> {
        self.kinds
            .iter()
            .copied()
            .find(|kind| kind.discriminator == *discriminator)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static InstructionKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Encodes instruction data for instruction with given name.
    pub fn encode(&self, name: &str, args: &Struct) -> Result<Vec<u8>> {
        self.get(name)?.encode(args)
    }

    /// Builds instruction with given name.  See [`InstructionKind::build`].
    pub fn build(
        &self,
        name: &str,
        program_id: Pubkey,
        keys: &[(&str, Pubkey)],
        trailing: &[AccountMeta],
        args: &Struct,
    ) -> Result<Instruction> {
        self.get(name)?.build(program_id, keys, trailing, args)
    }
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
