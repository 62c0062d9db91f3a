//! Errors reported while encoding arguments and building instructions.
//!
//! All failures are local validation failures.  Nothing here talks to the
//! network so none of the errors is transient and none should be retried.

/// Error returned by the encoder, the instruction builder and the registry.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// Value’s shape doesn’t match the schema: missing or unexpected field,
    /// wrong value kind or wrong fixed array length.
    #[display("{path}: schema mismatch: {reason}")]
    SchemaMismatch { path: String, reason: String },

    /// Numeric value doesn’t fit in the declared width.
    #[display("{path}: value out of range for {ty}")]
    OutOfRange { path: String, ty: &'static str },

    /// Account identity is not a valid 32-byte public key.
    #[display("invalid identity: {input}")]
    InvalidIdentity { input: String },

    /// Program identity is not a valid 32-byte public key.
    #[display("invalid program id: {input}")]
    InvalidProgramId { input: String },

    /// Account required to sign the instruction wasn’t provided.
    #[display("missing signer account: {role}")]
    MissingSigner { role: &'static str },

    /// Non-signer account required by the instruction wasn’t provided.
    #[display("missing account: {role}")]
    MissingAccount { role: &'static str },

    /// Instruction name is not present in the registry.
    #[display("unknown instruction: {name}")]
    UnknownInstruction { name: String },
}

pub type Result<T = (), E = Error> = core::result::Result<T, E>;

impl Error {
    pub(crate) fn mismatch(path: &Path<'_>, reason: impl Into<String>) -> Self {
        Self::SchemaMismatch { path: path.to_string(), reason: reason.into() }
    }

    pub(crate) fn range(path: &Path<'_>, ty: &'static str) -> Self {
        Self::OutOfRange { path: path.to_string(), ty }
    }
}


/// Location of a value within the encoded argument, used in error messages.
///
/// Forms a linked list through the stack so that no allocation happens unless
/// an error is actually reported.
#[derive(Clone, Copy)]
pub(crate) enum Path<'a> {
    Root(&'a str),
    Field(&'a Path<'a>, &'a str),
    Index(&'a Path<'a>, usize),
}

impl Path<'_> {
    pub(crate) fn field<'a>(&'a self, name: &'a str) -> Path<'a> {
        Path::Field(self, name)
    }

    pub(crate) fn index(&self, index: usize) -> Path<'_> {
        Path::Index(self, index)
    }
}

impl core::fmt::Display for Path<'_> {
    fn fmt(&self, fmtr: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Root(name) => fmtr.write_str(name),
            Self::Field(parent, name) => write!(fmtr, "{parent}.{name}"),
            Self::Index(parent, index) => write!(fmtr, "{parent}[{index}]"),
        }
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_path_display() {
        let root = Path::Root("edit_reward_center");
        let params = root.field("edit_reward_center_params");
        let rules = params.field("reward_rules");
        assert_eq!(
            "edit_reward_center.edit_reward_center_params.reward_rules",
            rules.to_string()
        );
        assert_eq!("args.items[3]", Path::Root("args").field("items").index(3).to_string());
    }

    #[test]
    fn test_error_display() {
        let root = Path::Root("args");
        let err = Error::range(&root.field("payout_numeral"), "u16");
        assert_eq!("args.payout_numeral: value out of range for u16", err.to_string());
        let err = Error::MissingSigner { role: "wallet" };
        assert_eq!("missing signer account: wallet", err.to_string());
    }
}
