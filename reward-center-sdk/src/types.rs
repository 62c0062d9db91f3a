//! Argument types of the reward center program.
//!
//! Each type comes with its wire [`Schema`] (or list of enum variants) and
//! converts into [`Value`] so it can be passed to the schema encoder.

use crate::schema::{Field, Schema, Type, Variant};
use crate::value::{Struct, ToValue, Value};

/// Defines a struct, its schema constant and its [`ToValue`] implementation.
///
/// Fields are listed in wire order together with their wire type.
macro_rules! define_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident as $schema:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty = $wire:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            $( $(#[$field_meta])* pub $field: $ty, )*
        }

        #[doc = concat!("Wire layout of [`", stringify!($name), "`].")]
        pub const $schema: Schema = Schema::new(stringify!($name), &[
            $( Field::new(stringify!($field), $wire), )*
        ]);

        impl ToValue for $name {
            fn to_value(&self) -> Value {
                Value::Struct(
                    Struct::new()
                        $( .with(stringify!($field), self.$field.to_value()) )*
                )
            }
        }
    };
}


/// Operation applied to the sale price to compute the reward payout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayoutOperation {
    Multiple,
    Divide,
}

/// Variants of [`PayoutOperation`] in wire order.
pub const PAYOUT_OPERATION: &[Variant] =
    &[Variant::unit("Multiple"), Variant::unit("Divide")];

impl PayoutOperation {
    pub fn name(self) -> &'static str {
        match self {
            Self::Multiple => "Multiple",
            Self::Divide => "Divide",
        }
    }
}

impl ToValue for PayoutOperation {
    fn to_value(&self) -> Value { Value::unit(self.name()) }
}

define_struct! {
    /// Rules for computing rewards paid out on sales.
    pub struct RewardRules as REWARD_RULES {
        /// Share of the reward paid to the seller, in basis points.
        pub seller_reward_payout_basis_points: u16 = Type::U16,
        pub mathematical_operand: PayoutOperation = Type::Enum(PAYOUT_OPERATION),
        pub payout_numeral: u16 = Type::U16,
    }
}

define_struct! {
    /// Options to set on a new reward center.
    pub struct CreateRewardCenterParams as CREATE_REWARD_CENTER_PARAMS {
        pub reward_rules: RewardRules = Type::Struct(&REWARD_RULES),
    }
}

define_struct! {
    /// Options to set on an existing reward center.
    pub struct EditRewardCenterParams as EDIT_REWARD_CENTER_PARAMS {
        pub reward_rules: RewardRules = Type::Struct(&REWARD_RULES),
    }
}

define_struct! {
    pub struct CreateOfferParams as CREATE_OFFER_PARAMS {
        pub trade_state_bump: u8 = Type::U8,
        pub escrow_payment_bump: u8 = Type::U8,
        pub buyer_price: u64 = Type::U64,
        pub token_size: u64 = Type::U64,
    }
}

define_struct! {
    pub struct CloseOfferParams as CLOSE_OFFER_PARAMS {
        pub escrow_payment_bump: u8 = Type::U8,
    }
}

define_struct! {
    /// Free-form attribution attached to a transaction.
    pub struct AttributeParams as ATTRIBUTE_PARAMS {
        pub memo: String = Type::String,
    }
}
