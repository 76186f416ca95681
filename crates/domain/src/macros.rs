//! Macro for implementing string conversions on closed domain enums
//!
//! Ticket status, note visibility and profile role all travel over the wire
//! as lowercase strings. This macro gives each of them one mapping table that
//! drives `as_str`, `Display` and `FromStr`, so the three can never disagree.
//!
//! # Example
//!
//! ```rust
//! use autocrm_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Email,
//!     Chat,
//! }
//!
//! impl_domain_enum_conversions!(Channel {
//!     Email => "email",
//!     Chat => "chat",
//! });
//!
//! assert_eq!(Channel::Chat.as_str(), "chat");
//! assert_eq!("EMAIL".parse::<Channel>().unwrap(), Channel::Email);
//! ```

/// Implements `ALL`, `as_str`, `Display` and `FromStr` for a unit-only enum
///
/// Parsing trims surrounding whitespace and ignores ASCII case. Unknown input
/// yields [`AutoCrmError::Validation`](crate::errors::AutoCrmError::Validation)
/// naming the enum.
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = $crate::errors::AutoCrmError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::errors::AutoCrmError::Validation(format!(
                        "unrecognized {} value: {:?}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
