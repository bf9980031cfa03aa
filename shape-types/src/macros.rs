/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Macro for declaring closed string enumerations.

/// Declares a closed string enumeration with a fixed set of wire literals.
///
/// The generated type carries its own [`EnumSchema`](crate::schema::EnumSchema)
/// as an associated `SCHEMA` constant, renders as exactly its literal via
/// `Display`, and parses via `FromStr` with a hard
/// [`UnknownEnumVariantError`](crate::error::UnknownEnumVariantError) for
/// empty or undeclared input. Converting a value into a
/// [`Value`](crate::Value) stores the canonical literal string, so setting a
/// field from the typed constant or from the matching raw string produces
/// identical records.
///
/// # Examples
///
/// ```
/// use shape_types::string_enum;
///
/// string_enum! {
///     /// Whether a resource is usable.
///     pub enum ResourceState {
///         Enabled => "ENABLED",
///         Disabled => "DISABLED",
///     }
/// }
///
/// assert_eq!("ENABLED", ResourceState::Enabled.as_str());
/// assert_eq!(Ok(ResourceState::Disabled), "DISABLED".parse());
/// assert!("BOGUS".parse::<ResourceState>().is_err());
/// assert!("".parse::<ResourceState>().is_err());
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $literal:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                #[allow(missing_docs)] // documentation missing in model
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Schema describing this enumeration's closed value set.
            $vis const SCHEMA: $crate::schema::EnumSchema =
                $crate::schema::EnumSchema::new(stringify!($name), &[$($literal),+]);

            /// Returns the wire literal backing this value.
            $vis fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }

            /// Returns every declared wire literal, in declaration order.
            $vis const fn values() -> &'static [&'static str] {
                &[$($literal),+]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::UnknownEnumVariantError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($literal => ::std::result::Result::Ok($name::$variant),)+
                    _ => ::std::result::Result::Err(
                        $crate::error::UnknownEnumVariantError::new(stringify!($name), s),
                    ),
                }
            }
        }

        impl ::std::convert::From<$name> for $crate::Value {
            fn from(value: $name) -> Self {
                $crate::Value::String(value.as_str().to_string())
            }
        }
    };
}
