//! Macros for declaring protocol enumerations.

/// Declare a closed protocol enumeration with its wire integer mapping.
///
/// Generates the enum, `From<repr>` (unknown values degrade to the
/// `fallback` variant), `From<enum> for repr`, `Default` (the fallback),
/// serde impls that read and write the wire integer, and a
/// [`Phase`](crate::core::Phase) implementation.
///
/// # Example
///
/// ```
/// use matchstate::core::Phase;
/// use matchstate::wire_enum;
///
/// wire_enum! {
///     pub enum Light: i32 {
///         Off = 0,
///         Red = 1,
///         Green = 2,
///     }
///     fallback: Off
/// }
///
/// assert_eq!(Light::from(2), Light::Green);
/// assert_eq!(Light::from(9), Light::Off);
/// assert_eq!(i32::from(Light::Red), 1);
/// assert_eq!(Light::Green.name(), "Green");
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),* $(,)?
        }

        fallback: $fallback:ident
        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::$fallback
            }
        }

        impl ::core::convert::From<$repr> for $name {
            fn from(value: $repr) -> Self {
                $(
                    if value == $value {
                        return Self::$variant;
                    }
                )*
                $crate::__private::tracing::debug!(
                    "unknown {} wire value {}, using {:?}",
                    stringify!($name),
                    value,
                    Self::$fallback
                );
                Self::$fallback
            }
        }

        impl ::core::convert::From<$name> for $repr {
            fn from(value: $name) -> $repr {
                match value {
                    $($name::$variant => $value,)*
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S: $crate::__private::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                <$repr as $crate::__private::serde::Serialize>::serialize(&<$repr>::from(*self), serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::__private::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <$repr as $crate::__private::serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl $crate::core::Phase for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_unknown(&self) -> bool {
                matches!(self, Self::$fallback)
            }
        }
    };
}
