//! Enumerations that can be coerced from their PDF spelling or their name.
//!
//! A string is first matched exactly against the member's PDF value (`"f*"`,
//! `"Multiply"`); failing that, it is matched case-insensitively against the
//! member name (`"fill_evenodd"`, `"MULTIPLY"`). Numeric enumerations also
//! accept their integer value.

macro_rules! coercive_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($label:literal) : numeric {
            $( $(#[$vmeta:meta])* $variant:ident = ($member:literal, $num:literal) ),+ $(,)?
        }
    ) => {
        $crate::coerce::coercive_enum!(@base
            $(#[$meta])* $name, $label,
            $( $(#[$vmeta])* $variant, $member, stringify!($num) ),+
        );

        impl $name {
            /// The integer operand used in graphics-state dictionaries.
            pub fn as_int(self) -> i64 {
                match self {
                    $( $name::$variant => $num ),+
                }
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::error::StyleError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                match value {
                    $( $num => Ok($name::$variant), )+
                    _ => Err($crate::error::StyleError::InvalidValue {
                        property: $label,
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                #[derive(serde::Deserialize)]
                #[serde(untagged)]
                enum Def {
                    Str(String),
                    Num(i64),
                }

                match Def::deserialize(deserializer)? {
                    Def::Str(s) => s.parse().map_err(serde::de::Error::custom),
                    Def::Num(n) => $name::try_from(n).map_err(serde::de::Error::custom),
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub enum $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = ($member:literal, $value:literal) ),+ $(,)?
        }
    ) => {
        $crate::coerce::coercive_enum!(@base
            $(#[$meta])* $name, $label,
            $( $(#[$vmeta])* $variant, $member, $value ),+
        );

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };

    (@base
        $(#[$meta:meta])* $name:ident, $label:literal,
        $( $(#[$vmeta:meta])* $variant:ident, $member:literal, $value:expr ),+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The PDF spelling of this member.
            pub fn value(self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            pub fn member_name(self) -> &'static str {
                match self {
                    $( $name::$variant => $member ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::StyleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .find(|member| member.value() == s)
                    .or_else(|| {
                        Self::ALL
                            .iter()
                            .find(|member| member.member_name().eq_ignore_ascii_case(s))
                    })
                    .copied()
                    .ok_or_else(|| $crate::error::StyleError::InvalidValue {
                        property: $label,
                        value: s.to_string(),
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.value())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.value())
            }
        }
    };
}

pub(crate) use coercive_enum;
