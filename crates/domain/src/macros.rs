//! Macro for implementing Display and FromStr for field-selector enums
//!
//! Drafts are edited through small enums (row kinds, text fields, tag lists)
//! that also appear in log fields and UI action payloads. This macro gives
//! each one a stable snake_case spelling and case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use profilehub_domain::impl_domain_kind_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Section {
//!     Theme,
//!     Hero,
//!     Seo,
//! }
//!
//! impl_domain_kind_conversions!(Section {
//!     Theme => "theme",
//!     Hero => "hero",
//!     Seo => "seo",
//! });
//!
//! assert_eq!(Section::Hero.to_string(), "hero");
//! assert_eq!("SEO".parse::<Section>(), Ok(Section::Seo));
//! ```

/// Implements Display and FromStr traits for selector enums
///
/// This macro generates:
/// - Display trait: writes the mapped string
/// - FromStr trait: parses case-insensitive strings to enum variants, with an
///   error message naming the enum
#[macro_export]
macro_rules! impl_domain_kind_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Stable string form of this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
