//! Macros for declaring state enums.

/// Generate a `State` implementation for a plain enum.
///
/// Derives `Clone`, `PartialEq`, `Debug` and the serde traits; extra
/// derives can be passed as attributes.
///
/// # Example
///
/// ```
/// use bugcost::state_enum;
/// use bugcost::core::State;
///
/// state_enum! {
///     pub enum Triage {
///         New,
///         Confirmed,
///         WontFix,
///     }
///     final: [WontFix]
/// }
///
/// assert_eq!(Triage::Confirmed.name(), "Confirmed");
/// assert!(Triage::WontFix.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Triage {
            New,
            Confirmed,
            Duplicate,
        }
        final: [Duplicate]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Triage::New.name(), "New");
        assert!(!Triage::New.is_final());
        assert!(!Triage::Confirmed.is_final());
        assert!(Triage::Duplicate.is_final());
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum Minimal {
                One,
                Two,
            }
        }

        assert!(!Minimal::One.is_final());
        assert!(!Minimal::Two.is_final());
    }

    #[test]
    fn state_enum_accepts_extra_derives() {
        state_enum! {
            #[derive(Copy, Eq, Hash)]
            pub enum Lane {
                Left,
                Right,
            }
        }

        let lane = Lane::Left;
        let copied = lane;
        assert_eq!(lane, copied);
    }
}
