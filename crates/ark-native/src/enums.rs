//! Engine enums and modifier flags.
//!
//! Integer-valued fields cross the boundary as raw `i32`; these types give
//! them names. Values outside the known range are reported by `from_raw`
//! returning `None`; code that only passes a value back to the engine keeps
//! the raw `i32` instead.

use bitflags::bitflags;

/// Compilation phase of an engine context.
///
/// Phases are ordered; `Error` is terminal and sorts last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContextState {
    New,
    Parsed,
    Bound,
    Checked,
    Lowered,
    AsmGenerated,
    BinGenerated,
    Error,
}

impl ContextState {
    pub const fn name(self) -> &'static str {
        match self {
            ContextState::New => "new",
            ContextState::Parsed => "parsed",
            ContextState::Bound => "bound",
            ContextState::Checked => "checked",
            ContextState::Lowered => "lowered",
            ContextState::AsmGenerated => "asm-generated",
            ContextState::BinGenerated => "bin-generated",
            ContextState::Error => "error",
        }
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, ContextState::Error)
    }
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Modifier bits stored on every node.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: i32 {
        const STATIC = 1 << 0;
        const ASYNC = 1 << 1;
        const PUBLIC = 1 << 2;
        const PROTECTED = 1 << 3;
        const PRIVATE = 1 << 4;
        const DECLARE = 1 << 5;
        const READONLY = 1 << 6;
        const OPTIONAL = 1 << 7;
        const DEFINITE = 1 << 8;
        const ABSTRACT = 1 << 9;
        const CONST = 1 << 10;
        const FINAL = 1 << 11;
        const NATIVE = 1 << 12;
        const OVERRIDE = 1 << 13;
        const CONSTRUCTOR = 1 << 14;
        const SETTER = 1 << 15;
        const GETTER = 1 << 16;
        const DEFAULT_EXPORT = 1 << 17;
        const EXPORT = 1 << 18;
    }
}

macro_rules! raw_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $raw:literal,)* }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant = $raw,)*
        }

        impl $name {
            pub const fn from_raw(raw: i32) -> Option<$name> {
                match raw {
                    $($raw => Some($name::$variant),)*
                    _ => None,
                }
            }

            #[inline]
            pub const fn raw(self) -> i32 {
                self as i32
            }
        }

        impl From<$name> for i32 {
            #[inline]
            fn from(value: $name) -> i32 {
                value.raw()
            }
        }
    };
}

raw_enum! {
    /// `let` / `const` / `var`.
    VariableDeclarationKind {
        Let = 0,
        Const = 1,
        Var = 2,
    }
}

raw_enum! {
    MethodDefinitionKind {
        None = 0,
        Constructor = 1,
        Method = 2,
        ExtensionMethod = 3,
        Get = 4,
        Set = 5,
    }
}

raw_enum! {
    /// Whether a member access uses `.`, `[]` or is an element access.
    MemberExpressionKind {
        None = 0,
        ElementAccess = 1,
        PropertyAccess = 2,
        GetterAccess = 3,
        SetterAccess = 4,
    }
}

raw_enum! {
    /// Operator tokens of binary and assignment expressions.
    TokenType {
        Plus = 0,
        Minus = 1,
        Multiply = 2,
        Divide = 3,
        Mod = 4,
        Equal = 5,
        NotEqual = 6,
        StrictEqual = 7,
        NotStrictEqual = 8,
        LessThan = 9,
        LessThanEqual = 10,
        GreaterThan = 11,
        GreaterThanEqual = 12,
        LogicalAnd = 13,
        LogicalOr = 14,
        NullishCoalescing = 15,
        Substitution = 16,
        PlusEqual = 17,
        MinusEqual = 18,
    }
}
