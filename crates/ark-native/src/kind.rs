//! Node kind tags reported by the engine.
//!
//! The set is closed: every dispatch site in the host layer matches on it
//! exhaustively. Tags the engine reports that are not listed here are legal
//! and surface as `None` from [`AstNodeType::from_tag`].

macro_rules! ast_node_types {
    ($($variant:ident = $tag:literal => $name:literal,)*) => {
        /// Kind tag of an engine-owned AST node.
        #[repr(u32)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum AstNodeType {
            $($variant = $tag,)*
        }

        impl AstNodeType {
            /// Every known kind, in tag order.
            pub const ALL: &'static [AstNodeType] = &[$(AstNodeType::$variant,)*];

            /// Resolve a raw engine tag.
            pub const fn from_tag(tag: u32) -> Option<AstNodeType> {
                match tag {
                    $($tag => Some(AstNodeType::$variant),)*
                    _ => None,
                }
            }

            /// Engine-side class name of the kind.
            pub const fn name(self) -> &'static str {
                match self {
                    $(AstNodeType::$variant => $name,)*
                }
            }
        }
    };
}

ast_node_types! {
    EtsModule = 1 => "ETSModule",
    Identifier = 2 => "Identifier",
    StringLiteral = 3 => "StringLiteral",
    NumberLiteral = 4 => "NumberLiteral",
    BooleanLiteral = 5 => "BooleanLiteral",
    NullLiteral = 6 => "NullLiteral",
    UndefinedLiteral = 7 => "UndefinedLiteral",
    TemplateElement = 8 => "TemplateElement",
    TemplateLiteral = 9 => "TemplateLiteral",
    AnnotationUsage = 10 => "AnnotationUsage",
    EtsTypeReference = 11 => "ETSTypeReference",
    TsTypeParameterInstantiation = 12 => "TSTypeParameterInstantiation",
    TsTypeParameterDeclaration = 13 => "TSTypeParameterDeclaration",
    FunctionDeclaration = 20 => "FunctionDeclaration",
    ClassDeclaration = 21 => "ClassDeclaration",
    EtsStructDeclaration = 22 => "ETSStructDeclaration",
    TsInterfaceDeclaration = 23 => "TSInterfaceDeclaration",
    VariableDeclaration = 24 => "VariableDeclaration",
    ClassDefinition = 30 => "ClassDefinition",
    MethodDefinition = 31 => "MethodDefinition",
    TsInterfaceBody = 32 => "TSInterfaceBody",
    VariableDeclarator = 33 => "VariableDeclarator",
    ScriptFunction = 34 => "ScriptFunction",
    ClassProperty = 35 => "ClassProperty",
    EtsParameterExpression = 36 => "ETSParameterExpression",
    BlockStatement = 40 => "BlockStatement",
    ExpressionStatement = 41 => "ExpressionStatement",
    IfStatement = 42 => "IfStatement",
    ReturnStatement = 43 => "ReturnStatement",
    TryStatement = 44 => "TryStatement",
    CatchClause = 45 => "CatchClause",
    CallExpression = 50 => "CallExpression",
    FunctionExpression = 51 => "FunctionExpression",
    ArrowFunctionExpression = 52 => "ArrowFunctionExpression",
    AssignmentExpression = 53 => "AssignmentExpression",
    EtsNewClassInstanceExpression = 54 => "ETSNewClassInstanceExpression",
    ArrayExpression = 55 => "ArrayExpression",
    BlockExpression = 56 => "BlockExpression",
    MemberExpression = 60 => "MemberExpression",
    ConditionalExpression = 61 => "ConditionalExpression",
    TsAsExpression = 62 => "TSAsExpression",
    ObjectExpression = 63 => "ObjectExpression",
    Property = 64 => "Property",
    BinaryExpression = 70 => "BinaryExpression",
    EtsImportDeclaration = 80 => "ETSImportDeclaration",
    ImportSpecifier = 81 => "ImportSpecifier",
}

impl AstNodeType {
    #[inline]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Kinds the engine models as block statements.
    ///
    /// `ETSModule` derives from `BlockStatement` in the engine class hierarchy.
    pub const fn is_block_statement(self) -> bool {
        matches!(self, AstNodeType::BlockStatement | AstNodeType::EtsModule)
    }

    /// Kinds the engine models as class declarations.
    ///
    /// `ETSStructDeclaration` derives from `ClassDeclaration`.
    pub const fn is_class_declaration(self) -> bool {
        matches!(
            self,
            AstNodeType::ClassDeclaration | AstNodeType::EtsStructDeclaration
        )
    }
}

impl std::fmt::Display for AstNodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
