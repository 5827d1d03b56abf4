//! Node type registry.
//!
//! Turns an engine handle into its wrapper. The kind tag is read once, when
//! the wrapper is built; every later materialization of the same handle in
//! the same epoch is a cache hit and makes no engine call.

use ark_native::{AstNodeType, Field, NativeArray, NativePtr};
use smallvec::SmallVec;
use tracing::debug;

use crate::context::Context;
use crate::error::Result;
use crate::node::{AstNode, Captured, Node, NodeKind};

impl Context {
    /// Wrapper for `peer`. Fails with `InvalidHandle` on a null handle.
    pub fn materialize(&self, peer: NativePtr) -> Result<Node> {
        self.cache().get_or_create(peer, |peer| self.construct(peer))
    }

    /// Wrapper for `peer`, or `None` for a null handle.
    pub fn materialize_opt(&self, peer: NativePtr) -> Result<Option<Node>> {
        match peer.non_null() {
            Some(peer) => self.materialize(peer).map(Some),
            None => Ok(None),
        }
    }

    pub fn materialize_list(&self, peers: &[NativePtr]) -> Result<Vec<Node>> {
        peers.iter().map(|&peer| self.materialize(peer)).collect()
    }

    /// Unpack an engine array result into wrappers.
    pub fn materialize_array(&self, array: NativeArray) -> Result<Vec<Node>> {
        let peers = self.engine().unpack_array(array);
        self.materialize_list(&peers)
    }

    fn construct(&self, peer: NativePtr) -> Result<Node> {
        let tag = self.engine().node_type(self.peer()?, peer);
        let kind = NodeKind::from_tag(tag);
        let captured = match kind {
            NodeKind::Known(kind) => self.capture(kind, peer)?,
            NodeKind::Unsupported { tag } => {
                debug!(tag, ?peer, "unknown node kind, materializing as unsupported");
                Captured::None
            }
        };
        Ok(Node::new(AstNode::new(peer, kind, self.epoch(), captured)))
    }

    /// Fields captured when a wrapper of `kind` is built.
    fn capture(&self, kind: AstNodeType, peer: NativePtr) -> Result<Captured> {
        use AstNodeType::*;

        let captured = match kind {
            CallExpression => {
                let cx = self.peer()?;
                let callee = self.materialize(self.engine().get_node(cx, peer, Field::Callee))?;
                let arguments = self.engine().get_nodes(cx, peer, Field::Arguments);
                let arguments: SmallVec<[Node; 4]> = self
                    .engine()
                    .unpack_array(arguments)
                    .into_iter()
                    .map(|arg| self.materialize(arg))
                    .collect::<Result<_>>()?;
                Captured::Call { callee, arguments }
            }

            EtsModule | Identifier | StringLiteral | NumberLiteral | BooleanLiteral
            | NullLiteral | UndefinedLiteral | TemplateElement | TemplateLiteral
            | AnnotationUsage | EtsTypeReference | TsTypeParameterInstantiation
            | TsTypeParameterDeclaration => Captured::None,

            FunctionDeclaration | ClassDeclaration | EtsStructDeclaration
            | TsInterfaceDeclaration | VariableDeclaration => Captured::None,

            ClassDefinition | MethodDefinition | TsInterfaceBody | VariableDeclarator
            | ScriptFunction | ClassProperty | EtsParameterExpression => Captured::None,

            BlockStatement | ExpressionStatement | IfStatement | ReturnStatement
            | TryStatement | CatchClause => Captured::None,

            FunctionExpression | ArrowFunctionExpression | AssignmentExpression
            | EtsNewClassInstanceExpression | ArrayExpression | BlockExpression => Captured::None,

            MemberExpression | ConditionalExpression | TsAsExpression | ObjectExpression
            | Property | BinaryExpression => Captured::None,

            EtsImportDeclaration | ImportSpecifier => Captured::None,
        };
        Ok(captured)
    }
}
