use ark_native::Field;

use super::peer_nodes;
use crate::context::Context;
use crate::error::Result;
use crate::node::Node;

peer_nodes! {
    /// Root of a compiled file.
    EtsModule => EtsModule,
}

impl EtsModule {
    pub fn statements(&self, cx: &Context) -> Result<Vec<Node>> {
        self.children(cx, Field::Statements)
    }

    pub fn set_statements(&self, cx: &Context, statements: &[Node]) -> Result<()> {
        self.set_children(cx, Field::Statements, statements)
    }

    pub fn ident(&self, cx: &Context) -> Result<Option<Node>> {
        self.child_opt(cx, Field::Ident)
    }

    pub fn flags(&self, cx: &Context) -> Result<i32> {
        self.int(cx, Field::ModuleFlags)
    }
}
