//! Block constructors.
//!
//! Every constructor borrows the current session state and returns the new
//! block together with the next state. Callers must thread the returned state
//! into the following call; reusing an older state issues duplicate indices.

mod function_call;
mod if_block;
mod while_block;

pub use function_call::create_function_call_block;
pub use if_block::create_if_block;
pub use while_block::create_while_block;

use crate::blocks::{Block, BlockAndState, Commented};
use crate::diagnostics::GenError;
use crate::locate::{append_child, locate_and_replace};

/// Place `block` at the top level, or inside the block indexed `nest_target`.
fn insert_block(
    blocks: &[Block],
    block: Block,
    nest_target: Option<usize>,
) -> Result<Vec<Block>, GenError> {
    match nest_target {
        Some(target) => locate_and_replace(blocks.to_vec(), target, |site| append_child(site, block)),
        None => {
            let mut blocks = blocks.to_vec();
            blocks.push(block);
            Ok(blocks)
        }
    }
}

impl<T: Commented> BlockAndState<T> {
    /// Attach a comment to the created block, both in `block` and where it
    /// now sits in `state`.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Result<Self, GenError> {
        let comment = comment.into();
        let index = self.block.index();
        self.block.set_comment(Some(comment.clone()));
        self.state.blocks = locate_and_replace(self.state.blocks, index, |mut site| {
            site.set_comment(Some(comment));
            Ok(())
        })?;
        Ok(self)
    }
}
