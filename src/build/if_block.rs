use crate::blocks::{Block, BlockAndState, CodeGeneratorState, ElseBlock, ElseIfBlock, IfBlock};
use crate::diagnostics::GenError;
use crate::naming::count_all_blocks;

use super::insert_block;

/// Create an `if` block with optional `else if` branches and a final `else`.
///
/// The `if` takes the next index. Branch indices are then issued in pre-order
/// after the then-blocks, replacing whatever index a branch carried.
pub fn create_if_block(
    condition: &str,
    then_blocks: Vec<Block>,
    state: &CodeGeneratorState,
    else_if_blocks: Vec<ElseIfBlock>,
    else_block: Option<ElseBlock>,
    nest_target: Option<usize>,
) -> Result<BlockAndState<IfBlock>, GenError> {
    let index = count_all_blocks(&state.blocks);

    let mut next = index + 1 + count_all_blocks(&then_blocks);
    let else_if_blocks: Vec<ElseIfBlock> = else_if_blocks
        .into_iter()
        .map(|mut branch| {
            branch.index = next;
            next += 1 + count_all_blocks(&branch.blocks);
            branch
        })
        .collect();
    let else_block = else_block.map(|mut branch| {
        branch.index = next;
        branch
    });

    let block = IfBlock {
        index,
        comment: None,
        condition: condition.to_string(),
        then_blocks,
        else_if_blocks,
        else_block,
    };

    let blocks = insert_block(&state.blocks, Block::If(block.clone()), nest_target)?;

    tracing::debug!(
        index,
        else_ifs = block.else_if_blocks.len(),
        has_else = block.else_block.is_some(),
        nest_target = ?nest_target,
        "created if block"
    );

    Ok(BlockAndState {
        block,
        state: CodeGeneratorState {
            blocks,
            variables: state.variables.clone(),
            is_async: state.is_async,
            scope: state.scope.clone(),
        },
    })
}
