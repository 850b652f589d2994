use crate::blocks::{Block, BlockAndState, CodeGeneratorState, WhileLoopBlock};
use crate::diagnostics::GenError;
use crate::naming::count_all_blocks;

use super::insert_block;

pub fn create_while_block(
    condition: &str,
    loop_blocks: Vec<Block>,
    state: &CodeGeneratorState,
    nest_target: Option<usize>,
) -> Result<BlockAndState<WhileLoopBlock>, GenError> {
    let index = count_all_blocks(&state.blocks);

    let block = WhileLoopBlock {
        index,
        comment: None,
        condition: condition.to_string(),
        loop_blocks,
    };

    let blocks = insert_block(&state.blocks, Block::While(block.clone()), nest_target)?;

    tracing::debug!(index, nest_target = ?nest_target, "created while block");

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
