use crate::blocks::{
    Block, BlockAndState, CodeGeneratorState, FunctionCallBlock, FunctionInfo, VariableInfo,
    VariableInfoWithIndex,
};
use crate::diagnostics::GenError;
use crate::naming::{count_all_blocks, is_async_type, unique_name_among, unwrap_async_type};

use super::insert_block;

/// Create a call to `function_info`, binding its result to a fresh variable
/// named after the lower-cased function name.
pub fn create_function_call_block(
    function_info: &FunctionInfo,
    state: &CodeGeneratorState,
    nest_target: Option<usize>,
) -> Result<BlockAndState<FunctionCallBlock>, GenError> {
    let index = count_all_blocks(&state.blocks);
    let taken = state
        .variables
        .iter()
        .map(|v| v.name.as_str())
        .chain(state.scope.iter().map(|v| v.name.as_str()));
    let name = unique_name_among(&function_info.name.to_lowercase(), taken);
    let ty = unwrap_async_type(function_info.return_type.as_deref());
    let is_async = is_async_type(function_info.return_type.as_deref());

    let block = FunctionCallBlock {
        index,
        comment: None,
        function_info: function_info.clone(),
        parameters: function_info.parameters.clone(),
        return_variable: VariableInfo::new(name.clone(), ty.clone()),
        is_async,
    };

    let blocks = insert_block(&state.blocks, Block::FunctionCall(block.clone()), nest_target)?;
    let mut variables = state.variables.clone();
    variables.push(VariableInfoWithIndex::new(name, ty, index));

    tracing::debug!(
        index,
        function = %function_info.name,
        variable = %block.return_variable.name,
        is_async,
        nest_target = ?nest_target,
        "created functionCall block"
    );

    Ok(BlockAndState {
        block,
        state: CodeGeneratorState {
            blocks,
            variables,
            is_async: state.is_async || is_async,
            scope: state.scope.clone(),
        },
    })
}
