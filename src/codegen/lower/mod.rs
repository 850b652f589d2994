use crate::blocks::*;
use crate::diagnostics::GenError;
use crate::naming::{find_variable_by_type, is_async_type};

use super::ast::{ElseBranch, Expr, IfStmt, Stmt};

/// Lower a block sequence, placing each block's comment line before it.
pub fn lower_blocks(blocks: &[Block], state: &CodeGeneratorState) -> Result<Vec<Stmt>, GenError> {
    let mut stmts = Vec::with_capacity(blocks.len());
    for block in blocks {
        if let Some(comment) = block.comment() {
            stmts.push(Stmt::Comment(comment.to_string()));
        }
        stmts.push(lower_block(block, state)?);
    }
    Ok(stmts)
}

/// Lower one block into its statement form.
///
/// `elseIf` and `else` branches only have a statement form inside their `if`;
/// met on their own they fail with `UnknownBlockKind`.
pub fn lower_block(block: &Block, state: &CodeGeneratorState) -> Result<Stmt, GenError> {
    tracing::trace!(index = block.index(), block_type = %block.block_type(), "lowering block");
    match block {
        Block::FunctionCall(b) => Ok(lower_function_call(b, &state.variables, &state.scope)),
        Block::If(b) => lower_if(b, state),
        Block::While(b) => lower_while(b, state),
        Block::ElseIf(_) | Block::Else(_) => {
            Err(GenError::unknown_kind(block.index(), block.block_type()))
        }
    }
}

/// `const <returnVariable> = [await] <name>(<args>)`
pub fn lower_function_call(
    block: &FunctionCallBlock,
    variables: &[VariableInfoWithIndex],
    scope: &[VariableInfo],
) -> Stmt {
    let args = resolve_arguments(&block.function_info, variables, scope, block.index);
    Stmt::Const {
        name: block.return_variable.name.clone(),
        value: call_expression(&block.function_info.name, args, block.is_async),
    }
}

/// The call expression for `function_info` as it would appear at `index`,
/// awaited when its return type is async-wrapped.
pub fn create_function_call(
    function_info: &FunctionInfo,
    variables: &[VariableInfoWithIndex],
    scope: &[VariableInfo],
    index: usize,
) -> Expr {
    let args = resolve_arguments(function_info, variables, scope, index);
    call_expression(
        &function_info.name,
        args,
        is_async_type(function_info.return_type.as_deref()),
    )
}

pub fn lower_if(block: &IfBlock, state: &CodeGeneratorState) -> Result<Stmt, GenError> {
    let then_body = lower_blocks(&block.then_blocks, state)?;

    let else_branch = if !block.else_if_blocks.is_empty() {
        Some(else_if_chain(&block.else_if_blocks, block.else_block.as_ref(), state)?)
    } else if let Some(else_block) = &block.else_block {
        Some(ElseBranch::Else(branch_body(else_block.comment.as_deref(), &else_block.blocks, state)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition: block.condition.clone(),
        then_body,
        else_branch,
    }))
}

pub fn lower_while(block: &WhileLoopBlock, state: &CodeGeneratorState) -> Result<Stmt, GenError> {
    Ok(Stmt::While {
        condition: block.condition.clone(),
        body: lower_blocks(&block.loop_blocks, state)?,
    })
}

// Built right to left: the final else hangs off the last else-if, and each
// else-if becomes the alternative of the one before it.
fn else_if_chain(
    branches: &[ElseIfBlock],
    final_else: Option<&ElseBlock>,
    state: &CodeGeneratorState,
) -> Result<ElseBranch, GenError> {
    let mut alternative = match final_else {
        Some(else_block) => Some(ElseBranch::Else(branch_body(
            else_block.comment.as_deref(),
            &else_block.blocks,
            state,
        )?)),
        None => None,
    };
    for branch in branches.iter().rev() {
        let stmt = IfStmt {
            condition: branch.condition.clone(),
            then_body: branch_body(branch.comment.as_deref(), &branch.blocks, state)?,
            else_branch: alternative.take(),
        };
        alternative = Some(ElseBranch::ElseIf(Box::new(stmt)));
    }
    // branches is non-empty, so the loop ran at least once.
    Ok(alternative.unwrap_or(ElseBranch::Else(Vec::new())))
}

fn branch_body(
    comment: Option<&str>,
    blocks: &[Block],
    state: &CodeGeneratorState,
) -> Result<Vec<Stmt>, GenError> {
    let mut body = Vec::with_capacity(blocks.len() + 1);
    if let Some(comment) = comment {
        body.push(Stmt::Comment(comment.to_string()));
    }
    body.extend(lower_blocks(blocks, state)?);
    Ok(body)
}

/// One argument per declared parameter: the most recent earlier variable of
/// the parameter's type, then the last scope name of that type, then the
/// parameter's own name.
fn resolve_arguments(
    function_info: &FunctionInfo,
    variables: &[VariableInfoWithIndex],
    scope: &[VariableInfo],
    index: usize,
) -> Vec<Expr> {
    let Some(parameters) = &function_info.parameters else {
        return Vec::new();
    };
    parameters
        .iter()
        .map(|param| {
            let bound = find_variable_by_type(variables, &param.ty, true, Some(index))
                .map(|var| &var.name)
                .or_else(|| scope.iter().rev().find(|v| v.ty == param.ty).map(|v| &v.name));
            match bound {
                Some(name) => Expr::Ident(name.clone()),
                None => {
                    tracing::debug!(
                        function = %function_info.name,
                        parameter = %param.name,
                        ty = %param.ty,
                        "no variable of parameter type in reach; using parameter name"
                    );
                    Expr::Ident(param.name.clone())
                }
            }
        })
        .collect()
}

fn call_expression(callee: &str, args: Vec<Expr>, is_async: bool) -> Expr {
    let call = Expr::Call { callee: callee.to_string(), args };
    if is_async { Expr::Await(Box::new(call)) } else { call }
}
