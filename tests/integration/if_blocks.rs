mod common;
use blockgen::{
    Block, BlockType, ElseBlock, ElseIfBlock, GenError, create_function_call_block, create_if_block,
};
use common::{all_indices, func, new_state};

#[test]
fn simple_if_after_a_call() {
    let call = create_function_call_block(&func("dummy", "void"), &new_state(), None).unwrap();
    let result = create_if_block("x > 0", vec![], &call.state, vec![], None, None).unwrap();

    assert_eq!(result.block.condition, "x > 0");
    assert!(result.block.then_blocks.is_empty());
    assert!(result.block.else_if_blocks.is_empty());
    assert!(result.block.else_block.is_none());
    assert_eq!(result.block.index, 1);
    assert_eq!(result.state.blocks.len(), 2);
    assert_eq!(result.state.blocks[1], Block::If(result.block.clone()));
}

#[test]
fn if_else_if_else_indices() {
    let result = create_if_block(
        "x > 0",
        vec![],
        &new_state(),
        vec![ElseIfBlock::new("x < 0", vec![])],
        Some(ElseBlock::new(vec![])),
        None,
    )
    .unwrap();

    assert_eq!(result.block.index, 0);
    assert_eq!(result.block.else_if_blocks[0].index, 1);
    assert_eq!(result.block.else_if_blocks[0].condition, "x < 0");
    assert_eq!(result.block.else_block.as_ref().unwrap().index, 2);

    let next = create_function_call_block(&func("after", "void"), &result.state, None).unwrap();
    assert_eq!(next.block.index, 3);
}

#[test]
fn caller_supplied_branch_index_is_replaced() {
    let mut branch = ElseIfBlock::new("retry", vec![]);
    branch.index = 99;
    let result = create_if_block("ok", vec![], &new_state(), vec![branch], None, None).unwrap();
    assert_eq!(result.block.else_if_blocks[0].index, 1);
}

#[test]
fn nested_if_inside_if() {
    let outer = create_if_block("x > 0", vec![], &new_state(), vec![], None, None).unwrap();
    let inner = create_if_block(
        "y > 0",
        vec![],
        &outer.state,
        vec![ElseIfBlock::new("y < 0", vec![])],
        Some(ElseBlock::new(vec![])),
        Some(outer.block.index),
    )
    .unwrap();

    assert_eq!(inner.block.index, 1);
    assert_eq!(inner.state.blocks.len(), 1);
    let Block::If(outer_now) = &inner.state.blocks[0] else { panic!("expected if") };
    assert_eq!(outer_now.then_blocks, vec![Block::If(inner.block.clone())]);
    assert_eq!(all_indices(&inner.state.blocks), vec![0, 1, 2, 3]);
}

#[test]
fn nesting_into_else_if_branch() {
    let outer = create_if_block(
        "a",
        vec![],
        &new_state(),
        vec![ElseIfBlock::new("b", vec![])],
        None,
        None,
    )
    .unwrap();
    let branch_index = outer.block.else_if_blocks[0].index;
    let nested = create_if_block("c", vec![], &outer.state, vec![], None, Some(branch_index)).unwrap();

    let Block::If(top) = &nested.state.blocks[0] else { panic!("expected if") };
    assert!(top.then_blocks.is_empty());
    assert_eq!(top.else_if_blocks[0].blocks, vec![Block::If(nested.block.clone())]);
}

#[test]
fn if_leaves_variables_alone() {
    let call = create_function_call_block(&func("load", "Promise<number>"), &new_state(), None).unwrap();
    let result = create_if_block("load > 0", vec![], &call.state, vec![], None, None).unwrap();
    assert_eq!(result.state.variables, call.state.variables);
    assert!(result.state.is_async);
}

#[test]
fn nesting_into_call_block_fails() {
    let call = create_function_call_block(&func("f", "void"), &new_state(), None).unwrap();
    let err = create_if_block("x", vec![], &call.state, vec![], None, Some(0)).unwrap_err();
    assert!(matches!(
        err,
        GenError::UnsupportedNestingTarget { index: 0, block_type: BlockType::FunctionCall }
    ));
}

#[test]
fn prebuilt_then_blocks_are_kept() {
    let call = create_function_call_block(&func("inner", "void"), &new_state(), None).unwrap();
    let then_blocks = vec![Block::FunctionCall(call.block.clone())];
    let result = create_if_block("x", then_blocks.clone(), &new_state(), vec![], None, None).unwrap();
    assert_eq!(result.block.then_blocks, then_blocks);
    assert_eq!(result.state.block_count(), 2);
}
