mod common;
use blockgen::{Block, GenError, create_function_call_block, create_while_block};
use common::{func, kinds, new_state};

#[test]
fn simple_while_after_a_call() {
    let call = create_function_call_block(&func("dummy", "void"), &new_state(), None).unwrap();
    let result = create_while_block("x < 10", vec![], &call.state, None).unwrap();

    assert_eq!(result.block.condition, "x < 10");
    assert!(result.block.loop_blocks.is_empty());
    assert_eq!(result.block.index, 1);
    assert_eq!(kinds(&result.state.blocks), vec![blockgen::BlockType::FunctionCall, blockgen::BlockType::While]);
}

#[test]
fn nested_while() {
    let call = create_function_call_block(&func("dummy", "void"), &new_state(), None).unwrap();
    let outer = create_while_block("x < 10", vec![], &call.state, None).unwrap();
    let inner = create_while_block("y < 5", vec![], &outer.state, Some(outer.block.index)).unwrap();
    let body = create_function_call_block(&func("step", "void"), &inner.state, Some(inner.block.index)).unwrap();

    assert_eq!(inner.block.index, 2);
    assert_eq!(body.block.index, 3);

    let Block::While(outer_now) = &body.state.blocks[1] else { panic!("expected while") };
    let Block::While(inner_now) = &outer_now.loop_blocks[0] else { panic!("expected inner while") };
    assert_eq!(inner_now.condition, "y < 5");
    assert_eq!(inner_now.loop_blocks, vec![Block::FunctionCall(body.block.clone())]);
}

#[test]
fn while_keeps_state_flags() {
    let call = create_function_call_block(&func("fetch", "Promise<boolean>"), &new_state(), None).unwrap();
    let result = create_while_block("fetch", vec![], &call.state, None).unwrap();
    assert!(result.state.is_async);
    assert_eq!(result.state.variables.len(), 1);
}

#[test]
fn missing_target_reports_index() {
    let err = create_while_block("x", vec![], &new_state(), Some(7)).unwrap_err();
    assert!(matches!(err, GenError::NestTargetNotFound { index: 7 }));
    assert_eq!(err.to_string(), "nest target 7 does not exist in the current block forest");
}
