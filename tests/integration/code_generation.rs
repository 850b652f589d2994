mod common;
use blockgen::{
    Block, ElseBlock, ElseIfBlock, GenError, GeneratorConfig, create_function_call_block,
    create_if_block, create_while_block, generate_code, generate_code_from_blocks,
};
use common::{counter_fn, counter_state, func, new_state, render};

#[test]
fn while_with_nested_if_and_calls_from_stale_state() {
    // Children built against one shared state, then assembled by hand.
    let state = counter_state();
    let update = create_function_call_block(&counter_fn("updateCounter", "number"), &state, None).unwrap();
    let check = create_function_call_block(&counter_fn("checkCondition", "boolean"), &state, None).unwrap();
    let even = create_function_call_block(&counter_fn("processEven", "void"), &state, None).unwrap();
    let odd = create_function_call_block(&counter_fn("processOdd", "void"), &state, None).unwrap();
    let if_block = create_if_block(
        "checkcondition",
        vec![Block::FunctionCall(even.block)],
        &state,
        vec![],
        Some(ElseBlock::new(vec![Block::FunctionCall(odd.block)])),
        None,
    )
    .unwrap();
    let while_block = create_while_block(
        "counter < 10",
        vec![
            Block::FunctionCall(update.block),
            Block::FunctionCall(check.block),
            Block::If(if_block.block),
        ],
        &state,
        None,
    )
    .unwrap();

    let code = generate_code_from_blocks(&[Block::While(while_block.block)], &GeneratorConfig::default()).unwrap();
    assert_eq!(
        code,
        "function generatedFunction() {
    while (counter < 10) {
        const updatecounter = updateCounter(counter);
        const checkcondition = checkCondition(counter);
        if (checkcondition) {
            const processeven = processEven(counter);
        } else {
            const processodd = processOdd(counter);
        }
    }
}
"
    );
}

#[test]
fn while_with_nested_if_and_calls_threaded() {
    let while_result = create_while_block("counter < 10", vec![], &counter_state(), None).unwrap();
    let body = Some(while_result.block.index);
    let update = create_function_call_block(&counter_fn("updateCounter", "number"), &while_result.state, body).unwrap();
    let check = create_function_call_block(&counter_fn("checkCondition", "boolean"), &update.state, body).unwrap();
    let if_result = create_if_block(
        "checkcondition",
        vec![],
        &check.state,
        vec![],
        Some(ElseBlock::new(vec![])),
        body,
    )
    .unwrap();
    let even = create_function_call_block(
        &counter_fn("processEven", "void"),
        &if_result.state,
        Some(if_result.block.index),
    )
    .unwrap();
    let odd = create_function_call_block(
        &counter_fn("processOdd", "void"),
        &even.state,
        Some(if_result.block.else_block.as_ref().unwrap().index),
    )
    .unwrap();

    // Later calls pick up the most recent earlier `number` variable.
    assert_eq!(
        render(&odd.state),
        "function generatedFunction() {
    while (counter < 10) {
        const updatecounter = updateCounter(counter);
        const checkcondition = checkCondition(updatecounter);
        if (checkcondition) {
            const processeven = processEven(updatecounter);
        } else {
            const processodd = processOdd(updatecounter);
        }
    }
}
"
    );
}

#[test]
fn async_call_renders_await_and_async_function() {
    let info = func("fetchData", "Promise<string>").with_parameter("url", "string");
    let fetch = create_function_call_block(&info, &new_state(), None).unwrap();
    let parse = create_function_call_block(
        &func("parseBody", "number").with_parameter("body", "string"),
        &fetch.state,
        None,
    )
    .unwrap();

    assert_eq!(fetch.block.return_variable.ty, "string");
    assert_eq!(
        render(&parse.state),
        "async function generatedFunction() {
    const fetchdata = await fetchData(url);
    const parsebody = parseBody(fetchdata);
}
"
    );
}

#[test]
fn else_if_chain_renders_in_order() {
    let if_result = create_if_block(
        "x > 0",
        vec![],
        &new_state(),
        vec![ElseIfBlock::new("x < 0", vec![]), ElseIfBlock::new("x == 0", vec![])],
        Some(ElseBlock::new(vec![])),
        None,
    )
    .unwrap();
    let pos = create_function_call_block(&func("positive", "void"), &if_result.state, Some(0)).unwrap();
    let neg = create_function_call_block(&func("negative", "void"), &pos.state, Some(1)).unwrap();
    let zero = create_function_call_block(&func("zero", "void"), &neg.state, Some(2)).unwrap();
    let nan = create_function_call_block(&func("notANumber", "void"), &zero.state, Some(3)).unwrap();

    assert_eq!(
        render(&nan.state),
        "function generatedFunction() {
    if (x > 0) {
        const positive = positive();
    } else if (x < 0) {
        const negative = negative();
    } else if (x == 0) {
        const zero = zero();
    } else {
        const notanumber = notANumber();
    }
}
"
    );
}

#[test]
fn else_if_without_else() {
    let if_result = create_if_block("a", vec![], &new_state(), vec![ElseIfBlock::new("b", vec![])], None, None).unwrap();
    assert_eq!(
        render(&if_result.state),
        "function generatedFunction() {
    if (a) {
    } else if (b) {
    }
}
"
    );
}

#[test]
fn repeated_function_names_get_suffixes() {
    let info = func("name", "string");
    let first = create_function_call_block(&info, &new_state(), None).unwrap();
    let second = create_function_call_block(&info, &first.state, None).unwrap();
    assert_eq!(
        render(&second.state),
        "function generatedFunction() {
    const name = name();
    const name2 = name();
}
"
    );
}

#[test]
fn comments_precede_their_statements() {
    let save = create_function_call_block(&func("save", "void"), &new_state(), None)
        .unwrap()
        .with_comment("persist the record")
        .unwrap();
    assert_eq!(save.block.comment.as_deref(), Some("persist the record"));
    assert_eq!(
        render(&save.state),
        "function generatedFunction() {
    // persist the record
    const save = save();
}
"
    );
}

#[test]
fn custom_config_changes_layout() {
    let config = GeneratorConfig::from_toml_str(
        "[output]\nfunction_name = \"main\"\nindent_width = 2\nsemicolons = false\n",
        std::path::Path::new("blockgen.toml"),
    )
    .unwrap();
    let loop_result = create_while_block("running", vec![], &new_state(), None).unwrap();
    let tick = create_function_call_block(&func("tick", "void"), &loop_result.state, Some(0)).unwrap();
    let code = generate_code(&tick.state.blocks, &tick.state, &config).unwrap();
    assert_eq!(code, "function main() {\n  while (running) {\n    const tick = tick()\n  }\n}\n");
}

#[test]
fn detached_branch_in_statement_position_aborts() {
    let state = blockgen::CodeGeneratorState::from_blocks(vec![Block::ElseIf(ElseIfBlock::new("lost", vec![]))]);
    let err = generate_code(&state.blocks, &state, &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, GenError::UnknownBlockKind { block_type: blockgen::BlockType::ElseIf, .. }));
}

#[test]
fn comments_on_nested_blocks_reach_the_state() {
    let loop_result = create_while_block("running", vec![], &new_state(), None)
        .unwrap()
        .with_comment("main loop")
        .unwrap();
    let check = create_if_block("done", vec![], &loop_result.state, vec![], None, Some(0))
        .unwrap()
        .with_comment("stop when finished")
        .unwrap();
    let Block::While(outer) = &check.state.blocks[0] else { panic!("expected while block") };
    assert_eq!(outer.comment.as_deref(), Some("main loop"));
    assert_eq!(outer.loop_blocks, vec![Block::If(check.block.clone())]);
    assert_eq!(
        render(&check.state),
        "function generatedFunction() {
    // main loop
    while (running) {
        // stop when finished
        if (done) {
        }
    }
}
"
    );
}
