pub mod ast;
pub mod lower;

use crate::blocks::{Block, CodeGeneratorState};
use crate::config::GeneratorConfig;
use crate::diagnostics::GenError;
use crate::pretty::render_function;

use ast::FunctionDecl;
use lower::lower_blocks;

/// Lower a top-level block sequence into one function, async iff the session is.
pub fn synthesize(
    blocks: &[Block],
    state: &CodeGeneratorState,
    config: &GeneratorConfig,
) -> Result<FunctionDecl, GenError> {
    let body = lower_blocks(blocks, state)?;
    Ok(FunctionDecl {
        name: config.output.function_name.clone(),
        is_async: state.is_async,
        body,
    })
}

/// Synthesize and render source text.
pub fn generate_code(
    blocks: &[Block],
    state: &CodeGeneratorState,
    config: &GeneratorConfig,
) -> Result<String, GenError> {
    let function = synthesize(blocks, state, config)?;
    Ok(render_function(&function, config))
}

/// Render a bare block forest, deriving the session state from the blocks.
pub fn generate_code_from_blocks(blocks: &[Block], config: &GeneratorConfig) -> Result<String, GenError> {
    let state = CodeGeneratorState::from_blocks(blocks.to_vec());
    generate_code(&state.blocks, &state, config)
}
